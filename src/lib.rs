//! A decoder for Solana wire transaction messages that builds a
//! human-readable approval summary.
//!
//! This crate parses an untrusted message byte stream with bounds-checked,
//! zero-copy reads and renders what the transaction does into a bounded
//! sequence of display items for user approval. Validation is structural and
//! local to the bytes given: no network lookups, no state queries, and any
//! instruction that does not fit a known program's shape is presented only as
//! a hash of the message rather than a guessed interpretation.

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod message;
pub mod parser;
pub mod summary;

use log::{debug, warn};
use sha2::{Digest, Sha256};

use crate::errors::DecodeResult;
use crate::message::{Instruction, MessageHeader};
use crate::parser::{Hash, Parser, Pubkey};
use crate::summary::{SummaryValue, TransactionSummary};

/// Decode one reassembled message and populate `summary` with its approval
/// items.
///
/// The summary is reset first. A message carrying exactly one instruction
/// that fits a known program decodes to that program's item layout; anything
/// else that still parses as a message degrades to the recovered
/// presentation: a primary "Unrecognized" item plus the sha256 of the full
/// raw message. Structurally broken input (short header, truncated
/// instruction record) is an error with no partial result.
pub fn summarize_message(message: &[u8], summary: &mut TransactionSummary) -> DecodeResult<()> {
    summary.reset();

    let mut parser = Parser::new(message);
    let header = MessageHeader::decode(&mut parser)?;
    let fee_payer = header.accounts.fee_payer()?;

    if header.instruction_count == 1 {
        let instruction = Instruction::decode(&mut parser)?;
        match instructions::decode_instruction(&instruction, &header) {
            Ok(info) => {
                instructions::write_summary(&info, &header, summary)?;
                if summary.fee_payer_item().is_none() {
                    summary.fee_payer(SummaryValue::Pubkey(fee_payer))?;
                }
                return Ok(());
            }
            Err(err) => {
                debug!("instruction unrecognized, degrading to hash display: {err}");
            }
        }
    } else {
        warn!(
            "message declares {} instructions, degrading to hash display",
            header.instruction_count
        );
    }

    write_fallback_summary(message, fee_payer, summary)
}

/// The recovered presentation for messages no decoder can render: the user
/// sees the message hash instead of a fabricated interpretation.
fn write_fallback_summary(
    message: &[u8],
    fee_payer: &Pubkey,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    summary.reset();
    let hash = message_hash(message);
    summary.primary("Unrecognized", SummaryValue::String("Transaction"))?;
    summary.general("Message Hash", SummaryValue::Hash(&hash))?;
    summary.fee_payer(SummaryValue::Pubkey(fee_payer))?;
    Ok(())
}

/// sha256 of the full raw message bytes.
pub fn message_hash(message: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(message);
    hasher.finalize().into()
}

/// Version of the message summarizer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
