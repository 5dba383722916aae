//! Native (system) program instructions.
//!
//! Only the transfer kind is rendered; every other kind in the program's
//! enumeration is recognized and explicitly rejected, and discriminants
//! outside the enumeration fail outright.

use crate::constants::NATIVE_DECIMALS;
use crate::errors::{DecodeError, DecodeResult};
use crate::message::{Instruction, MessageHeader};
use crate::parser::{Parser, Pubkey};
use crate::summary::{SummaryValue, TransactionSummary};

/// System program instruction kinds, in wire discriminant order (u32).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemInstructionKind {
    CreateAccount,
    Assign,
    Transfer,
    CreateAccountWithSeed,
    AdvanceNonceAccount,
    WithdrawNonceAccount,
    InitializeNonceAccount,
    AuthorizeNonceAccount,
    Allocate,
    AllocateWithSeed,
    AssignWithSeed,
}

fn decode_kind(parser: &mut Parser<'_>) -> DecodeResult<SystemInstructionKind> {
    let discriminant = parser.read_u32()?;
    match discriminant {
        0 => Ok(SystemInstructionKind::CreateAccount),
        1 => Ok(SystemInstructionKind::Assign),
        2 => Ok(SystemInstructionKind::Transfer),
        3 => Ok(SystemInstructionKind::CreateAccountWithSeed),
        4 => Ok(SystemInstructionKind::AdvanceNonceAccount),
        5 => Ok(SystemInstructionKind::WithdrawNonceAccount),
        6 => Ok(SystemInstructionKind::InitializeNonceAccount),
        7 => Ok(SystemInstructionKind::AuthorizeNonceAccount),
        8 => Ok(SystemInstructionKind::Allocate),
        9 => Ok(SystemInstructionKind::AllocateWithSeed),
        10 => Ok(SystemInstructionKind::AssignWithSeed),
        other => Err(DecodeError::UnknownDiscriminant(other)),
    }
}

/// A decoded native transfer. Accounts, in order: [from, to].
#[derive(Debug)]
pub struct TransferInfo<'a> {
    pub from: &'a Pubkey,
    pub to: &'a Pubkey,
    pub lamports: u64,
}

/// Decoded system-program instruction.
#[derive(Debug)]
pub enum SystemInfo<'a> {
    Transfer(TransferInfo<'a>),
}

/// Try to decode `instruction` as a system-program instruction.
pub fn decode<'a>(
    instruction: &Instruction<'a>,
    header: &MessageHeader<'a>,
) -> DecodeResult<SystemInfo<'a>> {
    let mut parser = Parser::new(instruction.data);
    let kind = decode_kind(&mut parser)?;
    match kind {
        SystemInstructionKind::Transfer => {
            let lamports = parser.read_u64()?;
            let mut accounts = instruction.accounts(header);
            let from = accounts.next_key()?;
            let to = accounts.next_key()?;
            Ok(SystemInfo::Transfer(TransferInfo { from, to, lamports }))
        }
        _ => Err(DecodeError::UnsupportedInstruction(kind as u32)),
    }
}

/// Write the summary lines for a decoded system instruction.
pub fn write_summary(
    info: &SystemInfo<'_>,
    header: &MessageHeader<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    match info {
        SystemInfo::Transfer(transfer) => {
            summary.primary(
                "Transfer",
                SummaryValue::Amount {
                    value: transfer.lamports,
                    decimals: NATIVE_DECIMALS,
                    symbol: "SOL",
                },
            )?;
            summary.general("Sender", SummaryValue::Pubkey(transfer.from))?;
            summary.general("Recipient", SummaryValue::Pubkey(transfer.to))?;

            let fee_payer = header.accounts.fee_payer()?;
            if fee_payer == transfer.from {
                summary.fee_payer(SummaryValue::String("sender"))?;
            } else if fee_payer == transfer.to {
                summary.fee_payer(SummaryValue::String("recipient"))?;
            }
            Ok(())
        }
    }
}
