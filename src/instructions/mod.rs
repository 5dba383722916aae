//! Per-program instruction decoders and the dispatcher that tries them.
//!
//! Acceptance is purely structural: a decoder wins when the discriminant is
//! one it renders and the account list and payload fit its layout. The
//! instruction's program-id index is not resolved against a known program
//! key, so a message naming an unrelated program can still match a known
//! shape; see DESIGN.md for the status of that gap.

pub mod stake;
pub mod system;
pub mod token;
pub mod vote;

use log::debug;

use crate::errors::{DecodeError, DecodeResult};
use crate::message::{Instruction, MessageHeader};
use crate::summary::TransactionSummary;

/// A decoded instruction from any of the known programs.
#[derive(Debug)]
pub enum InstructionInfo<'a> {
    System(system::SystemInfo<'a>),
    Stake(stake::StakeInfo<'a>),
    Token(token::TokenInfo<'a>),
    Vote(vote::VoteInfo<'a>),
}

/// Try each known program's decoder against the raw instruction record, in
/// fixed priority order. The first structural fit wins; if none fit the
/// instruction is unrecognized and the caller degrades to the hash display.
pub fn decode_instruction<'a>(
    instruction: &Instruction<'a>,
    header: &MessageHeader<'a>,
) -> DecodeResult<InstructionInfo<'a>> {
    match system::decode(instruction, header) {
        Ok(info) => return Ok(InstructionInfo::System(info)),
        Err(err) => debug!("not a system instruction: {err}"),
    }
    match stake::decode(instruction, header) {
        Ok(info) => return Ok(InstructionInfo::Stake(info)),
        Err(err) => debug!("not a stake instruction: {err}"),
    }
    match token::decode(instruction, header) {
        Ok(info) => return Ok(InstructionInfo::Token(info)),
        Err(err) => debug!("not a token instruction: {err}"),
    }
    match vote::decode(instruction, header) {
        Ok(info) => return Ok(InstructionInfo::Vote(info)),
        Err(err) => debug!("not a vote instruction: {err}"),
    }
    Err(DecodeError::UnrecognizedInstruction)
}

/// Write the summary lines for whichever program decoded the instruction.
pub fn write_summary(
    info: &InstructionInfo<'_>,
    header: &MessageHeader<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    match info {
        InstructionInfo::System(info) => system::write_summary(info, header, summary),
        InstructionInfo::Stake(info) => stake::write_summary(info, header, summary),
        InstructionInfo::Token(info) => token::write_summary(info, header, summary),
        InstructionInfo::Vote(info) => vote::write_summary(info, header, summary),
    }
}
