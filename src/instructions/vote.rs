//! Vote program instructions.
//!
//! Only account initialization is rendered; the remaining kinds in the
//! enumeration are rejected as unsupported.

use crate::errors::{DecodeError, DecodeResult};
use crate::message::{Instruction, MessageHeader};
use crate::parser::{Parser, Pubkey};
use crate::summary::{SummaryValue, TransactionSummary};

/// Vote program instruction kinds, in wire discriminant order (u32).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteInstructionKind {
    Initialize,
    Authorize,
    Vote,
    Withdraw,
    UpdateNode,
}

fn decode_kind(parser: &mut Parser<'_>) -> DecodeResult<VoteInstructionKind> {
    let discriminant = parser.read_u32()?;
    match discriminant {
        0 => Ok(VoteInstructionKind::Initialize),
        1 => Ok(VoteInstructionKind::Authorize),
        2 => Ok(VoteInstructionKind::Vote),
        3 => Ok(VoteInstructionKind::Withdraw),
        4 => Ok(VoteInstructionKind::UpdateNode),
        other => Err(DecodeError::UnknownDiscriminant(other)),
    }
}

/// Payload of a vote-account initialization.
#[derive(Debug)]
pub struct VoteInitData<'a> {
    pub node: &'a Pubkey,
    pub vote_authority: &'a Pubkey,
    pub withdraw_authority: &'a Pubkey,
    pub commission: u8,
}

/// Accounts: [vote account, (skip: rent sysvar)].
#[derive(Debug)]
pub struct InitializeInfo<'a> {
    pub account: &'a Pubkey,
    pub vote_init: VoteInitData<'a>,
}

/// Decoded vote-program instruction.
#[derive(Debug)]
pub enum VoteInfo<'a> {
    Initialize(InitializeInfo<'a>),
}

/// Try to decode `instruction` as a vote-program instruction.
pub fn decode<'a>(
    instruction: &Instruction<'a>,
    header: &MessageHeader<'a>,
) -> DecodeResult<VoteInfo<'a>> {
    let mut parser = Parser::new(instruction.data);
    let kind = decode_kind(&mut parser)?;
    match kind {
        VoteInstructionKind::Initialize => {
            let mut accounts = instruction.accounts(header);
            let account = accounts.next_key()?;
            accounts.skip()?; // rent sysvar
            let node = parser.read_pubkey()?;
            let vote_authority = parser.read_pubkey()?;
            let withdraw_authority = parser.read_pubkey()?;
            let commission = parser.read_u8()?;
            Ok(VoteInfo::Initialize(InitializeInfo {
                account,
                vote_init: VoteInitData {
                    node,
                    vote_authority,
                    withdraw_authority,
                    commission,
                },
            }))
        }
        _ => Err(DecodeError::UnsupportedInstruction(kind as u32)),
    }
}

/// Write the summary lines for a decoded vote instruction.
pub fn write_summary(
    info: &VoteInfo<'_>,
    _header: &MessageHeader<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    match info {
        VoteInfo::Initialize(initialize) => {
            let init = &initialize.vote_init;
            summary.primary("Init. vote acct", SummaryValue::Pubkey(initialize.account))?;
            summary.general("Node", SummaryValue::Pubkey(init.node))?;
            if init.vote_authority == init.withdraw_authority {
                summary.general("New authority", SummaryValue::Pubkey(init.vote_authority))?;
            } else {
                summary.general("New vote auth", SummaryValue::Pubkey(init.vote_authority))?;
                summary.general(
                    "New withdraw auth",
                    SummaryValue::Pubkey(init.withdraw_authority),
                )?;
            }
            summary.general("Commission", SummaryValue::U64(u64::from(init.commission)))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PUBKEY_SIZE;

    fn build_header(bytes: &mut Vec<u8>, count: u8) -> Vec<[u8; PUBKEY_SIZE]> {
        let keys: Vec<[u8; PUBKEY_SIZE]> = (1..=count).map(|i| [i; PUBKEY_SIZE]).collect();
        bytes.extend_from_slice(&[1, 0, 0, count]);
        for key in &keys {
            bytes.extend_from_slice(key);
        }
        bytes.extend_from_slice(&[9u8; 32]);
        bytes.push(1);
        keys
    }

    #[test]
    fn test_decode_initialize() {
        let mut bytes = Vec::new();
        let keys = build_header(&mut bytes, 2);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let node = [31u8; PUBKEY_SIZE];
        let vote_authority = [32u8; PUBKEY_SIZE];
        let withdraw_authority = [33u8; PUBKEY_SIZE];
        let mut data = 0u32.to_le_bytes().to_vec();
        data.extend_from_slice(&node);
        data.extend_from_slice(&vote_authority);
        data.extend_from_slice(&withdraw_authority);
        data.push(5); // commission

        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1],
            data: &data,
        };
        let VoteInfo::Initialize(info) = decode(&instruction, &header).unwrap();
        assert_eq!(info.account, &keys[0]);
        assert_eq!(info.vote_init.node, &node);
        assert_eq!(info.vote_init.commission, 5);
    }

    #[test]
    fn test_other_kinds_rejected() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 2);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = 2u32.to_le_bytes().to_vec(); // Vote
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1],
            data: &data,
        };
        assert_eq!(
            decode(&instruction, &header).unwrap_err(),
            DecodeError::UnsupportedInstruction(2)
        );

        let data = 5u32.to_le_bytes().to_vec();
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1],
            data: &data,
        };
        assert_eq!(
            decode(&instruction, &header).unwrap_err(),
            DecodeError::UnknownDiscriminant(5)
        );
    }
}
