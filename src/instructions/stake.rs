//! Stake program instructions.
//!
//! Initialize, authorize, delegate, withdraw, and deactivate are rendered.
//! Split and set-lockup sit in the enumeration but are rejected as
//! unsupported; anything outside the enumeration fails as unknown. Sysvar
//! accounts (clock, stake history, config, rent) occupy fixed positions in
//! each layout and are skipped without being resolved.

use crate::constants::NATIVE_DECIMALS;
use crate::errors::{DecodeError, DecodeResult};
use crate::message::{Instruction, MessageHeader};
use crate::parser::{Parser, Pubkey};
use crate::summary::{SummaryValue, TransactionSummary};

/// Stake program instruction kinds, in wire discriminant order (u32).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeInstructionKind {
    Initialize,
    Authorize,
    DelegateStake,
    Split,
    Withdraw,
    Deactivate,
    SetLockup,
}

fn decode_kind(parser: &mut Parser<'_>) -> DecodeResult<StakeInstructionKind> {
    let discriminant = parser.read_u32()?;
    match discriminant {
        0 => Ok(StakeInstructionKind::Initialize),
        1 => Ok(StakeInstructionKind::Authorize),
        2 => Ok(StakeInstructionKind::DelegateStake),
        3 => Ok(StakeInstructionKind::Split),
        4 => Ok(StakeInstructionKind::Withdraw),
        5 => Ok(StakeInstructionKind::Deactivate),
        6 => Ok(StakeInstructionKind::SetLockup),
        other => Err(DecodeError::UnknownDiscriminant(other)),
    }
}

/// Which authority an authorize instruction replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeAuthorize {
    Staker,
    Withdrawer,
}

fn decode_authorize(parser: &mut Parser<'_>) -> DecodeResult<StakeAuthorize> {
    match parser.read_u32()? {
        0 => Ok(StakeAuthorize::Staker),
        1 => Ok(StakeAuthorize::Withdrawer),
        other => Err(DecodeError::UnknownDiscriminant(other)),
    }
}

/// Lockup constraints carried by an initialize payload.
#[derive(Debug)]
pub struct Lockup<'a> {
    pub unix_timestamp: i64,
    pub epoch: u64,
    pub custodian: &'a Pubkey,
}

/// Accounts: [stake account, (skip: rent sysvar)].
#[derive(Debug)]
pub struct InitializeInfo<'a> {
    pub account: &'a Pubkey,
    pub stake_authority: &'a Pubkey,
    pub withdraw_authority: &'a Pubkey,
    pub lockup: Lockup<'a>,
}

/// Accounts: [stake account, (skip: clock sysvar), authority].
#[derive(Debug)]
pub struct AuthorizeInfo<'a> {
    pub account: &'a Pubkey,
    pub authority: &'a Pubkey,
    pub new_authority: &'a Pubkey,
    pub authorize: StakeAuthorize,
}

/// Accounts: [stake account, vote account, (skip: clock sysvar),
/// (skip: stake-history sysvar), (skip: config account), authorized].
#[derive(Debug)]
pub struct DelegateInfo<'a> {
    pub stake_account: &'a Pubkey,
    pub vote_account: &'a Pubkey,
    pub authorized: &'a Pubkey,
}

/// Accounts: [stake account, recipient, (skip: clock sysvar),
/// (skip: stake-history sysvar), authority].
#[derive(Debug)]
pub struct WithdrawInfo<'a> {
    pub account: &'a Pubkey,
    pub to: &'a Pubkey,
    pub authority: &'a Pubkey,
    pub lamports: u64,
}

/// Accounts: [stake account, (skip: clock sysvar), authority].
#[derive(Debug)]
pub struct DeactivateInfo<'a> {
    pub account: &'a Pubkey,
    pub authority: &'a Pubkey,
}

/// Decoded stake-program instruction.
#[derive(Debug)]
pub enum StakeInfo<'a> {
    Initialize(InitializeInfo<'a>),
    Authorize(AuthorizeInfo<'a>),
    Delegate(DelegateInfo<'a>),
    Withdraw(WithdrawInfo<'a>),
    Deactivate(DeactivateInfo<'a>),
}

/// Try to decode `instruction` as a stake-program instruction.
pub fn decode<'a>(
    instruction: &Instruction<'a>,
    header: &MessageHeader<'a>,
) -> DecodeResult<StakeInfo<'a>> {
    let mut parser = Parser::new(instruction.data);
    let kind = decode_kind(&mut parser)?;
    let mut accounts = instruction.accounts(header);
    match kind {
        StakeInstructionKind::Initialize => {
            let account = accounts.next_key()?;
            accounts.skip()?; // rent sysvar
            let stake_authority = parser.read_pubkey()?;
            let withdraw_authority = parser.read_pubkey()?;
            let unix_timestamp = parser.read_i64()?;
            let epoch = parser.read_u64()?;
            let custodian = parser.read_pubkey()?;
            Ok(StakeInfo::Initialize(InitializeInfo {
                account,
                stake_authority,
                withdraw_authority,
                lockup: Lockup {
                    unix_timestamp,
                    epoch,
                    custodian,
                },
            }))
        }
        StakeInstructionKind::Authorize => {
            let account = accounts.next_key()?;
            accounts.skip()?; // clock sysvar
            let authority = accounts.next_key()?;
            let new_authority = parser.read_pubkey()?;
            let authorize = decode_authorize(&mut parser)?;
            Ok(StakeInfo::Authorize(AuthorizeInfo {
                account,
                authority,
                new_authority,
                authorize,
            }))
        }
        StakeInstructionKind::DelegateStake => {
            let stake_account = accounts.next_key()?;
            let vote_account = accounts.next_key()?;
            accounts.skip()?; // clock sysvar
            accounts.skip()?; // stake history sysvar
            accounts.skip()?; // config account
            let authorized = accounts.next_key()?;
            Ok(StakeInfo::Delegate(DelegateInfo {
                stake_account,
                vote_account,
                authorized,
            }))
        }
        StakeInstructionKind::Withdraw => {
            let account = accounts.next_key()?;
            let to = accounts.next_key()?;
            accounts.skip()?; // clock sysvar
            accounts.skip()?; // stake history sysvar
            let authority = accounts.next_key()?;
            let lamports = parser.read_u64()?;
            Ok(StakeInfo::Withdraw(WithdrawInfo {
                account,
                to,
                authority,
                lamports,
            }))
        }
        StakeInstructionKind::Deactivate => {
            let account = accounts.next_key()?;
            accounts.skip()?; // clock sysvar
            let authority = accounts.next_key()?;
            Ok(StakeInfo::Deactivate(DeactivateInfo { account, authority }))
        }
        StakeInstructionKind::Split | StakeInstructionKind::SetLockup => {
            Err(DecodeError::UnsupportedInstruction(kind as u32))
        }
    }
}

fn write_initialize_summary(
    primary_title: &'static str,
    info: &InitializeInfo<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    summary.primary(primary_title, SummaryValue::Pubkey(info.account))?;

    if info.stake_authority == info.withdraw_authority {
        summary.general("New authority", SummaryValue::Pubkey(info.stake_authority))?;
    } else {
        summary.general("New stake auth", SummaryValue::Pubkey(info.stake_authority))?;
        summary.general(
            "New withdraw auth",
            SummaryValue::Pubkey(info.withdraw_authority),
        )?;
    }

    summary.general("Lockup time", SummaryValue::I64(info.lockup.unix_timestamp))?;
    summary.general("Lockup epoch", SummaryValue::U64(info.lockup.epoch))?;
    summary.general("Lockup custodian", SummaryValue::Pubkey(info.lockup.custodian))?;
    Ok(())
}

/// Write the summary lines for a decoded stake instruction.
pub fn write_summary(
    info: &StakeInfo<'_>,
    header: &MessageHeader<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    match info {
        StakeInfo::Initialize(initialize) => {
            write_initialize_summary("Init. stake acct", initialize, summary)
        }
        StakeInfo::Authorize(authorize) => {
            summary.primary("Set stake auth.", SummaryValue::Pubkey(authorize.account))?;
            let new_authority_title = match authorize.authorize {
                StakeAuthorize::Staker => "New stake auth.",
                StakeAuthorize::Withdrawer => "New w/d auth.",
            };
            summary.general(new_authority_title, SummaryValue::Pubkey(authorize.new_authority))?;
            summary.general("Authorized by", SummaryValue::Pubkey(authorize.authority))?;
            Ok(())
        }
        StakeInfo::Delegate(delegate) => {
            summary.primary("Delegate from", SummaryValue::Pubkey(delegate.stake_account))?;
            summary.general("Authorized by", SummaryValue::Pubkey(delegate.authorized))?;
            summary.general("Vote account", SummaryValue::Pubkey(delegate.vote_account))?;
            if header.accounts.fee_payer()? == delegate.authorized {
                summary.fee_payer(SummaryValue::String("authorizer"))?;
            }
            Ok(())
        }
        StakeInfo::Withdraw(withdraw) => {
            summary.primary(
                "Stake withdraw",
                SummaryValue::Amount {
                    value: withdraw.lamports,
                    decimals: NATIVE_DECIMALS,
                    symbol: "SOL",
                },
            )?;
            summary.general("From", SummaryValue::Pubkey(withdraw.account))?;
            summary.general("To", SummaryValue::Pubkey(withdraw.to))?;
            summary.general("Authorized by", SummaryValue::Pubkey(withdraw.authority))?;
            Ok(())
        }
        StakeInfo::Deactivate(deactivate) => {
            summary.primary("Deactivate stake", SummaryValue::Pubkey(deactivate.account))?;
            summary.general("Authorized by", SummaryValue::Pubkey(deactivate.authority))?;
            Ok(())
        }
    }
}
