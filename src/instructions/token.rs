//! Fungible-token program instructions.
//!
//! The ten original kinds are rendered; freeze/thaw and the "checked"
//! variants sit in the enumeration but are rejected as unsupported. Most
//! kinds end in a signer tail: when exactly one account remains it is the
//! sole owner/signer, otherwise the first remaining account is a multisig
//! account and the rest are its signer set, capped at
//! [`TOKEN_MAX_SIGNERS`]. A remaining count of one always means
//! single-signer mode, even when a multisig reading would also be plausible.

use crate::constants::TOKEN_MAX_SIGNERS;
use crate::errors::{DecodeError, DecodeResult};
use crate::message::{AccountsIter, Instruction, MessageHeader};
use crate::parser::{Parser, Pubkey};
use crate::summary::{SummaryValue, TransactionSummary};

/// Token program instruction kinds, in wire discriminant order (u8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenInstructionKind {
    InitializeMint,
    InitializeAccount,
    InitializeMultisig,
    Transfer,
    Approve,
    Revoke,
    SetAuthority,
    MintTo,
    Burn,
    CloseAccount,
    FreezeAccount,
    ThawAccount,
    TransferChecked,
    ApproveChecked,
    MintToChecked,
    BurnChecked,
}

fn decode_kind(parser: &mut Parser<'_>) -> DecodeResult<TokenInstructionKind> {
    let discriminant = parser.read_u8()?;
    let kind = match discriminant {
        0 => TokenInstructionKind::InitializeMint,
        1 => TokenInstructionKind::InitializeAccount,
        2 => TokenInstructionKind::InitializeMultisig,
        3 => TokenInstructionKind::Transfer,
        4 => TokenInstructionKind::Approve,
        5 => TokenInstructionKind::Revoke,
        6 => TokenInstructionKind::SetAuthority,
        7 => TokenInstructionKind::MintTo,
        8 => TokenInstructionKind::Burn,
        9 => TokenInstructionKind::CloseAccount,
        10 => TokenInstructionKind::FreezeAccount,
        11 => TokenInstructionKind::ThawAccount,
        12 => TokenInstructionKind::TransferChecked,
        13 => TokenInstructionKind::ApproveChecked,
        14 => TokenInstructionKind::MintToChecked,
        15 => TokenInstructionKind::BurnChecked,
        other => return Err(DecodeError::UnknownDiscriminant(u32::from(other))),
    };
    match kind {
        TokenInstructionKind::FreezeAccount
        | TokenInstructionKind::ThawAccount
        | TokenInstructionKind::TransferChecked
        | TokenInstructionKind::ApproveChecked
        | TokenInstructionKind::MintToChecked
        | TokenInstructionKind::BurnChecked => {
            Err(DecodeError::UnsupportedInstruction(u32::from(discriminant)))
        }
        _ => Ok(kind),
    }
}

/// Authority role targeted by a set-authority instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityType {
    MintTokens,
    FreezeAccount,
    AccountOwner,
    CloseAccount,
}

fn decode_authority_type(parser: &mut Parser<'_>) -> DecodeResult<AuthorityType> {
    match parser.read_u8()? {
        0 => Ok(AuthorityType::MintTokens),
        1 => Ok(AuthorityType::FreezeAccount),
        2 => Ok(AuthorityType::AccountOwner),
        3 => Ok(AuthorityType::CloseAccount),
        other => Err(DecodeError::UnknownAuthorityType(other)),
    }
}

fn authority_type_label(authority_type: AuthorityType) -> &'static str {
    match authority_type {
        AuthorityType::MintTokens => "Mint tokens",
        AuthorityType::FreezeAccount => "Freeze account",
        AuthorityType::AccountOwner => "Account owner",
        AuthorityType::CloseAccount => "Close account",
    }
}

/// A multisig signer set: the first signer key plus the total count.
#[derive(Debug)]
pub struct Multisigners<'a> {
    pub first: &'a Pubkey,
    pub count: usize,
}

/// The signer tail closing most token instructions.
#[derive(Debug)]
pub enum TokenSigners<'a> {
    Single { signer: &'a Pubkey },
    Multi { account: &'a Pubkey, signers: Multisigners<'a> },
}

fn decode_multisigners<'a>(accounts: &mut AccountsIter<'a, '_>) -> DecodeResult<Multisigners<'a>> {
    let count = accounts.remaining();
    if count > TOKEN_MAX_SIGNERS {
        return Err(DecodeError::TooManySigners(count));
    }
    let first = accounts.next_key()?;
    Ok(Multisigners { first, count })
}

fn decode_signers<'a>(accounts: &mut AccountsIter<'a, '_>) -> DecodeResult<TokenSigners<'a>> {
    match accounts.remaining() {
        0 => Err(DecodeError::MissingSigners),
        // Exactly one remaining account always means single-signer mode.
        1 => Ok(TokenSigners::Single {
            signer: accounts.next_key()?,
        }),
        _ => {
            let account = accounts.next_key()?;
            let signers = decode_multisigners(accounts)?;
            Ok(TokenSigners::Multi { account, signers })
        }
    }
}

#[derive(Debug)]
pub struct InitializeMintInfo<'a> {
    pub mint_account: &'a Pubkey,
    pub mint_authority: &'a Pubkey,
    pub freeze_authority: Option<&'a Pubkey>,
    pub decimals: u8,
}

#[derive(Debug)]
pub struct InitializeAccountInfo<'a> {
    pub token_account: &'a Pubkey,
    pub mint_account: &'a Pubkey,
    pub owner: &'a Pubkey,
}

#[derive(Debug)]
pub struct InitializeMultisigInfo<'a> {
    pub multisig_account: &'a Pubkey,
    pub signers: Multisigners<'a>,
    pub threshold: u8,
}

#[derive(Debug)]
pub struct TransferInfo<'a> {
    pub src_account: &'a Pubkey,
    pub dest_account: &'a Pubkey,
    pub sign: TokenSigners<'a>,
    pub amount: u64,
}

#[derive(Debug)]
pub struct ApproveInfo<'a> {
    pub token_account: &'a Pubkey,
    pub delegate: &'a Pubkey,
    pub sign: TokenSigners<'a>,
    pub amount: u64,
}

#[derive(Debug)]
pub struct RevokeInfo<'a> {
    pub token_account: &'a Pubkey,
    pub sign: TokenSigners<'a>,
}

#[derive(Debug)]
pub struct SetAuthorityInfo<'a> {
    pub account: &'a Pubkey,
    pub authority_type: AuthorityType,
    pub new_authority: Option<&'a Pubkey>,
    pub sign: TokenSigners<'a>,
}

#[derive(Debug)]
pub struct MintToInfo<'a> {
    pub mint_account: &'a Pubkey,
    pub token_account: &'a Pubkey,
    pub sign: TokenSigners<'a>,
    pub amount: u64,
}

#[derive(Debug)]
pub struct BurnInfo<'a> {
    pub token_account: &'a Pubkey,
    pub sign: TokenSigners<'a>,
    pub amount: u64,
}

#[derive(Debug)]
pub struct CloseAccountInfo<'a> {
    pub token_account: &'a Pubkey,
    pub dest_account: &'a Pubkey,
    pub sign: TokenSigners<'a>,
}

/// Decoded token-program instruction.
#[derive(Debug)]
pub enum TokenInfo<'a> {
    InitializeMint(InitializeMintInfo<'a>),
    InitializeAccount(InitializeAccountInfo<'a>),
    InitializeMultisig(InitializeMultisigInfo<'a>),
    Transfer(TransferInfo<'a>),
    Approve(ApproveInfo<'a>),
    Revoke(RevokeInfo<'a>),
    SetAuthority(SetAuthorityInfo<'a>),
    MintTo(MintToInfo<'a>),
    Burn(BurnInfo<'a>),
    CloseAccount(CloseAccountInfo<'a>),
}

/// Try to decode `instruction` as a token-program instruction.
pub fn decode<'a>(
    instruction: &Instruction<'a>,
    header: &MessageHeader<'a>,
) -> DecodeResult<TokenInfo<'a>> {
    let mut parser = Parser::new(instruction.data);
    let kind = decode_kind(&mut parser)?;
    let mut accounts = instruction.accounts(header);
    match kind {
        TokenInstructionKind::InitializeMint => {
            let decimals = parser.read_u8()?;
            let mint_authority = parser.read_pubkey()?;
            let freeze_authority = if parser.read_option()? {
                Some(parser.read_pubkey()?)
            } else {
                None
            };
            let mint_account = accounts.next_key()?;
            Ok(TokenInfo::InitializeMint(InitializeMintInfo {
                mint_account,
                mint_authority,
                freeze_authority,
                decimals,
            }))
        }
        TokenInstructionKind::InitializeAccount => {
            let token_account = accounts.next_key()?;
            let mint_account = accounts.next_key()?;
            let owner = accounts.next_key()?;
            Ok(TokenInfo::InitializeAccount(InitializeAccountInfo {
                token_account,
                mint_account,
                owner,
            }))
        }
        TokenInstructionKind::InitializeMultisig => {
            let threshold = parser.read_u8()?;
            if usize::from(threshold) > TOKEN_MAX_SIGNERS {
                return Err(DecodeError::TooManySigners(usize::from(threshold)));
            }
            let multisig_account = accounts.next_key()?;
            let signers = decode_multisigners(&mut accounts)?;
            Ok(TokenInfo::InitializeMultisig(InitializeMultisigInfo {
                multisig_account,
                signers,
                threshold,
            }))
        }
        TokenInstructionKind::Transfer => {
            let amount = parser.read_u64()?;
            let src_account = accounts.next_key()?;
            let dest_account = accounts.next_key()?;
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::Transfer(TransferInfo {
                src_account,
                dest_account,
                sign,
                amount,
            }))
        }
        TokenInstructionKind::Approve => {
            let amount = parser.read_u64()?;
            let token_account = accounts.next_key()?;
            let delegate = accounts.next_key()?;
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::Approve(ApproveInfo {
                token_account,
                delegate,
                sign,
                amount,
            }))
        }
        TokenInstructionKind::Revoke => {
            let token_account = accounts.next_key()?;
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::Revoke(RevokeInfo { token_account, sign }))
        }
        TokenInstructionKind::SetAuthority => {
            let account = accounts.next_key()?;
            let authority_type = decode_authority_type(&mut parser)?;
            let new_authority = if parser.read_option()? {
                Some(parser.read_pubkey()?)
            } else {
                None
            };
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::SetAuthority(SetAuthorityInfo {
                account,
                authority_type,
                new_authority,
                sign,
            }))
        }
        TokenInstructionKind::MintTo => {
            let amount = parser.read_u64()?;
            let mint_account = accounts.next_key()?;
            let token_account = accounts.next_key()?;
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::MintTo(MintToInfo {
                mint_account,
                token_account,
                sign,
                amount,
            }))
        }
        TokenInstructionKind::Burn => {
            let amount = parser.read_u64()?;
            let token_account = accounts.next_key()?;
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::Burn(BurnInfo {
                token_account,
                sign,
                amount,
            }))
        }
        TokenInstructionKind::CloseAccount => {
            let token_account = accounts.next_key()?;
            let dest_account = accounts.next_key()?;
            let sign = decode_signers(&mut accounts)?;
            Ok(TokenInfo::CloseAccount(CloseAccountInfo {
                token_account,
                dest_account,
                sign,
            }))
        }
        // decode_kind already rejected the unsupported kinds.
        _ => Err(DecodeError::UnrecognizedInstruction),
    }
}

fn write_signers_summary(
    sign: &TokenSigners<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    match sign {
        TokenSigners::Single { signer } => summary.general("Owner", SummaryValue::Pubkey(signer)),
        TokenSigners::Multi { account, signers } => {
            summary.general("Owner", SummaryValue::Pubkey(account))?;
            summary.general("Signers", SummaryValue::U64(signers.count as u64))
        }
    }
}

/// Write the summary lines for a decoded token instruction.
pub fn write_summary(
    info: &TokenInfo<'_>,
    _header: &MessageHeader<'_>,
    summary: &mut TransactionSummary,
) -> DecodeResult<()> {
    match info {
        TokenInfo::InitializeMint(init) => {
            summary.primary("Init token mint", SummaryValue::Pubkey(init.mint_account))?;
            summary.general("Mint authority", SummaryValue::Pubkey(init.mint_authority))?;
            summary.general("Decimals", SummaryValue::U64(u64::from(init.decimals)))?;
            if let Some(freeze_authority) = init.freeze_authority {
                summary.general("Freeze authority", SummaryValue::Pubkey(freeze_authority))?;
            }
            Ok(())
        }
        TokenInfo::InitializeAccount(init) => {
            summary.primary("Init token acct", SummaryValue::Pubkey(init.token_account))?;
            summary.general("Token account owner", SummaryValue::Pubkey(init.owner))?;
            summary.general("Token mint", SummaryValue::Pubkey(init.mint_account))?;
            Ok(())
        }
        TokenInfo::InitializeMultisig(init) => {
            summary.primary(
                "Init token multisig",
                SummaryValue::Pubkey(init.multisig_account),
            )?;
            summary.general(
                "Required signers",
                SummaryValue::MofN(init.threshold, init.signers.count as u8),
            )?;
            Ok(())
        }
        TokenInfo::Transfer(transfer) => {
            summary.primary("Transfer tokens", SummaryValue::U64(transfer.amount))?;
            summary.general("From", SummaryValue::Pubkey(transfer.src_account))?;
            summary.general("To", SummaryValue::Pubkey(transfer.dest_account))?;
            write_signers_summary(&transfer.sign, summary)
        }
        TokenInfo::Approve(approve) => {
            summary.primary("Approve delegate", SummaryValue::Pubkey(approve.delegate))?;
            summary.general("To spend", SummaryValue::U64(approve.amount))?;
            summary.general("From", SummaryValue::Pubkey(approve.token_account))?;
            write_signers_summary(&approve.sign, summary)
        }
        TokenInfo::Revoke(revoke) => {
            summary.primary("Revoke delegate", SummaryValue::Pubkey(revoke.token_account))?;
            write_signers_summary(&revoke.sign, summary)
        }
        TokenInfo::SetAuthority(set_authority) => {
            summary.primary("Set authority", SummaryValue::Pubkey(set_authority.account))?;
            summary.general(
                "Type",
                SummaryValue::String(authority_type_label(set_authority.authority_type)),
            )?;
            match set_authority.new_authority {
                Some(new_authority) => {
                    summary.general("Authority", SummaryValue::Pubkey(new_authority))?
                }
                None => summary.general("Authority", SummaryValue::String("None"))?,
            }
            write_signers_summary(&set_authority.sign, summary)
        }
        TokenInfo::MintTo(mint_to) => {
            summary.primary("Mint tokens", SummaryValue::U64(mint_to.amount))?;
            summary.general("From mint", SummaryValue::Pubkey(mint_to.mint_account))?;
            summary.general("To account", SummaryValue::Pubkey(mint_to.token_account))?;
            write_signers_summary(&mint_to.sign, summary)
        }
        TokenInfo::Burn(burn) => {
            summary.primary("Burn tokens", SummaryValue::U64(burn.amount))?;
            summary.general("From account", SummaryValue::Pubkey(burn.token_account))?;
            write_signers_summary(&burn.sign, summary)
        }
        TokenInfo::CloseAccount(close) => {
            summary.primary("Close token acct", SummaryValue::Pubkey(close.token_account))?;
            summary.general("Withdraw to", SummaryValue::Pubkey(close.dest_account))?;
            write_signers_summary(&close.sign, summary)
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

    fn transfer_data(amount: u64) -> Vec<u8> {
        let mut data = vec![3u8];
        data.extend_from_slice(&amount.to_le_bytes());
        data
    }

    #[test]
    fn test_transfer_single_signer() {
        let mut bytes = Vec::new();
        let keys = build_header(&mut bytes, 3);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = transfer_data(42);
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1, 2],
            data: &data,
        };
        match decode(&instruction, &header).unwrap() {
            TokenInfo::Transfer(info) => {
                assert_eq!(info.amount, 42);
                assert_eq!(info.src_account, &keys[0]);
                assert_eq!(info.dest_account, &keys[1]);
                match info.sign {
                    TokenSigners::Single { signer } => assert_eq!(signer, &keys[2]),
                    TokenSigners::Multi { .. } => panic!("expected single signer"),
                }
            }
            _ => panic!("expected transfer"),
        }
    }

    #[test]
    fn test_transfer_multisig_signers() {
        let mut bytes = Vec::new();
        let keys = build_header(&mut bytes, 6);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = transfer_data(42);
        // src, dest, multisig account, three signers
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1, 2, 3, 4, 5],
            data: &data,
        };
        match decode(&instruction, &header).unwrap() {
            TokenInfo::Transfer(info) => match info.sign {
                TokenSigners::Multi { account, signers } => {
                    assert_eq!(account, &keys[2]);
                    assert_eq!(signers.first, &keys[3]);
                    assert_eq!(signers.count, 3);
                }
                TokenSigners::Single { .. } => panic!("expected multisig"),
            },
            _ => panic!("expected transfer"),
        }
    }

    #[test]
    fn test_transfer_signer_cap_is_hard_failure() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 15);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = transfer_data(42);
        // src, dest, multisig account, then 12 signers: one over the cap.
        let indices: Vec<u8> = (0..15).collect();
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &indices,
            data: &data,
        };
        assert_eq!(
            decode(&instruction, &header).unwrap_err(),
            DecodeError::TooManySigners(12)
        );
    }

    #[test]
    fn test_transfer_missing_signers() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 2);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = transfer_data(42);
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1],
            data: &data,
        };
        assert_eq!(
            decode(&instruction, &header).unwrap_err(),
            DecodeError::MissingSigners
        );
    }

    #[test]
    fn test_initialize_mint_with_freeze_authority() {
        let mut bytes = Vec::new();
        let keys = build_header(&mut bytes, 1);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let mint_authority = [21u8; PUBKEY_SIZE];
        let freeze_authority = [22u8; PUBKEY_SIZE];
        let mut data = vec![0u8, 6]; // kind, decimals
        data.extend_from_slice(&mint_authority);
        data.push(1); // option: present
        data.extend_from_slice(&freeze_authority);

        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0],
            data: &data,
        };
        match decode(&instruction, &header).unwrap() {
            TokenInfo::InitializeMint(info) => {
                assert_eq!(info.mint_account, &keys[0]);
                assert_eq!(info.mint_authority, &mint_authority);
                assert_eq!(info.freeze_authority, Some(&freeze_authority));
                assert_eq!(info.decimals, 6);
            }
            _ => panic!("expected initialize mint"),
        }
    }

    #[test]
    fn test_set_authority_rejects_unknown_type() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 2);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = vec![6u8, 4, 0]; // kind, bad authority type, option none
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1],
            data: &data,
        };
        assert_eq!(
            decode(&instruction, &header).unwrap_err(),
            DecodeError::UnknownAuthorityType(4)
        );
    }

    #[test]
    fn test_set_authority_without_new_authority() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 2);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = vec![6u8, 2, 0]; // kind, account owner, option none
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1],
            data: &data,
        };
        match decode(&instruction, &header).unwrap() {
            TokenInfo::SetAuthority(info) => {
                assert_eq!(info.authority_type, AuthorityType::AccountOwner);
                assert!(info.new_authority.is_none());
            }
            _ => panic!("expected set authority"),
        }

        let info = decode(&instruction, &header).unwrap();
        let mut summary = TransactionSummary::new();
        write_summary(&info, &header, &mut summary).unwrap();
        assert!(summary
            .items()
            .iter()
            .any(|item| item.title == "Authority" && item.text == "None"));
    }

    #[test]
    fn test_initialize_multisig() {
        let mut bytes = Vec::new();
        let keys = build_header(&mut bytes, 4);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = vec![2u8, 2]; // kind, threshold m=2
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1, 2, 3],
            data: &data,
        };
        match decode(&instruction, &header).unwrap() {
            TokenInfo::InitializeMultisig(info) => {
                assert_eq!(info.multisig_account, &keys[0]);
                assert_eq!(info.threshold, 2);
                assert_eq!(info.signers.count, 3);
            }
            _ => panic!("expected initialize multisig"),
        }
    }

    #[test]
    fn test_checked_variants_rejected_as_unsupported() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 3);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        for discriminant in [10u8, 11, 12, 13, 14, 15] {
            let data = vec![discriminant];
            let instruction = Instruction {
                program_id_index: 0,
                account_indices: &[0, 1, 2],
                data: &data,
            };
            assert_eq!(
                decode(&instruction, &header).unwrap_err(),
                DecodeError::UnsupportedInstruction(u32::from(discriminant))
            );
        }
    }

    #[test]
    fn test_unknown_discriminant_rejected() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 1);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = vec![16u8];
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0],
            data: &data,
        };
        assert_eq!(
            decode(&instruction, &header).unwrap_err(),
            DecodeError::UnknownDiscriminant(16)
        );
    }

    #[test]
    fn test_multisig_transfer_summary() {
        let mut bytes = Vec::new();
        build_header(&mut bytes, 6);
        let mut parser = Parser::new(&bytes);
        let header = MessageHeader::decode(&mut parser).unwrap();

        let data = transfer_data(1000);
        let instruction = Instruction {
            program_id_index: 0,
            account_indices: &[0, 1, 2, 3, 4, 5],
            data: &data,
        };
        let info = decode(&instruction, &header).unwrap();
        let mut summary = TransactionSummary::new();
        write_summary(&info, &header, &mut summary).unwrap();

        assert_eq!(summary.primary_item().unwrap().title, "Transfer tokens");
        assert!(summary
            .items()
            .iter()
            .any(|item| item.title == "Signers" && item.text == "3"));
    }
}
