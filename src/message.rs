//! Message header, instruction records, and account resolution.
//!
//! A message lays out as: three signer/readonly counts, a length-prefixed
//! account table of 32-byte public keys, the recent blockhash, a declared
//! instruction count, then the instruction records themselves. The header
//! decoder stops before the records; callers pull them off the same parser
//! one at a time so the raw bytes of each record can be speculatively tried
//! against several program decoders.

use crate::constants::{MAX_ACCOUNT_TABLE, PUBKEY_SIZE};
use crate::errors::{DecodeError, DecodeResult};
use crate::parser::{Hash, Parser, Pubkey};

/// Ordered view over the header's public keys. Borrows the input buffer;
/// keys are never copied out of it.
#[derive(Clone, Copy)]
#[derive(Debug)]
pub struct AccountTable<'a> {
    keys: &'a [u8],
    len: usize,
}

impl<'a> AccountTable<'a> {
    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve one table index to its key, rejecting anything past the end.
    pub fn get(&self, index: u8) -> DecodeResult<&'a Pubkey> {
        let offset = usize::from(index) * PUBKEY_SIZE;
        self.keys
            .get(offset..offset + PUBKEY_SIZE)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(DecodeError::AccountIndexOutOfRange {
                index,
                table_len: self.len,
            })
    }

    /// Entry 0, which the wire format designates as the fee payer.
    pub fn fee_payer(&self) -> DecodeResult<&'a Pubkey> {
        self.get(0)
    }
}

/// Decoded message header. All referenced key material stays in the caller's
/// buffer; this struct must not outlive it.
#[derive(Debug)]
pub struct MessageHeader<'a> {
    pub num_required_signatures: u8,
    pub num_readonly_signed_accounts: u8,
    pub num_readonly_unsigned_accounts: u8,
    pub accounts: AccountTable<'a>,
    pub blockhash: &'a Hash,
    /// Declared record count; the records follow in the parser's remainder.
    pub instruction_count: usize,
}

impl<'a> MessageHeader<'a> {
    pub fn decode(parser: &mut Parser<'a>) -> DecodeResult<Self> {
        let num_required_signatures = parser.read_u8()?;
        let num_readonly_signed_accounts = parser.read_u8()?;
        let num_readonly_unsigned_accounts = parser.read_u8()?;

        let len = parser.read_length()?;
        if len > MAX_ACCOUNT_TABLE {
            return Err(DecodeError::AccountTableTooLarge(len));
        }
        let keys = parser.read_raw(len * PUBKEY_SIZE)?;
        let accounts = AccountTable { keys, len };

        let blockhash = parser.read_hash()?;
        let instruction_count = parser.read_length()?;

        Ok(Self {
            num_required_signatures,
            num_readonly_signed_accounts,
            num_readonly_unsigned_accounts,
            accounts,
            blockhash,
            instruction_count,
        })
    }
}

/// One raw instruction record: program selector, account-index list, opaque
/// payload. Indices are deliberately not checked against the account table
/// here; that belongs to the consumers resolving them.
pub struct Instruction<'a> {
    pub program_id_index: u8,
    pub account_indices: &'a [u8],
    pub data: &'a [u8],
}

impl<'a> Instruction<'a> {
    pub fn decode(parser: &mut Parser<'a>) -> DecodeResult<Self> {
        let program_id_index = parser.read_u8()?;
        let account_indices = parser.read_bytes()?;
        let data = parser.read_bytes()?;
        Ok(Self {
            program_id_index,
            account_indices,
            data,
        })
    }

    /// Iterate this record's accounts against the header's table.
    pub fn accounts<'h>(&self, header: &'h MessageHeader<'a>) -> AccountsIter<'a, 'h> {
        AccountsIter {
            indices: self.account_indices,
            position: 0,
            table: &header.accounts,
        }
    }
}

/// Sequential, bounds-checked resolver of an instruction's account indices.
pub struct AccountsIter<'a, 'h> {
    indices: &'a [u8],
    position: usize,
    table: &'h AccountTable<'a>,
}

impl<'a> AccountsIter<'a, '_> {
    /// Resolve the next index, failing if the list is exhausted or the index
    /// falls outside the table.
    pub fn next_key(&mut self) -> DecodeResult<&'a Pubkey> {
        let index = *self
            .indices
            .get(self.position)
            .ok_or(DecodeError::AccountIndexOutOfRange {
                index: self.position.min(u8::MAX as usize) as u8,
                table_len: self.table.len(),
            })?;
        let key = self.table.get(index)?;
        self.position += 1;
        Ok(key)
    }

    /// Skip one index without resolving it (sysvar slots a decoder never
    /// renders). Still fails if the list is exhausted.
    pub fn skip(&mut self) -> DecodeResult<()> {
        if self.position >= self.indices.len() {
            return Err(DecodeError::AccountIndexOutOfRange {
                index: self.position.min(u8::MAX as usize) as u8,
                table_len: self.table.len(),
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Indices not yet consumed. Decoders use this before consuming a signer
    /// tail to tell single-signer from multisig layouts.
    pub fn remaining(&self) -> usize {
        self.indices.len() - self.position
    }
}
