//! Wire-format sizes and display limits

/// Size of an ed25519 public key on the wire.
pub const PUBKEY_SIZE: usize = 32;

/// Size of a blockhash or message hash.
pub const HASH_SIZE: usize = 32;

/// Largest account table a message header may declare. Instruction account
/// indices are single bytes with the high bit reserved by the length encoding,
/// so a table can never usefully exceed this.
pub const MAX_ACCOUNT_TABLE: usize = 127;

/// Maximum value representable by the 3-byte little-endian base-128 length
/// encoding.
pub const MAX_LENGTH_VALUE: usize = 0x1f_ffff;

/// Signer cap shared by the token program's multisig accounts.
pub const TOKEN_MAX_SIGNERS: usize = 11;

/// Characters kept from each end of a base58 public key when rendering it
/// into a constrained display line.
pub const SUMMARY_PREFIX_LENGTH: usize = 7;
pub const SUMMARY_SUFFIX_LENGTH: usize = 7;

/// Decimal places of the native asset (lamports per SOL).
pub const NATIVE_DECIMALS: u8 = 9;

/// Fixed capacity of the transaction summary's item sequence.
pub const MAX_SUMMARY_ITEMS: usize = 16;

/// Maximum paging steps the display subsystem declares; a finalized summary
/// with more items than this falls back to the fixed-field display path.
pub const MAX_DISPLAY_STEPS: usize = 16;
