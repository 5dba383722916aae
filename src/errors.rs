//! Error handling for the message summarizer.
//!
//! Every failure mode of the decode pipeline is enumerated here. Parser-level
//! failures (short buffers, bad tags) abort the decode immediately with no
//! partial result; the one recovered condition is
//! [`DecodeError::UnrecognizedInstruction`], which the pipeline downgrades to
//! a hash-only presentation instead of showing the user a guessed
//! interpretation of unknown bytes.

use thiserror::Error;

/// Main error type for message decoding and summary building.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input buffer ended before a read of the declared width could complete.
    #[error("buffer exhausted: needed {needed} bytes, {remaining} remaining")]
    BufferExhausted { needed: usize, remaining: usize },

    /// The header declared more account keys than a message may carry.
    #[error("account table too large: {0} entries")]
    AccountTableTooLarge(usize),

    /// An instruction referenced an account index past the end of the table.
    #[error("account index {index} out of range for table of {table_len}")]
    AccountIndexOutOfRange { index: u8, table_len: usize },

    /// An option tag byte was neither 0 (absent) nor 1 (present).
    #[error("invalid option tag: {0}")]
    InvalidOptionTag(u8),

    /// An instruction discriminant outside the program's enumerated set.
    #[error("unknown instruction discriminant: {0}")]
    UnknownDiscriminant(u32),

    /// A discriminant the program enumerates but this decoder does not render.
    /// Rejected explicitly rather than passed through.
    #[error("unsupported instruction discriminant: {0}")]
    UnsupportedInstruction(u32),

    /// A token set-authority payload named an authority type outside the known set.
    #[error("unknown token authority type: {0}")]
    UnknownAuthorityType(u8),

    /// A multisig signer set exceeded the program's cap.
    #[error("too many multisig signers: {0}")]
    TooManySigners(usize),

    /// An instruction's signer tail was empty.
    #[error("no signer accounts remain")]
    MissingSigners,

    /// An "m of n" signer threshold with m > n or n over the signer cap.
    #[error("invalid signer threshold: {m} of {n}")]
    InvalidSignerThreshold { m: u8, n: u8 },

    /// Appending to the summary would exceed its fixed capacity.
    #[error("transaction summary capacity exceeded")]
    SummaryCapacityExceeded,

    /// A second primary or fee-payer item was set on one summary.
    #[error("summary already holds a {0} item")]
    DuplicateSummarySlot(&'static str),

    /// No known program decoder structurally fit the instruction. This is the
    /// one recovered condition: the caller degrades to a message-hash display.
    #[error("instruction does not match any known program")]
    UnrecognizedInstruction,
}

/// Result type alias for the message summarizer.
pub type DecodeResult<T> = Result<T, DecodeError>;
