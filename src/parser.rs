//! Cursor-based primitive parser over an untrusted message buffer.
//!
//! All multi-byte reads are little-endian and every read checks the requested
//! width against the remaining length before touching the buffer, so a short
//! buffer fails cleanly without advancing the cursor and without any
//! out-of-bounds access. Slices handed out (`read_pubkey`, `read_bytes`, ...)
//! are zero-copy views into the original buffer and carry its lifetime.

use crate::constants::{HASH_SIZE, PUBKEY_SIZE};
use crate::errors::{DecodeError, DecodeResult};

/// A public key as it appears on the wire. Opaque, compared byte-wise.
pub type Pubkey = [u8; PUBKEY_SIZE];

/// A 32-byte hash (blockhash or message hash). Opaque.
pub type Hash = [u8; HASH_SIZE];

/// Bounds-checked cursor over an immutable input buffer.
///
/// The remaining window only ever shrinks; a failed read leaves it untouched.
pub struct Parser<'a> {
    buffer: &'a [u8],
}

impl<'a> Parser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Split off the next `count` bytes, or fail without advancing.
    fn take(&mut self, count: usize) -> DecodeResult<&'a [u8]> {
        if self.buffer.len() < count {
            return Err(DecodeError::BufferExhausted {
                needed: count,
                remaining: self.buffer.len(),
            });
        }
        let (taken, rest) = self.buffer.split_at(count);
        self.buffer = rest;
        Ok(taken)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.take(1)?[0])
    }

    // The fixed-width readers check their whole width up front, so a short
    // buffer never advances past a partial prefix.

    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from(bytes[0]) | (u16::from(bytes[1]) << 8))
    }

    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        let bytes = self.take(4)?;
        let mut value = 0u32;
        for (i, byte) in bytes.iter().enumerate() {
            value |= u32::from(*byte) << (8 * i);
        }
        Ok(value)
    }

    pub fn read_u64(&mut self) -> DecodeResult<u64> {
        let bytes = self.take(8)?;
        let mut value = 0u64;
        for (i, byte) in bytes.iter().enumerate() {
            value |= u64::from(*byte) << (8 * i);
        }
        Ok(value)
    }

    pub fn read_i64(&mut self) -> DecodeResult<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Read a little-endian base-128 length: low 7 bits of each byte carry the
    /// value, the high bit continues into the next byte, at most 3 bytes
    /// (maximum 2,097,151). Non-canonical encodings with superfluous
    /// continuation bytes are accepted as-is.
    pub fn read_length(&mut self) -> DecodeResult<usize> {
        let byte = self.read_u8()?;
        let mut value = usize::from(byte & 0x7f);
        if byte & 0x80 != 0 {
            let byte = self.read_u8()?;
            value |= usize::from(byte & 0x7f) << 7;
            if byte & 0x80 != 0 {
                let byte = self.read_u8()?;
                value |= usize::from(byte & 0x7f) << 14;
            }
        }
        Ok(value)
    }

    /// Borrow the next 32 bytes as a public key.
    pub fn read_pubkey(&mut self) -> DecodeResult<&'a Pubkey> {
        let bytes = self.take(PUBKEY_SIZE)?;
        bytes.try_into().map_err(|_| DecodeError::BufferExhausted {
            needed: PUBKEY_SIZE,
            remaining: bytes.len(),
        })
    }

    /// Borrow the next 32 bytes as a hash.
    pub fn read_hash(&mut self) -> DecodeResult<&'a Hash> {
        let bytes = self.take(HASH_SIZE)?;
        bytes.try_into().map_err(|_| DecodeError::BufferExhausted {
            needed: HASH_SIZE,
            remaining: bytes.len(),
        })
    }

    /// Borrow a run of `count` raw bytes.
    pub fn read_raw(&mut self, count: usize) -> DecodeResult<&'a [u8]> {
        self.take(count)
    }

    /// Borrow a length-prefixed byte slice.
    pub fn read_bytes(&mut self) -> DecodeResult<&'a [u8]> {
        let length = self.read_length()?;
        self.take(length)
    }

    /// Read an option tag: 0 means absent, 1 means present (payload follows).
    /// Any other tag byte is rejected.
    pub fn read_option(&mut self) -> DecodeResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            tag => Err(DecodeError::InvalidOptionTag(tag)),
        }
    }
}
