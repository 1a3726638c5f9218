//! Error correction code implementations.
//!
//! This module provides a Hamming single-error-correcting code over
//! payloads of any length. Parity bits sit at the power-of-two positions of
//! the codeword (counted from the rightmost bit, starting at 1) and the
//! syndrome recomputed on receipt names the position of a single flipped
//! bit.
//!
//! # Limitations
//!
//! A plain Hamming code corrects one bit error. Two or more flipped bits can
//! yield a syndrome that points at an innocent bit, and the decoder will
//! "correct" it without complaint. A nonzero error position is therefore not
//! proof that exactly one error occurred.
//!
//! # Examples
//!
//! ```rust
//! use hamming::ecc::{decode_str, encode_str};
//!
//! let codeword = encode_str("10101111010").unwrap();
//! assert_eq!(codeword.to_string(), "101011111010000");
//!
//! let decoded = decode_str("101011111010100").unwrap();
//! assert_eq!(decoded.error_position(), 13);
//! assert_eq!(decoded.corrected(), &codeword);
//! ```

use bitvec::prelude::*;

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode payload bits with error correction bits
    fn encode(&self, data: &BitSlice<u8, Msb0>) -> Result<Bits>;

    /// Decode a received word, correct errors if possible, and return the payload
    fn decode(&self, data: &BitSlice<u8, Msb0>) -> Result<Bits>;
}

pub mod bits;
pub mod codeword;
pub mod hamming;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod parity;
mod syndrome;

pub use bits::{format_bits, parse_bits, Bits};
pub use codeword::Codeword;
pub use hamming::{decode, decode_str, encode, encode_str, DecodeStatus, Decoded, HammingCode};
#[cfg(feature = "parallel")]
pub use parallel::{decode_batch, encode_batch};
pub use parity::{codeword_len, is_parity_position, is_valid_codeword_len, parity_count};
