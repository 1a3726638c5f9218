pub mod ecc;
pub mod error;

pub use ecc::{decode, encode, Bits, Codeword, DecodeStatus, Decoded, ErrorCorrection, HammingCode};
pub use error::{Error, Result};
