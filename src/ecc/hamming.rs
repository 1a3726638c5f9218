//! Hamming single-error-correcting code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by
//! Richard Hamming in 1950. This variant protects a payload of any length:
//! the number of parity bits is the smallest `r` with `2^r >= r + n + 1`,
//! the parity bits occupy the power-of-two positions counted from the
//! rightmost bit, and the payload fills the remaining positions from the
//! left.
//!
//! This implementation provides:
//! - Encoding of a payload into a single codeword
//! - Decoding with single-bit error correction
//! - An advisory flag when the syndrome points past the end of the word
//!
//! Two or more flipped bits are not detected. Their syndrome usually names
//! some other position, which the decoder then flips. Only a syndrome larger
//! than the codeword gives the damage away.

use bitvec::prelude::*;
use log::{debug, warn};

use crate::ecc::bits::{parse_bits, Bits};
use crate::ecc::codeword::Codeword;
use crate::ecc::parity::{is_parity_position, is_valid_codeword_len, parity_count};
use crate::ecc::syndrome::{fold_parities, FoldMode};
use crate::ecc::{ErrorCorrection, Result};
use crate::error::Error;

/// Outcome of a decode, as reported by [`Decoded::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// Parity held; the codeword was returned as received
    Clean,
    /// One bit was flipped back, at this 1-indexed transmission position
    Corrected { position: usize },
    /// The syndrome names a position beyond the codeword, so at least two
    /// bits are wrong; the codeword was returned as received
    Uncorrectable { syndrome: usize },
}

/// Result of decoding a received codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    corrected: Codeword,
    error_position: usize,
    syndrome: usize,
}

impl Decoded {
    /// The codeword after correction; identical to the input when nothing was flipped
    pub fn corrected(&self) -> &Codeword {
        &self.corrected
    }

    pub fn into_corrected(self) -> Codeword {
        self.corrected
    }

    /// 1-indexed transmission position of the bit that was flipped back, 0 if none
    pub fn error_position(&self) -> usize {
        self.error_position
    }

    /// Raw syndrome: the error's Hamming position, counted from the rightmost bit
    pub fn syndrome(&self) -> usize {
        self.syndrome
    }

    pub fn status(&self) -> DecodeStatus {
        match (self.syndrome, self.error_position) {
            (0, _) => DecodeStatus::Clean,
            (syndrome, 0) => DecodeStatus::Uncorrectable { syndrome },
            (_, position) => DecodeStatus::Corrected { position },
        }
    }

    /// Payload bits of the corrected codeword
    pub fn payload(&self) -> Bits {
        self.corrected.payload()
    }
}

/// Encodes a payload into a Hamming codeword.
///
/// # Arguments
///
/// * `payload` - Payload bits in transmission order, at least one
///
/// # Returns
///
/// The codeword, `payload.len() + parity_count(payload.len())` bits long
///
/// # Examples
///
/// ```
/// use hamming::ecc::{encode, parse_bits};
///
/// let codeword = encode(&parse_bits("1101").unwrap()).unwrap();
/// assert_eq!(codeword.to_string(), "1100110");
/// ```
pub fn encode(payload: &BitSlice<u8, Msb0>) -> Result<Codeword> {
    let parity_bits = parity_count(payload.len())?;
    let len = payload.len() + parity_bits;

    // Parity positions start zeroed; the payload fills the rest from the left
    let mut word = Bits::with_capacity(len);
    let mut data = payload.iter().by_vals();
    for index in 0..len {
        let position = len - index;
        if is_parity_position(position) {
            word.push(false);
        } else if let Some(bit) = data.next() {
            word.push(bit);
        }
    }

    fold_parities(&mut word, FoldMode::Write);
    Ok(Codeword::from_valid(word))
}

/// Decodes a received codeword, correcting a single flipped bit.
///
/// # Arguments
///
/// * `received` - Codeword bits in transmission order
///
/// # Returns
///
/// The corrected codeword together with the error position, or an error if
/// no payload encodes to `received.len()` bits
///
/// # Examples
///
/// ```
/// use hamming::ecc::{decode, parse_bits, DecodeStatus};
///
/// let decoded = decode(&parse_bits("1110110").unwrap()).unwrap();
/// assert_eq!(decoded.status(), DecodeStatus::Corrected { position: 3 });
/// assert_eq!(decoded.corrected().to_string(), "1100110");
/// ```
pub fn decode(received: &BitSlice<u8, Msb0>) -> Result<Decoded> {
    let len = received.len();
    if !is_valid_codeword_len(len) {
        return Err(Error::InvalidInput(format!(
            "Codeword length {} does not split into payload and parity bits",
            len
        )));
    }

    let mut word = received.to_bitvec();
    let syndrome = fold_parities(&mut word, FoldMode::Collect);

    let error_position = match syndrome {
        0 => 0,
        syndrome if syndrome <= len => {
            let index = len - syndrome;
            let bit = word[index];
            word.set(index, !bit);
            debug!(
                "Corrected bit at position {} (syndrome {})",
                index + 1,
                syndrome
            );
            index + 1
        }
        syndrome => {
            warn!(
                "Syndrome {} exceeds codeword length {}, suggesting uncorrectable errors",
                syndrome, len
            );
            0
        }
    };

    Ok(Decoded {
        corrected: Codeword::from_valid(word),
        error_position,
        syndrome,
    })
}

/// Encodes a payload given as a string of `'0'` and `'1'` characters.
pub fn encode_str(payload: &str) -> Result<Codeword> {
    encode(&parse_bits(payload)?)
}

/// Decodes a codeword given as a string of `'0'` and `'1'` characters.
pub fn decode_str(received: &str) -> Result<Decoded> {
    decode(&parse_bits(received)?)
}

/// Hamming code as a payload-in, payload-out codec.
///
/// The whole payload becomes one codeword, sized to fit it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingCode;

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &BitSlice<u8, Msb0>) -> Result<Bits> {
        Ok(encode(data)?.into_bits())
    }

    fn decode(&self, data: &BitSlice<u8, Msb0>) -> Result<Bits> {
        Ok(decode(data)?.payload())
    }
}
