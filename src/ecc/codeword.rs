//! Validated Hamming codeword.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitvec::prelude::*;

use crate::ecc::bits::{format_bits, parse_bits, Bits};
use crate::ecc::parity::{is_parity_position, is_valid_codeword_len, parity_positions};
use crate::ecc::syndrome::{fold_parities, FoldMode};
use crate::ecc::Result;
use crate::error::Error;

/// A sequence of payload and parity bits whose length some payload encodes to.
///
/// Bits are stored in transmission order. Positions passed to [`bit`] and
/// [`flip`] are 1-indexed transmission positions (1 is the leftmost bit).
///
/// [`bit`]: Codeword::bit
/// [`flip`]: Codeword::flip
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: Bits,
}

impl Codeword {
    /// Wraps received bits, rejecting lengths no payload encodes to.
    ///
    /// The bits are not checked against their parity; use
    /// [`decode`](crate::ecc::decode) for that.
    pub fn new(bits: Bits) -> Result<Self> {
        if !is_valid_codeword_len(bits.len()) {
            return Err(Error::InvalidInput(format!(
                "Codeword length {} does not split into payload and parity bits",
                bits.len()
            )));
        }
        Ok(Codeword { bits })
    }

    /// Wraps bits whose length is already known to be valid.
    pub(crate) fn from_valid(bits: Bits) -> Self {
        debug_assert!(is_valid_codeword_len(bits.len()));
        Codeword { bits }
    }

    /// Total number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: a codeword carries at least one payload bit
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of parity bits
    pub fn parity_bits(&self) -> usize {
        parity_positions(self.len())
    }

    /// Number of payload bits
    pub fn data_bits(&self) -> usize {
        self.len() - self.parity_bits()
    }

    pub fn as_bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn into_bits(self) -> Bits {
        self.bits
    }

    /// Reads the bit at a 1-indexed transmission position.
    pub fn bit(&self, position: usize) -> Result<bool> {
        let index = self.index_of(position)?;
        Ok(self.bits[index])
    }

    /// Inverts the bit at a 1-indexed transmission position.
    pub fn flip(&mut self, position: usize) -> Result<()> {
        let index = self.index_of(position)?;
        let bit = self.bits[index];
        self.bits.set(index, !bit);
        Ok(())
    }

    /// Recomputes the syndrome: the Hamming position (counted from the
    /// rightmost bit) of a single flipped bit, or 0 when parity holds.
    pub fn syndrome(&self) -> usize {
        let mut scratch = self.bits.clone();
        fold_parities(&mut scratch, FoldMode::Collect)
    }

    /// Extracts the payload bits, in their original order.
    ///
    /// No correction is applied; decode first if the word may be damaged.
    pub fn payload(&self) -> Bits {
        let len = self.len();
        self.bits
            .iter()
            .by_vals()
            .enumerate()
            .filter(|&(index, _)| !is_parity_position(len - index))
            .map(|(_, bit)| bit)
            .collect()
    }

    fn index_of(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.len() {
            return Err(Error::PositionOutOfRange {
                position,
                length: self.len(),
            });
        }
        Ok(position - 1)
    }
}

impl AsRef<BitSlice<u8, Msb0>> for Codeword {
    fn as_ref(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_bits(&self.bits))
    }
}

impl FromStr for Codeword {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Codeword::new(parse_bits(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeword_from_str() {
        let codeword: Codeword = "101011111010000".parse().unwrap();
        assert_eq!(codeword.len(), 15);
        assert_eq!(codeword.parity_bits(), 4);
        assert_eq!(codeword.data_bits(), 11);
        assert_eq!(codeword.to_string(), "101011111010000");
        assert!(!codeword.is_empty());
    }

    #[test]
    fn test_codeword_rejects_bad_lengths() {
        for text in ["", "1", "10", "1010", "10101010", "1010101010101010"] {
            let result = text.parse::<Codeword>();
            assert!(matches!(result, Err(Error::InvalidInput(_))), "{:?}", text);
        }
        assert!("10x".parse::<Codeword>().is_err());
    }

    #[test]
    fn test_bit_and_flip() {
        let mut codeword: Codeword = "1100110".parse().unwrap();
        assert!(codeword.bit(1).unwrap());
        assert!(!codeword.bit(3).unwrap());

        codeword.flip(3).unwrap();
        assert!(codeword.bit(3).unwrap());
        assert_eq!(codeword.to_string(), "1110110");

        codeword.flip(3).unwrap();
        assert_eq!(codeword.to_string(), "1100110");
    }

    #[test]
    fn test_position_out_of_range() {
        let mut codeword: Codeword = "111".parse().unwrap();
        assert_eq!(
            codeword.flip(0),
            Err(Error::PositionOutOfRange {
                position: 0,
                length: 3
            })
        );
        assert!(matches!(
            codeword.bit(4),
            Err(Error::PositionOutOfRange { position: 4, .. })
        ));
    }

    #[test]
    fn test_syndrome() {
        let clean: Codeword = "101011111010000".parse().unwrap();
        assert_eq!(clean.syndrome(), 0);

        let damaged: Codeword = "101011111010100".parse().unwrap();
        assert_eq!(damaged.syndrome(), 3);
    }

    #[test]
    fn test_payload_extraction() {
        let codeword: Codeword = "101011111010000".parse().unwrap();
        assert_eq!(format_bits(&codeword.payload()), "10101111010");

        let codeword: Codeword = "1100110".parse().unwrap();
        assert_eq!(format_bits(&codeword.payload()), "1101");

        let codeword: Codeword = "111".parse().unwrap();
        assert_eq!(format_bits(&codeword.payload()), "1");
    }
}
