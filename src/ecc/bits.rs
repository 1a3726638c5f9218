//! Bit sequences and their textual form.
//!
//! Payloads and codewords are held as `BitVec<u8, Msb0>`, in transmission
//! order: index 0 is the leftmost bit as conventionally written. Strings of
//! `'0'` and `'1'` are only used at the boundary.

use bitvec::prelude::*;

use crate::ecc::Result;
use crate::error::Error;

/// Owned bit sequence in transmission order
pub type Bits = BitVec<u8, Msb0>;

/// Parses a string of `'0'` and `'1'` characters into bits.
///
/// An empty string parses to an empty sequence; callers decide whether that
/// is acceptable.
///
/// # Examples
///
/// ```
/// use hamming::ecc::parse_bits;
///
/// let bits = parse_bits("1011").unwrap();
/// assert_eq!(bits.len(), 4);
/// assert!(bits[0] && !bits[1]);
/// assert!(parse_bits("10x1").is_err());
/// ```
pub fn parse_bits(text: &str) -> Result<Bits> {
    text.chars()
        .enumerate()
        .map(|(offset, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::InvalidInput(format!(
                "Invalid bit character {:?} at offset {}",
                other, offset
            ))),
        })
        .collect()
}

/// Formats bits as a string of `'0'` and `'1'` characters.
pub fn format_bits(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bits() {
        let bits = parse_bits("10101111010").unwrap();
        assert_eq!(bits.len(), 11);
        assert_eq!(bits.count_ones(), 7);
        assert!(bits[0]);
        assert!(!bits[10]);
    }

    #[test]
    fn test_parse_bits_rejects_non_binary() {
        let result = parse_bits("1012");
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let result = parse_bits("1 0");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_bits("").unwrap().is_empty());
    }

    #[test]
    fn test_format_bits() {
        let bits = bitvec![u8, Msb0; 1, 0, 0, 1, 1];
        assert_eq!(format_bits(&bits), "10011");
        assert_eq!(format_bits(&parse_bits("0110").unwrap()), "0110");
    }
}
