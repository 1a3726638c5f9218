//! Parity bit budget for a Hamming codeword.
//!
//! A codeword of `n` data bits and `r` parity bits needs enough syndrome
//! values to name each of its `n + r` positions plus a "no error" state,
//! so the smallest `r` with `2^r >= r + n + 1` is chosen.

use log::trace;

use crate::ecc::Result;
use crate::error::Error;

/// Returns the minimum number of parity bits needed to protect `data_bits`
/// payload bits.
///
/// # Examples
///
/// ```
/// use hamming::ecc::parity_count;
///
/// assert_eq!(parity_count(4).unwrap(), 3);
/// assert_eq!(parity_count(11).unwrap(), 4);
/// assert!(parity_count(0).is_err());
/// ```
pub fn parity_count(data_bits: usize) -> Result<usize> {
    if data_bits == 0 {
        return Err(Error::InvalidInput(
            "Payload must contain at least one bit".to_string(),
        ));
    }

    let parity_bits = (0..usize::BITS as usize)
        .find(|&r| {
            data_bits
                .checked_add(r + 1)
                .is_some_and(|needed| (1usize << r) >= needed)
        })
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Payload of {} bits is too large to address with parity bits",
                data_bits
            ))
        })?;

    trace!("{} data bits need {} parity bits", data_bits, parity_bits);
    Ok(parity_bits)
}

/// Total codeword length for a payload of `data_bits` bits.
pub fn codeword_len(data_bits: usize) -> Result<usize> {
    Ok(data_bits + parity_count(data_bits)?)
}

/// Whether the 1-indexed Hamming position `position` holds a parity bit.
pub fn is_parity_position(position: usize) -> bool {
    position.is_power_of_two()
}

/// Number of parity positions (powers of two) at or below `len`.
pub(crate) fn parity_positions(len: usize) -> usize {
    match len {
        0 => 0,
        _ => len.ilog2() as usize + 1,
    }
}

/// Whether some payload of at least one bit encodes to exactly `len` bits.
///
/// Lengths 1, 2 and every power of two from 4 up are unreachable: the
/// parity bits they would carry can address a shorter codeword.
pub fn is_valid_codeword_len(len: usize) -> bool {
    let parity_bits = parity_positions(len);
    let data_bits = len - parity_bits;
    data_bits >= 1 && parity_count(data_bits).is_ok_and(|r| r == parity_bits)
}
