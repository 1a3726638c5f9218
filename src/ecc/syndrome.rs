//! Interleaved-block XOR shared by the encoder and the decoder.
//!
//! Parity bit `j` sits at Hamming position `2^j` and covers the runs of
//! `2^j` positions starting there, every `2^(j+1)` positions: `2^j` on,
//! `2^j` off, up to the end of the word. Those are exactly the positions
//! whose bit `j` is set, which is why the folded parity bits, read as a
//! number, name the erroneous position.
//!
//! Hamming positions count from 1 at the rightmost bit, so position `p` of
//! a word of length `len` is stored at index `len - p`.

use std::cmp::min;

use bitvec::prelude::*;
use log::trace;

/// What to do with each folded parity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FoldMode {
    /// Store the value at the parity position (encoding).
    Write,
    /// Leave the word untouched and only report the value (decoding).
    Collect,
}

/// XOR of every bit covered by the parity bit at Hamming position `span`,
/// the parity bit itself included.
///
/// Folding the stored parity bit in is the same as starting from it and
/// XORing the rest of its blocks: a zeroed placeholder yields the parity
/// to write, a received parity bit yields one syndrome bit.
fn block_parity(word: &BitSlice<u8, Msb0>, span: usize) -> bool {
    let len = word.len();
    let mut parity = false;
    let mut start = span;

    while start <= len {
        let end = min(start + span - 1, len);
        // Positions start..=end are contiguous at indices len-end..=len-start.
        parity ^= word[len - end..=len - start].count_ones() % 2 == 1;
        start += span << 1;
    }

    parity
}

/// Folds every parity position of `word` in increasing order.
///
/// Returns the folded values packed as a number, bit `j` holding the value
/// for parity index `j`. In [`FoldMode::Collect`] that number is the
/// syndrome; in [`FoldMode::Write`] it is the parity pattern just written.
pub(crate) fn fold_parities(word: &mut BitSlice<u8, Msb0>, mode: FoldMode) -> usize {
    let len = word.len();
    let mut packed = 0;

    for j in 0..usize::BITS {
        let span = 1usize << j;
        if span > len {
            break;
        }

        let parity = block_parity(word, span);
        trace!("parity index {} at position {}: {}", j, span, parity as u8);

        if parity {
            packed |= span;
        }
        if mode == FoldMode::Write {
            word.set(len - span, parity);
        }
    }

    packed
}
