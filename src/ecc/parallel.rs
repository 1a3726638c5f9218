//! Batch encoding and decoding with Rayon.
//!
//! Enable with the `parallel` feature flag. Every payload or codeword is
//! independent, so batches split across the thread pool with no
//! coordination. Output order matches input order.
//!
//! For a handful of short words the sequential functions are faster.

use bitvec::prelude::*;
use rayon::prelude::*;

use crate::ecc::codeword::Codeword;
use crate::ecc::hamming::{decode, encode, Decoded};
use crate::ecc::Result;

/// Encodes each payload into its own codeword.
///
/// Fails if any payload is empty.
pub fn encode_batch<P>(payloads: &[P]) -> Result<Vec<Codeword>>
where
    P: AsRef<BitSlice<u8, Msb0>> + Sync,
{
    payloads
        .par_iter()
        .map(|payload| encode(payload.as_ref()))
        .collect()
}

/// Decodes each received codeword independently.
///
/// Fails if any codeword has a length no payload encodes to.
pub fn decode_batch<C>(received: &[C]) -> Result<Vec<Decoded>>
where
    C: AsRef<BitSlice<u8, Msb0>> + Sync,
{
    received
        .par_iter()
        .map(|word| decode(word.as_ref()))
        .collect()
}
