use once_cell::sync::Lazy;

use super::Codec;
use crate::error::FecError;

const CODEWORD_MASK: u8 = 0x7f;

/// Nearest nibble for every 7-bit received word.
static DECODE_TABLE: Lazy<[u8; 128]> = Lazy::new(|| {
    let mut table = [0u8; 128];
    table.iter_mut().enumerate().for_each(|(received, nibble)| {
        *nibble = (0..16u8)
            .min_by_key(|&candidate| (encode_nibble(candidate) ^ received as u8).count_ones())
            .unwrap_or(0);
    });
    table
});

/// Systematic Hamming(7,4) codeword `d1 d2 d3 d4 p1 p2 p3` in the low 7 bits.
fn encode_nibble(nibble: u8) -> u8 {
    let bit = |k: u8| (nibble >> (3 - k)) & 1;
    let (d1, d2, d3, d4) = (bit(0), bit(1), bit(2), bit(3));

    let p1 = d1 ^ d2 ^ d4;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;

    (nibble & 0x0f) << 3 | p1 << 2 | p2 << 1 | p3
}

/// Hamming(7,4), one codeword per output byte, high nibble first.
///
/// Every input byte becomes two output bytes and every codeword corrects a
/// single bit error. The unused top bit of each output byte is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming74;

impl Codec for Hamming74 {
    fn encoded_len(&self, message_len: usize) -> usize {
        2 * message_len
    }

    fn encode(&self, message: &[u8], encoded: &mut [u8]) {
        message
            .iter()
            .zip(encoded.chunks_exact_mut(2))
            .for_each(|(byte, pair)| {
                pair[0] = encode_nibble(byte >> 4);
                pair[1] = encode_nibble(byte & 0x0f);
            });
    }

    fn decode(&self, encoded: &[u8], message: &mut [u8]) -> Result<usize, FecError> {
        if encoded.len() < self.encoded_len(message.len()) {
            return Err(FecError::BlockLength {
                expected: self.encoded_len(message.len()),
                actual: encoded.len(),
            });
        }

        let mut corrected = 0;
        for (byte, pair) in message.iter_mut().zip(encoded.chunks_exact(2)) {
            let high = DECODE_TABLE[(pair[0] & CODEWORD_MASK) as usize];
            let low = DECODE_TABLE[(pair[1] & CODEWORD_MASK) as usize];

            corrected += (encode_nibble(high) != pair[0] & CODEWORD_MASK) as usize;
            corrected += (encode_nibble(low) != pair[1] & CODEWORD_MASK) as usize;

            *byte = high << 4 | low;
        }

        Ok(corrected)
    }
}
