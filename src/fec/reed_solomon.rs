use reed_solomon::{Decoder, Encoder};

use super::Codec;
use crate::error::FecError;

const MAX_BLOCK_LENGTH: usize = 255;

/// Single-block Reed-Solomon over GF(256) with `ecc_len` parity bytes.
#[derive(Debug, Clone, Copy)]
pub struct ReedSolomon {
    ecc_len: usize,
}

impl ReedSolomon {
    pub fn new(ecc_len: usize) -> Self {
        assert!(
            ecc_len > 0 && ecc_len < MAX_BLOCK_LENGTH,
            "parity length must be 1..255"
        );
        Self { ecc_len }
    }
}

impl Codec for ReedSolomon {
    fn encoded_len(&self, message_len: usize) -> usize {
        message_len + self.ecc_len
    }

    fn encode(&self, message: &[u8], encoded: &mut [u8]) {
        assert!(self.encoded_len(message.len()) <= MAX_BLOCK_LENGTH);

        let block = Encoder::new(self.ecc_len).encode(message);
        encoded[..block.len()].copy_from_slice(&block);
    }

    fn decode(&self, encoded: &[u8], message: &mut [u8]) -> Result<usize, FecError> {
        let expected = self.encoded_len(message.len());
        if encoded.len() != expected {
            return Err(FecError::BlockLength {
                expected,
                actual: encoded.len(),
            });
        }

        let mut block = encoded.to_vec();
        let corrected = Decoder::new(self.ecc_len)
            .correct(&mut block, None)
            .map_err(|_| FecError::Uncorrectable)?;

        let errors = encoded
            .iter()
            .zip(corrected.iter())
            .filter(|(received, fixed)| received != fixed)
            .count();

        message.copy_from_slice(corrected.data());
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEQUENCE_BYTES: usize = 100;
    const ECC_LENGTH: usize = 32;

    #[test]
    fn test_reed_solomon() {
        let data: Vec<_> = (0..TEST_SEQUENCE_BYTES)
            .map(|_| rand::random::<u8>())
            .collect();

        let codec = ReedSolomon::new(ECC_LENGTH);
        let mut encoded = vec![0u8; codec.encoded_len(TEST_SEQUENCE_BYTES)];
        codec.encode(&data, &mut encoded);

        encoded[0] = !encoded[0];
        encoded[1] = !encoded[1];

        let mut decoded = vec![0u8; TEST_SEQUENCE_BYTES];
        assert_eq!(codec.decode(&encoded, &mut decoded), Ok(2));
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_reed_solomon_too_many_errors() {
        let data = [0x5au8; 16];

        let codec = ReedSolomon::new(4);
        let mut encoded = vec![0u8; codec.encoded_len(data.len())];
        codec.encode(&data, &mut encoded);

        encoded.iter_mut().take(10).for_each(|byte| *byte ^= 0xff);

        let mut decoded = [0u8; 16];
        match codec.decode(&encoded, &mut decoded) {
            Err(error) => assert_eq!(error, FecError::Uncorrectable),
            Ok(_) => assert_ne!(decoded, data),
        }
    }
}
