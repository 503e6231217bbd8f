use crate::error::FecError;

mod hamming74;
mod reed_solomon;

pub use self::hamming74::Hamming74;
pub use self::reed_solomon::ReedSolomon;

/// Block forward error correction codec.
pub trait Codec: Send + Sync {
    /// Encoded length in bytes for a message of `message_len` bytes.
    fn encoded_len(&self, message_len: usize) -> usize;

    /// Encodes `message` into the first `encoded_len(message.len())` bytes of `encoded`.
    fn encode(&self, message: &[u8], encoded: &mut [u8]);

    /// Decodes into `message`, returning the number of corrected bit or symbol errors.
    fn decode(&self, encoded: &[u8], message: &mut [u8]) -> Result<usize, FecError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FecScheme {
    None,
    Hamming74,
    ReedSolomon { ecc_len: usize },
}

impl FecScheme {
    pub fn create(self) -> Box<dyn Codec> {
        match self {
            Self::None => Box::new(Passthrough),
            Self::Hamming74 => Box::new(Hamming74),
            Self::ReedSolomon { ecc_len } => Box::new(ReedSolomon::new(ecc_len)),
        }
    }
}

struct Passthrough;

impl Codec for Passthrough {
    fn encoded_len(&self, message_len: usize) -> usize {
        message_len
    }

    fn encode(&self, message: &[u8], encoded: &mut [u8]) {
        encoded[..message.len()].copy_from_slice(message);
    }

    fn decode(&self, encoded: &[u8], message: &mut [u8]) -> Result<usize, FecError> {
        if encoded.len() != message.len() {
            return Err(FecError::BlockLength {
                expected: message.len(),
                actual: encoded.len(),
            });
        }
        message.copy_from_slice(encoded);
        Ok(0)
    }
}
