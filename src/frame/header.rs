use num_complex::Complex32;

use super::FrameProperties;
use crate::checksum::{crc32, CHECKSUM_BYTES};
use crate::fec::{Codec, FecScheme};
use crate::interleaver::Interleaver;
use crate::modem::{Bpsk, Modem, ModulationScheme};
use crate::packing::unpack_bits;
use crate::scramble::{scramble, unscramble};

/// Caller-supplied bytes at the start of every header.
pub const USER_HEADER_LEN: usize = 8;
/// Plaintext header: user bytes, payload length, scheme/depth, checksum.
pub const HEADER_LEN: usize = 15;
/// Header after error correction and filler.
pub const ENCODED_HEADER_LEN: usize = 32;
/// One BPSK sample per encoded header bit.
pub const HEADER_SYMBOLS: usize = 8 * ENCODED_HEADER_LEN;

const PAYLOAD_LEN_OFFSET: usize = 8;
const MODULATION_OFFSET: usize = 10;
const CHECKSUM_OFFSET: usize = 11;

const HEADER_FEC: FecScheme = FecScheme::Hamming74;
const HEADER_CODED_LEN: usize = 2 * HEADER_LEN;

/// Constant tail after the Hamming(7,4) output. Carries no redundancy.
const HEADER_FILLER: [u8; ENCODED_HEADER_LEN - HEADER_CODED_LEN] = [0xa7, 0x9e];

const _: () = assert!(CHECKSUM_OFFSET + CHECKSUM_BYTES == HEADER_LEN);

/// Header contents recovered by [`FrameHeader::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields {
    pub user: [u8; USER_HEADER_LEN],
    pub payload_len: usize,
    pub mod_scheme: ModulationScheme,
    pub mod_bps: u8,
}

/// Header pipeline with fixed-size working buffers.
///
/// `encode` runs pack -> checksum -> scramble -> Hamming(7,4) -> interleave;
/// `modulate` unpacks the 32 encoded bytes MSB first and maps every bit to
/// BPSK, independent of the payload modulation.
pub struct FrameHeader {
    codec: Box<dyn Codec>,
    interleaver: Interleaver,
    modem: Bpsk,
    plain: [u8; HEADER_LEN],
    encoded: [u8; ENCODED_HEADER_LEN],
    symbols: [u8; HEADER_SYMBOLS],
    samples: [Complex32; HEADER_SYMBOLS],
}

impl FrameHeader {
    pub fn new() -> Self {
        let codec = HEADER_FEC.create();
        debug_assert_eq!(codec.encoded_len(HEADER_LEN), HEADER_CODED_LEN);

        Self {
            codec,
            interleaver: Interleaver::new(ENCODED_HEADER_LEN),
            modem: Bpsk,
            plain: [0; HEADER_LEN],
            encoded: [0; ENCODED_HEADER_LEN],
            symbols: [0; HEADER_SYMBOLS],
            samples: [Complex32::default(); HEADER_SYMBOLS],
        }
    }

    pub fn encode(&mut self, user: &[u8; USER_HEADER_LEN], props: &FrameProperties) {
        self.plain[..USER_HEADER_LEN].copy_from_slice(user);

        let payload_len = props.payload_len as u16;
        self.plain[PAYLOAD_LEN_OFFSET..MODULATION_OFFSET]
            .copy_from_slice(&payload_len.to_be_bytes());

        self.plain[MODULATION_OFFSET] =
            (props.mod_scheme.id() << 4) & 0xf0 | props.mod_bps & 0x0f;

        let key = crc32(&self.plain[..CHECKSUM_OFFSET]);
        self.plain[CHECKSUM_OFFSET..].copy_from_slice(&key.to_be_bytes());

        scramble(&mut self.plain);

        self.codec.encode(&self.plain, &mut self.encoded);
        self.encoded[HEADER_CODED_LEN..].copy_from_slice(&HEADER_FILLER);

        self.interleaver.interleave(&mut self.encoded);
    }

    pub fn modulate(&mut self) {
        unpack_bits(&self.encoded, &mut self.symbols);

        self.samples
            .iter_mut()
            .zip(self.symbols.iter())
            .for_each(|(sample, &bit)| *sample = self.modem.modulate(bit));
    }

    /// Scrambled plaintext from the last `encode`.
    pub fn plain(&self) -> &[u8; HEADER_LEN] {
        &self.plain
    }

    /// Encoded and interleaved header from the last `encode`.
    pub fn encoded(&self) -> &[u8; ENCODED_HEADER_LEN] {
        &self.encoded
    }

    pub fn samples(&self) -> &[Complex32; HEADER_SYMBOLS] {
        &self.samples
    }

    /// Reverses `encode`. Returns `None` if the checksum or the scheme id
    /// does not survive decoding.
    pub fn decode(&self, encoded: &[u8; ENCODED_HEADER_LEN]) -> Option<HeaderFields> {
        let mut block = *encoded;
        self.interleaver.deinterleave(&mut block);

        let mut plain = [0u8; HEADER_LEN];
        self.codec
            .decode(&block[..HEADER_CODED_LEN], &mut plain)
            .ok()?;
        unscramble(&mut plain);

        let key = u32::from_be_bytes(plain[CHECKSUM_OFFSET..].try_into().ok()?);
        if crc32(&plain[..CHECKSUM_OFFSET]) != key {
            return None;
        }

        let mut user = [0u8; USER_HEADER_LEN];
        user.copy_from_slice(&plain[..USER_HEADER_LEN]);

        let payload_len =
            u16::from_be_bytes([plain[PAYLOAD_LEN_OFFSET], plain[PAYLOAD_LEN_OFFSET + 1]]);
        let mod_scheme = ModulationScheme::try_from(plain[MODULATION_OFFSET] >> 4).ok()?;

        Some(HeaderFields {
            user,
            payload_len: payload_len as usize,
            mod_scheme,
            mod_bps: plain[MODULATION_OFFSET] & 0x0f,
        })
    }
}

impl Default for FrameHeader {
    fn default() -> Self {
        Self::new()
    }
}
