use num_complex::Complex32;

use super::Modem;

/// Symbol 0 maps to +1, symbol 1 to -1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bpsk;

impl Modem for Bpsk {
    fn bits_per_symbol(&self) -> usize {
        1
    }

    fn modulate(&self, symbol: u8) -> Complex32 {
        match symbol & 0x01 {
            0 => Complex32::new(1.0, 0.0),
            _ => Complex32::new(-1.0, 0.0),
        }
    }
}
