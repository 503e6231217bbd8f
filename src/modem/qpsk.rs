use num_complex::Complex32;
use std::f32::consts::FRAC_1_SQRT_2;

use super::Modem;

/// Gray-coded QPSK: the high bit picks the sign of I, the low bit the sign of Q.
#[derive(Debug, Clone, Copy, Default)]
pub struct Qpsk;

impl Modem for Qpsk {
    fn bits_per_symbol(&self) -> usize {
        2
    }

    fn modulate(&self, symbol: u8) -> Complex32 {
        let i = if symbol & 0x02 == 0 { FRAC_1_SQRT_2 } else { -FRAC_1_SQRT_2 };
        let q = if symbol & 0x01 == 0 { FRAC_1_SQRT_2 } else { -FRAC_1_SQRT_2 };
        Complex32::new(i, q)
    }
}
