use num_complex::Complex32;
use std::f32::consts::PI;

use super::{gray_position, symbol_mask, Modem};

/// Gray-coded M-PSK on the unit circle.
///
/// Above one bit per symbol the constellation is rotated by half a sector so
/// that no point sits on an axis.
#[derive(Debug, Clone)]
pub struct Psk {
    bits: usize,
    constellation: Vec<Complex32>,
}

impl Psk {
    pub fn new(bits_per_symbol: u8) -> Self {
        let bits = bits_per_symbol as usize;
        let order = 1usize << bits;
        let phase_slice = 2.0 * PI / order as f32;

        let start_phase = if bits == 1 { 0.0 } else { phase_slice / 2.0 };

        let constellation = (0..order)
            .map(|label| {
                let position = gray_position(label as u8) as f32;
                Complex32::from_polar(1.0, start_phase + position * phase_slice)
            })
            .collect();

        Self {
            bits,
            constellation,
        }
    }
}

impl Modem for Psk {
    fn bits_per_symbol(&self) -> usize {
        self.bits
    }

    fn modulate(&self, symbol: u8) -> Complex32 {
        self.constellation[(symbol & symbol_mask(self.bits)) as usize]
    }
}
