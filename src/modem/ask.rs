use num_complex::Complex32;

use super::{gray_levels, symbol_mask, Modem};

/// Gray-coded amplitude shift keying on the real axis, unit average energy.
#[derive(Debug, Clone)]
pub struct Ask {
    bits: usize,
    levels: Vec<f32>,
}

impl Ask {
    pub fn new(bits_per_symbol: u8) -> Self {
        let bits = bits_per_symbol as usize;
        let order = (1usize << bits) as f32;
        let scale = (3.0 / (order * order - 1.0)).sqrt();

        let levels = gray_levels(bits)
            .into_iter()
            .map(|level| level * scale)
            .collect();

        Self { bits, levels }
    }
}

impl Modem for Ask {
    fn bits_per_symbol(&self) -> usize {
        self.bits
    }

    fn modulate(&self, symbol: u8) -> Complex32 {
        Complex32::new(self.levels[(symbol & symbol_mask(self.bits)) as usize], 0.0)
    }
}
