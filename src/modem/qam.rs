use num_complex::Complex32;

use super::{gray_levels, symbol_mask, Modem};

/// Gray-coded rectangular QAM, unit average energy.
///
/// The high `ceil(bits / 2)` bits select the in-phase level, the remaining
/// low bits the quadrature level.
#[derive(Debug, Clone)]
pub struct Qam {
    bits: usize,
    constellation: Vec<Complex32>,
}

impl Qam {
    pub fn new(bits_per_symbol: u8) -> Self {
        let bits = bits_per_symbol as usize;
        let bits_i = bits.div_ceil(2);
        let bits_q = bits - bits_i;

        let levels_i = gray_levels(bits_i);
        let levels_q = gray_levels(bits_q);

        let order_i = levels_i.len() as f32;
        let order_q = levels_q.len() as f32;
        let energy = ((order_i * order_i - 1.0) + (order_q * order_q - 1.0)) / 3.0;
        let scale = 1.0 / energy.sqrt();

        let constellation = (0..1usize << bits)
            .map(|symbol| {
                let i = levels_i[symbol >> bits_q];
                let q = levels_q[symbol & ((1 << bits_q) - 1)];
                Complex32::new(i * scale, q * scale)
            })
            .collect();

        Self {
            bits,
            constellation,
        }
    }
}

impl Modem for Qam {
    fn bits_per_symbol(&self) -> usize {
        self.bits
    }

    fn modulate(&self, symbol: u8) -> Complex32 {
        self.constellation[(symbol & symbol_mask(self.bits)) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qam16_grid() {
        let qam = Qam::new(4);
        let scale = (10.0f32).sqrt();

        let mut re = (0..16u8)
            .map(|symbol| (qam.modulate(symbol).re * scale).round() as i32)
            .collect::<Vec<_>>();
        re.sort();
        re.dedup();

        assert_eq!(re, vec![-3, -1, 1, 3]);
    }

    #[test]
    fn test_qam_points_are_distinct() {
        let qam = Qam::new(5);
        let points = (0..32u8).map(|symbol| qam.modulate(symbol)).collect::<Vec<_>>();

        for (a, pa) in points.iter().enumerate() {
            for pb in points.iter().skip(a + 1) {
                assert!((pa - pb).norm() > 1e-3);
            }
        }
    }
}
