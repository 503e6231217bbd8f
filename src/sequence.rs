//! Maximal-length binary sequences from a Fibonacci LFSR.

/// Feedback taps for primitive polynomials, indexed by degree.
///
/// Bit `k` set means register bit `k` feeds the next input bit. The top
/// bit is always tapped so the register update stays invertible.
const MAXIMAL_TAPS: [u32; 16] = [
    0x0000, 0x0000, 0x0003, 0x0005, 0x0009, 0x0012, 0x0021, 0x0041, 0x008e, 0x0108, 0x0204,
    0x0402, 0x0829, 0x100d, 0x2015, 0x4001,
];

pub const MIN_DEGREE: u32 = 2;
pub const MAX_DEGREE: u32 = 15;

#[derive(Debug, Clone)]
pub struct MSequence {
    degree: u32,
    taps: u32,
    mask: u32,
    state: u32,
}

impl MSequence {
    /// Generator of period `2^degree - 1`, seeded with 1.
    ///
    /// Panics if `degree` is outside `MIN_DEGREE..=MAX_DEGREE`.
    pub fn new(degree: u32) -> Self {
        assert!(
            (MIN_DEGREE..=MAX_DEGREE).contains(&degree),
            "m-sequence degree must be {}..={}",
            MIN_DEGREE,
            MAX_DEGREE
        );

        Self {
            degree,
            taps: MAXIMAL_TAPS[degree as usize],
            mask: (1 << degree) - 1,
            state: 1,
        }
    }

    pub fn period(&self) -> usize {
        (1usize << self.degree) - 1
    }

    pub fn advance(&mut self) -> u8 {
        let bit = ((self.state & self.taps).count_ones() & 1) as u8;
        self.state = ((self.state << 1) | bit as u32) & self.mask;
        bit
    }
}
