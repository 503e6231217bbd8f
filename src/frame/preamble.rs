use num_complex::Complex32;

use crate::number::FP;
use crate::sequence::MSequence;

pub const PN_SEQUENCE_LEN: usize = 64;
const PN_SEQUENCE_DEGREE: u32 = 6;

/// Fixed +/-1 synchronization sequence.
///
/// The degree-6 generator repeats every 63 bits, so the 64th sample equals
/// the first. Receivers correlate against exactly these 64 values.
#[derive(Debug, Clone)]
pub struct PreambleSequence {
    pn_sequence: [Complex32; PN_SEQUENCE_LEN],
}

impl PreambleSequence {
    pub fn new() -> Self {
        let mut ms = MSequence::new(PN_SEQUENCE_DEGREE);
        let mut pn_sequence = [Complex32::default(); PN_SEQUENCE_LEN];

        pn_sequence.iter_mut().for_each(|sample| {
            let chip = if ms.advance() == 1 { 1.0 } else { -1.0 };
            *sample = Complex32::new(chip, 0.0);
        });

        Self { pn_sequence }
    }

    pub fn pn_sequence(&self) -> &[Complex32; PN_SEQUENCE_LEN] {
        &self.pn_sequence
    }
}

impl Default for PreambleSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// +1 for odd `n`, -1 for even `n`.
fn alternating(n: usize) -> FP {
    if n % 2 == 1 {
        FP::ONE
    } else {
        -FP::ONE
    }
}

fn to_sample(value: FP) -> Complex32 {
    Complex32::new(value.into(), 0.0)
}

/// Raised-cosine ramp from 0 towards 1. The frame starts here, so the
/// alternating sign follows the absolute sample index.
pub fn ramp_up(segment: &mut [Complex32]) {
    let len = FP::from(segment.len());

    segment.iter_mut().enumerate().for_each(|(i, sample)| {
        let phase = FP::PI * FP::from(i) / len;
        *sample = to_sample(alternating(i) * FP::from(0.5) * (FP::ONE - phase.cos()));
    });
}

/// Alternating +/-1 pattern. `offset` is the absolute frame index of the
/// first sample, so parity continues from the ramp-up.
pub fn phasing(segment: &mut [Complex32], offset: usize) {
    segment.iter_mut().enumerate().for_each(|(i, sample)| {
        *sample = to_sample(alternating(offset + i));
    });
}

/// Raised-cosine ramp from 1 towards 0 over the segment's own length. The
/// alternating sign restarts at the segment.
pub fn ramp_down(segment: &mut [Complex32]) {
    let len = FP::from(segment.len());

    segment.iter_mut().enumerate().for_each(|(i, sample)| {
        let phase = FP::PI * FP::from(i) / len;
        *sample = to_sample(alternating(i) * FP::from(0.5) * (FP::ONE + phase.cos()));
    });
}
