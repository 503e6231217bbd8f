use core::fmt;
use num_complex::Complex32;
use std::str::FromStr;

use crate::error::ConfigError;

mod ask;
mod bpsk;
mod psk;
mod qam;
mod qpsk;

pub use ask::Ask;
pub use bpsk::Bpsk;
pub use psk::Psk;
pub use qam::Qam;
pub use qpsk::Qpsk;

pub const MAX_BITS_PER_SYMBOL: u8 = 8;

/// Maps one symbol to one complex baseband sample.
///
/// Only the low `bits_per_symbol` bits of a symbol are used.
pub trait Modem: Send + Sync {
    fn bits_per_symbol(&self) -> usize;
    fn modulate(&self, symbol: u8) -> Complex32;
}

/// Modulation family carried in the high nibble of header byte 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModulationScheme {
    Psk = 1,
    Ask = 2,
    Qam = 3,
    Bpsk = 4,
    Qpsk = 5,
}

impl ModulationScheme {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn create(self, depth: u8) -> Result<Box<dyn Modem>, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if depth > MAX_BITS_PER_SYMBOL {
            return Err(ConfigError::UnsupportedDepth(depth));
        }

        let mismatch = ConfigError::SchemeDepthMismatch {
            scheme: self,
            depth,
        };

        let modem: Box<dyn Modem> = match self {
            Self::Bpsk if depth == 1 => Box::new(Bpsk),
            Self::Qpsk if depth == 2 => Box::new(Qpsk),
            Self::Bpsk | Self::Qpsk => return Err(mismatch),
            Self::Psk => Box::new(Psk::new(depth)),
            Self::Ask => Box::new(Ask::new(depth)),
            Self::Qam if depth >= 2 => Box::new(Qam::new(depth)),
            Self::Qam => return Err(mismatch),
        };

        Ok(modem)
    }
}

impl TryFrom<u8> for ModulationScheme {
    type Error = ConfigError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Psk),
            2 => Ok(Self::Ask),
            3 => Ok(Self::Qam),
            4 => Ok(Self::Bpsk),
            5 => Ok(Self::Qpsk),
            _ => Err(ConfigError::UnknownScheme(id)),
        }
    }
}

impl fmt::Display for ModulationScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Psk => "psk",
            Self::Ask => "ask",
            Self::Qam => "qam",
            Self::Bpsk => "bpsk",
            Self::Qpsk => "qpsk",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ModulationScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "psk" => Ok(Self::Psk),
            "ask" => Ok(Self::Ask),
            "qam" => Ok(Self::Qam),
            "bpsk" => Ok(Self::Bpsk),
            "qpsk" => Ok(Self::Qpsk),
            other => Err(format!("unknown modulation scheme: {}", other)),
        }
    }
}

/// Index of the constellation point that carries Gray label `label`.
fn gray_position(label: u8) -> u8 {
    let mut position = label;
    let mut shift = label >> 1;
    while shift != 0 {
        position ^= shift;
        shift >>= 1;
    }
    position
}

fn symbol_mask(bits: usize) -> u8 {
    ((1u16 << bits) - 1) as u8
}

/// Evenly spaced amplitude levels `-(M-1) .. (M-1)` in Gray order.
fn gray_levels(bits: usize) -> Vec<f32> {
    let order = 1usize << bits;
    (0..order)
        .map(|label| {
            let position = gray_position(label as u8) as f32;
            2.0 * position - (order as f32 - 1.0)
        })
        .collect()
}
