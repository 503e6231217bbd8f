use thiserror::Error;

use crate::modem::ModulationScheme;

/// Rejected frame properties. The generator keeps its previous state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("modulation depth must be greater than 0")]
    InvalidDepth,

    #[error("modulation depth {0} exceeds 8 bits per symbol")]
    UnsupportedDepth(u8),

    #[error("{scheme} cannot run at {depth} bits per symbol")]
    SchemeDepthMismatch { scheme: ModulationScheme, depth: u8 },

    #[error("payload of {0} bytes does not fit the 16-bit header length field")]
    PayloadTooLong(usize),

    #[error("unknown modulation scheme id {0}")]
    UnknownScheme(u8),

    #[error("frame length does not fit in usize")]
    FrameTooLong,
}

/// Caller supplied a buffer of the wrong size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("{field} buffer has {actual} elements, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FecError {
    #[error("too many errors to correct")]
    Uncorrectable,

    #[error("encoded block has {actual} bytes, expected {expected}")]
    BlockLength { expected: usize, actual: usize },
}
