#[macro_use]
extern crate nolog;

pub mod checksum;
pub mod error;
pub mod fec;
pub mod frame;
pub mod interleaver;
pub mod modem;
pub mod number;
pub mod packing;
pub mod scramble;
pub mod sequence;
pub mod wav;

pub use error::{ConfigError, FecError, FrameError};
pub use frame::{FrameGenerator, FrameProperties};
pub use modem::ModulationScheme;
