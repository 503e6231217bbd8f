mod buffer;
mod generator;
mod header;
mod length;
mod payload;
mod preamble;
mod properties;

pub use buffer::ExactBuffer;
pub use generator::FrameGenerator;
pub use header::{FrameHeader, HeaderFields};
pub use header::{ENCODED_HEADER_LEN, HEADER_LEN, HEADER_SYMBOLS, USER_HEADER_LEN};
pub use length::{checked_frame_length, frame_length, payload_symbol_count};
pub use payload::Payload;
pub use preamble::{PreambleSequence, PN_SEQUENCE_LEN};
pub use properties::FrameProperties;
