use core::fmt;
use num_complex::Complex32;

use super::preamble::{self, PreambleSequence, PN_SEQUENCE_LEN};
use super::{checked_frame_length, frame_length, payload_symbol_count};
use super::{FrameHeader, FrameProperties, Payload, HEADER_SYMBOLS, USER_HEADER_LEN};
use crate::error::{ConfigError, FrameError};
use crate::modem::{Bpsk, Modem};

/// Builds complete frames: ramp-up, phasing, p/n sequence, header, payload
/// and ramp-down.
///
/// One generator must not be used from several threads at once; separate
/// generators share nothing.
pub struct FrameGenerator {
    props: FrameProperties,
    preamble: PreambleSequence,
    header: FrameHeader,
    payload: Payload,
    payload_modem: Box<dyn Modem>,
    num_payload_symbols: usize,
    frame_len: usize,
}

/// Hands out consecutive segments of the output frame.
struct SegmentWriter<'a> {
    frame: &'a mut [Complex32],
    written: usize,
}

impl<'a> SegmentWriter<'a> {
    fn next(&mut self, len: usize) -> &mut [Complex32] {
        let start = self.written;
        self.written += len;
        &mut self.frame[start..self.written]
    }
}

/// Everything `set_properties` commits, computed before any field changes.
struct Checked {
    payload_modem: Box<dyn Modem>,
    num_payload_symbols: usize,
    frame_len: usize,
}

impl FrameGenerator {
    /// Generator with the default properties (BPSK, no payload).
    pub fn new() -> Self {
        let props = FrameProperties::default();
        let checked = Checked {
            payload_modem: Box::new(Bpsk),
            num_payload_symbols: payload_symbol_count(props.payload_len, props.mod_bps as usize),
            frame_len: frame_length(&props),
        };
        Self::assemble(props, checked)
    }

    pub fn with_properties(props: FrameProperties) -> Result<Self, ConfigError> {
        let checked = Self::validate(&props)?;
        Ok(Self::assemble(props, checked))
    }

    fn assemble(props: FrameProperties, checked: Checked) -> Self {
        let mut generator = Self {
            props,
            preamble: PreambleSequence::new(),
            header: FrameHeader::new(),
            payload: Payload::new(),
            payload_modem: checked.payload_modem,
            num_payload_symbols: checked.num_payload_symbols,
            frame_len: checked.frame_len,
        };
        generator.configure_payload();
        generator
    }

    /// Checks everything that can fail before any state changes.
    fn validate(props: &FrameProperties) -> Result<Checked, ConfigError> {
        if props.mod_bps == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if props.payload_len > u16::MAX as usize {
            return Err(ConfigError::PayloadTooLong(props.payload_len));
        }

        let payload_modem = props.mod_scheme.create(props.mod_bps)?;
        let frame_len = checked_frame_length(props).ok_or(ConfigError::FrameTooLong)?;

        Ok(Checked {
            payload_modem,
            num_payload_symbols: payload_symbol_count(props.payload_len, props.mod_bps as usize),
            frame_len,
        })
    }

    fn apply(&mut self, props: FrameProperties, checked: Checked) {
        self.props = props;
        self.payload_modem = checked.payload_modem;
        self.num_payload_symbols = checked.num_payload_symbols;
        self.frame_len = checked.frame_len;
        self.configure_payload();
    }

    fn configure_payload(&mut self) {
        let reallocated = self
            .payload
            .configure(self.props.payload_len, self.num_payload_symbols);

        if reallocated > 0 {
            info!(
                "Reallocated {} payload buffers: {} bytes, {} symbols",
                reallocated,
                self.props.payload_len,
                self.num_payload_symbols
            );
        }
    }

    pub fn properties(&self) -> FrameProperties {
        self.props
    }

    /// Replaces the frame properties. On error nothing changes.
    pub fn set_properties(&mut self, props: FrameProperties) -> Result<(), ConfigError> {
        let checked = Self::validate(&props).map_err(|error| {
            warn!("Rejected frame properties: {}", error);
            error
        })?;

        let previous_len = self.frame_len;
        self.apply(props, checked);

        info!(
            "Frame properties updated: {}-bit {}, {} -> {} samples",
            props.mod_bps,
            props.mod_scheme,
            previous_len,
            self.frame_len
        );

        Ok(())
    }

    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    pub fn num_payload_symbols(&self) -> usize {
        self.num_payload_symbols
    }

    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Writes one frame into `frame`, which must hold exactly `frame_len()`
    /// samples. `payload` must match the configured payload length.
    pub fn execute(
        &mut self,
        header: &[u8],
        payload: &[u8],
        frame: &mut [Complex32],
    ) -> Result<(), FrameError> {
        let user: &[u8; USER_HEADER_LEN] =
            header.try_into().map_err(|_| FrameError::LengthMismatch {
                field: "header",
                expected: USER_HEADER_LEN,
                actual: header.len(),
            })?;

        if payload.len() != self.props.payload_len {
            return Err(FrameError::LengthMismatch {
                field: "payload",
                expected: self.props.payload_len,
                actual: payload.len(),
            });
        }

        if frame.len() != self.frame_len {
            return Err(FrameError::LengthMismatch {
                field: "frame",
                expected: self.frame_len,
                actual: frame.len(),
            });
        }

        self.header.encode(user, &self.props);
        self.header.modulate();

        self.payload.pack(payload, self.props.mod_bps as usize);
        self.payload.modulate(self.payload_modem.as_ref());

        let mut writer = SegmentWriter { frame, written: 0 };

        preamble::ramp_up(writer.next(self.props.rampup_len));

        let offset = writer.written;
        preamble::phasing(writer.next(self.props.phasing_len), offset);

        writer
            .next(PN_SEQUENCE_LEN)
            .copy_from_slice(self.preamble.pn_sequence());

        writer
            .next(HEADER_SYMBOLS)
            .copy_from_slice(self.header.samples());

        writer
            .next(self.num_payload_symbols)
            .copy_from_slice(self.payload.samples());

        preamble::ramp_down(writer.next(self.props.rampdn_len));

        assert_eq!(
            writer.written, self.frame_len,
            "assembled frame length differs from computed frame length"
        );

        Ok(())
    }

    /// Like [`execute`](Self::execute), allocating the output frame.
    pub fn generate(
        &mut self,
        header: &[u8],
        payload: &[u8],
    ) -> Result<Vec<Complex32>, FrameError> {
        let mut frame = vec![Complex32::default(); self.frame_len];
        self.execute(header, payload, &mut frame)?;
        Ok(frame)
    }
}

impl Default for FrameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FrameGenerator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "frame generator [{} samples]:", self.frame_len)?;
        writeln!(f, "    ramp up len         : {}", self.props.rampup_len)?;
        writeln!(f, "    phasing len         : {}", self.props.phasing_len)?;
        writeln!(f, "    p/n sequence len    : {}", PN_SEQUENCE_LEN)?;
        writeln!(f, "    payload len         : {} bytes", self.props.payload_len)?;
        writeln!(
            f,
            "    modulation scheme   : {}-{}",
            1u32 << self.props.mod_bps,
            self.props.mod_scheme
        )?;
        writeln!(f, "    num payload symbols : {}", self.num_payload_symbols)?;
        write!(f, "    ramp dn len         : {}", self.props.rampdn_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modem::ModulationScheme;

    const USER_HEADER: [u8; USER_HEADER_LEN] = *b"flexhdr!";

    #[test]
    fn test_default_generator() {
        let generator = FrameGenerator::new();

        assert_eq!(generator.properties(), FrameProperties::default());
        assert_eq!(generator.frame_len(), 368);
        assert_eq!(generator.num_payload_symbols(), 0);
    }

    #[test]
    fn test_set_properties_recomputes_lengths() {
        let mut generator = FrameGenerator::new();

        let props = FrameProperties {
            payload_len: 100,
            mod_scheme: ModulationScheme::Qpsk,
            mod_bps: 2,
            ..FrameProperties::default()
        };
        generator.set_properties(props).unwrap();

        assert_eq!(generator.num_payload_symbols(), 400);
        assert_eq!(generator.frame_len(), 768);
        assert_eq!(generator.payload().bytes().capacity(), 100);
        assert_eq!(generator.payload().symbols().capacity(), 400);
        assert_eq!(generator.payload().samples().capacity(), 400);
    }

    #[test]
    fn test_rejected_properties_leave_state_intact() {
        let props = FrameProperties {
            payload_len: 12,
            mod_scheme: ModulationScheme::Psk,
            mod_bps: 3,
            ..FrameProperties::default()
        };
        let mut generator = FrameGenerator::with_properties(props).unwrap();
        let frame_len = generator.frame_len();
        let reallocations = generator.payload().reallocations();

        let rejected = [
            (
                FrameProperties { mod_bps: 0, ..props },
                ConfigError::InvalidDepth,
            ),
            (
                FrameProperties { mod_bps: 9, ..props },
                ConfigError::UnsupportedDepth(9),
            ),
            (
                FrameProperties {
                    mod_scheme: ModulationScheme::Bpsk,
                    payload_len: 500,
                    ..props
                },
                ConfigError::SchemeDepthMismatch {
                    scheme: ModulationScheme::Bpsk,
                    depth: 3,
                },
            ),
            (
                FrameProperties {
                    payload_len: 70_000,
                    ..props
                },
                ConfigError::PayloadTooLong(70_000),
            ),
            (
                FrameProperties {
                    rampup_len: usize::MAX - 100,
                    ..props
                },
                ConfigError::FrameTooLong,
            ),
            (
                FrameProperties {
                    rampdn_len: usize::MAX,
                    ..props
                },
                ConfigError::FrameTooLong,
            ),
        ];

        for (bad, error) in rejected {
            assert_eq!(generator.set_properties(bad), Err(error));
            assert_eq!(generator.properties(), props);
            assert_eq!(generator.frame_len(), frame_len);
            assert_eq!(generator.payload().reallocations(), reallocations);
        }

        let frame = generator.generate(&USER_HEADER, &[0x42; 12]).unwrap();
        assert_eq!(frame.len(), frame_len);
    }

    #[test]
    fn test_execute_rejects_wrong_lengths() {
        let mut generator = FrameGenerator::new();
        let mut frame = vec![Complex32::default(); generator.frame_len()];

        assert_eq!(
            generator.execute(&USER_HEADER[..7], &[], &mut frame),
            Err(FrameError::LengthMismatch {
                field: "header",
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            generator.execute(&USER_HEADER, &[1], &mut frame),
            Err(FrameError::LengthMismatch {
                field: "payload",
                expected: 0,
                actual: 1
            })
        );
        assert_eq!(
            generator.execute(&USER_HEADER, &[], &mut frame[1..]),
            Err(FrameError::LengthMismatch {
                field: "frame",
                expected: 368,
                actual: 367
            })
        );
    }

    #[test]
    fn test_display_summary() {
        let summary = FrameGenerator::new().to_string();

        assert!(summary.starts_with("frame generator [368 samples]:"));
        assert!(summary.contains("2-bpsk"));
    }
}
