use super::{FrameProperties, HEADER_SYMBOLS, PN_SEQUENCE_LEN};

/// Number of `bits_per_symbol`-bit symbols needed for `payload_len` bytes.
///
/// Panics if `bits_per_symbol` is zero.
pub fn payload_symbol_count(payload_len: usize, bits_per_symbol: usize) -> usize {
    (8 * payload_len).div_ceil(bits_per_symbol)
}

/// Total samples in one frame.
///
/// Overflows like plain addition; see [`checked_frame_length`].
pub fn frame_length(props: &FrameProperties) -> usize {
    props.rampup_len
        + props.phasing_len
        + PN_SEQUENCE_LEN
        + HEADER_SYMBOLS
        + payload_symbol_count(props.payload_len, props.mod_bps as usize)
        + props.rampdn_len
}

/// [`frame_length`], or `None` if the sum does not fit in `usize`.
pub fn checked_frame_length(props: &FrameProperties) -> Option<usize> {
    [
        props.phasing_len,
        PN_SEQUENCE_LEN,
        HEADER_SYMBOLS,
        payload_symbol_count(props.payload_len, props.mod_bps as usize),
        props.rampdn_len,
    ]
    .into_iter()
    .try_fold(props.rampup_len, usize::checked_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modem::ModulationScheme;

    #[test]
    fn test_payload_symbol_count() {
        assert_eq!(payload_symbol_count(0, 2), 0);
        assert_eq!(payload_symbol_count(1, 8), 1);
        assert_eq!(payload_symbol_count(1, 3), 3);
        assert_eq!(payload_symbol_count(100, 2), 400);
        assert_eq!(payload_symbol_count(3, 5), 5);
    }

    #[test]
    fn test_default_frame_length() {
        assert_eq!(frame_length(&FrameProperties::default()), 368);
    }

    #[test]
    fn test_frame_length_sums_segments() {
        let props = FrameProperties {
            rampup_len: 7,
            phasing_len: 3,
            payload_len: 10,
            mod_scheme: ModulationScheme::Psk,
            mod_bps: 3,
            rampdn_len: 5,
        };

        assert_eq!(frame_length(&props), 7 + 3 + 64 + 256 + 27 + 5);
    }

    #[test]
    fn test_checked_frame_length() {
        let props = FrameProperties::default();
        assert_eq!(checked_frame_length(&props), Some(frame_length(&props)));

        let huge_rampup = FrameProperties {
            rampup_len: usize::MAX - 100,
            ..props
        };
        assert_eq!(checked_frame_length(&huge_rampup), None);

        let huge_rampdn = FrameProperties {
            rampdn_len: usize::MAX,
            ..props
        };
        assert_eq!(checked_frame_length(&huge_rampdn), None);
    }
}
