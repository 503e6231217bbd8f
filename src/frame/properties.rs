use crate::modem::ModulationScheme;

/// Frame layout and payload modulation. Lengths are in samples except
/// `payload_len`, which counts payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameProperties {
    pub rampup_len: usize,
    pub phasing_len: usize,
    pub payload_len: usize,
    pub mod_scheme: ModulationScheme,
    pub mod_bps: u8,
    pub rampdn_len: usize,
}

impl Default for FrameProperties {
    fn default() -> Self {
        Self {
            rampup_len: 16,
            phasing_len: 16,
            payload_len: 0,
            mod_scheme: ModulationScheme::Bpsk,
            mod_bps: 1,
            rampdn_len: 16,
        }
    }
}
