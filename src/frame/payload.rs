use num_complex::Complex32;

use super::ExactBuffer;
use crate::modem::Modem;
use crate::packing::repack;

/// Payload bytes, packed symbols and modulated samples, each sized exactly
/// to the current frame properties.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    bytes: ExactBuffer<u8>,
    symbols: ExactBuffer<u8>,
    samples: ExactBuffer<Complex32>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes the buffers whose required length changed. Returns how many
    /// buffers were reallocated.
    pub fn configure(&mut self, payload_len: usize, num_symbols: usize) -> usize {
        [
            self.bytes.resize(payload_len),
            self.symbols.resize(num_symbols),
            self.samples.resize(num_symbols),
        ]
        .into_iter()
        .filter(|&reallocated| reallocated)
        .count()
    }

    /// Copies `data` in and repacks it into `bits_per_symbol`-bit symbols.
    ///
    /// `data` must be exactly as long as the configured payload.
    pub fn pack(&mut self, data: &[u8], bits_per_symbol: usize) -> usize {
        self.bytes.copy_from_slice(data);

        self.symbols.fill(0);
        repack(&self.bytes, 8, &mut self.symbols, bits_per_symbol)
    }

    pub fn modulate(&mut self, modem: &dyn Modem) {
        self.samples
            .iter_mut()
            .zip(self.symbols.iter())
            .for_each(|(sample, &symbol)| *sample = modem.modulate(symbol));
    }

    pub fn bytes(&self) -> &ExactBuffer<u8> {
        &self.bytes
    }

    pub fn symbols(&self) -> &ExactBuffer<u8> {
        &self.symbols
    }

    pub fn samples(&self) -> &ExactBuffer<Complex32> {
        &self.samples
    }

    pub fn reallocations(&self) -> usize {
        self.bytes.reallocations() + self.symbols.reallocations() + self.samples.reallocations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::payload_symbol_count;
    use crate::modem::{ModulationScheme, Qpsk};

    const TEST_SEQUENCE_BYTES: usize = 25;

    #[test]
    fn test_configure_only_reallocates_changed_buffers() {
        let mut payload = Payload::new();

        assert_eq!(payload.configure(10, 80), 3);
        assert_eq!(payload.configure(10, 80), 0);
        assert_eq!(payload.configure(10, 40), 2);
        assert_eq!(payload.configure(20, 40), 1);

        assert_eq!(payload.bytes().capacity(), 20);
        assert_eq!(payload.symbols().capacity(), 40);
        assert_eq!(payload.samples().capacity(), 40);
        assert_eq!(payload.reallocations(), 6);
    }

    #[test]
    fn test_pack_at_eight_bits_is_identity() {
        let data = (0..TEST_SEQUENCE_BYTES)
            .map(|_| rand::random::<u8>())
            .collect::<Vec<_>>();

        let mut payload = Payload::new();
        payload.configure(TEST_SEQUENCE_BYTES, TEST_SEQUENCE_BYTES);

        assert_eq!(payload.pack(&data, 8), TEST_SEQUENCE_BYTES);
        assert_eq!(payload.symbols()[..], data[..]);
    }

    #[test]
    fn test_pack_clears_previous_symbols() {
        let mut payload = Payload::new();
        let num_symbols = payload_symbol_count(2, 3);
        payload.configure(2, num_symbols);

        payload.pack(&[0xff, 0xff], 3);
        assert_eq!(payload.symbols()[num_symbols - 1], 0b100);

        payload.pack(&[0x00, 0x01], 3);
        assert_eq!(payload.symbols()[..], [0, 0, 0, 0, 0, 0b100]);
    }

    #[test]
    fn test_modulate_maps_every_symbol() {
        let mut payload = Payload::new();
        payload.configure(1, 4);
        payload.pack(&[0b00_01_10_11], 2);
        payload.modulate(&Qpsk);

        let expected = (0..4u8).map(|symbol| Qpsk.modulate(symbol)).collect::<Vec<_>>();
        assert_eq!(payload.samples()[..], expected[..]);

        let modem = ModulationScheme::Psk.create(2).unwrap();
        payload.modulate(modem.as_ref());
        assert_eq!(payload.samples()[0], modem.modulate(0));
    }
}
