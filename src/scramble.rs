const SCRAMBLE_MASK: [u8; 4] = [0xb4, 0x6a, 0x8b, 0xe5];

/// Whitens `data` in place by XOR with a repeating 4-byte mask.
///
/// The transform is its own inverse.
pub fn scramble(data: &mut [u8]) {
    data.iter_mut()
        .zip(SCRAMBLE_MASK.iter().cycle())
        .for_each(|(byte, mask)| *byte ^= mask);
}

pub fn unscramble(data: &mut [u8]) {
    scramble(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEQUENCE_BYTES: usize = 15;

    #[test]
    fn test_scramble_zeros_shows_mask() {
        let mut data = [0u8; 6];
        scramble(&mut data);
        assert_eq!(data, [0xb4, 0x6a, 0x8b, 0xe5, 0xb4, 0x6a]);
    }

    #[test]
    fn test_scramble_reversible() {
        let data = (0..TEST_SEQUENCE_BYTES)
            .map(|_| rand::random::<u8>())
            .collect::<Vec<_>>();

        let mut whitened = data.clone();
        scramble(&mut whitened);
        assert_ne!(data, whitened);

        unscramble(&mut whitened);
        assert_eq!(data, whitened);
    }
}
