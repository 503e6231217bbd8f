use crc::{Crc, CRC_32_ISO_HDLC};

pub const CHECKSUM_BYTES: usize = 4;
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// CRC-32 (ISO-HDLC: polynomial 0x04C11DB7, reflected, init and xorout 0xFFFFFFFF).
pub fn crc32(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEQUENCE_BYTES: usize = 64;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
    }

    #[test]
    fn test_crc32_detects_corruption() {
        let data = (0..TEST_SEQUENCE_BYTES)
            .map(|_| rand::random::<u8>())
            .collect::<Vec<_>>();

        let mut corrupted = data.clone();
        corrupted[7] ^= 0x10;

        assert_eq!(crc32(&data), crc32(&data));
        assert_ne!(crc32(&data), crc32(&corrupted));
    }
}
