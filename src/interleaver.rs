use bitvec::prelude::*;

/// Bit-level block interleaver over a fixed number of bytes.
///
/// Bits are written row by row into a `rows x cols` matrix and read back
/// column by column. `rows` is the largest divisor of the bit count that
/// does not exceed its square root, so 32 bytes give a 16 x 16 matrix.
#[derive(Debug, Clone)]
pub struct Interleaver {
    num_bytes: usize,
    rows: usize,
    cols: usize,
}

impl Interleaver {
    pub fn new(num_bytes: usize) -> Self {
        let num_bits = num_bytes * 8;
        let rows = (1..=num_bits)
            .take_while(|rows| rows * rows <= num_bits)
            .filter(|rows| num_bits % rows == 0)
            .last()
            .unwrap_or(1);

        Self {
            num_bytes,
            rows,
            cols: num_bits / rows,
        }
    }

    pub fn interleave(&self, data: &mut [u8]) {
        self.permute(data, |row, col| (row * self.cols + col, col * self.rows + row));
    }

    pub fn deinterleave(&self, data: &mut [u8]) {
        self.permute(data, |row, col| (col * self.rows + row, row * self.cols + col));
    }

    fn permute<F>(&self, data: &mut [u8], mapping: F)
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        assert_eq!(data.len(), self.num_bytes, "interleaver block size");

        let source = BitVec::<u8, Msb0>::from_slice(data);
        let target = data.view_bits_mut::<Msb0>();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let (from, to) = mapping(row, col);
                target.set(to, source[from]);
            }
        }
    }
}
