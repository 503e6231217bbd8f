use bitvec::prelude::*;

type BitVecU8 = BitVec<u8, Msb0>;

/// Repacks `input_width`-bit symbols into `output_width`-bit symbols, MSB first.
///
/// Only the low `input_width` bits of each input element are read. A final
/// partial output symbol is zero padded in its low bits. Writes at most
/// `output.len()` symbols and returns the number written.
pub fn repack(input: &[u8], input_width: usize, output: &mut [u8], output_width: usize) -> usize {
    assert!((1..=8).contains(&input_width), "input width must be 1..=8");
    assert!((1..=8).contains(&output_width), "output width must be 1..=8");

    let mut bits = BitVecU8::with_capacity(input.len() * input_width);
    input.iter().for_each(|symbol| {
        bits.extend_from_bitslice(&symbol.view_bits::<Msb0>()[8 - input_width..]);
    });

    let mut written = 0;
    for (chunk, symbol) in bits.chunks(output_width).zip(output.iter_mut()) {
        *symbol = chunk.load_be::<u8>() << (output_width - chunk.len());
        written += 1;
    }
    written
}

/// Expands every byte into eight one-bit symbols, MSB first.
pub fn unpack_bits(input: &[u8], output: &mut [u8]) -> usize {
    let bits = input.view_bits::<Msb0>();
    bits.iter()
        .zip(output.iter_mut())
        .for_each(|(bit, symbol)| *symbol = *bit as u8);
    bits.len().min(output.len())
}
