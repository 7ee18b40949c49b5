/// Converts a byte to 8 individual bits (LSB first)
pub fn byte_to_bits(byte: u8) -> [bool; 8] {
    let mut bits = [false; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> i) & 1 == 1;
    }
    bits
}

/// Converts up to 8 bits to a byte (LSB first).
/// Missing high bits are taken as zero.
pub fn bits_to_byte(bits: &[bool]) -> u8 {
    debug_assert!(bits.len() <= 8);
    bits.iter().rev().fold(0u8, |byte, &bit| (byte << 1) | bit as u8)
}

/// Expands a byte sequence into its bit sequence.
///
/// Bit `8 * i + j` of the output is the bit of significance `j` of `bytes[i]`,
/// so the output always holds `8 * bytes.len()` bits.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend_from_slice(&byte_to_bits(byte));
    }
    bits
}

/// Packs a bit sequence into bytes, 8 bits per byte, LSB first.
///
/// This is the inverse of [`bytes_to_bits`] for any bit sequence whose length is a
/// multiple of 8. A trailing group of fewer than 8 bits lands in a final byte whose
/// missing high bits are zero.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8).map(bits_to_byte).collect()
}

/// Formats bits as colon separated hex bytes, e.g. `01:00:80`
pub fn format_bits(bits: &[bool]) -> String {
    let mut output = String::with_capacity(bits.len().div_ceil(8) * 3);

    for (k, chunk) in bits.chunks(8).enumerate() {
        if k > 0 {
            output.push(':');
        }
        let byte = bits_to_byte(chunk);
        output.push(nibble_to_char(byte >> 4));
        output.push(nibble_to_char(byte & 0x0F));
    }

    output
}

fn nibble_to_char(b: u8) -> char {
    match b {
        0..=9 => (b'0' + b) as char,
        10..=15 => (b'a' + b - 10) as char,
        _ => unreachable!("nibble out of range: {}", b),
    }
}
