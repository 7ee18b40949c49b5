use crate::CodecError;

const WORD_BITS: usize = 64;

/// Expands a 64-bit word into its bits, bit `z` being the bit of significance `z`
pub const fn bits_from_u64(value: u64) -> [bool; 64] {
    let mut bits = [false; 64];
    let mut i = 0;
    while i < 64 {
        bits[i] = (value >> i) & 1 == 1;
        i += 1;
    }
    bits
}

/// Packs up to 64 bits into a word, bit `z` landing at significance `z`
pub fn u64_from_bits(bits: &[bool]) -> u64 {
    debug_assert!(bits.len() <= WORD_BITS);
    bits.iter().rev().fold(0u64, |word, &bit| (word << 1) | bit as u64)
}

/// Expands a sequence of words into `64 * words.len()` bits
pub fn u64s_to_bits(words: &[u64]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(words.len() * WORD_BITS);
    for &word in words {
        bits.extend_from_slice(&bits_from_u64(word));
    }
    bits
}

/// Packs a bit sequence into 64-bit words.
/// The bit count must be a multiple of 64.
pub fn bits_to_u64s(bits: &[bool]) -> Result<Vec<u64>, CodecError> {
    if bits.len() % WORD_BITS != 0 {
        return Err(CodecError::UnalignedLength { len: bits.len(), align: WORD_BITS });
    }

    Ok(bits.chunks_exact(WORD_BITS).map(u64_from_bits).collect())
}
