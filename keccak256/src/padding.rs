use crate::{Block, BITRATE, BYTERATE};

/// Number of bits [`pad`] produces for a message of `bit_len` bits: the smallest
/// multiple of the rate that leaves room for the two padding bits
pub const fn padded_len(bit_len: usize) -> usize {
    (bit_len + 2).div_ceil(BITRATE) * BITRATE
}

/// Keccak multi-rate padding (pad10*1): a `1` bit right after the message, `0` bits,
/// and a final `1` bit at the end of the last block.
///
/// The result is split into rate-sized blocks. There is always at least one block,
/// also for an empty or block-aligned message.
pub fn pad(message: &[bool]) -> Vec<Block> {
    let total = padded_len(message.len());
    let mut blocks = vec![[false; BITRATE]; total / BITRATE];

    for (block, chunk) in blocks.iter_mut().zip(message.chunks(BITRATE)) {
        block[..chunk.len()].copy_from_slice(chunk);
    }

    // First bit = 1, last bit = 1, others = 0
    let first = message.len();
    blocks[first / BITRATE][first % BITRATE] = true;
    let last = total - 1;
    blocks[last / BITRATE][last % BITRATE] = true;

    blocks
}

/// Byte aligned form of [`pad`]: `0x01` after the message, zero bytes, and `0x80`
/// or'ed into the last byte of the block (`0x81` when both land in the same byte)
pub fn pad_bytes(message: &[u8]) -> Vec<u8> {
    let padding_size = BYTERATE - (message.len() % BYTERATE);

    let mut padded = Vec::with_capacity(message.len() + padding_size);
    padded.extend_from_slice(message);
    padded.push(0b00000001);
    padded.resize(message.len() + padding_size, 0);
    if let Some(last) = padded.last_mut() {
        *last |= 0b10000000;
    }

    padded
}
