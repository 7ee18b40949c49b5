use tracing::trace;

use crate::{keccak_f, Block, KeccakState, BITRATE, OUTPUT_BITS};

const _: () = assert!(OUTPUT_BITS <= BITRATE);

/// XORs a block into the rate part of the state and applies Keccak-f.
/// The capacity bits are not touched by the XOR.
pub fn absorb(state: &KeccakState, block: &Block) -> KeccakState {
    let mut bits = *state.bits();
    for (bit, &b) in bits[..BITRATE].iter_mut().zip(block.iter()) {
        *bit ^= b;
    }

    keccak_f(&KeccakState::from_bits(bits))
}

/// Absorbs all the blocks of a padded message, in order, starting from the zero state
pub fn absorb_all(blocks: &[Block]) -> KeccakState {
    blocks.iter().enumerate().fold(KeccakState::new(), |state, (i, block)| {
        trace!("absorbing block {}/{}", i + 1, blocks.len());
        absorb(&state, block)
    })
}

/// Reads `output_bits` bits out of the rate part of the state.
///
/// When more bits than the rate are requested, a full rate is read, Keccak-f is applied
/// and reading continues from the new state.
pub fn squeeze(state: &KeccakState, output_bits: usize) -> Vec<bool> {
    let mut output = Vec::with_capacity(output_bits);
    let mut state = *state;

    loop {
        let take = (output_bits - output.len()).min(BITRATE);
        output.extend_from_slice(&state.rate()[..take]);

        if output.len() == output_bits {
            break;
        }

        trace!("squeeze: {} of {} bits read, permuting", output.len(), output_bits);
        state = keccak_f(&state);
    }

    output
}

/// Squeezes the 256-bit digest, which always fits in a single rate
pub fn squeeze_256(state: &KeccakState) -> [bool; OUTPUT_BITS] {
    let mut output = [false; OUTPUT_BITS];
    output.copy_from_slice(&state.rate()[..OUTPUT_BITS]);
    output
}
