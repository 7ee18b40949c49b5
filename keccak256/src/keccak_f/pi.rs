use crate::{bit_position, KeccakState, LANE_BITS, STATE_BITS};

/// Keccak-f **π step**.
/// Rearranges the positions of the lanes: the bit at `(x, y, z)` moves to
/// `(y, (2x + 3y) mod 5, z)`.
pub fn keccak_f_pi(a: &KeccakState) -> KeccakState {
    let mut bits = [false; STATE_BITS];

    for y in 0..5 {
        for x in 0..5 {
            let new_x = y;
            let new_y = (2 * x + 3 * y) % 5;
            for z in 0..LANE_BITS {
                bits[bit_position(new_x, new_y, z)] = a.bit(x, y, z);
            }
        }
    }

    KeccakState::from_bits(bits)
}
