use crate::{KeccakState, LANE_BITS};

/// Keccak-f **θ step**.
///
/// 1. For all pairs `(x, z)` such that `0 ≤ x < 5` and `0 ≤ z < 64`:  
///    `C[x, z] = A[x, 0, z] ^ A[x, 1, z] ^ A[x, 2, z] ^ A[x, 3, z] ^ A[x, 4, z]`
/// 2. For all pairs `(x, z)` such that `0 ≤ x < 5` and `0 ≤ z < 64`:  
///    `D[x, z] = C[(x - 1) mod 5, z] ^ C[(x + 1) mod 5, (z - 1) mod 64]`
/// 3. For all triples `(x, y, z)` such that `0 ≤ x, y < 5` and `0 ≤ z < 64`:  
///    `A′[x, y, z] = A[x, y, z] ^ D[x, z]`
#[allow(clippy::needless_range_loop)]
pub fn keccak_f_theta(a: &KeccakState) -> KeccakState {
    // Step 1: column parities
    let mut c = [[false; LANE_BITS]; 5];
    for x in 0..5 {
        for z in 0..LANE_BITS {
            c[x][z] = (0..5).fold(false, |parity, y| parity ^ a.bit(x, y, z));
        }
    }

    // Step 2
    let mut d = [[false; LANE_BITS]; 5];
    for x in 0..5 {
        for z in 0..LANE_BITS {
            d[x][z] = c[(x + 4) % 5][z] ^ c[(x + 1) % 5][(z + LANE_BITS - 1) % LANE_BITS];
        }
    }

    // Step 3
    KeccakState::from_fn(|x, y, z| a.bit(x, y, z) ^ d[x][z])
}
