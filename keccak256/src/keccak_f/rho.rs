use crate::{KeccakState, LANE_BITS, RHO_OFFSETS};

/// Keccak-f **ρ step**.
///
/// For all triples `(x, y, z)` such that `0 ≤ x, y < 5` and `0 ≤ z < 64`:  
/// `A′[x, y, z] = A[x, y, (z - offset[x, y]) mod 64]`
pub fn keccak_f_rho(a: &KeccakState) -> KeccakState {
    KeccakState::from_fn(|x, y, z| {
        let offset = RHO_OFFSETS[x][y] as usize;
        a.bit(x, y, (z + LANE_BITS - offset) % LANE_BITS)
    })
}
