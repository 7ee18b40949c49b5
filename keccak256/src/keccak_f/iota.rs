use crate::{KeccakState, KECCAK_F_RC, ROUNDS};

/// Keccak-f **ι step**.
///
/// 1. For all triples `(x, y, z)` such that `0 ≤ x, y < 5` and `0 ≤ z < 64`, let  
///    `A′[x, y, z] = A[x, y, z]`
///
/// 2. For all `z` such that `0 ≤ z < 64`, let  
///    `A′[0, 0, z] = A′[0, 0, z] ^ RC[z]`
pub fn keccak_f_iota(a: &KeccakState, round: usize) -> KeccakState {
    assert!(round < ROUNDS, "round must be 0-23");

    let rc = &KECCAK_F_RC[round];
    KeccakState::from_fn(|x, y, z| a.bit(x, y, z) ^ (x == 0 && y == 0 && rc[z]))
}
