use crate::KeccakState;

/// Keccak-f **χ step**.
///
/// 1. For all triples `(x, y, z)` such that `0 ≤ x, y < 5` and `0 ≤ z < 64`, compute:  
///    `A′[x, y, z] = A[x, y, z] ^ (¬A[(x + 1) mod 5, y, z] & A[(x + 2) mod 5, y, z])`
///
/// 2. Return `A′`
pub fn keccak_f_chi(a: &KeccakState) -> KeccakState {
    KeccakState::from_fn(|x, y, z| {
        let x1 = (x + 1) % 5;
        let x2 = (x + 2) % 5;
        a.bit(x, y, z) ^ (!a.bit(x1, y, z) & a.bit(x2, y, z))
    })
}
