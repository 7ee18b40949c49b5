use super::{keccak_f_chi, keccak_f_iota, keccak_f_pi, keccak_f_rho, keccak_f_theta};
use crate::KeccakState;

/// One round of Keccak-f[1600]: θ, ρ, π, χ and ι applied in that order
pub fn keccak_f_round(state: &KeccakState, round: usize) -> KeccakState {
    let state = keccak_f_theta(state);
    let state = keccak_f_rho(&state);
    let state = keccak_f_pi(&state);
    let state = keccak_f_chi(&state);
    keccak_f_iota(&state, round)
}
