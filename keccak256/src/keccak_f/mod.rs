mod chi;
mod iota;
mod pi;
mod rho;
mod round;
mod theta;

pub use chi::keccak_f_chi;
pub use iota::keccak_f_iota;
pub use pi::keccak_f_pi;
pub use rho::keccak_f_rho;
pub use round::keccak_f_round;
pub use theta::keccak_f_theta;

use tracing::trace;

use crate::{KeccakState, ROUNDS};

/// Full Keccak-f[1600] permutation
pub fn keccak_f(state: &KeccakState) -> KeccakState {
    let mut state = *state;
    for round in 0..ROUNDS {
        state = keccak_f_round(&state, round);
        trace!("keccak-f round {:>2}: A[0, 0] = {:#018x}", round, state.lane(0, 0));
    }
    state
}

/// Iterator that yields the state after each round of Keccak-f
pub struct KeccakRoundIterator {
    state: KeccakState,
    round: usize,
}

impl KeccakRoundIterator {
    pub fn new(initial_state: KeccakState) -> Self {
        Self { state: initial_state, round: 0 }
    }
}

impl Iterator for KeccakRoundIterator {
    type Item = (KeccakState, usize); // (state_after_round, round_number)

    fn next(&mut self) -> Option<Self::Item> {
        if self.round >= ROUNDS {
            return None;
        }

        let current_round = self.round;
        self.state = keccak_f_round(&self.state, current_round);
        self.round += 1;

        Some((self.state, current_round))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ROUNDS - self.round;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KeccakRoundIterator {}

pub fn keccak_f_rounds(initial_state: KeccakState) -> KeccakRoundIterator {
    KeccakRoundIterator::new(initial_state)
}
