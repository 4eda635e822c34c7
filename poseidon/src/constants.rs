//! Poseidon parameter sets for the BN254 scalar field.

use crate::tables;
use ark_bn254::Fr;

/// Number of full rounds, split evenly before and after the partial rounds.
pub const N_ROUNDS_F: usize = 8;

/// Number of partial rounds, indexed by `t - 2` (i.e. by arity - 1).
pub const N_ROUNDS_P: [usize; 16] = [56, 57, 56, 60, 60, 63, 64, 63, 60, 66, 60, 65, 70, 60, 64, 68];

/// Largest arity the parameterisation is defined for.
pub const MAX_ARITY: usize = N_ROUNDS_P.len();

/// One parameter set for a state of width `T` (arity + 1).
///
/// `round_constants` is the flat table consumed `T` entries per round.
#[derive(Debug)]
pub struct PoseidonParams<const T: usize> {
    pub full_rounds: usize,
    pub partial_rounds: usize,
    pub round_constants: &'static [Fr],
    pub mds: &'static [[Fr; T]; T],
}

impl<const T: usize> PoseidonParams<T> {
    pub const fn total_rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }

    /// Whether `round` applies the S-box to the whole state.
    pub const fn is_full_round(&self, round: usize) -> bool {
        let half = self.full_rounds / 2;
        round < half || round >= half + self.partial_rounds
    }
}

/// Width 2: one input plus the capacity element.
pub static POSEIDON_T2: PoseidonParams<2> = PoseidonParams {
    full_rounds: N_ROUNDS_F,
    partial_rounds: N_ROUNDS_P[0],
    round_constants: &tables::C2,
    mds: &tables::M2,
};

/// Width 3: two inputs plus the capacity element.
pub static POSEIDON_T3: PoseidonParams<3> = PoseidonParams {
    full_rounds: N_ROUNDS_F,
    partial_rounds: N_ROUNDS_P[1],
    round_constants: &tables::C3,
    mds: &tables::M3,
};
