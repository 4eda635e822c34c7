//! The Poseidon permutation and its fixed-arity entry points.
//!
//! State layout for `k` inputs is `[0, x_1, .., x_k]`: slot 0 is the capacity element
//! and is also the output. Every round adds `t` round constants, applies the S-box to
//! the whole state (full rounds) or to slot 0 only (partial rounds), then multiplies
//! by the MDS matrix.

use crate::HashError;
use crate::constants::{POSEIDON_T2, POSEIDON_T3, PoseidonParams};
use crate::field::pow5;
use ark_bn254::Fr;

fn permute<const T: usize>(params: &PoseidonParams<T>, mut state: [Fr; T]) -> Fr {
    for round in 0..params.total_rounds() {
        let constants = &params.round_constants[round * T..(round + 1) * T];
        let full = params.is_full_round(round);

        for (i, (s, c)) in state.iter_mut().zip(constants).enumerate() {
            *s += c;
            if full || i == 0 {
                *s = pow5(*s);
            }
        }

        state = mix(params.mds, &state);
    }

    state[0]
}

fn mix<const T: usize>(m: &[[Fr; T]; T], state: &[Fr; T]) -> [Fr; T] {
    std::array::from_fn(|row| {
        m[row]
            .iter()
            .zip(state)
            .fold(Fr::from(0u64), |acc, (a, b)| acc + *a * b)
    })
}

/// Poseidon over a single input (width 2).
pub fn hash1(x: Fr) -> Fr {
    permute(&POSEIDON_T2, [Fr::from(0u64), x])
}

/// Poseidon over two inputs (width 3). This is the Merkle tree compression function.
pub fn hash2(x: Fr, y: Fr) -> Fr {
    permute(&POSEIDON_T3, [Fr::from(0u64), x, y])
}

/// Poseidon over a slice, dispatching on its length.
///
/// Only arities 1 and 2 carry embedded tables; every other length fails with
/// [`HashError::InvalidArity`].
pub fn poseidon(inputs: &[Fr]) -> Result<Fr, HashError> {
    match inputs {
        [x] => Ok(hash1(*x)),
        [x, y] => Ok(hash2(*x, *y)),
        _ => Err(HashError::InvalidArity(inputs.len())),
    }
}
