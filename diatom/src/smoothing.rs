use faer::{c64, Mat};
use tracing::debug;

use crate::{
    error::{DiatomError, Result},
    sweep::SweepResult,
};

/// For every column of `previous` the column of `current` with the largest overlap.
fn best_overlaps(previous: &Mat<c64>, current: &Mat<c64>) -> Vec<usize> {
    let overlaps = previous.adjoint() * current.as_ref();

    (0..overlaps.nrows())
        .map(|j| {
            let mut best = 0;
            let mut best_norm = f64::NEG_INFINITY;
            for k in 0..overlaps.ncols() {
                let norm = overlaps[(j, k)].norm();
                if norm > best_norm {
                    best = k;
                    best_norm = norm;
                }
            }

            best
        })
        .collect()
}

impl SweepResult {
    /// Reorders states at every step so that state `k` follows the eigenvector
    /// with the largest overlap with state `k` of the previous step.
    ///
    /// Matching is greedy per state, so nearly degenerate states can be
    /// matched twice. Step sizes have to resolve avoided crossings.
    pub fn sort_smooth(&mut self) -> Result<()> {
        let states = self.states.as_mut().ok_or(DiatomError::MissingStates)?;
        debug!("adiabatic sorting of {} steps", states.len());

        for step in 1..states.len() {
            let labels = best_overlaps(&states[step - 1], &states[step]);

            let energies: Vec<f64> = (0..self.energies.nrows())
                .map(|k| self.energies[(k, step)])
                .collect();
            let current = states[step].clone();

            for (k, &l) in labels.iter().enumerate() {
                if l == k {
                    continue;
                }

                self.energies[(k, step)] = energies[l];
                for i in 0..current.nrows() {
                    states[step][(i, k)] = current[(i, l)];
                }
            }
        }

        Ok(())
    }
}
