use faer::{c64, Mat, MatRef};

use crate::{
    basis::HyperfineBasis,
    error::{DiatomError, Result},
    vectors::AngularVectors,
};

/// Most positive root of `a x² + b x + c = 0`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> f64 {
    let discriminant = (b * b - 4.0 * a * c).sqrt();

    f64::max((-b + discriminant) / (2.0 * a), (-b - discriminant) / (2.0 * a))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);

    (value * scale).round() / scale
}

/// `<psi_k| op |psi_k>` for column `k` of `states`.
pub fn expectation(op: MatRef<c64>, states: MatRef<c64>, k: usize) -> c64 {
    let bra = states.col(k).adjoint() * op;

    bra.as_ref() * states.col(k)
}

/// Approximate quantum numbers `(J, M_J)` of eigenstates.
#[derive(Clone, Debug, PartialEq)]
pub struct StateLabels {
    pub magnitudes: Vec<f64>,
    pub projections: Vec<f64>,
}

/// Labels eigenstates by expectation values of angular momentum operators.
///
/// Labels are only meaningful for states that are close to eigenstates
/// of the chosen operators.
pub struct StateLabeler {
    n_squared: Mat<c64>,
    n_z: Mat<c64>,
    i_squared: Mat<c64>,
    i_z: Mat<c64>,
    f_squared: Mat<c64>,
    f_z: Mat<c64>,
}

impl StateLabeler {
    pub fn new(basis: &HyperfineBasis) -> Self {
        Self::from_vectors(&AngularVectors::new(basis))
    }

    pub fn from_vectors(vectors: &AngularVectors) -> Self {
        let nuclear = vectors.nuclear();
        let total = vectors.total();

        Self {
            n_squared: vectors.n.squared(),
            n_z: vectors.n.z.clone(),
            i_squared: nuclear.squared(),
            i_z: nuclear.z,
            f_squared: total.squared(),
            f_z: total.z,
        }
    }

    pub fn size(&self) -> usize {
        self.n_z.nrows()
    }

    /// Rotational labels `(N, M_N)` rounded to integers.
    pub fn label_n_mn(&self, states: MatRef<c64>, locs: Option<&[usize]>) -> Result<StateLabels> {
        self.label(self.n_squared.as_ref(), self.n_z.as_ref(), states, locs, 0)
    }

    /// Total nuclear spin labels `(I, M_I)` rounded to one decimal.
    pub fn label_i_mi(&self, states: MatRef<c64>, locs: Option<&[usize]>) -> Result<StateLabels> {
        self.label(self.i_squared.as_ref(), self.i_z.as_ref(), states, locs, 1)
    }

    /// Total angular momentum labels `(F, M_F)` rounded to one decimal.
    pub fn label_f_mf(&self, states: MatRef<c64>, locs: Option<&[usize]>) -> Result<StateLabels> {
        self.label(self.f_squared.as_ref(), self.f_z.as_ref(), states, locs, 1)
    }

    fn label(
        &self,
        squared: MatRef<c64>,
        z: MatRef<c64>,
        states: MatRef<c64>,
        locs: Option<&[usize]>,
        decimals: i32,
    ) -> Result<StateLabels> {
        let columns = selected_columns(self.size(), states, locs)?;

        let magnitudes = columns
            .iter()
            .map(|&k| {
                let value = expectation(squared, states, k).re;

                round_to(solve_quadratic(1.0, 1.0, -value), decimals)
            })
            .collect();

        let projections = columns
            .iter()
            .map(|&k| round_to(expectation(z, states, k).re, decimals))
            .collect();

        Ok(StateLabels {
            magnitudes,
            projections,
        })
    }
}

/// Validates `states` against basis `size` and returns the columns to use.
pub(crate) fn selected_columns(
    size: usize,
    states: MatRef<c64>,
    locs: Option<&[usize]>,
) -> Result<Vec<usize>> {
    if states.nrows() != size {
        return Err(DiatomError::DimensionMismatch {
            what: "state vectors",
            expected: size,
            found: states.nrows(),
        });
    }

    match locs {
        Some(locs) => {
            if let Some(&index) = locs.iter().find(|&&index| index >= states.ncols()) {
                return Err(DiatomError::IndexOutOfRange {
                    index,
                    len: states.ncols(),
                });
            }

            Ok(locs.to_vec())
        }
        None => Ok((0..states.ncols()).collect()),
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use faer::{c64, Mat};
    use quantum::operator::Operator;

    use crate::{basis::HyperfineBasis, error::DiatomError};

    use super::{solve_quadratic, StateLabeler};

    #[test]
    fn test_solve_quadratic() {
        assert_relative_eq!(solve_quadratic(1.0, 1.0, -6.0), 2.0);
        assert_relative_eq!(solve_quadratic(1.0, 1.0, -0.75), 0.5);
        assert_relative_eq!(solve_quadratic(1.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_uncoupled_labels() {
        let basis = HyperfineBasis::from_f64(2, 0.5, 1.0).unwrap();
        let labeler = StateLabeler::new(&basis);
        let identity = Operator::identity(basis.size()).into_backed();

        let labels = labeler.label_n_mn(identity.as_ref(), None).unwrap();
        for (k, element) in basis.elements().iter().enumerate() {
            assert_eq!(labels.magnitudes[k], element.n as f64);
            assert_eq!(labels.projections[k], element.mn as f64);
        }

        let spins = labeler.label_i_mi(identity.as_ref(), Some(&[0, 5])).unwrap();
        // |M1 = 1/2, M2 = 1> is stretched with I = 3/2
        assert_eq!(spins.magnitudes[0], 1.5);
        assert_eq!(spins.projections[0], 1.5);
        assert_eq!(spins.projections[1], -1.5);

        let total = labeler.label_f_mf(identity.as_ref(), Some(&[0])).unwrap();
        assert_eq!(total.magnitudes, vec![1.5]);
        assert_eq!(total.projections, vec![1.5]);
    }

    #[test]
    fn test_invalid_states() {
        let basis = HyperfineBasis::from_f64(1, 0.5, 0.5).unwrap();
        let labeler = StateLabeler::new(&basis);

        let wrong_size = Mat::<c64>::zeros(3, 3);
        assert!(matches!(
            labeler.label_n_mn(wrong_size.as_ref(), None),
            Err(DiatomError::DimensionMismatch { expected: 16, found: 3, .. })
        ));

        let states = Mat::<c64>::zeros(16, 4);
        assert!(matches!(
            labeler.label_f_mf(states.as_ref(), Some(&[1, 4])),
            Err(DiatomError::IndexOutOfRange { index: 4, len: 4 })
        ));
    }
}
