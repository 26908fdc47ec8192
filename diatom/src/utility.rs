use faer::{c64, unzip, zip, Mat, MatRef, Side};

use crate::error::{DiatomError, Result};

fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    order
}

/// Rotates the global phase of every column so that its largest component is real positive.
fn fix_phases(vectors: &mut Mat<c64>) {
    for k in 0..vectors.ncols() {
        let mut largest = c64::new(0.0, 0.0);
        for i in 0..vectors.nrows() {
            if vectors[(i, k)].norm() > largest.norm() {
                largest = vectors[(i, k)];
            }
        }
        if largest.norm() == 0.0 {
            continue;
        }

        let phase = largest.conj() / largest.norm();
        for i in 0..vectors.nrows() {
            vectors[(i, k)] *= phase;
        }
    }
}

/// Eigenvalues in ascending order with eigenvectors as the matching columns.
///
/// Eigenvectors have their largest component real positive.
pub fn diagonalize(mat: MatRef<c64>) -> Result<(Vec<f64>, Mat<c64>)> {
    let eigen = mat
        .self_adjoint_eigen(Side::Lower)
        .map_err(|err| DiatomError::Diagonalization(format!("{err:?}")))?;

    let values: Vec<f64> = eigen.S().column_vector().iter().map(|x| x.re).collect();
    let order = ascending_order(&values);

    let vectors = eigen.U();
    let mut sorted_vectors =
        Mat::from_fn(vectors.nrows(), order.len(), |i, j| vectors[(i, order[j])]);
    fix_phases(&mut sorted_vectors);
    let sorted_values = order.iter().map(|&k| values[k]).collect();

    Ok((sorted_values, sorted_vectors))
}

pub fn eigenvalues(mat: MatRef<c64>) -> Result<Vec<f64>> {
    let values = mat
        .self_adjoint_eigenvalues(Side::Lower)
        .map_err(|err| DiatomError::Diagonalization(format!("{err:?}")))?;

    let order = ascending_order(&values);

    Ok(order.iter().map(|&k| values[k]).collect())
}

/// Adds `factor * term` to `mat` in place.
pub fn add_scaled(mat: &mut Mat<c64>, term: MatRef<c64>, factor: f64) {
    zip!(mat.as_mut(), term).for_each(|unzip!(x, t)| *x += *t * factor);
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use faer::{c64, Mat};

    use super::{add_scaled, diagonalize, eigenvalues};

    #[test]
    fn test_diagonalize() {
        // sigma_y has eigenvalues -1, 1
        let mat = Mat::from_fn(2, 2, |i, j| match (i, j) {
            (0, 1) => c64::new(0.0, -1.0),
            (1, 0) => c64::new(0.0, 1.0),
            _ => c64::new(0.0, 0.0),
        });

        let (values, vectors) = diagonalize(mat.as_ref()).unwrap();
        assert_relative_eq!(values[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(values[1], 1.0, epsilon = 1e-12);

        let applied = &mat * &vectors;
        for k in 0..2 {
            for i in 0..2 {
                let residual = applied[(i, k)] - vectors[(i, k)] * values[k];
                assert_relative_eq!(residual.norm(), 0.0, epsilon = 1e-12);
            }
        }

        for k in 0..2 {
            let largest = if vectors[(0, k)].norm() >= vectors[(1, k)].norm() {
                vectors[(0, k)]
            } else {
                vectors[(1, k)]
            };
            assert_relative_eq!(largest.im, 0.0, epsilon = 1e-12);
            assert!(largest.re > 0.0);
        }

        let only_values = eigenvalues(mat.as_ref()).unwrap();
        assert_relative_eq!(only_values[0], -1.0, epsilon = 1e-12);

        let mut shifted = mat.clone();
        add_scaled(&mut shifted, mat.as_ref(), 2.0);
        assert_eq!(shifted[(1, 0)], c64::new(0.0, 3.0));
    }
}
