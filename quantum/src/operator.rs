use num::{One, Zero};
use std::ops::{Add, Deref};

use faer::{c64, unzip, zip, Mat, MatRef};

#[derive(Debug, Clone)]
pub struct Operator<M> {
    backed: M,
}

impl<M> Operator<M> {
    pub fn new(mat: M) -> Self {
        Self { backed: mat }
    }

    pub fn into_backed(self) -> M {
        self.backed
    }
}

impl Operator<Mat<c64>> {
    /// Creates operator from matrix elements `<bra| O |ket>` over the ordered `elements`.
    pub fn from_mel<E, F>(elements: &[E], mut mat_element: F) -> Self
    where
        F: FnMut(&E, &E) -> c64,
    {
        let mat = Mat::from_fn(elements.len(), elements.len(), |i, j| {
            mat_element(&elements[i], &elements[j])
        });

        Self { backed: mat }
    }

    pub fn from_diagonal_mel<E, F>(elements: &[E], mut mat_element: F) -> Self
    where
        F: FnMut(&E) -> c64,
    {
        let mat = Mat::from_fn(elements.len(), elements.len(), |i, j| {
            if i == j {
                mat_element(&elements[i])
            } else {
                c64::zero()
            }
        });

        Self { backed: mat }
    }

    pub fn identity(size: usize) -> Self {
        let mat = Mat::from_fn(size, size, |i, j| if i == j { c64::one() } else { c64::zero() });

        Self { backed: mat }
    }

    /// Direct sum of square blocks placed along the diagonal.
    pub fn block_diag(blocks: &[MatRef<c64>]) -> Self {
        let size = blocks.iter().map(|b| b.nrows()).sum();
        let mut mat = Mat::zeros(size, size);

        let mut offset = 0;
        for block in blocks {
            assert!(block.nrows() == block.ncols(), "only square blocks are allowed");

            for j in 0..block.ncols() {
                for i in 0..block.nrows() {
                    mat[(offset + i, offset + j)] = block[(i, j)];
                }
            }
            offset += block.nrows();
        }

        Self { backed: mat }
    }

    /// Kronecker product `self ⊗ rhs`, `rhs` index runs fastest.
    pub fn kron(&self, rhs: MatRef<c64>) -> Self {
        Self {
            backed: kron(self.backed.as_ref(), rhs),
        }
    }
}

impl Deref for Operator<Mat<c64>> {
    type Target = Mat<c64>;

    fn deref(&self) -> &Self::Target {
        &self.backed
    }
}

pub fn kron(lhs: MatRef<c64>, rhs: MatRef<c64>) -> Mat<c64> {
    let (r_rows, r_cols) = (rhs.nrows(), rhs.ncols());

    Mat::from_fn(lhs.nrows() * r_rows, lhs.ncols() * r_cols, |i, j| {
        lhs[(i / r_rows, j / r_cols)] * rhs[(i % r_rows, j % r_cols)]
    })
}

pub fn scaled(mat: MatRef<c64>, factor: f64) -> Mat<c64> {
    let mut scaled = mat.to_owned();
    zip!(scaled.as_mut()).for_each(|unzip!(x)| *x *= factor);

    scaled
}

/// Largest element of `|A - A†|`.
pub fn hermitian_deviation(mat: MatRef<c64>) -> f64 {
    assert!(mat.nrows() == mat.ncols());

    let mut deviation = 0f64;
    for j in 0..mat.ncols() {
        for i in 0..=j {
            deviation = deviation.max((mat[(i, j)] - mat[(j, i)].conj()).norm());
        }
    }

    deviation
}

/// Returns `P A P^T` where basis element `perm[k]` of `mat` becomes element `k`.
pub fn permuted(mat: MatRef<c64>, perm: &[usize]) -> Mat<c64> {
    assert!(perm.len() == mat.nrows() && perm.len() == mat.ncols());

    Mat::from_fn(perm.len(), perm.len(), |i, j| mat[(perm[i], perm[j])])
}

/// Ordered Cartesian triple `(X, Y, Z)` of operators acting on the same space.
#[derive(Debug, Clone)]
pub struct AngularVector {
    pub x: Mat<c64>,
    pub y: Mat<c64>,
    pub z: Mat<c64>,
}

impl AngularVector {
    pub fn new(x: Mat<c64>, y: Mat<c64>, z: Mat<c64>) -> Self {
        assert!(
            x.nrows() == y.nrows() && y.nrows() == z.nrows(),
            "components have to share the space"
        );

        Self { x, y, z }
    }

    pub fn size(&self) -> usize {
        self.x.nrows()
    }

    pub fn components(&self) -> [&Mat<c64>; 3] {
        [&self.x, &self.y, &self.z]
    }

    /// Generalized dot product `A·B = Σ_k A_k B_k` with ordinary matrix products.
    pub fn dot(&self, other: &AngularVector) -> Mat<c64> {
        assert!(self.size() == other.size(), "vectors act on different spaces");

        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    pub fn squared(&self) -> Mat<c64> {
        self.dot(self)
    }

    /// Embeds the vector into `I_left ⊗ J ⊗ I_right`.
    pub fn embed(&self, left: usize, right: usize) -> Self {
        let id_left = Operator::identity(left);
        let id_right = Operator::identity(right);

        let embed = |c: &Mat<c64>| {
            let inner = Operator::new(c.clone()).kron(id_right.as_ref());

            id_left.kron(inner.as_ref()).into_backed()
        };

        Self {
            x: embed(&self.x),
            y: embed(&self.y),
            z: embed(&self.z),
        }
    }

    /// Direct sum of vectors acting on orthogonal subspaces.
    pub fn block_diag(vectors: &[AngularVector]) -> Self {
        let xs: Vec<MatRef<c64>> = vectors.iter().map(|v| v.x.as_ref()).collect();
        let ys: Vec<MatRef<c64>> = vectors.iter().map(|v| v.y.as_ref()).collect();
        let zs: Vec<MatRef<c64>> = vectors.iter().map(|v| v.z.as_ref()).collect();

        Self {
            x: Operator::block_diag(&xs).into_backed(),
            y: Operator::block_diag(&ys).into_backed(),
            z: Operator::block_diag(&zs).into_backed(),
        }
    }

    pub fn permuted(&self, perm: &[usize]) -> Self {
        Self {
            x: permuted(self.x.as_ref(), perm),
            y: permuted(self.y.as_ref(), perm),
            z: permuted(self.z.as_ref(), perm),
        }
    }
}

impl Add<&AngularVector> for &AngularVector {
    type Output = AngularVector;

    fn add(self, rhs: &AngularVector) -> Self::Output {
        AngularVector {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}
