use clebsch_gordan::half_integer::HalfU32;
use quantum::{operator::AngularVector, spins::SpinOperators};

use crate::basis::HyperfineBasis;

/// Angular momentum vectors of the rotation and both nuclear spins
/// in the full uncoupled basis.
#[derive(Clone, Debug)]
pub struct AngularVectors {
    pub n: AngularVector,
    pub i1: AngularVector,
    pub i2: AngularVector,
}

impl AngularVectors {
    pub fn new(basis: &HyperfineBasis) -> Self {
        let rotational: Vec<AngularVector> = (0..=basis.n_max())
            .map(|n| SpinOperators::vector(HalfU32::from_doubled(2 * n)))
            .collect();
        let rotational = AngularVector::block_diag(&rotational);

        let (s1, s2) = basis.spin_sizes();
        let rot_size = basis.rotational_size();

        Self {
            n: rotational.embed(1, s1 * s2),
            i1: SpinOperators::vector(basis.i1()).embed(rot_size, s2),
            i2: SpinOperators::vector(basis.i2()).embed(rot_size * s1, 1),
        }
    }

    pub fn size(&self) -> usize {
        self.n.size()
    }

    /// Total nuclear spin `I = I1 + I2`.
    pub fn nuclear(&self) -> AngularVector {
        &self.i1 + &self.i2
    }

    /// Total angular momentum `F = N + I1 + I2`.
    pub fn total(&self) -> AngularVector {
        &self.n + &self.nuclear()
    }

    /// Reorders every vector so that old basis state `perm[k]` becomes state `k`.
    pub fn permuted(&self, perm: &[usize]) -> Self {
        Self {
            n: self.n.permuted(perm),
            i1: self.i1.permuted(perm),
            i2: self.i2.permuted(perm),
        }
    }
}
