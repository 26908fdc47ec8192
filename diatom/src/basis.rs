use faer::{c64, Mat};
use quantum::{
    operator::Operator,
    spins::{spin_from_f64, spin_projections, Projection, Spin},
};

use crate::{
    constants::MolecularConstants,
    error::{DiatomError, Result},
};

/// Rotational state `|N, M_N>` of the rigid rotor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorState {
    pub n: u32,
    pub mn: i32,
}

/// Uncoupled basis state `|N, M_N> |I1, M1> |I2, M2>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisElement {
    pub n: u32,
    pub mn: i32,
    pub m1: Projection,
    pub m2: Projection,
}

/// Uncoupled product basis up to rotational level `n_max`.
///
/// Ordering is `N` ascending, then `M_N`, `M1`, `M2` each descending
/// with `M2` running fastest. Every operator in this crate follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct HyperfineBasis {
    n_max: u32,
    i1: Spin,
    i2: Spin,
}

impl HyperfineBasis {
    pub fn new(n_max: u32, i1: Spin, i2: Spin) -> Self {
        Self { n_max, i1, i2 }
    }

    /// Creates the basis validating that the spins are multiples of 1/2.
    pub fn from_f64(n_max: u32, i1: f64, i2: f64) -> Result<Self> {
        let i1 = spin_from_f64(i1).ok_or(DiatomError::InvalidSpin { name: "I1", value: i1 })?;
        let i2 = spin_from_f64(i2).ok_or(DiatomError::InvalidSpin { name: "I2", value: i2 })?;

        Ok(Self::new(n_max, i1, i2))
    }

    pub fn from_constants(n_max: u32, constants: &MolecularConstants) -> Result<Self> {
        Self::from_f64(n_max, constants.i1, constants.i2)
    }

    pub fn n_max(&self) -> u32 {
        self.n_max
    }

    pub fn i1(&self) -> Spin {
        self.i1
    }

    pub fn i2(&self) -> Spin {
        self.i2
    }

    pub fn rotational_states(&self) -> Vec<RotorState> {
        (0..=self.n_max)
            .flat_map(|n| {
                let n_i = n as i32;
                (0..=2 * n_i).map(move |k| RotorState { n, mn: n_i - k })
            })
            .collect()
    }

    pub fn rotational_size(&self) -> usize {
        ((self.n_max + 1) * (self.n_max + 1)) as usize
    }

    pub fn spin_sizes(&self) -> (usize, usize) {
        (
            self.i1.double_value() as usize + 1,
            self.i2.double_value() as usize + 1,
        )
    }

    pub fn nuclear_size(&self) -> usize {
        let (s1, s2) = self.spin_sizes();

        s1 * s2
    }

    pub fn size(&self) -> usize {
        self.rotational_size() * self.nuclear_size()
    }

    pub fn elements(&self) -> Vec<BasisElement> {
        let m1s = spin_projections(self.i1);
        let m2s = spin_projections(self.i2);

        let mut elements = Vec::with_capacity(self.size());
        for rotor in self.rotational_states() {
            for &m1 in &m1s {
                for &m2 in &m2s {
                    elements.push(BasisElement {
                        n: rotor.n,
                        mn: rotor.mn,
                        m1,
                        m2,
                    });
                }
            }
        }

        elements
    }

    /// Rotational quantum number `N` of every basis state.
    pub fn n_values(&self) -> Vec<u32> {
        let nuclear = self.nuclear_size();

        self.rotational_states()
            .iter()
            .flat_map(|rotor| std::iter::repeat_n(rotor.n, nuclear))
            .collect()
    }

    /// Extends an operator acting on rotational states only to the full basis.
    pub fn widen_rotational(&self, rotational: Operator<Mat<c64>>) -> Mat<c64> {
        assert!(rotational.nrows() == self.rotational_size());

        rotational
            .kron(Operator::identity(self.nuclear_size()).as_ref())
            .into_backed()
    }
}

#[cfg(test)]
mod test {
    use clebsch_gordan::{half_i32, half_integer::HalfI32, half_u32};

    use crate::error::DiatomError;

    use super::{BasisElement, HyperfineBasis, RotorState};

    #[test]
    fn test_ordering() {
        let basis = HyperfineBasis::new(1, half_u32!(1/2), half_u32!(1));
        assert_eq!(basis.rotational_size(), 4);
        assert_eq!(basis.spin_sizes(), (2, 3));
        assert_eq!(basis.size(), 24);

        let rotors = basis.rotational_states();
        assert_eq!(rotors[0], RotorState { n: 0, mn: 0 });
        assert_eq!(rotors[1], RotorState { n: 1, mn: 1 });
        assert_eq!(rotors[3], RotorState { n: 1, mn: -1 });

        let elements = basis.elements();
        assert_eq!(elements.len(), 24);
        assert_eq!(
            elements[1],
            BasisElement { n: 0, mn: 0, m1: HalfI32::from_doubled(1), m2: half_i32!(0) }
        );
        assert_eq!(
            elements[3],
            BasisElement { n: 0, mn: 0, m1: HalfI32::from_doubled(-1), m2: half_i32!(1) }
        );

        let n_values = basis.n_values();
        assert_eq!(n_values[5], 0);
        assert_eq!(n_values[6], 1);
        assert_eq!(n_values[23], 1);
    }

    #[test]
    fn test_invalid_spin() {
        assert!(matches!(
            HyperfineBasis::from_f64(1, 0.3, 0.5),
            Err(DiatomError::InvalidSpin { name: "I1", .. })
        ));
        assert!(matches!(
            HyperfineBasis::from_f64(1, 0.5, -1.0),
            Err(DiatomError::InvalidSpin { name: "I2", .. })
        ));

        let zero_spins = HyperfineBasis::from_f64(2, 0.0, 0.0).unwrap();
        assert_eq!(zero_spins.size(), 9);
    }
}
