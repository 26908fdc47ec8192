use faer::{c64, Mat};
use quantum::operator::scaled;
use tracing::debug;

use crate::{
    basis::HyperfineBasis,
    consts::Consts,
    constants::MolecularConstants,
    error::Result,
    terms::{
        ac_anisotropic, ac_isotropic, dc_stark, quadrupole, rotational, scalar_coupling,
        tensor_nuclear, zeeman,
    },
    utility::{add_scaled, diagonalize, eigenvalues},
    vectors::AngularVectors,
};

/// Optional field terms to build next to the field-free hamiltonian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terms {
    pub zeeman: bool,
    pub dc_stark: bool,
    pub ac_stark: bool,
}

impl Terms {
    pub fn all() -> Self {
        Self {
            zeeman: true,
            dc_stark: true,
            ac_stark: true,
        }
    }
}

/// External field strengths in T, V / m and W / m^2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Fields {
    pub magnetic: f64,
    pub electric: f64,
    pub intensity: f64,
}

impl Fields {
    pub fn new(magnetic: f64, electric: f64, intensity: f64) -> Self {
        Self {
            magnetic,
            electric,
            intensity,
        }
    }
}

/// Field-free hamiltonian `h0` together with the per unit field terms.
///
/// The total hamiltonian is `h0 + B hz + E hdc + I hac`,
/// terms that were not requested are `None` and contribute nothing.
#[derive(Clone, Debug)]
pub struct Hamiltonians {
    basis: HyperfineBasis,
    polarizabilities: (f64, f64),

    pub h0: Mat<c64>,
    pub hz: Option<Mat<c64>>,
    pub hdc: Option<Mat<c64>>,
    pub hac: Option<Mat<c64>>,
}

impl Hamiltonians {
    pub fn basis(&self) -> &HyperfineBasis {
        &self.basis
    }

    pub fn size(&self) -> usize {
        self.h0.nrows()
    }

    /// Isotropic and anisotropic polarizabilities `(a0, a2)`.
    pub fn polarizabilities(&self) -> (f64, f64) {
        self.polarizabilities
    }

    pub fn total(&self, fields: Fields) -> Mat<c64> {
        let mut total = self.h0.clone();

        let scaled_terms = [
            (&self.hz, fields.magnetic),
            (&self.hdc, fields.electric),
            (&self.hac, fields.intensity),
        ];
        for (term, factor) in scaled_terms {
            if let Some(term) = term {
                add_scaled(&mut total, term.as_ref(), factor);
            }
        }

        total
    }

    /// Eigenvalues ascending and their eigenvectors at `fields`.
    pub fn states_at(&self, fields: Fields) -> Result<(Vec<f64>, Mat<c64>)> {
        diagonalize(self.total(fields).as_ref())
    }

    pub fn energies_at(&self, fields: Fields) -> Result<Vec<f64>> {
        eigenvalues(self.total(fields).as_ref())
    }
}

/// Field-free hyperfine hamiltonian for given angular momentum vectors,
/// `n_values` is the rotational level of every basis state.
pub fn hyperfine_hamiltonian(
    vectors: &AngularVectors,
    n_values: &[u32],
    constants: &MolecularConstants,
) -> Mat<c64> {
    let mut h0 = rotational(&vectors.n, constants.brot, constants.drot);

    let couplings = [
        scalar_coupling(constants.c1, &vectors.n, &vectors.i1),
        scalar_coupling(constants.c2, &vectors.n, &vectors.i2),
        scalar_coupling(constants.c4, &vectors.i1, &vectors.i2),
        tensor_nuclear(constants.c3, vectors, n_values),
        quadrupole(constants.q1, constants.i1, &vectors.i1, &vectors.n, n_values),
        quadrupole(constants.q2, constants.i2, &vectors.i2, &vectors.n, n_values),
    ];
    for coupling in &couplings {
        add_scaled(&mut h0, coupling.as_ref(), 1.0);
    }

    h0
}

/// Ac Stark interaction per unit intensity for polarization angle `beta`.
pub fn ac_stark_hamiltonian(basis: &HyperfineBasis, a0: f64, a2: f64, beta: f64) -> Mat<c64> {
    let mut hac = ac_isotropic(basis, a0);
    add_scaled(&mut hac, ac_anisotropic(basis, a2, beta).as_ref(), 1.0);

    scaled(hac.as_ref(), Consts::INTENSITY_FACTOR)
}

pub fn build_hamiltonians(
    n_max: u32,
    constants: &MolecularConstants,
    terms: Terms,
) -> Result<Hamiltonians> {
    let basis = HyperfineBasis::from_constants(n_max, constants)?;
    debug!("building hamiltonians of size {} for {terms:?}", basis.size());

    let vectors = AngularVectors::new(&basis);
    let n_values = basis.n_values();

    let h0 = hyperfine_hamiltonian(&vectors, &n_values, constants);

    let hz = terms
        .zeeman
        .then(|| zeeman(&vectors, constants.mu_n, constants.mu1, constants.mu2));
    let hdc = terms.dc_stark.then(|| dc_stark(&basis, constants.d0));
    let hac = terms
        .ac_stark
        .then(|| ac_stark_hamiltonian(&basis, constants.a0, constants.a2, constants.beta));

    Ok(Hamiltonians {
        basis,
        polarizabilities: (constants.a0, constants.a2),
        h0,
        hz,
        hdc,
        hac,
    })
}

#[derive(Clone, Debug)]
pub struct HamiltonianBuilder<'a> {
    n_max: u32,
    constants: &'a MolecularConstants,
    terms: Terms,
}

impl<'a> HamiltonianBuilder<'a> {
    pub fn new(n_max: u32, constants: &'a MolecularConstants) -> Self {
        Self {
            n_max,
            constants,
            terms: Terms::default(),
        }
    }

    pub fn with_zeeman(mut self) -> Self {
        self.terms.zeeman = true;

        self
    }

    pub fn with_dc_stark(mut self) -> Self {
        self.terms.dc_stark = true;

        self
    }

    pub fn with_ac_stark(mut self) -> Self {
        self.terms.ac_stark = true;

        self
    }

    pub fn with_terms(mut self, terms: Terms) -> Self {
        self.terms = terms;

        self
    }

    pub fn build(self) -> Result<Hamiltonians> {
        build_hamiltonians(self.n_max, self.constants, self.terms)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use quantum::operator::hermitian_deviation;

    use crate::{consts::Consts, constants::MolecularConstants, error::DiatomError};

    use super::{Fields, HamiltonianBuilder, Terms};

    #[test]
    fn test_requested_terms() {
        let constants = MolecularConstants::rbcs();

        let flags = [
            Terms::default(),
            Terms { zeeman: true, ..Default::default() },
            Terms { dc_stark: true, ac_stark: true, ..Default::default() },
            Terms::all(),
        ];

        for terms in flags {
            let hamiltonians = HamiltonianBuilder::new(1, &constants)
                .with_terms(terms)
                .build()
                .unwrap();

            assert_eq!(hamiltonians.size(), 4 * 32);
            assert_eq!(hamiltonians.hz.is_some(), terms.zeeman);
            assert_eq!(hamiltonians.hdc.is_some(), terms.dc_stark);
            assert_eq!(hamiltonians.hac.is_some(), terms.ac_stark);
        }
    }

    #[test]
    fn test_disabled_terms_match_zero_fields() {
        let constants = MolecularConstants::k41cs();

        let bare = HamiltonianBuilder::new(1, &constants).build().unwrap();
        let full = HamiltonianBuilder::new(1, &constants)
            .with_terms(Terms::all())
            .build()
            .unwrap();

        let bare_energies = bare.energies_at(Fields::new(0.3, 1e5, 1e7)).unwrap();
        let full_energies = full.energies_at(Fields::default()).unwrap();

        for (a, b) in bare_energies.iter().zip(&full_energies) {
            assert_relative_eq!(a / Consts::PLANCK, b / Consts::PLANCK, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_rotational_levels() {
        let mut constants = MolecularConstants::with_spins(0.0, 0.0);
        constants.brot = 1.0;

        let hamiltonians = HamiltonianBuilder::new(2, &constants).build().unwrap();
        let energies = hamiltonians.energies_at(Fields::default()).unwrap();

        let expected = [0.0, 2.0, 2.0, 2.0, 6.0, 6.0, 6.0, 6.0, 6.0];
        for (energy, expected) in energies.iter().zip(expected) {
            assert_relative_eq!(*energy, expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_spin_spin_coupling() {
        let mut constants = MolecularConstants::with_spins(0.5, 0.5);
        constants.c4 = 1.0;

        let hamiltonians = HamiltonianBuilder::new(0, &constants).build().unwrap();
        assert_relative_eq!(hermitian_deviation(hamiltonians.h0.as_ref()), 0.0);

        // singlet at -3/4 and triplet at 1/4
        let energies = hamiltonians.energies_at(Fields::default()).unwrap();
        assert_relative_eq!(energies[0], -0.75, epsilon = 1e-12);
        for energy in &energies[1..] {
            assert_relative_eq!(*energy, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zeeman_spread() {
        let mut constants = MolecularConstants::with_spins(0.5, 0.0);
        constants.mu1 = 2.0;

        let hamiltonians = HamiltonianBuilder::new(0, &constants)
            .with_zeeman()
            .build()
            .unwrap();

        let energies = hamiltonians.energies_at(Fields::new(0.3, 0.0, 0.0)).unwrap();
        assert_relative_eq!(energies[1] - energies[0], 0.6, epsilon = 1e-12);
        assert_relative_eq!(energies[0], -0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_spins() {
        let constants = MolecularConstants::with_spins(0.7, 0.5);
        let result = HamiltonianBuilder::new(1, &constants).build();

        assert!(matches!(result, Err(DiatomError::InvalidSpin { .. })));
    }
}
