use faer::{c64, MatRef};

use crate::{
    basis::HyperfineBasis,
    error::{DiatomError, Result},
    labels::selected_columns,
    terms::dipole,
};

/// Polarization of a dipole transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Helicity {
    SigmaPlus,
    Pi,
    SigmaMinus,
}

impl Helicity {
    /// Spherical component of the dipole operator driving the transition.
    pub fn component(self) -> i32 {
        match self {
            Helicity::SigmaPlus => -1,
            Helicity::Pi => 0,
            Helicity::SigmaMinus => 1,
        }
    }
}

/// Transition dipole moments in units of the permanent dipole moment
/// from state `ground` to every state in `locs` (all states if `None`).
pub fn transition_dipole_moments(
    basis: &HyperfineBasis,
    helicity: Helicity,
    states: MatRef<c64>,
    ground: usize,
    locs: Option<&[usize]>,
) -> Result<Vec<f64>> {
    let columns = selected_columns(basis.size(), states, locs)?;
    if ground >= states.ncols() {
        return Err(DiatomError::IndexOutOfRange {
            index: ground,
            len: states.ncols(),
        });
    }

    let operator = dipole(basis, 1.0, helicity.component());

    // <ground| D
    let bra = states.col(ground).adjoint() * &operator;

    let moments = columns
        .iter()
        .map(|&k| (bra.as_ref() * states.col(k)).re)
        .collect();

    Ok(moments)
}
