//! Hyperfine structure and Stark/Zeeman maps of ground state ¹Σ diatomic molecules
//! in the uncoupled `|N, M_N> |I1, M1> |I2, M2>` basis.

pub mod basis;
pub mod consts;
pub mod constants;
pub mod error;
pub mod hamiltonian;
pub mod labels;
pub mod smoothing;
pub mod sweep;
pub mod terms;
pub mod transitions;
pub mod utility;
pub mod vectors;
pub mod wigner;

pub use basis::HyperfineBasis;
pub use constants::MolecularConstants;
pub use error::{DiatomError, Result};
pub use hamiltonian::{build_hamiltonians, Fields, HamiltonianBuilder, Hamiltonians, Terms};
pub use labels::{StateLabeler, StateLabels};
pub use sweep::{FieldSweep, SweepResult, SweptField};
pub use transitions::{transition_dipole_moments, Helicity};
