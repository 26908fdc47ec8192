use std::{f64::consts::PI, fs, path::Path};

use quantum::units::energy_units::{Energy, GHz, Hz, KHz, MHz};
use serde::{Deserialize, Serialize};

use crate::{
    consts::Consts,
    error::{DiatomError, Result},
};

/// Molecular constants of a diatomic molecule in SI units.
///
/// Spins are dimensionless, energies are in J, magnetic moments in J / T,
/// dipole moment in C m and polarizabilities in J / (W / m^2).
/// The polarization angle `beta` is in radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MolecularConstants {
    pub i1: f64,
    pub i2: f64,

    #[serde(default)]
    pub d0: f64,
    #[serde(default)]
    pub binding: f64,
    #[serde(default)]
    pub brot: f64,
    #[serde(default)]
    pub drot: f64,

    #[serde(default)]
    pub q1: f64,
    #[serde(default)]
    pub q2: f64,

    #[serde(default)]
    pub c1: f64,
    #[serde(default)]
    pub c2: f64,
    #[serde(default)]
    pub c3: f64,
    #[serde(default)]
    pub c4: f64,

    #[serde(default)]
    pub mu_n: f64,
    #[serde(default)]
    pub mu1: f64,
    #[serde(default)]
    pub mu2: f64,

    #[serde(default)]
    pub a0: f64,
    #[serde(default)]
    pub a2: f64,
    #[serde(default)]
    pub beta: f64,
}

fn hz(value: f64) -> f64 {
    Energy(value, Hz).to_si()
}

fn khz(value: f64) -> f64 {
    Energy(value, KHz).to_si()
}

fn mhz(value: f64) -> f64 {
    Energy(value, MHz).to_si()
}

/// Polarizability given in atomic units converted to SI.
fn atomic_polarizability(value: f64) -> f64 {
    value * 4.0 * PI * Consts::EPS0 * Consts::BOHR_RADIUS.powi(3)
}

impl MolecularConstants {
    /// Constants with only the nuclear spins set.
    pub fn with_spins(i1: f64, i2: f64) -> Self {
        Self {
            i1,
            i2,
            d0: 0.0,
            binding: 0.0,
            brot: 0.0,
            drot: 0.0,
            q1: 0.0,
            q2: 0.0,
            c1: 0.0,
            c2: 0.0,
            c3: 0.0,
            c4: 0.0,
            mu_n: 0.0,
            mu1: 0.0,
            mu2: 0.0,
            a0: 0.0,
            a2: 0.0,
            beta: 0.0,
        }
    }

    /// Ground state ⁸⁷Rb¹³³Cs, polarizabilities at 1064 nm.
    pub fn rbcs() -> Self {
        Self {
            i1: 1.5,
            i2: 3.5,
            d0: 1.225 * Consts::DEBYE,
            binding: Energy(114268.13525, GHz).to_si(),
            brot: mhz(490.173994326310),
            drot: hz(207.3),
            q1: khz(-809.29),
            q2: khz(59.98),
            c1: hz(98.4),
            c2: hz(194.2),
            c3: hz(192.4),
            c4: khz(19.0189557),
            mu_n: 0.0062 * Consts::NUCLEAR_MAG,
            mu1: 1.8295 * Consts::NUCLEAR_MAG,
            mu2: 0.7331 * Consts::NUCLEAR_MAG,
            a0: atomic_polarizability(2020.0),
            a2: atomic_polarizability(1997.0),
            beta: 0.0,
        }
    }

    /// Ground state ⁴¹K¹³³Cs, `a0` given as h Hz / (W / cm^2).
    pub fn k41cs() -> Self {
        Self {
            i1: 1.5,
            i2: 3.5,
            d0: 1.84 * Consts::DEBYE,
            binding: 0.0,
            brot: mhz(880.326),
            drot: 0.0,
            q1: mhz(-0.221),
            q2: mhz(0.075),
            c1: hz(4.5),
            c2: hz(370.8),
            c3: hz(9.9),
            c4: hz(628.0),
            mu_n: 0.0,
            mu1: 0.143 * (1.0 - 1340.7e-6) * Consts::NUCLEAR_MAG,
            mu2: 0.738 * (1.0 - 6337.1e-6) * Consts::NUCLEAR_MAG,
            a0: mhz(7.783),
            a2: 0.0,
            beta: 0.0,
        }
    }

    /// Ground state ⁴⁰K⁸⁷Rb, polarizabilities given as h Hz / (W / cm^2).
    pub fn k40rb() -> Self {
        Self {
            i1: 4.0,
            i2: 1.5,
            d0: 0.62 * Consts::DEBYE,
            binding: 0.0,
            brot: mhz(1113.4),
            drot: 0.0,
            q1: mhz(0.311),
            q2: mhz(-1.483),
            c1: hz(-24.1),
            c2: hz(419.5),
            c3: hz(-48.2),
            c4: hz(-2028.8),
            mu_n: 0.0140 * Consts::NUCLEAR_MAG,
            mu1: -0.324 * (1.0 - 1321e-6) * Consts::NUCLEAR_MAG,
            mu2: 1.834 * (1.0 - 3469e-6) * Consts::NUCLEAR_MAG,
            a0: hz(5.33e-5 * 1e6),
            a2: hz(6.67e-5 * 1e6),
            beta: 0.0,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(DiatomError::from)
    }
}
