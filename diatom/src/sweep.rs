use faer::{c64, Mat};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use quantum::units::energy_units::{Energy, EnergyUnit, Joule};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    consts::Consts,
    error::Result,
    hamiltonian::{Fields, Hamiltonians},
    terms::{ac_anisotropic, ac_isotropic},
    utility::{add_scaled, diagonalize, eigenvalues},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweptField {
    Magnetic,
    Electric,
    Intensity,
}

/// Spectrum over a sweep of a single parameter.
#[derive(Clone, Debug)]
pub struct SweepResult {
    /// Energies indexed by `(state, step)`, ascending in state at every step
    /// until [`SweepResult::sort_smooth`] reorders them.
    pub energies: Mat<f64>,
    /// Eigenvectors of every step, column `k` belongs to `energies[(k, step)]`.
    pub states: Option<Vec<Mat<c64>>>,
}

impl SweepResult {
    pub fn steps(&self) -> usize {
        self.energies.ncols()
    }

    pub fn size(&self) -> usize {
        self.energies.nrows()
    }

    pub fn energies_at(&self, step: usize) -> Vec<f64> {
        (0..self.size()).map(|k| self.energies[(k, step)]).collect()
    }

    /// Energies converted from J to `unit`.
    pub fn energies_in<U: EnergyUnit>(&self, unit: U) -> Mat<f64> {
        Mat::from_fn(self.size(), self.steps(), |k, step| {
            Energy(self.energies[(k, step)], Joule).to(unit).value()
        })
    }
}

/// Diagonalizes the total hamiltonian over a sweep of one field
/// while the others stay fixed at `fields`.
pub struct FieldSweep<'a> {
    hamiltonians: &'a Hamiltonians,
    fields: Fields,
    return_states: bool,
    parallel: bool,
    progress: bool,
}

impl<'a> FieldSweep<'a> {
    pub fn new(hamiltonians: &'a Hamiltonians) -> Self {
        Self {
            hamiltonians,
            fields: Fields::default(),
            return_states: false,
            parallel: false,
            progress: false,
        }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;

        self
    }

    pub fn with_states(mut self) -> Self {
        self.return_states = true;

        self
    }

    /// Diagonalizes the steps on the rayon thread pool, the step order is kept.
    pub fn in_parallel(mut self) -> Self {
        self.parallel = true;

        self
    }

    pub fn with_progress(mut self) -> Self {
        self.progress = true;

        self
    }

    pub fn vary_magnetic(&self, values: &[f64]) -> Result<SweepResult> {
        self.vary_field(SweptField::Magnetic, values)
    }

    pub fn vary_electric(&self, values: &[f64]) -> Result<SweepResult> {
        self.vary_field(SweptField::Electric, values)
    }

    pub fn vary_intensity(&self, values: &[f64]) -> Result<SweepResult> {
        self.vary_field(SweptField::Intensity, values)
    }

    /// Sweeps `field` over `values`, a term that was not built keeps the energies constant.
    pub fn vary_field(&self, field: SweptField, values: &[f64]) -> Result<SweepResult> {
        let term = match field {
            SweptField::Magnetic => &self.hamiltonians.hz,
            SweptField::Electric => &self.hamiltonians.hdc,
            SweptField::Intensity => &self.hamiltonians.hac,
        };
        if term.is_none() {
            warn!("{field:?} term was not built, sweeping it leaves the energies constant");
        }

        let fields_at = |value: f64| {
            let mut fields = self.fields;
            match field {
                SweptField::Magnetic => fields.magnetic = value,
                SweptField::Electric => fields.electric = value,
                SweptField::Intensity => fields.intensity = value,
            }

            fields
        };

        self.run(values, |value| self.hamiltonians.total(fields_at(value)))
    }

    /// Sweeps the polarization angle of the trapping light at fixed intensity.
    pub fn vary_beta(&self, angles: &[f64]) -> Result<SweepResult> {
        let intensity = self.fields.intensity;
        if intensity == 0.0 {
            warn!("light intensity is zero, the polarization angle has no effect");
        }

        let mut fields = self.fields;
        fields.intensity = 0.0;
        let mut base = self.hamiltonians.total(fields);

        let basis = self.hamiltonians.basis();
        let (a0, a2) = self.hamiltonians.polarizabilities();
        let light_factor = intensity * Consts::INTENSITY_FACTOR;

        add_scaled(&mut base, ac_isotropic(basis, a0).as_ref(), light_factor);

        self.run(angles, |beta| {
            let mut total = base.clone();
            add_scaled(&mut total, ac_anisotropic(basis, a2, beta).as_ref(), light_factor);

            total
        })
    }

    fn run<F>(&self, values: &[f64], hamiltonian_at: F) -> Result<SweepResult>
    where
        F: Fn(f64) -> Mat<c64> + Sync,
    {
        debug!(
            "sweeping {} steps of size {} hamiltonian, parallel: {}",
            values.len(),
            self.hamiltonians.size(),
            self.parallel
        );

        let progress = if self.progress {
            ProgressBar::new(values.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let solve = |&value: &f64| -> Result<(Vec<f64>, Option<Mat<c64>>)> {
            let hamiltonian = hamiltonian_at(value);

            if self.return_states {
                let (energies, states) = diagonalize(hamiltonian.as_ref())?;
                Ok((energies, Some(states)))
            } else {
                Ok((eigenvalues(hamiltonian.as_ref())?, None))
            }
        };

        let points: Vec<(Vec<f64>, Option<Mat<c64>>)> = if self.parallel {
            values
                .par_iter()
                .progress_with(progress.clone())
                .map(&solve)
                .collect::<Result<_>>()?
        } else {
            values
                .iter()
                .progress_with(progress.clone())
                .map(&solve)
                .collect::<Result<_>>()?
        };
        progress.finish();

        let size = self.hamiltonians.size();
        let energies = Mat::from_fn(size, points.len(), |k, step| points[step].0[k]);

        let states = self
            .return_states
            .then(|| points.into_iter().filter_map(|(_, states)| states).collect());

        Ok(SweepResult { energies, states })
    }
}
