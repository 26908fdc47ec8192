use super::{Unit, PLANCK};

pub trait EnergyUnit: Unit {}

/// Struct for representing energy unit values
/// # Examples
/// ```
/// use quantum::units::energy_units::{Energy, Hz, MHz};
/// let splitting = Energy(490.173994326310, MHz);
/// let splitting_hz = splitting.to(Hz);
/// let joules = splitting.to_si();
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Energy<U: EnergyUnit>(pub f64, pub U);

impl<U: EnergyUnit> Energy<U> {
    pub fn to_si(&self) -> f64 {
        self.1.to_si(self.0)
    }

    pub fn to<V: EnergyUnit>(&self, unit: V) -> Energy<V> {
        Energy(self.1.to_si(self.0) / unit.to_si(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Joule;

impl Unit for Joule {
    const TO_SI_MUL: f64 = 1.0;
}
impl EnergyUnit for Joule {}

/// Frequency unit, energy equivalent `h * nu`.
#[derive(Copy, Clone, Debug)]
pub struct Hz;

impl Unit for Hz {
    const TO_SI_MUL: f64 = PLANCK;
}
impl EnergyUnit for Hz {}

#[derive(Copy, Clone, Debug)]
pub struct KHz;

impl Unit for KHz {
    const TO_SI_MUL: f64 = 1e3 * PLANCK;
}
impl EnergyUnit for KHz {}

#[derive(Copy, Clone, Debug)]
pub struct MHz;

impl Unit for MHz {
    const TO_SI_MUL: f64 = 1e6 * PLANCK;
}
impl EnergyUnit for MHz {}

#[derive(Copy, Clone, Debug)]
pub struct GHz;

impl Unit for GHz {
    const TO_SI_MUL: f64 = 1e9 * PLANCK;
}
impl EnergyUnit for GHz {}
