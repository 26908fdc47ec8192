pub mod energy_units;

/// Trait for units that can be converted to SI units.
pub trait Unit: Copy + Clone {
    const TO_SI_MUL: f64;

    fn to_si(&self, value: f64) -> f64 {
        value * Self::TO_SI_MUL
    }
}

/// Planck constant in J s.
pub const PLANCK: f64 = 6.62607015e-34;
