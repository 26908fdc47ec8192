pub struct Consts;

impl Consts {
    /// The Planck constant in J s
    pub const PLANCK: f64 = quantum::units::PLANCK;

    /// The nuclear magneton in J / T
    pub const NUCLEAR_MAG: f64 = 5.0507837461e-27;

    /// The Bohr radius in m
    pub const BOHR_RADIUS: f64 = 5.29177210903e-11;

    /// The vacuum permittivity in F / m
    pub const EPS0: f64 = 8.8541878128e-12;

    /// The speed of light in m / s
    pub const SPEED_OF_LIGHT: f64 = 299792458.0;

    /// One debye in C m
    pub const DEBYE: f64 = 3.33564e-30;

    /// Converts polarizability matrix elements to energy per light intensity (W / m^2).
    pub const INTENSITY_FACTOR: f64 = 1.0 / (2.0 * Self::EPS0 * Self::SPEED_OF_LIGHT);
}
