use clebsch_gordan::half_integer::{HalfI32, HalfU32};
use faer::{c64, Mat};

use crate::operator::{AngularVector, Operator};

pub type Spin = HalfU32;
pub type Projection = HalfI32;

/// Projections of `spin` ordered from `m = s` down to `m = -s`.
pub fn spin_projections(spin: Spin) -> Vec<Projection> {
    let ds = spin.double_value() as i32;

    (0..=ds)
        .map(|k| HalfI32::from_doubled(ds - 2 * k))
        .collect()
}

/// Converts `value` to a spin, `None` if it is negative or not a multiple of 1/2.
pub fn spin_from_f64(value: f64) -> Option<Spin> {
    let doubled = 2.0 * value;
    if !value.is_finite() || value < 0.0 || (doubled - doubled.round()).abs() > 1e-9 {
        return None;
    }

    Some(HalfU32::from_doubled(doubled.round() as u32))
}

pub struct SpinOperators;

impl SpinOperators {
    pub fn ladder_plus(spin: Spin, m_bra: Projection, m_ket: Projection) -> f64 {
        let ds = spin.double_value() as i32;
        if m_bra.double_value() == m_ket.double_value() + 2 {
            ((ds * (ds + 2) - m_bra.double_value() * m_ket.double_value()) as f64).sqrt() / 2.0
        } else {
            0.0
        }
    }

    /// Matrix of `J+` in the descending projection ordering.
    pub fn raising(spin: Spin) -> Mat<c64> {
        let projections = spin_projections(spin);

        Operator::from_mel(&projections, |&bra, &ket| {
            c64::new(Self::ladder_plus(spin, bra, ket), 0.0)
        })
        .into_backed()
    }

    pub fn lowering(spin: Spin) -> Mat<c64> {
        Self::raising(spin).adjoint().to_owned()
    }

    pub fn x(spin: Spin) -> Mat<c64> {
        let plus = Self::raising(spin);
        let minus = Self::lowering(spin);

        Mat::from_fn(plus.nrows(), plus.ncols(), |i, j| (plus[(i, j)] + minus[(i, j)]) * 0.5)
    }

    pub fn y(spin: Spin) -> Mat<c64> {
        let plus = Self::raising(spin);
        let minus = Self::lowering(spin);

        Mat::from_fn(plus.nrows(), plus.ncols(), |i, j| {
            (minus[(i, j)] - plus[(i, j)]) * c64::new(0.0, 0.5)
        })
    }

    pub fn z(spin: Spin) -> Mat<c64> {
        let plus = Self::raising(spin);
        let minus = Self::lowering(spin);

        let commutator = &plus * &minus - &minus * &plus;

        Mat::from_fn(plus.nrows(), plus.ncols(), |i, j| commutator[(i, j)] * 0.5)
    }

    /// Cartesian operator vector `(Jx, Jy, Jz)` of a single spin.
    pub fn vector(spin: Spin) -> AngularVector {
        AngularVector::new(Self::x(spin), Self::y(spin), Self::z(spin))
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use clebsch_gordan::{half_i32, half_integer::HalfU32, half_u32};
    use faer::{c64, Mat};

    use crate::operator::hermitian_deviation;

    use super::{spin_from_f64, spin_projections, SpinOperators};

    fn assert_close(lhs: &Mat<c64>, rhs: &Mat<c64>) {
        for i in 0..lhs.nrows() {
            for j in 0..lhs.ncols() {
                assert_abs_diff_eq!(lhs[(i, j)].re, rhs[(i, j)].re, epsilon = 1e-12);
                assert_abs_diff_eq!(lhs[(i, j)].im, rhs[(i, j)].im, epsilon = 1e-12);
            }
        }
    }

    fn times_i(mat: &Mat<c64>) -> Mat<c64> {
        Mat::from_fn(mat.nrows(), mat.ncols(), |i, j| mat[(i, j)] * c64::new(0.0, 1.0))
    }

    #[test]
    fn test_projections() {
        let projections = spin_projections(half_u32!(3/2));
        let doubled: Vec<i32> = projections.iter().map(|m| m.double_value()).collect();
        assert_eq!(doubled, vec![3, 1, -1, -3]);

        assert_eq!(spin_projections(half_u32!(0)), vec![half_i32!(0)]);

        assert_eq!(spin_from_f64(3.5), Some(half_u32!(7/2)));
        assert_eq!(spin_from_f64(-0.5), None);
        assert_eq!(spin_from_f64(0.3), None);
    }

    #[test]
    fn test_raising_elements() {
        let plus = SpinOperators::raising(half_u32!(1));

        assert_abs_diff_eq!(plus[(0, 1)].re, 2f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(plus[(1, 2)].re, 2f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(plus[(1, 0)].re, 0.0);

        let z = SpinOperators::z(half_u32!(1));
        assert_abs_diff_eq!(z[(0, 0)].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z[(2, 2)].re, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_momentum_algebra() {
        for doubled in 0..=7 {
            let spin = HalfU32::from_doubled(doubled);
            let j = spin.value();
            let size = doubled as usize + 1;

            let vector = SpinOperators::vector(spin);
            let [x, y, z] = vector.components();

            for c in vector.components() {
                assert_abs_diff_eq!(hermitian_deviation(c.as_ref()), 0.0, epsilon = 1e-12);
            }

            assert_close(&(x * y - y * x), &times_i(z));
            assert_close(&(y * z - z * y), &times_i(x));
            assert_close(&(z * x - x * z), &times_i(y));

            let casimir = Mat::from_fn(size, size, |i, k| {
                if i == k {
                    c64::new(j * (j + 1.0), 0.0)
                } else {
                    c64::new(0.0, 0.0)
                }
            });
            assert_close(&vector.squared(), &casimir);
        }
    }
}
