use clebsch_gordan::{
    half_integer::{HalfI32, HalfU32},
    wigner_3j,
};

/// Wigner 3-j symbol with integer arguments.
///
/// Vanishes for projections outside `|m| <= j`, nonzero projection sum
/// or broken triangle condition.
pub fn wigner_3j_int(j1: u32, j2: u32, j3: u32, m1: i32, m2: i32, m3: i32) -> f64 {
    if m1 + m2 + m3 != 0 {
        return 0.0;
    }
    if m1.unsigned_abs() > j1 || m2.unsigned_abs() > j2 || m3.unsigned_abs() > j3 {
        return 0.0;
    }
    if j3 < j1.abs_diff(j2) || j3 > j1 + j2 {
        return 0.0;
    }

    wigner_3j(
        HalfU32::from_doubled(2 * j1),
        HalfU32::from_doubled(2 * j2),
        HalfU32::from_doubled(2 * j3),
        HalfI32::from_doubled(2 * m1),
        HalfI32::from_doubled(2 * m2),
        HalfI32::from_doubled(2 * m3),
    )
}

fn factorial(n: i32) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Wigner small-d matrix element `d^j_{m1, m2}(beta)`.
pub fn wigner_small_d(j: u32, m1: i32, m2: i32, beta: f64) -> f64 {
    let j = j as i32;
    if m1.abs() > j || m2.abs() > j {
        return 0.0;
    }

    let (cos, sin) = ((beta / 2.0).cos(), (beta / 2.0).sin());
    let norm = (factorial(j + m1) * factorial(j - m1) * factorial(j + m2) * factorial(j - m2))
        .sqrt();

    let k_min = 0.max(m2 - m1);
    let k_max = (j + m2).min(j - m1);

    (k_min..=k_max)
        .map(|k| {
            let sign = if (m1 - m2 + k) % 2 == 0 { 1.0 } else { -1.0 };
            let denominator = factorial(j + m2 - k)
                * factorial(k)
                * factorial(m1 - m2 + k)
                * factorial(j - m1 - k);

            sign / denominator
                * cos.powi(2 * j + m2 - m1 - 2 * k)
                * sin.powi(m1 - m2 + 2 * k)
        })
        .sum::<f64>()
        * norm
}

#[cfg(test)]
mod test {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::{wigner_3j_int, wigner_small_d};

    #[test]
    fn test_3j() {
        assert_relative_eq!(wigner_3j_int(0, 1, 1, 0, 0, 0), -1.0 / 3f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(wigner_3j_int(1, 1, 0, 1, -1, 0), 1.0 / 3f64.sqrt(), epsilon = 1e-12);
        assert_eq!(wigner_3j_int(1, 1, 1, 0, 0, 0), 0.0);
        assert_eq!(wigner_3j_int(3, 2, 3, -3, 6, -3), 0.0);
        assert_eq!(wigner_3j_int(0, 1, 3, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_small_d() {
        for beta in [0.0, 0.3, PI / 4.0, 1.2, PI / 2.0, 2.5] {
            let (cos, sin) = (f64::cos(beta), f64::sin(beta));

            let d20 = (3.0 * cos * cos - 1.0) / 2.0;
            let d21 = (1.5f64).sqrt() * sin * cos;
            let d22 = (3.0f64 / 8.0).sqrt() * sin * sin;

            assert_relative_eq!(wigner_small_d(2, 0, 0, beta), d20, epsilon = 1e-12);
            assert_relative_eq!(wigner_small_d(2, 1, 0, beta), -d21, epsilon = 1e-12);
            assert_relative_eq!(wigner_small_d(2, -1, 0, beta), d21, epsilon = 1e-12);
            assert_relative_eq!(wigner_small_d(2, 2, 0, beta), d22, epsilon = 1e-12);
            assert_relative_eq!(wigner_small_d(1, 1, 0, beta), -sin / 2f64.sqrt(), epsilon = 1e-12);
        }

        assert_eq!(wigner_small_d(2, 3, 0, 0.4), 0.0);
    }
}
