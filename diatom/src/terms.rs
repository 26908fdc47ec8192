use faer::{c64, Mat};
use quantum::operator::{scaled, AngularVector, Operator};

use crate::{
    basis::{HyperfineBasis, RotorState},
    utility::add_scaled,
    vectors::AngularVectors,
    wigner::{wigner_3j_int, wigner_small_d},
};

fn finite_or_zero(value: c64) -> c64 {
    if value.re.is_finite() && value.im.is_finite() {
        value
    } else {
        c64::new(0.0, 0.0)
    }
}

/// Rigid rotor with centrifugal distortion `Brot N² - Drot N⁴`.
pub fn rotational(n: &AngularVector, brot: f64, drot: f64) -> Mat<c64> {
    let n_squared = n.squared();
    let n_fourth = &n_squared * &n_squared;

    let mut rotor = scaled(n_squared.as_ref(), brot);
    add_scaled(&mut rotor, n_fourth.as_ref(), -drot);

    rotor
}

/// Linear Zeeman shift `-(mu_n N_z + mu1 I1_z + mu2 I2_z)` per unit field along z.
pub fn zeeman(vectors: &AngularVectors, mu_n: f64, mu1: f64, mu2: f64) -> Mat<c64> {
    let mut shift = scaled(vectors.n.z.as_ref(), -mu_n);
    add_scaled(&mut shift, vectors.i1.z.as_ref(), -mu1);
    add_scaled(&mut shift, vectors.i2.z.as_ref(), -mu2);

    shift
}

/// Scalar spin-spin coupling `c J1·J2`.
pub fn scalar_coupling(coupling: f64, j1: &AngularVector, j2: &AngularVector) -> Mat<c64> {
    scaled(j1.dot(j2).as_ref(), coupling)
}

/// Tensor nuclear spin-spin interaction with strength `c3`,
/// `n_values` gives the rotational level of every basis state.
pub fn tensor_nuclear(c3: f64, vectors: &AngularVectors, n_values: &[u32]) -> Mat<c64> {
    let i1_n = vectors.i1.dot(&vectors.n);
    let i2_n = vectors.i2.dot(&vectors.n);
    let i1_i2 = vectors.i1.dot(&vectors.i2);

    let symmetric = &i1_n * &i2_n + &i2_n * &i1_n;

    Mat::from_fn(vectors.size(), vectors.size(), |i, j| {
        let n = n_values[i] as f64;
        let prefactor = c3 / ((2.0 * n + 3.0) * (2.0 * n - 1.0));

        let element = symmetric[(i, j)] * 3.0 - i1_i2[(i, j)] * (2.0 * n * (n + 1.0));

        finite_or_zero(element * prefactor)
    })
}

/// Electric quadrupole interaction of a nucleus with spin `spin` and coupling `q`.
///
/// Elements whose closed form is undefined, as for spins below 1, are zero.
pub fn quadrupole(
    q: f64,
    spin: f64,
    i: &AngularVector,
    n: &AngularVector,
    n_values: &[u32],
) -> Mat<c64> {
    let i_n = i.dot(n);
    let i_n_squared = &i_n * &i_n;
    let magnitudes = &i.squared() * &n.squared();

    Mat::from_fn(i.size(), i.size(), |a, b| {
        let n_value = n_values[a] as f64;
        let prefactor = -q
            / (2.0 * spin * (2.0 * spin - 1.0) * (2.0 * n_value - 1.0) * (2.0 * n_value + 3.0));

        let element = i_n_squared[(a, b)] * 3.0 + i_n[(a, b)] * 1.5 - magnitudes[(a, b)];

        finite_or_zero(element * prefactor)
    })
}

fn rotational_operator<F>(basis: &HyperfineBasis, mut mat_element: F) -> Mat<c64>
where
    F: FnMut(&RotorState, &RotorState) -> f64,
{
    let rotors = basis.rotational_states();
    let operator = Operator::from_mel(&rotors, |bra, ket| {
        finite_or_zero(c64::new(mat_element(bra, ket), 0.0))
    });

    basis.widen_rotational(operator)
}

fn sign(exponent: i32) -> f64 {
    if exponent % 2 == 0 { 1.0 } else { -1.0 }
}

fn level_degeneracies(bra: &RotorState, ket: &RotorState) -> f64 {
    (((2 * bra.n + 1) * (2 * ket.n + 1)) as f64).sqrt()
}

/// Dc Stark interaction of dipole `d0` with a unit field along z.
pub fn dc_stark(basis: &HyperfineBasis, d0: f64) -> Mat<c64> {
    rotational_operator(basis, |bra, ket| {
        -d0 * level_degeneracies(bra, ket)
            * sign(bra.mn)
            * wigner_3j_int(bra.n, 1, ket.n, -bra.mn, 0, ket.mn)
            * wigner_3j_int(bra.n, 1, ket.n, 0, 0, 0)
    })
}

/// Isotropic ac Stark interaction `-a0` per unit intensity, before field scaling.
pub fn ac_isotropic(basis: &HyperfineBasis, a0: f64) -> Mat<c64> {
    let rotors = basis.rotational_states();
    let operator = Operator::from_diagonal_mel(&rotors, |_| c64::new(-a0, 0.0));

    basis.widen_rotational(operator)
}

/// Anisotropic ac Stark interaction for light polarized at angle `beta` to z,
/// before field scaling.
pub fn ac_anisotropic(basis: &HyperfineBasis, a2: f64, beta: f64) -> Mat<c64> {
    rotational_operator(basis, |bra, ket| {
        let m = ket.mn - bra.mn;

        -a2 * wigner_small_d(2, m, 0, beta)
            * sign(ket.mn)
            * level_degeneracies(bra, ket)
            * wigner_3j_int(ket.n, 2, bra.n, 0, 0, 0)
            * wigner_3j_int(ket.n, 2, bra.n, -ket.mn, m, bra.mn)
    })
}

/// Dipole operator component of helicity `m` scaled by `d`.
pub fn dipole(basis: &HyperfineBasis, d: f64, m: i32) -> Mat<c64> {
    rotational_operator(basis, |bra, ket| {
        d * level_degeneracies(bra, ket)
            * sign(bra.mn)
            * wigner_3j_int(bra.n, 1, ket.n, -bra.mn, m, ket.mn)
            * wigner_3j_int(bra.n, 1, ket.n, 0, 0, 0)
    })
}
