//! Shared helpers: dense reference determinant and random Toeplitz inputs.

#![allow(dead_code)]

use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;
use toeplitz_det::{Complex64, ToeplitzInput, ToeplitzScalar};

pub const TOL: f64 = 1e-10;

pub fn to_complex<T: ToeplitzScalar>(x: T) -> Complex64 {
    Complex64::new(x.re(), x.im())
}

/// Determinant of the dense matrix by LU with partial pivoting.
pub fn dense_det<T: ToeplitzScalar>(input: ToeplitzInput<'_, T>) -> Complex64 {
    let mut m: Array2<Complex64> = input.to_dense().unwrap().mapv(to_complex);
    let n = m.nrows();
    let mut det = Complex64::new(1.0, 0.0);

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&a, &b| m[(a, col)].norm().total_cmp(&m[(b, col)].norm()))
            .unwrap();
        if m[(pivot, col)].norm() == 0.0 {
            return Complex64::new(0.0, 0.0);
        }
        if pivot != col {
            for k in 0..n {
                let tmp = m[(pivot, k)];
                m[(pivot, k)] = m[(col, k)];
                m[(col, k)] = tmp;
            }
            det = -det;
        }
        let d = m[(col, col)];
        det *= d;
        for row in col + 1..n {
            let f = m[(row, col)] / d;
            for k in col..n {
                let v = m[(col, k)];
                m[(row, k)] -= f * v;
            }
        }
    }
    det
}

pub fn rel_err(got: Complex64, want: Complex64) -> f64 {
    (got - want).norm() / want.norm()
}

/// Diagonal magnitude `n + 1` with off-diagonals bounded by 0.5 keeps every
/// leading block strictly diagonally dominant, hence well conditioned.
fn diagonal(n: usize, rng: &mut StdRng) -> f64 {
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    sign * (n as f64 + 1.0)
}

pub fn random_real_symmetric(n: usize, rng: &mut StdRng) -> Vec<f64> {
    let mut c = vec![diagonal(n, rng)];
    c.extend((1..n).map(|_| rng.random_range(-0.5..0.5)));
    c
}

pub fn random_real_general(n: usize, rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    let c = random_real_symmetric(n, rng);
    let mut r = vec![c[0]];
    r.extend((1..n).map(|_| rng.random_range(-0.5..0.5)));
    (c, r)
}

fn random_complex(rng: &mut StdRng) -> Complex64 {
    Complex64::from_polar(
        rng.random_range(0.0..0.5),
        rng.random_range(0.0..std::f64::consts::TAU),
    )
}

pub fn random_complex_hermitian(n: usize, rng: &mut StdRng) -> Vec<Complex64> {
    let mut c = vec![Complex64::new(diagonal(n, rng), 0.0)];
    c.extend((1..n).map(|_| random_complex(rng)));
    c
}

pub fn random_complex_general(n: usize, rng: &mut StdRng) -> (Vec<Complex64>, Vec<Complex64>) {
    let theta = rng.random_range(0.0..std::f64::consts::TAU);
    let c0 = Complex64::from_polar(n as f64 + 1.0, theta);
    let mut c = vec![c0];
    c.extend((1..n).map(|_| random_complex(rng)));
    let mut r = vec![c0];
    r.extend((1..n).map(|_| random_complex(rng)));
    (c, r)
}

fn random_wide_complex(rng: &mut StdRng) -> Complex64 {
    Complex64::from_polar(
        rng.random_range(0.0..1.5),
        rng.random_range(0.0..std::f64::consts::TAU),
    )
}

/// Off-diagonal magnitudes up to 1.5·|c[0]|, so reflection products land on
/// both sides of the unit circle.
pub fn random_complex_unrestricted(
    n: usize,
    rng: &mut StdRng,
) -> (Vec<Complex64>, Vec<Complex64>) {
    let c0 = Complex64::from_polar(1.0, rng.random_range(0.0..std::f64::consts::TAU));
    let mut c = vec![c0];
    c.extend((1..n).map(|_| random_wide_complex(rng)));
    let mut r = vec![c0];
    r.extend((1..n).map(|_| random_wide_complex(rng)));
    (c, r)
}
