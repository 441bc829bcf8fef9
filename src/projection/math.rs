//! Floating-point helpers for the projection series
//!
//! All transcendental functions go through `libm`, so results do not depend
//! on the platform's libm and the crate builds without `std`.

/// Horner evaluation, highest-order coefficient first
#[inline]
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Error-free sum: returns `(s, t)` with `s = fl(u + v)` and `s + t = u + v`
#[inline]
fn sum_exact(u: f64, v: f64) -> (f64, f64) {
    let s = u + v;
    let up = s - v;
    let vpp = s - up;
    let t = -((up - u) + (vpp - v));
    (s, t)
}

/// Reduces an angle in degrees to `[-180, 180)`
pub fn ang_normalize(x: f64) -> f64 {
    let mut x = libm::fmod(x, 360.0);
    if x < -180.0 {
        x += 360.0;
    }
    if x >= 180.0 {
        x -= 360.0;
    }
    x
}

/// `y - x` in degrees, reduced to `[-180, 180]` without losing precision
pub fn ang_diff(x: f64, y: f64) -> f64 {
    let (d, t) = sum_exact(ang_normalize(-x), ang_normalize(y));
    ang_normalize(d) + t
}

/// Sine and cosine of an angle in degrees
///
/// Reduces to the first octant before converting to radians so multiples
/// of 90° produce exact zeros and ones.
pub fn sincosd(x: f64) -> (f64, f64) {
    let mut r = libm::fmod(x, 360.0);
    if r < 0.0 {
        r += 360.0;
    }
    let q = libm::floor(r / 90.0 + 0.5) as i32;
    r -= 90.0 * f64::from(q);
    let (s, c) = libm::sincos(r.to_radians());
    match q & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// `sqrt(x² + y²)` without undue overflow
#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// `e * atanh(e * x)` for eccentricity `es`
#[inline]
fn eatanhe(x: f64, es: f64) -> f64 {
    if es > 0.0 {
        es * libm::atanh(es * x)
    } else if es < 0.0 {
        -es * libm::atan(-es * x)
    } else {
        0.0
    }
}

/// Conformal latitude: maps `tan φ` to `tan φ'`
pub fn taupf(tau: f64, es: f64) -> f64 {
    let tau1 = hypot(1.0, tau);
    let sig = libm::sinh(eatanhe(tau / tau1, es));
    hypot(1.0, sig) * tau - sig * tau1
}

/// Inverse of [`taupf`] by Newton iteration
pub fn tauf(taup: f64, es: f64) -> f64 {
    const MAX_ITER: usize = 8;
    // sqrt(f64::EPSILON)
    const TOL: f64 = 1.490_116_119_384_765_6e-8;

    let e2m = 1.0 - es * es;
    let mut tau = taup / e2m;
    let stol = TOL * libm::fmax(libm::fabs(taup), 1.0);

    for _ in 0..MAX_ITER {
        let taupa = taupf(tau, es);
        let dtau = (taup - taupa) * (1.0 + e2m * tau * tau)
            / (e2m * hypot(1.0, tau) * hypot(1.0, taupa));
        tau += dtau;
        if libm::fabs(dtau) < stol {
            break;
        }
    }
    tau
}
