//! Ellipsoidal Transverse Mercator
//!
//! Krüger series in the third flattening, truncated at sixth order and
//! summed with Clenshaw's method, following Karney, "Transverse Mercator
//! with an accuracy of a few nanometers", J. Geodesy 85 (2011). Within a
//! UTM zone the truncation error is well below a millimetre.
//!
//! Coefficients are evaluated from the ellipsoid on construction; no step
//! allocates.

use core::f64::consts::FRAC_PI_2;
use core::f64::consts::PI;

use num_complex::Complex64;

use super::math::{ang_diff, hypot, polyval, sincosd, tauf, taupf};
use crate::ellipsoid::Ellipsoid;

/// Series order
const ORDER: usize = 6;

/// Forward coefficients alpha_l / n^l, numerator polynomial in n followed by
/// the common denominator
const ALPHA_COEFFS: [&[f64]; ORDER] = [
    &[31564.0, -66675.0, 34440.0, 47250.0, -100800.0, 75600.0, 151200.0],
    &[-1983433.0, 863232.0, 748608.0, -1161216.0, 524160.0, 1935360.0],
    &[670412.0, 406647.0, -533952.0, 184464.0, 725760.0],
    &[6601661.0, -7732800.0, 2230245.0, 7257600.0],
    &[-13675556.0, 3438171.0, 7983360.0],
    &[212378941.0, 319334400.0],
];

/// Inverse coefficients beta_l / n^l, same layout as [`ALPHA_COEFFS`]
const BETA_COEFFS: [&[f64]; ORDER] = [
    &[384796.0, -382725.0, -6720.0, 932400.0, -1612800.0, 1209600.0, 2419200.0],
    &[-1118711.0, 1695744.0, -1174656.0, 258048.0, 80640.0, 3870720.0],
    &[22276.0, -16929.0, -15984.0, 12852.0, 362880.0],
    &[-830251.0, -158400.0, 197865.0, 7257600.0],
    &[-435388.0, 453717.0, 15966720.0],
    &[20648693.0, 638668800.0],
];

/// Rectifying radius ratio b1 = A / a: polynomial in n² over 256 (1 + n)
const B1_COEFFS: [f64; 5] = [1.0, 4.0, 64.0, 256.0, 256.0];

/// Projected point with local grid factors, before false offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Distance east of the central meridian (m)
    pub x: f64,
    /// Distance north of the equator (m)
    pub y: f64,
    /// Meridian convergence (degrees)
    pub gamma: f64,
    /// Point scale factor
    pub k: f64,
}

/// Transverse Mercator on a given ellipsoid and central scale factor
#[derive(Debug, Clone)]
pub struct TransverseMercator {
    e2: f64,
    es: f64,
    e2m: f64,
    b1: f64,
    a1: f64,
    k0: f64,
    alp: [f64; ORDER],
    bet: [f64; ORDER],
}

impl TransverseMercator {
    /// Precomputes the series coefficients for `ellipsoid` with central
    /// scale `k0`
    pub fn new(ellipsoid: &Ellipsoid, k0: f64) -> Self {
        let e2 = ellipsoid.e2();
        let es = if ellipsoid.f < 0.0 { -1.0 } else { 1.0 } * libm::sqrt(libm::fabs(e2));
        let n = ellipsoid.third_flattening();

        let m = B1_COEFFS.len() - 1;
        let b1 = polyval(&B1_COEFFS[..m], n * n) / (B1_COEFFS[m] * (1.0 + n));

        let mut alp = [0.0; ORDER];
        let mut bet = [0.0; ORDER];
        let mut d = n;
        for l in 0..ORDER {
            let (ca, cb) = (ALPHA_COEFFS[l], BETA_COEFFS[l]);
            let m = ca.len() - 1;
            alp[l] = d * polyval(&ca[..m], n) / ca[m];
            bet[l] = d * polyval(&cb[..m], n) / cb[m];
            d *= n;
        }

        Self {
            e2,
            es,
            e2m: 1.0 - e2,
            b1,
            a1: b1 * ellipsoid.a,
            k0,
            alp,
            bet,
        }
    }

    /// Central scale factor
    pub fn k0(&self) -> f64 {
        self.k0
    }

    /// Projects `(lat, lon)` in degrees about the meridian `lon0`
    ///
    /// `lat` must lie in `[-90, 90]`; the caller validates ranges.
    pub fn forward(&self, lon0: f64, lat: f64, lon: f64) -> Projected {
        let lon = ang_diff(lon0, lon);

        let latsign = if lat.is_sign_negative() { -1.0 } else { 1.0 };
        let lonsign = if lon.is_sign_negative() { -1.0 } else { 1.0 };
        let lat = lat * latsign;
        let lon = lon * lonsign;
        let backside = lon > 90.0;
        let lon = if backside { 180.0 - lon } else { lon };

        let (sphi, cphi) = sincosd(lat);
        let (slam, clam) = sincosd(lon);

        let (xip, etap, mut gamma, mut k);
        if lat == 90.0 {
            xip = FRAC_PI_2;
            etap = 0.0;
            gamma = lon;
            let e2m_sqrt = libm::sqrt(self.e2m);
            k = (1.0 + e2m_sqrt) / 2.0 / libm::sqrt(e2m_sqrt);
        } else {
            let tau = sphi / cphi;
            let taup = taupf(tau, self.es);
            xip = libm::atan2(taup, clam);
            etap = libm::asinh(slam / hypot(taup, clam));
            gamma = libm::atan2(slam * taup, clam * hypot(1.0, taup)).to_degrees();
            k = libm::sqrt(self.e2m + self.e2 * cphi * cphi) * hypot(1.0, tau) / hypot(taup, clam);
        }

        let c0 = libm::cos(2.0 * xip);
        let ch0 = libm::cosh(2.0 * etap);
        let s0 = libm::sin(2.0 * xip);
        let sh0 = libm::sinh(2.0 * etap);
        let a = Complex64::new(2.0 * c0 * ch0, -2.0 * s0 * sh0);

        let mut y0 = Complex64::new(0.0, 0.0);
        let mut y1 = Complex64::new(0.0, 0.0);
        let mut z0 = Complex64::new(0.0, 0.0);
        let mut z1 = Complex64::new(0.0, 0.0);
        for j in (0..ORDER).rev() {
            let (ty, tz) = (y0, z0);
            y0 = a * y0 - y1 + self.alp[j];
            z0 = a * z0 - z1 + (2 * (j + 1)) as f64 * self.alp[j];
            y1 = ty;
            z1 = tz;
        }

        let sin_zeta = Complex64::new(s0 * ch0, c0 * sh0);
        let zeta = Complex64::new(xip, etap) + sin_zeta * y0;
        let dzeta = Complex64::new(1.0, 0.0) - z1 + (a / 2.0) * z0;

        gamma -= libm::atan2(dzeta.im, dzeta.re).to_degrees();
        k *= self.b1 * hypot(dzeta.re, dzeta.im);

        let xi = if backside { PI - zeta.re } else { zeta.re };
        let eta = zeta.im;
        let gamma = if backside { 180.0 - gamma } else { gamma };

        Projected {
            x: self.a1 * self.k0 * eta * lonsign,
            y: self.a1 * self.k0 * xi * latsign,
            gamma: gamma * latsign * lonsign,
            k: k * self.k0,
        }
    }

    /// Recovers `(lat, lon)` in degrees from `(x, y)` about the meridian
    /// `lon0`. Longitude is returned in `[-180, 180]`.
    pub fn inverse(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let xi = y / (self.a1 * self.k0);
        let eta = x / (self.a1 * self.k0);

        let xisign = if xi.is_sign_negative() { -1.0 } else { 1.0 };
        let etasign = if eta.is_sign_negative() { -1.0 } else { 1.0 };
        let xi = xi * xisign;
        let eta = eta * etasign;
        let backside = xi > FRAC_PI_2;
        let xi = if backside { PI - xi } else { xi };

        let c0 = libm::cos(2.0 * xi);
        let ch0 = libm::cosh(2.0 * eta);
        let s0 = libm::sin(2.0 * xi);
        let sh0 = libm::sinh(2.0 * eta);
        let a = Complex64::new(2.0 * c0 * ch0, -2.0 * s0 * sh0);

        let mut y0 = Complex64::new(0.0, 0.0);
        let mut y1 = Complex64::new(0.0, 0.0);
        for j in (0..ORDER).rev() {
            let t = y0;
            y0 = a * y0 - y1 - self.bet[j];
            y1 = t;
        }

        let sin_zeta = Complex64::new(s0 * ch0, c0 * sh0);
        let zetap = Complex64::new(xi, eta) + sin_zeta * y0;
        let (xip, etap) = (zetap.re, zetap.im);

        let s = libm::sinh(etap);
        let c = libm::fmax(0.0, libm::cos(xip));
        let r = hypot(s, c);

        let (lat, mut lon) = if r != 0.0 {
            let tau = tauf(libm::sin(xip) / r, self.es);
            (libm::atan(tau).to_degrees(), libm::atan2(s, c).to_degrees())
        } else {
            (90.0, 0.0)
        };
        if backside {
            lon = 180.0 - lon;
        }

        let mut lon = lon0 + lon * etasign;
        if lon > 180.0 {
            lon -= 360.0;
        } else if lon < -180.0 {
            lon += 360.0;
        }
        (lat * xisign, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utm() -> TransverseMercator {
        TransverseMercator::new(&Ellipsoid::WGS84, 0.9996)
    }

    #[test]
    fn test_central_meridian_has_no_easting() {
        let p = utm().forward(123.0, 40.0, 123.0);
        assert!(p.x.abs() < 1e-9, "x = {}", p.x);
        assert!(p.gamma.abs() < 1e-12);
        assert!((p.k - 0.9996).abs() < 1e-12);
    }

    #[test]
    fn test_equator_origin() {
        let p = utm().forward(3.0, 0.0, 3.0);
        assert_eq!(p.y, 0.0);
        assert!(p.x.abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let tm = utm();
        let ne = tm.forward(0.0, 30.0, 2.0);
        let sw = tm.forward(0.0, -30.0, -2.0);
        assert!((ne.x + sw.x).abs() < 1e-9);
        assert!((ne.y + sw.y).abs() < 1e-9);
        assert!((ne.gamma - sw.gamma).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        let tm = utm();
        for (lat, lon) in [(0.0, 0.0), (30.0, -2.9), (-45.0, 2.5), (84.0, 3.0), (-80.0, -3.0), (60.0, 0.1)] {
            let p = tm.forward(0.0, lat, lon);
            let (lat2, lon2) = tm.inverse(0.0, p.x, p.y);
            assert!((lat - lat2).abs() < 1e-11, "lat {lat} -> {lat2}");
            assert!((lon - lon2).abs() < 1e-11, "lon {lon} -> {lon2}");
        }
    }

    #[test]
    fn test_pole() {
        let tm = utm();
        let p = tm.forward(0.0, 90.0, 0.0);
        assert!(p.x.abs() < 1e-9);
        let (lat, _) = tm.inverse(0.0, p.x, p.y);
        assert!((lat - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_longitude_wraps_at_date_line() {
        let tm = utm();
        let p = tm.forward(177.0, 10.0, -179.0);
        assert!(p.x > 0.0);
        let (_, lon) = tm.inverse(177.0, p.x, p.y);
        assert!((lon + 179.0).abs() < 1e-11, "lon = {lon}");
    }
}
