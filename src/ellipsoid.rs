//! Reference ellipsoids

/// Reference ellipsoid defined by semi-major axis and flattening
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis (m)
    pub a: f64,
    /// Flattening
    pub f: f64,
}

impl Ellipsoid {
    /// WGS84 (EPSG:7030)
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };

    /// GRS80 (EPSG:7019). Differs from WGS84 only in the ninth digit of 1/f.
    pub const GRS80: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_222_101,
    };

    /// Semi-minor axis (m)
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Second eccentricity squared
    pub fn ep2(&self) -> f64 {
        let e2 = self.e2();
        e2 / (1.0 - e2)
    }

    /// Third flattening `n = (a - b) / (a + b)`, the expansion parameter of
    /// the Krüger series
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_derived() {
        let wgs84 = Ellipsoid::WGS84;
        assert!((wgs84.b() - 6_356_752.314_245).abs() < 1e-3);
        assert!((wgs84.e2() - 0.006_694_379_990_14).abs() < 1e-14);
        assert!((wgs84.ep2() - 0.006_739_496_742_28).abs() < 1e-14);
        assert!((wgs84.third_flattening() - 0.001_679_220_386_38).abs() < 1e-14);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        assert_eq!(Ellipsoid::GRS80.a, Ellipsoid::WGS84.a);
        assert!((Ellipsoid::GRS80.b() - Ellipsoid::WGS84.b()).abs() < 1e-3);
        assert_eq!(Ellipsoid::default(), Ellipsoid::WGS84);
    }
}
