//! Core value types for utm

use core::f64::consts::PI;
use core::fmt;

/// Angular unit carried alongside every geodetic value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Converts a value expressed in this unit to degrees
    pub fn to_degrees(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => radians_to_degrees(value),
        }
    }

    /// Converts a value in degrees to this unit
    pub fn from_degrees(&self, degrees: f64) -> f64 {
        match self {
            AngleUnit::Degrees => degrees,
            AngleUnit::Radians => degrees_to_radians(degrees),
        }
    }

    /// Returns the name of this unit
    pub fn name(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }
}

/// Converts degrees to radians
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// UTM hemisphere, selecting the false northing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// False northing applied to southern hemisphere coordinates (meters)
    pub const SOUTH_FALSE_NORTHING: f64 = 10_000_000.0;

    /// Hemisphere of a latitude in degrees. The equator belongs to the north.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn is_north(&self) -> bool {
        matches!(self, Hemisphere::North)
    }

    /// False northing in meters for this hemisphere
    pub fn false_northing(&self) -> f64 {
        match self {
            Hemisphere::North => 0.0,
            Hemisphere::South => Self::SOUTH_FALSE_NORTHING,
        }
    }

    /// Single-letter designator, `N` or `S`
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

impl From<bool> for Hemisphere {
    fn from(north: bool) -> Self {
        if north {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }
}

/// Latitude/longitude on the reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub unit: AngleUnit,
}

impl GeodeticCoordinate {
    /// Creates a coordinate in the given unit
    pub fn new(latitude: f64, longitude: f64, unit: AngleUnit) -> Self {
        Self {
            latitude,
            longitude,
            unit,
        }
    }

    /// Creates a coordinate from decimal degrees
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, AngleUnit::Degrees)
    }

    /// Creates a coordinate from radians
    pub fn from_radians(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, AngleUnit::Radians)
    }

    /// Returns the same point expressed in `unit`
    pub fn in_unit(&self, unit: AngleUnit) -> Self {
        if unit == self.unit {
            return *self;
        }
        Self::new(
            unit.from_degrees(self.unit.to_degrees(self.latitude)),
            unit.from_degrees(self.unit.to_degrees(self.longitude)),
            unit,
        )
    }

    pub fn to_degrees(&self) -> Self {
        self.in_unit(AngleUnit::Degrees)
    }

    pub fn to_radians(&self) -> Self {
        self.in_unit(AngleUnit::Radians)
    }
}

impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AngleUnit::Degrees => write!(f, "{:.8}°, {:.8}°", self.latitude, self.longitude),
            AngleUnit::Radians => write!(f, "{:.10} rad, {:.10} rad", self.latitude, self.longitude),
        }
    }
}

/// Projected UTM grid coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmCoordinate {
    /// Easting in meters, including the 500 000 m false easting
    pub easting: f64,
    /// Northing in meters, including the false northing in the south
    pub northing: f64,
    /// Zone number, 1..=60
    pub zone: u8,
    pub hemisphere: Hemisphere,
}

impl UtmCoordinate {
    /// Creates a new UTM coordinate
    pub fn new(easting: f64, northing: f64, zone: u8, hemisphere: Hemisphere) -> Self {
        Self {
            easting,
            northing,
            zone,
            hemisphere,
        }
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere.is_north()
    }
}

impl fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {:.3}mE {:.3}mN",
            self.zone,
            self.hemisphere.letter(),
            self.easting,
            self.northing
        )
    }
}

/// Local distortion of the grid at a point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridFactors {
    /// Meridian convergence in radians: angle from true north to grid north,
    /// positive east of the central meridian in the northern hemisphere
    pub convergence: f64,
    /// Point scale factor (0.9996 on the central meridian)
    pub scale: f64,
}
