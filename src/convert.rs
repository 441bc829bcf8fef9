//! Geodetic <-> UTM conversion on WGS84
//!
//! Every function here is pure: it validates its input, runs the
//! Transverse Mercator series on the stack, and returns either a complete
//! result or a [`ConversionError`](crate::ConversionError). Nothing panics on
//! out-of-domain input.
//!
//! Angular values in errors are reported in degrees regardless of the unit
//! the caller used.

use crate::ellipsoid::Ellipsoid;
use crate::error::{check_range, Bound, ConversionError, Field, Result};
use crate::projection::TransverseMercator;
use crate::types::{AngleUnit, GeodeticCoordinate, GridFactors, Hemisphere, UtmCoordinate};
use crate::zone::{self, MAX_LATITUDE, MIN_LATITUDE};

/// Scale factor on the UTM central meridian
pub const UTM_SCALE_FACTOR: f64 = 0.9996;

/// False easting added to every UTM easting (meters)
pub const FALSE_EASTING: f64 = 500_000.0;

/// Largest easting accepted by the inverse (meters). Zones are at most
/// ~668 km wide, so this covers a forced zone up to a few degrees past its
/// edge.
pub const MAX_EASTING: f64 = 1_000_000.0;

/// Northing of the north pole on the UTM grid (meters), rounded up to the
/// millimetre. Northern northings above it lie past the pole.
pub const MAX_NORTH_NORTHING: f64 = 9_997_964.944;

/// Southern northings above the false northing would be north of the
/// equator.
pub const MAX_SOUTH_NORTHING: f64 = Hemisphere::SOUTH_FALSE_NORTHING;

/// Angular inputs closer than this to a whole degree are snapped onto it
/// (degrees, about 10 µm on the ground)
const SNAP_TOLERANCE: f64 = 1e-10;

/// Transverse Mercator configured for UTM on WGS84
pub fn utm_projection() -> TransverseMercator {
    TransverseMercator::new(&Ellipsoid::WGS84, UTM_SCALE_FACTOR)
}

/// Converts a latitude/longitude to UTM, choosing the zone automatically
///
/// The equator is assigned to the northern hemisphere.
///
/// # Errors
/// `OutOfRange` if latitude is outside `[-80°, 84°]`, longitude outside
/// `[-180°, 180°]`, or either is not finite.
///
/// # Examples
///
/// ```
/// use utm::{to_utm, AngleUnit, Hemisphere};
///
/// let utm = to_utm(0.0, 0.0, AngleUnit::Degrees)?;
/// assert_eq!(utm.zone, 31);
/// assert_eq!(utm.hemisphere, Hemisphere::North);
/// assert!((utm.easting - 166_021.443).abs() < 1e-3);
/// # Ok::<(), utm::ConversionError>(())
/// ```
pub fn to_utm(latitude: f64, longitude: f64, unit: AngleUnit) -> Result<UtmCoordinate> {
    let (lat, lon) = validate_geodetic(latitude, longitude, unit)?;
    let zone = zone::zone_number(lat, lon);
    Ok(project(lat, lon, zone))
}

/// Converts a latitude/longitude to UTM in a caller-chosen zone
///
/// Useful to keep a dataset in one zone when it straddles a boundary.
/// Accuracy degrades gracefully as the point moves away from the zone.
///
/// # Errors
/// `InvalidZone` for a zone outside `1..=60`, otherwise as [`to_utm`].
///
/// # Examples
///
/// ```
/// use utm::{to_utm_in_zone, AngleUnit};
///
/// let utm = to_utm_in_zone(60.9679875497, -149.119325194, AngleUnit::Degrees, 6)?;
/// assert!((utm.easting - 385_273.02).abs() < 1e-2);
/// assert!((utm.northing - 6_761_077.20).abs() < 1e-2);
/// # Ok::<(), utm::ConversionError>(())
/// ```
pub fn to_utm_in_zone(latitude: f64, longitude: f64, unit: AngleUnit, zone: i32) -> Result<UtmCoordinate> {
    let zone = zone::validate_zone(zone)?;
    let (lat, lon) = validate_geodetic(latitude, longitude, unit)?;
    Ok(project(lat, lon, zone))
}

/// Converts a UTM coordinate back to latitude/longitude in `unit`
///
/// `hemisphere` accepts a [`Hemisphere`] or a `bool` (`true` = north).
/// Longitude is returned in `[-180°, 180°]`.
///
/// # Errors
/// `InvalidZone` for a zone outside `1..=60`. `OutOfRange` for an easting
/// outside `[0, MAX_EASTING]`, a northing below zero or beyond the
/// hemisphere's limit ([`MAX_NORTH_NORTHING`], [`MAX_SOUTH_NORTHING`]), or
/// any non-finite value.
///
/// # Examples
///
/// ```
/// use utm::{to_lat_lon, AngleUnit, Hemisphere};
///
/// let geo = to_lat_lon(500_000.0, 10_000_000.0, 31, Hemisphere::South, AngleUnit::Degrees)?;
/// assert!(geo.latitude.abs() < 1e-12);
/// assert!((geo.longitude - 3.0).abs() < 1e-12);
/// # Ok::<(), utm::ConversionError>(())
/// ```
pub fn to_lat_lon(
    easting: f64,
    northing: f64,
    zone: i32,
    hemisphere: impl Into<Hemisphere>,
    unit: AngleUnit,
) -> Result<GeodeticCoordinate> {
    let zone = zone::validate_zone(zone)?;
    let hemisphere = hemisphere.into();
    let max_northing = match hemisphere {
        Hemisphere::North => MAX_NORTH_NORTHING,
        Hemisphere::South => MAX_SOUTH_NORTHING,
    };
    check_range(Field::Easting, easting, 0.0, MAX_EASTING)?;
    check_range(Field::Northing, northing, 0.0, max_northing)?;

    let x = easting - FALSE_EASTING;
    let y = northing - hemisphere.false_northing();
    let (lat, lon) = utm_projection().inverse(zone::central_meridian(zone), x, y);
    if !lat.is_finite() || !lon.is_finite() {
        return Err(ConversionError::OutOfRange {
            field: Field::Easting,
            value: easting,
            bound: Bound::Finite,
        });
    }

    Ok(GeodeticCoordinate::new(unit.from_degrees(lat), unit.from_degrees(lon), unit))
}

/// Meridian convergence and point scale factor in the automatically
/// selected zone
///
/// Convergence is in radians, positive when grid north lies east of true
/// north (points east of the central meridian in the northern hemisphere).
/// Libraries that define convergence as the angle from grid north to true
/// north report the opposite sign; negate it when porting from one.
///
/// # Errors
/// As [`to_utm`].
pub fn grid_factors(latitude: f64, longitude: f64, unit: AngleUnit) -> Result<GridFactors> {
    let (lat, lon) = validate_geodetic(latitude, longitude, unit)?;
    Ok(factors(lat, lon, zone::zone_number(lat, lon)))
}

/// Meridian convergence and point scale factor in a caller-chosen zone
///
/// Sign convention as for [`grid_factors`].
///
/// # Errors
/// As [`to_utm_in_zone`].
pub fn grid_factors_in_zone(latitude: f64, longitude: f64, unit: AngleUnit, zone: i32) -> Result<GridFactors> {
    let zone = zone::validate_zone(zone)?;
    let (lat, lon) = validate_geodetic(latitude, longitude, unit)?;
    Ok(factors(lat, lon, zone))
}

impl GeodeticCoordinate {
    /// Converts this point to UTM in the automatically selected zone
    pub fn to_utm(&self) -> Result<UtmCoordinate> {
        to_utm(self.latitude, self.longitude, self.unit)
    }
}

impl UtmCoordinate {
    /// Converts this grid coordinate back to latitude/longitude in `unit`
    pub fn to_lat_lon(&self, unit: AngleUnit) -> Result<GeodeticCoordinate> {
        to_lat_lon(self.easting, self.northing, i32::from(self.zone), self.hemisphere, unit)
    }
}

/// Validates a geodetic position and returns it in degrees
///
/// Both components are snapped to whole degrees first, so a radian input
/// that lands an ulp off a zone boundary or latitude limit behaves like
/// the exact degree value. A latitude within the tolerance of zero is on
/// the equator and therefore north.
fn validate_geodetic(latitude: f64, longitude: f64, unit: AngleUnit) -> Result<(f64, f64)> {
    let lat = snap_to_whole_degree(unit.to_degrees(latitude));
    let lon = snap_to_whole_degree(unit.to_degrees(longitude));
    check_range(Field::Latitude, lat, MIN_LATITUDE, MAX_LATITUDE)?;
    check_range(Field::Longitude, lon, -180.0, 180.0)?;
    Ok((lat, lon))
}

fn snap_to_whole_degree(degrees: f64) -> f64 {
    let whole = libm::round(degrees);
    if libm::fabs(degrees - whole) < SNAP_TOLERANCE {
        whole
    } else {
        degrees
    }
}

fn project(lat: f64, lon: f64, zone: u8) -> UtmCoordinate {
    let hemisphere = Hemisphere::from_latitude(lat);
    let p = utm_projection().forward(zone::central_meridian(zone), lat, lon);
    UtmCoordinate::new(
        p.x + FALSE_EASTING,
        p.y + hemisphere.false_northing(),
        zone,
        hemisphere,
    )
}

fn factors(lat: f64, lon: f64, zone: u8) -> GridFactors {
    let p = utm_projection().forward(zone::central_meridian(zone), lat, lon);
    GridFactors {
        convergence: p.gamma.to_radians(),
        scale: p.k,
    }
}
