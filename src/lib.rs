//! utm - WGS84 geodetic <-> UTM coordinate conversion
//!
//! The conversion engine is a set of pure functions over stack values. It
//! builds without `std` (disable default features) and never allocates or
//! panics on bad input; invalid coordinates come back as a
//! [`ConversionError`].
//!
//! The projection is the ellipsoidal Transverse Mercator evaluated with a
//! sixth-order Krüger series, accurate to well under a millimetre inside a
//! zone. Zones follow the UTM standard including the Norway and Svalbard
//! exceptions.
//!
//! # Examples
//!
//! ## Forward and inverse
//!
//! ```
//! use utm::{to_lat_lon, to_utm, AngleUnit};
//!
//! let utm = to_utm(40.62, -123.45, AngleUnit::Degrees)?;
//! assert_eq!(utm.zone, 10);
//!
//! let geo = to_lat_lon(utm.easting, utm.northing, 10, utm.hemisphere, AngleUnit::Degrees)?;
//! assert!((geo.latitude - 40.62).abs() < 1e-9);
//! assert!((geo.longitude + 123.45).abs() < 1e-9);
//! # Ok::<(), utm::ConversionError>(())
//! ```
//!
//! ## Radians
//!
//! ```
//! use std::f64::consts::PI;
//! use utm::{to_utm, AngleUnit};
//!
//! let utm = to_utm(40.62 * PI / 180.0, -123.45 * PI / 180.0, AngleUnit::Radians)?;
//! assert_eq!(utm.zone, 10);
//! # Ok::<(), utm::ConversionError>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls, [`batch`] conversion with
//!   `rayon` and `csv`
//! - `serde`: `Serialize`/`Deserialize` on the value types
//! - `cli` (default): the `utm` binary
//! - `server` (default): the [`api`] module and the `api-server` binary

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod convert;
pub mod ellipsoid;
pub mod error;
pub mod projection;
pub mod types;
pub mod zone;

#[cfg(feature = "std")]
pub mod batch;

#[cfg(any(feature = "cli", feature = "server"))]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod api;

pub use convert::{
    grid_factors, grid_factors_in_zone, to_lat_lon, to_utm, to_utm_in_zone, FALSE_EASTING,
    MAX_EASTING, MAX_NORTH_NORTHING, MAX_SOUTH_NORTHING, UTM_SCALE_FACTOR,
};
pub use ellipsoid::Ellipsoid;
pub use error::{Bound, ConversionError, Field, Result};
pub use types::{
    degrees_to_radians, radians_to_degrees, AngleUnit, GeodeticCoordinate, GridFactors, Hemisphere,
    UtmCoordinate,
};
pub use zone::{central_meridian, latitude_band, zone_number};
