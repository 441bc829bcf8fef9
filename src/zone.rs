//! UTM zone selection
//!
//! Zones are 6° wide, numbered 1..=60 eastward from 180°W. A longitude
//! exactly on a zone boundary belongs to the zone to its east, except 180°
//! itself which stays in zone 60. The Norway and Svalbard exceptions of the
//! UTM standard are applied.

use crate::error::{ConversionError, Result};

/// Southernmost latitude covered by UTM (degrees)
pub const MIN_LATITUDE: f64 = -80.0;
/// Northernmost latitude covered by UTM (degrees)
pub const MAX_LATITUDE: f64 = 84.0;

/// Number of UTM zones
pub const ZONE_COUNT: u8 = 60;

const BAND_LETTERS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// Zone number for a position in degrees
///
/// Expects a validated position: latitude in `[-80, 84]`, longitude in
/// `[-180, 180]`.
pub fn zone_number(latitude: f64, longitude: f64) -> u8 {
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    if (72.0..=MAX_LATITUDE).contains(&latitude) && (0.0..42.0).contains(&longitude) {
        return if longitude < 9.0 {
            31
        } else if longitude < 21.0 {
            33
        } else if longitude < 33.0 {
            35
        } else {
            37
        };
    }

    standard_zone(longitude)
}

/// Zone number from longitude alone, without the regional exceptions
pub fn standard_zone(longitude: f64) -> u8 {
    let zone = libm::floor((longitude + 180.0) / 6.0) as i32 + 1;
    zone.clamp(1, i32::from(ZONE_COUNT)) as u8
}

/// Central meridian of a zone (degrees)
pub fn central_meridian(zone: u8) -> f64 {
    f64::from(zone) * 6.0 - 183.0
}

/// Checks a caller-supplied zone number
pub fn validate_zone(zone: i32) -> Result<u8> {
    if (1..=i32::from(ZONE_COUNT)).contains(&zone) {
        Ok(zone as u8)
    } else {
        Err(ConversionError::InvalidZone { zone })
    }
}

/// MGRS latitude band letter (`C`..=`X`, skipping `I` and `O`)
///
/// Band X spans 72°..84°. Returns `None` outside the UTM latitude range.
pub fn latitude_band(latitude: f64) -> Option<char> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return None;
    }
    let index = (libm::floor((latitude - MIN_LATITUDE) / 8.0) as usize).min(BAND_LETTERS.len() - 1);
    Some(char::from(BAND_LETTERS[index]))
}
