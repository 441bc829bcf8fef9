//! Error types for utm

use core::fmt;

/// Result type for conversion operations
pub type Result<T> = core::result::Result<T, ConversionError>;

/// Coordinate component that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Latitude,
    Longitude,
    Easting,
    Northing,
}

impl Field {
    /// Returns the lowercase name of this field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Easting => "easting",
            Field::Northing => "northing",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The bound a rejected value violated
///
/// Angular bounds are always expressed in degrees, linear bounds in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Bound {
    /// Value was below the inclusive minimum
    Min(f64),
    /// Value was above the inclusive maximum
    Max(f64),
    /// Value was NaN or infinite
    Finite,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min(min) => write!(f, "minimum {}", min),
            Bound::Max(max) => write!(f, "maximum {}", max),
            Bound::Finite => f.write_str("finite value"),
        }
    }
}

/// Error types that can occur during a conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// A coordinate component is outside its valid domain
    OutOfRange {
        field: Field,
        value: f64,
        bound: Bound,
    },

    /// UTM zone number outside 1..=60
    InvalidZone { zone: i32 },
}

impl ConversionError {
    /// Returns the offending field for range errors
    pub fn field(&self) -> Option<Field> {
        match self {
            ConversionError::OutOfRange { field, .. } => Some(*field),
            ConversionError::InvalidZone { .. } => None,
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::OutOfRange { field, value, bound } => {
                write!(f, "{} {} out of range: expected {}", field, value, bound)
            }
            ConversionError::InvalidZone { zone } => {
                write!(f, "Invalid UTM zone: {} (expected 1-60)", zone)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// Checks that `value` is finite and lies in `[min, max]`
pub(crate) fn check_range(field: Field, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ConversionError::OutOfRange {
            field,
            value,
            bound: Bound::Finite,
        });
    }
    if value < min {
        return Err(ConversionError::OutOfRange {
            field,
            value,
            bound: Bound::Min(min),
        });
    }
    if value > max {
        return Err(ConversionError::OutOfRange {
            field,
            value,
            bound: Bound::Max(max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ConversionError::OutOfRange {
            field: Field::Latitude,
            value: 85.0,
            bound: Bound::Max(84.0),
        };
        assert_eq!(err.to_string(), "latitude 85 out of range: expected maximum 84");
    }

    #[test]
    fn test_invalid_zone_display() {
        let err = ConversionError::InvalidZone { zone: 61 };
        assert!(err.to_string().contains("61"));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(Field::Easting, 0.0, 0.0, f64::INFINITY).is_ok());
        assert_eq!(
            check_range(Field::Easting, -1.0, 0.0, f64::INFINITY),
            Err(ConversionError::OutOfRange {
                field: Field::Easting,
                value: -1.0,
                bound: Bound::Min(0.0),
            })
        );
    }

    #[test]
    fn test_check_range_rejects_nan() {
        let err = check_range(Field::Northing, f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::OutOfRange { field: Field::Northing, bound: Bound::Finite, .. }
        ));
    }
}
