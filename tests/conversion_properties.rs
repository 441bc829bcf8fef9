use proptest::prelude::*;
use utm::{
    to_lat_lon, to_utm, zone_number, AngleUnit, Bound, ConversionError, Field, Hemisphere, MAX_EASTING,
    MAX_NORTH_NORTHING, MAX_SOUTH_NORTHING,
};

proptest! {
    #[test]
    fn round_trip_recovers_position(lat in -80.0f64..=84.0, lon in -180.0f64..=180.0) {
        let utm = to_utm(lat, lon, AngleUnit::Degrees).unwrap();
        let geo = to_lat_lon(utm.easting, utm.northing, i32::from(utm.zone), utm.hemisphere, AngleUnit::Degrees).unwrap();
        prop_assert!((geo.latitude - lat).abs() < 1e-5, "lat {} -> {}", lat, geo.latitude);
        prop_assert!((geo.longitude - lon).abs() < 1e-5, "lon {} -> {}", lon, geo.longitude);
    }

    #[test]
    fn round_trip_is_far_tighter_than_required(lat in -80.0f64..=84.0, lon in -180.0f64..=180.0) {
        let utm = to_utm(lat, lon, AngleUnit::Degrees).unwrap();
        let geo = utm.to_lat_lon(AngleUnit::Degrees).unwrap();
        prop_assert!((geo.latitude - lat).abs() < 1e-9);
        prop_assert!((geo.longitude - lon).abs() < 1e-9);
    }

    #[test]
    fn radians_and_degrees_agree(lat in -79.9f64..83.9, lon in -179.9f64..179.9) {
        let deg = to_utm(lat, lon, AngleUnit::Degrees).unwrap();
        let rad = to_utm(lat.to_radians(), lon.to_radians(), AngleUnit::Radians).unwrap();
        prop_assert_eq!(deg.zone, rad.zone);
        prop_assert_eq!(deg.hemisphere, rad.hemisphere);
        prop_assert!((deg.easting - rad.easting).abs() < 1e-6);
        prop_assert!((deg.northing - rad.northing).abs() < 1e-6);
    }

    #[test]
    fn output_stays_in_grid(lat in -80.0f64..=84.0, lon in -180.0f64..=180.0) {
        let utm = to_utm(lat, lon, AngleUnit::Degrees).unwrap();
        prop_assert!((1..=60).contains(&utm.zone));
        prop_assert!(utm.easting > 100_000.0 && utm.easting < 900_000.0, "easting {}", utm.easting);
        prop_assert!(utm.northing >= 0.0 && utm.northing <= 10_000_000.0, "northing {}", utm.northing);
        prop_assert_eq!(utm.hemisphere, Hemisphere::from_latitude(lat));
    }

    #[test]
    fn latitudes_beyond_84_are_rejected(lat in 84.000_001f64..90.0, lon in -180.0f64..=180.0) {
        let err = to_utm(lat, lon, AngleUnit::Degrees).unwrap_err();
        prop_assert_eq!(err.field(), Some(Field::Latitude));
    }

    #[test]
    fn inverse_stays_in_its_hemisphere(
        easting in 0.0f64..=MAX_EASTING,
        north_northing in 0.0f64..=MAX_NORTH_NORTHING,
        south_northing in 0.0f64..=MAX_SOUTH_NORTHING,
        zone in 1i32..=60,
    ) {
        let north = to_lat_lon(easting, north_northing, zone, Hemisphere::North, AngleUnit::Degrees).unwrap();
        prop_assert!(north.latitude >= 0.0 && north.latitude <= 90.0, "north {}", north.latitude);
        prop_assert!(north.longitude.is_finite() && north.longitude.abs() <= 180.0);

        let south = to_lat_lon(easting, south_northing, zone, Hemisphere::South, AngleUnit::Degrees).unwrap();
        prop_assert!(south.latitude <= 0.0 && south.latitude >= -90.0, "south {}", south.latitude);
        prop_assert!(south.longitude.is_finite() && south.longitude.abs() <= 180.0);
    }

    #[test]
    fn inverse_rejects_grid_values_beyond_limits(
        easting in 1_000_000.001f64..1e300,
        northing in 10_000_000.001f64..1e300,
    ) {
        let err = to_lat_lon(easting, 0.0, 31, Hemisphere::North, AngleUnit::Degrees).unwrap_err();
        prop_assert_eq!(err.field(), Some(Field::Easting));

        for hemisphere in [Hemisphere::North, Hemisphere::South] {
            let err = to_lat_lon(500_000.0, northing, 31, hemisphere, AngleUnit::Degrees).unwrap_err();
            let is_northing_max = matches!(
                err,
                ConversionError::OutOfRange { field: Field::Northing, bound: Bound::Max(_), .. }
            );
            prop_assert!(is_northing_max, "{:?}", err);
        }
    }

    #[test]
    fn zone_matches_longitude_outside_exceptions(lat in -80.0f64..56.0, lon in -180.0f64..180.0) {
        let zone = zone_number(lat, lon);
        let west = f64::from(zone) * 6.0 - 186.0;
        prop_assert!(lon >= west && lon < west + 6.0, "lon {} zone {}", lon, zone);
    }
}

#[test]
fn zone_boundaries_are_deterministic() {
    for zone in 1..60u8 {
        let boundary = f64::from(zone) * 6.0 - 180.0;
        let utm = to_utm(10.0, boundary, AngleUnit::Degrees).unwrap();
        assert_eq!(utm.zone, zone + 1, "boundary {}", boundary);
    }
    assert_eq!(to_utm(10.0, 180.0, AngleUnit::Degrees).unwrap().zone, 60);
    assert_eq!(to_utm(10.0, -180.0, AngleUnit::Degrees).unwrap().zone, 1);
}

#[test]
fn zone_boundaries_agree_in_degrees_and_radians() {
    for lat in [-80.0f64, 0.0, 10.0, 84.0] {
        for step in 0..=60 {
            let lon = -180.0 + 6.0 * f64::from(step);
            let deg = to_utm(lat, lon, AngleUnit::Degrees).unwrap();
            let rad = to_utm(lat.to_radians(), lon.to_radians(), AngleUnit::Radians).unwrap();
            assert_eq!(deg.zone, rad.zone, "lat {} lon {}", lat, lon);
            assert_eq!(deg.hemisphere, rad.hemisphere);
            assert!((deg.easting - rad.easting).abs() < 1e-6, "lat {} lon {}", lat, lon);
        }
    }
}

#[test]
fn boundary_point_is_west_edge_of_its_zone() {
    let utm = to_utm(0.0, 6.0, AngleUnit::Degrees).unwrap();
    assert_eq!(utm.zone, 32);
    assert!((utm.easting - 166_021.443_081).abs() < 1e-5);
}

#[test]
fn equator_in_both_hemispheres() {
    let north = to_lat_lon(400_000.0, 0.0, 17, Hemisphere::North, AngleUnit::Degrees).unwrap();
    let south = to_lat_lon(400_000.0, 10_000_000.0, 17, Hemisphere::South, AngleUnit::Degrees).unwrap();
    assert!(north.latitude.abs() < 1e-12);
    assert!(south.latitude.abs() < 1e-12);
    assert!((north.longitude - south.longitude).abs() < 1e-12);
}
