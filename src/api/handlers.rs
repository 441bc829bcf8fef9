use axum::{
    extract::{Multipart, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::io::Cursor;
use std::time::Instant;

use super::models::*;
use crate::batch::convert_csv;
use crate::convert::{grid_factors_in_zone, to_lat_lon, to_utm};
use crate::error::ConversionError;
use crate::types::AngleUnit;
use crate::zone::latitude_band;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: ConversionError) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            field: error.field(),
        }),
    )
}

pub async fn get_to_utm(Query(req): Query<ToUtmRequest>) -> Result<Json<UtmResponse>, ApiError> {
    let start = Instant::now();

    let utm = to_utm(req.latitude, req.longitude, req.unit).map_err(|e| {
        tracing::debug!(latitude = req.latitude, longitude = req.longitude, error = %e, "rejected to-utm request");
        bad_request(e)
    })?;
    let factors = grid_factors_in_zone(req.latitude, req.longitude, req.unit, i32::from(utm.zone)).map_err(bad_request)?;

    Ok(Json(UtmResponse {
        zone: utm.zone,
        hemisphere: utm.hemisphere,
        band: latitude_band(req.unit.to_degrees(req.latitude)),
        easting: utm.easting,
        northing: utm.northing,
        convergence: factors.convergence,
        scale: factors.scale,
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }))
}

pub async fn get_to_lat_lon(Query(req): Query<ToLatLonRequest>) -> Result<Json<GeodeticResponse>, ApiError> {
    let start = Instant::now();

    let geo = to_lat_lon(req.easting, req.northing, req.zone, req.hemisphere, req.unit).map_err(|e| {
        tracing::debug!(zone = req.zone, error = %e, "rejected to-latlon request");
        bad_request(e)
    })?;

    Ok(Json(GeodeticResponse {
        latitude: geo.latitude,
        longitude: geo.longitude,
        unit: geo.unit,
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }))
}

/// Converts an uploaded CSV (`csv` field, optional `unit` field) and returns
/// the converted CSV. Counts are reported in `x-total-points`,
/// `x-converted` and `x-failed` headers.
pub async fn upload_csv(mut multipart: Multipart) -> Result<Response, ApiError> {
    let start = Instant::now();

    let mut csv_data: Option<Vec<u8>> = None;
    let mut unit = AngleUnit::Degrees;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(format!("Invalid multipart body: {}", e)))))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "csv" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(format!("Failed to read CSV: {}", e)))))?;
                csv_data = Some(bytes.to_vec());
            }
            "unit" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(format!("Failed to read unit: {}", e)))))?;
                unit = match text.trim() {
                    "radians" => AngleUnit::Radians,
                    "degrees" | "" => AngleUnit::Degrees,
                    other => {
                        return Err((
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(format!("Unknown unit: {}", other))),
                        ))
                    }
                };
            }
            _ => {}
        }
    }

    let csv_data = csv_data.ok_or_else(|| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new("Missing CSV file"))))?;

    let mut output = Vec::with_capacity(csv_data.len() * 2);
    let summary = convert_csv(Cursor::new(csv_data), &mut output, unit).map_err(|e| {
        tracing::warn!(error = %e, "csv upload failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!("Failed to process CSV: {}", e))),
        )
    })?;

    let elapsed = start.elapsed();
    tracing::info!(
        total = summary.total,
        converted = summary.converted,
        failed = summary.failed,
        execution_time_ms = elapsed.as_secs_f64() * 1000.0,
        "csv upload converted"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"utm_results.csv\"".to_string(),
            ),
            (header::HeaderName::from_static("x-total-points"), summary.total.to_string()),
            (header::HeaderName::from_static("x-converted"), summary.converted.to_string()),
            (header::HeaderName::from_static("x-failed"), summary.failed.to_string()),
        ],
        output,
    )
        .into_response())
}
