use serde::{Deserialize, Serialize};

use crate::error::Field;
use crate::types::{AngleUnit, Hemisphere};

#[derive(Debug, Serialize, Deserialize)]
pub struct ToUtmRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub unit: AngleUnit,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UtmResponse {
    pub zone: u8,
    pub hemisphere: Hemisphere,
    /// MGRS latitude band letter
    pub band: Option<char>,
    pub easting: f64,
    pub northing: f64,
    /// Meridian convergence (radians)
    pub convergence: f64,
    pub scale: f64,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToLatLonRequest {
    pub easting: f64,
    pub northing: f64,
    pub zone: i32,
    #[serde(default = "default_hemisphere")]
    pub hemisphere: Hemisphere,
    #[serde(default)]
    pub unit: AngleUnit,
}

fn default_hemisphere() -> Hemisphere {
    Hemisphere::North
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeodeticResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub unit: AngleUnit,
    pub execution_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
        }
    }
}
