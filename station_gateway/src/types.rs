//! Wire types for the gateway endpoints.
//!
//! Field names are PascalCase on the wire. Sensor pushes also accept the
//! lowercase / camelCase spellings; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use station_core::{SensorSample, StationSnapshot};

/// Body of `POST /api/sensors`. All three fields are required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensorPayload {
    #[serde(rename = "Pressure", alias = "pressure")]
    pub pressure: f64,
    #[serde(rename = "Flow", alias = "flow")]
    pub flow: f64,
    #[serde(rename = "WaterLevel", alias = "waterLevel", alias = "water_level")]
    pub water_level: i32,
}

impl From<SensorPayload> for SensorSample {
    fn from(p: SensorPayload) -> Self {
        Self::new(p.pressure, p.flow, p.water_level)
    }
}

/// Body of `GET /api/sensors`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SensorStatus {
    pub pressure: f64,
    pub flow: f64,
    pub water_level: i32,
    pub pump_active: bool,
    pub valve_open: bool,
    pub is_manual_mode: bool,
    pub is_monitoring_active: bool,
}

impl From<StationSnapshot> for SensorStatus {
    fn from(s: StationSnapshot) -> Self {
        Self {
            pressure: s.pressure,
            flow: s.flow,
            water_level: s.water_level,
            pump_active: s.pump_active,
            valve_open: s.valve_open,
            is_manual_mode: s.manual_mode,
            is_monitoring_active: s.monitoring_active,
        }
    }
}
