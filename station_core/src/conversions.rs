//! `From` implementations bridging `station_config` types to `station_core` types.

use crate::model::Thresholds;

impl From<&station_config::ThresholdsCfg> for Thresholds {
    fn from(c: &station_config::ThresholdsCfg) -> Self {
        Self {
            min_pressure: c.min_pressure,
            max_pressure: c.max_pressure,
            max_flow: c.max_flow,
            min_water_level: c.min_water_level,
        }
    }
}

impl From<Thresholds> for station_config::ThresholdsCfg {
    fn from(t: Thresholds) -> Self {
        Self {
            min_pressure: t.min_pressure,
            max_pressure: t.max_pressure,
            max_flow: t.max_flow,
            min_water_level: t.min_water_level,
        }
    }
}
