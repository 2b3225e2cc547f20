//! Station data model: sensor input, thresholds, live state and snapshots.

/// One sensor push. Not retained after it has been reconciled into the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    pub pressure: f64,
    pub flow: f64,
    pub water_level: i32,
}

impl SensorSample {
    pub fn new(pressure: f64, flow: f64, water_level: i32) -> Self {
        Self {
            pressure,
            flow,
            water_level,
        }
    }
}

/// Automatic-control thresholds.
///
/// Any combination is accepted, including `min_pressure >= max_pressure`.
/// With a degenerate band the pump only reacts to strictly lower or strictly
/// higher readings; a reading equal to both thresholds changes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Pump switches on below this pressure.
    pub min_pressure: f64,
    /// Pump switches off above this pressure.
    pub max_pressure: f64,
    /// Valve closes above this flow and reopens at or below it.
    pub max_flow: f64,
    /// Low-water alert below this level.
    pub min_water_level: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_pressure: 3.0,
            max_pressure: 8.0,
            max_flow: 80.0,
            min_water_level: 10,
        }
    }
}

/// The single long-lived mutable entity, owned by `ControlEngine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationState {
    pub pressure: f64,
    pub flow: f64,
    pub water_level: i32,
    pub pump_active: bool,
    pub valve_open: bool,
    pub thresholds: Thresholds,
    pub monitoring_active: bool,
    pub manual_mode: bool,
}

impl Default for StationState {
    fn default() -> Self {
        Self {
            pressure: 0.0,
            flow: 0.0,
            water_level: 0,
            pump_active: false,
            valve_open: true,
            thresholds: Thresholds::default(),
            monitoring_active: true,
            manual_mode: false,
        }
    }
}

impl StationState {
    /// Automatic control runs only while monitoring and not in manual mode.
    #[inline]
    pub fn auto_control_enabled(&self) -> bool {
        self.monitoring_active && !self.manual_mode
    }
}

/// Point-in-time copy of `StationState`, detached from the engine lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSnapshot {
    pub pressure: f64,
    pub flow: f64,
    pub water_level: i32,
    pub pump_active: bool,
    pub valve_open: bool,
    pub manual_mode: bool,
    pub monitoring_active: bool,
    pub thresholds: Thresholds,
}

impl From<&StationState> for StationSnapshot {
    fn from(s: &StationState) -> Self {
        Self {
            pressure: s.pressure,
            flow: s.flow,
            water_level: s.water_level,
            pump_active: s.pump_active,
            valve_open: s.valve_open,
            manual_mode: s.manual_mode,
            monitoring_active: s.monitoring_active,
            thresholds: s.thresholds,
        }
    }
}
