//! Typed station events. `Display` renders the exact event-log line.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StationEvent {
    SampleReceived {
        pressure: f64,
        flow: f64,
        water_level: i32,
    },
    PumpActivated {
        pressure: f64,
    },
    PumpDeactivated {
        pressure: f64,
    },
    ValveClosed {
        flow: f64,
    },
    ValveOpened {
        flow: f64,
    },
    /// Level-triggered: emitted for every qualifying sample.
    LowWaterAlert {
        water_level: i32,
    },
}

impl StationEvent {
    /// Whether the event reports an actuator transition (edge-triggered).
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            Self::PumpActivated { .. }
                | Self::PumpDeactivated { .. }
                | Self::ValveClosed { .. }
                | Self::ValveOpened { .. }
        )
    }

    /// Emit this event through `tracing` at a level matching its severity.
    pub(crate) fn trace(&self) {
        if self.is_transition() {
            tracing::info!(event = %self, "actuator transition");
            return;
        }
        match self {
            Self::SampleReceived {
                pressure,
                flow,
                water_level,
            } => tracing::debug!(pressure, flow, water_level, "sample received"),
            Self::LowWaterAlert { water_level } => {
                tracing::warn!(water_level, "water level critically low");
            }
            _ => {}
        }
    }
}

impl fmt::Display for StationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleReceived {
                pressure,
                flow,
                water_level,
            } => write!(
                f,
                "Received data: Pressure={pressure}, Flow={flow}, WaterLevel={water_level}"
            ),
            Self::PumpActivated { pressure } => {
                write!(f, "Pump activated due to low pressure. Pressure={pressure}")
            }
            Self::PumpDeactivated { pressure } => {
                write!(f, "Pump deactivated due to high pressure. Pressure={pressure}")
            }
            Self::ValveClosed { flow } => write!(f, "Valve closed due to high flow. Flow={flow}"),
            Self::ValveOpened { flow } => write!(f, "Valve opened for normal flow. Flow={flow}"),
            Self::LowWaterAlert { water_level } => {
                write!(f, "ALERT: Water level critically low! WaterLevel={water_level}")
            }
        }
    }
}
