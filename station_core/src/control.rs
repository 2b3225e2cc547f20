//! Control decision function.
//!
//! `reconcile` maps (current state, new sample) to (next state, events) with
//! no side effects. Pump and valve are two-state Moore machines:
//!
//! - Pump: Off -> On when `pressure < min_pressure`; On -> Off when
//!   `pressure > max_pressure`. Readings inside the band hold the state.
//! - Valve: Open -> Closed when `flow > max_flow`; Closed -> Open as soon
//!   as `flow <= max_flow`. There is no band between close and reopen.
//!
//! The low-water alert is level-triggered and repeats on every sample below
//! `min_water_level`.

use crate::events::StationEvent;
use crate::model::{SensorSample, StationState};

/// Outcome of reconciling one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub next: StationState,
    /// In emission order: received, pump, valve, alert.
    pub events: Vec<StationEvent>,
}

pub fn reconcile(state: &StationState, sample: SensorSample) -> Reconciliation {
    let mut next = *state;
    next.pressure = sample.pressure;
    next.flow = sample.flow;
    next.water_level = sample.water_level;

    let mut events = Vec::with_capacity(4);
    events.push(StationEvent::SampleReceived {
        pressure: sample.pressure,
        flow: sample.flow,
        water_level: sample.water_level,
    });

    if next.auto_control_enabled() {
        auto_control(&mut next, &mut events);
    }
    Reconciliation { next, events }
}

fn auto_control(s: &mut StationState, events: &mut Vec<StationEvent>) {
    let t = s.thresholds;

    if s.pressure < t.min_pressure {
        if !s.pump_active {
            s.pump_active = true;
            events.push(StationEvent::PumpActivated {
                pressure: s.pressure,
            });
        }
    } else if s.pressure > t.max_pressure && s.pump_active {
        s.pump_active = false;
        events.push(StationEvent::PumpDeactivated {
            pressure: s.pressure,
        });
    }

    if s.flow > t.max_flow {
        if s.valve_open {
            s.valve_open = false;
            events.push(StationEvent::ValveClosed { flow: s.flow });
        }
    } else if !s.valve_open {
        // NaN flow lands here too: the close comparison is false.
        s.valve_open = true;
        events.push(StationEvent::ValveOpened { flow: s.flow });
    }

    if s.water_level < t.min_water_level {
        events.push(StationEvent::LowWaterAlert {
            water_level: s.water_level,
        });
    }
}
