//! Concurrency-safe control engine.
//!
//! `ControlEngine` owns the station state and the event log behind a single
//! mutex. Every public operation takes the lock once, does bounded in-memory
//! work and releases it, so readers never observe a sample half-applied.
//! Share it between the gateway and the console as `Arc<ControlEngine>`.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::builder::EngineBuilder;
use crate::control::reconcile;
use crate::event_log::{EventLog, LogEntry};
use crate::model::{SensorSample, StationSnapshot, StationState, Thresholds};

#[derive(Debug)]
struct Station {
    state: StationState,
    log: EventLog,
}

#[derive(Debug)]
pub struct ControlEngine {
    inner: Mutex<Station>,
}

impl Default for ControlEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlEngine {
    /// Default thresholds, monitoring on, automatic mode, unbounded log.
    pub fn new() -> Self {
        Self::with_parts(StationState::default(), None)
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub(crate) fn with_parts(state: StationState, log_capacity: Option<NonZeroUsize>) -> Self {
        let log = log_capacity.map_or_else(EventLog::new, EventLog::with_capacity);
        Self {
            inner: Mutex::new(Station { state, log }),
        }
    }

    // Each mutation is a single assignment of plain data, so a panic elsewhere
    // cannot leave the station half-written; recover instead of propagating.
    fn lock(&self) -> MutexGuard<'_, Station> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a sample and, when enabled, run automatic control.
    pub fn ingest(&self, sample: SensorSample) {
        let mut st = self.lock();
        let r = reconcile(&st.state, sample);
        st.state = r.next;
        for event in &r.events {
            st.log.push(event.to_string());
        }
        drop(st);
        for event in &r.events {
            event.trace();
        }
    }

    pub fn set_manual_mode(&self, manual: bool) {
        self.lock().state.manual_mode = manual;
        tracing::debug!(manual, "manual mode set");
    }

    pub fn set_monitoring(&self, active: bool) {
        self.lock().state.monitoring_active = active;
        tracing::debug!(active, "monitoring set");
    }

    /// Flip manual mode and return the new value.
    pub fn toggle_manual_mode(&self) -> bool {
        let manual = {
            let mut st = self.lock();
            st.state.manual_mode = !st.state.manual_mode;
            st.state.manual_mode
        };
        tracing::debug!(manual, "manual mode toggled");
        manual
    }

    /// Flip monitoring and return the new value.
    pub fn toggle_monitoring(&self) -> bool {
        let active = {
            let mut st = self.lock();
            st.state.monitoring_active = !st.state.monitoring_active;
            st.state.monitoring_active
        };
        tracing::debug!(active, "monitoring toggled");
        active
    }

    /// Overwrite all thresholds. Inconsistent values are accepted as-is.
    pub fn set_thresholds(&self, thresholds: Thresholds) {
        self.lock().state.thresholds = thresholds;
        tracing::debug!(
            min_pressure = thresholds.min_pressure,
            max_pressure = thresholds.max_pressure,
            max_flow = thresholds.max_flow,
            min_water_level = thresholds.min_water_level,
            "thresholds updated"
        );
    }

    /// Direct pump override. Not gated on manual mode; callers decide.
    pub fn set_pump(&self, active: bool) {
        self.lock().state.pump_active = active;
        tracing::debug!(active, "pump set");
    }

    /// Direct valve override. Not gated on manual mode; callers decide.
    pub fn set_valve(&self, open: bool) {
        self.lock().state.valve_open = open;
        tracing::debug!(open, "valve set");
    }

    pub fn snapshot(&self) -> StationSnapshot {
        StationSnapshot::from(&self.lock().state)
    }

    pub fn thresholds(&self) -> Thresholds {
        self.lock().state.thresholds
    }

    /// Full ordered log as of this call.
    pub fn recent_log(&self) -> Vec<String> {
        self.lock().log.messages()
    }

    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.lock().log.entries()
    }

    pub fn log_len(&self) -> usize {
        self.lock().log.len()
    }

    pub fn log_capacity(&self) -> Option<NonZeroUsize> {
        self.lock().log.capacity()
    }
}
