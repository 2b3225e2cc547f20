//! Builder for `ControlEngine` and the config-driven constructor.

use std::num::NonZeroUsize;

use crate::engine::ControlEngine;
use crate::error::BuildError;
use crate::model::{StationState, Thresholds};

#[derive(Debug, Clone)]
pub struct EngineBuilder {
    thresholds: Thresholds,
    manual_mode: bool,
    monitoring_active: bool,
    log_capacity: Option<usize>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        let s = StationState::default();
        Self {
            thresholds: s.thresholds,
            manual_mode: s.manual_mode,
            monitoring_active: s.monitoring_active,
            log_capacity: None,
        }
    }
}

impl EngineBuilder {
    /// Seed thresholds, mode flags and log policy from a validated config.
    pub fn from_config(cfg: &station_config::Config) -> Self {
        Self::default()
            .with_thresholds((&cfg.thresholds).into())
            .with_manual_mode(cfg.control.manual_mode)
            .with_monitoring(cfg.control.monitoring_active)
            .with_log_capacity(cfg.event_log.capacity)
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_manual_mode(mut self, manual: bool) -> Self {
        self.manual_mode = manual;
        self
    }

    pub fn with_monitoring(mut self, active: bool) -> Self {
        self.monitoring_active = active;
        self
    }

    /// `None` keeps the full history; `Some(n)` retains the newest `n` entries.
    pub fn with_log_capacity(mut self, capacity: Option<usize>) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn build(self) -> Result<ControlEngine, BuildError> {
        let capacity = match self.log_capacity {
            None => None,
            Some(n) => Some(
                NonZeroUsize::new(n)
                    .ok_or(BuildError::InvalidConfig("event log capacity must be >= 1"))?,
            ),
        };
        let state = StationState {
            thresholds: self.thresholds,
            manual_mode: self.manual_mode,
            monitoring_active: self.monitoring_active,
            ..StationState::default()
        };
        Ok(ControlEngine::with_parts(state, capacity))
    }
}
