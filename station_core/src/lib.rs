#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core supervisory control for a pumping station (transport-agnostic).
//!
//! ## Architecture
//!
//! - **Model**: sensor samples, thresholds, station state (`model` module)
//! - **Control**: pure reconciliation of a sample into the next state (`control`)
//! - **Event log**: append-only record of human-readable events (`event_log`)
//! - **Engine**: the single lock every reader and writer goes through (`engine`)
//! - **Commands**: parsing of operator keywords and threshold edits (`command`)
//!
//! Gateways and consoles hold an `Arc<ControlEngine>` and never touch the
//! state directly.

pub mod builder;
pub mod command;
pub mod control;
pub mod conversions;
pub mod engine;
pub mod error;
pub mod event_log;
pub mod events;
pub mod model;

pub use builder::EngineBuilder;
pub use command::{PumpCommand, ValveCommand, parse_thresholds};
pub use control::{Reconciliation, reconcile};
pub use engine::ControlEngine;
pub use error::{BuildError, ParseError, StationError};
pub use event_log::{EventLog, LogEntry};
pub use events::StationEvent;
pub use model::{SensorSample, StationSnapshot, StationState, Thresholds};
