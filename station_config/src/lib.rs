#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the pumping station supervisor.
//!
//! - `Config` and its sections are deserialized from TOML and validated.
//! - Every section is optional; an empty document yields the built-in
//!   defaults (port 8080, thresholds 3.0 / 8.0 / 80.0 / 10, unbounded log).
use eyre::WrapErr;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Log rotation policies accepted by `logging.rotation`.
pub const ROTATIONS: &[&str] = &["never", "daily", "hourly"];

/// Level names accepted by `logging.level`.
pub const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerCfg {
    /// IP address the gateway listens on.
    pub bind: String,
    /// TCP port; 0 asks the OS for a free port.
    pub port: u16,
}

impl Default for ServerCfg {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Initial automatic-control thresholds. Operators can change them at runtime.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ThresholdsCfg {
    /// Pump switches on below this pressure.
    pub min_pressure: f64,
    /// Pump switches off above this pressure.
    pub max_pressure: f64,
    /// Valve closes above this flow and reopens at or below it.
    pub max_flow: f64,
    /// Low-water alert below this level.
    pub min_water_level: i32,
}

impl Default for ThresholdsCfg {
    fn default() -> Self {
        Self {
            min_pressure: 3.0,
            max_pressure: 8.0,
            max_flow: 80.0,
            min_water_level: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct ControlCfg {
    pub monitoring_active: bool,
    pub manual_mode: bool,
}

impl Default for ControlCfg {
    fn default() -> Self {
        Self {
            monitoring_active: true,
            manual_mode: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct EventLogCfg {
    /// Keep at most this many entries, dropping the oldest. Absent = unbounded.
    pub capacity: Option<usize>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerCfg,
    pub thresholds: ThresholdsCfg,
    pub control: ControlCfg,
    pub event_log: EventLogCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let cfg = load_toml(&text)
            .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
        cfg.validate()
            .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
        Ok(cfg)
    }

    /// Validate ranges and enumerations.
    ///
    /// Threshold ordering (`min_pressure < max_pressure`) is deliberately not
    /// checked; use [`Config::inverted_pressure_band`] to detect it.
    pub fn validate(&self) -> eyre::Result<()> {
        // Server
        if self.server.bind.parse::<IpAddr>().is_err() {
            eyre::bail!(
                "server.bind must be an IP address, got {:?}",
                self.server.bind
            );
        }

        // Thresholds
        let t = &self.thresholds;
        if !t.min_pressure.is_finite() {
            eyre::bail!("thresholds.min_pressure must be finite");
        }
        if !t.max_pressure.is_finite() {
            eyre::bail!("thresholds.max_pressure must be finite");
        }
        if !t.max_flow.is_finite() {
            eyre::bail!("thresholds.max_flow must be finite");
        }

        // Event log
        if self.event_log.capacity == Some(0) {
            eyre::bail!("event_log.capacity must be >= 1 (omit it for an unbounded log)");
        }

        // Logging
        if let Some(rot) = &self.logging.rotation {
            if !ROTATIONS.contains(&rot.as_str()) {
                eyre::bail!("logging.rotation must be one of never|daily|hourly, got {rot:?}");
            }
        }
        if let Some(level) = &self.logging.level {
            if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                eyre::bail!(
                    "logging.level must be one of error|warn|info|debug|trace, got {level:?}"
                );
            }
        }
        Ok(())
    }

    /// True when the pump thresholds leave no hysteresis band.
    pub fn inverted_pressure_band(&self) -> bool {
        self.thresholds.min_pressure >= self.thresholds.max_pressure
    }

    /// Listening address of the gateway. Call after `validate`.
    pub fn socket_addr(&self) -> eyre::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .bind
            .parse()
            .wrap_err_with(|| format!("server.bind is not an IP address: {}", self.server.bind))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = load_toml("").expect("parse");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.thresholds, ThresholdsCfg::default());
        assert!(cfg.control.monitoring_active);
        assert!(!cfg.control.manual_mode);
        assert!(cfg.event_log.capacity.is_none());
        cfg.validate().expect("defaults are valid");
    }

    #[test]
    fn socket_addr_combines_bind_and_port() {
        let cfg = load_toml("[server]\nbind = \"0.0.0.0\"\nport = 9000\n").expect("parse");
        let addr = cfg.socket_addr().expect("addr");
        assert_eq!(addr.to_string(), "0.0.0.0:9000");
    }
}
