//! Process orchestration: engine assembly, gateway runtime, console thread
//! and shutdown.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel as xch;
use eyre::WrapErr;
use station_config::Config;
use station_core::{ControlEngine, EngineBuilder};

use crate::console::{Console, ConsoleExit};

/// Why the station is shutting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Console(ConsoleExit),
    ConsoleFailed(io::ErrorKind),
    Signal,
}

#[derive(Debug, Clone, Default)]
pub struct RunParams {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub headless: bool,
}

/// Apply CLI overrides on top of the configured listening address.
pub fn resolve_addr(cfg: &Config, params: &RunParams) -> eyre::Result<SocketAddr> {
    let mut addr = cfg.socket_addr()?;
    if let Some(bind) = &params.bind {
        let ip: IpAddr = bind
            .parse()
            .wrap_err_with(|| format!("invalid configuration: --bind {bind:?} is not an IP address"))?;
        addr.set_ip(ip);
    }
    if let Some(port) = params.port {
        addr.set_port(port);
    }
    Ok(addr)
}

pub fn build_engine(cfg: &Config) -> eyre::Result<Arc<ControlEngine>> {
    let engine = EngineBuilder::from_config(cfg)
        .build()
        .wrap_err("invalid configuration")?;
    Ok(Arc::new(engine))
}

/// Run gateway and console until the operator quits or Ctrl-C arrives.
pub fn run_station(cfg: &Config, params: &RunParams) -> eyre::Result<ShutdownReason> {
    let engine = build_engine(cfg)?;
    let addr = resolve_addr(cfg, params)?;
    if cfg.inverted_pressure_band() {
        tracing::warn!(
            min_pressure = cfg.thresholds.min_pressure,
            max_pressure = cfg.thresholds.max_pressure,
            "pump thresholds leave no hysteresis band"
        );
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("station-gateway")
        .build()
        .wrap_err("failed to start async runtime")?;
    let (local_addr, shutdown) =
        runtime.block_on(station_gateway::start_server(Arc::clone(&engine), addr))?;
    println!("Server is running at http://{local_addr}/");

    let (tx, rx) = xch::bounded::<ShutdownReason>(2);

    let signal_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = signal_tx.try_send(ShutdownReason::Signal);
    })
    .wrap_err("failed to install Ctrl-C handler")?;

    if params.headless {
        tracing::info!("headless mode; press Ctrl-C to stop");
    } else {
        let console_tx = tx.clone();
        let console_engine = Arc::clone(&engine);
        std::thread::Builder::new()
            .name("station-console".into())
            .spawn(move || {
                let stdin = io::stdin();
                let mut console = Console::new(console_engine, stdin.lock(), io::stdout());
                let reason = match console.run() {
                    Ok(exit) => ShutdownReason::Console(exit),
                    Err(e) => {
                        tracing::error!(error = %e, "console I/O failed");
                        ShutdownReason::ConsoleFailed(e.kind())
                    }
                };
                let _ = console_tx.send(reason);
            })
            .wrap_err("failed to spawn console thread")?;
    }
    drop(tx);

    let reason = rx.recv().unwrap_or(ShutdownReason::Signal);
    tracing::info!(?reason, "shutting down");

    shutdown.cancel();
    runtime.shutdown_timeout(Duration::from_secs(2));
    outcome(reason)
}

/// A console that stopped on an I/O error is a failed run.
fn outcome(reason: ShutdownReason) -> eyre::Result<ShutdownReason> {
    match reason {
        ShutdownReason::ConsoleFailed(kind) => {
            Err(eyre::eyre!("console I/O failed: {kind}"))
        }
        other => Ok(other),
    }
}
