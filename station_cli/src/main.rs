mod cli;
mod console;
mod error_fmt;
mod logging;
mod run;

use clap::Parser;
use std::path::{Path, PathBuf};

use cli::{Cli, Commands, DEFAULT_CONFIG, JSON_MODE};
use error_fmt::{exit_code_for_error, format_error_json, humanize};
use run::RunParams;
use station_config::Config;

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(err) = real_main(cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("{}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

fn real_main(cli: Cli) -> eyre::Result<()> {
    color_eyre::install()?;

    let (cfg, source) = load_config(&cli.config)?;
    logging::init_tracing(cli.json, cli.log_level.as_deref(), &cfg.logging)?;
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "config loaded"),
        None => tracing::info!("no config file at {DEFAULT_CONFIG}; using built-in defaults"),
    }

    match cli.cmd {
        Commands::Run {
            bind,
            port,
            headless,
        } => {
            let params = RunParams {
                bind,
                port,
                headless,
            };
            let reason = run::run_station(&cfg, &params)?;
            tracing::debug!(?reason, "station stopped");
            Ok(())
        }
        Commands::CheckConfig => {
            print_config(&cfg, source.as_deref(), cli.json);
            Ok(())
        }
    }
}

/// A missing file is only acceptable at the default path.
fn load_config(path: &Path) -> eyre::Result<(Config, Option<PathBuf>)> {
    if path == Path::new(DEFAULT_CONFIG) && !path.exists() {
        return Ok((Config::default(), None));
    }
    let cfg = Config::load(path)?;
    Ok((cfg, Some(path.to_path_buf())))
}

fn print_config(cfg: &Config, source: Option<&Path>, json: bool) {
    let t = &cfg.thresholds;
    let source = source.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    if json {
        let v = serde_json::json!({
            "source": source,
            "server": { "bind": cfg.server.bind, "port": cfg.server.port },
            "thresholds": {
                "min_pressure": t.min_pressure,
                "max_pressure": t.max_pressure,
                "max_flow": t.max_flow,
                "min_water_level": t.min_water_level,
            },
            "control": {
                "monitoring_active": cfg.control.monitoring_active,
                "manual_mode": cfg.control.manual_mode,
            },
            "event_log": { "capacity": cfg.event_log.capacity },
            "inverted_pressure_band": cfg.inverted_pressure_band(),
        });
        println!("{v}");
        return;
    }
    println!("config: {source}");
    println!("server: {}:{}", cfg.server.bind, cfg.server.port);
    println!(
        "thresholds: min_pressure={} max_pressure={} max_flow={} min_water_level={}",
        t.min_pressure, t.max_pressure, t.max_flow, t.min_water_level
    );
    println!(
        "control: monitoring_active={} manual_mode={}",
        cfg.control.monitoring_active, cfg.control.manual_mode
    );
    match cfg.event_log.capacity {
        Some(n) => println!("event_log: capacity={n}"),
        None => println!("event_log: unbounded"),
    }
    println!(
        "logging: level={} file={} rotation={}",
        cfg.logging.level.as_deref().unwrap_or("info"),
        cfg.logging.file.as_deref().unwrap_or("-"),
        cfg.logging.rotation.as_deref().unwrap_or("never")
    );
    if cfg.inverted_pressure_band() {
        println!("warning: min_pressure >= max_pressure leaves no hysteresis band");
    }
}
