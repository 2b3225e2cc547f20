//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr (pretty or JSON lines) and optionally to a
//! rolling JSON file. Stdout belongs to the operator console.

use std::path::Path;

use eyre::WrapErr;
use station_config::{LEVELS, Logging};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::FILE_GUARD;

/// Filter precedence: `RUST_LOG`, then `--log-level`, then `logging.level`, then `info`.
pub fn init_tracing(json: bool, cli_level: Option<&str>, cfg: &Logging) -> eyre::Result<()> {
    let level = resolve_level(cli_level, cfg.level.as_deref())?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&level)
            .wrap_err_with(|| format!("invalid log level {level:?}"))?,
    };

    let pretty = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });
    let structured = json.then(|| fmt::layer().json().with_writer(std::io::stderr));

    let file = match cfg.file.as_deref() {
        Some(path) => {
            let appender = rolling_appender(Path::new(path), cfg.rotation.as_deref());
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().json().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(structured)
        .with(file)
        .try_init()
        .wrap_err("failed to install tracing subscriber")?;
    Ok(())
}

/// `--log-level` wins over `logging.level`; both must name a level.
fn resolve_level(cli_level: Option<&str>, cfg_level: Option<&str>) -> eyre::Result<String> {
    if let Some(level) = cli_level {
        let lower = level.to_ascii_lowercase();
        if !LEVELS.contains(&lower.as_str()) {
            eyre::bail!(
                "invalid configuration: --log-level must be one of error|warn|info|debug|trace, got {level:?}"
            );
        }
        return Ok(lower);
    }
    Ok(cfg_level.unwrap_or("info").to_ascii_lowercase())
}

fn rolling_appender(path: &Path, rotation: Option<&str>) -> tracing_appender::rolling::RollingFileAppender {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map_or_else(|| "station.log".into(), |n| n.to_os_string());
    match rotation {
        Some("daily") => tracing_appender::rolling::daily(dir, name),
        Some("hourly") => tracing_appender::rolling::hourly(dir, name),
        _ => tracing_appender::rolling::never(dir, name),
    }
}
