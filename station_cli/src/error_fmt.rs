//! Human-readable error descriptions and structured JSON error formatting.

/// Exit code classes for startup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Config,
    Bind,
    Other,
}

impl ErrorClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::Config => "Config",
            Self::Bind => "Bind",
            Self::Other => "Error",
        }
    }
}

pub fn classify(err: &eyre::Report) -> ErrorClass {
    use station_core::BuildError;

    if err.downcast_ref::<BuildError>().is_some() {
        return ErrorClass::Config;
    }
    let msg = format!("{err:#}").to_ascii_lowercase();
    if msg.contains("failed to bind gateway") {
        return ErrorClass::Bind;
    }
    if msg.contains("invalid configuration") || msg.contains("failed to read config file") {
        return ErrorClass::Config;
    }
    ErrorClass::Other
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    let msg = format!("{err:#}");
    match classify(err) {
        ErrorClass::Bind => format!(
            "What happened: The gateway could not listen on its address ({msg}).\nLikely causes: Another process already uses the port, or the address is not local to this host.\nHow to fix: Stop the other process, or choose another port with --port or [server] port in the config."
        ),
        ErrorClass::Config if msg.to_ascii_lowercase().contains("failed to read config file") => format!(
            "What happened: The config file could not be read ({msg}).\nLikely causes: Wrong --config path or missing permissions.\nHow to fix: Pass an existing TOML file with --config, or omit the flag to use built-in defaults."
        ),
        ErrorClass::Config => format!(
            "What happened: Invalid configuration ({msg}).\nLikely causes: Misspelled keys, wrong value types, or out-of-range values in the TOML.\nHow to fix: Edit the config file, then run `station check-config`."
        ),
        ErrorClass::Other => {
            let mut cause = String::new();
            if let Some(src) = err.source() {
                cause = format!(" Cause: {src}");
            }
            format!(
                "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {err}"
            )
        }
    }
}

/// Stable exit codes per error class.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match classify(err) {
        ErrorClass::Config => 3,
        ErrorClass::Bind => 4,
        ErrorClass::Other => 1,
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let class = classify(err);
    json!({
        "reason": class.name(),
        "exit_code": exit_code_for_error(err),
        "message": humanize(err),
    })
    .to_string()
}
