use rstest::rstest;
use station_config::{Config, load_toml};
use std::io::Write;

#[test]
fn accepts_full_document() {
    let toml = r#"
[server]
bind = "0.0.0.0"
port = 8080

[thresholds]
min_pressure = 2.5
max_pressure = 7
max_flow = 75.5
min_water_level = 12

[control]
monitoring_active = false
manual_mode = true

[event_log]
capacity = 500

[logging]
file = "station.log"
level = "debug"
rotation = "daily"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("valid config should pass");
    assert_eq!(cfg.thresholds.min_pressure, 2.5);
    assert_eq!(cfg.thresholds.max_pressure, 7.0);
    assert_eq!(cfg.thresholds.min_water_level, 12);
    assert!(cfg.control.manual_mode);
    assert!(!cfg.control.monitoring_active);
    assert_eq!(cfg.event_log.capacity, Some(500));
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = load_toml("[thresholds]\nmax_flow = 60.0\n").expect("parse TOML");
    assert_eq!(cfg.thresholds.max_flow, 60.0);
    assert_eq!(cfg.thresholds.min_pressure, 3.0);
    assert_eq!(cfg.thresholds.max_pressure, 8.0);
    assert_eq!(cfg.thresholds.min_water_level, 10);
}

#[rstest]
#[case("[event_log]\ncapacity = 0\n", "event_log.capacity must be >= 1")]
#[case("[logging]\nrotation = \"weekly\"\n", "logging.rotation must be one of")]
#[case("[logging]\nlevel = \"loud\"\n", "logging.level must be one of")]
#[case("[server]\nbind = \"localhost\"\n", "server.bind must be an ip address")]
#[case("[thresholds]\nmin_pressure = nan\n", "thresholds.min_pressure must be finite")]
#[case("[thresholds]\nmax_flow = inf\n", "thresholds.max_flow must be finite")]
fn rejects_invalid_values(#[case] toml: &str, #[case] needle: &str) {
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should be rejected");
    assert!(
        format!("{err}").to_lowercase().contains(needle),
        "unexpected error: {err}"
    );
}

#[test]
fn inverted_thresholds_are_accepted_but_detectable() {
    let cfg = load_toml("[thresholds]\nmin_pressure = 5.0\nmax_pressure = 5.0\n").expect("parse");
    cfg.validate().expect("ordering is not validated");
    assert!(cfg.inverted_pressure_band());
    assert!(!Config::default().inverted_pressure_band());
}

#[test]
fn unknown_type_is_a_parse_error() {
    assert!(load_toml("[server]\nport = \"eighty\"\n").is_err());
}

#[test]
fn load_reads_and_validates_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "[server]\nport = 0").expect("write");
    let cfg = Config::load(file.path()).expect("load");
    assert_eq!(cfg.server.port, 0);

    let mut bad = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(bad, "[event_log]\ncapacity = 0").expect("write");
    let err = Config::load(bad.path()).expect_err("invalid");
    assert!(format!("{err:#}").contains("event_log.capacity"));
}

#[test]
fn load_reports_missing_file() {
    let err = Config::load(std::path::Path::new("/nonexistent/station.toml")).expect_err("missing");
    assert!(format!("{err}").contains("failed to read config file"));
}

#[test]
fn shipped_sample_config_is_valid() {
    let cfg = load_toml(include_str!("../../etc/station.toml")).expect("parse sample");
    cfg.validate().expect("sample config should validate");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.event_log.capacity.is_none());
}
