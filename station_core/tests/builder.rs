use station_core::{BuildError, ControlEngine, EngineBuilder, SensorSample, Thresholds};

#[test]
fn zero_capacity_is_rejected() {
    let err = ControlEngine::builder()
        .with_log_capacity(Some(0))
        .build()
        .expect_err("capacity 0 must fail");
    assert!(matches!(err, BuildError::InvalidConfig(_)));
    assert!(err.to_string().contains("capacity"));
}

#[test]
fn bounded_log_keeps_newest_entries() {
    let engine = ControlEngine::builder()
        .with_log_capacity(Some(2))
        .build()
        .expect("build");
    engine.ingest(SensorSample::new(5.0, 10.0, 50));
    engine.ingest(SensorSample::new(5.0, 10.0, 51));
    engine.ingest(SensorSample::new(5.0, 10.0, 52));

    assert_eq!(
        engine.recent_log(),
        vec![
            "Received data: Pressure=5, Flow=10, WaterLevel=51".to_string(),
            "Received data: Pressure=5, Flow=10, WaterLevel=52".to_string(),
        ]
    );
    assert_eq!(engine.log_entries()[0].seq, 2);
}

#[test]
fn builder_seeds_mode_and_thresholds() {
    let t = Thresholds {
        min_pressure: 1.0,
        max_pressure: 2.0,
        max_flow: 3.0,
        min_water_level: 4,
    };
    let engine = ControlEngine::builder()
        .with_thresholds(t)
        .with_manual_mode(true)
        .with_monitoring(false)
        .build()
        .expect("build");
    let s = engine.snapshot();
    assert_eq!(s.thresholds, t);
    assert!(s.manual_mode);
    assert!(!s.monitoring_active);
}

#[test]
fn from_config_maps_every_section() {
    let cfg = toml::from_str::<station_config::Config>(
        r#"
[thresholds]
min_pressure = 1.5
max_pressure = 6.5
max_flow = 50.0
min_water_level = 20

[control]
manual_mode = true

[event_log]
capacity = 8
"#,
    )
    .expect("parse");
    let engine = EngineBuilder::from_config(&cfg).build().expect("build");
    let s = engine.snapshot();
    assert_eq!(s.thresholds.min_pressure, 1.5);
    assert_eq!(s.thresholds.max_pressure, 6.5);
    assert_eq!(s.thresholds.max_flow, 50.0);
    assert_eq!(s.thresholds.min_water_level, 20);
    assert!(s.manual_mode);
    assert!(s.monitoring_active);
    assert_eq!(engine.log_capacity().map(|c| c.get()), Some(8));
}
