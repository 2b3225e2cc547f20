#![no_main]
use libfuzzer_sys::fuzz_target;
use station_core::{ControlEngine, SensorSample};
use station_gateway::SensorPayload;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = serde_json::from_slice::<SensorPayload>(data) else {
        return;
    };
    // Any decodable sample must reconcile without panicking, NaN included.
    let engine = ControlEngine::new();
    engine.ingest(SensorSample::from(payload));
    let s = engine.snapshot();
    assert_eq!(s.water_level, payload.water_level);
    assert!(engine.log_len() >= 1);
});
