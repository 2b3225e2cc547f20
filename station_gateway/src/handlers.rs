//! HTTP request handlers.
//!
//! Handlers only translate between HTTP and `ControlEngine` calls; every
//! decision lives in `station_core`.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use station_core::{ControlEngine, StationError};

use crate::error::GatewayError;
use crate::types::{SensorPayload, SensorStatus};

pub type AppState = Arc<ControlEngine>;

/// `POST /api/sensors`: decode a sample and hand it to the engine.
///
/// The body is decoded regardless of `Content-Type`. Anything that is not a
/// sensor object yields 400 and leaves the station untouched.
pub async fn ingest_sensors(
    State(engine): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, GatewayError> {
    let payload: SensorPayload = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected sensor push");
        StationError::MalformedSample(e.to_string())
    })?;
    engine.ingest(payload.into());
    Ok(StatusCode::OK)
}

/// `GET /api/sensors`: current readings, actuators and mode flags.
pub async fn read_sensors(State(engine): State<AppState>) -> Json<SensorStatus> {
    Json(engine.snapshot().into())
}

/// `GET /api/logs`: the event log as newline-joined plain text.
pub async fn read_logs(State(engine): State<AppState>) -> String {
    engine.recent_log().join("\n")
}

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn unknown_route(method: Method, uri: Uri) -> GatewayError {
    tracing::debug!(%method, path = uri.path(), "unknown route");
    GatewayError(StationError::UnknownRoute {
        method: method.to_string(),
        path: uri.path().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_router;
    use axum::{
        Router,
        body::Body,
        http::{Request, header},
    };
    use rstest::rstest;
    use tower::ServiceExt;

    fn create_test_app() -> (Router, AppState) {
        let engine = Arc::new(ControlEngine::new());
        (create_router(Arc::clone(&engine)), engine)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn post_sensors(body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/sensors")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    mod ingest_tests {
        use super::*;

        #[tokio::test]
        async fn valid_push_returns_200_with_empty_body() {
            let (app, engine) = create_test_app();

            let response = app
                .oneshot(post_sensors(
                    r#"{"Pressure": 2.0, "Flow": 10.0, "WaterLevel": 50}"#,
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert!(body_string(response).await.is_empty());
            let s = engine.snapshot();
            assert_eq!(s.pressure, 2.0);
            assert!(s.pump_active);
        }

        #[tokio::test]
        async fn push_without_content_type_is_accepted() {
            let (app, engine) = create_test_app();

            let response = app
                .oneshot(
                    Request::builder()
                        .method(Method::POST)
                        .uri("/api/sensors")
                        .body(Body::from(r#"{"Pressure":5,"Flow":90,"WaterLevel":5}"#))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert!(!engine.snapshot().valve_open);
        }

        #[rstest]
        #[case::not_json("pressure=2")]
        #[case::missing_field(r#"{"Pressure": 2.0, "Flow": 10.0}"#)]
        #[case::wrong_type(r#"{"Pressure": "high", "Flow": 10.0, "WaterLevel": 50}"#)]
        #[case::array("[1, 2, 3]")]
        #[case::empty("")]
        #[tokio::test]
        async fn malformed_push_is_rejected_without_state_change(#[case] body: &'static str) {
            let (app, engine) = create_test_app();
            let before = engine.snapshot();

            let response = app.oneshot(post_sensors(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(body_string(response).await.contains("malformed sensor sample"));
            assert_eq!(engine.snapshot(), before);
            assert!(engine.recent_log().is_empty());
        }
    }

    mod read_tests {
        use super::*;

        #[tokio::test]
        async fn sensors_reflect_snapshot() {
            let (app, engine) = create_test_app();
            engine.ingest(station_core::SensorSample::new(9.5, 85.0, 7));
            engine.set_manual_mode(true);

            let response = app.oneshot(get("/api/sensors")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json"
            );

            let status: SensorStatus = serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(
                status,
                SensorStatus {
                    pressure: 9.5,
                    flow: 85.0,
                    water_level: 7,
                    pump_active: false,
                    valve_open: false,
                    is_manual_mode: true,
                    is_monitoring_active: true,
                }
            );
        }

        #[tokio::test]
        async fn logs_are_newline_joined_plain_text() {
            let (app, engine) = create_test_app();
            engine.ingest(station_core::SensorSample::new(2.0, 10.0, 50));

            let response = app.oneshot(get("/api/logs")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert!(
                response.headers()[header::CONTENT_TYPE]
                    .to_str()
                    .unwrap()
                    .starts_with("text/plain")
            );
            assert_eq!(
                body_string(response).await,
                "Received data: Pressure=2, Flow=10, WaterLevel=50\nPump activated due to low pressure. Pressure=2"
            );
        }

        #[tokio::test]
        async fn empty_log_is_empty_body() {
            let (app, _engine) = create_test_app();
            let response = app.oneshot(get("/api/logs")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert!(body_string(response).await.is_empty());
        }
    }

    mod routing_tests {
        use super::*;

        #[rstest]
        #[case(Method::GET, "/")]
        #[case(Method::GET, "/api")]
        #[case(Method::GET, "/api/sensors/1")]
        #[case(Method::DELETE, "/api/sensors")]
        #[case(Method::PUT, "/api/sensors")]
        #[case(Method::POST, "/api/logs")]
        #[case(Method::GET, "/health")]
        #[tokio::test]
        async fn unknown_routes_are_404(#[case] method: Method, #[case] uri: &str) {
            let (app, engine) = create_test_app();

            let response = app
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::from("{}"))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert!(body_string(response).await.starts_with("unknown route:"));
            assert!(engine.recent_log().is_empty());
        }

        // `get` would answer HEAD implicitly; only exact GET reads are served.
        #[rstest]
        #[case("/api/sensors")]
        #[case("/api/logs")]
        #[tokio::test]
        async fn head_on_known_paths_is_404(#[case] uri: &str) {
            let (app, engine) = create_test_app();

            let response = app
                .oneshot(
                    Request::builder()
                        .method(Method::HEAD)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert!(engine.recent_log().is_empty());
        }
    }
}
