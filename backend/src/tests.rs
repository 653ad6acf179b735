//! Tests for the gateway bootstrap, covering metrics initialisation and
//! readiness signalling.

#[cfg(feature = "metrics")]
use super::{PrometheusMetricsBuilder, initialize_metrics};
use super::{HealthState, ServerConfig, create_server};
use actix_web::web;
use facegate::domain::ports::{FixtureRegistrationService, FixtureVerificationService};
use facegate::inbound::http::state::HttpState;
use rstest::{fixture, rstest};
use std::net::SocketAddr;
use std::sync::Arc;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn server_config() -> ServerConfig {
    let bind_addr: SocketAddr = ([127, 0, 0, 1], 0).into();
    let http_state = HttpState::new(
        Arc::new(FixtureRegistrationService),
        Arc::new(FixtureVerificationService),
    );
    ServerConfig::new(bind_addr, http_state)
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_none_on_error() {
    let metrics = initialize_metrics(|| -> Result<_, &str> { Err("boom") });
    assert!(metrics.is_none(), "expected metrics to be absent on error");
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_metrics_on_success() {
    let metrics = initialize_metrics(|| {
        PrometheusMetricsBuilder::new("test")
            .endpoint("/metrics")
            .build()
    });
    assert!(metrics.is_some(), "expected metrics to be present on success");
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready_once_bound(
    health_state: web::Data<HealthState>,
    server_config: ServerConfig,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), server_config.with_json_limit(1024))
        .expect("server should bind an ephemeral port");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[cfg(feature = "metrics")]
#[rstest]
#[actix_rt::test]
async fn create_server_accepts_metrics_middleware(
    health_state: web::Data<HealthState>,
    server_config: ServerConfig,
) {
    let metrics = PrometheusMetricsBuilder::new("test_server")
        .endpoint("/metrics")
        .build()
        .expect("metrics should build for tests");

    let _server = create_server(health_state.clone(), server_config.with_metrics(Some(metrics)))
        .expect("server should build with metrics");

    assert!(health_state.is_ready());
}
