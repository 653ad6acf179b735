//! Gateway entry-point: loads settings, prepares the database and serves the
//! registration and verification endpoints.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use actix_web::web;
use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use facegate::config::GatewaySettings;
use facegate::inbound::http::health::HealthState;
use facegate::outbound::persistence::run_pending_migrations;
use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = GatewaySettings::load_from_iter(std::env::args_os())
        .map_err(|e| eyre!("failed to load gateway settings: {e}"))?;

    if settings.run_migrations() {
        run_pending_migrations(settings.database_url()?).await?;
    } else {
        info!("skipping database migrations");
    }

    let http_state = build_http_state(&settings).await?;
    let config =
        ServerConfig::new(settings.bind_addr(), http_state).with_json_limit(settings.max_body_bytes());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("facegate")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(bind_addr = %settings.bind_addr(), "gateway listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome?;
    Ok(())
}

/// Build Prometheus middleware, continuing without it when registration fails.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> std::result::Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics initialisation failed; serving without /metrics");
            None
        }
    }
}

#[cfg(test)]
mod tests;
