//! Adapter construction for the HTTP state.
//!
//! Every collaborator is built once here and shared by all workers. The
//! database pool opens connections lazily, so nothing in this module waits on
//! PostgreSQL.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use mockable::DefaultClock;
use reqwest::Url;
use tracing::info;

use facegate::config::GatewaySettings;
use facegate::domain::{RegistrationOrchestrator, VerificationOrchestrator};
use facegate::inbound::http::state::HttpState;
use facegate::outbound::assets::{CloudinaryAssetStore, CloudinaryCredentials};
use facegate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use facegate::outbound::recognition::RecognitionHttpClient;

/// Build the registration and verification services from settings.
///
/// # Errors
/// Returns an error when a required setting is missing, a URL is malformed,
/// or an HTTP client or the pool cannot be constructed.
pub async fn build_http_state(settings: &GatewaySettings) -> Result<HttpState> {
    let recognition_url = Url::parse(settings.recognition_base_url()?)
        .wrap_err("FACEGATE_RECOGNITION_BASE_URL is not a valid URL")?;
    let recognition = Arc::new(RecognitionHttpClient::new(
        &recognition_url,
        settings.recognition_timeout(),
    )?);

    let credentials: CloudinaryCredentials = settings.cloudinary_url()?.parse()?;
    let api_base = Url::parse(settings.cloudinary_api_base())
        .wrap_err("FACEGATE_CLOUDINARY_API_BASE is not a valid URL")?;
    let assets = Arc::new(CloudinaryAssetStore::new(
        credentials,
        &api_base,
        settings.upload_folder.clone(),
        settings.storage_timeout(),
        Arc::new(DefaultClock),
    )?);

    let pool_config =
        PoolConfig::new(settings.database_url()?).with_max_size(settings.db_pool_max_size());
    let pool = DbPool::new(pool_config).await?;
    let users = Arc::new(DieselUserRepository::new(pool));

    let liveness = settings.liveness_policy();
    info!(
        recognition = %recognition_url,
        enforce_liveness = liveness.is_enforcing(),
        "gateway adapters configured"
    );

    let registration =
        RegistrationOrchestrator::new(recognition.clone(), assets, users.clone())
            .with_liveness_policy(liveness);
    let verification = VerificationOrchestrator::new(recognition, users);

    Ok(HttpState::new(Arc::new(registration), Arc::new(verification)))
}
