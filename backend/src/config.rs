//! Gateway settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `FACEGATE_*` environment variables or a config
//! file. The two boolean switches are read from the environment and config
//! files only, since an absent clap flag parses as `false`. Optional fields
//! fall back to defaults through the accessor methods below; the three
//! collaborator endpoints have no default and must be supplied.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::LivenessPolicy;
use crate::inbound::http::routes::DEFAULT_JSON_LIMIT;
use crate::outbound::assets::DEFAULT_CLOUDINARY_API_BASE;

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DB_POOL_MAX_SIZE: u32 = 10;

/// A required setting was not supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required setting `{field}` (set FACEGATE_{env})")]
pub struct MissingSetting {
    field: &'static str,
    env: String,
}

impl MissingSetting {
    fn new(field: &'static str) -> Self {
        Self {
            field,
            env: field.to_uppercase(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Runtime configuration for the gateway binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FACEGATE")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_pool_max_size: Option<u32>,
    /// Base URL of the face-analysis service.
    pub recognition_base_url: Option<String>,
    pub recognition_timeout_secs: Option<u64>,
    /// `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
    pub cloudinary_url: Option<String>,
    /// Override for the Cloudinary API host.
    pub cloudinary_api_base: Option<String>,
    /// Folder uploaded reference images are placed in.
    pub upload_folder: Option<String>,
    pub storage_timeout_secs: Option<u64>,
    /// Reject registrations whose detection result fails the liveness gate.
    #[ortho_config(skip_cli, default = false)]
    pub enforce_liveness: bool,
    /// Minimum anti-spoofing score accepted while the gate is enforcing.
    pub min_antispoof_score: Option<f64>,
    /// Request body limit for the JSON endpoints.
    pub max_body_bytes: Option<usize>,
    /// Apply embedded migrations before serving.
    #[ortho_config(skip_cli, default = true)]
    pub run_migrations: bool,
}

impl GatewaySettings {
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// # Errors
    ///
    /// Returns [`MissingSetting`] when no database URL was supplied.
    pub fn database_url(&self) -> Result<&str, MissingSetting> {
        required(self.database_url.as_deref(), "database_url")
    }

    #[must_use]
    pub fn db_pool_max_size(&self) -> u32 {
        self.db_pool_max_size.unwrap_or(DEFAULT_DB_POOL_MAX_SIZE)
    }

    /// # Errors
    ///
    /// Returns [`MissingSetting`] when no face-analysis URL was supplied.
    pub fn recognition_base_url(&self) -> Result<&str, MissingSetting> {
        required(
            self.recognition_base_url.as_deref(),
            "recognition_base_url",
        )
    }

    #[must_use]
    pub fn recognition_timeout(&self) -> Duration {
        Duration::from_secs(
            self.recognition_timeout_secs
                .unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS),
        )
    }

    /// # Errors
    ///
    /// Returns [`MissingSetting`] when no Cloudinary credentials were supplied.
    pub fn cloudinary_url(&self) -> Result<&str, MissingSetting> {
        required(self.cloudinary_url.as_deref(), "cloudinary_url")
    }

    #[must_use]
    pub fn cloudinary_api_base(&self) -> &str {
        self.cloudinary_api_base
            .as_deref()
            .unwrap_or(DEFAULT_CLOUDINARY_API_BASE)
    }

    #[must_use]
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(
            self.storage_timeout_secs
                .unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS),
        )
    }

    /// Liveness policy derived from `enforce_liveness` and
    /// `min_antispoof_score`.
    #[must_use]
    pub fn liveness_policy(&self) -> LivenessPolicy {
        if self.enforce_liveness {
            LivenessPolicy::enforcing(self.min_antispoof_score)
        } else {
            LivenessPolicy::disabled()
        }
    }

    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_JSON_LIMIT)
    }

    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, MissingSetting> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| MissingSetting::new(field))
}
