//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised with fixture services and no I/O.

use std::sync::Arc;

use crate::domain::ports::{RegistrationService, VerificationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
    pub verification: Arc<dyn VerificationService>,
}

impl HttpState {
    /// Bundle the two use-case ports.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        verification: Arc<dyn VerificationService>,
    ) -> Self {
        Self {
            registration,
            verification,
        }
    }
}
