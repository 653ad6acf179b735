//! Domain primitives, ports and orchestrators.
//!
//! Purpose: hold everything the gateway decides on its own, independent of
//! HTTP, the face-analysis wire format, the asset store API or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: the gateway error taxonomy.
//! - RegistrationRequest / VerificationRequest: validated requests.
//! - RegistrationOrchestrator / VerificationOrchestrator: the two flows.
//! - TraceId: request correlation identifier.

pub mod error;
mod error_mapping;
pub mod intake;
pub mod liveness;
pub mod ports;
pub mod recognition;
pub mod registration;
pub mod trace_id;
pub mod user;
pub mod verification;

pub use self::error::{Error, ErrorCode};
pub use self::intake::{FacialImage, IntakeError, RegistrationRequest, VerificationRequest};
pub use self::liveness::{LivenessPolicy, LivenessRejection};
pub use self::recognition::{ComparisonResult, DetectionResult};
pub use self::registration::RegistrationOrchestrator;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, RegisteredFace, RegistrationReceipt, UserId};
pub use self::verification::VerificationOrchestrator;
