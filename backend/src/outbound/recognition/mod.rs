//! Face-analysis outbound adapter.
//!
//! A thin HTTP implementation of the `FaceRecognition` port.

mod dto;
mod http_client;

pub use http_client::{RecognitionClientError, RecognitionHttpClient};
