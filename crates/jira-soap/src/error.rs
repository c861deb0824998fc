//! Client error types.

use jira_core::{DecodeError, RemoteFault};
use thiserror::Error;

use crate::fault::SoapFault;

/// Errors that can occur when calling the SOAP service.
#[derive(Debug, Error)]
pub enum SoapError {
    /// The service raised one of the operation's declared faults.
    #[error(transparent)]
    Remote(#[from] RemoteFault),

    /// The service raised a fault the operation does not declare.
    #[error("SOAP fault: {0}")]
    Fault(Box<SoapFault>),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with a body that is not a SOAP fault.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response could not be decoded as the declared return type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// No descriptor is registered under this wire name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{operation} takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Credentials or endpoint missing from the loaded configuration.
    #[error("configuration error: {0}")]
    Config(#[from] jira_config::ConfigError),
}

impl From<SoapFault> for SoapError {
    fn from(fault: SoapFault) -> Self {
        Self::Fault(Box::new(fault))
    }
}

impl SoapError {
    /// The typed remote fault, if this error is one.
    #[must_use]
    pub const fn remote(&self) -> Option<&RemoteFault> {
        match self {
            Self::Remote(fault) => Some(fault),
            _ => None,
        }
    }
}
