//! The binding stub: turns operation calls into SOAP exchanges.

use std::time::Duration;

use jira_config::ServerConfig;
use jira_core::{DecodeError, Document, Node, SoapDecode, SoapValue, XmlType};
use tracing::{debug, warn};

use crate::envelope::{self, Reply};
use crate::error::SoapError;
use crate::fault::SoapFault;
use crate::http::post_envelope;
use crate::operation::{self, OperationDescriptor};

/// HTTP client bound to one SOAP endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct JiraSoapClient {
    http: reqwest::Client,
    endpoint: String,
}

impl JiraSoapClient {
    /// Create a client for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SoapError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(config: &ServerConfig) -> Result<Self, SoapError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint_url(),
        })
    }

    /// Create a client posting to `endpoint` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`SoapError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, SoapError> {
        let mut client = Self::new(&ServerConfig::default())?;
        client.endpoint = endpoint.into();
        Ok(client)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Call `operation` with encoded arguments and decode its return part.
    ///
    /// # Errors
    ///
    /// - [`SoapError::UnknownOperation`] / [`SoapError::ArityMismatch`]
    ///   before anything is sent.
    /// - [`SoapError::Remote`] for a fault the operation declares,
    ///   [`SoapError::Fault`] for any other fault.
    /// - [`SoapError::Api`] for a non-success status without a fault body.
    /// - [`SoapError::Decode`] if the return part does not decode as `R`.
    pub async fn invoke<R: SoapDecode>(
        &self,
        operation: &str,
        args: Vec<SoapValue>,
    ) -> Result<R, SoapError> {
        let op = operation::lookup(operation)
            .ok_or_else(|| SoapError::UnknownOperation(operation.to_string()))?;
        if args.len() != op.params.len() {
            return Err(SoapError::ArityMismatch {
                operation: op.name.to_string(),
                expected: op.params.len(),
                actual: args.len(),
            });
        }

        debug!(operation = op.name, endpoint = %self.endpoint, "invoking SOAP operation");
        let request = envelope::request(op, &args);
        let reply = post_envelope(&self.http, &self.endpoint, request).await?;
        debug!(operation = op.name, status = %reply.status, bytes = reply.body.len(), "SOAP reply");

        let doc = match Document::parse(&reply.body) {
            Ok(doc) => doc,
            Err(error) if reply.is_success() => return Err(error.into()),
            Err(_) => return Err(reply.into_api_error()),
        };
        match envelope::read(&doc, op) {
            Ok(Reply::Fault(fault)) => Err(translate_fault(op, fault)),
            Ok(Reply::Return(wrapper)) if reply.is_success() => {
                decode_return(op, wrapper).map_err(SoapError::from)
            }
            Err(error) if reply.is_success() => Err(error.into()),
            Ok(Reply::Return(_)) | Err(_) => Err(reply.into_api_error()),
        }
    }
}

/// Map a fault onto the operation's declared faults, else keep it raw.
fn translate_fault(op: &OperationDescriptor, fault: SoapFault) -> SoapError {
    if let Some(remote) = fault.typed(op.faults) {
        warn!(operation = op.name, kind = %remote.kind(), message = remote.message(), "remote fault");
        return remote.into();
    }
    warn!(operation = op.name, code = %fault.code, message = fault.message(), "undeclared SOAP fault");
    fault.into()
}

fn decode_return<R: SoapDecode>(
    op: &OperationDescriptor,
    wrapper: Node<'_>,
) -> Result<R, DecodeError> {
    match wrapper.first_child() {
        Some(part) => R::decode(part).map_err(|error| error.at(op.return_part())),
        None if matches!(R::xml_type(), XmlType::Void) => R::decode(wrapper),
        None => Err(DecodeError::MissingElement(op.return_part())),
    }
}
