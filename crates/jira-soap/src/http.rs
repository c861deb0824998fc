//! HTTP transport for SOAP calls.
//!
//! SOAP 1.1 servers answer faults with `500 Internal Server Error` and a
//! fault envelope, so the status alone does not decide success. The body
//! is always read; [`HttpReply::into_api_error`] covers non-success replies
//! whose body turns out not to be a fault.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use crate::error::SoapError;

pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Status and body of one SOAP exchange.
#[derive(Debug)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

impl HttpReply {
    /// Read the full reply.
    pub async fn read(resp: reqwest::Response) -> Result<Self, SoapError> {
        let status = resp.status();
        let body = resp.text().await?;
        Ok(Self { status, body })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// [`SoapError::Api`] carrying the status and body.
    #[must_use]
    pub fn into_api_error(self) -> SoapError {
        SoapError::Api {
            status: self.status.as_u16(),
            message: self.body,
        }
    }
}

/// POST an envelope with the headers an RPC/encoded endpoint expects.
pub async fn post_envelope(
    http: &reqwest::Client,
    endpoint: &str,
    envelope: String,
) -> Result<HttpReply, SoapError> {
    let resp = http
        .post(endpoint)
        .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
        .header("SOAPAction", "\"\"")
        .body(envelope)
        .send()
        .await?;
    HttpReply::read(resp).await
}
