//! # jira-soap
//!
//! Typed async client for the JIRA SOAP service (`jirasoapservice-v2`).
//!
//! Calls go through [`JiraSoapClient`], which implements every remote
//! operation via the [`JiraSoapService`] trait. Requests are SOAP 1.1
//! RPC/encoded envelopes; responses are decoded into the `Remote*` beans of
//! [`jira_core::entities`]. Faults the operation declares come back as
//! [`SoapError::Remote`], any other fault as [`SoapError::Fault`].
//!
//! ```no_run
//! use jira_soap::{JiraSoapClient, JiraSoapService};
//!
//! # async fn demo() -> Result<(), jira_soap::SoapError> {
//! let client = JiraSoapClient::with_endpoint("https://jira.example.com/rpc/soap/jirasoapservice-v2")?;
//! let token = client.login("fred", "secret").await?;
//! let issue = client.get_issue(&token, "ABC-1").await?;
//! println!("{:?}", issue.summary);
//! client.logout(&token).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod envelope;
mod error;
mod fault;
mod http;
mod operation;
mod service;
mod session;

pub use client::JiraSoapClient;
pub use error::SoapError;
pub use fault::{FaultDetail, SoapFault};
pub use operation::{OperationDescriptor, OperationSummary, ParamDescriptor, lookup, operations};
pub use service::JiraSoapService;
pub use session::JiraSession;
