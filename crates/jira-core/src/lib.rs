//! # jira-core
//!
//! Foundational types for the JIRA SOAP client:
//! - Remote bean structs mirroring the `jirasoapservice-v2` schema types
//! - The SOAP-encoding value model, XML document tree, and element writer
//! - The one-time bean type registry used for `xsi:type` checks
//! - The remote fault taxonomy declared by the service

pub mod encoding;
pub mod entities;
pub mod errors;
pub mod registry;

mod bean;

pub use encoding::{DecodeError, Document, Node, SoapDecode, SoapEncode, SoapType, SoapValue, XmlType};
pub use errors::{FaultKind, RemoteFault};
