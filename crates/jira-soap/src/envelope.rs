//! SOAP 1.1 envelopes: request rendering and response unwrapping.

use std::fmt::Write;

use jira_core::encoding::{XmlElement, ns};
use jira_core::{DecodeError, Document, Node, SoapValue};

use crate::fault::SoapFault;
use crate::operation::OperationDescriptor;

/// Render the request envelope for `op` with already-encoded arguments.
///
/// Arguments are written as positional parts `in0`, `in1`, ... in the
/// operation element, under the RPC/encoded encoding style.
#[must_use]
pub fn request(op: &OperationDescriptor, args: &[SoapValue]) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = write!(
        xml,
        r#"<soapenv:Envelope xmlns:soapenv="{env}" xmlns:soapenc="{enc}" xmlns:xsd="{xsd}" xmlns:xsi="{xsi}" xmlns:tns1="{beans}" xmlns:impl="{imp}">"#,
        env = ns::SOAP_ENV,
        enc = ns::SOAP_ENC,
        xsd = ns::XSD,
        xsi = ns::XSI,
        beans = ns::BEANS,
        imp = ns::IMPL,
    );
    xml.push_str("<soapenv:Body>");
    let _ = write!(
        xml,
        r#"<ns1:{name} soapenv:encodingStyle="{enc}" xmlns:ns1="{service}">"#,
        name = op.name,
        enc = ns::SOAP_ENC,
        service = ns::SERVICE,
    );
    for (param, value) in op.params.iter().zip(args) {
        let _ = write!(xml, "{}", XmlElement::new(&param.part, value));
    }
    let _ = write!(xml, "</ns1:{}>", op.name);
    xml.push_str("</soapenv:Body></soapenv:Envelope>");
    xml
}

/// What a parsed response envelope carries.
#[derive(Debug)]
pub enum Reply<'a> {
    /// The response wrapper element (`<opResponse>`).
    Return(Node<'a>),
    Fault(SoapFault),
}

/// Locate the fault or response wrapper inside a parsed envelope.
///
/// The wrapper is the `<opResponse>` child of `Body`; servers that rename it
/// are tolerated by falling back to the first body entry that is not a
/// detached multi-ref value.
///
/// # Errors
///
/// Returns [`DecodeError::MissingElement`] if the document is not a SOAP
/// envelope with a non-empty body.
pub fn read<'a>(doc: &'a Document, op: &OperationDescriptor) -> Result<Reply<'a>, DecodeError> {
    let root = doc.root();
    if root.name() != "Envelope" {
        return Err(DecodeError::MissingElement(String::from("Envelope")));
    }
    let body = root
        .child("Body")
        .ok_or_else(|| DecodeError::MissingElement(String::from("Body")))?;
    if let Some(fault) = body.child("Fault") {
        return SoapFault::from_node(fault).map(Reply::Fault);
    }
    let expected = op.response_element();
    body.child(&expected)
        .or_else(|| body.children().find(|entry| !entry.is_detached()))
        .map(Reply::Return)
        .ok_or(DecodeError::MissingElement(expected))
}
