//! Mock SOAP endpoint shared by the integration tests.

#![allow(dead_code)]

use jira_core::FaultKind;
use jira_soap::JiraSoapClient;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ENDPOINT: &str = "/rpc/soap/jirasoapservice-v2";

pub fn client_for(server: &MockServer) -> JiraSoapClient {
    JiraSoapClient::with_endpoint(format!("{}{ENDPOINT}", server.uri())).unwrap()
}

/// Wrap body entries in a response envelope as the server writes it.
pub fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:soapenc="http://schemas.xmlsoap.org/soap/encoding/">
<soapenv:Body>{body}</soapenv:Body>
</soapenv:Envelope>"#
    )
}

/// `<opResponse>` wrapper around the given return part markup.
pub fn response(operation: &str, content: &str) -> String {
    format!(
        r#"<ns1:{operation}Response soapenv:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/" xmlns:ns1="http://soap.rpc.jira.atlassian.com">{content}</ns1:{operation}Response>"#
    )
}

/// A fault whose detail names `kind` by its class name.
pub fn fault(kind: FaultKind, message: &str) -> String {
    let class = kind.class_name();
    let type_name = kind.type_name();
    envelope(&format!(
        r#"<soapenv:Fault><faultcode>soapenv:Server.userException</faultcode><faultstring>{class}: {message}</faultstring><detail><{class} xsi:type="ns1:{type_name}" xmlns:ns1="http://exception.rpc.jira.atlassian.com"/><ns2:hostname xmlns:ns2="http://xml.apache.org/axis/">jira.example.com</ns2:hostname></detail></soapenv:Fault>"#
    ))
}

/// Answer calls of `operation` with `body`, expecting exactly one call.
pub async fn mount(server: &MockServer, operation: &str, status: u16, body: String) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("SOAPAction", "\"\""))
        .and(header("content-type", "text/xml; charset=utf-8"))
        .and(body_string_contains(format!("<ns1:{operation} ")))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "text/xml; charset=utf-8"))
        .expect(1)
        .mount(server)
        .await;
}
