//! Raw SOAP faults and their translation into typed remote faults.
//!
//! A fault response looks like:
//!
//! ```xml
//! <soapenv:Fault>
//!   <faultcode>soapenv:Server.userException</faultcode>
//!   <faultstring>com.atlassian.jira.rpc.exception.RemoteAuthenticationException: Invalid username or password.</faultstring>
//!   <detail>
//!     <com.atlassian.jira.rpc.exception.RemoteAuthenticationException xsi:type="ns1:RemoteAuthenticationException"/>
//!     <ns2:hostname xmlns:ns2="http://xml.apache.org/axis/">jira</ns2:hostname>
//!   </detail>
//! </soapenv:Fault>
//! ```
//!
//! Detail entries are matched in order, by element name or by `xsi:type`.

use std::fmt;

use jira_core::{DecodeError, FaultKind, Node, RemoteFault};

/// One child of the fault's `<detail>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultDetail {
    /// Local element name, possibly a dotted Java class name.
    pub name: String,
    /// Local part of `xsi:type`, if present.
    pub xsi_type: Option<String>,
    pub text: String,
}

impl FaultDetail {
    /// The fault kind this entry names, checking the element name first.
    #[must_use]
    pub fn kind(&self) -> Option<FaultKind> {
        FaultKind::from_type_name(&self.name)
            .or_else(|| self.xsi_type.as_deref().and_then(FaultKind::from_type_name))
    }
}

/// A SOAP 1.1 fault as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SoapFault {
    pub code: String,
    pub string: String,
    pub actor: Option<String>,
    pub details: Vec<FaultDetail>,
}

impl SoapFault {
    /// Read a `<Fault>` element.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::DanglingHref`] if a detail entry references a
    /// missing multi-ref element.
    pub fn from_node(node: Node<'_>) -> Result<Self, DecodeError> {
        let text_of = |name: &str| node.child(name).map(|child| child.text().trim().to_string());
        let mut details = Vec::new();
        if let Some(detail) = node.child("detail") {
            for entry in detail.children() {
                let target = entry.resolve()?;
                details.push(FaultDetail {
                    name: entry.name().to_string(),
                    xsi_type: target.xsi_type().map(str::to_string),
                    text: target.text().trim().to_string(),
                });
            }
        }
        Ok(Self {
            code: text_of("faultcode").unwrap_or_default(),
            string: text_of("faultstring").unwrap_or_default(),
            actor: text_of("faultactor"),
            details,
        })
    }

    /// `faultstring` without a leading `java.class.Name: ` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self.string.split_once(": ") {
            Some((prefix, rest)) if is_class_name(prefix) => rest,
            _ => &self.string,
        }
    }

    /// The first detail entry naming a fault kind that satisfies one of
    /// `declared`, as a typed fault.
    #[must_use]
    pub fn typed(&self, declared: &[FaultKind]) -> Option<RemoteFault> {
        self.details
            .iter()
            .filter_map(FaultDetail::kind)
            .find(|kind| declared.iter().any(|d| kind.is_subtype_of(*d)))
            .map(|kind| RemoteFault::new(kind, self.message()))
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.string)
    }
}

fn is_class_name(prefix: &str) -> bool {
    prefix.contains('.')
        && prefix.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}
