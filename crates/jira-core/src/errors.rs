//! Remote fault taxonomy.
//!
//! The service declares exactly four fault types. The three specific ones
//! are subtypes of `RemoteException`, so an operation declaring
//! `RemoteException` accepts all four.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::ns;

/// Declared fault types of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    Permission,
    Validation,
    Authentication,
    Remote,
}

impl FaultKind {
    pub const ALL: [Self; 4] = [
        Self::Permission,
        Self::Validation,
        Self::Authentication,
        Self::Remote,
    ];

    /// Schema type name in the exceptions namespace.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Permission => "RemotePermissionException",
            Self::Validation => "RemoteValidationException",
            Self::Authentication => "RemoteAuthenticationException",
            Self::Remote => "RemoteException",
        }
    }

    /// Fully qualified class name the server uses for fault detail elements.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Permission => "com.atlassian.jira.rpc.exception.RemotePermissionException",
            Self::Validation => "com.atlassian.jira.rpc.exception.RemoteValidationException",
            Self::Authentication => {
                "com.atlassian.jira.rpc.exception.RemoteAuthenticationException"
            }
            Self::Remote => "com.atlassian.jira.rpc.exception.RemoteException",
        }
    }

    #[must_use]
    pub const fn namespace(self) -> &'static str {
        ns::EXCEPTIONS
    }

    /// Recognise a fault from a simple or prefixed type name
    /// (`ns1:RemoteException`), or from the exact JIRA class name. Other
    /// dotted names such as `java.rmi.RemoteException` are not JIRA faults.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        if name.contains('.') {
            return Self::ALL.into_iter().find(|kind| kind.class_name() == name);
        }
        let simple = name.rsplit(':').next().unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == simple)
    }

    /// Whether a fault of this kind satisfies a declaration of `declared`.
    #[must_use]
    pub fn is_subtype_of(self, declared: Self) -> bool {
        self == declared || declared == Self::Remote
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A typed fault raised by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteFault {
    #[error("permission denied: {0}")]
    Permission(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("remote error: {0}")]
    Remote(String),
}

impl RemoteFault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            FaultKind::Permission => Self::Permission(message),
            FaultKind::Validation => Self::Validation(message),
            FaultKind::Authentication => Self::Authentication(message),
            FaultKind::Remote => Self::Remote(message),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FaultKind {
        match self {
            Self::Permission(_) => FaultKind::Permission,
            Self::Validation(_) => FaultKind::Validation,
            Self::Authentication(_) => FaultKind::Authentication,
            Self::Remote(_) => FaultKind::Remote,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Permission(message)
            | Self::Validation(message)
            | Self::Authentication(message)
            | Self::Remote(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("RemotePermissionException", Some(FaultKind::Permission))]
    #[case("ns1:RemoteValidationException", Some(FaultKind::Validation))]
    #[case(
        "com.atlassian.jira.rpc.exception.RemoteAuthenticationException",
        Some(FaultKind::Authentication)
    )]
    #[case("com.atlassian.jira.rpc.exception.RemoteException", Some(FaultKind::Remote))]
    #[case("hostname", None)]
    #[case("java.lang.NullPointerException", None)]
    #[case("java.rmi.RemoteException", None)]
    #[case("org.example.RemotePermissionException", None)]
    fn recognises_fault_names(#[case] name: &str, #[case] expected: Option<FaultKind>) {
        assert_eq!(FaultKind::from_type_name(name), expected);
    }

    #[test]
    fn class_names_resolve_to_their_kind() {
        for kind in FaultKind::ALL {
            assert_eq!(FaultKind::from_type_name(kind.class_name()), Some(kind));
        }
    }

    #[test]
    fn remote_exception_accepts_every_kind() {
        for kind in FaultKind::ALL {
            assert!(kind.is_subtype_of(FaultKind::Remote));
        }
        assert!(!FaultKind::Remote.is_subtype_of(FaultKind::Permission));
        assert!(!FaultKind::Validation.is_subtype_of(FaultKind::Authentication));
    }

    #[test]
    fn fault_keeps_kind_and_message() {
        let fault = RemoteFault::new(FaultKind::Authentication, "Invalid username or password.");
        assert_eq!(fault.kind(), FaultKind::Authentication);
        assert_eq!(fault.message(), "Invalid username or password.");
        assert_eq!(
            fault.to_string(),
            "authentication failed: Invalid username or password."
        );
    }
}
