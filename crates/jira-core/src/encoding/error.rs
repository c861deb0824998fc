//! Decode error types.

use std::fmt;

use thiserror::Error;

/// Errors raised while parsing response XML or decoding it into Rust values.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The payload contains no element at all.
    #[error("document has no root element")]
    EmptyDocument,

    /// An element required by the SOAP envelope structure is missing.
    #[error("missing <{0}> element")]
    MissingElement(String),

    /// `xsi:nil="true"` where a non-nillable value was expected.
    #[error("unexpected nil where {expected} was expected")]
    UnexpectedNil { expected: String },

    /// Text content does not parse as the expected schema type.
    #[error("invalid {expected} value '{value}'")]
    InvalidValue { expected: String, value: String },

    /// The element's `xsi:type` is not assignable to the expected type.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// An `href` points at no element, or the reference chain loops.
    #[error("unresolved multi-reference '{0}'")]
    DanglingHref(String),

    /// Wraps another error with the accessor path where it happened.
    #[error("{path}: {source}")]
    At {
        path: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Prefix the error with a path segment (field name or array index).
    #[must_use]
    pub fn at(self, segment: impl fmt::Display) -> Self {
        match self {
            Self::At { path, source } => Self::At {
                path: format!("{segment}.{path}"),
                source,
            },
            other => Self::At {
                path: segment.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, with path context stripped.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::At { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
