//! SOAP 1.1 section-5 ("RPC/encoded") value model.
//!
//! Values travel in two directions:
//! - **Outbound**: Rust values are lowered into a [`SoapValue`] tree via
//!   [`SoapEncode`] and rendered with [`XmlElement`].
//! - **Inbound**: response XML is parsed into a [`Document`] and decoded
//!   element-by-element via [`SoapDecode`], following `href="#id"`
//!   multi-references as needed.
//!
//! Every encodable or decodable type reports its schema type through
//! [`SoapType`], which feeds both `xsi:type` annotations and the operation
//! descriptor tables.

mod document;
mod error;
mod primitives;
mod value;
mod writer;

pub use document::{Document, Node};
pub use error::DecodeError;
pub use value::SoapValue;
pub use writer::XmlElement;

use std::fmt;

/// XML namespaces used by the JIRA SOAP service.
pub mod ns {
    pub const SOAP_ENV: &str = "http://schemas.xmlsoap.org/soap/envelope/";
    pub const SOAP_ENC: &str = "http://schemas.xmlsoap.org/soap/encoding/";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
    /// Namespace of the RPC operation wrapper elements.
    pub const SERVICE: &str = "http://soap.rpc.jira.atlassian.com";
    /// Namespace of the `Remote*` bean types (prefix `tns1`).
    pub const BEANS: &str = "http://beans.soap.rpc.jira.atlassian.com";
    /// Namespace of the declared fault types.
    pub const EXCEPTIONS: &str = "http://exception.rpc.jira.atlassian.com";
    /// WSDL target namespace, home of the `ArrayOf_*` types (prefix `impl`).
    pub const IMPL: &str = "https://jira.atlassian.com/rpc/soap/jirasoapservice-v2";
}

/// A schema type as named by the service's WSDL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum XmlType {
    /// No value (void operations).
    Void,
    /// A built-in XML Schema type, e.g. `string`, `long`, `dateTime`.
    Xsd(&'static str),
    /// A complex type in the beans namespace, e.g. `RemoteIssue`.
    Bean(&'static str),
    /// A SOAP-encoded array of the inner type.
    Array(Box<XmlType>),
}

impl XmlType {
    /// Array of `item`.
    #[must_use]
    pub fn array_of(item: Self) -> Self {
        Self::Array(Box::new(item))
    }

    /// Namespace URI of the type, `None` for [`XmlType::Void`].
    #[must_use]
    pub const fn namespace(&self) -> Option<&'static str> {
        match self {
            Self::Void => None,
            Self::Xsd(_) => Some(ns::XSD),
            Self::Bean(_) => Some(ns::BEANS),
            Self::Array(_) => Some(ns::IMPL),
        }
    }

    /// Local part of the qualified name, using the WSDL's `ArrayOf_*` naming
    /// for arrays (`ArrayOf_xsd_string`, `ArrayOf_tns1_RemoteIssue`).
    #[must_use]
    pub fn local_name(&self) -> String {
        match self {
            Self::Void => String::new(),
            Self::Xsd(name) | Self::Bean(name) => (*name).to_string(),
            Self::Array(item) => format!("ArrayOf_{}", item.array_suffix()),
        }
    }

    /// Prefixed name used in `xsi:type` and `soapenc:arrayType` attributes.
    #[must_use]
    pub fn xsi_type(&self) -> String {
        match self {
            Self::Void => String::from("xsd:anyType"),
            Self::Xsd(name) => format!("xsd:{name}"),
            Self::Bean(name) => format!("tns1:{name}"),
            Self::Array(_) => String::from("soapenc:Array"),
        }
    }

    fn array_suffix(&self) -> String {
        match self {
            Self::Void => String::from("xsd_anyType"),
            Self::Xsd(name) => format!("xsd_{name}"),
            Self::Bean(name) => format!("tns1_{name}"),
            Self::Array(_) => self.local_name(),
        }
    }
}

impl fmt::Display for XmlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Xsd(name) => write!(f, "xsd:{name}"),
            Self::Bean(name) => write!(f, "tns1:{name}"),
            Self::Array(_) => write!(f, "impl:{}", self.local_name()),
        }
    }
}

/// A Rust type with a known schema type.
pub trait SoapType {
    /// Schema type of this Rust type.
    fn xml_type() -> XmlType;
}

/// Lowering into the SOAP-encoding value model.
pub trait SoapEncode: SoapType {
    fn encode(&self) -> SoapValue;
}

/// Decoding from a parsed response element.
///
/// Implementations must call [`Node::resolve`] before inspecting the node so
/// that multi-reference (`href`) elements are followed.
pub trait SoapDecode: SoapType + Sized {
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the element is nil where a value is
    /// required, carries an incompatible `xsi:type`, or holds text that does
    /// not parse as the target type.
    fn decode(node: Node<'_>) -> Result<Self, DecodeError>;
}

impl<T: SoapType + ?Sized> SoapType for &T {
    fn xml_type() -> XmlType {
        T::xml_type()
    }
}

impl<T: SoapEncode + ?Sized> SoapEncode for &T {
    fn encode(&self) -> SoapValue {
        (**self).encode()
    }
}
