use super::XmlType;

/// An outbound SOAP-encoded value, ready to be rendered as an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapValue {
    /// Rendered as `xsi:nil="true"`.
    Nil,
    /// Simple content with its schema type.
    Scalar { xml_type: XmlType, text: String },
    /// A bean: ordered accessor elements.
    Struct {
        xml_type: XmlType,
        fields: Vec<(&'static str, SoapValue)>,
    },
    /// A `soapenc:Array` of items sharing one declared item type.
    Array {
        item_type: XmlType,
        items: Vec<SoapValue>,
    },
}

impl SoapValue {
    pub fn scalar(xml_type: XmlType, text: impl Into<String>) -> Self {
        Self::Scalar {
            xml_type,
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Look up a struct field by accessor name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Struct { fields, .. } => fields
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}
