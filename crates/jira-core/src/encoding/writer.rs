//! Rendering of [`SoapValue`] trees as SOAP-encoded XML elements.
//!
//! The output relies on the envelope declaring the `xsi`, `xsd`, `soapenc`
//! and `tns1` prefixes; see `jira-soap`'s envelope builder.

use std::fmt;

use quick_xml::escape::escape;

use super::SoapValue;

/// Accessor element name used for array members.
const ARRAY_ITEM: &str = "item";

/// Display adapter rendering `value` as an element named `name`.
pub struct XmlElement<'a> {
    name: &'a str,
    value: &'a SoapValue,
}

impl<'a> XmlElement<'a> {
    #[must_use]
    pub const fn new(name: &'a str, value: &'a SoapValue) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for XmlElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name;
        match self.value {
            SoapValue::Nil => write!(f, r#"<{name} xsi:nil="true"/>"#),
            SoapValue::Scalar { xml_type, text } => write!(
                f,
                r#"<{name} xsi:type="{}">{}</{name}>"#,
                xml_type.xsi_type(),
                escape(text.as_str())
            ),
            SoapValue::Struct { xml_type, fields } => {
                write!(f, r#"<{name} xsi:type="{}">"#, xml_type.xsi_type())?;
                for (field, value) in fields {
                    write!(f, "{}", XmlElement::new(field, value))?;
                }
                write!(f, "</{name}>")
            }
            SoapValue::Array { item_type, items } => {
                write!(
                    f,
                    r#"<{name} xsi:type="soapenc:Array" soapenc:arrayType="{}[{}]">"#,
                    item_type.xsi_type(),
                    items.len()
                )?;
                for item in items {
                    write!(f, "{}", XmlElement::new(ARRAY_ITEM, item))?;
                }
                write!(f, "</{name}>")
            }
        }
    }
}
