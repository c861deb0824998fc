//! Encoding for XML Schema built-ins, optionals, and arrays.

use chrono::{DateTime, SecondsFormat, Utc};

use super::{DecodeError, Node, SoapDecode, SoapEncode, SoapType, SoapValue, XmlType};

/// Resolve `node` and return its text, rejecting nil.
fn scalar_text<'a>(node: Node<'a>, expected: &XmlType) -> Result<&'a str, DecodeError> {
    let node = node.resolve()?;
    if node.is_nil() {
        return Err(DecodeError::UnexpectedNil {
            expected: expected.to_string(),
        });
    }
    Ok(node.text())
}

fn invalid(expected: &XmlType, value: &str) -> DecodeError {
    DecodeError::InvalidValue {
        expected: expected.to_string(),
        value: value.to_string(),
    }
}

// ── string ─────────────────────────────────────────────────────────

impl SoapType for str {
    fn xml_type() -> XmlType {
        XmlType::Xsd("string")
    }
}

impl SoapEncode for str {
    fn encode(&self) -> SoapValue {
        SoapValue::scalar(Self::xml_type(), self)
    }
}

impl SoapType for String {
    fn xml_type() -> XmlType {
        XmlType::Xsd("string")
    }
}

impl SoapEncode for String {
    fn encode(&self) -> SoapValue {
        self.as_str().encode()
    }
}

impl SoapDecode for String {
    fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
        scalar_text(node, &Self::xml_type()).map(str::to_owned)
    }
}

// ── numbers and booleans ───────────────────────────────────────────

macro_rules! number {
    ($ty:ty, $xsd:literal) => {
        impl SoapType for $ty {
            fn xml_type() -> XmlType {
                XmlType::Xsd($xsd)
            }
        }

        impl SoapEncode for $ty {
            fn encode(&self) -> SoapValue {
                SoapValue::scalar(Self::xml_type(), self.to_string())
            }
        }

        impl SoapDecode for $ty {
            fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
                let expected = Self::xml_type();
                let text = scalar_text(node, &expected)?;
                text.trim().parse().map_err(|_| invalid(&expected, text))
            }
        }
    };
}

number!(i64, "long");
number!(i32, "int");

impl SoapType for bool {
    fn xml_type() -> XmlType {
        XmlType::Xsd("boolean")
    }
}

impl SoapEncode for bool {
    fn encode(&self) -> SoapValue {
        SoapValue::scalar(Self::xml_type(), if *self { "true" } else { "false" })
    }
}

impl SoapDecode for bool {
    fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
        let expected = Self::xml_type();
        let text = scalar_text(node, &expected)?;
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(&expected, text)),
        }
    }
}

// ── dateTime ───────────────────────────────────────────────────────

impl SoapType for DateTime<Utc> {
    fn xml_type() -> XmlType {
        XmlType::Xsd("dateTime")
    }
}

impl SoapEncode for DateTime<Utc> {
    fn encode(&self) -> SoapValue {
        SoapValue::scalar(
            Self::xml_type(),
            self.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

impl SoapDecode for DateTime<Utc> {
    fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
        let expected = Self::xml_type();
        let text = scalar_text(node, &expected)?;
        DateTime::parse_from_rfc3339(text.trim())
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| invalid(&expected, text))
    }
}

// ── void ───────────────────────────────────────────────────────────

impl SoapType for () {
    fn xml_type() -> XmlType {
        XmlType::Void
    }
}

impl SoapDecode for () {
    fn decode(_node: Node<'_>) -> Result<Self, DecodeError> {
        Ok(())
    }
}

// ── nillable ───────────────────────────────────────────────────────

impl<T: SoapType> SoapType for Option<T> {
    fn xml_type() -> XmlType {
        T::xml_type()
    }
}

impl<T: SoapEncode> SoapEncode for Option<T> {
    fn encode(&self) -> SoapValue {
        self.as_ref().map_or(SoapValue::Nil, SoapEncode::encode)
    }
}

impl<T: SoapDecode> SoapDecode for Option<T> {
    fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
        let node = node.resolve()?;
        if node.is_nil() {
            return Ok(None);
        }
        T::decode(node).map(Some)
    }
}

// ── arrays ─────────────────────────────────────────────────────────

impl<T: SoapType> SoapType for [T] {
    fn xml_type() -> XmlType {
        XmlType::array_of(T::xml_type())
    }
}

impl<T: SoapEncode> SoapEncode for [T] {
    fn encode(&self) -> SoapValue {
        SoapValue::Array {
            item_type: T::xml_type(),
            items: self.iter().map(SoapEncode::encode).collect(),
        }
    }
}

impl<T: SoapType> SoapType for Vec<T> {
    fn xml_type() -> XmlType {
        XmlType::array_of(T::xml_type())
    }
}

impl<T: SoapEncode> SoapEncode for Vec<T> {
    fn encode(&self) -> SoapValue {
        self.as_slice().encode()
    }
}

/// A nil array decodes as empty. Nil members are kept when `T` accepts nil
/// (`Vec<Option<T>>`) and dropped otherwise.
impl<T: SoapDecode> SoapDecode for Vec<T> {
    fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
        let node = node.resolve()?;
        if node.is_nil() {
            return Ok(Self::new());
        }
        let mut items = Self::new();
        for (index, item) in node.children().enumerate() {
            match T::decode(item) {
                Ok(value) => items.push(value),
                Err(DecodeError::UnexpectedNil { .. })
                    if item.resolve().is_ok_and(|item| item.is_nil()) => {}
                Err(error) => return Err(error.at(index)),
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::encoding::Document;

    fn decode_first<T: SoapDecode>(xml: &str) -> Result<T, DecodeError> {
        let doc = Document::parse(xml).unwrap();
        T::decode(doc.root().first_child().unwrap())
    }

    #[rstest]
    #[case("<r><v>42</v></r>", 42)]
    #[case("<r><v> -7 </v></r>", -7)]
    #[case("<r><v>9007199254740993</v></r>", 9_007_199_254_740_993)]
    fn decodes_longs(#[case] xml: &str, #[case] expected: i64) {
        assert_eq!(decode_first::<i64>(xml).unwrap(), expected);
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("false", false)]
    #[case("0", false)]
    fn decodes_booleans(#[case] text: &str, #[case] expected: bool) {
        let xml = format!("<r><v>{text}</v></r>");
        assert_eq!(decode_first::<bool>(&xml).unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_numbers() {
        let err = decode_first::<i32>("<r><v>twelve</v></r>").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidValue { .. }));
    }

    #[test]
    fn nil_is_none_for_optionals_and_error_otherwise() {
        let xml = r#"<r><v xsi:nil="true"/></r>"#;
        assert_eq!(decode_first::<Option<String>>(xml).unwrap(), None);
        assert!(matches!(
            decode_first::<String>(xml),
            Err(DecodeError::UnexpectedNil { .. })
        ));
    }

    #[test]
    fn date_time_roundtrips_with_millis() {
        let when = Utc.with_ymd_and_hms(2011, 3, 14, 9, 26, 53).unwrap();
        let SoapValue::Scalar { text, .. } = when.encode() else {
            panic!("dateTime should encode as a scalar");
        };
        assert_eq!(text, "2011-03-14T09:26:53.000Z");

        let xml = format!("<r><v>{text}</v></r>");
        assert_eq!(decode_first::<DateTime<Utc>>(&xml).unwrap(), when);
    }

    #[test]
    fn date_time_honours_offsets() {
        let decoded =
            decode_first::<DateTime<Utc>>("<r><v>2011-03-14T11:26:53.000+02:00</v></r>").unwrap();
        assert_eq!(decoded, Utc.with_ymd_and_hms(2011, 3, 14, 9, 26, 53).unwrap());
    }

    #[test]
    fn arrays_keep_element_order() {
        let xml = r#"<r><v soapenc:arrayType="xsd:string[3]">
            <item>c</item><item>a</item><item>b</item>
        </v></r>"#;
        let values = decode_first::<Vec<String>>(xml).unwrap();
        assert_eq!(values, vec!["c", "a", "b"]);
    }

    #[test]
    fn nil_array_is_empty() {
        let xml = r#"<r><v xsi:type="soapenc:Array" xsi:nil="true"/></r>"#;
        assert_eq!(decode_first::<Vec<String>>(xml).unwrap(), Vec::<String>::new());
        assert_eq!(decode_first::<Option<Vec<String>>>(xml).unwrap(), None);
    }

    #[test]
    fn nil_members_are_dropped_unless_optional() {
        let xml = r#"<r><v soapenc:arrayType="xsd:string[3]">
            <item>a</item><item xsi:nil="true"/><item>b</item>
        </v></r>"#;
        assert_eq!(decode_first::<Vec<String>>(xml).unwrap(), vec!["a", "b"]);
        assert_eq!(
            decode_first::<Vec<Option<String>>>(xml).unwrap(),
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[test]
    fn optional_members_encode_as_nil_items() {
        let SoapValue::Array { items, .. } = vec![Some("a".to_string()), None].encode() else {
            panic!("vec should encode as an array");
        };
        assert!(!items[0].is_nil());
        assert!(items[1].is_nil());
    }

    #[test]
    fn array_item_errors_carry_their_index() {
        let xml = "<r><v><item>1</item><item>x</item></v></r>";
        let err = decode_first::<Vec<i64>>(xml).unwrap_err();
        assert_eq!(err.to_string(), "1: invalid xsd:long value 'x'");
    }

    #[test]
    fn slices_encode_as_soap_arrays() {
        let value = ["a".to_string(), "b".to_string()].as_slice().encode();
        let SoapValue::Array { item_type, items } = value else {
            panic!("slice should encode as an array");
        };
        assert_eq!(item_type, XmlType::Xsd("string"));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn none_encodes_as_nil() {
        assert!(None::<i64>.encode().is_nil());
        assert_eq!(
            Some(5_i64).encode(),
            SoapValue::scalar(XmlType::Xsd("long"), "5")
        );
    }
}
