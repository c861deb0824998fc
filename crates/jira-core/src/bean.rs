//! Declarative definition of `Remote*` bean types.
//!
//! One `soap_bean!` invocation produces the struct (with serde and schemars
//! derives using the wire field names), its [`SoapType`], [`SoapEncode`],
//! [`SoapDecode`] and [`SoapBean`] impls. Inherited fields are declared
//! inline; the parent type name only feeds the registry.
//!
//! [`SoapType`]: crate::encoding::SoapType
//! [`SoapEncode`]: crate::encoding::SoapEncode
//! [`SoapDecode`]: crate::encoding::SoapDecode
//! [`SoapBean`]: crate::registry::SoapBean

macro_rules! soap_bean {
    (@parent) => { None };
    (@parent $parent:literal) => { Some($parent) };
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $wire:literal $(extends $parent:literal)? {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $fty:ty => $fwire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            schemars::JsonSchema,
        )]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $fwire)]
                pub $field: $fty,
            )*
        }

        impl $crate::encoding::SoapType for $name {
            fn xml_type() -> $crate::encoding::XmlType {
                $crate::encoding::XmlType::Bean($wire)
            }
        }

        impl $crate::registry::SoapBean for $name {
            const TYPE_NAME: &'static str = $wire;
            const PARENT: Option<&'static str> = $crate::bean::soap_bean!(@parent $($parent)?);

            fn fields() -> Vec<$crate::registry::FieldDescriptor> {
                vec![$(
                    $crate::registry::FieldDescriptor::new(
                        $fwire,
                        <$fty as $crate::encoding::SoapType>::xml_type(),
                    ),
                )*]
            }
        }

        impl $crate::encoding::SoapEncode for $name {
            fn encode(&self) -> $crate::encoding::SoapValue {
                $crate::encoding::SoapValue::Struct {
                    xml_type: <Self as $crate::encoding::SoapType>::xml_type(),
                    fields: vec![$(
                        ($fwire, $crate::encoding::SoapEncode::encode(&self.$field)),
                    )*],
                }
            }
        }

        impl $crate::encoding::SoapDecode for $name {
            fn decode(
                node: $crate::encoding::Node<'_>,
            ) -> Result<Self, $crate::encoding::DecodeError> {
                let node = node.resolve()?;
                if node.is_nil() {
                    return Err($crate::encoding::DecodeError::UnexpectedNil {
                        expected: <Self as $crate::encoding::SoapType>::xml_type().to_string(),
                    });
                }
                $crate::registry::registry().check_element(node, $wire)?;

                let mut bean = Self::default();
                for child in node.children() {
                    match child.name() {
                        $(
                            $fwire => {
                                bean.$field = $crate::encoding::SoapDecode::decode(child)
                                    .map_err(|error| error.at($fwire))?;
                            }
                        )*
                        _ => {}
                    }
                }
                Ok(bean)
            }
        }
    };
}

pub(crate) use soap_bean;
