//! Users, groups, and the polymorphic `RemoteEntity` holding either.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bean::soap_bean;
use crate::encoding::{DecodeError, Node, SoapDecode, SoapEncode, SoapType, SoapValue, XmlType};
use crate::registry::registry;

soap_bean! {
    pub struct RemoteUser: "RemoteUser" extends "RemoteEntity" {
        pub email: Option<String> => "email",
        pub fullname: Option<String> => "fullname",
        pub name: Option<String> => "name",
    }
}

soap_bean! {
    pub struct RemoteGroup: "RemoteGroup" extends "RemoteEntity" {
        pub name: Option<String> => "name",
        pub users: Option<Vec<RemoteUser>> => "users",
    }
}

/// A user or a group. The concrete type is taken from `xsi:type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RemoteEntity {
    User(RemoteUser),
    Group(RemoteGroup),
}

impl RemoteEntity {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.name.as_deref(),
            Self::Group(group) => group.name.as_deref(),
        }
    }
}

impl From<RemoteUser> for RemoteEntity {
    fn from(user: RemoteUser) -> Self {
        Self::User(user)
    }
}

impl From<RemoteGroup> for RemoteEntity {
    fn from(group: RemoteGroup) -> Self {
        Self::Group(group)
    }
}

impl SoapType for RemoteEntity {
    fn xml_type() -> XmlType {
        XmlType::Bean("RemoteEntity")
    }
}

impl SoapEncode for RemoteEntity {
    fn encode(&self) -> SoapValue {
        match self {
            Self::User(user) => user.encode(),
            Self::Group(group) => group.encode(),
        }
    }
}

impl SoapDecode for RemoteEntity {
    fn decode(node: Node<'_>) -> Result<Self, DecodeError> {
        let node = node.resolve()?;
        let actual = node.xsi_type().unwrap_or_default();
        let registry = registry();
        if registry.is_assignable(actual, "RemoteUser") {
            RemoteUser::decode(node).map(Self::User)
        } else if registry.is_assignable(actual, "RemoteGroup") {
            RemoteGroup::decode(node).map(Self::Group)
        } else {
            Err(DecodeError::TypeMismatch {
                expected: String::from("RemoteUser or RemoteGroup"),
                actual: if actual.is_empty() {
                    String::from("untyped element")
                } else {
                    actual.to_string()
                },
            })
        }
    }
}
