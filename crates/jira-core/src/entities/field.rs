//! Field metadata and field/value pairs used by update and workflow calls.

use crate::bean::soap_bean;

soap_bean! {
    pub struct RemoteField: "RemoteField" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
    }
}

soap_bean! {
    /// A field id with the values to set, e.g. `("summary", ["New title"])`.
    pub struct RemoteFieldValue: "RemoteFieldValue" {
        pub id: Option<String> => "id",
        pub values: Option<Vec<String>> => "values",
    }
}

impl RemoteFieldValue {
    /// Field value pair from any string-like inputs.
    pub fn new<I, S>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(id.into()),
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }
}

soap_bean! {
    /// A custom field's value on an issue. `key` is used by cascading selects.
    pub struct RemoteCustomFieldValue: "RemoteCustomFieldValue" {
        pub customfield_id: Option<String> => "customfieldId",
        pub key: Option<String> => "key",
        pub values: Option<Vec<String>> => "values",
    }
}

soap_bean! {
    /// Id/name pair, returned for available workflow actions.
    pub struct RemoteNamedObject: "RemoteNamedObject" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
    }
}
