//! Projects, components, and versions.

use chrono::{DateTime, Utc};

use super::{RemotePermissionScheme, RemoteScheme};
use crate::bean::soap_bean;

soap_bean! {
    /// A project. The scheme fields are only populated by
    /// `getProjectWithSchemesById`-style calls.
    pub struct RemoteProject: "RemoteProject" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub issue_security_scheme: Option<RemoteScheme> => "issueSecurityScheme",
        pub key: Option<String> => "key",
        /// Username of the project lead.
        pub lead: Option<String> => "lead",
        pub notification_scheme: Option<RemoteScheme> => "notificationScheme",
        pub permission_scheme: Option<RemotePermissionScheme> => "permissionScheme",
        pub project_url: Option<String> => "projectUrl",
        pub url: Option<String> => "url",
    }
}

soap_bean! {
    pub struct RemoteComponent: "RemoteComponent" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
    }
}

soap_bean! {
    /// A project version, referenced by affects/fix version fields.
    pub struct RemoteVersion: "RemoteVersion" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub archived: bool => "archived",
        pub release_date: Option<DateTime<Utc>> => "releaseDate",
        pub released: bool => "released",
        pub sequence: Option<i64> => "sequence",
    }
}
