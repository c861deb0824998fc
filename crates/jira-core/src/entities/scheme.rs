//! Schemes, permissions, and issue security levels.

use super::RemoteEntity;
use crate::bean::soap_bean;

soap_bean! {
    pub struct RemoteScheme: "RemoteScheme" {
        pub description: Option<String> => "description",
        pub id: Option<i64> => "id",
        pub name: Option<String> => "name",
        pub scheme_type: Option<String> => "type",
    }
}

soap_bean! {
    pub struct RemoteNotificationScheme: "RemoteNotificationScheme" extends "RemoteScheme" {
        pub description: Option<String> => "description",
        pub id: Option<i64> => "id",
        pub name: Option<String> => "name",
        pub scheme_type: Option<String> => "type",
    }
}

soap_bean! {
    /// A permission, identified by its numeric code.
    pub struct RemotePermission: "RemotePermission" {
        pub name: Option<String> => "name",
        pub permission: Option<i64> => "permission",
    }
}

soap_bean! {
    /// The users and groups granted one permission within a scheme.
    pub struct RemotePermissionMapping: "RemotePermissionMapping" {
        pub permission: Option<RemotePermission> => "permission",
        pub remote_entities: Option<Vec<RemoteEntity>> => "remoteEntities",
    }
}

soap_bean! {
    pub struct RemotePermissionScheme: "RemotePermissionScheme" extends "RemoteScheme" {
        pub description: Option<String> => "description",
        pub id: Option<i64> => "id",
        pub name: Option<String> => "name",
        pub scheme_type: Option<String> => "type",
        pub permission_mappings: Option<Vec<RemotePermissionMapping>> => "permissionMappings",
    }
}

soap_bean! {
    pub struct RemoteSecurityLevel: "RemoteSecurityLevel" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
    }
}
