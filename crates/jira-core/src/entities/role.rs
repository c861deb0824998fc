//! Project roles and their actors.

use super::{RemoteProject, RemoteUser};
use crate::bean::soap_bean;

soap_bean! {
    pub struct RemoteProjectRole: "RemoteProjectRole" {
        pub description: Option<String> => "description",
        pub id: Option<i64> => "id",
        pub name: Option<String> => "name",
    }
}

soap_bean! {
    /// One actor of a role: a user or group (`type`), named by `parameter`.
    pub struct RemoteRoleActor: "RemoteRoleActor" {
        pub descriptor: Option<String> => "descriptor",
        pub parameter: Option<String> => "parameter",
        pub project_role: Option<RemoteProjectRole> => "projectRole",
        pub actor_type: Option<String> => "type",
        pub users: Option<Vec<RemoteUser>> => "users",
    }
}

soap_bean! {
    /// Default actors of a role, not tied to a project.
    pub struct RemoteRoleActors: "RemoteRoleActors" {
        pub project_role: Option<RemoteProjectRole> => "projectRole",
        pub role_actors: Option<Vec<RemoteRoleActor>> => "roleActors",
        pub users: Option<Vec<RemoteUser>> => "users",
    }
}

soap_bean! {
    pub struct RemoteProjectRoleActors: "RemoteProjectRoleActors" extends "RemoteRoleActors" {
        pub project: Option<RemoteProject> => "project",
        pub project_role: Option<RemoteProjectRole> => "projectRole",
        pub role_actors: Option<Vec<RemoteRoleActor>> => "roleActors",
        pub users: Option<Vec<RemoteUser>> => "users",
    }
}
