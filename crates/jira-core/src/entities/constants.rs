//! Constant lookups: issue types, priorities, statuses, resolutions.

use crate::bean::soap_bean;

soap_bean! {
    /// An issue type such as Bug or Task.
    pub struct RemoteIssueType: "RemoteIssueType" extends "AbstractRemoteConstant" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub icon: Option<String> => "icon",
        /// Whether this type is only valid for sub-tasks.
        pub sub_task: bool => "subTask",
    }
}

soap_bean! {
    pub struct RemotePriority: "RemotePriority" extends "AbstractRemoteConstant" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub icon: Option<String> => "icon",
        /// HTML colour, e.g. `#cc0000`.
        pub color: Option<String> => "color",
    }
}

soap_bean! {
    pub struct RemoteStatus: "RemoteStatus" extends "AbstractRemoteConstant" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub icon: Option<String> => "icon",
    }
}

soap_bean! {
    pub struct RemoteResolution: "RemoteResolution" extends "AbstractRemoteConstant" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub icon: Option<String> => "icon",
    }
}
