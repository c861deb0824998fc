use chrono::{DateTime, Utc};

use super::{RemoteComponent, RemoteCustomFieldValue, RemoteVersion};
use crate::bean::soap_bean;

soap_bean! {
    /// An issue. Constant-valued fields (`priority`, `status`, `type`,
    /// `resolution`) hold ids, not names.
    pub struct RemoteIssue: "RemoteIssue" extends "AbstractRemoteEntity" {
        pub id: Option<String> => "id",
        pub affects_versions: Option<Vec<RemoteVersion>> => "affectsVersions",
        pub assignee: Option<String> => "assignee",
        pub attachment_names: Option<Vec<String>> => "attachmentNames",
        pub components: Option<Vec<RemoteComponent>> => "components",
        pub created: Option<DateTime<Utc>> => "created",
        pub custom_field_values: Option<Vec<RemoteCustomFieldValue>> => "customFieldValues",
        pub description: Option<String> => "description",
        pub duedate: Option<DateTime<Utc>> => "duedate",
        pub environment: Option<String> => "environment",
        pub fix_versions: Option<Vec<RemoteVersion>> => "fixVersions",
        pub key: Option<String> => "key",
        pub priority: Option<String> => "priority",
        pub project: Option<String> => "project",
        pub reporter: Option<String> => "reporter",
        pub resolution: Option<String> => "resolution",
        pub status: Option<String> => "status",
        pub summary: Option<String> => "summary",
        pub issue_type: Option<String> => "type",
        pub updated: Option<DateTime<Utc>> => "updated",
        pub votes: Option<i64> => "votes",
    }
}
