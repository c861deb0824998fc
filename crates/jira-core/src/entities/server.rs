//! Server metadata and global configuration.

use chrono::{DateTime, Utc};

use crate::bean::soap_bean;

soap_bean! {
    pub struct RemoteServerInfo: "RemoteServerInfo" {
        pub base_url: Option<String> => "baseUrl",
        pub build_date: Option<DateTime<Utc>> => "buildDate",
        pub build_number: Option<String> => "buildNumber",
        pub edition: Option<String> => "edition",
        pub server_time: Option<RemoteTimeInfo> => "serverTime",
        pub version: Option<String> => "version",
    }
}

soap_bean! {
    /// Server wall-clock time as formatted by the server, with its zone id.
    pub struct RemoteTimeInfo: "RemoteTimeInfo" {
        pub server_time: Option<String> => "serverTime",
        pub time_zone_id: Option<String> => "timeZoneId",
    }
}

soap_bean! {
    /// Global feature switches. The misspelt `allowExternalUserManagment`
    /// is the schema's own spelling.
    pub struct RemoteConfiguration: "RemoteConfiguration" {
        pub allow_attachments: bool => "allowAttachments",
        pub allow_external_user_management: bool => "allowExternalUserManagment",
        pub allow_issue_linking: bool => "allowIssueLinking",
        pub allow_sub_tasks: bool => "allowSubTasks",
        pub allow_time_tracking: bool => "allowTimeTracking",
        pub allow_unassigned_issues: bool => "allowUnassignedIssues",
        pub allow_voting: bool => "allowVoting",
        pub allow_watching: bool => "allowWatching",
        pub time_tracking_days_per_week: i32 => "timeTrackingDaysPerWeek",
        pub time_tracking_hours_per_day: i32 => "timeTrackingHoursPerDay",
    }
}
