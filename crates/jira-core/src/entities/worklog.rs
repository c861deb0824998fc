use chrono::{DateTime, Utc};

use crate::bean::soap_bean;

soap_bean! {
    /// A work log entry. `timeSpent` uses JIRA duration syntax (`1h 30m`);
    /// the server fills `timeSpentInSeconds`.
    pub struct RemoteWorklog: "RemoteWorklog" {
        pub author: Option<String> => "author",
        pub comment: Option<String> => "comment",
        pub created: Option<DateTime<Utc>> => "created",
        pub group_level: Option<String> => "groupLevel",
        pub id: Option<String> => "id",
        pub role_level_id: Option<String> => "roleLevelId",
        pub start_date: Option<DateTime<Utc>> => "startDate",
        pub time_spent: Option<String> => "timeSpent",
        pub time_spent_in_seconds: i64 => "timeSpentInSeconds",
        pub update_author: Option<String> => "updateAuthor",
        pub updated: Option<DateTime<Utc>> => "updated",
    }
}
