use chrono::{DateTime, Utc};

use crate::bean::soap_bean;

soap_bean! {
    /// A comment on an issue. `groupLevel` and `roleLevel` restrict
    /// visibility to a group name or project role id.
    pub struct RemoteComment: "RemoteComment" {
        pub author: Option<String> => "author",
        pub body: Option<String> => "body",
        pub created: Option<DateTime<Utc>> => "created",
        pub group_level: Option<String> => "groupLevel",
        pub id: Option<String> => "id",
        pub role_level: Option<String> => "roleLevel",
        pub update_author: Option<String> => "updateAuthor",
        pub updated: Option<DateTime<Utc>> => "updated",
    }
}
