use chrono::{DateTime, Utc};

use crate::bean::soap_bean;

soap_bean! {
    /// Attachment metadata; content is fetched over plain HTTP.
    pub struct RemoteAttachment: "RemoteAttachment" extends "AbstractRemoteEntity" {
        pub id: Option<String> => "id",
        pub author: Option<String> => "author",
        pub created: Option<DateTime<Utc>> => "created",
        pub filename: Option<String> => "filename",
        pub filesize: Option<i64> => "filesize",
        pub mimetype: Option<String> => "mimetype",
    }
}

soap_bean! {
    /// A project avatar image.
    pub struct RemoteAvatar: "RemoteAvatar" {
        pub base64_data: Option<String> => "base64Data",
        pub content_type: Option<String> => "contentType",
        pub id: i64 => "id",
        pub owner: Option<String> => "owner",
        pub system: bool => "system",
        pub avatar_type: Option<String> => "type",
    }
}
