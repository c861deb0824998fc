use crate::bean::soap_bean;

soap_bean! {
    /// A saved search filter.
    pub struct RemoteFilter: "RemoteFilter" extends "AbstractNamedRemoteEntity" {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub author: Option<String> => "author",
        pub description: Option<String> => "description",
        pub project: Option<String> => "project",
        /// Legacy XML form of the search request.
        pub xml: Option<String> => "xml",
    }
}
