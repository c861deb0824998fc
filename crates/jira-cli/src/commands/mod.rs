pub mod comment;
pub mod constants;
pub mod dispatch;
pub mod filter;
pub mod issue;
pub mod operations;
pub mod project;
pub mod schema;
pub mod server;
pub mod worklog;
