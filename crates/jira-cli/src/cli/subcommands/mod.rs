mod comment;
mod filter;
mod issue;
mod project;
mod worklog;

pub use comment::CommentCommands;
pub use filter::FilterCommands;
pub use issue::{IssueCommands, IssueCreateArgs};
pub use project::ProjectCommands;
pub use worklog::{WorklogAddArgs, WorklogCommands};
