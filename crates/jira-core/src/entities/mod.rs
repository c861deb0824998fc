//! `Remote*` bean types of the `jirasoapservice-v2` schema.
//!
//! Every bean is a flat record of nillable fields (Java primitives become
//! non-optional and default to `false`/`0`). Abstract base classes of the
//! schema are expressed as the traits in [`base`].

pub mod base;

mod attachment;
mod comment;
mod constants;
mod field;
mod filter;
mod issue;
mod project;
mod role;
mod scheme;
mod server;
mod user;
mod worklog;

pub use attachment::{RemoteAttachment, RemoteAvatar};
pub use base::{Constant, Entity, NamedEntity};
pub use comment::RemoteComment;
pub use constants::{RemoteIssueType, RemotePriority, RemoteResolution, RemoteStatus};
pub use field::{RemoteCustomFieldValue, RemoteField, RemoteFieldValue, RemoteNamedObject};
pub use filter::RemoteFilter;
pub use issue::RemoteIssue;
pub use project::{RemoteComponent, RemoteProject, RemoteVersion};
pub use role::{RemoteProjectRole, RemoteProjectRoleActors, RemoteRoleActor, RemoteRoleActors};
pub use scheme::{
    RemoteNotificationScheme, RemotePermission, RemotePermissionMapping, RemotePermissionScheme,
    RemoteScheme, RemoteSecurityLevel,
};
pub use server::{RemoteConfiguration, RemoteServerInfo, RemoteTimeInfo};
pub use user::{RemoteEntity, RemoteGroup, RemoteUser};
pub use worklog::RemoteWorklog;
