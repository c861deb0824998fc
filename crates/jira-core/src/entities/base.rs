//! Accessors shared by beans that extend the schema's abstract bases.
//!
//! ```text
//! AbstractRemoteEntity          id
//! └─ AbstractNamedRemoteEntity  + name
//!    └─ AbstractRemoteConstant  + description, icon
//! ```

use super::{
    RemoteAttachment, RemoteComponent, RemoteField, RemoteFilter, RemoteIssue, RemoteIssueType,
    RemoteNamedObject, RemotePriority, RemoteProject, RemoteResolution, RemoteSecurityLevel,
    RemoteStatus, RemoteVersion,
};

/// `AbstractRemoteEntity`.
pub trait Entity {
    fn id(&self) -> Option<&str>;
}

/// `AbstractNamedRemoteEntity`.
pub trait NamedEntity: Entity {
    fn name(&self) -> Option<&str>;
}

/// `AbstractRemoteConstant`: issue types, priorities, statuses, resolutions.
pub trait Constant: NamedEntity {
    fn description(&self) -> Option<&str>;
    fn icon(&self) -> Option<&str>;
}

macro_rules! entity {
    ($($ty:ty),* $(,)?) => {$(
        impl Entity for $ty {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }
    )*};
}

macro_rules! named {
    ($($ty:ty),* $(,)?) => {$(
        entity!($ty);

        impl NamedEntity for $ty {
            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
        }
    )*};
}

macro_rules! constant {
    ($($ty:ty),* $(,)?) => {$(
        named!($ty);

        impl Constant for $ty {
            fn description(&self) -> Option<&str> {
                self.description.as_deref()
            }

            fn icon(&self) -> Option<&str> {
                self.icon.as_deref()
            }
        }
    )*};
}

entity!(RemoteIssue, RemoteAttachment);
named!(
    RemoteComponent,
    RemoteVersion,
    RemoteProject,
    RemoteFilter,
    RemoteField,
    RemoteNamedObject,
    RemoteSecurityLevel,
);
constant!(RemoteIssueType, RemotePriority, RemoteStatus, RemoteResolution);
