use anyhow::bail;
use jira_core::entities::{
    RemoteAttachment, RemoteAvatar, RemoteComment, RemoteComponent, RemoteConfiguration,
    RemoteCustomFieldValue, RemoteEntity, RemoteField, RemoteFieldValue, RemoteFilter,
    RemoteGroup, RemoteIssue, RemoteIssueType, RemoteNamedObject, RemoteNotificationScheme,
    RemotePermission, RemotePermissionMapping, RemotePermissionScheme, RemotePriority,
    RemoteProject, RemoteProjectRole, RemoteProjectRoleActors, RemoteResolution, RemoteRoleActor,
    RemoteRoleActors, RemoteScheme, RemoteSecurityLevel, RemoteServerInfo, RemoteStatus,
    RemoteTimeInfo, RemoteUser, RemoteVersion, RemoteWorklog,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

macro_rules! bean_schema {
    ($name:expr; $($ty:ident),* $(,)?) => {
        match $name {
            $(stringify!($ty) => Some(schema_for!($ty)),)*
            _ => None,
        }
    };
}

fn schema(type_name: &str) -> Option<Schema> {
    bean_schema!(type_name;
        RemoteAttachment, RemoteAvatar, RemoteComment, RemoteComponent, RemoteConfiguration,
        RemoteCustomFieldValue, RemoteEntity, RemoteField, RemoteFieldValue, RemoteFilter,
        RemoteGroup, RemoteIssue, RemoteIssueType, RemoteNamedObject, RemoteNotificationScheme,
        RemotePermission, RemotePermissionMapping, RemotePermissionScheme, RemotePriority,
        RemoteProject, RemoteProjectRole, RemoteProjectRoleActors, RemoteResolution,
        RemoteRoleActor, RemoteRoleActors, RemoteScheme, RemoteSecurityLevel, RemoteServerInfo,
        RemoteStatus, RemoteTimeInfo, RemoteUser, RemoteVersion, RemoteWorklog,
    )
}

/// Handle `jira-soap schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema(&args.type_name) else {
        bail!("unknown bean type `{}`", args.type_name);
    };
    output(&schema, flags.format)
}
