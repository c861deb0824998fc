//! The service interface.
//!
//! Each entry below declares one remote operation: its wire name, Rust
//! signature, return type, and the faults it may raise. The declaration
//! expands into the [`JiraSoapService`] trait, its implementation on
//! [`JiraSoapClient`], and the descriptor table behind
//! [`operations`](crate::operations).
//!
//! Every operation except `login` takes the session token first.

use std::future::Future;

use chrono::{DateTime, Utc};
use jira_core::entities::{
    RemoteAttachment, RemoteAvatar, RemoteComment, RemoteComponent, RemoteConfiguration,
    RemoteEntity, RemoteField, RemoteFieldValue, RemoteFilter, RemoteGroup, RemoteIssue,
    RemoteIssueType, RemoteNamedObject, RemotePermission, RemotePermissionScheme, RemotePriority,
    RemoteProject, RemoteProjectRole, RemoteProjectRoleActors, RemoteResolution, RemoteRoleActors,
    RemoteScheme, RemoteSecurityLevel, RemoteServerInfo, RemoteStatus, RemoteUser, RemoteVersion,
    RemoteWorklog,
};
use jira_core::{FaultKind, SoapEncode, SoapType};

use crate::client::JiraSoapClient;
use crate::error::SoapError;
use crate::operation::OperationDescriptor;

macro_rules! soap_service {
    ($(
        $(#[$meta:meta])*
        $wire:literal => fn $method:ident($($arg:ident: $aty:ty),* $(,)?) -> $ret:ty,
            raises [$($fault:ident),* $(,)?];
    )*) => {
        /// Remote operations of the JIRA SOAP service.
        ///
        /// Declared faults surface as [`SoapError::Remote`]; see
        /// [`JiraSoapClient::invoke`] for the other error cases.
        pub trait JiraSoapService {
            $(
                $(#[$meta])*
                fn $method(&self $(, $arg: $aty)*)
                    -> impl Future<Output = Result<$ret, SoapError>> + Send;
            )*
        }

        impl JiraSoapService for JiraSoapClient {
            $(
                async fn $method(&self $(, $arg: $aty)*) -> Result<$ret, SoapError> {
                    self.invoke($wire, vec![$(SoapEncode::encode(&$arg)),*]).await
                }
            )*
        }

        pub(crate) fn descriptors() -> Vec<OperationDescriptor> {
            vec![$(
                OperationDescriptor::new(
                    $wire,
                    stringify!($method),
                    vec![$((stringify!($arg), <$aty as SoapType>::xml_type())),*],
                    <$ret as SoapType>::xml_type(),
                    &[$(FaultKind::$fault),*],
                ),
            )*]
        }
    };
}

soap_service! {
    // ── session ────────────────────────────────────────────────────

    /// Authenticate and return a session token.
    "login" => fn login(username: &str, password: &str) -> String,
        raises [Authentication, Remote];
    /// End the session. Returns whether the token was valid.
    "logout" => fn logout(token: &str) -> bool, raises [];
    "getServerInfo" => fn get_server_info(token: &str) -> RemoteServerInfo, raises [];
    /// Global settings: attachments, voting, time tracking, and so on.
    "getConfiguration" => fn get_configuration(token: &str) -> RemoteConfiguration,
        raises [Permission, Authentication, Remote];

    // ── issues ─────────────────────────────────────────────────────

    "getIssue" => fn get_issue(token: &str, issue_key: &str) -> RemoteIssue,
        raises [Permission, Authentication, Remote];
    "getIssueById" => fn get_issue_by_id(token: &str, issue_id: &str) -> RemoteIssue,
        raises [Permission, Authentication, Remote];
    /// Create an issue; the returned copy carries the server-assigned key.
    "createIssue" => fn create_issue(token: &str, issue: &RemoteIssue) -> RemoteIssue,
        raises [Permission, Validation, Authentication, Remote];
    "createIssueWithSecurityLevel" => fn create_issue_with_security_level(
        token: &str,
        issue: &RemoteIssue,
        security_level_id: i64,
    ) -> RemoteIssue, raises [Permission, Validation, Authentication, Remote];
    /// Create a sub-task of `parent_issue_key`.
    "createIssueWithParent" => fn create_issue_with_parent(
        token: &str,
        issue: &RemoteIssue,
        parent_issue_key: &str,
    ) -> RemoteIssue, raises [Permission, Validation, Authentication, Remote];
    "createIssueWithParentWithSecurityLevel" => fn create_issue_with_parent_with_security_level(
        token: &str,
        issue: &RemoteIssue,
        parent_issue_key: &str,
        security_level_id: i64,
    ) -> RemoteIssue, raises [Permission, Validation, Authentication, Remote];
    /// Set the given fields; fields not listed are left unchanged.
    "updateIssue" => fn update_issue(
        token: &str,
        issue_key: &str,
        action_params: &[RemoteFieldValue],
    ) -> RemoteIssue, raises [Remote];
    "deleteIssue" => fn delete_issue(token: &str, issue_key: &str) -> (),
        raises [Permission, Authentication, Remote];
    /// `None` while the issue is unresolved.
    "getResolutionDateById" => fn get_resolution_date_by_id(token: &str, issue_id: i64)
        -> Option<DateTime<Utc>>, raises [Remote];
    "getResolutionDateByKey" => fn get_resolution_date_by_key(token: &str, issue_key: &str)
        -> Option<DateTime<Utc>>, raises [Remote];
    /// Workflow actions available to the caller on this issue.
    "getAvailableActions" => fn get_available_actions(token: &str, issue_key: &str)
        -> Vec<RemoteNamedObject>, raises [Remote];
    "progressWorkflowAction" => fn progress_workflow_action(
        token: &str,
        issue_key: &str,
        action_id_string: &str,
        action_params: &[RemoteFieldValue],
    ) -> RemoteIssue, raises [Remote];
    "getFieldsForAction" => fn get_fields_for_action(
        token: &str,
        issue_key: &str,
        action_id_string: &str,
    ) -> Vec<RemoteField>, raises [Remote];
    "getFieldsForEdit" => fn get_fields_for_edit(token: &str, issue_key: &str)
        -> Vec<RemoteField>, raises [Remote];
    "getFieldsForCreate" => fn get_fields_for_create(
        token: &str,
        project_key: &str,
        issue_type_id: i64,
    ) -> Vec<RemoteField>, raises [Remote];
    /// `None` if the issue has no security level.
    "getSecurityLevel" => fn get_security_level(token: &str, issue_key: &str)
        -> Option<RemoteSecurityLevel>, raises [Permission, Remote];
    "getIssuesFromJqlSearch" => fn get_issues_from_jql_search(
        token: &str,
        jql_search: &str,
        max_num_results: i32,
    ) -> Vec<RemoteIssue>, raises [Remote];
    "getIssuesFromTextSearch" => fn get_issues_from_text_search(token: &str, search_terms: &str)
        -> Vec<RemoteIssue>, raises [Remote];
    "getIssuesFromTextSearchWithLimit" => fn get_issues_from_text_search_with_limit(
        token: &str,
        search_terms: &str,
        offset: i32,
        max_num_results: i32,
    ) -> Vec<RemoteIssue>, raises [Remote];
    "getIssuesFromTextSearchWithProject" => fn get_issues_from_text_search_with_project(
        token: &str,
        project_keys: &[String],
        search_terms: &str,
        max_num_results: i32,
    ) -> Vec<RemoteIssue>, raises [Remote];
    "getIssuesFromFilter" => fn get_issues_from_filter(token: &str, filter_id: &str)
        -> Vec<RemoteIssue>, raises [Remote];
    "getIssuesFromFilterWithLimit" => fn get_issues_from_filter_with_limit(
        token: &str,
        filter_id: &str,
        offset: i32,
        max_num_results: i32,
    ) -> Vec<RemoteIssue>, raises [Remote];
    "getIssueCountForFilter" => fn get_issue_count_for_filter(token: &str, filter_id: &str)
        -> i64, raises [Remote];
    "getAttachmentsFromIssue" => fn get_attachments_from_issue(token: &str, issue_key: &str)
        -> Vec<RemoteAttachment>, raises [Remote];
    /// Attach files given as parallel lists of names and base64 payloads.
    "addBase64EncodedAttachmentsToIssue" => fn add_base64_encoded_attachments_to_issue(
        token: &str,
        issue_key: &str,
        file_names: &[String],
        base64_encoded_attachment_data: &[String],
    ) -> bool, raises [Remote];

    // ── comments ───────────────────────────────────────────────────

    "getComments" => fn get_comments(token: &str, issue_key: &str) -> Vec<RemoteComment>,
        raises [Remote];
    "getComment" => fn get_comment(token: &str, id: i64) -> RemoteComment, raises [Remote];
    "addComment" => fn add_comment(token: &str, issue_key: &str, comment: &RemoteComment) -> (),
        raises [Remote];
    "editComment" => fn edit_comment(token: &str, comment: &RemoteComment) -> RemoteComment,
        raises [Remote];
    "hasPermissionToEditComment" => fn has_permission_to_edit_comment(
        token: &str,
        comment: &RemoteComment,
    ) -> bool, raises [Remote];

    // ── worklogs ───────────────────────────────────────────────────

    "getWorklogs" => fn get_worklogs(token: &str, issue_key: &str) -> Vec<RemoteWorklog>,
        raises [Permission, Validation, Remote];
    "addWorklogAndAutoAdjustRemainingEstimate" => fn add_worklog_and_auto_adjust_remaining_estimate(
        token: &str,
        issue_key: &str,
        worklog: &RemoteWorklog,
    ) -> RemoteWorklog, raises [Permission, Validation, Remote];
    "addWorklogAndRetainRemainingEstimate" => fn add_worklog_and_retain_remaining_estimate(
        token: &str,
        issue_key: &str,
        worklog: &RemoteWorklog,
    ) -> RemoteWorklog, raises [Permission, Validation, Remote];
    /// `new_remaining_estimate` uses duration syntax such as `1d 2h`.
    "addWorklogWithNewRemainingEstimate" => fn add_worklog_with_new_remaining_estimate(
        token: &str,
        issue_key: &str,
        worklog: &RemoteWorklog,
        new_remaining_estimate: &str,
    ) -> RemoteWorklog, raises [Permission, Validation, Remote];
    "updateWorklogAndAutoAdjustRemainingEstimate" => fn update_worklog_and_auto_adjust_remaining_estimate(
        token: &str,
        worklog: &RemoteWorklog,
    ) -> (), raises [Permission, Validation, Remote];
    "updateWorklogAndRetainRemainingEstimate" => fn update_worklog_and_retain_remaining_estimate(
        token: &str,
        worklog: &RemoteWorklog,
    ) -> (), raises [Permission, Validation, Remote];
    "updateWorklogWithNewRemainingEstimate" => fn update_worklog_with_new_remaining_estimate(
        token: &str,
        worklog: &RemoteWorklog,
        new_remaining_estimate: &str,
    ) -> (), raises [Permission, Validation, Remote];
    "deleteWorklogAndAutoAdjustRemainingEstimate" => fn delete_worklog_and_auto_adjust_remaining_estimate(
        token: &str,
        worklog_id: &str,
    ) -> (), raises [Permission, Validation, Remote];
    "deleteWorklogAndRetainRemainingEstimate" => fn delete_worklog_and_retain_remaining_estimate(
        token: &str,
        worklog_id: &str,
    ) -> (), raises [Permission, Validation, Remote];
    "deleteWorklogWithNewRemainingEstimate" => fn delete_worklog_with_new_remaining_estimate(
        token: &str,
        worklog_id: &str,
        new_remaining_estimate: &str,
    ) -> (), raises [Permission, Validation, Remote];
    "hasPermissionToCreateWorklog" => fn has_permission_to_create_worklog(token: &str, issue_key: &str)
        -> bool, raises [Validation, Remote];
    "hasPermissionToUpdateWorklog" => fn has_permission_to_update_worklog(token: &str, worklog_id: &str)
        -> bool, raises [Validation, Remote];
    "hasPermissionToDeleteWorklog" => fn has_permission_to_delete_worklog(token: &str, worklog_id: &str)
        -> bool, raises [Validation, Remote];

    // ── projects ───────────────────────────────────────────────────

    /// All projects visible to the caller, without scheme details.
    "getProjectsNoSchemes" => fn get_projects_no_schemes(token: &str) -> Vec<RemoteProject>,
        raises [Permission, Authentication, Remote];
    "getProjectByKey" => fn get_project_by_key(token: &str, project_key: &str) -> RemoteProject,
        raises [Permission, Authentication, Remote];
    "getProjectById" => fn get_project_by_id(token: &str, project_id: i64) -> RemoteProject,
        raises [Permission, Remote];
    "getProjectWithSchemesById" => fn get_project_with_schemes_by_id(token: &str, project_id: i64)
        -> RemoteProject, raises [Permission, Remote];
    #[allow(clippy::too_many_arguments)]
    "createProject" => fn create_project(
        token: &str,
        key: &str,
        name: &str,
        description: &str,
        url: Option<&str>,
        lead: &str,
        permission_scheme: Option<&RemotePermissionScheme>,
        notification_scheme: Option<&RemoteScheme>,
        issue_security_scheme: Option<&RemoteScheme>,
    ) -> RemoteProject, raises [Permission, Validation, Authentication, Remote];
    "createProjectFromObject" => fn create_project_from_object(token: &str, project: &RemoteProject)
        -> RemoteProject, raises [Permission, Validation, Authentication, Remote];
    "updateProject" => fn update_project(token: &str, project: &RemoteProject) -> RemoteProject,
        raises [Permission, Validation, Authentication, Remote];
    "deleteProject" => fn delete_project(token: &str, project_key: &str) -> (),
        raises [Permission, Authentication, Remote];
    "getVersions" => fn get_versions(token: &str, project_key: &str) -> Vec<RemoteVersion>,
        raises [Remote];
    "addVersion" => fn add_version(token: &str, project_key: &str, version: &RemoteVersion)
        -> RemoteVersion, raises [Remote];
    "releaseVersion" => fn release_version(token: &str, project_key: &str, version: &RemoteVersion)
        -> (), raises [Remote];
    "archiveVersion" => fn archive_version(
        token: &str,
        project_key: &str,
        version_name: &str,
        archive: bool,
    ) -> (), raises [Remote];
    "getComponents" => fn get_components(token: &str, project_key: &str) -> Vec<RemoteComponent>,
        raises [Remote];
    "getSecurityLevels" => fn get_security_levels(token: &str, project_key: &str)
        -> Vec<RemoteSecurityLevel>, raises [Permission, Remote];
    "getProjectAvatars" => fn get_project_avatars(
        token: &str,
        project_key: &str,
        include_system_avatars: bool,
    ) -> Vec<RemoteAvatar>, raises [Permission, Remote];
    /// The project's current avatar.
    "getProjectAvatar" => fn get_project_avatar(token: &str, project_key: &str) -> RemoteAvatar,
        raises [Permission, Remote];
    "setProjectAvatar" => fn set_project_avatar(token: &str, project_key: &str, avatar_id: i64)
        -> (), raises [Permission, Remote];
    /// Upload a new avatar image and make it current.
    "setNewProjectAvatar" => fn set_new_project_avatar(
        token: &str,
        project_key: &str,
        content_type: &str,
        base64_image_data: &str,
    ) -> (), raises [Permission, Remote];
    "deleteProjectAvatar" => fn delete_project_avatar(token: &str, avatar_id: i64) -> (),
        raises [Permission, Remote];

    // ── constants ──────────────────────────────────────────────────

    "getIssueTypes" => fn get_issue_types(token: &str) -> Vec<RemoteIssueType>,
        raises [Permission, Authentication, Remote];
    "getIssueTypesForProject" => fn get_issue_types_for_project(token: &str, project_id: &str)
        -> Vec<RemoteIssueType>, raises [Permission, Authentication, Remote];
    "getSubTaskIssueTypes" => fn get_sub_task_issue_types(token: &str) -> Vec<RemoteIssueType>,
        raises [Permission, Authentication, Remote];
    "getSubTaskIssueTypesForProject" => fn get_sub_task_issue_types_for_project(
        token: &str,
        project_id: &str,
    ) -> Vec<RemoteIssueType>, raises [Permission, Authentication, Remote];
    "getStatuses" => fn get_statuses(token: &str) -> Vec<RemoteStatus>,
        raises [Permission, Authentication, Remote];
    "getPriorities" => fn get_priorities(token: &str) -> Vec<RemotePriority>,
        raises [Permission, Authentication, Remote];
    "getResolutions" => fn get_resolutions(token: &str) -> Vec<RemoteResolution>,
        raises [Permission, Authentication, Remote];
    "getCustomFields" => fn get_custom_fields(token: &str) -> Vec<RemoteField>, raises [Remote];
    "refreshCustomFields" => fn refresh_custom_fields(token: &str) -> (), raises [Remote];

    // ── filters ────────────────────────────────────────────────────

    "getFavouriteFilters" => fn get_favourite_filters(token: &str) -> Vec<RemoteFilter>,
        raises [Remote];
    /// Superseded by `getFavouriteFilters` on newer servers.
    "getSavedFilters" => fn get_saved_filters(token: &str) -> Vec<RemoteFilter>, raises [Remote];

    // ── users and groups ───────────────────────────────────────────

    /// `None` if no such user exists.
    "getUser" => fn get_user(token: &str, username: &str) -> Option<RemoteUser>,
        raises [Permission, Authentication, Remote];
    "createUser" => fn create_user(
        token: &str,
        username: &str,
        password: &str,
        full_name: &str,
        email: &str,
    ) -> RemoteUser, raises [Permission, Validation, Authentication, Remote];
    "deleteUser" => fn delete_user(token: &str, username: &str) -> (),
        raises [Permission, Validation, Authentication, Remote];
    /// `None` if no such group exists.
    "getGroup" => fn get_group(token: &str, group_name: &str) -> Option<RemoteGroup>,
        raises [Permission, Validation, Authentication, Remote];
    "createGroup" => fn create_group(
        token: &str,
        group_name: &str,
        first_user: Option<&RemoteUser>,
    ) -> RemoteGroup, raises [Permission, Validation, Authentication, Remote];
    "updateGroup" => fn update_group(token: &str, group: &RemoteGroup) -> RemoteGroup,
        raises [Permission, Validation, Authentication, Remote];
    /// Delete a group, moving its permissions and comments to `swap_group`.
    "deleteGroup" => fn delete_group(token: &str, group_name: &str, swap_group: Option<&str>)
        -> (), raises [Permission, Validation, Authentication, Remote];
    "addUserToGroup" => fn add_user_to_group(token: &str, group: &RemoteGroup, user: &RemoteUser)
        -> (), raises [Permission, Validation, Authentication, Remote];
    "removeUserFromGroup" => fn remove_user_from_group(
        token: &str,
        group: &RemoteGroup,
        user: &RemoteUser,
    ) -> (), raises [Permission, Validation, Authentication, Remote];

    // ── schemes and permissions ────────────────────────────────────

    "getNotificationSchemes" => fn get_notification_schemes(token: &str) -> Vec<RemoteScheme>,
        raises [Permission, Authentication, Remote];
    "getPermissionSchemes" => fn get_permission_schemes(token: &str)
        -> Vec<RemotePermissionScheme>, raises [Permission, Authentication, Remote];
    "getSecuritySchemes" => fn get_security_schemes(token: &str) -> Vec<RemoteScheme>,
        raises [Permission, Authentication, Remote];
    "getAllPermissions" => fn get_all_permissions(token: &str) -> Vec<RemotePermission>,
        raises [Permission, Authentication, Remote];
    "createPermissionScheme" => fn create_permission_scheme(
        token: &str,
        name: &str,
        description: &str,
    ) -> RemotePermissionScheme, raises [Permission, Validation, Authentication, Remote];
    "deletePermissionScheme" => fn delete_permission_scheme(token: &str, name: &str) -> (),
        raises [Permission, Validation, Authentication, Remote];
    /// Grant `permission` to a user or group within the scheme.
    "addPermissionTo" => fn add_permission_to(
        token: &str,
        permission_scheme: &RemotePermissionScheme,
        permission: &RemotePermission,
        remote_entity: &RemoteEntity,
    ) -> RemotePermissionScheme, raises [Permission, Validation, Authentication, Remote];
    "deletePermissionFrom" => fn delete_permission_from(
        token: &str,
        permission_scheme: &RemotePermissionScheme,
        permission: &RemotePermission,
        remote_entity: &RemoteEntity,
    ) -> RemotePermissionScheme, raises [Permission, Validation, Authentication, Remote];
    "getAssociatedNotificationSchemes" => fn get_associated_notification_schemes(
        token: &str,
        project_role: &RemoteProjectRole,
    ) -> Vec<RemoteScheme>, raises [Authentication, Remote];
    "getAssociatedPermissionSchemes" => fn get_associated_permission_schemes(
        token: &str,
        project_role: &RemoteProjectRole,
    ) -> Vec<RemoteScheme>, raises [Authentication, Remote];

    // ── project roles ──────────────────────────────────────────────

    "getProjectRoles" => fn get_project_roles(token: &str) -> Vec<RemoteProjectRole>,
        raises [Authentication, Remote];
    "getProjectRole" => fn get_project_role(token: &str, id: i64) -> RemoteProjectRole,
        raises [Authentication, Remote];
    "createProjectRole" => fn create_project_role(token: &str, project_role: &RemoteProjectRole)
        -> RemoteProjectRole, raises [Authentication, Remote];
    "updateProjectRole" => fn update_project_role(token: &str, project_role: &RemoteProjectRole)
        -> (), raises [Authentication, Remote];
    "deleteProjectRole" => fn delete_project_role(
        token: &str,
        project_role: &RemoteProjectRole,
        confirm: bool,
    ) -> (), raises [Authentication, Remote];
    "isProjectRoleNameUnique" => fn is_project_role_name_unique(token: &str, name: &str) -> bool,
        raises [Authentication, Remote];
    "getProjectRoleActors" => fn get_project_role_actors(
        token: &str,
        project_role: &RemoteProjectRole,
        project: &RemoteProject,
    ) -> RemoteProjectRoleActors, raises [Authentication, Remote];
    "getDefaultRoleActors" => fn get_default_role_actors(
        token: &str,
        project_role: &RemoteProjectRole,
    ) -> RemoteRoleActors, raises [Authentication, Remote];
    /// `actor_type` is `atlassian-user-role-actor` or `atlassian-group-role-actor`.
    "addActorsToProjectRole" => fn add_actors_to_project_role(
        token: &str,
        actors: &[String],
        project_role: &RemoteProjectRole,
        project: &RemoteProject,
        actor_type: &str,
    ) -> (), raises [Authentication, Remote];
    "removeActorsFromProjectRole" => fn remove_actors_from_project_role(
        token: &str,
        actors: &[String],
        project_role: &RemoteProjectRole,
        project: &RemoteProject,
        actor_type: &str,
    ) -> (), raises [Authentication, Remote];
    "addDefaultActorsToProjectRole" => fn add_default_actors_to_project_role(
        token: &str,
        actors: &[String],
        project_role: &RemoteProjectRole,
        actor_type: &str,
    ) -> (), raises [Authentication, Remote];
    "removeDefaultActorsFromProjectRole" => fn remove_default_actors_from_project_role(
        token: &str,
        actors: &[String],
        project_role: &RemoteProjectRole,
        actor_type: &str,
    ) -> (), raises [Authentication, Remote];
    "removeAllRoleActorsByNameAndType" => fn remove_all_role_actors_by_name_and_type(
        token: &str,
        name: &str,
        actor_type: &str,
    ) -> (), raises [Authentication, Remote];
    "removeAllRoleActorsByProject" => fn remove_all_role_actors_by_project(
        token: &str,
        project: &RemoteProject,
    ) -> (), raises [Authentication, Remote];
}
