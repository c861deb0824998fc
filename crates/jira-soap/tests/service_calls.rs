//! One call per operation family against a mock endpoint.

mod common;

use chrono::{TimeZone, Utc};
use jira_core::entities::{
    RemoteComment, RemoteComponent, RemoteEntity, RemoteGroup, RemoteIssue, RemotePriority,
    RemoteProject, RemoteProjectRole, RemoteTimeInfo, RemoteUser,
};
use jira_core::{DecodeError, SoapEncode};
use jira_soap::{JiraSession, JiraSoapClient, JiraSoapService, SoapError};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, envelope, mount, response};

const ISSUE_MULTI_REF: &str = r##"<multiRef id="id0" soapenc:root="0" soapenv:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/" xsi:type="ns2:RemoteIssue" xmlns:ns2="http://beans.soap.rpc.jira.atlassian.com">
  <id xsi:type="xsd:string">10010</id>
  <affectsVersions soapenc:arrayType="ns2:RemoteVersion[0]" xsi:type="soapenc:Array"></affectsVersions>
  <assignee xsi:type="xsd:string">fred</assignee>
  <attachmentNames soapenc:arrayType="xsd:string[0]" xsi:type="soapenc:Array"></attachmentNames>
  <components soapenc:arrayType="ns2:RemoteComponent[1]" xsi:type="soapenc:Array"><components href="#id1"/></components>
  <created xsi:type="xsd:dateTime">2024-03-01T10:15:30.000Z</created>
  <customFieldValues xsi:nil="true"/>
  <description xsi:type="xsd:string">Steps &amp; details</description>
  <key xsi:type="xsd:string">ABC-1</key>
  <priority xsi:type="xsd:string">3</priority>
  <project xsi:type="xsd:string">ABC</project>
  <status xsi:type="xsd:string">1</status>
  <summary xsi:type="xsd:string">Login page fails</summary>
  <type xsi:type="xsd:string">1</type>
  <votes xsi:type="xsd:long">3</votes>
</multiRef>
<multiRef id="id1" soapenc:root="0" soapenv:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/" xsi:type="ns3:RemoteComponent" xmlns:ns3="http://beans.soap.rpc.jira.atlassian.com">
  <id xsi:type="xsd:string">10000</id>
  <name xsi:type="xsd:string">Backend</name>
</multiRef>"##;

fn expected_issue() -> RemoteIssue {
    RemoteIssue {
        id: Some("10010".into()),
        affects_versions: Some(Vec::new()),
        assignee: Some("fred".into()),
        attachment_names: Some(Vec::new()),
        components: Some(vec![RemoteComponent {
            id: Some("10000".into()),
            name: Some("Backend".into()),
        }]),
        created: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap()),
        description: Some("Steps & details".into()),
        key: Some("ABC-1".into()),
        priority: Some("3".into()),
        project: Some("ABC".into()),
        status: Some("1".into()),
        summary: Some("Login page fails".into()),
        issue_type: Some("1".into()),
        votes: Some(3),
        ..RemoteIssue::default()
    }
}

fn short_issue(id: &str, key: &str) -> String {
    format!(
        r#"<multiRef id="{id}" soapenc:root="0" xsi:type="ns2:RemoteIssue"><key xsi:type="xsd:string">{key}</key></multiRef>"#
    )
}

// ── session ────────────────────────────────────────────────────────

#[tokio::test]
async fn login_and_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains(
            r#"<in0 xsi:type="xsd:string">fred</in0><in1 xsi:type="xsd:string">s3cret</in1>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            envelope(&response("login", r#"<loginReturn xsi:type="xsd:string">tok-123</loginReturn>"#)),
            "text/xml",
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "logout",
        200,
        envelope(&response("logout", r#"<logoutReturn xsi:type="xsd:boolean">true</logoutReturn>"#)),
    )
    .await;

    let session = JiraSession::login(client_for(&server), "fred", "s3cret")
        .await
        .unwrap();
    assert_eq!(session.token(), "tok-123");
    assert!(session.logout().await.unwrap());
}

#[tokio::test]
async fn get_server_info_follows_nested_refs() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getServerInfo",
        200,
        envelope(&format!(
            r##"{}<multiRef id="id0" soapenc:root="0" xsi:type="ns2:RemoteServerInfo">
                <baseUrl xsi:type="xsd:string">https://jira.example.com</baseUrl>
                <buildNumber xsi:type="xsd:string">466</buildNumber>
                <serverTime href="#id1"/>
                <version xsi:type="xsd:string">4.4.5</version>
            </multiRef>
            <multiRef id="id1" soapenc:root="0" xsi:type="ns3:RemoteTimeInfo">
                <serverTime xsi:type="xsd:string">2024-03-01 10:15:30</serverTime>
                <timeZoneId xsi:type="xsd:string">Europe/Berlin</timeZoneId>
            </multiRef>"##,
            response("getServerInfo", r##"<getServerInfoReturn href="#id0"/>"##)
        )),
    )
    .await;

    let info = client_for(&server).get_server_info("tok").await.unwrap();
    assert_eq!(info.version.as_deref(), Some("4.4.5"));
    assert_eq!(info.build_number.as_deref(), Some("466"));
    assert_eq!(
        info.server_time,
        Some(RemoteTimeInfo {
            server_time: Some("2024-03-01 10:15:30".into()),
            time_zone_id: Some("Europe/Berlin".into()),
        })
    );
}

// ── issues ─────────────────────────────────────────────────────────

#[tokio::test]
async fn get_issue_decodes_multi_refs() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getIssue",
        200,
        envelope(&format!(
            r##"{}{ISSUE_MULTI_REF}"##,
            response("getIssue", r##"<getIssueReturn href="#id0"/>"##)
        )),
    )
    .await;

    let issue = client_for(&server).get_issue("tok", "ABC-1").await.unwrap();
    assert_eq!(issue, expected_issue());
}

#[tokio::test]
async fn jql_search_keeps_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("<ns1:getIssuesFromJqlSearch "))
        .and(body_string_contains(
            r#"<in1 xsi:type="xsd:string">project = ABC &amp; status = Open</in1><in2 xsi:type="xsd:int">50</in2>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            envelope(&format!(
                r##"{}{}{}{}"##,
                response(
                    "getIssuesFromJqlSearch",
                    r##"<getIssuesFromJqlSearchReturn soapenc:arrayType="ns2:RemoteIssue[3]" xsi:type="soapenc:Array"><getIssuesFromJqlSearchReturn href="#id2"/><getIssuesFromJqlSearchReturn href="#id0"/><getIssuesFromJqlSearchReturn href="#id1"/></getIssuesFromJqlSearchReturn>"##,
                ),
                short_issue("id0", "ABC-2"),
                short_issue("id1", "ABC-3"),
                short_issue("id2", "ABC-1"),
            )),
            "text/xml",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let issues = client_for(&server)
        .get_issues_from_jql_search("tok", "project = ABC & status = Open", 50)
        .await
        .unwrap();
    let keys: Vec<_> = issues.iter().filter_map(|issue| issue.key.as_deref()).collect();
    assert_eq!(keys, vec!["ABC-1", "ABC-2", "ABC-3"]);
}

#[tokio::test]
async fn create_issue_sends_the_bean() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains(
            r#"<in1 xsi:type="tns1:RemoteIssue"><id xsi:nil="true"/>"#,
        ))
        .and(body_string_contains(
            r#"<summary xsi:type="xsd:string">Login page fails</summary>"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            envelope(&format!(
                r##"{}{ISSUE_MULTI_REF}"##,
                response("createIssue", r##"<createIssueReturn href="#id0"/>"##)
            )),
            "text/xml",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let draft = RemoteIssue {
        project: Some("ABC".into()),
        summary: Some("Login page fails".into()),
        issue_type: Some("1".into()),
        ..RemoteIssue::default()
    };
    let created = client_for(&server).create_issue("tok", &draft).await.unwrap();
    assert_eq!(created.key.as_deref(), Some("ABC-1"));
}

#[tokio::test]
async fn scalar_and_nillable_returns() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getIssueCountForFilter",
        200,
        envelope(&response(
            "getIssueCountForFilter",
            r#"<getIssueCountForFilterReturn xsi:type="xsd:long">42</getIssueCountForFilterReturn>"#,
        )),
    )
    .await;
    mount(
        &server,
        "getResolutionDateByKey",
        200,
        envelope(&response(
            "getResolutionDateByKey",
            r#"<getResolutionDateByKeyReturn xsi:nil="true"/>"#,
        )),
    )
    .await;
    let client = client_for(&server);

    assert_eq!(client.get_issue_count_for_filter("tok", "10100").await.unwrap(), 42);
    assert_eq!(client.get_resolution_date_by_key("tok", "ABC-1").await.unwrap(), None);
}

#[tokio::test]
async fn nil_array_returns_are_empty() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getAvailableActions",
        200,
        envelope(&response(
            "getAvailableActions",
            r#"<getAvailableActionsReturn xsi:type="soapenc:Array" xsi:nil="true"/>"#,
        )),
    )
    .await;
    mount(
        &server,
        "getFieldsForAction",
        200,
        envelope(&response(
            "getFieldsForAction",
            r#"<getFieldsForActionReturn soapenc:arrayType="ns2:RemoteField[2]" xsi:type="soapenc:Array">
                <item xsi:nil="true"/>
                <item xsi:type="ns2:RemoteField"><id xsi:type="xsd:string">resolution</id><name xsi:type="xsd:string">Resolution</name></item>
            </getFieldsForActionReturn>"#,
        )),
    )
    .await;
    let client = client_for(&server);

    let actions = client.get_available_actions("tok", "ABC-1").await.unwrap();
    assert!(actions.is_empty());

    let fields = client.get_fields_for_action("tok", "ABC-1", "5").await.unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].id.as_deref(), Some("resolution"));
}

#[tokio::test]
async fn type_mismatch_is_reported_not_swallowed() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getIssue",
        200,
        envelope(&response(
            "getIssue",
            r#"<getIssueReturn xsi:type="ns2:RemoteComment"><body>hi</body></getIssueReturn>"#,
        )),
    )
    .await;

    let err = client_for(&server).get_issue("tok", "ABC-1").await.unwrap_err();
    let SoapError::Decode(decode) = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert!(decode.to_string().contains("getIssueReturn"));
    assert!(matches!(decode.root_cause(), DecodeError::TypeMismatch { .. }));
}

// ── comments ───────────────────────────────────────────────────────

#[tokio::test]
async fn comments_list_and_add() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getComments",
        200,
        envelope(&format!(
            r##"{}<multiRef id="id0" soapenc:root="0" xsi:type="ns2:RemoteComment">
                <author xsi:type="xsd:string">fred</author>
                <body xsi:type="xsd:string">Looks good</body>
                <created xsi:type="xsd:dateTime">2024-03-02T08:00:00.000Z</created>
                <groupLevel xsi:nil="true"/>
                <id xsi:type="xsd:string">10200</id>
            </multiRef>"##,
            response(
                "getComments",
                r##"<getCommentsReturn soapenc:arrayType="ns2:RemoteComment[1]" xsi:type="soapenc:Array"><getCommentsReturn href="#id0"/></getCommentsReturn>"##,
            )
        )),
    )
    .await;
    mount(&server, "addComment", 200, envelope(&response("addComment", ""))).await;
    let client = client_for(&server);

    let comments = client.get_comments("tok", "ABC-1").await.unwrap();
    assert_eq!(comments, vec![RemoteComment {
        author: Some("fred".into()),
        body: Some("Looks good".into()),
        created: Some(Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap()),
        id: Some("10200".into()),
        ..RemoteComment::default()
    }]);

    let reply = RemoteComment {
        body: Some("Thanks".into()),
        ..RemoteComment::default()
    };
    client.add_comment("tok", "ABC-1", &reply).await.unwrap();
}

// ── worklogs ───────────────────────────────────────────────────────

#[tokio::test]
async fn worklogs_carry_time_spent() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getWorklogs",
        200,
        envelope(&response(
            "getWorklogs",
            r#"<getWorklogsReturn soapenc:arrayType="ns2:RemoteWorklog[1]" xsi:type="soapenc:Array">
                <getWorklogsReturn xsi:type="ns2:RemoteWorklog">
                    <author xsi:type="xsd:string">fred</author>
                    <id xsi:type="xsd:string">10300</id>
                    <timeSpent xsi:type="xsd:string">1h 30m</timeSpent>
                    <timeSpentInSeconds xsi:type="xsd:long">5400</timeSpentInSeconds>
                </getWorklogsReturn>
            </getWorklogsReturn>"#,
        )),
    )
    .await;

    let worklogs = client_for(&server).get_worklogs("tok", "ABC-1").await.unwrap();
    assert_eq!(worklogs.len(), 1);
    assert_eq!(worklogs[0].time_spent.as_deref(), Some("1h 30m"));
    assert_eq!(worklogs[0].time_spent_in_seconds, 5400);
}

// ── projects and constants ─────────────────────────────────────────

#[tokio::test]
async fn projects_and_priorities() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getProjectsNoSchemes",
        200,
        envelope(&response(
            "getProjectsNoSchemes",
            r#"<getProjectsNoSchemesReturn soapenc:arrayType="ns2:RemoteProject[1]" xsi:type="soapenc:Array">
                <getProjectsNoSchemesReturn xsi:type="ns2:RemoteProject">
                    <id xsi:type="xsd:string">10000</id>
                    <name xsi:type="xsd:string">Alpha</name>
                    <issueSecurityScheme xsi:nil="true"/>
                    <key xsi:type="xsd:string">ABC</key>
                    <lead xsi:type="xsd:string">fred</lead>
                    <notificationScheme xsi:nil="true"/>
                    <permissionScheme xsi:nil="true"/>
                </getProjectsNoSchemesReturn>
            </getProjectsNoSchemesReturn>"#,
        )),
    )
    .await;
    mount(
        &server,
        "getPriorities",
        200,
        envelope(&response(
            "getPriorities",
            r#"<getPrioritiesReturn soapenc:arrayType="ns2:RemotePriority[1]" xsi:type="soapenc:Array">
                <getPrioritiesReturn xsi:type="ns2:RemotePriority">
                    <id xsi:type="xsd:string">1</id>
                    <name xsi:type="xsd:string">Blocker</name>
                    <icon xsi:type="xsd:string">/images/icons/priority_blocker.gif</icon>
                    <color xsi:type="xsd:string">#cc0000</color>
                </getPrioritiesReturn>
            </getPrioritiesReturn>"#,
        )),
    )
    .await;
    let client = client_for(&server);

    let projects = client.get_projects_no_schemes("tok").await.unwrap();
    assert_eq!(projects, vec![RemoteProject {
        id: Some("10000".into()),
        name: Some("Alpha".into()),
        key: Some("ABC".into()),
        lead: Some("fred".into()),
        ..RemoteProject::default()
    }]);

    let priorities = client.get_priorities("tok").await.unwrap();
    assert_eq!(priorities, vec![RemotePriority {
        id: Some("1".into()),
        name: Some("Blocker".into()),
        icon: Some("/images/icons/priority_blocker.gif".into()),
        color: Some("#cc0000".into()),
        ..RemotePriority::default()
    }]);
}

// ── filters ────────────────────────────────────────────────────────

#[tokio::test]
async fn favourite_filters() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getFavouriteFilters",
        200,
        envelope(&response(
            "getFavouriteFilters",
            r#"<getFavouriteFiltersReturn soapenc:arrayType="ns2:RemoteFilter[1]" xsi:type="soapenc:Array">
                <getFavouriteFiltersReturn xsi:type="ns2:RemoteFilter">
                    <id xsi:type="xsd:string">10100</id>
                    <name xsi:type="xsd:string">My open issues</name>
                    <author xsi:type="xsd:string">fred</author>
                </getFavouriteFiltersReturn>
            </getFavouriteFiltersReturn>"#,
        )),
    )
    .await;

    let filters = client_for(&server).get_favourite_filters("tok").await.unwrap();
    assert_eq!(filters[0].name.as_deref(), Some("My open issues"));
    assert_eq!(filters[0].author.as_deref(), Some("fred"));
}

// ── users and groups ───────────────────────────────────────────────

#[tokio::test]
async fn missing_user_is_none_and_group_lists_members() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getUser",
        200,
        envelope(&response("getUser", r#"<getUserReturn xsi:nil="true"/>"#)),
    )
    .await;
    mount(
        &server,
        "getGroup",
        200,
        envelope(&response(
            "getGroup",
            r#"<getGroupReturn xsi:type="ns2:RemoteGroup">
                <name xsi:type="xsd:string">jira-developers</name>
                <users soapenc:arrayType="ns2:RemoteUser[1]" xsi:type="soapenc:Array">
                    <users xsi:type="ns2:RemoteUser">
                        <email xsi:type="xsd:string">fred@example.com</email>
                        <fullname xsi:type="xsd:string">Fred Flintstone</fullname>
                        <name xsi:type="xsd:string">fred</name>
                    </users>
                </users>
            </getGroupReturn>"#,
        )),
    )
    .await;
    let client = client_for(&server);

    assert_eq!(client.get_user("tok", "nobody").await.unwrap(), None);
    let group = client.get_group("tok", "jira-developers").await.unwrap();
    assert_eq!(
        group,
        Some(RemoteGroup {
            name: Some("jira-developers".into()),
            users: Some(vec![RemoteUser {
                email: Some("fred@example.com".into()),
                fullname: Some("Fred Flintstone".into()),
                name: Some("fred".into()),
            }]),
        })
    );
}

// ── schemes and permissions ────────────────────────────────────────

#[tokio::test]
async fn permission_schemes_hold_polymorphic_entities() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getPermissionSchemes",
        200,
        envelope(&response(
            "getPermissionSchemes",
            r#"<getPermissionSchemesReturn soapenc:arrayType="ns2:RemotePermissionScheme[1]" xsi:type="soapenc:Array">
                <getPermissionSchemesReturn xsi:type="ns2:RemotePermissionScheme">
                    <id xsi:type="xsd:long">0</id>
                    <name xsi:type="xsd:string">Default Permission Scheme</name>
                    <permissionMappings soapenc:arrayType="ns2:RemotePermissionMapping[1]" xsi:type="soapenc:Array">
                        <permissionMappings xsi:type="ns2:RemotePermissionMapping">
                            <permission xsi:type="ns2:RemotePermission">
                                <name xsi:type="xsd:string">Browse Projects</name>
                                <permission xsi:type="xsd:long">10</permission>
                            </permission>
                            <remoteEntities soapenc:arrayType="ns2:RemoteEntity[2]" xsi:type="soapenc:Array">
                                <remoteEntities xsi:type="ns2:RemoteGroup"><name xsi:type="xsd:string">jira-users</name></remoteEntities>
                                <remoteEntities xsi:type="ns2:RemoteUser"><name xsi:type="xsd:string">fred</name></remoteEntities>
                            </remoteEntities>
                        </permissionMappings>
                    </permissionMappings>
                </getPermissionSchemesReturn>
            </getPermissionSchemesReturn>"#,
        )),
    )
    .await;

    let schemes = client_for(&server).get_permission_schemes("tok").await.unwrap();
    let mapping = &schemes[0].permission_mappings.as_ref().unwrap()[0];
    assert_eq!(mapping.permission.as_ref().unwrap().permission, Some(10));
    let entities = mapping.remote_entities.as_ref().unwrap();
    assert!(matches!(&entities[0], RemoteEntity::Group(group) if group.name.as_deref() == Some("jira-users")));
    assert!(matches!(&entities[1], RemoteEntity::User(user) if user.name.as_deref() == Some("fred")));
}

#[tokio::test]
async fn add_permission_sends_the_concrete_entity_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains(r#"<in3 xsi:type="tns1:RemoteUser">"#))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            envelope(&response(
                "addPermissionTo",
                r#"<addPermissionToReturn xsi:type="ns2:RemotePermissionScheme"><name xsi:type="xsd:string">Custom</name></addPermissionToReturn>"#,
            )),
            "text/xml",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let entity = RemoteEntity::from(RemoteUser {
        name: Some("fred".into()),
        ..RemoteUser::default()
    });
    let scheme = client_for(&server)
        .add_permission_to("tok", &Default::default(), &Default::default(), &entity)
        .await
        .unwrap();
    assert_eq!(scheme.name.as_deref(), Some("Custom"));
}

// ── project roles ──────────────────────────────────────────────────

#[tokio::test]
async fn project_role_actors() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getProjectRoleActors",
        200,
        envelope(&response(
            "getProjectRoleActors",
            r#"<getProjectRoleActorsReturn xsi:type="ns2:RemoteProjectRoleActors">
                <project xsi:type="ns2:RemoteProject"><key xsi:type="xsd:string">ABC</key></project>
                <projectRole xsi:type="ns2:RemoteProjectRole"><id xsi:type="xsd:long">10002</id><name xsi:type="xsd:string">Administrators</name></projectRole>
                <roleActors soapenc:arrayType="ns2:RemoteRoleActor[1]" xsi:type="soapenc:Array">
                    <roleActors xsi:type="ns2:RemoteRoleActor">
                        <descriptor xsi:type="xsd:string">jira-administrators</descriptor>
                        <parameter xsi:type="xsd:string">jira-administrators</parameter>
                        <type xsi:type="xsd:string">atlassian-group-role-actor</type>
                    </roleActors>
                </roleActors>
                <users xsi:nil="true"/>
            </getProjectRoleActorsReturn>"#,
        )),
    )
    .await;

    let role = RemoteProjectRole {
        id: Some(10002),
        ..RemoteProjectRole::default()
    };
    let project = RemoteProject {
        key: Some("ABC".into()),
        ..RemoteProject::default()
    };
    let actors = client_for(&server)
        .get_project_role_actors("tok", &role, &project)
        .await
        .unwrap();
    assert_eq!(actors.project.unwrap().key.as_deref(), Some("ABC"));
    assert_eq!(actors.project_role.unwrap().name.as_deref(), Some("Administrators"));
    let role_actors = actors.role_actors.unwrap();
    assert_eq!(role_actors[0].actor_type.as_deref(), Some("atlassian-group-role-actor"));
    assert_eq!(actors.users, None);
}

// ── local and transport errors ─────────────────────────────────────

#[tokio::test]
async fn non_soap_error_pages_become_api_errors() {
    let server = MockServer::start().await;
    mount(
        &server,
        "getIssue",
        503,
        String::from("<html><body>Service Unavailable</body></html>"),
    )
    .await;

    let err = client_for(&server).get_issue("tok", "ABC-1").await.unwrap_err();
    assert!(matches!(err, SoapError::Api { status: 503, .. }), "{err:?}");
}

#[tokio::test]
async fn unknown_operation_and_arity_are_local_errors() {
    let client = JiraSoapClient::with_endpoint("http://127.0.0.1:9/unused").unwrap();

    let err = client.invoke::<String>("getNothing", Vec::new()).await.unwrap_err();
    assert!(matches!(err, SoapError::UnknownOperation(name) if name == "getNothing"));

    let err = client
        .invoke::<RemoteIssue>("getIssue", vec!["tok".encode()])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SoapError::ArityMismatch { expected: 2, actual: 1, .. }
    ));
}
