use crate::helpers::RestTestApp;
use project_settings::domain::{
    ProjectId, ProjectName, ProjectRelation, ProjectStore, ProjectStoreError,
    Role, UpdateProjectRequest, UserDirectory, UserDirectoryError, UserId,
};
use serde_json::json;
use test_context::test_context;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, ResponseTemplate,
};

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_load_project_with_members(app: &mut RestTestApp) {
    Mock::given(path("/projects/p1"))
        .and(method("GET"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "p1",
                "name": "Ops",
                "type": "team",
                "relations": [
                    {
                        "id": "u1",
                        "firstName": "Nathan",
                        "lastName": "Ops",
                        "email": "nathan@example.com",
                        "role": "project:viewer"
                    },
                    {
                        "id": "u2",
                        "firstName": null,
                        "lastName": null,
                        "email": "not-an-email",
                        "role": "project:admin"
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let project = app
        .rest_client()
        .get_project(&ProjectId::parse("p1").unwrap())
        .await
        .expect("Failed to load project");

    assert_eq!(project.name, "Ops");
    assert_eq!(project.members.len(), 2);
    assert_eq!(project.members[0].role, Some(Role::new("project:viewer")));
    assert_eq!(
        project.members[0].email.as_ref().map(|e| e.as_ref().to_owned()),
        Some("nathan@example.com".to_owned())
    );
    assert_eq!(project.members[1].email, None);
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_map_404_to_project_not_found(app: &mut RestTestApp) {
    Mock::given(path("/projects/missing"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.api_server)
        .await;

    let result = app
        .rest_client()
        .get_project(&ProjectId::parse("missing").unwrap())
        .await;

    assert_eq!(result, Err(ProjectStoreError::ProjectIDNotFound));
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_send_update_payload(app: &mut RestTestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "name": { "type": "string", "minLength": 1, "maxLength": 255 },
        "relations": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "userId": { "type": "string", "minLength": 1 },
              "role": { "type": "string" }
            },
            "required": ["userId"],
            "additionalProperties": false
          }
        }
      },
      "required": ["name", "relations"],
      "additionalProperties": false
    });
    let expected_body = json!({
        "name": "Ops Team",
        "relations": [{ "userId": "u1", "role": "project:editor" }]
    });
    assert!(
        jsonschema::is_valid(&schema, &expected_body),
        "expected body does not match schema"
    );

    Mock::given(path("/projects/p1"))
        .and(method("PATCH"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let request = UpdateProjectRequest {
        name: ProjectName::parse("Ops Team").unwrap(),
        relations: vec![ProjectRelation {
            user_id: UserId::parse("u1").unwrap(),
            role: Some(Role::new("project:editor")),
        }],
    };

    let result = app
        .rest_client()
        .update_project(&ProjectId::parse("p1").unwrap(), &request)
        .await;
    assert_eq!(result, Ok(()));

    let received = app
        .api_server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    let sent: serde_json::Value = received[0].body_json().unwrap();
    assert!(
        jsonschema::is_valid(&schema, &sent),
        "sent body does not match schema"
    );
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_surface_server_errors(app: &mut RestTestApp) {
    Mock::given(path("/projects/p1"))
        .and(method("PATCH"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&app.api_server)
        .await;

    let request = UpdateProjectRequest {
        name: ProjectName::parse("Ops").unwrap(),
        relations: vec![],
    };
    let result = app
        .rest_client()
        .update_project(&ProjectId::parse("p1").unwrap(), &request)
        .await;

    let error = result.expect_err("Expected a server error");
    assert!(matches!(error, ProjectStoreError::UnexpectedError(_)));
    assert!(format!("{:?}", error).contains("boom"));
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_pass_transfer_id_when_deleting(app: &mut RestTestApp) {
    Mock::given(path("/projects/p1"))
        .and(method("DELETE"))
        .and(query_param("transferId", "p2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;

    let result = app
        .rest_client()
        .delete_project(
            &ProjectId::parse("p1").unwrap(),
            Some(&ProjectId::parse("p2").unwrap()),
        )
        .await;

    assert_eq!(result, Ok(()));
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_list_available_projects(app: &mut RestTestApp) {
    Mock::given(path("/projects/my-projects"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "p1", "name": "Ops", "type": "team" },
                { "id": "p9", "name": null, "type": "personal" }
            ]
        })))
        .mount(&app.api_server)
        .await;

    let projects = app
        .rest_client()
        .get_available_projects()
        .await
        .expect("Failed to list projects");

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ops", ""]);
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_list_directory_users(app: &mut RestTestApp) {
    Mock::given(path("/users"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "u1",
                    "firstName": "Nathan",
                    "lastName": "Ops",
                    "email": "nathan@example.com"
                },
                { "id": "u2", "firstName": null, "lastName": null, "email": null }
            ]
        })))
        .mount(&app.api_server)
        .await;

    let users = app
        .rest_client()
        .list_users()
        .await
        .expect("Failed to list users");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].first_name.as_deref(), Some("Nathan"));
    assert_eq!(users[1].email, None);
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_report_missing_transfer_target(app: &mut RestTestApp) {
    Mock::given(path("/projects/p1"))
        .and(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&app.api_server)
        .await;
    Mock::given(path("/projects/p1"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": "p1", "name": "Ops", "relations": [] }
        })))
        .mount(&app.api_server)
        .await;

    let result = app
        .rest_client()
        .delete_project(
            &ProjectId::parse("p1").unwrap(),
            Some(&ProjectId::parse("gone").unwrap()),
        )
        .await;

    assert_eq!(result, Err(ProjectStoreError::TransferIDNotFound));
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_report_missing_project_when_deleting(app: &mut RestTestApp) {
    Mock::given(path("/projects/p1"))
        .and(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.api_server)
        .await;
    Mock::given(path("/projects/p1"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.api_server)
        .await;

    let rest_client = app.rest_client();
    let p1 = ProjectId::parse("p1").unwrap();

    assert_eq!(
        rest_client.clone().delete_project(&p1, None).await,
        Err(ProjectStoreError::ProjectIDNotFound)
    );
    assert_eq!(
        rest_client
            .clone()
            .delete_project(&p1, Some(&ProjectId::parse("p2").unwrap()))
            .await,
        Err(ProjectStoreError::ProjectIDNotFound)
    );
}

#[test_context(RestTestApp)]
#[tokio::test]
async fn should_surface_user_directory_errors(app: &mut RestTestApp) {
    Mock::given(path("/users"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&app.api_server)
        .await;

    let error = app
        .rest_client()
        .list_users()
        .await
        .expect_err("Expected a server error");

    assert!(matches!(error, UserDirectoryError::UnexpectedError(_)));
    assert!(format!("{:?}", error).contains("maintenance"));
}
