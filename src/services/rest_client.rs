use color_eyre::eyre::{eyre, Report};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{
    Email, Member, ProjectId, ProjectState, ProjectStore, ProjectStoreError,
    ProjectSummary, Role, UpdateProjectRequest, User, UserDirectory,
    UserDirectoryError, UserId,
};

/// Client for the backend REST API, serving both projects and the user
/// directory.
#[derive(Clone)]
pub struct RestClient {
    http_client: Client,
    base_url: String,
    auth_token: Option<Secret<String>>,
}

impl RestClient {
    pub fn new(
        base_url: String,
        auth_token: Option<Secret<String>>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            auth_token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let builder = self.http_client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    id: ProjectId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    relations: Vec<RelationResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelationResponse {
    id: UserId,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
}

#[derive(Debug, Deserialize)]
struct ProjectSummaryResponse {
    id: ProjectId,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserResponse {
    id: UserId,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

impl From<ProjectResponse> for ProjectState {
    fn from(response: ProjectResponse) -> Self {
        let members = response
            .relations
            .into_iter()
            .map(|relation| Member {
                id: relation.id,
                first_name: relation.first_name,
                last_name: relation.last_name,
                email: parse_email(relation.email),
                role: relation.role,
            })
            .collect();
        ProjectState::new(response.id, response.name.unwrap_or_default(), members)
    }
}

impl From<UserResponse> for User {
    fn from(response: UserResponse) -> Self {
        User::new(
            response.id,
            response.first_name,
            response.last_name,
            parse_email(response.email),
        )
    }
}

// Emails are display-only, a malformed one is dropped rather than failing
// the whole response.
fn parse_email(email: Option<String>) -> Option<Email> {
    email.and_then(|email| match Email::parse(&email) {
        Ok(email) => Some(email),
        Err(e) => {
            tracing::debug!("Ignoring member email: {e}");
            None
        }
    })
}

#[derive(Debug)]
enum ResponseError {
    NotFound,
    Unexpected(Report),
}

impl From<reqwest::Error> for ResponseError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unexpected(eyre!(e))
    }
}

impl From<ResponseError> for ProjectStoreError {
    fn from(e: ResponseError) -> Self {
        match e {
            ResponseError::NotFound => Self::ProjectIDNotFound,
            ResponseError::Unexpected(report) => Self::UnexpectedError(report),
        }
    }
}

impl From<ResponseError> for UserDirectoryError {
    fn from(e: ResponseError) -> Self {
        match e {
            ResponseError::NotFound => {
                Self::UnexpectedError(eyre!("User directory endpoint not found"))
            }
            ResponseError::Unexpected(report) => Self::UnexpectedError(report),
        }
    }
}

async fn check_response(response: Response) -> Result<Response, ResponseError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ResponseError::NotFound),
        status if status.is_success() => Ok(response),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(ResponseError::Unexpected(eyre!(
                "Request failed with status {status}: {body}"
            )))
        }
    }
}

#[async_trait::async_trait]
impl ProjectStore for RestClient {
    #[tracing::instrument(name = "Getting project from REST API", skip_all)]
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectState, ProjectStoreError> {
        let response = self
            .request(Method::GET, &format!("/projects/{project_id}"))
            .send()
            .await
            .map_err(ResponseError::from)?;

        let body: DataResponse<ProjectResponse> = check_response(response)
            .await?
            .json()
            .await
            .map_err(ResponseError::from)?;

        Ok(body.data.into())
    }

    #[tracing::instrument(name = "Updating project through REST API", skip_all)]
    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        request: &UpdateProjectRequest,
    ) -> Result<(), ProjectStoreError> {
        let response = self
            .request(Method::PATCH, &format!("/projects/{project_id}"))
            .json(request)
            .send()
            .await
            .map_err(ResponseError::from)?;

        check_response(response).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Deleting project through REST API", skip_all)]
    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
        transfer_id: Option<&ProjectId>,
    ) -> Result<(), ProjectStoreError> {
        let mut builder =
            self.request(Method::DELETE, &format!("/projects/{project_id}"));
        if let Some(transfer_id) = transfer_id {
            builder = builder.query(&[("transferId", transfer_id.as_ref())]);
        }
        let response = builder.send().await.map_err(ResponseError::from)?;

        match check_response(response).await {
            Ok(_) => Ok(()),
            // The backend answers 404 for either project; the source still
            // existing means the transfer target is the missing one.
            Err(ResponseError::NotFound) if transfer_id.is_some() => {
                match self.get_project(project_id).await {
                    Ok(_) => Err(ProjectStoreError::TransferIDNotFound),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    #[tracing::instrument(
        name = "Getting available projects from REST API",
        skip_all
    )]
    async fn get_available_projects(
        &self,
    ) -> Result<Vec<ProjectSummary>, ProjectStoreError> {
        let response = self
            .request(Method::GET, "/projects/my-projects")
            .send()
            .await
            .map_err(ResponseError::from)?;

        let body: DataResponse<Vec<ProjectSummaryResponse>> =
            check_response(response)
                .await?
                .json()
                .await
                .map_err(ResponseError::from)?;

        Ok(body
            .data
            .into_iter()
            .map(|project| {
                ProjectSummary::new(project.id, project.name.unwrap_or_default())
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl UserDirectory for RestClient {
    #[tracing::instrument(name = "Listing users from REST API", skip_all)]
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        let response = self
            .request(Method::GET, "/users")
            .send()
            .await
            .map_err(ResponseError::from)?;

        let body: DataResponse<Vec<UserResponse>> = check_response(response)
            .await?
            .json()
            .await
            .map_err(ResponseError::from)?;

        Ok(body.data.into_iter().map(User::from).collect())
    }
}
