use super::{
    ProjectId, ProjectState, ProjectSummary, UpdateProjectRequest, User,
};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait ProjectStore {
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectState, ProjectStoreError>;
    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        request: &UpdateProjectRequest,
    ) -> Result<(), ProjectStoreError>;
    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
        transfer_id: Option<&ProjectId>,
    ) -> Result<(), ProjectStoreError>;
    async fn get_available_projects(
        &self,
    ) -> Result<Vec<ProjectSummary>, ProjectStoreError>;
}

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("Project ID not found")]
    ProjectIDNotFound,
    #[error("Transfer project ID not found")]
    TransferIDNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ProjectStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ProjectIDNotFound, Self::ProjectIDNotFound)
                | (Self::TransferIDNotFound, Self::TransferIDNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait UserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError>;
}

#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserDirectoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
