use tracing::Level;

use crate::{
    domain::{ProjectId, ProjectSummary, ValidationError},
    utils::{constants::messages, tracing::log_error_chain},
};

use super::ProjectSettings;

/// Confirmation dialog for deleting a project, with the projects its
/// resources may be moved to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDialog {
    pub open: bool,
    pub transfer_candidates: Vec<ProjectSummary>,
}

#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    Invalid(ValidationError),
    /// The store refused the deletion; the dialog stays open.
    Failed,
}

impl ProjectSettings {
    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete_dialog
    }

    /// Fetches the current list of transfer targets and opens the dialog.
    /// Returns whether the dialog was opened.
    #[tracing::instrument(name = "Requesting project deletion", skip_all)]
    pub async fn request_delete(&mut self) -> bool {
        let projects = self
            .state
            .project_store
            .read()
            .await
            .get_available_projects()
            .await;

        match projects {
            Ok(projects) => {
                self.delete_dialog = DeleteDialog {
                    open: true,
                    transfer_candidates: projects
                        .into_iter()
                        .filter(|project| project.id != self.baseline.id)
                        .collect(),
                };
                true
            }
            Err(e) => {
                log_error_chain(&e, Level::WARN);
                self.state
                    .notifications
                    .show_error(&e, messages::LOAD_PROJECTS_ERROR_TITLE);
                false
            }
        }
    }

    #[tracing::instrument(
        name = "Confirming project deletion",
        skip_all,
        fields(project_id = %self.baseline.id)
    )]
    pub async fn confirm_delete(
        &mut self,
        transfer_target: Option<ProjectId>,
    ) -> DeleteOutcome {
        if transfer_target.as_ref() == Some(&self.baseline.id) {
            let e = ValidationError::new(
                "Cannot transfer resources to the project being deleted"
                    .to_string(),
            );
            log_error_chain(&e, Level::DEBUG);
            return DeleteOutcome::Invalid(e);
        }

        let result = self
            .state
            .project_store
            .write()
            .await
            .delete_project(&self.baseline.id, transfer_target.as_ref())
            .await;

        match result {
            Ok(()) => {
                self.state.navigator.navigate_home();
                self.state
                    .notifications
                    .show_success(&messages::project_deleted(&self.baseline.name));
                self.delete_dialog = DeleteDialog::default();
                DeleteOutcome::Deleted
            }
            Err(e) => {
                log_error_chain(&e, Level::WARN);
                self.state
                    .notifications
                    .show_error(&e, messages::DELETE_ERROR_TITLE);
                DeleteOutcome::Failed
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = DeleteDialog::default();
    }
}
