use tracing::Level;

use crate::{
    app_state::AppState,
    domain::{
        Member, ProjectId, ProjectRoles, ProjectState, ProjectStoreError, Role,
        User, UserDirectoryError, UserId, ValidationError,
    },
    utils::{constants::messages, tracing::log_error_chain},
};

use super::{compute_diff, DeleteDialog, Draft, ProjectDiff, RoleAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsStatus {
    /// The draft matches the last confirmed state.
    Clean,
    Dirty,
    /// An update is in flight; further submits are refused.
    Submitting,
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing to save, or a save is already running.
    Skipped,
    Invalid(ValidationError),
    Saved(ProjectDiff),
    /// The store rejected the update. The edits are kept.
    Failed,
}

/// Settings view of one project: the confirmed baseline, the draft being
/// edited and the submission state.
pub struct ProjectSettings {
    pub(super) state: AppState,
    roles: ProjectRoles,
    pub(super) baseline: ProjectState,
    draft: Draft,
    status: SettingsStatus,
    pub(super) delete_dialog: DeleteDialog,
}

impl ProjectSettings {
    pub fn new(
        state: AppState,
        roles: ProjectRoles,
        baseline: ProjectState,
    ) -> Self {
        let draft = Draft::from_baseline(&baseline);
        Self {
            state,
            roles,
            baseline,
            draft,
            status: SettingsStatus::Clean,
            delete_dialog: DeleteDialog::default(),
        }
    }

    #[tracing::instrument(name = "Loading project settings", skip_all)]
    pub async fn load(
        state: AppState,
        roles: ProjectRoles,
        project_id: &ProjectId,
    ) -> Result<Self, ProjectStoreError> {
        let baseline = state
            .project_store
            .read()
            .await
            .get_project(project_id)
            .await?;
        Ok(Self::new(state, roles, baseline))
    }

    pub fn baseline(&self) -> &ProjectState {
        &self.baseline
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> SettingsStatus {
        self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.status != SettingsStatus::Clean
    }

    pub fn roles(&self) -> &ProjectRoles {
        &self.roles
    }

    pub fn display_role<'a>(&'a self, member: &'a Member) -> Option<&'a Role> {
        self.roles.display_role(member)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status == SettingsStatus::Dirty
            && self.draft.to_update_request().is_ok()
    }

    /// Swaps in a different project (or a refreshed copy of the same one),
    /// discarding local edits.
    pub fn on_project_changed(&mut self, project: ProjectState) {
        tracing::debug!(project_id = %project.id, "Resetting project settings");
        self.draft = Draft::from_baseline(&project);
        self.baseline = project;
        self.status = SettingsStatus::Clean;
        self.delete_dialog = DeleteDialog::default();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.mark_dirty();
    }

    /// Directory users who are not members of the draft yet.
    #[tracing::instrument(name = "Listing candidate users", skip_all)]
    pub async fn candidate_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        let users = self.state.user_directory.list_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| !self.draft.is_member(&user.id))
            .collect())
    }

    pub fn add_member(&mut self, user: User) -> bool {
        let added = self.draft.add_member(user, &self.roles);
        if added {
            self.mark_dirty();
        }
        added
    }

    /// Removes a member or changes their role. Unknown members are ignored.
    pub fn apply_role_action(
        &mut self,
        member_id: &UserId,
        action: RoleAction,
    ) -> bool {
        if let RoleAction::Assign(role) = &action {
            if !self.roles.is_licensed(role) {
                tracing::warn!(
                    %member_id,
                    %role,
                    "Assigning a role the current plan does not license"
                );
            }
        }
        let applied = self.draft.apply_role_action(member_id, action);
        if applied {
            self.mark_dirty();
        } else {
            tracing::debug!(%member_id, "Role action for unknown member ignored");
        }
        applied
    }

    pub fn cancel(&mut self) {
        if self.status != SettingsStatus::Dirty {
            return;
        }
        self.draft = Draft::from_baseline(&self.baseline);
        self.status = SettingsStatus::Clean;
    }

    #[tracing::instrument(
        name = "Submitting project settings",
        skip_all,
        fields(project_id = %self.baseline.id)
    )]
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.status != SettingsStatus::Dirty {
            tracing::debug!(status = ?self.status, "Nothing to submit");
            return SubmitOutcome::Skipped;
        }

        let request = match self.draft.to_update_request() {
            Ok(request) => request,
            Err(e) => {
                log_error_chain(&e, Level::DEBUG);
                return SubmitOutcome::Invalid(e);
            }
        };
        let diff = compute_diff(&self.baseline, &self.draft);

        self.status = SettingsStatus::Submitting;
        let result = self
            .state
            .project_store
            .write()
            .await
            .update_project(&self.baseline.id, &request)
            .await;

        match result {
            Ok(()) => {
                self.baseline = ProjectState::new(
                    self.baseline.id.clone(),
                    self.draft.name.clone(),
                    self.draft.members.clone(),
                );
                self.status = SettingsStatus::Clean;

                for event in diff.telemetry_events(&self.baseline.id) {
                    self.state.telemetry.track(event.name(), event.properties());
                }
                self.state
                    .notifications
                    .show_success(&messages::project_saved(&self.baseline.name));

                SubmitOutcome::Saved(diff)
            }
            Err(e) => {
                self.status = SettingsStatus::Dirty;
                log_error_chain(&e, Level::WARN);
                self.state
                    .notifications
                    .show_error(&e, messages::SAVE_ERROR_TITLE);

                SubmitOutcome::Failed
            }
        }
    }

    fn mark_dirty(&mut self) {
        self.status = SettingsStatus::Dirty;
    }
}
