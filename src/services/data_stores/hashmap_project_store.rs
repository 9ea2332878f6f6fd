use crate::domain::{
    Member, ProjectId, ProjectState, ProjectStore, ProjectStoreError,
    ProjectSummary, UpdateProjectRequest,
};
use std::collections::HashMap;

#[derive(Default)]
pub struct HashmapProjectStore {
    projects: HashMap<ProjectId, ProjectState>,
}

impl HashmapProjectStore {
    pub fn add_project(&mut self, project: ProjectState) {
        self.projects.insert(project.id.clone(), project);
    }
}

#[async_trait::async_trait]
impl ProjectStore for HashmapProjectStore {
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectState, ProjectStoreError> {
        match self.projects.get(project_id) {
            Some(project) => Ok(project.clone()),
            None => Err(ProjectStoreError::ProjectIDNotFound),
        }
    }

    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        request: &UpdateProjectRequest,
    ) -> Result<(), ProjectStoreError> {
        let project = self
            .projects
            .get_mut(project_id)
            .ok_or(ProjectStoreError::ProjectIDNotFound)?;

        // Relations only carry ids and roles; keep the display attributes
        // of people who were already members.
        let members = request
            .relations
            .iter()
            .map(|relation| {
                let mut member = project
                    .member(&relation.user_id)
                    .cloned()
                    .unwrap_or_else(|| {
                        Member::new(relation.user_id.clone(), None)
                    });
                member.role = relation.role.clone();
                member
            })
            .collect();

        project.name = request.name.as_ref().to_owned();
        project.members = members;
        Ok(())
    }

    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
        transfer_id: Option<&ProjectId>,
    ) -> Result<(), ProjectStoreError> {
        if !self.projects.contains_key(project_id) {
            return Err(ProjectStoreError::ProjectIDNotFound);
        }
        if let Some(transfer_id) = transfer_id {
            if transfer_id == project_id
                || !self.projects.contains_key(transfer_id)
            {
                return Err(ProjectStoreError::TransferIDNotFound);
            }
        }

        self.projects.remove(project_id);
        Ok(())
    }

    async fn get_available_projects(
        &self,
    ) -> Result<Vec<ProjectSummary>, ProjectStoreError> {
        let mut projects: Vec<ProjectSummary> =
            self.projects.values().map(ProjectSummary::from).collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }
}
