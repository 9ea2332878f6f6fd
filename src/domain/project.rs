use serde::{Deserialize, Serialize};

use super::{Member, ProjectId, ProjectName, Role, UserId};

/// Last persisted state of a project, as confirmed by the project store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    pub id: ProjectId,
    pub name: String,
    pub members: Vec<Member>,
}

impl ProjectState {
    pub fn new(id: ProjectId, name: String, members: Vec<Member>) -> Self {
        Self { id, name, members }
    }

    pub fn member(&self, id: &UserId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
}

impl ProjectSummary {
    pub fn new(id: ProjectId, name: String) -> Self {
        Self { id, name }
    }
}

impl From<&ProjectState> for ProjectSummary {
    fn from(project: &ProjectState) -> Self {
        Self::new(project.id.clone(), project.name.clone())
    }
}

/// Membership record sent to the project store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRelation {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl From<&Member> for ProjectRelation {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.id.clone(),
            role: member.role.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: ProjectName,
    pub relations: Vec<ProjectRelation>,
}
