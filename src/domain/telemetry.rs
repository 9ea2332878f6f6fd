use serde_json::{Map, Value};

use super::{ProjectId, Role, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryEvent {
    ProjectRenamed {
        project_id: ProjectId,
        name: String,
    },
    MemberAdded {
        project_id: ProjectId,
        target_user_id: UserId,
        role: Option<Role>,
    },
    MemberRemoved {
        project_id: ProjectId,
        target_user_id: UserId,
    },
    MemberRoleChanged {
        project_id: ProjectId,
        target_user_id: UserId,
        role: Option<Role>,
    },
}

impl TelemetryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProjectRenamed { .. } => "User changed project name",
            Self::MemberAdded { .. } => "User added member to project",
            Self::MemberRemoved { .. } => "User removed member from project",
            Self::MemberRoleChanged { .. } => {
                "User changed member role on project"
            }
        }
    }

    pub fn properties(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        match self {
            Self::ProjectRenamed { project_id, name } => {
                insert_project_id(&mut properties, project_id);
                properties.insert("name".to_owned(), Value::from(name.as_str()));
            }
            Self::MemberAdded {
                project_id,
                target_user_id,
                role,
            }
            | Self::MemberRoleChanged {
                project_id,
                target_user_id,
                role,
            } => {
                insert_project_id(&mut properties, project_id);
                insert_target_user_id(&mut properties, target_user_id);
                if let Some(role) = role {
                    properties
                        .insert("role".to_owned(), Value::from(role.as_ref()));
                }
            }
            Self::MemberRemoved {
                project_id,
                target_user_id,
            } => {
                insert_project_id(&mut properties, project_id);
                insert_target_user_id(&mut properties, target_user_id);
            }
        }
        properties
    }
}

fn insert_project_id(properties: &mut Map<String, Value>, id: &ProjectId) {
    properties.insert("project_id".to_owned(), Value::from(id.as_ref()));
}

fn insert_target_user_id(properties: &mut Map<String, Value>, id: &UserId) {
    properties.insert("target_user_id".to_owned(), Value::from(id.as_ref()));
}
