use std::convert::Infallible;
use std::str::FromStr;

use crate::domain::{
    Member, ProjectName, ProjectRelation, ProjectRoles, ProjectState, Role,
    UpdateProjectRequest, User, UserId, ValidationError,
};

/// Working copy of a project, edited freely until it is submitted or
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub members: Vec<Member>,
}

/// Action picked from a member's role menu.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleAction {
    Remove,
    Assign(Role),
}

impl FromStr for RoleAction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "remove" => Self::Remove,
            role => Self::Assign(Role::new(role)),
        })
    }
}

impl Draft {
    pub fn from_baseline(baseline: &ProjectState) -> Self {
        Self {
            name: baseline.name.clone(),
            members: baseline.members.clone(),
        }
    }

    pub fn is_member(&self, id: &UserId) -> bool {
        self.members.iter().any(|member| &member.id == id)
    }

    /// Adds `user` with the first licensed role, or no role at all when
    /// the plan licenses none. Returns `false` if the user is already a
    /// member.
    pub fn add_member(&mut self, user: User, roles: &ProjectRoles) -> bool {
        if self.is_member(&user.id) {
            return false;
        }
        self.members
            .push(Member::from_user(user, roles.default_for_new_member()));
        true
    }

    /// Returns `false` when no member has `member_id`; the draft is left
    /// untouched in that case.
    pub fn apply_role_action(
        &mut self,
        member_id: &UserId,
        action: RoleAction,
    ) -> bool {
        match action {
            RoleAction::Remove => {
                let before = self.members.len();
                self.members.retain(|member| &member.id != member_id);
                self.members.len() != before
            }
            RoleAction::Assign(role) => {
                match self
                    .members
                    .iter_mut()
                    .find(|member| &member.id == member_id)
                {
                    Some(member) => {
                        member.role = Some(role);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    pub fn relations(&self) -> Vec<ProjectRelation> {
        self.members.iter().map(ProjectRelation::from).collect()
    }

    pub fn to_update_request(
        &self,
    ) -> Result<UpdateProjectRequest, ValidationError> {
        Ok(UpdateProjectRequest {
            name: ProjectName::parse(&self.name)?,
            relations: self.relations(),
        })
    }
}
