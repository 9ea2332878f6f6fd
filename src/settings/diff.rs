use std::collections::HashSet;

use crate::domain::{Member, ProjectId, ProjectState, TelemetryEvent, UserId};

use super::Draft;

/// Field-level changes between a persisted project and an edited draft.
///
/// Every member identifier appears in at most one of `members_added`,
/// `members_removed` and `role_changes`. Empty collections mean "unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDiff {
    pub name: Option<String>,
    pub members_added: Vec<Member>,
    pub members_removed: Vec<Member>,
    pub role_changes: Vec<Member>,
}

impl ProjectDiff {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.members_added.is_empty()
            && self.members_removed.is_empty()
            && self.role_changes.is_empty()
    }

    /// One event per discrete change, in the order name, added, removed,
    /// role changes.
    pub fn telemetry_events(&self, project_id: &ProjectId) -> Vec<TelemetryEvent> {
        let mut events = Vec::new();

        if let Some(name) = &self.name {
            events.push(TelemetryEvent::ProjectRenamed {
                project_id: project_id.clone(),
                name: name.clone(),
            });
        }
        events.extend(self.members_added.iter().map(|member| {
            TelemetryEvent::MemberAdded {
                project_id: project_id.clone(),
                target_user_id: member.id.clone(),
                role: member.role.clone(),
            }
        }));
        events.extend(self.members_removed.iter().map(|member| {
            TelemetryEvent::MemberRemoved {
                project_id: project_id.clone(),
                target_user_id: member.id.clone(),
            }
        }));
        events.extend(self.role_changes.iter().map(|member| {
            TelemetryEvent::MemberRoleChanged {
                project_id: project_id.clone(),
                target_user_id: member.id.clone(),
                role: member.role.clone(),
            }
        }));

        events
    }
}

/// Compares a draft with the baseline it was created from.
///
/// Added and removed members are only looked for when the member count
/// changed, so replacing one member with another in a single edit reports
/// neither.
pub fn compute_diff(baseline: &ProjectState, draft: &Draft) -> ProjectDiff {
    let mut diff = ProjectDiff::default();

    if draft.name != baseline.name {
        diff.name = Some(draft.name.clone());
    }

    if draft.members.len() != baseline.members.len() {
        let baseline_ids = member_ids(&baseline.members);
        let draft_ids = member_ids(&draft.members);

        diff.members_added = draft
            .members
            .iter()
            .filter(|member| !baseline_ids.contains(&member.id))
            .cloned()
            .collect();
        diff.members_removed = baseline
            .members
            .iter()
            .filter(|member| !draft_ids.contains(&member.id))
            .cloned()
            .collect();
    }

    let added_ids = member_ids(&diff.members_added);
    diff.role_changes = draft
        .members
        .iter()
        .filter(|member| !added_ids.contains(&member.id))
        .filter(|member| {
            baseline
                .member(&member.id)
                .is_some_and(|persisted| persisted.role != member.role)
        })
        .cloned()
        .collect();

    diff
}

fn member_ids(members: &[Member]) -> HashSet<&UserId> {
    members.iter().map(|member| &member.id).collect()
}
