use serde::{Deserialize, Serialize};

use super::{Email, UserId};

/// Entry in the user directory, i.e. someone who could be added to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Email>,
}

impl User {
    pub fn new(
        id: UserId,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<Email>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }
}
