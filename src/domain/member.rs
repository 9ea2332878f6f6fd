use serde::{Deserialize, Serialize};

use super::{Email, Role, User, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Member {
    pub fn new(id: UserId, role: Option<Role>) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            email: None,
            role,
        }
    }

    pub fn from_user(user: User, role: Option<Role>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role,
        }
    }
}
