use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Contact address shown next to a member. Display-only: membership
/// comparisons never look at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !validator::validate_email(s) {
            return Err(ValidationError::new(format!(
                "Invalid email address: {s}"
            )));
        }

        Ok(Self(s.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
