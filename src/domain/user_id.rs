use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a user, and therefore of a project member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::new(
                "User ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(id.to_owned()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[test]
fn test_valid_ids() {
    let valid_ids = ["u1", "5e90ca28-e1ad-4795-a190-089959c16e0b"];
    for valid_id in valid_ids {
        let parsed = UserId::parse(valid_id).expect(valid_id);
        assert_eq!(
            parsed.as_ref(),
            valid_id,
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    for invalid_id in ["", "   "] {
        let error = UserId::parse(invalid_id).expect_err(invalid_id);
        assert_eq!(error.as_ref(), "User ID cannot be empty");
    }
}

#[test]
fn test_default_ids_are_unique() {
    assert_ne!(UserId::default(), UserId::default());
}
