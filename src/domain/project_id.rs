use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        if id.trim().is_empty() {
            return Err(ValidationError::new(
                "Project ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(id.to_owned()))
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[test]
fn test_valid_ids() {
    let valid_id = "5e90ca28-e1ad-4795-a190-089959c16e0b";
    let parsed = ProjectId::parse(valid_id).expect(valid_id);
    assert_eq!(
        parsed.to_string(),
        valid_id,
        "ID does not match expected value"
    );
}

#[test]
fn test_invalid_ids() {
    let result = ProjectId::parse("");
    let error = result.expect_err("empty project ID");
    assert_eq!(error.as_ref(), "Project ID cannot be empty");
}
