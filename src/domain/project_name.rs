use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match name.trim().chars().count() {
            0 => Err(ValidationError::new(
                "Project name cannot be empty".to_string(),
            )),
            _ if name.chars().count() > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.to_owned())),
        }
    }
}

impl AsRef<String> for ProjectName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_project_names() {
    let valid_names = ["a".to_string(), "Ops Team".to_string(), "a".repeat(255)];
    for valid_name in valid_names.iter() {
        let parsed = ProjectName::parse(valid_name)
            .expect("Failed to parse valid project name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_empty_project_names() {
    for empty_name in ["", "   "] {
        let result = ProjectName::parse(empty_name);
        assert_eq!(
            result.unwrap_err().as_ref(),
            "Project name cannot be empty"
        );
    }
}

#[test]
fn test_long_project_names() {
    let long_name = "a".repeat(256);
    let result = ProjectName::parse(&long_name);
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 255 characters"
    );
}
