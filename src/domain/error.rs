use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_validation_error_display() {
    let error = ValidationError::new("Project name cannot be empty".to_owned());
    assert_eq!(error.as_ref(), "Project name cannot be empty");
    assert_eq!(
        error.to_string(),
        "Validation error: Project name cannot be empty"
    );
}
