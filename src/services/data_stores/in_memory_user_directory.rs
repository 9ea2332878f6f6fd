use crate::domain::{User, UserDirectory, UserDirectoryError};

#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self.users.clone())
    }
}
