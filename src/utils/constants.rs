use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref PROJECTS_API_BASE_URL: String = load_or_default(
        env::PROJECTS_API_BASE_URL_ENV_VAR,
        DEFAULT_PROJECTS_API_BASE_URL
    );
    pub static ref PROJECTS_API_TOKEN: Option<Secret<String>> =
        set_api_token();
}

fn load_env() {
    dotenv().ok();
}

fn set_api_token() -> Option<Secret<String>> {
    load_env();
    std_env::var(env::PROJECTS_API_TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.is_empty())
        .map(Secret::new)
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const PROJECTS_API_BASE_URL_ENV_VAR: &str = "PROJECTS_API_BASE_URL";
    pub const PROJECTS_API_TOKEN_ENV_VAR: &str = "PROJECTS_API_TOKEN";
}

pub const DEFAULT_PROJECTS_API_BASE_URL: &str = "http://localhost:5678/rest";

pub mod prod {
    pub mod rest_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub mod rest_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}

pub mod messages {
    pub const SAVE_ERROR_TITLE: &str =
        "An error occurred while saving the project";
    pub const DELETE_ERROR_TITLE: &str =
        "An error occurred while deleting the project";
    pub const LOAD_PROJECTS_ERROR_TITLE: &str =
        "An error occurred while loading projects";

    pub fn project_saved(name: &str) -> String {
        format!("Project {name} saved successfully")
    }

    pub fn project_deleted(name: &str) -> String {
        format!("Project {name} deleted")
    }
}
