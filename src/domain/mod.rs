mod data_stores;
mod email;
mod error;
mod member;
mod project;
mod project_id;
mod project_name;
mod role;
mod sinks;
mod telemetry;
mod user;
mod user_id;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use project::*;
pub use project_id::*;
pub use project_name::*;
pub use role::*;
pub use sinks::*;
pub use telemetry::*;
pub use user::*;
pub use user_id::*;
