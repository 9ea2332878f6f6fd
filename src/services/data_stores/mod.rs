mod hashmap_project_store;
mod in_memory_user_directory;

pub use hashmap_project_store::*;
pub use in_memory_user_directory::*;
