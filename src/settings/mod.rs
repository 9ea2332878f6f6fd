mod deletion;
mod diff;
mod draft;
mod project_settings;

pub use deletion::*;
pub use diff::*;
pub use draft::*;
pub use project_settings::*;
