pub mod constants;
pub mod tracing;
