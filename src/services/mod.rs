pub mod data_stores;
pub mod rest_client;
pub mod tracing_sinks;
