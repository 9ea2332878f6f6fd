use reqwest::Client;
use secrecy::Secret;
use std::{sync::Arc, time::Duration};
use tokio::sync::RwLock;

pub mod app_state;
pub mod domain;
pub mod services;
pub mod settings;
pub mod utils;
use app_state::AppState;
use services::{
    rest_client::RestClient,
    tracing_sinks::{LoggingNavigator, TracingNotifier, TracingTelemetrySink},
};

/// Wires the REST backend and the log-based sinks into an [`AppState`].
pub fn get_rest_app_state(
    base_url: &str,
    auth_token: Option<Secret<String>>,
    timeout: Duration,
) -> Result<AppState, reqwest::Error> {
    let http_client = Client::builder().timeout(timeout).build()?;
    let rest_client =
        RestClient::new(base_url.to_owned(), auth_token, http_client);

    Ok(AppState::new(
        Arc::new(RwLock::new(rest_client.clone())),
        Arc::new(rest_client),
        Arc::new(TracingNotifier),
        Arc::new(TracingTelemetrySink),
        Arc::new(LoggingNavigator),
    ))
}
