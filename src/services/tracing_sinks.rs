use serde_json::{Map, Value};
use std::error::Error;

use crate::{
    domain::{Navigator, NotificationSink, TelemetrySink},
    utils::tracing::error_message,
};

/// Notification sink for headless use: messages go to the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn show_success(&self, title: &str) {
        tracing::info!(target: "notifications", "{title}");
    }

    fn show_error(&self, error: &(dyn Error + 'static), title: &str) {
        tracing::error!(
            target: "notifications",
            error = %error_message(error),
            "{title}"
        );
    }
}

#[derive(Debug, Default)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn track(&self, event_name: &str, properties: Map<String, Value>) {
        let properties = Value::Object(properties);
        tracing::info!(
            target: "telemetry",
            event = event_name,
            properties = %properties,
            "Tracked event"
        );
    }
}

#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_home(&self) {
        tracing::info!(target: "navigation", "Navigating to home view");
    }
}
