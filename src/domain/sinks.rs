use serde_json::{Map, Value};
use std::error::Error;

/// User-facing toast/notification surface.
pub trait NotificationSink {
    fn show_success(&self, title: &str);
    fn show_error(&self, error: &(dyn Error + 'static), title: &str);
}

pub trait TelemetrySink {
    fn track(&self, event_name: &str, properties: Map<String, Value>);
}

pub trait Navigator {
    fn navigate_home(&self);
}
