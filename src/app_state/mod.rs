use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    Navigator, NotificationSink, ProjectStore, TelemetrySink, UserDirectory,
};
pub type ProjectStoreType = Arc<RwLock<dyn ProjectStore + Send + Sync>>;
pub type UserDirectoryType = Arc<dyn UserDirectory + Send + Sync>;
pub type NotificationSinkType = Arc<dyn NotificationSink + Send + Sync>;
pub type TelemetrySinkType = Arc<dyn TelemetrySink + Send + Sync>;
pub type NavigatorType = Arc<dyn Navigator + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub project_store: ProjectStoreType,
    pub user_directory: UserDirectoryType,
    pub notifications: NotificationSinkType,
    pub telemetry: TelemetrySinkType,
    pub navigator: NavigatorType,
}

impl AppState {
    pub fn new(
        project_store: ProjectStoreType,
        user_directory: UserDirectoryType,
        notifications: NotificationSinkType,
        telemetry: TelemetrySinkType,
        navigator: NavigatorType,
    ) -> Self {
        Self {
            project_store,
            user_directory,
            notifications,
            telemetry,
            navigator,
        }
    }
}
