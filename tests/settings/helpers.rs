use project_settings::{
    app_state::AppState,
    domain::{
        Member, Navigator, NotificationSink, ProjectId, ProjectRoles,
        ProjectState, ProjectStore, ProjectStoreError, ProjectSummary, Role,
        RoleInfo, TelemetrySink, UpdateProjectRequest, User, UserId,
    },
    services::{
        data_stores::{HashmapProjectStore, InMemoryUserDirectory},
        rest_client::RestClient,
    },
    settings::ProjectSettings,
    utils::{constants::test, tracing::error_message},
};
use color_eyre::eyre::eyre;
use serde_json::{Map, Value};
use std::{
    error::Error,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use wiremock::MockServer;

/// Project store double: an in-memory store that records update calls and
/// can be told to fail.
#[derive(Default)]
pub struct TestProjectStore {
    pub inner: HashmapProjectStore,
    pub updates: Vec<(ProjectId, UpdateProjectRequest)>,
    pub deletes: Vec<(ProjectId, Option<ProjectId>)>,
    pub fail_updates: bool,
    pub fail_deletes: bool,
    pub fail_listing: bool,
}

fn store_failure() -> ProjectStoreError {
    ProjectStoreError::UnexpectedError(eyre!("backend unavailable"))
}

#[async_trait::async_trait]
impl ProjectStore for TestProjectStore {
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectState, ProjectStoreError> {
        self.inner.get_project(project_id).await
    }

    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        request: &UpdateProjectRequest,
    ) -> Result<(), ProjectStoreError> {
        self.updates.push((project_id.clone(), request.clone()));
        if self.fail_updates {
            return Err(store_failure());
        }
        self.inner.update_project(project_id, request).await
    }

    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
        transfer_id: Option<&ProjectId>,
    ) -> Result<(), ProjectStoreError> {
        self.deletes.push((project_id.clone(), transfer_id.cloned()));
        if self.fail_deletes {
            return Err(store_failure());
        }
        self.inner.delete_project(project_id, transfer_id).await
    }

    async fn get_available_projects(
        &self,
    ) -> Result<Vec<ProjectSummary>, ProjectStoreError> {
        if self.fail_listing {
            return Err(store_failure());
        }
        self.inner.get_available_projects().await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Error { title: String, message: String },
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl NotificationSink for RecordingNotifier {
    fn show_success(&self, title: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push(Notification::Success(title.to_owned()));
    }

    fn show_error(&self, error: &(dyn Error + 'static), title: &str) {
        self.notifications.lock().unwrap().push(Notification::Error {
            title: title.to_owned(),
            message: error_message(error),
        });
    }
}

#[derive(Default)]
pub struct RecordingTelemetry {
    pub events: Mutex<Vec<(String, Value)>>,
}

impl TelemetrySink for RecordingTelemetry {
    fn track(&self, event_name: &str, properties: Map<String, Value>) {
        self.events
            .lock()
            .unwrap()
            .push((event_name.to_owned(), Value::Object(properties)));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub home_visits: AtomicUsize,
}

impl Navigator for RecordingNavigator {
    fn navigate_home(&self) {
        self.home_visits.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct TestApp {
    pub app_state: AppState,
    pub project_store: Arc<RwLock<TestProjectStore>>,
    pub notifier: Arc<RecordingNotifier>,
    pub telemetry: Arc<RecordingTelemetry>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestApp {
    pub async fn new() -> Self {
        let mut store = TestProjectStore::default();
        store.inner.add_project(ops_project());
        store.inner.add_project(ProjectState::new(
            ProjectId::parse("p2").unwrap(),
            "Billing".to_owned(),
            vec![],
        ));
        let project_store = Arc::new(RwLock::new(store));

        let user_directory = Arc::new(InMemoryUserDirectory::new(vec![
            user("u1", "Nathan"),
            user("u2", "Ada"),
            user("u3", "Grace"),
        ]));
        let notifier = Arc::new(RecordingNotifier::default());
        let telemetry = Arc::new(RecordingTelemetry::default());
        let navigator = Arc::new(RecordingNavigator::default());

        let app_state = AppState::new(
            project_store.clone(),
            user_directory,
            notifier.clone(),
            telemetry.clone(),
            navigator.clone(),
        );

        Self {
            app_state,
            project_store,
            notifier,
            telemetry,
            navigator,
        }
    }

    pub async fn settings(&self) -> ProjectSettings {
        self.settings_with_roles(licensed_roles()).await
    }

    pub async fn settings_with_roles(
        &self,
        roles: ProjectRoles,
    ) -> ProjectSettings {
        ProjectSettings::load(
            self.app_state.clone(),
            roles,
            &ProjectId::parse("p1").unwrap(),
        )
        .await
        .expect("Failed to load project settings")
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifier.notifications.lock().unwrap().clone()
    }

    pub fn telemetry_events(&self) -> Vec<(String, Value)> {
        self.telemetry.events.lock().unwrap().clone()
    }

    pub fn home_visits(&self) -> usize {
        self.navigator.home_visits.load(Ordering::SeqCst)
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

/// Context for the REST adapter tests: a mock backend and a client
/// pointed at it.
pub struct RestTestApp {
    pub api_server: MockServer,
}

impl RestTestApp {
    pub fn rest_client(&self) -> RestClient {
        let http_client = reqwest::Client::builder()
            .timeout(test::rest_client::TIMEOUT)
            .build()
            .unwrap();
        RestClient::new(
            self.api_server.uri(),
            Some(secrecy::Secret::new("test-token".to_owned())),
            http_client,
        )
    }
}

impl AsyncTestContext for RestTestApp {
    async fn setup() -> RestTestApp {
        RestTestApp {
            api_server: MockServer::start().await,
        }
    }

    async fn teardown(self) {}
}

/// `p1`, named "Ops", with `u1` as a viewer.
pub fn ops_project() -> ProjectState {
    ProjectState::new(
        ProjectId::parse("p1").unwrap(),
        "Ops".to_owned(),
        vec![Member::from_user(
            user("u1", "Nathan"),
            Some(Role::new("project:viewer")),
        )],
    )
}

pub fn user(id: &str, first_name: &str) -> User {
    User::new(
        UserId::parse(id).unwrap(),
        Some(first_name.to_owned()),
        None,
        None,
    )
}

pub fn licensed_roles() -> ProjectRoles {
    ProjectRoles::new(vec![
        RoleInfo::new(Role::new("project:admin"), false),
        RoleInfo::new(Role::new("project:editor"), true),
        RoleInfo::new(Role::new("project:viewer"), true),
    ])
}

pub fn unlicensed_roles() -> ProjectRoles {
    ProjectRoles::new(vec![
        RoleInfo::new(Role::new("project:admin"), false),
        RoleInfo::new(Role::new("project:editor"), false),
    ])
}
