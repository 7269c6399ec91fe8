//! Shared harness for app-level tests against a mock users API.

use std::time::Duration;

use egui_kittest::Harness;
use serde_json::{Value, json};
use userdir_business::{DirectoryConfig, UserDirectoryClient};
use userdir_ui::DirectoryApp;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERS: &str = "/sgu-api/users";

/// Time to wait for async API responses in tests (milliseconds).
const API_RESPONSE_WAIT_MS: u64 = 25;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, DirectoryApp>,
}

impl<'a> TestCtx<'a> {
    /// Starts the app against a server whose first list request returns `users`.
    pub async fn new_app(users: Value) -> Self {
        let mock_server = setup_mock_server().await;
        mock_list(&mock_server, users, 1).await;
        Self::with_server(mock_server)
    }

    /// Starts the app against a server the caller has already set up.
    pub fn with_server(mock_server: MockServer) -> Self {
        let addr = mock_server.address();
        let config = DirectoryConfig::new(addr.ip().to_string(), addr.port(), "/sgu-api");
        let client = UserDirectoryClient::from_config(&config);
        let runtime = tokio::runtime::Handle::current();

        let app = DirectoryApp::new(client, runtime);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, DirectoryApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, DirectoryApp> {
        &self.harness
    }

    /// Runs frames and gives background requests time to complete.
    pub async fn pump_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(API_RESPONSE_WAIT_MS)).await;
        }
    }
}

pub async fn setup_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// Answers the next `times` list requests with `users`.
pub async fn mock_list(server: &MockServer, users: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(USERS))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .up_to_n_times(times)
        .mount(server)
        .await;
}

pub fn user(id: i64, name: &str, email: &str, phone: &str) -> Value {
    json!({ "id": id, "name": name, "email": email, "phoneNumber": phone })
}
