//! End-to-end flows of the directory client against a mock users API.

use std::time::Duration;

use serde_json::{Value, json};
use userdir_business::{
    DELETE_FAILED, DirectoryConfig, LOAD_FAILED, Mode, SAVE_FAILED, UserDirectoryClient, UserId,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

const USERS: &str = "/sgu-api/users";

struct TestContext {
    server: MockServer,
    client: UserDirectoryClient,
}

impl TestContext {
    async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let server = MockServer::start().await;
        let addr = server.address();
        let config = DirectoryConfig::new(addr.ip().to_string(), addr.port(), "/sgu-api");
        let client = UserDirectoryClient::from_config(&config);

        Self { server, client }
    }

    /// Answers the next `times` list requests with `users`.
    async fn mock_list(&self, users: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(USERS))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    fn fill_form(&mut self, name: &str, email: &str, phone: &str) {
        let form = self.client.form_mut();
        form.name = name.to_owned();
        form.email = email.to_owned();
        form.phone_number = phone.to_owned();
    }
}

fn user(id: i64, name: &str, email: &str, phone: &str) -> Value {
    json!({ "id": id, "name": name, "email": email, "phoneNumber": phone })
}

#[tokio::test]
async fn load_all_mirrors_the_server_collection() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(
        json!([user(1, "A", "a@x.com", "1"), user(2, "B", "b@x.com", "2")]),
        1,
    )
    .await;

    ctx.client.load_all().await;

    let state = ctx.client.state();
    assert_eq!(state.users().len(), 2);
    assert_eq!(state.users()[1].phone_number, "2");
    assert_eq!(state.error(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn failed_load_keeps_collection_and_reports() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;
    ctx.client.load_all().await;

    Mock::given(method("GET"))
        .and(path(USERS))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ctx.server)
        .await;
    ctx.client.load_all().await;

    let state = ctx.client.state();
    assert_eq!(state.users().len(), 1);
    assert_eq!(state.error(), Some(LOAD_FAILED));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn unreachable_server_reports_load_failure() {
    let ctx = TestContext::new().await;
    let addr = ctx.server.address();
    let config = DirectoryConfig::new(addr.ip().to_string(), addr.port(), "/sgu-api");
    drop(ctx);

    let mut client = UserDirectoryClient::from_config(&config);
    client.load_all().await;

    assert!(client.state().users().is_empty());
    assert_eq!(client.state().error(), Some(LOAD_FAILED));
}

#[tokio::test]
async fn create_posts_the_form_then_refetches() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([]), 1).await;
    ctx.client.load_all().await;
    assert!(ctx.client.state().users().is_empty());

    Mock::given(method("POST"))
        .and(path(USERS))
        .and(body_json(
            json!({ "name": "A", "email": "a@x.com", "phoneNumber": "1" }),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(user(1, "A", "a@x.com", "1")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;

    ctx.fill_form("A", "a@x.com", "1");
    assert!(ctx.client.submit().await);

    let state = ctx.client.state();
    assert_eq!(state.users().len(), 1);
    assert_eq!(state.users()[0].name, "A");
    assert!(state.form().is_blank());
    assert_eq!(state.mode(), Mode::Create);
}

#[tokio::test]
async fn update_puts_to_the_edit_target_and_leaves_edit_mode() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;
    ctx.client.load_all().await;

    Mock::given(method("PUT"))
        .and(path(format!("{USERS}/1")))
        .and(body_json(
            json!({ "name": "A2", "email": "a2@x.com", "phoneNumber": "9" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(user(1, "A2", "a2@x.com", "9")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_list(json!([user(1, "A2", "a2@x.com", "9")]), 1).await;

    assert!(ctx.client.select_for_edit(UserId(1)));
    assert_eq!(ctx.client.state().form().email, "a@x.com");
    ctx.fill_form("A2", "a2@x.com", "9");
    assert!(ctx.client.submit().await);

    let state = ctx.client.state();
    let updated = state.user(UserId(1)).unwrap();
    assert_eq!(updated.name, "A2");
    assert_eq!(updated.email, "a2@x.com");
    assert_eq!(updated.phone_number, "9");
    assert_eq!(state.mode(), Mode::Create);
    assert!(state.form().is_blank());
}

#[tokio::test]
async fn failed_save_keeps_form_and_skips_refetch() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([]), 1).await;
    ctx.client.load_all().await;

    Mock::given(method("POST"))
        .and(path(USERS))
        .respond_with(ResponseTemplate::new(400))
        .mount(&ctx.server)
        .await;
    // Any further list request would be a refetch.
    Mock::given(method("GET"))
        .and(path(USERS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&ctx.server)
        .await;

    ctx.fill_form("A", "a@x.com", "1");
    assert!(ctx.client.submit().await);

    let state = ctx.client.state();
    assert_eq!(state.error(), Some(SAVE_FAILED));
    assert_eq!(state.form().name, "A");
}

#[tokio::test]
async fn blank_field_is_rejected_without_a_request() {
    let mut ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&ctx.server)
        .await;

    ctx.fill_form("A", "", "1");
    assert!(!ctx.client.submit().await);

    assert_eq!(ctx.client.state().error(), Some("Email is required"));
    assert_eq!(ctx.client.state().form().name, "A");
}

#[tokio::test]
async fn confirmed_delete_removes_the_record() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;
    ctx.client.load_all().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{USERS}/1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_list(json!([]), 1).await;

    assert!(ctx.client.remove(UserId(1), &|_: UserId| true).await);

    assert!(ctx.client.state().users().is_empty());
    assert_eq!(ctx.client.state().error(), None);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;
    ctx.client.load_all().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let before = ctx.client.state().users().to_vec();
    assert!(!ctx.client.remove(UserId(1), &|_: UserId| false).await);

    assert_eq!(ctx.client.state().users(), before.as_slice());
    assert_eq!(ctx.client.state().error(), None);
}

#[tokio::test]
async fn failed_delete_is_reported_after_the_refetch() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 2).await;
    ctx.client.load_all().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{USERS}/1")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&ctx.server)
        .await;

    assert!(ctx.client.remove(UserId(1), &|_: UserId| true).await);

    let state = ctx.client.state();
    assert_eq!(state.users().len(), 1);
    assert_eq!(state.error(), Some(DELETE_FAILED));
}

#[tokio::test]
async fn deleting_the_record_being_edited_keeps_edit_mode() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;
    ctx.client.load_all().await;
    ctx.client.select_for_edit(UserId(1));
    ctx.client.form_mut().name = "half-typed".to_owned();

    Mock::given(method("DELETE"))
        .and(path(format!("{USERS}/1")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.server)
        .await;
    ctx.mock_list(json!([]), 1).await;

    ctx.client.remove(UserId(1), &|_: UserId| true).await;

    let state = ctx.client.state();
    assert!(state.users().is_empty());
    assert_eq!(state.mode(), Mode::Editing(UserId(1)));
    assert_eq!(state.form().name, "half-typed");
}

#[tokio::test]
async fn full_session_load_edit_delete() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;
    ctx.client.load_all().await;
    assert_eq!(ctx.client.state().users().len(), 1);

    Mock::given(method("PUT"))
        .and(path(format!("{USERS}/1")))
        .and(body_json(
            json!({ "name": "B", "email": "a@x.com", "phoneNumber": "1" }),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_list(json!([user(1, "B", "a@x.com", "1")]), 1).await;
    assert!(ctx.client.select_for_edit(UserId(1)));
    ctx.client.form_mut().name = "B".to_owned();
    ctx.client.submit().await;
    assert_eq!(ctx.client.state().users()[0].name, "B");
    assert_eq!(ctx.client.state().mode(), Mode::Create);

    Mock::given(method("DELETE"))
        .and(path(format!("{USERS}/1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_list(json!([]), 1).await;
    ctx.client.remove(UserId(1), &|_: UserId| true).await;

    assert!(ctx.client.state().users().is_empty());
    assert_eq!(ctx.client.state().error(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn spawned_load_is_applied_on_poll() {
    let mut ctx = TestContext::new().await;
    ctx.mock_list(json!([user(1, "A", "a@x.com", "1")]), 1).await;

    let handle = tokio::runtime::Handle::current();
    ctx.client.spawn_load_all(&handle);

    for _ in 0..100 {
        ctx.client.poll();
        if !ctx.client.state().users().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(ctx.client.state().users().len(), 1);
    assert!(!ctx.client.state().is_loading());
}

#[tokio::test(flavor = "multi_thread")]
async fn declined_confirmation_does_not_spawn_a_delete() {
    let mut ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let handle = tokio::runtime::Handle::current();
    ctx.client.request_delete(UserId(1));
    assert_eq!(ctx.client.state().pending_delete(), Some(UserId(1)));

    assert!(!ctx.client.resolve_delete(false, &handle));
    assert_eq!(ctx.client.state().pending_delete(), None);
}
