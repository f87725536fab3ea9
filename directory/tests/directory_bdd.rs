//! Behavioural tests for the people directory.
//!
//! These scenarios drive `DirectoryService` through scripted and loopback
//! HTTP users sources, covering publishing, searching, failure handling and
//! the detail view.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use directory::domain::ports::{TransportError, UsersResponse, UsersSource};
use directory::domain::{
    DecodeError, DirectoryService, HttpError, ImageUrlAssigner, LoadError, UserDetail, UserId,
};
use directory::outbound::dummyjson::DummyJsonHttpSource;
use directory::test_support::{emily_and_hassan, page_body};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use url::Url;

const IMAGE_BASE: &str = "https://ozgrozer.github.io/100k-faces/0/3/";

/// Users source replaying a fixed list of responses, one per call.
struct ScriptedUsersSource {
    responses: Mutex<VecDeque<UsersResponse>>,
}

impl ScriptedUsersSource {
    fn new(responses: impl IntoIterator<Item = UsersResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UsersSource for ScriptedUsersSource {
    async fn fetch_users(&self) -> Result<UsersResponse, TransportError> {
        self.responses
            .lock()
            .expect("responses mutex")
            .pop_front()
            .ok_or_else(|| TransportError::transport("no scripted response left"))
    }
}

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Default, ScenarioState)]
struct DirectoryWorld {
    runtime: Slot<RuntimeHandle>,
    service: Slot<Arc<DirectoryService>>,
    last_result: Slot<Result<usize, LoadError>>,
    detail: Slot<UserDetail>,
}

impl DirectoryWorld {
    fn install(&self, source: Arc<dyn UsersSource>) {
        let runtime = self.runtime();
        let service = DirectoryService::new(source, ImageUrlAssigner::new(IMAGE_BASE, 3101));
        self.runtime.set(runtime);
        self.service.set(Arc::new(service));
    }

    fn runtime(&self) -> RuntimeHandle {
        self.runtime
            .get()
            .unwrap_or_else(|| RuntimeHandle(Arc::new(Runtime::new().expect("create runtime"))))
    }

    fn service(&self) -> Arc<DirectoryService> {
        self.service.get().expect("service should be installed")
    }

    fn last_result(&self) -> Result<usize, LoadError> {
        self.last_result.get().expect("a load should have run")
    }

    fn load(&self) {
        let RuntimeHandle(runtime) = self.runtime();
        let service = self.service();
        let result = runtime.block_on(service.load());
        self.last_result.set(result);
    }

    fn published_names(&self) -> Vec<String> {
        self.service()
            .snapshot()
            .records()
            .iter()
            .map(|record| record.full_name().to_owned())
            .collect()
    }
}

#[fixture]
fn world() -> DirectoryWorld {
    DirectoryWorld::default()
}

fn emily_and_hassan_page() -> UsersResponse {
    UsersResponse::new(200, page_body(emily_and_hassan()))
}

/// Serve `body` with status 200 to every connection on a loopback port.
async fn serve_page(body: Vec<u8>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0_u8; 4096];
            if socket.read(&mut request).await.is_err() {
                continue;
            }
            let mut response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            response.extend_from_slice(&body);
            if socket.write_all(&response).await.is_err() {
                continue;
            }
        }
    });
    Url::parse(&format!("http://{addr}/users?limit=10")).expect("stub url")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a users source answering with Emily Johnson and Hassan Cole")]
fn a_users_source_answering_with_emily_and_hassan(world: &DirectoryWorld) {
    world.install(Arc::new(ScriptedUsersSource::new([emily_and_hassan_page()])));
}

#[given("a users source answering with Emily Johnson and Hassan Cole then status 503")]
fn a_users_source_answering_then_failing(world: &DirectoryWorld) {
    world.install(Arc::new(ScriptedUsersSource::new([
        emily_and_hassan_page(),
        UsersResponse::new(503, r#"{"message":"service unavailable"}"#),
    ])));
}

#[given("a users source answering with a page without users")]
fn a_users_source_answering_without_users(world: &DirectoryWorld) {
    world.install(Arc::new(ScriptedUsersSource::new([UsersResponse::new(
        200,
        r#"{"total":0,"skip":0,"limit":10}"#,
    )])));
}

#[given("a users endpoint over HTTP answering with Emily Johnson and Hassan Cole")]
fn a_users_endpoint_over_http(world: &DirectoryWorld) {
    let RuntimeHandle(runtime) = world.runtime();
    let url = runtime.block_on(serve_page(page_body(emily_and_hassan())));
    let source = DummyJsonHttpSource::new(url, Some(Duration::from_secs(5)))
        .expect("client should build");
    world.runtime.set(RuntimeHandle(runtime));
    world.install(Arc::new(source));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the directory loads")]
fn the_directory_loads(world: &DirectoryWorld) {
    world.load();
}

#[when("the directory loads again")]
fn the_directory_loads_again(world: &DirectoryWorld) {
    world.load();
}

#[when("the query is set to \"{query}\"")]
fn the_query_is_set_to(world: &DirectoryWorld, query: String) {
    world.service().set_query(query);
}

#[when("the query is cleared")]
fn the_query_is_cleared(world: &DirectoryWorld) {
    world.service().set_query("");
}

#[when("user {id:u64} is selected")]
fn user_is_selected(world: &DirectoryWorld, id: u64) {
    let state = world.service().snapshot();
    let record = state
        .find(UserId::new(id))
        .expect("selected user should be published");
    world.detail.set(UserDetail::from_record(record));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the load reports {count:usize} users")]
fn the_load_reports_users(world: &DirectoryWorld, count: usize) {
    assert_eq!(world.last_result(), Ok(count));
}

#[then("the published list is Emily Johnson then Hassan Cole")]
fn the_published_list_is_emily_then_hassan(world: &DirectoryWorld) {
    assert_eq!(world.published_names(), ["Emily Johnson", "Hassan Cole"]);
}

#[then("the published list is empty")]
fn the_published_list_is_empty(world: &DirectoryWorld) {
    assert!(world.published_names().is_empty());
}

#[then("the avatars are numbered 003101 and 003102")]
fn the_avatars_are_numbered(world: &DirectoryWorld) {
    let state = world.service().snapshot();
    let urls: Vec<_> = state
        .records()
        .iter()
        .map(|record| record.image_url().map(str::to_owned))
        .collect();
    assert_eq!(
        urls,
        [
            Some(format!("{IMAGE_BASE}003101.jpg")),
            Some(format!("{IMAGE_BASE}003102.jpg")),
        ]
    );
}

#[then("only Emily Johnson is visible")]
fn only_emily_is_visible(world: &DirectoryWorld) {
    let state = world.service().snapshot();
    let names: Vec<_> = state
        .visible()
        .into_iter()
        .map(|record| record.full_name())
        .collect();
    assert_eq!(names, ["Emily Johnson"]);
}

#[then("{count:usize} users are visible")]
fn users_are_visible(world: &DirectoryWorld, count: usize) {
    assert_eq!(world.service().snapshot().visible().len(), count);
}

#[then("the load fails with server error {status:u16}")]
fn the_load_fails_with_server_error(world: &DirectoryWorld, status: u16) {
    let error = world.last_result().expect_err("load should fail");
    assert_eq!(error, LoadError::Http(HttpError::ServerError { status }));
    assert_eq!(world.service().snapshot().last_error(), Some(&error));
}

#[then("the load fails because field \"{field}\" is missing")]
fn the_load_fails_because_field_is_missing(world: &DirectoryWorld, field: String) {
    let error = world.last_result().expect_err("load should fail");
    let LoadError::Decode(decode) = error else {
        panic!("expected a decode failure, got {error:?}");
    };
    assert!(matches!(decode, DecodeError::MissingField { .. }));
    assert_eq!(decode.missing_field(), Some(field.as_str()));
}

#[then("the detail title is \"{title}\"")]
fn the_detail_title_is(world: &DirectoryWorld, title: String) {
    let detail = world.detail.get().expect("a user should be selected");
    assert_eq!(detail.title(), title);
}

#[then("the location section lists state \"{state}\" and city \"{city}\"")]
fn the_location_section_lists(world: &DirectoryWorld, state: String, city: String) {
    let detail = world.detail.get().expect("a user should be selected");
    let location = detail
        .sections()
        .iter()
        .find(|section| section.header == "LOCATION")
        .expect("location section present");
    let rows: Vec<_> = location
        .rows
        .iter()
        .map(|row| (row.label, row.value.as_str()))
        .collect();
    assert_eq!(rows, [("State", state.as_str()), ("City", city.as_str())]);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/directory.feature",
    name = "Loading a page publishes projected users with avatars"
)]
fn loading_a_page_publishes_projected_users(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory.feature",
    name = "Searching narrows the visible users"
)]
fn searching_narrows_the_visible_users(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory.feature",
    name = "Clearing the query shows everyone again"
)]
fn clearing_the_query_shows_everyone_again(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory.feature",
    name = "A server error keeps the previous list"
)]
fn a_server_error_keeps_the_previous_list(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory.feature",
    name = "A page without users reports the missing field"
)]
fn a_page_without_users_reports_the_missing_field(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory.feature",
    name = "Selecting a user opens the detail view"
)]
fn selecting_a_user_opens_the_detail_view(world: DirectoryWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/directory.feature",
    name = "Loading over HTTP"
)]
fn loading_over_http(world: DirectoryWorld) {
    drop(world);
}
