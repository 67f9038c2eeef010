use std::sync::{Arc, Once};
use std::time::Duration;

use jobs_app::{SearchConfig, SearchController};
use jobs_core::{EmploymentType, FailureReason, Lifecycle, ViewVariant};
use jobs_engine::{SessionToken, StaticToken};
use pretty_assertions::assert_eq;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const SETTLE: Duration = Duration::from_secs(5);

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

fn jobs_body(ids: &[&str]) -> String {
    let jobs: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                concat!(
                    r#"{{"id":"{id}","title":"Job {id}","#,
                    r#""company_logo_url":"https://logo/{id}.png","#,
                    r#""employment_type":"Full Time","job_description":"About {id}","#,
                    r#""location":"Hyderabad","package_per_annum":"12 LPA","rating":4}}"#,
                ),
                id = id
            )
        })
        .collect();
    format!(r#"{{"jobs":[{}]}}"#, jobs.join(","))
}

fn ok_json(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

// `server` is declared first so it is dropped before the runtime that started it.
struct Harness {
    server: MockServer,
    runtime: Runtime,
}

impl Harness {
    fn start() -> Self {
        init_logging();
        let runtime = Runtime::new().expect("test runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn reset(&self) {
        self.runtime.block_on(self.server.reset());
    }

    fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .expect("recording enabled")
    }

    fn controller(&self, token: Option<&str>) -> SearchController {
        let credentials = match token {
            Some(token) => StaticToken::new(token),
            None => StaticToken::absent(),
        };
        SearchController::new(
            &SearchConfig::with_base_url(self.server.uri()),
            Arc::new(credentials),
        )
        .expect("controller")
    }
}

fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

fn ids(controller: &SearchController) -> Vec<String> {
    controller.jobs_list().iter().map(|job| job.id.clone()).collect()
}

#[test]
fn mount_loads_unfiltered_jobs() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("employment_type", ""))
            .and(query_param("minimum_package", "0"))
            .and(query_param("search", ""))
            .and(header("Authorization", "Bearer jwt-abc"))
            .respond_with(ok_json(jobs_body(&["a", "b"]))),
    );
    let mut controller = harness.controller(Some("jwt-abc"));
    assert_eq!(controller.view().variant, ViewVariant::Nothing);

    assert!(controller.mount());
    assert_eq!(controller.view().variant, ViewVariant::Loading);
    assert!(controller.wait_until_settled(SETTLE));

    let ViewVariant::JobList(jobs) = controller.view().variant else {
        panic!("expected job list, got {:?}", controller.view().variant);
    };
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Job a");
    assert_eq!(jobs[1].company_logo_url, "https://logo/b.png");
    assert_eq!(jobs[1].rating, Some(4.0));
}

#[test]
fn empty_result_shows_no_jobs_placeholder() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ok_json(r#"{"jobs":[]}"#.to_string())),
    );
    let mut controller = harness.controller(Some("t"));

    controller.set_employment_type(EmploymentType::Internship, true);
    assert!(controller.wait_until_settled(SETTLE));

    assert!(matches!(controller.view().variant, ViewVariant::NoJobs(_)));
    assert_eq!(
        query_value(&harness.requests()[0], "employment_type").as_deref(),
        Some("INTERNSHIP")
    );
}

#[test]
fn server_error_shows_failure_and_keeps_previous_jobs() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("minimum_package", "0"))
            .respond_with(ok_json(jobs_body(&["kept"]))),
    );
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("minimum_package", "4000000"))
            .respond_with(ResponseTemplate::new(500)),
    );
    let mut controller = harness.controller(Some("t"));

    controller.mount();
    assert!(controller.wait_until_settled(SETTLE));
    assert_eq!(ids(&controller), vec!["kept"]);

    controller.set_minimum_salary(4_000_000);
    assert!(controller.wait_until_settled(SETTLE));

    assert!(matches!(
        controller.view().variant,
        ViewVariant::Failure { retry_label: "Retry", .. }
    ));
    assert!(matches!(
        controller.state().lifecycle(),
        Lifecycle::Failure {
            reason: FailureReason::HttpStatus(500),
            ..
        }
    ));
    assert_eq!(ids(&controller), vec!["kept"]);
}

#[test]
fn retry_reissues_with_current_filters() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(503)),
    );
    let mut controller = harness.controller(Some("t"));

    controller.set_search_term("rust");
    assert!(controller.wait_until_settled(SETTLE));
    assert!(matches!(controller.view().variant, ViewVariant::Failure { .. }));

    harness.reset();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("search", "rust"))
            .respond_with(ok_json(jobs_body(&["r1"]))),
    );

    assert!(controller.retry());
    assert_eq!(controller.view().variant, ViewVariant::Loading);
    assert!(controller.wait_until_settled(SETTLE));

    assert_eq!(ids(&controller), vec!["r1"]);
    let requests = harness.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(query_value(&requests[0], "search").as_deref(), Some("rust"));
}

#[test]
fn malformed_body_is_a_failure() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("jobs: none", "text/plain")),
    );
    let mut controller = harness.controller(Some("t"));

    controller.search();
    assert!(controller.wait_until_settled(SETTLE));

    assert!(matches!(
        controller.state().lifecycle(),
        Lifecycle::Failure {
            reason: FailureReason::MalformedBody,
            ..
        }
    ));
}

#[test]
fn missing_token_collapses_into_failure() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(header("Authorization", "Bearer good"))
            .respond_with(ok_json(jobs_body(&["x"]))),
    );
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(401)),
    );
    let mut controller = harness.controller(None);

    controller.mount();
    assert!(controller.wait_until_settled(SETTLE));

    assert!(matches!(
        controller.state().lifecycle(),
        Lifecycle::Failure {
            reason: FailureReason::HttpStatus(401),
            ..
        }
    ));
    assert_eq!(harness.requests().len(), 1);
}

#[test]
fn session_token_changes_apply_to_the_next_cycle() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(header("Authorization", "Bearer fresh"))
            .respond_with(ok_json(jobs_body(&["ok"]))),
    );
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(401)),
    );
    let session = SessionToken::new();
    session.set("expired");
    let mut controller = SearchController::new(
        &SearchConfig::with_base_url(harness.server.uri()),
        Arc::new(session.clone()),
    )
    .expect("controller");

    controller.mount();
    assert!(controller.wait_until_settled(SETTLE));
    assert!(matches!(controller.view().variant, ViewVariant::Failure { .. }));

    session.set("fresh");
    controller.retry();
    assert!(controller.wait_until_settled(SETTLE));
    assert_eq!(ids(&controller), vec!["ok"]);
}

#[test]
fn rapid_filter_changes_settle_on_latest_filters() {
    let harness = Harness::start();
    // First cycle: salary only, answered late.
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("minimum_package", "1000000"))
            .and(query_param("search", ""))
            .respond_with(ok_json(jobs_body(&["stale"])).set_delay(Duration::from_millis(400))),
    );
    // Second cycle: salary and search term, answered immediately.
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("minimum_package", "1000000"))
            .and(query_param("search", "engineer"))
            .respond_with(ok_json(jobs_body(&["fresh"]))),
    );
    let mut controller = harness.controller(Some("t"));

    controller.set_minimum_salary(1_000_000);
    controller.set_search_term("engineer");
    assert!(controller.wait_until_settled(SETTLE));
    assert_eq!(ids(&controller), vec!["fresh"]);

    // Let the superseded response land; it must not change anything.
    std::thread::sleep(Duration::from_millis(700));
    assert!(!controller.pump());
    assert_eq!(ids(&controller), vec!["fresh"]);
    assert_eq!(harness.requests().len(), 2);
}

#[test]
fn mutating_calls_report_when_the_view_must_be_rerendered() {
    let harness = Harness::start();
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ok_json(jobs_body(&["a"])).set_delay(Duration::from_millis(200))),
    );
    let mut controller = harness.controller(Some("t"));
    let before = controller.view();

    assert!(controller.mount());
    let loading = controller.view();
    assert_ne!(loading, before);
    // Nothing has arrived yet, so nothing to re-render.
    assert!(!controller.pump());
    assert_eq!(controller.view(), loading);

    assert!(controller.wait_for_update(SETTLE));
    assert_ne!(controller.view(), loading);
    assert!(!controller.pump());
}

#[test]
fn unreachable_service_is_a_failure() {
    init_logging();
    let mut controller = SearchController::new(
        &SearchConfig::with_base_url("http://127.0.0.1:1"),
        Arc::new(StaticToken::new("t")),
    )
    .expect("controller");

    controller.mount();
    assert!(controller.wait_until_settled(SETTLE));

    assert!(matches!(
        controller.state().lifecycle(),
        Lifecycle::Failure {
            reason: FailureReason::Network,
            ..
        }
    ));
}

#[test]
fn invalid_base_url_is_rejected_at_construction() {
    let result = SearchController::new(
        &SearchConfig::with_base_url("not a url"),
        Arc::new(StaticToken::absent()),
    );
    assert!(result.is_err());
}
