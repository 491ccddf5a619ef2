use crate::common::{topic_name, PubSubCmdTest, PROJECT};
use predicates::str::contains;
use serde_json::json;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn debug_file_should_receive_request_traces() {
    let test = PubSubCmdTest::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "topics": [{ "name": topic_name("orders") }] })),
        )
        .expect(1)
        .mount(test.server())
        .await;
    let log_path = std::env::temp_dir().join(format!("pubsubctl-debug-{}.log", std::process::id()));
    let log_arg = log_path.to_string_lossy().to_string();

    test.execute(&["--debug", &log_arg, "topics", "list"])
        .success()
        .stdout(contains(topic_name("orders")));

    let log = fs::read_to_string(&log_path).unwrap();
    let _ = fs::remove_file(&log_path);
    assert!(log.contains("Sending GET request with query to"));
    assert!(log.contains("pubsub_sdk::http::client"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unwritable_debug_file_should_be_reported() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;
    let log_path = std::env::temp_dir()
        .join(format!("pubsubctl-missing-{}", std::process::id()))
        .join("debug.log");
    let log_arg = log_path.to_string_lossy().to_string();

    test.execute(&["--debug", &log_arg, "topics", "list"])
        .failure()
        .stderr(contains("Cannot open debug log file"))
        .stderr(contains("debug.log"));
}
