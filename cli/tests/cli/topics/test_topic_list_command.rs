use crate::common::{error_body, topic_name, PubSubCmdTest, PROJECT};
use predicates::str::{contains, diff};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

async fn mount_two_pages(test: &PubSubCmdTest) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics")))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topics": [{ "name": topic_name("orders") }, { "name": topic_name("payments") }],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(test.server())
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics")))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topics": [{ "name": topic_name("audit"), "labels": { "team": "core" } }]
        })))
        .expect(1)
        .mount(test.server())
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn should_print_one_line_per_topic_across_pages() {
    let test = PubSubCmdTest::new().await;
    mount_two_pages(&test).await;

    test.execute(&["topics", "list"])
        .success()
        .stdout(diff(format!(
            "Executing list topics in list mode\n{}\n{}\n{}\n",
            topic_name("orders"),
            topic_name("payments"),
            topic_name("audit")
        )));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_print_topics_table() {
    let test = PubSubCmdTest::new().await;
    mount_two_pages(&test).await;

    test.execute(&["topics", "list", "--list-mode", "table"])
        .success()
        .stdout(contains("Executing list topics in table mode"))
        .stdout(contains("Labels"))
        .stdout(contains("team=core"))
        .stdout(contains(topic_name("payments")));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_print_nothing_for_empty_project() {
    let test = PubSubCmdTest::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(test.server())
        .await;

    test.execute(&["topics", "list"])
        .success()
        .stdout(diff("Executing list topics in list mode\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_surface_listing_error() {
    let test = PubSubCmdTest::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics")))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(error_body(500, "INTERNAL", "backend unavailable")),
        )
        .expect(1)
        .mount(test.server())
        .await;

    test.execute(&["topics", "list"])
        .failure()
        .stderr(contains("Problem getting list of topics"))
        .stderr(contains("backend unavailable"));
}
