use crate::common::{error_body, topic_name, PubSubCmdTest, PROJECT};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, diff};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_create(test: &PubSubCmdTest, topic_id: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("PUT"))
        .and(path(format!("/v1/projects/{PROJECT}/topics/{topic_id}")))
        .respond_with(response)
        .expect(calls)
        .mount(test.server())
        .await;
}

fn created(topic_id: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "name": topic_name(topic_id) }))
}

#[tokio::test(flavor = "multi_thread")]
async fn should_create_topic_and_then_list_it() {
    let test = PubSubCmdTest::new().await;
    mount_create(&test, "demo-topic", created("demo-topic"), 1).await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "topics": [{ "name": topic_name("demo-topic") }] })),
        )
        .expect(1)
        .mount(test.server())
        .await;

    test.execute(&["topics", "create", "demo-topic"])
        .success()
        .stdout(diff(format!(
            "Executing create topics: demo-topic\nTopic created: {}\n",
            topic_name("demo-topic")
        )));

    test.execute(&["topics", "list"])
        .success()
        .stdout(contains(topic_name("demo-topic")));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_create_topics_in_order() {
    let test = PubSubCmdTest::new().await;
    mount_create(&test, "orders", created("orders"), 1).await;
    mount_create(&test, "payments", created("payments"), 1).await;

    test.execute(&["t", "c", "orders", "payments"])
        .success()
        .stdout(diff(format!(
            "Executing create topics: orders, payments\nTopic created: {}\nTopic created: {}\n",
            topic_name("orders"),
            topic_name("payments")
        )));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_stop_at_first_failed_topic() {
    let test = PubSubCmdTest::new().await;
    mount_create(&test, "alpha", created("alpha"), 1).await;
    mount_create(
        &test,
        "beta",
        ResponseTemplate::new(409).set_body_json(error_body(409, "ALREADY_EXISTS", "Topic already exists")),
        1,
    )
    .await;
    mount_create(&test, "gamma", created("gamma"), 0).await;

    test.execute(&["topics", "create", "alpha", "beta", "gamma"])
        .failure()
        .stdout(contains(format!("Topic created: {}", topic_name("alpha"))))
        .stdout(contains(topic_name("gamma")).not())
        .stderr(contains("Problem creating topic: beta"))
        .stderr(contains("Topic already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_fail_without_topic() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;

    test.execute(&["topics", "create"])
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(contains("TOPIC: Must be specified."));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_reject_invalid_topic_name() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;

    test.execute(&["topics", "create", "projects/other"])
        .failure()
        .stderr(contains("projects/other"));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_reject_ids_with_url_delimiters() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;

    for topic_id in ["orders#archive", "orders?x=1", ".."] {
        test.execute(&["topics", "create", "orders", topic_id])
            .failure()
            .stdout(predicates::str::is_empty())
            .stderr(contains(format!("Invalid resource name: {topic_id}")));
    }
}
