use crate::common::{subscription_name, PubSubCmdTest, PROJECT};
use predicates::str::{contains, diff};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn should_list_subscriptions_of_topic() {
    let test = PubSubCmdTest::new().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/projects/{PROJECT}/topics/orders/subscriptions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscriptions": [subscription_name("billing"), subscription_name("audit")]
        })))
        .expect(1)
        .mount(test.server())
        .await;

    test.execute(&["topics", "list-subscriptions", "orders"])
        .success()
        .stdout(diff(format!(
            "Executing list subscriptions of topic: orders in list mode\n{}\n{}\n",
            subscription_name("billing"),
            subscription_name("audit")
        )));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_fail_without_topic() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;

    test.execute(&["topics", "list-subscriptions"])
        .failure()
        .stderr(contains("TOPIC: Must be specified."));
}
