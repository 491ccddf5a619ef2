use crate::common::{error_body, PubSubCmdTest, PROJECT};
use predicates::str::{contains, diff};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_delete(test: &PubSubCmdTest, subscription_id: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("DELETE"))
        .and(path(format!("/v1/projects/{PROJECT}/subscriptions/{subscription_id}")))
        .respond_with(response)
        .expect(calls)
        .mount(test.server())
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn should_delete_subscriptions() {
    let test = PubSubCmdTest::new().await;
    mount_delete(&test, "billing", ResponseTemplate::new(200), 1).await;
    mount_delete(&test, "audit", ResponseTemplate::new(200), 1).await;

    test.execute(&["subscriptions", "delete", "billing", "audit"])
        .success()
        .stdout(diff(
            "Executing delete subscriptions: billing, audit\n\
             Subscription deleted: billing\n\
             Subscription deleted: audit\n",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_stop_at_missing_subscription() {
    let test = PubSubCmdTest::new().await;
    mount_delete(
        &test,
        "missing",
        ResponseTemplate::new(404).set_body_json(error_body(404, "NOT_FOUND", "Subscription not found")),
        1,
    )
    .await;
    mount_delete(&test, "billing", ResponseTemplate::new(200), 0).await;

    test.execute(&["subscriptions", "delete", "missing", "billing"])
        .failure()
        .stderr(contains("Problem deleting subscription: missing"))
        .stderr(contains("Subscription not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_fail_without_subscription() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;

    test.execute(&["subscriptions", "delete"])
        .failure()
        .stderr(contains("SUBSCRIPTION: Must be specified."));
}

#[tokio::test(flavor = "multi_thread")]
async fn should_not_delete_anything_given_invalid_subscription() {
    let test = PubSubCmdTest::new().await;
    test.forbid_requests().await;

    test.execute(&["subscriptions", "delete", "billing", "billing#old"])
        .failure()
        .stderr(contains("Invalid resource name: billing#old"));
}
