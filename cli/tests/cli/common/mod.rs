use assert_cmd::assert::Assert;
use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use std::process::Command;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const PROJECT: &str = "foobar";
pub(crate) const BIN_NAME: &str = "pubsubctl";

pub(crate) fn topic_name(topic_id: &str) -> String {
    format!("projects/{PROJECT}/topics/{topic_id}")
}

pub(crate) fn subscription_name(subscription_id: &str) -> String {
    format!("projects/{PROJECT}/subscriptions/{subscription_id}")
}

pub(crate) fn error_body(code: u16, status: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": { "code": code, "message": message, "status": status }
    })
}

/// Runs the pubsubctl binary against a mocked Pub/Sub REST API.
/// Expectations set on mounted mocks are verified when the test ends.
pub(crate) struct PubSubCmdTest {
    server: MockServer,
}

impl PubSubCmdTest {
    pub(crate) async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub(crate) fn server(&self) -> &MockServer {
        &self.server
    }

    /// Fail the test if the command sends any request at all.
    pub(crate) async fn forbid_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub(crate) fn execute(&self, args: &[&str]) -> Assert {
        let api_url = self.server.uri();
        let mut command = Command::cargo_bin(BIN_NAME).unwrap();
        command
            .env_remove("PUBSUB_API_URL")
            .env_remove("PUBSUB_EMULATOR_HOST")
            .env_remove("PUBSUB_PROJECT_ID")
            .env_remove("RUST_LOG")
            .args(["--api-url", api_url.as_str(), "--project", PROJECT])
            .args(args);

        // Visible once tests are run with --nocapture
        println!("Running: {BIN_NAME} --api-url {api_url} --project {PROJECT} {}", args.join(" "));

        command.assert()
    }
}
