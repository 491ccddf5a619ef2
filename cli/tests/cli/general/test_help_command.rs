use crate::common::{PubSubCmdTest, BIN_NAME};
use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::str::contains;
use std::process::Command;

#[test]
fn help_should_list_command_groups() {
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("topics"))
        .stdout(contains("subscriptions"))
        .stdout(contains("--emulator-host"));
}

#[test]
fn topics_help_should_list_subcommands() {
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .args(["topics", "--help"])
        .assert()
        .success()
        .stdout(contains("create"))
        .stdout(contains("delete"))
        .stdout(contains("list-subscriptions"))
        .stdout(contains("publish"));
}

#[test]
fn subscriptions_group_should_be_reachable_by_alias() {
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .args(["s", "create", "--help"])
        .assert()
        .success()
        .stdout(contains("--topic"))
        .stdout(contains("--ack-deadline"));
}

#[test]
fn completion_should_be_generated_for_bash() {
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(contains(BIN_NAME));
}

#[tokio::test(flavor = "multi_thread")]
async fn quiet_mode_should_not_print_anything() {
    let test = PubSubCmdTest::new().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "topics": [{ "name": "projects/foobar/topics/a" }] })),
        )
        .expect(1)
        .mount(test.server())
        .await;

    test.execute(&["--quiet", "topics", "list"])
        .success()
        .stdout(predicates::str::is_empty());
}
