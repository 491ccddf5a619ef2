use crate::common::BIN_NAME;
use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::str::contains;
use std::process::Command;

#[test]
fn running_without_command_should_print_overview() {
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .assert()
        .success()
        .stdout(contains("Commands:"))
        .stdout(contains(format!("Run '{BIN_NAME} --help' for full help message.")));
}
