mod common;
use common::TestEnv;
use predicates::str::contains;
use std::fs;

#[test]
fn init_writes_default_configuration() {
    let env = TestEnv::without_config("config_init");

    env.cmd().arg("init").assert().success();

    let content = fs::read_to_string(&env.config).expect("config written");
    assert!(content.contains("zero_hour_types"));
    assert!(content.contains("NO ASISTENCIA"));
    assert!(content.contains("exemption_mode: card"));

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn check_lists_missing_keys() {
    let env = TestEnv::without_config("config_check");
    fs::write(&env.config, "exemption_mode: detail\n").expect("write");

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("zero_hour_types"))
        .stdout(contains("report_title"));
}

#[test]
fn migrate_adds_missing_keys_and_keeps_values() {
    let env = TestEnv::without_config("config_migrate");
    fs::write(&env.config, "exemption_mode: detail\n").expect("write");

    env.cmd().args(["config", "--migrate"]).assert().success();

    let content = fs::read_to_string(&env.config).expect("read");
    assert!(content.contains("exemption_mode: detail"));
    assert!(content.contains("observation_width: 55"));

    env.cmd()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete"));
}

#[test]
fn print_shows_effective_configuration() {
    let env = TestEnv::without_config("config_print");
    fs::write(&env.config, "report_title: Novedades marzo\n").expect("write");

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("report_title: Novedades marzo"))
        .stdout(contains("observation_width: 55"));
}

#[test]
fn invalid_configuration_is_an_error() {
    let env = TestEnv::without_config("config_invalid");
    fs::write(&env.config, "observation_width: 2\n").expect("write");

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("observation_width"));
}
