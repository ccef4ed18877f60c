use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn artdrop() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("artdrop"))
}

#[test]
fn doctor_reports_built_in_defaults() {
    let tmp = tempdir().unwrap();
    let mut cmd = artdrop();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   artdrop doctor"))
        .stdout(predicate::str::contains("default_subfolder: 4_ArtSetups"))
        .stdout(predicate::str::contains("on_conflict: skip"))
        .stdout(predicate::str::contains("warning_minutes: 30"));
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
[timer]
warning_minutes = 45

[rename]
on_conflict = "increment"
"#,
    )
    .unwrap();

    let mut cmd = artdrop();
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("warning_minutes: 45"))
        .stdout(predicate::str::contains("on_conflict: increment"));
}

#[test]
fn doctor_surfaces_malformed_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "not valid toml [[").unwrap();

    let mut cmd = artdrop();
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert().failure().stderr(predicate::str::contains("Error in config file"));
}
