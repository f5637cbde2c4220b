//! Integration tests for the `swctl` CLI binary.
//!
//! Everything except the `apply` round trip runs offline; that one talks to
//! a wiremock stand-in for the switch's web UI.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `swctl` binary with env isolation.
///
/// Clears all `SWCTL_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn swctl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("swctl");
    cmd.env("HOME", "/tmp/swctl-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/swctl-test-nonexistent")
        .env_remove("SWCTL_PROFILE")
        .env_remove("SWCTL_HOST")
        .env_remove("SWCTL_USER")
        .env_remove("SWCTL_PASSWORD")
        .env_remove("SWCTL_OUTPUT")
        .env_remove("SWCTL_INSECURE")
        .env_remove("SWCTL_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Access ports 1 (VLAN 10) and 2 (VLAN 20), trunk 3 carrying both.
const TRUNK_PLAN: &str = "\
vlan:
  1:
    vlan: [10]
  2:
    vlan: [20]
  3:
    vlan: [10, 20]
    native: 10
";

fn write_vlan_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("vlan.yml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_lists_commands() {
    swctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("status")
            .and(predicate::str::contains("apply"))
            .and(predicate::str::contains("save"))
            .and(predicate::str::contains("plan"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version() {
    swctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("swctl"));
}

#[test]
fn test_no_args_shows_help() {
    swctl_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_completions_bash() {
    swctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swctl"));
}

#[test]
fn test_invalid_output_format() {
    swctl_cmd()
        .args(["--output", "xml", "plan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("possible values"));
}

#[test]
fn test_config_path_and_show_without_config() {
    swctl_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    swctl_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

// ── plan ────────────────────────────────────────────────────────────

#[test]
fn test_plan_plain_lists_records() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, TRUNK_PLAN);

    swctl_cmd()
        .args(["-o", "plain", "plan", "-c", path_arg(&file)])
        .assert()
        .success()
        .stdout(
            "membership 1 2 untagged\n\
             membership 2 3 untagged\n\
             membership 3 4 tagged\n\
             tag 0 3 2 10\n\
             tag 1 3 3 20\n",
        );
}

#[test]
fn test_plan_json() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, TRUNK_PLAN);

    let output = swctl_cmd()
        .args(["-o", "json", "plan", "-c", path_arg(&file)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        plan["bridges"],
        json!([
            { "id": 2, "key": "[10]" },
            { "id": 3, "key": "[20]" },
            { "id": 4, "key": "[10,20]" },
        ])
    );
    assert_eq!(plan["membership"].as_array().unwrap().len(), 3);
    assert_eq!(
        plan["tag_cross"][1],
        json!({ "index": 1, "port": 3, "wire_port": 3, "bridge": 3, "vlan": 20 })
    );
}

#[test]
fn test_plan_table_has_sections() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, TRUNK_PLAN);

    swctl_cmd()
        .args(["plan", "-c", path_arg(&file)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bridge groups")
                .and(predicate::str::contains("Port membership"))
                .and(predicate::str::contains("Tag cross-connects"))
                .and(predicate::str::contains("untagged")),
        );
}

#[test]
fn test_plan_wire_swaps_sfp_ports() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, "vlan:\n  9:\n    vlan: [30]\n");

    let output = swctl_cmd()
        .args(["-o", "json", "plan", "--wire", "-c", path_arg(&file)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let wire: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        wire["port_vlan_cfg.json"],
        json!({ "checkbox_10": "on", "fidName_10": "2", "checkboxTag_10": "on" })
    );
    assert_eq!(wire["tag_vlan_cfg.json"], json!({}));
}

#[test]
fn test_plan_rejects_port_out_of_range() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, "vlan:\n  11:\n    vlan: [10]\n");

    swctl_cmd()
        .args(["plan", "-c", path_arg(&file)])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Port 11 out of range"));
}

#[test]
fn test_plan_missing_file() {
    swctl_cmd()
        .args(["plan", "-c", "/nonexistent/swctl/vlan.yml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cannot read VLAN file"));
}

// ── apply ───────────────────────────────────────────────────────────

#[test]
fn test_apply_without_switch_is_unconfigured() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, TRUNK_PLAN);

    swctl_cmd()
        .args(["apply", "-c", path_arg(&file)])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No switch configured"));
}

#[test]
fn test_apply_bad_vlan_file_never_connects() {
    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, "vlan:\n  1:\n    vlan: [5000]\n");

    // Nothing listens on port 1; the run must fail on the file first.
    swctl_cmd()
        .args([
            "-H",
            "http://127.0.0.1:1",
            "--password",
            "pw",
            "apply",
            "-c",
            path_arg(&file),
        ])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("VLAN 5000 out of range"));
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/login.html"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "SID=abc; Path=/"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/authorize"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apply_and_save_round_trip() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/port_vlan_cfg.json"))
        .and(body_json(json!({
            "checkbox_1": "on", "fidName_1": "2", "checkboxTag_1": "on",
            "checkbox_2": "on", "fidName_2": "3", "checkboxTag_2": "on",
            "checkbox_3": "on", "fidName_3": "4",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tag_vlan_cfg.json"))
        .and(body_json(json!({
            "bpCboxName_0": "on", "vtypeName_0": "0", "ppName_0": "3",
            "brName_0": "2", "oVidName_0": "10",
            "bpCboxName_1": "on", "vtypeName_1": "0", "ppName_1": "3",
            "brName_1": "3", "oVidName_1": "20",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    for map in ["port", "tag"] {
        Mock::given(method("POST"))
            .and(path(format!("/save_{map}_vlan_map.json")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, TRUNK_PLAN);
    let host = server.uri();

    tokio::task::spawn_blocking(move || {
        swctl_cmd()
            .args([
                "--color",
                "never",
                "-H",
                &host,
                "--password",
                "pw",
                "apply",
                "--save",
                "-c",
                path_arg(&file),
            ])
            .assert()
            .success()
            .stderr(
                predicate::str::contains("Updated port config")
                    .and(predicate::str::contains("Applied VLAN configuration"))
                    .and(predicate::str::contains("Saved VLAN configuration")),
            );
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apply_reports_rejected_tag_push() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/port_vlan_cfg.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tag_vlan_cfg.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = write_vlan_file(&dir, TRUNK_PLAN);
    let host = server.uri();

    tokio::task::spawn_blocking(move || {
        swctl_cmd()
            .args(["-H", &host, "--password", "pw", "apply", "-c", path_arg(&file)])
            .assert()
            .code(6)
            .stderr(predicate::str::contains("Couldn't update VLAN configuration"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_prints_device_json() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/status.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "SKS3200-8E2X"
        })))
        .mount(&server)
        .await;

    let host = server.uri();
    tokio::task::spawn_blocking(move || {
        swctl_cmd()
            .args(["-H", &host, "--password", "pw", "-o", "json-compact", "status"])
            .assert()
            .success()
            .stdout("{\"model\":\"SKS3200-8E2X\"}\n");
    })
    .await
    .unwrap();
}
