use std::fs;

use smartsched::config::Config;

use crate::common::{
    config_json, make_temp_dir, normalized_lines, run_with_args, run_with_input,
    write_valid_config,
};

#[test]
fn config_command_prints_table() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "config\nexit\n");
    assert!(output.status.success(), "config run should succeed");
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "CONFIG"), "stdout: {stdout:?}");
    assert!(stdout.iter().any(|l| l.starts_with("WORK_WINDOW")));
}

#[test]
fn config_change_persists_to_disk() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "config WORK_WINDOW 9AM-5PM\nexit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(
        stdout
            .iter()
            .any(|l| l == "Config WORK_WINDOW changed: 8:00AM-8:00PM -> 9:00AM-5:00PM"),
        "stdout: {stdout:?}"
    );

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.work_window().to_string(), "9:00AM-5:00PM");
}

#[test]
fn invalid_config_value_leaves_file_untouched() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let before = fs::read_to_string(dir.join("config.json")).unwrap();

    let output = run_with_input(&dir, "config SLOT_SCAN_ORDER sideways\nexit\n");
    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert!(stderr.iter().any(|l| l.contains("Invalid slot scan order")));

    let after = fs::read_to_string(dir.join("config.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn changed_window_applies_to_free_time() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "config WORK_WINDOW 9:00-12:00\nfree\nexit\n");
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "1 | 09:00-12:00 | 3.00"), "stdout: {stdout:?}");
}

#[test]
fn missing_config_file_fails_startup() {
    let dir = make_temp_dir("config");

    let output = run_with_input(&dir, "exit\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn config_and_logs_paths_come_from_flags() {
    let dir = make_temp_dir("config");
    let custom = dir.join("custom.json");
    fs::write(&custom, config_json("9:00AM-5:00PM", "positional", "2099-01-01")).unwrap();
    let logs = dir.join("session-logs");

    let output = run_with_args(
        &dir,
        &[
            "--config",
            custom.to_str().unwrap(),
            "--logs",
            logs.to_str().unwrap(),
        ],
        "task A 1 2099-01-01\nexit\n",
    );
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout
        .iter()
        .any(|l| l == "Planning 2099-01-01 within 9:00AM-5:00PM"));
    assert!(logs.exists(), "log dir should be created from --logs");
    assert!(!dir.join("logs").exists());
}

#[test]
fn unknown_flag_exits_with_usage() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_args(&dir, &["--bogus"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --bogus"));
    assert!(stderr.contains("Usage: smartsched"));
}
