use std::fs;

use crate::common::{
    config_json, make_temp_dir, normalized_lines, read_log_contents, run_with_input,
    write_valid_config,
};

#[test]
fn schedule_places_tasks_by_deadline_around_busy_time() {
    let dir = make_temp_dir("schedule");
    write_valid_config(&dir);

    let output = run_with_input(
        &dir,
        "busy 9AM-10AM\ntask B 0.5 2099-01-02\ntask A 1 2099-01-01\nschedule\nexit\n",
    );
    assert!(output.status.success(), "session should complete");

    let lines = normalized_lines(&output.stdout);
    let title = lines
        .iter()
        .position(|l| l == "SCHEDULE FOR 2099-01-01")
        .unwrap_or_else(|| panic!("no schedule title in {lines:?}"));
    let a = lines
        .iter()
        .position(|l| l == "T.ID: 2 | A    | 1.00  | 08:00-09:00")
        .expect("A should take the first free slot");
    let b = lines
        .iter()
        .position(|l| l == "T.ID: 1 | B    | 0.50  | 10:00-10:30")
        .expect("B should start after the busy slot");
    assert!(title < a && a < b, "assignments should follow deadline order");
    assert!(!lines.iter().any(|l| l == "UNSCHEDULED"));
}

#[test]
fn schedule_with_nothing_placed_reports_no_slots() {
    let dir = make_temp_dir("schedule");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "schedule\nexit\n");
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(
        lines.iter().any(|l| l == "No available slots found."),
        "stdout: {lines:?}"
    );
}

#[test]
fn oversized_task_is_listed_as_unscheduled() {
    let dir = make_temp_dir("schedule");
    write_valid_config(&dir);

    let output = run_with_input(
        &dir,
        "busy 9AM-10AM\ntask Huge 11 2099-01-01\ntask Small 2 2099-01-02\nschedule\nexit\n",
    );
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "T.ID: 2 | Small | 2.00  | 10:00-12:00"));
    let unscheduled = lines
        .iter()
        .position(|l| l == "UNSCHEDULED")
        .expect("unscheduled table should be printed");
    assert!(lines[unscheduled..]
        .iter()
        .any(|l| l.starts_with("1  | Huge | 11.00 | 2099-01-01")));
}

#[test]
fn free_lists_gaps_between_nested_busy_slots() {
    let dir = make_temp_dir("schedule");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "busy 9AM-12PM\nbusy 10AM-11AM\nfree\nexit\n");
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "FREE TIME ON 2099-01-01"));
    assert!(lines.iter().any(|l| l == "1 | 08:00-09:00 | 1.00"));
    assert!(lines.iter().any(|l| l == "2 | 12:00-20:00 | 8.00"));
}

#[test]
fn earliest_start_order_is_read_from_config() {
    let dir = make_temp_dir("schedule");
    fs::write(
        dir.join("config.json"),
        config_json("8:00AM-8:00PM", "earliest-start", "2099-01-01"),
    )
    .unwrap();

    let output = run_with_input(&dir, "task A 1 2099-01-01\nschedule\nexit\n");
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "T.ID: 1 | A    | 1.00  | 08:00-09:00"));
}

#[test]
fn schedule_run_is_logged_to_file() {
    let dir = make_temp_dir("schedule");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "task A 1 2099-01-01\nschedule\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir.join("logs")).expect("session log should exist");
    assert!(log.contains("Command run: schedule"));
    assert!(log.contains("Starting scheduling..."));
    assert!(log.contains("Task with id 1 placed in free slot #1 (08:00 to 09:00)"));
    assert!(log.contains("Finished scheduling. 1 placed, 0 skipped."));
}
