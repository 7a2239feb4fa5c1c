use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, run_with_input, write_valid_config,
};

#[test]
fn unknown_command_reports_error_and_keeps_running() {
    let dir = make_temp_dir("shell");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "frobnicate\nhelp\nexit\n");
    assert!(output.status.success(), "session should complete");

    let stderr = normalized_lines(&output.stderr);
    assert!(
        stderr
            .iter()
            .any(|l| l.contains("Command resolution failed for 'frobnicate'")
                && l.contains("Unknown command")),
        "stderr: {stderr:?}"
    );
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("Usage: schedule")));
}

#[test]
fn help_lists_every_command() {
    let dir = make_temp_dir("shell");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "help\nexit\n");
    let stdout = normalized_lines(&output.stdout);
    for cmd in ["busy", "task", "free", "schedule", "clear", "config", "help", "exit"] {
        assert!(
            stdout
                .iter()
                .any(|l| l.starts_with(&format!("Usage: {cmd} ")) || l == &format!("Usage: {cmd}")),
            "help output missing '{cmd}': {stdout:?}"
        );
    }
}

#[test]
fn help_flag_prints_usage_without_adding() {
    let dir = make_temp_dir("shell");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "task -h\ntask\nexit\n");
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("Usage: task <name> <hours> <deadline>")));
    assert!(stdout.iter().any(|l| l == "No tasks available."));
}

#[test]
fn bad_input_is_reported_and_session_continues() {
    let dir = make_temp_dir("shell");
    write_valid_config(&dir);

    let output = run_with_input(
        &dir,
        "task Report -1 2099-01-01\nbusy 10AM-9AM\ntask Report 1 2099-01-01\nexit\n",
    );
    assert!(output.status.success());

    let stderr = normalized_lines(&output.stderr);
    assert!(
        stderr
            .iter()
            .any(|l| l.contains("Command execution failed for 'task'")),
        "stderr: {stderr:?}"
    );
    assert!(
        stderr
            .iter()
            .any(|l| l.contains("Command execution failed for 'busy'")),
        "stderr: {stderr:?}"
    );

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout
        .iter()
        .any(|l| l.starts_with("Added task with id 1: Task(id=1, name='Report'")));
}

#[test]
fn busy_and_task_can_be_deleted_and_cleared() {
    let dir = make_temp_dir("shell");
    write_valid_config(&dir);

    let output = run_with_input(
        &dir,
        "busy 9AM-10AM\nbusy del 1\ntask A 1 2099-01-01\nclear\nexit\n",
    );
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "Deleted busy slot with id 1."));
    assert!(stdout
        .iter()
        .any(|l| l == "Cleared 0 busy slot(s) and 1 task(s)."));
}

#[test]
fn commands_are_logged_to_session_file() {
    let dir = make_temp_dir("shell");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "busy 9AM-10AM\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir.join("logs")).expect("session log should exist");
    assert!(log.contains("Command run: busy 9AM-10AM"));
    assert!(log.contains("Added busy slot with id 1"));
}
