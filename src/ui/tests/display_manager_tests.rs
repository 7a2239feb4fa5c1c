use crate::core::models::{ScheduleOutcome, ScheduledAssignment, Task, TimeInterval};
use crate::core::types::Date;
use crate::ui::display_manager::{DisplayManager, NO_SLOTS_MESSAGE};
use chrono::{NaiveDate, NaiveDateTime};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    date().and_hms_opt(h, m, 0).unwrap()
}

fn render(outcome: &ScheduleOutcome) -> String {
    let mut buf = Vec::new();
    DisplayManager::new()
        .render_schedule(outcome, &mut buf)
        .unwrap();
    String::from_utf8(buf).unwrap()
}

fn assignment(id: i32, name: &str, start: NaiveDateTime, end: NaiveDateTime) -> ScheduledAssignment {
    ScheduledAssignment {
        task_id: id,
        task_name: name.into(),
        start,
        end,
    }
}

#[test]
fn schedule_lists_assignments_then_unscheduled() {
    let mut huge = Task::try_new("Huge", 11.0, Date::try_from_str("2099-01-03").unwrap()).unwrap();
    huge.id = 3;
    let outcome = ScheduleOutcome {
        date: date(),
        free: vec![],
        scheduled: vec![
            assignment(1, "A", at(8, 0), at(9, 0)),
            assignment(2, "B", at(10, 0), at(10, 30)),
        ],
        unscheduled: vec![huge],
    };

    let output = render(&outcome);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[1], "SCHEDULE FOR 2099-01-01");
    assert!(lines.contains(&"T.ID: 1 | A    | 1.00  | 08:00-09:00"));
    assert!(lines.contains(&"T.ID: 2 | B    | 0.50  | 10:00-10:30"));
    assert!(lines.contains(&"UNSCHEDULED"));
    assert!(lines.iter().any(|l| l.starts_with("3  | Huge | 11.00 | 2099-01-03")));
    assert!(!output.contains(NO_SLOTS_MESSAGE));

    // both tables share one rule width
    let rules: Vec<&&str> = lines.iter().filter(|l| l.chars().all(|c| c == '-')).collect();
    assert!(rules.iter().all(|r| r.len() == rules[0].len()));
}

#[test]
fn empty_schedule_prints_no_slots_message() {
    let outcome = ScheduleOutcome {
        date: date(),
        free: vec![],
        scheduled: vec![],
        unscheduled: vec![],
    };
    let output = render(&outcome);
    let rule = "-".repeat(NO_SLOTS_MESSAGE.len());
    let expected = format!("{rule}\nSCHEDULE FOR 2099-01-01\n{rule}\n{NO_SLOTS_MESSAGE}\n{rule}\n");
    assert_eq!(output, expected);
}

#[test]
fn free_slots_render_with_date_title() {
    let free = vec![TimeInterval::new(at(8, 0), at(9, 0)).unwrap()];
    let mut buf = Vec::new();
    DisplayManager::new()
        .render_free_slots(date(), &free, &mut buf)
        .unwrap();
    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("FREE TIME ON 2099-01-01"));
    assert!(output.contains("1 | 08:00-09:00 | 1.00"));
}

#[test]
fn no_free_slots_render_message() {
    let mut buf = Vec::new();
    DisplayManager::new()
        .render_free_slots(date(), &[], &mut buf)
        .unwrap();
    assert!(String::from_utf8(buf).unwrap().contains(NO_SLOTS_MESSAGE));
}
