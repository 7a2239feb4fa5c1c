
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::models::{BaseEntity, Task, TimeInterval};
use crate::core::repository::Repository;
use crate::core::types::Date;
use crate::logging::Logger;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_config_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("smartsched-scheduler-{nanos}-{uniq}.json"))
}

fn write_sample_config(path: &PathBuf, scan_order: &str) {
    let json = format!(
        r#"
    {{
      "work_window": {{ "value": "8:00AM-8:00PM", "description": "Working hours" }},
      "slot_scan_order": {{ "value": "{scan_order}", "description": "scan" }},
      "plan_date": {{ "value": "2099-01-01", "description": "plan date" }},
      "file_logging_enabled": {{ "value": "False", "description": "file logging" }}
    }}
    "#
    );
    fs::write(path, json).unwrap();
}

pub(super) fn make_ctx_with_order(scan_order: &str) -> AppContext {
    let path = temp_config_path();
    write_sample_config(&path, scan_order);
    let config = Config::load_from(&path).unwrap();
    let logger = Logger::new();
    let logs_dir = std::env::temp_dir().join("smartsched-scheduler-logs");
    logger.set_log_dir(&logs_dir);
    logger.set_file_logging_enabled(config.file_logging_enabled());
    AppContext {
        config,
        busy: Repository::new(),
        tasks: Repository::new(),
        logger,
        startup_displayed: false,
        config_path: path,
        logs_dir,
    }
}

pub(super) fn make_ctx() -> AppContext {
    make_ctx_with_order("positional")
}

pub(super) fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
}

/// `hh:mm` on the sample date.
pub(super) fn at(hhmm: &str) -> NaiveDateTime {
    let (h, m) = hhmm.split_once(':').unwrap();
    sample_date()
        .and_hms_opt(h.parse().unwrap(), m.parse().unwrap(), 0)
        .unwrap()
}

pub(super) fn iv(start: &str, end: &str) -> TimeInterval {
    TimeInterval::new(at(start), at(end)).unwrap()
}

pub(super) fn task(id: i32, name: &str, hours: f32, deadline: &str) -> Task {
    let mut t = Task::try_new(name, hours, Date::try_from_str(deadline).unwrap()).unwrap();
    t.set_id(id);
    t
}
