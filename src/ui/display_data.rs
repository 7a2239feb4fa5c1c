use crate::config::Config;
use crate::core::models::{BusySlot, FreeInterval, ScheduledAssignment, Task};
use crate::core::repository::Repository;
use crate::extensions::chrono::DurationExt;

/// Turns session data into table rows. Pure, so tables can be checked
/// without capturing stdout.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy_rows(&self, busy: &Repository<BusySlot>) -> Vec<Vec<String>> {
        busy.values()
            .into_iter()
            .map(|b| {
                let span = b.time_range.end - b.time_range.start;
                vec![
                    b.id.to_string(),
                    b.time_range.to_string(),
                    format!("{:.2}", span.as_hours()),
                ]
            })
            .collect()
    }

    pub fn task_rows(&self, tasks: &Repository<Task>) -> Vec<Vec<String>> {
        tasks
            .values()
            .into_iter()
            .map(Self::task_row)
            .collect()
    }

    pub fn unscheduled_rows(&self, tasks: &[Task]) -> Vec<Vec<String>> {
        tasks.iter().map(Self::task_row).collect()
    }

    fn task_row(t: &Task) -> Vec<String> {
        vec![
            t.id.to_string(),
            t.name.clone(),
            format!("{:.2}", t.hours),
            t.deadline.to_string(),
        ]
    }

    pub fn free_rows(&self, free: &[FreeInterval]) -> Vec<Vec<String>> {
        free.iter()
            .enumerate()
            .map(|(i, slot)| {
                vec![
                    (i + 1).to_string(),
                    slot.to_string(),
                    format!("{:.2}", slot.hours()),
                ]
            })
            .collect()
    }

    /// Processing order is kept; rows are not re-sorted by start time.
    pub fn assignment_rows(&self, scheduled: &[ScheduledAssignment]) -> Vec<Vec<String>> {
        scheduled
            .iter()
            .map(|a| {
                vec![
                    format!("T.ID: {}", a.task_id),
                    a.task_name.clone(),
                    format!("{:.2}", a.hours()),
                    a.interval().to_string(),
                ]
            })
            .collect()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .into_iter()
            .map(|(k, d, v)| vec![k, d, v])
            .collect()
    }
}
