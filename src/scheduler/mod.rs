use crate::core::context::AppContext;
use crate::core::models::{FreeInterval, ScheduleOutcome, ScheduledAssignment, Task, TimeInterval};
use crate::core::types::{SlotScanOrder, TimeRange};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::placer::{PlacementObserver, TaskPlacer};
use chrono::NaiveDate;

mod comparator;
pub mod free_slots;
pub mod placer;
#[cfg(test)]
mod tests;

pub use free_slots::compute_free_slots;
pub use placer::place_tasks;

struct LoggerObserver {
    logger: Logger,
}

impl PlacementObserver for LoggerObserver {
    fn task_placed(&self, task: &Task, slot_idx: usize, assignment: &ScheduledAssignment) {
        self.logger.info(
            format!(
                "Task with id {} placed in free slot #{} ({} to {})",
                task.id,
                slot_idx + 1,
                assignment.start.format("%H:%M"),
                assignment.end.format("%H:%M")
            ),
            LogTarget::FileOnly,
        );
    }

    fn task_unplaced(&self, task: &Task, free: &[FreeInterval]) {
        let largest = free.iter().map(|s| s.hours()).fold(0.0_f32, f32::max);
        self.logger.warn(
            format!(
                "Task with id {} needs {} hours; largest free slot has {:.2} hours. Skipped.",
                task.id, task.hours, largest
            ),
            LogTarget::FileOnly,
        );
    }
}

/// Runs the free-slot calculator and the placer against the session state
/// for a single plan date.
pub struct ScheduleManager<'a> {
    ctx: &'a AppContext,

    date: NaiveDate,
    window: TimeRange,
    order: SlotScanOrder,
    observer: LoggerObserver,
}

impl<'a> ScheduleManager<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        let date = ctx.plan_date();
        let window = *ctx.config.work_window();
        let order = ctx.config.slot_scan_order();
        let observer = LoggerObserver {
            logger: ctx.logger.clone(),
        };

        Self {
            ctx,
            date,
            window,
            order,
            observer,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    fn busy_intervals(&self) -> Vec<TimeInterval> {
        self.ctx
            .busy
            .values()
            .into_iter()
            .map(|slot| slot.interval_on(self.date))
            .collect()
    }

    pub fn free_slots(&self) -> Vec<FreeInterval> {
        compute_free_slots(&self.busy_intervals(), &self.window.on(self.date))
    }

    /// Free slots → deadline-ordered placement. The session is never mutated,
    /// so running this twice gives the same outcome.
    pub fn compute_schedule(&self) -> Result<ScheduleOutcome> {
        let logger = &self.ctx.logger;
        logger.info("Starting scheduling...", LogTarget::FileOnly);

        let free = self.free_slots();
        let tasks = self.ctx.tasks.snapshot();
        let placement = TaskPlacer::new(self.order).place(&tasks, &free, &self.observer);

        logger.info(
            format!(
                "Finished scheduling. {} placed, {} skipped.",
                placement.scheduled.len(),
                placement.unscheduled.len()
            ),
            LogTarget::FileOnly,
        );

        Ok(ScheduleOutcome {
            date: self.date,
            free,
            scheduled: placement.scheduled,
            unscheduled: placement.unscheduled,
        })
    }
}
