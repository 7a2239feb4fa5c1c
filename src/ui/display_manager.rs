use crate::config::Config;
use crate::core::models::{BusySlot, FreeInterval, ScheduleOutcome, Task};
use crate::core::repository::Repository;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;
use std::io;
use std::io::Write;

pub const NO_SLOTS_MESSAGE: &str = "No available slots found.";

const TASK_HEADERS: [&str; 4] = ["ID", "NAME", "HOURS", "DEADLINE"];
const ASSIGNMENT_HEADERS: [&str; 4] = ["ID", "NAME", "HOURS", "TIME"];

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            util: WidthUtil::default(),
            data: DisplayDataBuilder::new(),
        }
    }

    pub fn display_config(&self, config: &Config) {
        let headers = ["KEY", "DESCRIPTION", "VALUE"];
        let rows = self.data.config_rows(config);

        self.printer.print_table(
            "Config",
            &headers,
            &rows,
            Some("No config items found."),
            None,
        );
    }

    pub fn display_busy_slots(&self, busy: &Repository<BusySlot>) {
        let headers = ["ID", "TIME", "HOURS"];
        let rows = self.data.busy_rows(busy);

        self.printer.print_table(
            "Busy slots",
            &headers,
            &rows,
            Some("No busy slots added."),
            None,
        );
    }

    pub fn display_tasks(&self, tasks: &Repository<Task>) {
        let rows = self.data.task_rows(tasks);

        self.printer.print_table(
            "Tasks",
            &TASK_HEADERS,
            &rows,
            Some("No tasks available."),
            None,
        );
    }

    pub fn render_free_slots<W: Write>(
        &self,
        date: NaiveDate,
        free: &[FreeInterval],
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["#", "TIME", "HOURS"];
        let rows = self.data.free_rows(free);
        let title = format!("Free time on {}", date.format("%Y-%m-%d"));

        self.printer
            .render_table(&title, &headers, &rows, Some(NO_SLOTS_MESSAGE), None, out)
    }

    pub fn display_free_slots(&self, date: NaiveDate, free: &[FreeInterval]) {
        let mut stdout = io::stdout();
        let _ = self.render_free_slots(date, free, &mut stdout);
    }

    /// Assignments in placement order, then any tasks that did not fit.
    pub fn render_schedule<W: Write>(
        &self,
        outcome: &ScheduleOutcome,
        out: &mut W,
    ) -> io::Result<()> {
        let title = format!("Schedule for {}", outcome.date.format("%Y-%m-%d"));
        let scheduled = self.data.assignment_rows(&outcome.scheduled);
        let unscheduled = self.data.unscheduled_rows(&outcome.unscheduled);
        let width = self.schedule_max_width(&title, &scheduled, &unscheduled);

        self.printer.render_table(
            &title,
            &ASSIGNMENT_HEADERS,
            &scheduled,
            Some(NO_SLOTS_MESSAGE),
            Some(width),
            out,
        )?;

        if !unscheduled.is_empty() {
            self.printer.render_table(
                "Unscheduled",
                &TASK_HEADERS,
                &unscheduled,
                None,
                Some(width),
                out,
            )?;
        }
        Ok(())
    }

    pub fn display_schedule(&self, outcome: &ScheduleOutcome) {
        let mut stdout = io::stdout();
        let _ = self.render_schedule(outcome, &mut stdout);
    }

    fn schedule_max_width(
        &self,
        title: &str,
        scheduled: &[Vec<String>],
        unscheduled: &[Vec<String>],
    ) -> usize {
        let scheduled_w = if scheduled.is_empty() {
            self.util.visible_width(NO_SLOTS_MESSAGE)
        } else {
            self.printer
                .compute_table_width(&ASSIGNMENT_HEADERS, scheduled)
        };
        let unscheduled_w = if unscheduled.is_empty() {
            0
        } else {
            self.printer.compute_table_width(&TASK_HEADERS, unscheduled)
        };
        self.util
            .visible_width(title)
            .max(scheduled_w)
            .max(unscheduled_w)
    }
}
