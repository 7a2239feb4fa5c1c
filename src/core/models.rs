use crate::core::types::{Date, Hours, TimeRange};
use crate::errors::{Error, Result};
use crate::extensions::chrono::{DurationExt, HoursExt};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

pub trait BaseEntity {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

/// Absolute `[start, end]` span on one calendar day. `start <= end` always holds;
/// zero-length intervals are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Available time. Produced by the free-slot calculator and shrunk from the
/// front while tasks are placed.
pub type FreeInterval = TimeInterval;

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(Error::validation(format!(
                "Interval start {} is after its end {}.",
                start.format("%Y-%m-%d %H:%M"),
                end.format("%Y-%m-%d %H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    pub(crate) fn from_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn hours(&self) -> f32 {
        self.duration().as_hours()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Consume `by` from the front of the interval. Never moves past `end`.
    pub fn advance_start(&mut self, by: Duration) {
        self.start = (self.start + by).min(self.end);
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

// =========
// BusySlot
// =========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusySlot {
    pub id: i32,
    pub time_range: TimeRange,
}

impl BusySlot {
    pub fn new(time_range: TimeRange) -> Self {
        Self { id: 1, time_range }
    }

    pub fn interval_on(&self, date: NaiveDate) -> TimeInterval {
        self.time_range.on(date)
    }
}

impl BaseEntity for BusySlot {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl fmt::Display for BusySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusySlot(id={}, time={})", self.id, self.time_range)
    }
}

// =====
// Task
// =====

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub hours: f32,
    pub deadline: Date,
}

impl Task {
    pub fn try_new(name: impl Into<String>, hours: f32, deadline: Date) -> Result<Self> {
        let Hours(hours) = Hours::try_new(hours)?;
        Ok(Self {
            id: 1,
            name: name.into(),
            hours,
            deadline,
        })
    }

    pub fn duration(&self) -> Duration {
        self.hours.hours_to_duration()
    }
}

impl BaseEntity for Task {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, name='{}', hours={}, deadline={})",
            self.id, self.name, self.hours, self.deadline
        )
    }
}

// ==========
// Schedules
// ==========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledAssignment {
    pub task_id: i32,
    pub task_name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduledAssignment {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::from_ordered(self.start, self.end)
    }

    pub fn hours(&self) -> f32 {
        (self.end - self.start).as_hours()
    }
}

impl fmt::Display for ScheduledAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} to {}",
            self.task_name,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Everything a scheduling run produced for one day.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    pub date: NaiveDate,
    pub free: Vec<FreeInterval>,
    pub scheduled: Vec<ScheduledAssignment>,
    pub unscheduled: Vec<Task>,
}

impl ScheduleOutcome {
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}
