use crate::core::models::{FreeInterval, ScheduledAssignment, Task};
use crate::core::types::SlotScanOrder;
use crate::scheduler::comparator::{DeadlineComparator, TaskOrderComparator};
use chrono::Duration;

/// Observer to capture placement decisions (e.g., for logging).
pub trait PlacementObserver {
    fn task_placed(&self, task: &Task, slot_idx: usize, assignment: &ScheduledAssignment);
    fn task_unplaced(&self, task: &Task, free: &[FreeInterval]);
}

pub struct SilentObserver;

impl PlacementObserver for SilentObserver {
    fn task_placed(&self, _: &Task, _: usize, _: &ScheduledAssignment) {}
    fn task_unplaced(&self, _: &Task, _: &[FreeInterval]) {}
}

pub trait SlotSelector {
    /// Index of the interval that should receive `need`, if any has room.
    fn select_slot_idx(&self, free: &[FreeInterval], need: Duration) -> Option<usize>;
}

/// First interval in list order with enough room. The list is never re-sorted,
/// so a shrunk interval keeps its position even when a later one now starts
/// earlier.
pub struct PositionalFirstFit;

impl SlotSelector for PositionalFirstFit {
    fn select_slot_idx(&self, free: &[FreeInterval], need: Duration) -> Option<usize> {
        free.iter().position(|slot| slot.duration() >= need)
    }
}

/// Fitting interval with the earliest current start; list position breaks ties.
pub struct EarliestStartFit;

impl SlotSelector for EarliestStartFit {
    fn select_slot_idx(&self, free: &[FreeInterval], need: Duration) -> Option<usize> {
        free.iter()
            .enumerate()
            .filter(|(_, slot)| slot.duration() >= need)
            .min_by_key(|(idx, slot)| (slot.start(), *idx))
            .map(|(idx, _)| idx)
    }
}

pub fn make_slot_selector(order: SlotScanOrder) -> Box<dyn SlotSelector> {
    match order {
        SlotScanOrder::Positional => Box::new(PositionalFirstFit),
        SlotScanOrder::EarliestStart => Box::new(EarliestStartFit),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    /// In processing order (deadline asc), not by start time.
    pub scheduled: Vec<ScheduledAssignment>,
    pub unscheduled: Vec<Task>,
}

pub struct TaskPlacer {
    selector: Box<dyn SlotSelector>,
}

impl TaskPlacer {
    pub fn new(order: SlotScanOrder) -> Self {
        Self::with_selector(make_slot_selector(order))
    }

    pub fn with_selector(selector: Box<dyn SlotSelector>) -> Self {
        Self { selector }
    }

    /// Places `tasks` into a private copy of `free`; the caller's list is untouched.
    pub fn place(
        &self,
        tasks: &[Task],
        free: &[FreeInterval],
        observer: &dyn PlacementObserver,
    ) -> Placement {
        let mut working = free.to_vec();
        self.place_in(tasks, &mut working, observer)
    }

    /// Greedy single pass: each task, earliest deadline first, takes the front
    /// of the selected interval, which is shrunk in place. A task with no
    /// interval large enough is skipped, never retried.
    pub fn place_in(
        &self,
        tasks: &[Task],
        free: &mut [FreeInterval],
        observer: &dyn PlacementObserver,
    ) -> Placement {
        let mut placement = Placement::default();

        for task in DeadlineComparator.sorted(tasks) {
            let need = task.duration();
            let Some(idx) = self.selector.select_slot_idx(free, need) else {
                observer.task_unplaced(task, free);
                placement.unscheduled.push(task.clone());
                continue;
            };

            let slot = &mut free[idx];
            let start = slot.start();
            slot.advance_start(need);

            let assignment = ScheduledAssignment {
                task_id: task.id,
                task_name: task.name.clone(),
                start,
                end: start + need,
            };
            observer.task_placed(task, idx, &assignment);
            placement.scheduled.push(assignment);
        }

        placement
    }
}

/// Deadline-ordered first-fit of `tasks` into `free`, positional scan.
/// Tasks that fit nowhere are left out of the result.
pub fn place_tasks(tasks: &[Task], free: &[FreeInterval]) -> Vec<ScheduledAssignment> {
    TaskPlacer::new(SlotScanOrder::Positional)
        .place(tasks, free, &SilentObserver)
        .scheduled
}
