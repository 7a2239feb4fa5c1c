use crate::core::models::Task;
use std::cmp::Ordering;

pub trait TaskOrderComparator {
    fn cmp(&self, a: &Task, b: &Task) -> Ordering;

    /// Stable: tasks that compare equal keep their input order.
    fn sorted<'t>(&self, tasks: &'t [Task]) -> Vec<&'t Task> {
        let mut ordered: Vec<&Task> = tasks.iter().collect();
        ordered.sort_by(|a, b| self.cmp(a, b));
        ordered
    }
}

// Deadline asc; equal deadlines are left to the stable sort.
pub struct DeadlineComparator;
impl TaskOrderComparator for DeadlineComparator {
    fn cmp(&self, a: &Task, b: &Task) -> Ordering {
        a.deadline.cmp(&b.deadline)
    }
}
