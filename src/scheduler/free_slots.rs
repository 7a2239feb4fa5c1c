use crate::core::models::{FreeInterval, TimeInterval};

/// Free intervals of `window` left over after removing `busy`, ordered by start.
///
/// Busy intervals may arrive unsorted, overlapping, nested, or partly outside
/// the window. They are swept once in `(start, end)` order with a cursor that
/// only moves forward and never past the end of the window, so nothing outside
/// the window and no zero-length gap is ever emitted.
pub fn compute_free_slots(busy: &[TimeInterval], window: &TimeInterval) -> Vec<FreeInterval> {
    let mut sorted = busy.to_vec();
    sorted.sort();

    let window_end = window.end();
    let mut cursor = window.start();
    let mut free = Vec::new();

    for slot in &sorted {
        if cursor >= window_end {
            break;
        }
        if cursor < slot.start() {
            let gap_end = slot.start().min(window_end);
            free.push(FreeInterval::from_ordered(cursor, gap_end));
        }
        cursor = cursor.max(slot.end().min(window_end));
    }

    if cursor < window_end {
        free.push(FreeInterval::from_ordered(cursor, window_end));
    }
    free
}
