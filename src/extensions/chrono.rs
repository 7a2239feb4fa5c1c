use chrono::Duration;

const SECS_PER_HOUR: f32 = 3600.0;

/// Fractional hours to a whole-second `Duration`. Saturates at `Duration::MAX`.
pub trait HoursExt {
    fn hours_to_duration(self) -> Duration;
}

impl HoursExt for f32 {
    fn hours_to_duration(self) -> Duration {
        Duration::try_seconds((self * SECS_PER_HOUR).round() as i64).unwrap_or(Duration::MAX)
    }
}

pub trait DurationExt {
    fn as_hours(&self) -> f32;
}

impl DurationExt for Duration {
    fn as_hours(&self) -> f32 {
        self.num_seconds() as f32 / SECS_PER_HOUR
    }
}
