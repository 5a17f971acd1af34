//! Fixed, validated list of stages with precomputed boundaries.

use std::time::Duration;

use crate::error::{ScheduleError, ScheduleResult};
use crate::mock;
use crate::models::Stage;

/// Ordered stages plus the cumulative end time of each one.
///
/// Stage `k` spans `[end(k-1), end(k))` of the total duration, so the
/// overall percentage is weighted by duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    stages: Vec<Stage>,
    ends: Vec<Duration>,
    total: Duration,
}

impl Schedule {
    /// Validate `stages` and precompute boundaries.
    pub fn new(stages: Vec<Stage>) -> ScheduleResult<Self> {
        if stages.is_empty() {
            return Err(ScheduleError::Empty);
        }
        let schedule = Self::from_stages(stages);
        if schedule.total.is_zero() {
            return Err(ScheduleError::ZeroDuration);
        }
        Ok(schedule)
    }

    /// The four-stage analysis shown on the processing page.
    pub fn processing() -> Self {
        Self::from_stages(mock::processing_stages().to_vec())
    }

    fn from_stages(stages: Vec<Stage>) -> Self {
        let ends: Vec<Duration> = stages
            .iter()
            .scan(Duration::ZERO, |acc, stage| {
                *acc += stage.duration;
                Some(*acc)
            })
            .collect();
        let total = ends.last().copied().unwrap_or_default();
        Self {
            stages,
            ends,
            total,
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Offset at which stage `index` starts.
    pub fn start_of(&self, index: usize) -> Duration {
        match index {
            0 => Duration::ZERO,
            i => self.ends[i - 1],
        }
    }

    /// Offset at which stage `index` completes.
    pub fn end_of(&self, index: usize) -> Duration {
        self.ends[index]
    }

    /// Overall percentage represented by `offset` (clamped to 0..=100).
    pub fn percent(&self, offset: Duration) -> f64 {
        let clamped = offset.min(self.total);
        clamped.as_secs_f64() / self.total.as_secs_f64() * 100.0
    }

    /// Percentage reached when stage `index` completes.
    pub fn percent_at_end_of(&self, index: usize) -> f64 {
        self.percent(self.end_of(index))
    }

    /// Index of the stage running at `elapsed`, `None` once all are done.
    pub fn stage_at(&self, elapsed: Duration) -> Option<usize> {
        self.ends.iter().position(|end| elapsed < *end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(durations: &[u64]) -> Vec<Stage> {
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| Stage::new(i as u32 + 1, format!("Stage {}", i + 1), "", *d))
            .collect()
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Schedule::new(Vec::new()), Err(ScheduleError::Empty));
    }

    #[test]
    fn test_rejects_zero_total() {
        assert_eq!(Schedule::new(stages(&[0, 0])), Err(ScheduleError::ZeroDuration));
    }

    #[test]
    fn test_processing_matches_mock_stages() {
        let built = Schedule::new(mock::processing_stages().to_vec()).unwrap();
        assert_eq!(built, Schedule::processing());
    }

    #[test]
    fn test_boundaries() {
        let schedule = Schedule::new(stages(&[100, 300, 600])).unwrap();
        assert_eq!(schedule.total(), Duration::from_millis(1000));
        assert_eq!(schedule.start_of(0), Duration::ZERO);
        assert_eq!(schedule.start_of(2), Duration::from_millis(400));
        assert_eq!(schedule.end_of(1), Duration::from_millis(400));
        assert!((schedule.percent_at_end_of(0) - 10.0).abs() < 1e-9);
        assert!((schedule.percent_at_end_of(1) - 40.0).abs() < 1e-9);
        assert_eq!(schedule.percent_at_end_of(2), 100.0);
    }

    #[test]
    fn test_stage_at() {
        let schedule = Schedule::new(stages(&[100, 300])).unwrap();
        assert_eq!(schedule.stage_at(Duration::ZERO), Some(0));
        assert_eq!(schedule.stage_at(Duration::from_millis(99)), Some(0));
        assert_eq!(schedule.stage_at(Duration::from_millis(100)), Some(1));
        assert_eq!(schedule.stage_at(Duration::from_millis(400)), None);
    }

    #[test]
    fn test_percent_is_clamped() {
        let schedule = Schedule::new(stages(&[100])).unwrap();
        assert_eq!(schedule.percent(Duration::from_secs(10)), 100.0);
    }
}
