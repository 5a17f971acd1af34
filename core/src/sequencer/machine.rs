//! Clock-agnostic state machine behind the processing animation.
//!
//! The driver reports how much time has elapsed since the start and gets
//! back the events that became due. Calling [`Sequencer::advance_to`] with
//! non-decreasing offsets yields, in order:
//!
//! ```text
//! StageStarted(0) Progress.. StageCompleted(0) StageStarted(1) .. StageCompleted(n-1) Finished
//! ```

use log::{debug, info};
use serde::Serialize;
use std::time::Duration;

use super::schedule::Schedule;
use crate::config::SETTLE_DELAY;

/// Something the view has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "camelCase")]
pub enum SequenceEvent {
    /// Stage became current.
    StageStarted(usize),
    /// Overall progress in percent. Never decreases.
    Progress(f64),
    /// Stage duration elapsed.
    StageCompleted(usize),
    /// All stages done and the settle delay passed: hand off to results.
    Finished,
}

/// Display state of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Current,
    Complete,
}

impl StageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Pending => "Pending",
            StageStatus::Current => "In Progress",
            StageStatus::Complete => "Complete",
        }
    }
}

/// Progress state of one run through a [`Schedule`].
#[derive(Debug, Clone)]
pub struct Sequencer {
    schedule: Schedule,
    settle: Duration,
    started: bool,
    /// Number of completed stages; also the index of the current one.
    completed: usize,
    progress: f64,
    finished: bool,
}

impl Sequencer {
    pub fn new(schedule: Schedule) -> Self {
        Self::with_settle_delay(schedule, SETTLE_DELAY)
    }

    pub fn with_settle_delay(schedule: Schedule, settle: Duration) -> Self {
        Self {
            schedule,
            settle,
            started: false,
            completed: 0,
            progress: 0.0,
            finished: false,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Overall progress in percent.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn completed_stages(&self) -> usize {
        self.completed
    }

    /// Index of the running stage, `None` before start and after the last one.
    pub fn current_stage(&self) -> Option<usize> {
        (self.started && self.completed < self.schedule.len()).then_some(self.completed)
    }

    pub fn status(&self, index: usize) -> StageStatus {
        if index < self.completed {
            StageStatus::Complete
        } else if self.current_stage() == Some(index) {
            StageStatus::Current
        } else {
            StageStatus::Pending
        }
    }

    pub fn all_stages_complete(&self) -> bool {
        self.completed == self.schedule.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Offset of the next stage boundary or of the hand-off, whichever is due.
    /// `None` once [`SequenceEvent::Finished`] has been emitted.
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.finished {
            None
        } else if self.all_stages_complete() {
            Some(self.schedule.total() + self.settle)
        } else {
            Some(self.schedule.end_of(self.completed))
        }
    }

    /// Bring the state up to `elapsed` and return the events that became due.
    pub fn advance_to(&mut self, elapsed: Duration) -> Vec<SequenceEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }

        if !self.started {
            self.started = true;
            debug!("Stage 0 started: {}", self.schedule.stages()[0].title);
            events.push(SequenceEvent::StageStarted(0));
        }

        let len = self.schedule.len();
        while self.completed < len && self.schedule.end_of(self.completed) <= elapsed {
            let index = self.completed;
            self.completed += 1;
            self.raise_progress(self.schedule.percent_at_end_of(index), &mut events);
            debug!("Stage {} complete ({:.0}%)", index, self.progress);
            events.push(SequenceEvent::StageCompleted(index));
            if self.completed < len {
                debug!(
                    "Stage {} started: {}",
                    self.completed,
                    self.schedule.stages()[self.completed].title
                );
                events.push(SequenceEvent::StageStarted(self.completed));
            }
        }

        if self.completed < len {
            self.raise_progress(self.schedule.percent(elapsed), &mut events);
        } else if elapsed >= self.schedule.total() + self.settle {
            self.finished = true;
            info!("Processing finished after {:?}", elapsed);
            events.push(SequenceEvent::Finished);
        }

        events
    }

    fn raise_progress(&mut self, value: f64, events: &mut Vec<SequenceEvent>) {
        if value > self.progress {
            self.progress = value;
            events.push(SequenceEvent::Progress(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_INTERVAL;
    use crate::models::Stage;

    fn schedule(durations: &[u64]) -> Schedule {
        let stages = durations
            .iter()
            .enumerate()
            .map(|(i, d)| Stage::new(i as u32 + 1, format!("Stage {}", i + 1), "", *d))
            .collect();
        Schedule::new(stages).unwrap()
    }

    /// Drive like the browser does: one call per tick until finished.
    fn run_ticks(seq: &mut Sequencer, tick: Duration) -> Vec<(Duration, SequenceEvent)> {
        let mut out = Vec::new();
        let mut now = Duration::ZERO;
        while !seq.is_finished() {
            for event in seq.advance_to(now) {
                out.push((now, event));
            }
            now += tick;
        }
        out
    }

    #[test]
    fn test_progress_at_stage_ends_is_duration_weighted() {
        let durations = [2000u64, 1500, 2000, 2500];
        let mut seq = Sequencer::new(schedule(&durations));
        let events = run_ticks(&mut seq, TICK_INTERVAL);

        let total: u64 = durations.iter().sum();
        let mut last_progress = 0.0;
        let mut cumulative = 0u64;
        let mut checked = 0;
        for (_, event) in &events {
            match event {
                SequenceEvent::Progress(p) => last_progress = *p,
                SequenceEvent::StageCompleted(k) => {
                    cumulative += durations[*k];
                    let expected = cumulative as f64 / total as f64 * 100.0;
                    assert!((last_progress - expected).abs() < 1e-6);
                    checked += 1;
                }
                _ => {}
            }
        }
        assert_eq!(checked, durations.len());
    }

    #[test]
    fn test_completion_order_is_strict() {
        let mut seq = Sequencer::new(Schedule::processing());
        let completed: Vec<usize> = run_ticks(&mut seq, Duration::from_millis(37))
            .into_iter()
            .filter_map(|(_, e)| match e {
                SequenceEvent::StageCompleted(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(completed, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_100() {
        let mut seq = Sequencer::new(Schedule::processing());
        let events = run_ticks(&mut seq, TICK_INTERVAL);
        let values: Vec<f64> = events
            .iter()
            .filter_map(|(_, e)| match e {
                SequenceEvent::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last().copied(), Some(100.0));
        assert!(values.iter().all(|p| *p <= 100.0));
    }

    #[test]
    fn test_hundred_percent_exactly_at_last_completion() {
        let mut seq = Sequencer::new(schedule(&[300, 700]));
        let before = seq.advance_to(Duration::from_millis(999));
        assert!(!before.contains(&SequenceEvent::StageCompleted(1)));
        assert!(seq.progress() < 100.0);

        let events = seq.advance_to(Duration::from_millis(1000));
        assert_eq!(
            events,
            vec![
                SequenceEvent::Progress(100.0),
                SequenceEvent::StageCompleted(1)
            ]
        );
    }

    #[test]
    fn test_finished_exactly_once_after_settle() {
        let mut seq = Sequencer::new(schedule(&[100]));
        seq.advance_to(Duration::from_millis(100));
        assert!(seq.all_stages_complete());
        assert!(seq.advance_to(Duration::from_millis(599)).is_empty());
        assert_eq!(
            seq.advance_to(Duration::from_millis(600)),
            vec![SequenceEvent::Finished]
        );
        assert!(seq.advance_to(Duration::from_millis(5000)).is_empty());
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn test_finished_only_after_all_complete() {
        let mut seq = Sequencer::new(Schedule::processing());
        let events = run_ticks(&mut seq, TICK_INTERVAL);
        let finished_at: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, (_, e))| *e == SequenceEvent::Finished)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(finished_at, vec![events.len() - 1]);
        let (at, _) = events[events.len() - 1];
        assert!(at >= Duration::from_millis(8500));
    }

    #[test]
    fn test_late_call_catches_up_in_order() {
        let mut seq = Sequencer::new(schedule(&[100, 100, 100]));
        let events = seq.advance_to(Duration::from_secs(1));
        let completed: Vec<SequenceEvent> = events
            .into_iter()
            .filter(|e| !matches!(e, SequenceEvent::Progress(_)))
            .collect();
        assert_eq!(
            completed,
            vec![
                SequenceEvent::StageStarted(0),
                SequenceEvent::StageCompleted(0),
                SequenceEvent::StageStarted(1),
                SequenceEvent::StageCompleted(1),
                SequenceEvent::StageStarted(2),
                SequenceEvent::StageCompleted(2),
                SequenceEvent::Finished,
            ]
        );
    }

    #[test]
    fn test_zero_length_stage_completes_immediately() {
        let mut seq = Sequencer::new(schedule(&[0, 100]));
        let events = seq.advance_to(Duration::ZERO);
        assert_eq!(
            events,
            vec![
                SequenceEvent::StageStarted(0),
                SequenceEvent::StageCompleted(0),
                SequenceEvent::StageStarted(1),
            ]
        );
    }

    #[test]
    fn test_status_and_deadlines() {
        let mut seq = Sequencer::new(schedule(&[100, 200]));
        assert_eq!(seq.status(0), StageStatus::Pending);
        assert_eq!(seq.current_stage(), None);
        assert_eq!(seq.next_deadline(), Some(Duration::from_millis(100)));

        seq.advance_to(Duration::from_millis(150));
        assert_eq!(seq.status(0), StageStatus::Complete);
        assert_eq!(seq.status(1), StageStatus::Current);
        assert_eq!(seq.next_deadline(), Some(Duration::from_millis(300)));
        assert!((seq.progress() - 50.0).abs() < 1e-9);

        seq.advance_to(Duration::from_millis(300));
        assert_eq!(seq.current_stage(), None);
        assert_eq!(seq.next_deadline(), Some(Duration::from_millis(800)));
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&SequenceEvent::StageCompleted(2)).unwrap();
        assert_eq!(json, r#"{"event":"stageCompleted","value":2}"#);
        let json = serde_json::to_string(&SequenceEvent::Finished).unwrap();
        assert_eq!(json, r#"{"event":"finished"}"#);
    }
}
