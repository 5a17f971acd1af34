//! Tokio driver for the sequencer.
//!
//! [`SequenceHandle::spawn`] runs a [`Sequencer`] on a background task with
//! one periodic tick and one timeout per stage boundary. Events arrive on
//! the returned channel. Dropping the handle aborts the task, which drops
//! the sender: no event is produced after teardown.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::machine::{SequenceEvent, Sequencer};
use super::schedule::Schedule;
use crate::config::TICK_INTERVAL;

/// Owns the background task of a running sequence.
#[derive(Debug)]
pub struct SequenceHandle {
    task: JoinHandle<()>,
}

impl SequenceHandle {
    /// Start `schedule` with the default tick interval and settle delay.
    pub fn spawn(schedule: Schedule) -> (Self, mpsc::UnboundedReceiver<SequenceEvent>) {
        Self::spawn_with(Sequencer::new(schedule), TICK_INTERVAL)
    }

    /// Start an already configured sequencer.
    pub fn spawn_with(
        sequencer: Sequencer,
        tick: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SequenceEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(drive(sequencer, tick, tx));
        (Self { task }, rx)
    }

    /// `true` once the sequence finished or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the sequence now. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for SequenceHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn drive(
    mut sequencer: Sequencer,
    tick: Duration,
    events: mpsc::UnboundedSender<SequenceEvent>,
) {
    let start = Instant::now();
    let mut ticker = time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while let Some(deadline) = sequencer.next_deadline() {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = time::sleep_until(start + deadline) => {}
        }
        for event in sequencer.advance_to(start.elapsed()) {
            if events.send(event).is_err() {
                log::debug!("Sequence receiver dropped, stopping");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(mut rx: mpsc::UnboundedReceiver<SequenceEvent>) -> Vec<(Duration, SequenceEvent)> {
        let start = Instant::now();
        let mut out = Vec::new();
        while let Some(event) = rx.recv().await {
            out.push((start.elapsed(), event));
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_run_navigates_once_after_last_stage() {
        let (handle, rx) = SequenceHandle::spawn(Schedule::processing());
        let events = collect(rx).await;
        assert!(handle.is_finished());

        let completed: Vec<usize> = events
            .iter()
            .filter_map(|(_, e)| match e {
                SequenceEvent::StageCompleted(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(completed, vec![0, 1, 2, 3]);

        let finished: Vec<&(Duration, SequenceEvent)> = events
            .iter()
            .filter(|(_, e)| *e == SequenceEvent::Finished)
            .collect();
        assert_eq!(finished.len(), 1);
        assert_eq!(events.last().map(|(_, e)| *e), Some(SequenceEvent::Finished));
        assert!(finished[0].0 >= Duration::from_millis(8500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_completes_at_its_boundary() {
        let (_handle, rx) = SequenceHandle::spawn(Schedule::processing());
        let events = collect(rx).await;
        let first_done = events
            .iter()
            .find(|(_, e)| *e == SequenceEvent::StageCompleted(0))
            .map(|(at, _)| *at)
            .unwrap_or_default();
        assert!(first_done >= Duration::from_millis(2000));
        assert!(first_done < Duration::from_millis(2000) + TICK_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_all_events() {
        let (handle, mut rx) = SequenceHandle::spawn(Schedule::processing());

        // Let the first stage run for a while.
        time::sleep(Duration::from_millis(1000)).await;
        let mut seen = Vec::new();
        while let Ok(event) = rx.try_recv() {
            seen.push(event);
        }
        assert_eq!(seen.first(), Some(&SequenceEvent::StageStarted(0)));
        assert!(!seen.contains(&SequenceEvent::StageCompleted(0)));

        drop(handle);
        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_ends_task() {
        let (handle, rx) = SequenceHandle::spawn(Schedule::processing());
        drop(rx);
        time::sleep(Duration::from_millis(200)).await;
        assert!(handle.is_finished());
    }
}
