//! Simulated analysis: walks the processing stages and opens the results.

use leptos::*;
use leptos_router::*;
use medipredict::{Route, Schedule, SequenceEvent, Sequencer, StageStatus};

use crate::components::{DashboardLayout, ProgressBar, StageList};
use crate::services::BrowserSequence;

/// Status of every stage in schedule order.
fn stage_statuses(sequencer: &Sequencer) -> Vec<StageStatus> {
    (0..sequencer.schedule().len())
        .map(|index| sequencer.status(index))
        .collect()
}

/// Where the page goes after `event`, if anywhere.
fn hand_off(event: SequenceEvent) -> Option<Route> {
    (event == SequenceEvent::Finished).then_some(Route::Results)
}

#[component]
pub fn ProcessingPage() -> impl IntoView {
    let schedule = Schedule::processing();
    let stages = schedule.stages().to_vec();

    let (progress, set_progress) = create_signal(0.0_f64);
    let (statuses, set_statuses) = create_signal(vec![StageStatus::Pending; stages.len()]);
    let navigate = use_navigate();

    // Navigating unmounts this page, which stops the driver before it can
    // deliver anything else.
    let on_event = move |sequencer: &Sequencer, event: SequenceEvent| {
        set_progress.set(sequencer.progress());
        set_statuses.set(stage_statuses(sequencer));
        if let Some(route) = hand_off(event) {
            log::info!("➡️  Analysis complete, opening {}", route);
            navigate(route.path(), Default::default());
        }
    };

    match BrowserSequence::start(schedule, on_event) {
        Ok(sequence) => on_cleanup(move || sequence.stop()),
        Err(e) => log::error!("❌ Could not start processing: {}", e),
    }

    let status = move |index: usize| {
        statuses.with(|s| s.get(index).copied().unwrap_or(StageStatus::Pending))
    };

    view! {
        <DashboardLayout>
            <div class="card processing-card">
                <div class="processing-icon">"🧠"</div>
                <h1>"Analyzing Your Report"</h1>
                <p class="subtitle">"Please wait while our AI processes your medical report."</p>

                <div class="progress-header">
                    <span>"Overall Progress"</span>
                    <strong>{move || format!("{:.0}%", progress.get())}</strong>
                </div>
                <ProgressBar percent=progress/>

                <StageList stages=stages status=status/>

                <p class="muted small">
                    "🔒 Your data is encrypted and processed securely."
                </p>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_only_finished_hands_off() {
        assert_eq!(hand_off(SequenceEvent::Finished), Some(Route::Results));
        assert_eq!(hand_off(SequenceEvent::StageCompleted(3)), None);
        assert_eq!(hand_off(SequenceEvent::Progress(100.0)), None);
    }

    #[test]
    fn test_hand_off_once_per_run() {
        let mut sequencer = Sequencer::new(Schedule::processing());
        let mut routes = Vec::new();
        let mut now = Duration::ZERO;
        while !sequencer.is_finished() {
            routes.extend(sequencer.advance_to(now).into_iter().filter_map(hand_off));
            now += Duration::from_millis(50);
        }
        routes.extend(sequencer.advance_to(now).into_iter().filter_map(hand_off));
        assert_eq!(routes, vec![Route::Results]);
    }

    #[test]
    fn test_stage_statuses_follow_sequencer() {
        let mut sequencer = Sequencer::new(Schedule::processing());
        assert_eq!(stage_statuses(&sequencer), vec![StageStatus::Pending; 4]);

        // Stage 0 ends at 2000 ms, stage 1 at 3500 ms.
        sequencer.advance_to(Duration::from_millis(2_500));
        assert_eq!(
            stage_statuses(&sequencer),
            vec![
                StageStatus::Complete,
                StageStatus::Current,
                StageStatus::Pending,
                StageStatus::Pending,
            ]
        );

        sequencer.advance_to(Duration::from_millis(8_000));
        assert_eq!(stage_statuses(&sequencer), vec![StageStatus::Complete; 4]);
    }
}
