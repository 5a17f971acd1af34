//! Progress bars and the processing stage list.

use leptos::*;
use medipredict::{Stage, StageStatus};

/// Horizontal bar filled to `percent` (0-100).
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: MaybeSignal<f64>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let width = move || format!("width: {:.1}%;", percent.get().clamp(0.0, 100.0));

    view! {
        <div class=format!("progress-bar {}", class)>
            <div class="progress-fill" style=width></div>
        </div>
    }
}

/// Ordered stage rows with their status icon.
#[component]
pub fn StageList(
    stages: Vec<Stage>,
    #[prop(into)] status: Callback<usize, StageStatus>,
) -> impl IntoView {
    view! {
        <ol class="stage-list">
            {stages
                .into_iter()
                .enumerate()
                .map(|(index, stage)| {
                    let state = move || status.call(index);
                    let class_name = move || match state() {
                        StageStatus::Pending => "stage pending",
                        StageStatus::Current => "stage current",
                        StageStatus::Complete => "stage complete",
                    };
                    let icon = move || match state() {
                        StageStatus::Pending => "○",
                        StageStatus::Current => "⏳",
                        StageStatus::Complete => "✅",
                    };
                    view! {
                        <li class=class_name>
                            <span class="stage-icon">{icon}</span>
                            <div class="stage-text">
                                <strong>{stage.title}</strong>
                                <span>{stage.description}</span>
                            </div>
                            <span class="stage-status">{move || state().label()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
