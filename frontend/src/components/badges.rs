//! Small status pills.

use leptos::*;
use medipredict::{IndicatorStatus, RiskLevel};

#[component]
pub fn RiskBadge(level: RiskLevel) -> impl IntoView {
    view! {
        <span class=format!("badge {}", level.css_class())>
            {format!("{} Risk", level.label())}
        </span>
    }
}

#[component]
pub fn StatusBadge(status: IndicatorStatus) -> impl IntoView {
    view! {
        <span class=format!("badge {}", status.css_class())>{status.label()}</span>
    }
}
