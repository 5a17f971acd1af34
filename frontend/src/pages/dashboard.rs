//! Signed-in home: stats, shortcuts, covered conditions, recent activity.

use leptos::*;
use leptos_router::*;
use medipredict::models::format_short_date;
use medipredict::{mock, Route};

use crate::components::{DashboardLayout, RiskBadge};
use crate::types::{first_name, Greeting};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let greeting = Greeting::now();

    view! {
        <DashboardLayout>
            <div class="page-header">
                <h1>{format!("{}, {}!", greeting.text(), first_name(mock::PATIENT_NAME))}</h1>
                <p class="subtitle">"Here's an overview of your health screening activity."</p>
            </div>

            <div class="stat-grid">
                {mock::dashboard_stats()
                    .iter()
                    .map(|stat| view! {
                        <div class="card stat-card">
                            <span class="stat-label">{stat.label.clone()}</span>
                            <strong class="stat-value">{stat.value.clone()}</strong>
                            <span class="stat-trend">{stat.trend.clone()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <section>
                <h2>"Quick Actions"</h2>
                <div class="card-grid">
                    {mock::quick_actions()
                        .iter()
                        .map(|action| view! {
                            <A href=action.path.clone() class="card action-card">
                                <h3>{action.title.clone()}</h3>
                                <p>{action.description.clone()}</p>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="two-columns">
                <section class="card">
                    <h2>"Supported Diseases"</h2>
                    <ul class="disease-list">
                        {mock::supported_diseases()
                            .iter()
                            .map(|disease| view! {
                                <li>
                                    <span>{disease.name.clone()}</span>
                                    <span class="muted">{format!("{} accuracy", disease.accuracy)}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="card">
                    <div class="card-header">
                        <h2>"Recent Activity"</h2>
                        <A href=Route::History.path() class="link">"View all"</A>
                    </div>
                    <ul class="activity-list">
                        {mock::recent_activity()
                            .iter()
                            .map(|row| view! {
                                <li>
                                    <div>
                                        <strong>{row.report_type.clone()}</strong>
                                        <span class="muted">{format_short_date(row.date)}</span>
                                    </div>
                                    <span class="status">{row.status.clone()}</span>
                                    <RiskBadge level=row.risk_level/>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>

            <div class="tip-banner">
                <strong>"💡 Tip"</strong>
                " Upload your latest blood test to keep your predictions up to date."
                <A href=Route::Upload.path() class="btn btn-primary">"Upload Now"</A>
            </div>
        </DashboardLayout>
    }
}
