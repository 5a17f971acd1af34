//! Past predictions with search and summary stats.

use leptos::*;
use leptos_router::*;
use medipredict::{filter_history, mock, HistoryEntry, HistoryStats, Route};

use crate::components::{DashboardLayout, RiskBadge};

#[component]
pub fn HistoryPage() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let entries = create_memo(move |_| {
        query.with(|q| {
            filter_history(mock::history(), q)
                .into_iter()
                .cloned()
                .collect::<Vec<HistoryEntry>>()
        })
    });
    let stats = HistoryStats::compute(mock::history());

    let navigate = use_navigate();
    let open_results = Callback::new(move |_: ()| {
        navigate(Route::Results.path(), Default::default());
    });

    view! {
        <DashboardLayout>
            <div class="page-header">
                <h1>"Prediction History"</h1>
                <p class="subtitle">"All your past reports and their predictions."</p>
            </div>

            <div class="stat-grid three">
                <div class="card stat-card">
                    <span class="stat-label">"Total Reports"</span>
                    <strong class="stat-value">{stats.total}</strong>
                </div>
                <div class="card stat-card">
                    <span class="stat-label">"Low Risk"</span>
                    <strong class="stat-value">{stats.low_risk}</strong>
                </div>
                <div class="card stat-card">
                    <span class="stat-label">"Avg. Accuracy"</span>
                    <strong class="stat-value">{stats.average_accuracy_display()}</strong>
                </div>
            </div>

            <div class="card">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by report type or condition..."
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />

                <Show
                    when=move || entries.with(|e| !e.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🔍"</div>
                            <h3>"No reports found"</h3>
                            <p class="muted">"Try a different search term."</p>
                        </div>
                    }
                >
                    <table class="data-table history-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Report Type"</th>
                                <th>"Prediction"</th>
                                <th>"Risk Level"</th>
                                <th>"Accuracy"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || entries.get()
                                key=|entry| entry.id.clone()
                                children=move |entry| view! {
                                    <tr class="clickable" on:click=move |_| open_results.call(())>
                                        <td>{entry.date_display()}</td>
                                        <td>{entry.report_type.clone()}</td>
                                        <td>{entry.disease.clone()}</td>
                                        <td><RiskBadge level=entry.risk_level/></td>
                                        <td>{format!("{:.1}%", entry.accuracy)}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>

                    <div class="history-cards">
                        <For
                            each=move || entries.get()
                            key=|entry| entry.id.clone()
                            children=move |entry| view! {
                                <div class="card history-card" on:click=move |_| open_results.call(())>
                                    <div class="card-header">
                                        <strong>{entry.report_type.clone()}</strong>
                                        <RiskBadge level=entry.risk_level/>
                                    </div>
                                    <p>{entry.disease.clone()}</p>
                                    <span class="muted small">
                                        {format!("{} • {:.1}% accuracy", entry.date_display(), entry.accuracy)}
                                    </span>
                                </div>
                            }
                        />
                    </div>
                </Show>
            </div>
        </DashboardLayout>
    }
}
