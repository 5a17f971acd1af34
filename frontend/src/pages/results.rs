//! Prediction results and the detailed report.

use leptos::*;
use leptos_router::*;
use medipredict::{mock, Route};

use crate::components::{DashboardLayout, ProgressBar, RiskBadge, StatusBadge};

/// Buttons in the page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportAction {
    Share,
    Download,
    Print,
    DownloadPdf,
}

const RESULTS_ACTIONS: [ReportAction; 2] = [ReportAction::Share, ReportAction::Download];
const REPORT_ACTIONS: [ReportAction; 2] = [ReportAction::Print, ReportAction::DownloadPdf];

impl ReportAction {
    fn label(&self) -> &'static str {
        match self {
            ReportAction::Share => "Share",
            ReportAction::Download => "Download",
            ReportAction::Print => "Print",
            ReportAction::DownloadPdf => "Download PDF",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ReportAction::Share => "🔗",
            ReportAction::Download | ReportAction::DownloadPdf => "⬇️",
            ReportAction::Print => "🖨️",
        }
    }

    /// Only printing does something; there is no file to share or download.
    fn run(&self) {
        match self {
            ReportAction::Print => {
                if let Err(e) = window().print() {
                    log::warn!("Print failed: {:?}", e);
                }
            }
            other => log::debug!("{} is not available in this prototype", other.label()),
        }
    }
}

#[component]
fn HeaderActions(actions: [ReportAction; 2]) -> impl IntoView {
    view! {
        <div class="header-actions">
            {actions
                .into_iter()
                .map(|action| view! {
                    <button type="button" class="btn btn-ghost" on:click=move |_| action.run()>
                        {action.icon()} " " {action.label()}
                    </button>
                })
                .collect_view()}
        </div>
    }
}

const DISCLAIMER: &str = "This prediction is generated by AI and is meant for screening only. \
It is not a medical diagnosis. Please consult a qualified healthcare professional.";

#[component]
fn Disclaimer() -> impl IntoView {
    view! {
        <div class="disclaimer">
            <strong>"⚠️ Medical Disclaimer"</strong>
            <p>{DISCLAIMER}</p>
        </div>
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let result = mock::prediction_result();

    view! {
        <DashboardLayout>
            <div class="page-header with-actions">
                <div>
                    <h1>"Prediction Results"</h1>
                    <p class="subtitle">
                        {format!("{} • Analyzed on {}", result.report_type, result.analyzed_at_display())}
                    </p>
                </div>
                <HeaderActions actions=RESULTS_ACTIONS/>
            </div>

            <section class=format!("card risk-card {}", result.risk_level.css_class())>
                <div class="risk-icon">
                    {if result.risk_level.is_alarming() { "⚠️" } else { "✅" }}
                </div>
                <span class="muted">"Predicted Condition"</span>
                <h2>{result.disease.clone()}</h2>
                <RiskBadge level=result.risk_level/>
                <p class="risk-note">"We recommend discussing these results with your doctor."</p>
            </section>

            <div class="two-columns">
                <section class="card">
                    <div class="metric-header">
                        <span>"Prediction Accuracy"</span>
                        <strong>{format!("{:.1}%", result.accuracy)}</strong>
                    </div>
                    <ProgressBar percent=result.accuracy class="accuracy"/>
                </section>
                <section class="card">
                    <div class="metric-header">
                        <span>"Model Confidence"</span>
                        <strong>{format!("{:.0}%", result.confidence)}</strong>
                    </div>
                    <ProgressBar percent=result.confidence class="confidence"/>
                </section>
            </div>

            <section class="card">
                <h2>"Key Health Indicators"</h2>
                <div class="indicator-grid">
                    {mock::key_indicators()
                        .iter()
                        .map(|indicator| view! {
                            <div class="indicator">
                                <span class="muted">{indicator.label.clone()}</span>
                                <strong>{indicator.value.clone()}</strong>
                                <StatusBadge status=indicator.status/>
                                <span class="muted small">
                                    {format!("Normal: {}", indicator.normal_range)}
                                </span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="actions">
                <A href=Route::DetailedReport.path() class="btn btn-primary">"View Detailed Report"</A>
                <A href=Route::Upload.path() class="btn btn-ghost">"Upload Another Report"</A>
            </div>

            <Disclaimer/>
        </DashboardLayout>
    }
}

#[component]
pub fn DetailedReportPage() -> impl IntoView {
    let result = mock::prediction_result();

    view! {
        <DashboardLayout>
            <div class="page-header with-actions">
                <div>
                    <h1>"Detailed Report"</h1>
                    <p class="subtitle">
                        {format!("{} • {}", result.report_type, result.analyzed_at_display())}
                    </p>
                </div>
                <HeaderActions actions=REPORT_ACTIONS/>
            </div>

            <section class="card">
                <div class="card-header">
                    <h2>"Analysis Summary"</h2>
                    <RiskBadge level=result.risk_level/>
                </div>
                <p>{mock::ANALYSIS_SUMMARY}</p>
            </section>

            <section class="card">
                <h2>"Extracted Parameters"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Parameter"</th>
                            <th>"Value"</th>
                            <th>"Reference Range"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {mock::extracted_parameters()
                            .iter()
                            .map(|param| view! {
                                <tr>
                                    <td>{param.name.clone()}</td>
                                    <td><strong>{param.value.clone()}</strong></td>
                                    <td class="muted">{param.reference.clone()}</td>
                                    <td><StatusBadge status=param.status/></td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="card">
                <h2>"Recommendations"</h2>
                <div class="card-grid">
                    {mock::recommendations()
                        .iter()
                        .map(|group| view! {
                            <article class="recommendation">
                                <h3>{group.title.clone()}</h3>
                                <ul>
                                    {group.items.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
                                </ul>
                            </article>
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="actions">
                <A href=Route::Results.path() class="btn btn-ghost">"← Back to Results"</A>
                <A href=Route::History.path() class="btn btn-primary">"View History"</A>
            </div>

            <Disclaimer/>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_actions() {
        let labels = |actions: [ReportAction; 2]| actions.map(|a| a.label());
        assert_eq!(labels(RESULTS_ACTIONS), ["Share", "Download"]);
        assert_eq!(labels(REPORT_ACTIONS), ["Print", "Download PDF"]);
    }
}
