//! Report upload with drag & drop support.
//!
//! Nothing is sent anywhere: "Analyze Report" waits [`UPLOAD_DELAY`] and
//! opens the processing view.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use medipredict::{mock, Route, UploadState};
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::DashboardLayout;
use crate::config::{accept_attribute, MAX_UPLOAD_LABEL, UPLOAD_DELAY};
use crate::services::{dropped_files, picked_files};
use crate::types::AppError;

#[component]
pub fn UploadPage() -> impl IntoView {
    let state = create_rw_signal(UploadState::new());
    let file_input = create_node_ref::<html::Input>();
    let navigate = use_navigate();

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_over());
    };
    let on_drag_leave = move |_: DragEvent| state.update(|s| s.drag_leave());
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = dropped_files(&ev);
        state.update(|s| s.drop_files(files));
    };
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = picked_files(&input);
        state.update(|s| s.pick_files(files));
    };
    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };
    let on_remove = move |_| state.update(|s| s.remove());

    let on_analyze = move |_| {
        let started = state.try_update(|s| match s.begin_upload() {
            Ok(file) => Some(file),
            Err(err) => {
                s.error = Some(err);
                None
            }
        });
        let Some(Some(file)) = started else {
            return;
        };
        log::info!("📤 Uploading {} ({})", file.name, file.size_display());
        let navigate = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(UPLOAD_DELAY.as_millis() as u32).await;
            navigate(Route::Processing.path(), Default::default());
        });
    };

    let error_message = move || state.with(|s| s.error.clone().map(|e| AppError::from(e).to_string()));

    view! {
        <DashboardLayout>
            <div class="page-header">
                <h1>"Upload Medical Report"</h1>
                <p class="subtitle">"Upload your report and our models will analyze it in seconds."</p>
            </div>

            <div class="card upload-card">
                <div
                    class="upload-zone"
                    class:dragging=move || state.with(|s| s.dragging)
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <div class="upload-icon">"📤"</div>
                    <div class="upload-text">"Drag and drop your report here"</div>
                    <div class="upload-hint">"or"</div>
                    <button type="button" class="btn btn-ghost" on:click=open_picker>
                        "Browse Files"
                    </button>
                    <div class="upload-hint">
                        "Supported formats: PDF, JPG, PNG, DICOM • " {MAX_UPLOAD_LABEL}
                    </div>
                    <input
                        type="file"
                        accept=accept_attribute()
                        style="display:none"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                </div>

                {move || state.with(|s| s.selected.clone()).map(|file| view! {
                    <div class="selected-file">
                        <span class="file-icon">"📄"</span>
                        <div class="file-info">
                            <strong>{file.name.clone()}</strong>
                            <span class="muted">{file.size_display()}</span>
                        </div>
                        <button
                            type="button"
                            class="btn btn-icon"
                            title="Remove file"
                            disabled=move || state.with(|s| s.uploading)
                            on:click=on_remove
                        >
                            "✕"
                        </button>
                    </div>
                })}

                <Show when=move || error_message().is_some()>
                    <div class="error-message">{move || error_message().unwrap_or_default()}</div>
                </Show>

                <button
                    type="button"
                    class="btn btn-primary btn-block"
                    disabled=move || state.with(|s| !s.can_upload())
                    on:click=on_analyze
                >
                    {move || if state.with(|s| s.uploading) { "Uploading..." } else { "Analyze Report" }}
                </button>
            </div>

            <div class="two-columns">
                <section class="card">
                    <h2>"Supported Formats"</h2>
                    <ul class="format-list">
                        {mock::supported_formats()
                            .iter()
                            .map(|format| view! {
                                <li>
                                    <strong>{format.format.clone()}</strong>
                                    <span class="muted">{format.description.clone()}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>
                <section class="card">
                    <h2>"Guidelines"</h2>
                    <ul class="guideline-list">
                        {mock::UPLOAD_GUIDELINES
                            .iter()
                            .map(|line| view! { <li>{*line}</li> })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </DashboardLayout>
    }
}
