//! Top navigation bar shared by every layout.

use leptos::*;
use leptos_router::*;
use medipredict::{mock, Layout, Route};

use crate::config::{APP_NAME, APP_TAGLINE};
use crate::types::first_name;

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let current = create_memo(move |_| Route::from_path(&location.pathname.get()));

    let home = move || current.get().home().path().to_string();
    let layout = move || current.get().layout();

    view! {
        <header>
            <div class="header-left">
                <A href=home class="logo">
                    <span class="logo-mark">"✚"</span>
                    <span class="logo-text">
                        <strong>{APP_NAME}</strong>
                        <small>{APP_TAGLINE}</small>
                    </span>
                </A>
            </div>
            <div class="header-right">
                {move || match layout() {
                    // Login and signup pages carry their own calls to action.
                    Layout::Auth => ().into_view(),
                    Layout::Marketing => view! { <GuestActions/> }.into_view(),
                    Layout::Dashboard => view! { <AccountActions/> }.into_view(),
                }}
            </div>
        </header>
    }
}

#[component]
fn GuestActions() -> impl IntoView {
    view! {
        <A href=Route::Login.path() class="btn btn-ghost">"Log In"</A>
        <A href=Route::Signup.path() class="btn btn-primary">"Get Started"</A>
    }
}

#[component]
fn AccountActions() -> impl IntoView {
    let name = first_name(mock::PATIENT_NAME);
    let initial = name.chars().next().unwrap_or('?');

    view! {
        <span class="notification-dot" title="Notifications">"🔔"</span>
        <div class="account">
            <span class="avatar">{initial.to_string()}</span>
            <span class="account-name">{name}</span>
        </div>
        <A href=Route::Login.path() class="btn btn-ghost">"Log Out"</A>
    }
}
