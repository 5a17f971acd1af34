//! Footer component

use leptos::*;
use leptos_router::*;
use medipredict::Route;

use crate::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "Copyright © 2026 " {APP_NAME} " • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                <A href=Route::Help.path() class="footer-link">"Help"</A>
                <A href=Route::Signup.path() class="footer-link">"Create Account"</A>
                <A href=Route::Login.path() class="footer-link">"Log In"</A>
            </div>
            <p class="footer-note">
                "MediPredict is a screening aid and does not replace professional medical advice."
            </p>
        </footer>
    }
}
