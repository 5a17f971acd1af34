//! Login and signup forms.
//!
//! No credentials are checked or stored: submitting shows the loading
//! state for [`AUTH_DELAY`] and moves on to the dashboard.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use medipredict::Route;

use crate::components::AuthLayout;
use crate::config::AUTH_DELAY;

/// Submit handler shared by both forms.
fn fake_sign_in(loading: RwSignal<bool>) -> impl Fn(ev::SubmitEvent) + 'static {
    let navigate = use_navigate();
    move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(AUTH_DELAY.as_millis() as u32).await;
            log::info!("➡️  Signed in, opening {}", Route::Dashboard);
            navigate(Route::Dashboard.path(), Default::default());
        });
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let loading = create_rw_signal(false);
    let on_submit = fake_sign_in(loading);

    view! {
        <AuthLayout title="Welcome back" subtitle="Log in to see your latest predictions">
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input type="email" name="email" placeholder="you@example.com" required/>
                </label>
                <label>
                    "Password"
                    <input type="password" name="password" placeholder="••••••••" required/>
                </label>
                <div class="form-row">
                    <label class="checkbox">
                        <input type="checkbox" name="remember"/>
                        "Remember me"
                    </label>
                    <a href="#" class="link">"Forgot password?"</a>
                </div>
                <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Log In" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <A href=Route::Signup.path()>"Sign up"</A>
            </p>
        </AuthLayout>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let loading = create_rw_signal(false);
    let on_submit = fake_sign_in(loading);

    view! {
        <AuthLayout title="Create your account" subtitle="Start screening your reports in minutes">
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Full name"
                    <input type="text" name="name" placeholder="Sarah Johnson" required/>
                </label>
                <label>
                    "Email"
                    <input type="email" name="email" placeholder="you@example.com" required/>
                </label>
                <label>
                    "Password"
                    <input type="password" name="password" placeholder="At least 8 characters" required/>
                </label>
                <label class="checkbox">
                    <input type="checkbox" name="terms" required/>
                    "I agree to the Terms of Service and Privacy Policy"
                </label>
                <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <A href=Route::Login.path()>"Log in"</A>
            </p>
        </AuthLayout>
    }
}
