//! Views that only exist as navigation targets for now.

use leptos::*;
use leptos_router::*;
use medipredict::Route;

use crate::components::{DashboardLayout, Footer, Header};

#[component]
fn ComingSoon(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <DashboardLayout>
            <div class="page-header">
                <h1>{title}</h1>
                <p class="subtitle">{description}</p>
            </div>
            <div class="card empty-state">
                <div class="empty-icon">"🚧"</div>
                <h3>"Coming soon"</h3>
                <A href=Route::Dashboard.path() class="btn btn-ghost">"Back to Dashboard"</A>
            </div>
        </DashboardLayout>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! { <ComingSoon title="Settings" description="Manage your account and preferences."/> }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! { <ComingSoon title="Help & Support" description="Guides and answers to common questions."/> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Header/>
        <div class="container empty-state">
            <h1>"404"</h1>
            <p class="subtitle">"The page you are looking for does not exist."</p>
            <A href=Route::Landing.path() class="btn btn-primary">"Go Home"</A>
        </div>
        <Footer/>
    }
}
