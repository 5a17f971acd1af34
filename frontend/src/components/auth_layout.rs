//! Two-column shell for the login and signup forms.

use leptos::*;
use medipredict::mock;

use crate::components::Header;

#[component]
pub fn AuthLayout(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <Header/>
        <div class="auth-page">
            <section class="auth-card">
                <h1>{title}</h1>
                <p class="subtitle">{subtitle}</p>
                {children()}
            </section>
            <aside class="auth-aside">
                <h2>"Your health, understood."</h2>
                <ul class="highlight-list">
                    {mock::auth_highlights()
                        .iter()
                        .map(|card| view! {
                            <li>
                                <strong>{card.title.clone()}</strong>
                                <span>{card.description.clone()}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </aside>
        </div>
    }
}
