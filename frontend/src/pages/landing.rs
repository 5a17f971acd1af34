//! Marketing landing page.

use leptos::*;
use leptos_router::*;
use medipredict::{mock, Route};

use crate::components::{Footer, Header};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Header/>
        <div class="container">
            <section class="hero">
                <span class="hero-tag">"AI-Powered Health Screening"</span>
                <h1>"Predict Diseases Early with Your Medical Reports"</h1>
                <p class="subtitle">
                    "Upload a lab report and get an instant risk assessment for diabetes, "
                    "heart, liver and kidney conditions."
                </p>
                <div class="hero-actions">
                    <A href=Route::Signup.path() class="btn btn-primary">"Start Free Analysis"</A>
                    <A href=Route::Login.path() class="btn btn-ghost">"I have an account"</A>
                </div>
            </section>

            <section class="stat-row">
                {mock::landing_stats()
                    .iter()
                    .map(|stat| view! {
                        <div class="stat">
                            <strong>{stat.value.clone()}</strong>
                            <span>{stat.label.clone()}</span>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="features">
                <h2>"Why MediPredict"</h2>
                <div class="card-grid">
                    {mock::landing_features()
                        .iter()
                        .map(|card| view! {
                            <article class="card">
                                <h3>{card.title.clone()}</h3>
                                <p>{card.description.clone()}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="steps">
                <h2>"How It Works"</h2>
                <ol class="step-list">
                    {mock::landing_steps()
                        .iter()
                        .enumerate()
                        .map(|(i, step)| view! {
                            <li class="step">
                                <span class="step-number">{i + 1}</span>
                                <h3>{step.title.clone()}</h3>
                                <p>{step.description.clone()}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="cta">
                <h2>"Ready to take control of your health?"</h2>
                <A href=Route::Signup.path() class="btn btn-primary">"Create Free Account"</A>
            </section>
        </div>
        <Footer/>
    }
}
