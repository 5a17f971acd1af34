//! Authenticated shell: header, sidebar, content area and the mobile
//! bottom bar.

use leptos::*;
use leptos_router::*;
use medipredict::{NavItem, BOTTOM_NAV, PRIMARY_NAV};

use crate::components::Header;
use crate::config::SIDEBAR_TIP;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <Header/>
        <div class="dashboard-shell">
            <aside class="sidebar">
                <nav class="sidebar-nav">
                    {nav_links(&PRIMARY_NAV, "sidebar-link")}
                </nav>
                <div class="sidebar-tip">
                    <strong>"Health Tip"</strong>
                    <p>{SIDEBAR_TIP}</p>
                </div>
                <nav class="sidebar-nav bottom">
                    {nav_links(&BOTTOM_NAV, "sidebar-link")}
                </nav>
            </aside>
            <main class="dashboard-content">
                {children()}
            </main>
        </div>
        <nav class="mobile-nav">
            {nav_links(&PRIMARY_NAV, "mobile-link")}
        </nav>
    }
}

fn nav_links(items: &'static [NavItem], class: &'static str) -> View {
    items
        .iter()
        .map(|item| view! {
            <A href=item.route.path() class=class active_class="active" exact=true>
                {item.label}
            </A>
        })
        .collect_view()
}
