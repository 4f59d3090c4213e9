use leptos::prelude::*;

use crate::components::AdminLayout;

/// Lines of the in-memory log shown under "Recent activity"
const RECENT_LINES: usize = 20;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let recent: Vec<String> = rolling_logger::recent().into_iter().rev().take(RECENT_LINES).collect();

    view! {
        <AdminLayout>
            <h1>"Dashboard"</h1>
            <p>"Welcome to your admin dashboard. Select a menu item to manage content."</p>
            <section class="recent-activity">
                <h2>"Recent activity"</h2>
                <ul>
                    {recent.iter().map(|line| view! { <li><code>{line.clone()}</code></li> }).collect_view()}
                </ul>
            </section>
        </AdminLayout>
    }
}
