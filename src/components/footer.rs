use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"© 2025 Ministry of Home Affairs. All rights reserved."</p>
        </footer>
    }
}
