use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_session;
use crate::guard::LOGIN_PATH;

/// Admin navigation, gated by the stored role
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.sign_out();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-title">"Admin Panel"</div>
            <nav>
                <a href="/admini/dashboard">"Dashboard"</a>
                <Show when=move || session.role().can_manage_posts()>
                    <a href="/admini/posts">"Manage Posts"</a>
                </Show>
                <Show when=move || session.role().can_manage_site()>
                    <a href="/admini/menus">"Manage Menus"</a>
                    <a href="/admini/categories">"Categories"</a>
                </Show>
                <a href="/">"Go to Site"</a>
            </nav>
            <button class="logout-btn" on:click=logout>"Logout"</button>
        </aside>
    }
}
