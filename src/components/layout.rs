use leptos::prelude::*;

use super::{Footer, Navbar, RequireSession, Sidebar};

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="public-layout">
            <Navbar/>
            <main class="public-main">{children()}</main>
            <Footer/>
        </div>
    }
}

/// Guarded admin shell: sidebar plus content
#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireSession>
            <div class="admin-layout">
                <Sidebar/>
                <main class="admin-main">{children()}</main>
            </div>
        </RequireSession>
    }
}
