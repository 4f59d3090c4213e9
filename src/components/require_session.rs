use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_session;
use crate::guard::{self, Access};

/// Render `children` only while a token is stored
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    move || match guard::check(session.has_token()) {
        Access::Granted => children().into_any(),
        Access::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
