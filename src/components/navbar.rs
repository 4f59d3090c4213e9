//! Site Navigation
//!
//! Logo, nested menu dropdowns built from `GET /menus`, and the search toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::warn;

use crate::api;
use crate::context::use_app;
use crate::models::MenuNode;
use crate::tree::active_only;

/// Where a menu click leads: the linked post, else the URL
pub fn menu_target(node: &MenuNode) -> Option<String> {
    if let Some(post_id) = node.post_id {
        return Some(format!("/posts/{}", post_id));
    }
    node.url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
}

/// Search results path for a typed keyword; blank input goes nowhere
pub fn search_href(keyword: &str) -> Option<String> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }
    Some(format!("/search?q={}", utf8_percent_encode(keyword, NON_ALPHANUMERIC)))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app();
    let (menus, set_menus) = signal(Vec::<MenuNode>::new());
    let (mobile_open, set_mobile_open) = signal(false);
    let (search_open, set_search_open) = signal(false);
    let (keyword, set_keyword) = signal(String::new());

    Effect::new(move |_| {
        let api = app.api();
        spawn_local(async move {
            match api::list_menus(&api).await {
                Ok(nodes) => set_menus.set(active_only(&nodes)),
                Err(e) => warn!("[NAV] failed to load menus: {}", e),
            }
        });
    });

    let navigate = use_navigate();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(&keyword.get_untracked()) {
            set_search_open.set(false);
            set_keyword.set(String::new());
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <header class="navbar">
            <Show
                when=move || search_open.get()
                fallback=move || view! {
                    <div class="navbar-inner">
                        <a href="/" class="navbar-logo">
                            <img src="/images/logo.png" alt="logo"/>
                        </a>
                        <button
                            class="navbar-toggle"
                            on:click=move |_| set_mobile_open.update(|o| *o = !*o)
                        >
                            {move || if mobile_open.get() { "✕" } else { "☰" }}
                        </button>
                        <ul class="navbar-menu" class:open=move || mobile_open.get()>
                            <For
                                each=move || menus.get()
                                key=|node| node.id
                                children=move |node| view! {
                                    <MenuEntry node=node set_mobile_open=set_mobile_open/>
                                }
                            />
                        </ul>
                        <button class="navbar-search-toggle" on:click=move |_| set_search_open.set(true)>
                            "🔍"
                        </button>
                    </div>
                }
            >
                <form class="navbar-search" on:submit=on_search.clone()>
                    <button type="button" class="back-btn" on:click=move |_| set_search_open.set(false)>
                        "←"
                    </button>
                    <input
                        type="text"
                        placeholder="Search posts..."
                        prop:value=move || keyword.get()
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    />
                    <button type="submit">"Search"</button>
                </form>
            </Show>
        </header>
    }
}

/// One menu entry and, recursively, its dropdown
#[component]
fn MenuEntry(node: MenuNode, set_mobile_open: WriteSignal<bool>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let has_children = node.has_children();
    let target = menu_target(&node);
    let children = node.children.clone();
    let navigate = use_navigate();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if has_children {
            set_open.update(|o| *o = !*o);
            return;
        }
        if let Some(href) = &target {
            set_mobile_open.set(false);
            navigate(href, NavigateOptions::default());
        }
    };

    view! {
        <li
            class="nav-item"
            class:has-children=has_children
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
        >
            <button class="nav-link" on:click=on_click>
                {node.title.clone()}
                {has_children.then(|| view! { <span class="caret">"▾"</span> })}
            </button>
            <Show when=move || has_children && open.get()>
                <ul class="dropdown">
                    {children
                        .iter()
                        .cloned()
                        .map(|child| view! { <MenuEntry node=child set_mobile_open=set_mobile_open/> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_target_prefers_post() {
        let mut node = MenuNode { id: 1, url: Some("/about".into()), post_id: Some(12), ..Default::default() };
        assert_eq!(menu_target(&node).as_deref(), Some("/posts/12"));
        node.post_id = None;
        assert_eq!(menu_target(&node).as_deref(), Some("/about"));
        node.url = Some("  ".into());
        assert_eq!(menu_target(&node), None);
    }

    #[test]
    fn test_search_href() {
        assert_eq!(search_href("   "), None);
        assert_eq!(search_href(" flood relief ").as_deref(), Some("/search?q=flood%20relief"));
        assert_eq!(
            search_href("ရဲ").as_deref(),
            Some("/search?q=%E1%80%9B%E1%80%B2")
        );
    }
}
