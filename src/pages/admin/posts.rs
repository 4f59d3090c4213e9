//! Manage Posts

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::load_categories;
use crate::api::{self, Generation, PostQuery};
use crate::components::{alert, AdminLayout, DeleteConfirmButton, FlashBanner, NumberedPager};
use crate::content::truncate;
use crate::context::use_app;
use crate::models::{Category, Post};
use crate::pages::fetch_post_page;
use crate::pagination::Pager;

const TITLE_CHARS: usize = 150;

#[component]
pub fn PostsPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let pager = RwSignal::new(Pager::new());
    let page = Memo::new(move |_| pager.with(|p| p.page));
    let (search, set_search) = signal(String::new());
    let (category_id, set_category_id) = signal::<Option<u64>>(None);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (reload, set_reload) = signal(0u32);
    let generation = Generation::new();

    load_categories(set_categories);

    Effect::new(move |_| {
        reload.track();
        let q = PostQuery::page(page.get())
            .with_search(&search.get())
            .with_category_id(category_id.get());
        fetch_post_page(app.api(), &generation, q, pager, set_posts, "POSTS");
    });

    let delete = move |id: u64| {
        let api = app.api();
        spawn_local(async move {
            match api::delete_post(&api, id).await {
                Ok(()) => set_reload.update(|v| *v += 1),
                Err(e) => alert(&e.user_message("Delete failed")),
            }
        });
    };

    let create_nav = navigate.clone();

    view! {
        <AdminLayout>
            <FlashBanner/>
            <div class="toolbar">
                <input
                    type="text"
                    placeholder="Search posts..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        pager.update(Pager::reset);
                    }
                />
                <select on:change=move |ev| {
                    set_category_id.set(event_target_value(&ev).parse().ok());
                    pager.update(Pager::reset);
                }>
                    <option value="">"All Categories"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.id.to_string()>{c.title.clone()}</option> }
                    />
                </select>
            </div>
            <div class="page-header">
                <h2>"Manage Posts"</h2>
                <button
                    class="btn-primary"
                    on:click={
                        let create_nav = create_nav.clone();
                        move |_| create_nav("/admini/posts/create", NavigateOptions::default())
                    }
                >
                    "Create Post"
                </button>
            </div>
            <table class="admin-table">
                <thead>
                    <tr><th>"ID"</th><th>"Title"</th><th>"Image"</th><th>"Actions"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || posts.get()
                        key=|p| p.id
                        children={
                            let navigate = navigate.clone();
                            move |p: Post| {
                                let navigate = navigate.clone();
                                let id = p.id;
                                let thumb = p.thumbnail().map(|path| app.asset(path));
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{truncate(&p.title, TITLE_CHARS)}</td>
                                        <td>
                                            {match thumb {
                                                Some(src) => view! { <img class="thumb" src=src alt=p.title.clone()/> }.into_any(),
                                                None => view! { <span class="muted">"No Image"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td class="actions">
                                            <button
                                                class="btn-warning"
                                                on:click=move |_| navigate(&format!("/admini/posts/edit/{}", id), NavigateOptions::default())
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                prompt="Delete this post?"
                                                on_confirm=Callback::new(move |_| delete(id))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        }
                    />
                    <Show when=move || posts.with(Vec::is_empty)>
                        <tr><td colspan="4" class="empty">"No posts found."</td></tr>
                    </Show>
                </tbody>
            </table>
            <NumberedPager pager=pager delta=3/>
        </AdminLayout>
    }
}
