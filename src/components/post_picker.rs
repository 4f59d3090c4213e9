//! Post Picker Modal
//!
//! Paged, searchable post lookup used to link a menu entry to a post. Keeps
//! its own page, search text and category filter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use super::StepPager;
use crate::api::{self, Generation, PostQuery};
use crate::context::use_app;
use crate::models::{Category, Post};
use crate::pagination::Pager;

#[component]
pub fn PostPicker(
    open: RwSignal<bool>,
    categories: ReadSignal<Vec<Category>>,
    /// Receives the chosen post's id and title
    #[prop(into)]
    on_select: Callback<(u64, String)>,
) -> impl IntoView {
    let app = use_app();
    let pager = RwSignal::new(Pager::new());
    let (search, set_search) = signal(String::new());
    let (category_id, set_category_id) = signal::<Option<u64>>(None);
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let generation = Generation::new();
    let page = Memo::new(move |_| pager.with(|p| p.page));

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let query = PostQuery::page(page.get())
            .with_search(&search.get())
            .with_category_id(category_id.get());
        let api = app.api();
        let generation = generation.clone();
        let ticket = generation.begin();
        spawn_local(async move {
            match api::list_posts(&api, &query).await {
                Ok(page) if generation.is_current(ticket) => {
                    set_posts.set(page.data);
                    pager.update(|p| p.set_last_page(page.last_page));
                }
                Ok(_) => {}
                Err(e) => warn!("[PICKER] failed to load posts: {}", e),
            }
        });
    });

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal post-picker">
                    <h3>"Select Post"</h3>
                    <div class="picker-filters">
                        <input
                            type="text"
                            placeholder="Search..."
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
                                children=move |c| view! {
                                    <option value=c.id.to_string() selected=move || category_id.get() == Some(c.id)>
                                        {c.title.clone()}
                                    </option>
                                }
                            />
                        </select>
                    </div>
                    <table class="picker-table">
                        <thead>
                            <tr><th>"Title"</th><th></th></tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || posts.get()
                                key=|p| p.id
                                children=move |p| {
                                    let title = p.title.clone();
                                    view! {
                                        <tr>
                                            <td>{p.title.clone()}</td>
                                            <td>
                                                <button
                                                    class="btn-success"
                                                    on:click=move |_| {
                                                        on_select.run((p.id, title.clone()));
                                                        open.set(false);
                                                    }
                                                >
                                                    "Select"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <StepPager pager=pager/>
                    <button class="btn-secondary" on:click=move |_| open.set(false)>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
