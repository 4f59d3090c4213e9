//! Search Results

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use super::fetch_post_page;
use crate::api::{Generation, PostQuery};
use crate::components::{NumberedPager, PublicLayout};
use crate::content::{excerpt, highlight};
use crate::context::use_app;
use crate::models::Post;
use crate::pagination::Pager;

const EXCERPT_CHARS: usize = 200;

#[component]
pub fn SearchPage() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let keyword = Memo::new(move |_| query.with(|q| q.get("q")).unwrap_or_default());
    let pager = RwSignal::new(Pager::new());
    let page = Memo::new(move |_| pager.with(|p| p.page));
    let (results, set_results) = signal(Vec::<Post>::new());
    let generation = Generation::new();

    Effect::new(move |prev: Option<String>| {
        let current = keyword.get();
        if prev.is_some_and(|p| p != current) {
            pager.update(Pager::reset);
        }
        current
    });

    Effect::new(move |_| {
        let kw = keyword.get();
        if kw.trim().is_empty() {
            // an earlier keyword's fetch may still land
            generation.begin();
            set_results.set(Vec::new());
            return;
        }
        let q = PostQuery::page(page.get()).with_search(&kw);
        fetch_post_page(app.api(), &generation, q, pager, set_results, "SEARCH");
    });

    let navigate = use_navigate();
    let home = navigate.clone();

    view! {
        <PublicLayout>
            <div class="search-page">
                <h2>"Search Results for " <span class="keyword">"\"" {move || keyword.get()} "\""</span></h2>
                <Show
                    when=move || results.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="empty">"No results found."</p> }
                >
                    <div class="post-grid">
                        <For
                            each=move || results.get()
                            key=|post| post.id
                            children={
                                let navigate = navigate.clone();
                                move |post: Post| {
                                    let navigate = navigate.clone();
                                    let href = format!("/posts/{}", post.id);
                                    let thumb = post.all_images.first().map(|p| app.asset(p));
                                    let segments = highlight(&post.title, &keyword.get_untracked());
                                    let body = excerpt(post.fulltext.as_deref().unwrap_or_default(), EXCERPT_CHARS);
                                    view! {
                                        <div class="post-card" on:click=move |_| navigate(&href, NavigateOptions::default())>
                                            {thumb.map(|src| view! { <img src=src alt=post.title.clone()/> })}
                                            <h3>
                                                {segments
                                                    .into_iter()
                                                    .map(|s| if s.hit {
                                                        view! { <mark>{s.text}</mark> }.into_any()
                                                    } else {
                                                        s.text.into_any()
                                                    })
                                                    .collect_view()}
                                            </h3>
                                            <p>{body}</p>
                                        </div>
                                    }
                                }
                            }
                        />
                    </div>
                    <NumberedPager pager=pager delta=4/>
                </Show>
                <button class="btn-success" on:click=move |_| home("/", NavigateOptions::default())>
                    "⬅ Back to Home"
                </button>
            </div>
        </PublicLayout>
    }
}
