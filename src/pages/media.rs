//! Public Post Listing

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use super::fetch_post_page;
use crate::api::{Generation, PostQuery};
use crate::components::{NumberedPager, PublicLayout};
use crate::content::{excerpt, format_date};
use crate::context::use_app;
use crate::models::Post;
use crate::pagination::Pager;

const EXCERPT_CHARS: usize = 200;

#[component]
pub fn MediaPage() -> impl IntoView {
    let app = use_app();
    let query = use_query_map();
    let category = Memo::new(move |_| query.with(|q| q.get("category")).unwrap_or_default());
    let pager = RwSignal::new(Pager::new());
    let page = Memo::new(move |_| pager.with(|p| p.page));
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let generation = Generation::new();

    // A new category filter starts again from page 1
    Effect::new(move |prev: Option<String>| {
        let current = category.get();
        if prev.is_some_and(|p| p != current) {
            pager.update(Pager::reset);
        }
        current
    });

    Effect::new(move |_| {
        let q = PostQuery::page(page.get()).with_category(&category.get());
        fetch_post_page(app.api(), &generation, q, pager, set_posts, "MEDIA");
    });

    let navigate = use_navigate();

    view! {
        <PublicLayout>
            <div class="media-page">
                <h1>"Public Posts"</h1>
                <Show when=move || posts.with(Vec::is_empty)>
                    <p class="empty">"No posts available"</p>
                </Show>
                <div class="post-grid">
                    <For
                        each=move || posts.get()
                        key=|post| post.id
                        children=move |post| {
                            let navigate = navigate.clone();
                            let href = format!("/posts/{}", post.id);
                            let thumb = post.thumbnail().map(|p| app.asset(p));
                            let date = post.published_at.as_deref().map(format_date).unwrap_or_default();
                            let body = excerpt(post.fulltext.as_deref().unwrap_or_default(), EXCERPT_CHARS);
                            view! {
                                <div class="post-card" on:click=move |_| navigate(&href, NavigateOptions::default())>
                                    {thumb.map(|src| view! { <img src=src alt=post.title.clone()/> })}
                                    <div class="post-card-body">
                                        <h2>{post.title.clone()}</h2>
                                        <h3 class="date">"Created at: " {date}</h3>
                                        <p>{body}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
                <NumberedPager pager=pager delta=3/>
            </div>
        </PublicLayout>
    }
}
