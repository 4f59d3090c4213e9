use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use tracing::warn;

use crate::api::{self, Generation};
use crate::components::{PublicLayout, Slideshow};
use crate::content::{format_date, render_post_body};
use crate::context::use_app;
use crate::models::Post;

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let app = use_app();
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|s| s.parse::<u64>().ok()));
    let (post, set_post) = signal::<Option<Post>>(None);
    let generation = Generation::new();

    Effect::new(move |_| {
        set_post.set(None);
        let ticket = generation.begin();
        let Some(id) = id.get() else {
            warn!("[POST] invalid post id in route");
            return;
        };
        let api = app.api();
        let generation = generation.clone();
        spawn_local(async move {
            match api::get_post(&api, id).await {
                Ok(loaded) if generation.is_current(ticket) => set_post.set(Some(loaded)),
                Ok(_) => {}
                Err(e) => warn!("[POST] failed to load post {}: {}", id, e),
            }
        });
    });

    view! {
        <PublicLayout>
            {move || match post.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(post) => {
                    let images: Vec<String> = post.gallery().iter().map(|p| app.asset(p)).collect();
                    let published = post.published_at.as_deref().map(format_date).unwrap_or_default();
                    let body = render_post_body(post.fulltext.as_deref().unwrap_or_default(), &app.asset_base());
                    view! {
                        <article class="post-detail">
                            <h1>{post.title.clone()}</h1>
                            {(!images.is_empty()).then(|| view! { <Slideshow images=images alt=post.title.clone()/> })}
                            <h3 class="published">"Published: " {published}</h3>
                            <hr/>
                            <div class="post-body" inner_html=body></div>
                        </article>
                    }
                    .into_any()
                }
            }}
        </PublicLayout>
    }
}
