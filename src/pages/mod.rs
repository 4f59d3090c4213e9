//! Routed Pages

pub mod admin;
mod home;
mod media;
mod post_detail;
mod search;
mod videos;

pub use home::HomePage;
pub use media::MediaPage;
pub use post_detail::PostDetailPage;
pub use search::SearchPage;
pub use videos::VideoGalleryPage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::api::{self, ApiClient, Generation, PostQuery};
use crate::models::Post;
use crate::pagination::Pager;

/// Load one page of posts into `set_posts` and record the last page.
/// Responses to superseded requests are dropped.
pub(crate) fn fetch_post_page(
    api: ApiClient,
    generation: &Generation,
    query: PostQuery,
    pager: RwSignal<Pager>,
    set_posts: WriteSignal<Vec<Post>>,
    tag: &'static str,
) {
    let generation = generation.clone();
    let ticket = generation.begin();
    spawn_local(async move {
        match api::list_posts(&api, &query).await {
            Ok(page) if generation.is_current(ticket) => {
                set_posts.set(page.data);
                pager.update(|p| p.set_last_page(page.last_page));
            }
            Ok(_) => {}
            Err(e) => warn!("[{}] failed to load posts: {}", tag, e),
        }
    });
}
