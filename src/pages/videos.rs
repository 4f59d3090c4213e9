//! Video Gallery

use leptos::prelude::*;

use super::fetch_post_page;
use crate::api::{Generation, PostQuery};
use crate::components::{PublicLayout, StepPager};
use crate::content::{embed_url, extract_video_url, youtube_thumbnail};
use crate::context::use_app;
use crate::models::Post;
use crate::pagination::Pager;

const VIDEO_CATEGORY_ID: u64 = 7;
const VIDEOS_PER_PAGE: u32 = 6;

#[component]
pub fn VideoGalleryPage() -> impl IntoView {
    let app = use_app();
    let pager = RwSignal::new(Pager::new());
    let page = Memo::new(move |_| pager.with(|p| p.page));
    let (videos, set_videos) = signal(Vec::<Post>::new());
    let (active_video, set_active_video) = signal::<Option<String>>(None);
    let generation = Generation::new();

    Effect::new(move |_| {
        let q = PostQuery::page(page.get())
            .with_category_id(Some(VIDEO_CATEGORY_ID))
            .with_limit(VIDEOS_PER_PAGE);
        fetch_post_page(app.api(), &generation, q, pager, set_videos, "VIDEOS");
    });

    view! {
        <PublicLayout>
            <section class="video-gallery">
                <h2>"ဗွီဒီယိုမှတ်တမ်းများ"</h2>
                <Show
                    when=move || videos.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="empty">"❌ Video မရှိပါ"</p> }
                >
                    <div class="video-grid">
                        <For
                            each=move || videos.get()
                            key=|post| post.id
                            children=move |post| {
                                let url = post.fulltext.as_deref().and_then(extract_video_url);
                                let thumb = url.as_deref().and_then(youtube_thumbnail);
                                view! {
                                    <div class="video-card" on:click=move |_| set_active_video.set(url.clone())>
                                        <div class="video-thumb">
                                            {match thumb {
                                                Some(src) => view! { <img src=src alt=post.title.clone()/> }.into_any(),
                                                None => view! { <div class="no-thumb">"No Thumbnail"</div> }.into_any(),
                                            }}
                                            <div class="play-overlay">"▶"</div>
                                        </div>
                                        <h3>{post.title.clone()}</h3>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
                <StepPager pager=pager prev_label="⬅ Previous" next_label="Next ➡"/>
            </section>
            {move || active_video.get().map(|url| view! {
                <div class="video-modal" on:click=move |_| set_active_video.set(None)>
                    <div class="video-frame" on:click=|ev| ev.stop_propagation()>
                        <button class="close-btn" on:click=move |_| set_active_video.set(None)>"×"</button>
                        <iframe
                            src=embed_url(&url)
                            title="video-player"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                </div>
            })}
        </PublicLayout>
    }
}
