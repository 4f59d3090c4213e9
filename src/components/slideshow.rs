use leptos::prelude::*;

use super::image_slide::{autoplay, swipe_handlers};
use crate::carousel::SlideDeck;

const SLIDESHOW_MS: u64 = 4000;

/// Post image slideshow; `images` are absolute URLs
#[component]
pub fn Slideshow(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let deck = RwSignal::new(SlideDeck::default());
    let len = images.len();
    if len > 1 {
        autoplay(deck, SLIDESHOW_MS);
    }
    let (on_down, on_up, on_leave) = swipe_handlers(deck);

    view! {
        <div class="slideshow" on:pointerdown=on_down on:pointerup=on_up on:pointerleave=on_leave>
            {move || {
                let idx = deck.get().index(len);
                images.get(idx).cloned().map(|src| view! {
                    <img src=src alt=format!("{}-{}", alt, idx) draggable="false"/>
                })
            }}
            <Show when=move || { len > 1 }>
                <button class="slide-arrow left" on:click=move |_| deck.update(|d| d.paginate(-1))>"◀"</button>
                <button class="slide-arrow right" on:click=move |_| deck.update(|d| d.paginate(1))>"▶"</button>
                <div class="slide-dots">
                    {(0..len)
                        .map(|i| view! {
                            <button
                                class="dot"
                                class:active=move || deck.get().index(len) == i
                                on:click=move |_| deck.update(|d| d.jump_to(i, len))
                            />
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
