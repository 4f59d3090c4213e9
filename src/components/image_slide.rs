//! Home Carousel
//!
//! Autoplaying slider with arrows, dots and pointer swipe.

use std::time::Duration;

use leptos::ev::PointerEvent;
use leptos::prelude::*;
use leptos_dragdrop::{now_ms, SwipeTracker};

use crate::carousel::{swipe_direction, SlideDeck, AUTOPLAY_MS};

struct Slide {
    img: &'static str,
    description: &'static str,
}

static SLIDES: [Slide; 5] = [
    Slide { img: "/images/slide/mpf.jpg", description: "မြန်မာနိုင်ငံရဲတပ်ဖွဲ့" },
    Slide { img: "/images/slide/GAD.jpg", description: "အထွေထွေအုပ်ချုပ်ရေးဦးစီးဌာန" },
    Slide { img: "/images/slide/BSI.jpg", description: "အထူးစုံစမ်းစစ်ဆေးရေးဦးစီးဌာန" },
    Slide { img: "/images/slide/pd.jpg", description: "အကျဉ်းဦးစီးဌာန" },
    Slide { img: "/images/slide/fsd.jpg", description: "မီးသတ်ဦးစီးဌာန" },
];

/// Advance `deck` every `period_ms` until the owner is disposed
pub(crate) fn autoplay(deck: RwSignal<SlideDeck>, period_ms: u64) {
    if let Ok(handle) = set_interval_with_handle(
        move || deck.update(|d| d.paginate(1)),
        Duration::from_millis(period_ms),
    ) {
        on_cleanup(move || handle.clear());
    }
}

/// Pointer handlers feeding a swipe into `deck`
pub(crate) fn swipe_handlers(
    deck: RwSignal<SlideDeck>,
) -> (
    impl Fn(PointerEvent) + Copy + 'static,
    impl Fn(PointerEvent) + Copy + 'static,
    impl Fn(PointerEvent) + Copy + 'static,
) {
    let tracker = StoredValue::new(SwipeTracker::new());
    let on_down = move |ev: PointerEvent| {
        tracker.update_value(|t| t.begin(ev.client_x() as f64, now_ms()));
    };
    let on_up = move |ev: PointerEvent| {
        let mut swipe = None;
        tracker.update_value(|t| swipe = t.finish(ev.client_x() as f64, now_ms()));
        if let Some(direction) = swipe.and_then(swipe_direction) {
            deck.update(|d| d.paginate(direction));
        }
    };
    let on_leave = move |_ev: PointerEvent| tracker.update_value(SwipeTracker::cancel);
    (on_down, on_up, on_leave)
}

#[component]
pub fn ImageSlide() -> impl IntoView {
    let deck = RwSignal::new(SlideDeck::default());
    let len = SLIDES.len();
    autoplay(deck, AUTOPLAY_MS);
    let (on_down, on_up, on_leave) = swipe_handlers(deck);

    view! {
        <div
            class="image-slide"
            on:pointerdown=on_down
            on:pointerup=on_up
            on:pointerleave=on_leave
        >
            {move || {
                let d = deck.get();
                let idx = d.index(len);
                let slide = &SLIDES[idx];
                view! {
                    <div class="slide" class:from-left=d.direction < 0>
                        <img src=slide.img alt=format!("slide-{}", idx + 1) draggable="false"/>
                        <div class="slide-caption">
                            <h3>{slide.description}</h3>
                        </div>
                    </div>
                }
            }}
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
        </div>
    }
}
