//! Pagination Controls
//!
//! Both variants drive a shared `RwSignal<Pager>`; the owning view refetches
//! when the page changes.

use leptos::prelude::*;

use crate::pagination::Pager;

/// Start / Prev / numbered window / Next / End
#[component]
pub fn NumberedPager(pager: RwSignal<Pager>, delta: u32) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                disabled=move || !pager.get().can_go_first()
                on:click=move |_| pager.update(Pager::go_first)
            >
                "Start"
            </button>
            <button
                disabled=move || !pager.get().can_go_prev()
                on:click=move |_| pager.update(Pager::go_prev)
            >
                "Prev"
            </button>
            <For
                each=move || pager.get().window(delta)
                key=|n| *n
                children=move |n| view! {
                    <button
                        class="page-number"
                        class:active=move || pager.get().page == n
                        on:click=move |_| pager.update(|p| p.go_to(n))
                    >
                        {n}
                    </button>
                }
            />
            <button
                disabled=move || !pager.get().can_go_next()
                on:click=move |_| pager.update(Pager::go_next)
            >
                "Next"
            </button>
            <button
                disabled=move || !pager.get().can_go_last()
                on:click=move |_| pager.update(Pager::go_last)
            >
                "End"
            </button>
        </div>
    }
}

/// Previous / "Page X of Y" / Next
#[component]
pub fn StepPager(
    pager: RwSignal<Pager>,
    #[prop(into, default = "Prev".into())] prev_label: String,
    #[prop(into, default = "Next".into())] next_label: String,
) -> impl IntoView {
    view! {
        <div class="pager step">
            <button
                disabled=move || !pager.get().can_go_prev()
                on:click=move |_| pager.update(Pager::go_prev)
            >
                {prev_label}
            </button>
            <span class="page-status">
                {move || {
                    let p = pager.get();
                    format!("Page {} of {}", p.page, p.last_page)
                }}
            </span>
            <button
                disabled=move || !pager.get().can_go_next()
                on:click=move |_| pager.update(Pager::go_next)
            >
                {next_label}
            </button>
        </div>
    }
}
