use leptos::prelude::*;

use crate::components::{Features, HeroBanner, Highlights, ImageSlide, NewsAndUpdates, PublicLayout};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PublicLayout>
            <HeroBanner/>
            <Highlights/>
            <NewsAndUpdates/>
            <ImageSlide/>
            <Features/>
        </PublicLayout>
    }
}
