//! MoHA Portal App
//!
//! Root component: shared contexts plus the route table for the public site
//! and the admin console.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::{AppContext, SessionContext};
use crate::pages::admin::{
    CategoriesPage, CategoryCreatePage, CategoryEditPage, DashboardPage, LoginPage, MenusPage, PostCreatePage,
    PostEditPage, PostsPage,
};
use crate::pages::{HomePage, MediaPage, PostDetailPage, SearchPage, VideoGalleryPage};
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    tracing::info!("[APP] api base {}", config.api_base);

    let session = Session::browser();
    provide_context(AppContext::new(config, session.clone()));
    provide_context(SessionContext::new(session));

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/media") view=MediaPage/>
                <Route path=path!("/posts/:id") view=PostDetailPage/>
                <Route path=path!("/search") view=SearchPage/>
                <Route path=path!("/videos") view=VideoGalleryPage/>

                <Route path=path!("/admini") view=LoginPage/>
                <Route path=path!("/admini/dashboard") view=DashboardPage/>
                <Route path=path!("/admini/posts") view=PostsPage/>
                <Route path=path!("/admini/posts/create") view=PostCreatePage/>
                <Route path=path!("/admini/posts/edit/:id") view=PostEditPage/>
                <Route path=path!("/admini/categories") view=CategoriesPage/>
                <Route path=path!("/admini/categories/create") view=CategoryCreatePage/>
                <Route path=path!("/admini/categories/edit/:id") view=CategoryEditPage/>
                <Route path=path!("/admini/menus") view=MenusPage/>
            </Routes>
        </Router>
    }
}
