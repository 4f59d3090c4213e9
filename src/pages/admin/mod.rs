//! Admin Console Pages

mod categories;
mod category_form;
mod dashboard;
mod login;
mod menus;
mod post_form;
mod posts;

pub use categories::CategoriesPage;
pub use category_form::{CategoryCreatePage, CategoryEditPage};
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use menus::MenusPage;
pub use post_form::{PostCreatePage, PostEditPage};
pub use posts::PostsPage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::api;
use crate::context::use_app;
use crate::models::Category;

/// Fill `set` with every category; failures only log
pub(crate) fn load_categories(set: WriteSignal<Vec<Category>>) {
    let api = use_app().api();
    spawn_local(async move {
        match api::list_categories(&api).await {
            Ok(categories) => set.set(categories),
            Err(e) => warn!("[CATEGORIES] failed to load: {}", e),
        }
    });
}
