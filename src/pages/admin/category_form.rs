use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use tracing::warn;

use crate::api;
use crate::components::{alert, flash_href, AdminLayout};
use crate::context::use_app;
use crate::error::FormError;

const CATEGORIES_PATH: &str = "/admini/categories";

fn validate(title: &str) -> Result<String, FormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FormError::Required("Title"));
    }
    Ok(title.to_string())
}

#[component]
pub fn CategoryCreatePage() -> impl IntoView {
    view! { <CategoryForm category_id=None/> }
}

#[component]
pub fn CategoryEditPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = params.with(|p| p.get("id")).and_then(|s| s.parse::<u64>().ok());
        match id {
            Some(id) => view! { <CategoryForm category_id=Some(id)/> }.into_any(),
            None => view! { <p class="error">"Invalid category id"</p> }.into_any(),
        }
    }
}

#[component]
fn CategoryForm(category_id: Option<u64>) -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let (title, set_title) = signal(String::new());

    if let Some(id) = category_id {
        let api = app.api();
        spawn_local(async move {
            match api::get_category(&api, id).await {
                Ok(category) => set_title.set(category.title),
                Err(e) => warn!("[CATEGORIES] failed to load {}: {}", id, e),
            }
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let title = match validate(&title.get_untracked()) {
                Ok(t) => t,
                Err(e) => {
                    alert(&e.to_string());
                    return;
                }
            };
            let api = app.api();
            let navigate = navigate.clone();
            spawn_local(async move {
                let (result, done) = match category_id {
                    Some(id) => (api::update_category(&api, id, &title).await, "Category updated"),
                    None => (api::create_category(&api, &title).await, "Category created"),
                };
                match result {
                    Ok(()) => navigate(&flash_href(CATEGORIES_PATH, done), NavigateOptions::default()),
                    Err(e) => alert(&e.user_message("Error saving category")),
                }
            });
        }
    };

    let heading = if category_id.is_some() { "Edit Category" } else { "Create Category" };
    let submit_label = if category_id.is_some() { "Update" } else { "Save" };

    view! {
        <AdminLayout>
            <h1>{heading}</h1>
            <form class="category-form" on:submit=on_submit.clone()>
                <input
                    type="text"
                    placeholder="Category Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    required
                />
                <div class="form-actions">
                    <button type="submit" class="btn-primary">{submit_label}</button>
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate(CATEGORIES_PATH, NavigateOptions::default())
                        }
                    >
                        "Back"
                    </button>
                </div>
            </form>
        </AdminLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_title() {
        assert_eq!(validate("  Press Releases "), Ok("Press Releases".to_string()));
        assert_eq!(validate("   "), Err(FormError::Required("Title")));
    }
}
