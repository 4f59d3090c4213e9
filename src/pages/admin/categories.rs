use leptos::prelude::*;
use leptos::task::spawn_local;

use super::load_categories;
use crate::api;
use crate::components::{alert, AdminLayout, DeleteConfirmButton, FlashBanner};
use crate::context::use_app;
use crate::models::Category;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let app = use_app();
    let (categories, set_categories) = signal(Vec::<Category>::new());

    load_categories(set_categories);

    let delete = move |id: u64| {
        let api = app.api();
        spawn_local(async move {
            match api::delete_category(&api, id).await {
                Ok(()) => match api::list_categories(&api).await {
                    Ok(fresh) => set_categories.set(fresh),
                    Err(e) => tracing::warn!("[CATEGORIES] reload failed: {}", e),
                },
                Err(e) => alert(&e.user_message("Delete failed")),
            }
        });
    };

    view! {
        <AdminLayout>
            <FlashBanner/>
            <div class="page-header">
                <h1>"Categories"</h1>
                <a class="btn-success" href="/admini/categories/create">"+ Add Category"</a>
            </div>
            <table class="admin-table">
                <thead>
                    <tr><th>"ID"</th><th>"Title"</th><th>"Alias"</th><th>"Actions"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || categories.get()
                        key=|c| (c.id, c.title.clone())
                        children=move |c| {
                            let id = c.id;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{c.title.clone()}</td>
                                    <td>{c.alias.clone().unwrap_or_default()}</td>
                                    <td class="actions">
                                        <a class="btn-primary" href=format!("/admini/categories/edit/{}", id)>"Edit"</a>
                                        <DeleteConfirmButton
                                            prompt="Are you sure you want to delete this category?"
                                            on_confirm=Callback::new(move |_| delete(id))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </AdminLayout>
    }
}
