//! Post Create / Edit
//!
//! One form for both routes. Chosen files are read into memory right away so
//! the draft stays plain data; previews use object URLs revoked on removal.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::load_categories;
use crate::api::{self, ApiError};
use crate::components::{alert, flash_href, AdminLayout};
use crate::content::clean_fulltext;
use crate::context::use_app;
use crate::error::FormError;
use crate::models::{Category, NewImage, PostDraft};

const POSTS_PATH: &str = "/admini/posts";

/// Read every file selected in `input` into memory
async fn read_selected_files(input: web_sys::HtmlInputElement) -> Result<Vec<NewImage>, ApiError> {
    let Some(files) = input.files() else {
        return Ok(Vec::new());
    };
    let mut images = Vec::new();
    for idx in 0..files.length() {
        let Some(file) = files.get(idx) else { continue };
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| ApiError::File(format!("could not read {}", file.name())))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
        images.push(NewImage { name: file.name(), mime: file.type_(), bytes, preview_url });
    }
    Ok(images)
}

fn revoke_preview(image: &NewImage) {
    if !image.preview_url.is_empty() {
        let _ = web_sys::Url::revoke_object_url(&image.preview_url);
    }
}

fn validate(draft: &PostDraft) -> Result<(), FormError> {
    if draft.title.trim().is_empty() {
        return Err(FormError::Required("Title"));
    }
    Ok(())
}

#[component]
pub fn PostCreatePage() -> impl IntoView {
    view! { <PostForm post_id=None/> }
}

#[component]
pub fn PostEditPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let id = params.with(|p| p.get("id")).and_then(|s| s.parse::<u64>().ok());
        match id {
            Some(id) => view! { <PostForm post_id=Some(id)/> }.into_any(),
            None => view! { <p class="error">"Invalid post id"</p> }.into_any(),
        }
    }
}

#[component]
fn PostForm(post_id: Option<u64>) -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let draft = RwSignal::new(PostDraft::default());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (submitting, set_submitting) = signal(false);

    load_categories(set_categories);

    if let Some(id) = post_id {
        let api = app.api();
        spawn_local(async move {
            match api::get_post(&api, id).await {
                Ok(post) => draft.set(PostDraft {
                    title: post.title,
                    introtext: post.introtext.unwrap_or_default(),
                    fulltext: post.fulltext.unwrap_or_default(),
                    category_id: post.category.map(|c| c.id).or(post.catid),
                    existing_images: post.images,
                    new_images: Vec::new(),
                }),
                Err(e) => warn!("[POSTS] failed to load post {}: {}", id, e),
            }
        });
    }

    on_cleanup(move || draft.with_untracked(|d| d.new_images.iter().for_each(revoke_preview)));

    let on_files = move |ev: leptos::ev::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        spawn_local(async move {
            match read_selected_files(input.clone()).await {
                Ok(images) => draft.update(|d| d.new_images.extend(images)),
                Err(e) => alert(&e.to_string()),
            }
            // allow picking the same file again
            input.set_value("");
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut submission = draft.get_untracked();
        if let Err(e) = validate(&submission) {
            alert(&e.to_string());
            return;
        }
        set_submitting.set(true);
        let api = app.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            let (result, done, failed) = match post_id {
                Some(id) => {
                    submission.fulltext = clean_fulltext(&submission.fulltext);
                    (
                        api::update_post(&api, id, &submission).await,
                        "Post updated successfully!",
                        "Failed to update post: ",
                    )
                }
                None => (
                    api::create_post(&api, &submission).await,
                    "Post created successfully!",
                    "Failed to create post: ",
                ),
            };
            set_submitting.set(false);
            match result {
                Ok(()) => navigate(&flash_href(POSTS_PATH, done), NavigateOptions::default()),
                Err(e) => alert(&format!("{}{}", failed, e.user_message(&e.to_string()))),
            }
        });
    };

    let back = use_navigate();
    let heading = if post_id.is_some() { "Edit Post" } else { "Create Post" };
    let submit_label = if post_id.is_some() { "✅ Update Post" } else { "✅ Create Post" };

    view! {
        <AdminLayout>
            <h1>{heading}</h1>
            <form class="post-form" on:submit=on_submit.clone()>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    required
                />
                <textarea
                    placeholder="Intro text"
                    prop:value=move || draft.with(|d| d.introtext.clone())
                    on:input=move |ev| draft.update(|d| d.introtext = event_target_value(&ev))
                ></textarea>
                <label>"Full Text"</label>
                <textarea
                    class="fulltext"
                    rows="14"
                    prop:value=move || draft.with(|d| d.fulltext.clone())
                    on:input=move |ev| draft.update(|d| d.fulltext = event_target_value(&ev))
                ></textarea>
                <label>"Category"</label>
                <select on:change=move |ev| draft.update(|d| d.category_id = event_target_value(&ev).parse().ok())>
                    <option value="" selected=move || draft.with(|d| d.category_id.is_none())>"Select Category"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| {
                            let id = c.id;
                            view! {
                                <option value=id.to_string() selected=move || draft.with(|d| d.category_id == Some(id))>
                                    {c.title.clone()}
                                </option>
                            }
                        }
                    />
                </select>
                <label>"Intro Images"</label>
                <div class="image-previews">
                    {move || {
                        draft.with(|d| {
                            d.existing_images
                                .iter()
                                .enumerate()
                                .map(|(idx, path)| view! {
                                    <div class="preview">
                                        <img src=app.asset(path) alt="image"/>
                                        <button
                                            type="button"
                                            class="remove"
                                            on:click=move |_| draft.update(|d| {
                                                if idx < d.existing_images.len() {
                                                    d.existing_images.remove(idx);
                                                }
                                            })
                                        >
                                            "×"
                                        </button>
                                    </div>
                                })
                                .collect_view()
                        })
                    }}
                    {move || {
                        draft.with(|d| {
                            d.new_images
                                .iter()
                                .enumerate()
                                .map(|(idx, image)| view! {
                                    <div class="preview new">
                                        <img src=image.preview_url.clone() alt=image.name.clone()/>
                                        <button
                                            type="button"
                                            class="remove"
                                            on:click=move |_| draft.update(|d| {
                                                if idx < d.new_images.len() {
                                                    revoke_preview(&d.new_images.remove(idx));
                                                }
                                            })
                                        >
                                            "×"
                                        </button>
                                    </div>
                                })
                                .collect_view()
                        })
                    }}
                </div>
                <input type="file" accept="image/*" multiple on:change=on_files/>
                <div class="form-actions">
                    <button type="submit" class="btn-success" disabled=move || submitting.get()>
                        {submit_label}
                    </button>
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click={
                            let back = back.clone();
                            move |_| back(POSTS_PATH, NavigateOptions::default())
                        }
                    >
                        "← Back"
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
    fn test_title_required() {
        let mut draft = PostDraft::default();
        assert_eq!(validate(&draft), Err(FormError::Required("Title")));
        draft.title = "Notice".into();
        assert_eq!(validate(&draft), Ok(()));
    }
}
