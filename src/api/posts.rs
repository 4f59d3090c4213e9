//! Post Endpoints

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::info;

use super::{ApiClient, ApiError, NO_QUERY};
use crate::models::{Page, Post, PostDraft};

// ========================
// Argument Structs
// ========================

/// Filters for `GET /posts`; unset and empty values are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Category alias, e.g. `announcements`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl PostQuery {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Default::default() }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_empty(search);
        self
    }

    pub fn with_category_id(mut self, category_id: Option<u64>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_category(mut self, alias: &str) -> Self {
        self.category = non_empty(alias);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ========================
// Commands
// ========================

pub async fn list_posts(api: &ApiClient, query: &PostQuery) -> Result<Page<Post>, ApiError> {
    api.get("/posts", query).await
}

pub async fn get_post(api: &ApiClient, id: u64) -> Result<Post, ApiError> {
    api.get(&format!("/posts/{}", id), NO_QUERY).await
}

/// Multipart body shared by create and update
fn post_form(draft: &PostDraft, with_existing: bool) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("title", draft.title.clone())
        .text("introtext", draft.introtext.clone())
        .text("fulltext", draft.fulltext.clone());
    if let Some(category_id) = draft.category_id {
        form = form.text("catid", category_id.to_string());
    }
    if with_existing {
        for (idx, path) in draft.existing_images.iter().enumerate() {
            form = form.text(format!("existing_images[{}]", idx), path.clone());
        }
    }
    for (idx, image) in draft.new_images.iter().enumerate() {
        let part = Part::bytes(image.bytes.clone()).file_name(image.name.clone());
        let part = if image.mime.is_empty() {
            part
        } else {
            part.mime_str(&image.mime)
                .map_err(|e| ApiError::File(format!("{}: {}", image.name, e)))?
        };
        form = form.part(format!("images[{}]", idx), part);
    }
    Ok(form)
}

pub async fn create_post(api: &ApiClient, draft: &PostDraft) -> Result<(), ApiError> {
    let form = post_form(draft, false)?;
    let _: serde_json::Value = api.post_multipart("/v1/posts", form).await?;
    info!("[POSTS] created \"{}\" with {} images", draft.title, draft.new_images.len());
    Ok(())
}

/// Update through method spoofing; existing images not listed are removed
pub async fn update_post(api: &ApiClient, id: u64, draft: &PostDraft) -> Result<(), ApiError> {
    let form = post_form(draft, true)?;
    let _: serde_json::Value = api
        .post_multipart(&format!("/v1/posts/{}?_method=PUT", id), form)
        .await?;
    info!(
        "[POSTS] updated {} (kept {}, added {} images)",
        id,
        draft.existing_images.len(),
        draft.new_images.len()
    );
    Ok(())
}

pub async fn delete_post(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("/v1/posts/{}", id)).await?;
    info!("[POSTS] deleted {}", id);
    Ok(())
}
