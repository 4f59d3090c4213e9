//! Category Endpoints

use serde::Serialize;
use tracing::info;

use super::{ApiClient, ApiError, NO_QUERY};
use crate::models::Category;

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

pub async fn list_categories(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get("/categories", NO_QUERY).await
}

pub async fn get_category(api: &ApiClient, id: u64) -> Result<Category, ApiError> {
    api.get(&format!("/v1/categories/{}", id), NO_QUERY).await
}

pub async fn create_category(api: &ApiClient, title: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = api.post("/v1/categories", &TitleArgs { title }).await?;
    info!("[CATEGORIES] created \"{}\"", title);
    Ok(())
}

pub async fn update_category(api: &ApiClient, id: u64, title: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = api.put(&format!("/categories/{}", id), &TitleArgs { title }).await?;
    info!("[CATEGORIES] renamed {} to \"{}\"", id, title);
    Ok(())
}

pub async fn delete_category(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("/v1/categories/{}", id)).await?;
    info!("[CATEGORIES] deleted {}", id);
    Ok(())
}
