//! Menu Endpoints

use tracing::info;

use super::{ApiClient, ApiError, NO_QUERY};
use crate::models::{BulkItem, BulkUpdate, MenuNode, MenuPayload};

/// The full nested menu tree
pub async fn list_menus(api: &ApiClient) -> Result<Vec<MenuNode>, ApiError> {
    let value: serde_json::Value = api.get("/menus", NO_QUERY).await?;
    // A non-list body means no menus
    if !value.is_array() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

pub async fn create_menu(api: &ApiClient, payload: &MenuPayload) -> Result<(), ApiError> {
    let _: serde_json::Value = api.post("/menus", payload).await?;
    info!("[MENUS] created \"{}\" under {:?}", payload.title, payload.parent_id);
    Ok(())
}

pub async fn update_menu(api: &ApiClient, id: u64, payload: &MenuPayload) -> Result<(), ApiError> {
    let _: serde_json::Value = api.put(&format!("/menus/{}", id), payload).await?;
    info!("[MENUS] updated {}", id);
    Ok(())
}

/// The server decides what happens to the children of a deleted menu
pub async fn delete_menu(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete(&format!("/menus/{}", id)).await?;
    info!("[MENUS] deleted {}", id);
    Ok(())
}

/// Persist parent, order and linked post for every row in one request
pub async fn bulk_update_menus(api: &ApiClient, items: &[BulkItem]) -> Result<(), ApiError> {
    let body = BulkUpdate { items: items.to_vec() };
    let _: serde_json::Value = api.post("/menus/bulk-update", &body).await?;
    info!("[MENUS] bulk saved {} rows", items.len());
    Ok(())
}
