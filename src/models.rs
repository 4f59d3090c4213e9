//! Frontend Models
//!
//! Data structures matching the content API's JSON. Unknown fields are
//! ignored; list fields accept `null` or a non-array as "empty".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Published article
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub introtext: Option<String>,
    #[serde(default)]
    pub fulltext: Option<String>,
    /// Intro images (relative asset paths)
    #[serde(default, deserialize_with = "lenient_list")]
    pub images: Vec<String>,
    /// Every image of the post, including the intro ones
    #[serde(default, deserialize_with = "lenient_list")]
    pub all_images: Vec<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub catid: Option<u64>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Post {
    /// Images for a slideshow: the full set when the server sent one
    pub fn gallery(&self) -> &[String] {
        if self.all_images.is_empty() {
            &self.images
        } else {
            &self.all_images
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alias: Option<String>,
}

/// Menu entry as served by `GET /menus` (nested)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub post_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: bool,
    #[serde(default, deserialize_with = "lenient_list")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// One line of the flattened menu table
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    pub parent_id: Option<u64>,
    pub order: i64,
    pub active: bool,
    pub post_id: Option<u64>,
    /// Depth, 1 for top-level entries
    pub level: usize,
}

/// Position record sent by bulk save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkItem {
    pub id: u64,
    pub parent_id: Option<u64>,
    pub order: i64,
    pub post_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdate {
    pub items: Vec<BulkItem>,
}

/// Body of menu create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPayload {
    pub title: String,
    pub url: String,
    pub parent_id: Option<u64>,
    pub active: bool,
    pub post_id: Option<u64>,
}

/// Laravel-style paginated envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "lenient_list")]
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    #[serde(other)]
    Viewer,
}

impl Role {
    /// Posts screen
    pub fn can_manage_posts(self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    /// Menus and categories
    pub fn can_manage_site(self) -> bool {
        self == Role::Admin
    }
}

/// Signed-in user as persisted under the profile storage key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// A file chosen in the post form, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    /// Object URL for the thumbnail preview
    pub preview_url: String,
}

/// Admin post form contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostDraft {
    pub title: String,
    pub introtext: String,
    pub fulltext: String,
    pub category_id: Option<u64>,
    /// Server paths to keep; anything left out is removed
    pub existing_images: Vec<String>,
    pub new_images: Vec<NewImage>,
}

// ========================
// Lenient decoders
// ========================

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        serde_json::Value::String(s) => matches!(s.trim(), "1" | "true"),
        _ => false,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_node_lenient_fields() {
        let json = r#"[
            {"id": 1, "title": "Home", "active": 1, "children": null, "post_id": "12"},
            {"id": 2, "title": "About", "active": "0", "children": [
                {"id": 3, "title": "History", "active": true, "order": 4}
            ]}
        ]"#;
        let nodes: Vec<MenuNode> = serde_json::from_str(json).unwrap();
        assert!(nodes[0].active);
        assert!(nodes[0].children.is_empty());
        assert_eq!(nodes[0].post_id, Some(12));
        assert!(!nodes[1].active);
        assert_eq!(nodes[1].children[0].order, Some(4));
        assert_eq!(nodes[1].children[0].url, None);
    }

    #[test]
    fn test_post_gallery_prefers_all_images() {
        let post: Post = serde_json::from_str(
            r#"{"id": 5, "title": "t", "images": ["a.jpg"], "all_images": ["a.jpg", "b.jpg"], "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(post.gallery(), ["a.jpg", "b.jpg"]);

        let post: Post = serde_json::from_str(r#"{"id": 6, "images": "a.jpg", "all_images": null}"#).unwrap();
        assert!(post.images.is_empty());
        assert!(post.gallery().is_empty());
    }

    #[test]
    fn test_page_defaults() {
        let page: Page<Post> = serde_json::from_str(r#"{"data": [{"id": 1}]}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn test_page_with_null_data() {
        let page: Page<Category> = serde_json::from_str(r#"{"data": null, "current_page": 2, "last_page": 3}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!((page.current_page, page.last_page), (2, 3));
    }

    #[test]
    fn test_role_parsing_and_gates() {
        let p: UserProfile = serde_json::from_str(r#"{"role": "editor"}"#).unwrap();
        assert!(p.role.can_manage_posts());
        assert!(!p.role.can_manage_site());
        let p: UserProfile = serde_json::from_str(r#"{"role": "auditor"}"#).unwrap();
        assert_eq!(p.role, Role::Viewer);
        assert!(!p.role.can_manage_posts());
        assert!(Role::Admin.can_manage_site());
    }

    #[test]
    fn test_login_response_alias() {
        let r: LoginResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(r.token, "abc");
        assert!(r.user.is_none());
    }
}
