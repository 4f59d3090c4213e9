//! API client tests against a local mock server

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{
    bearer_token, body_json, body_string_contains, header_regex, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use super::*;
use crate::models::{BulkUpdate, LoginRequest, MenuPayload, NewImage, PostDraft, Role};
use crate::session::{MemoryStorage, Session};
use crate::tree;

fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
    let session = Session::new(MemoryStorage::new());
    if let Some(token) = token {
        session.sign_in(token, None);
    }
    ApiClient::new(&server.uri(), session)
}

fn page_json(ids: &[u64], current: u32, last: u32) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| json!({"id": id, "title": format!("Post {}", id)})).collect();
    json!({"data": data, "current_page": current, "last_page": last, "total": 40})
}

// ========================
// Transport
// ========================

#[tokio::test]
async fn test_bearer_attached_from_fresh_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(bearer_token("tok-late"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "title": "News"}])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    // signed in after the client was built
    api.session().sign_in("tok-late", None);

    let categories = list_categories(&api).await.unwrap();
    assert_eq!(categories[0].title, "News");
}

#[tokio::test]
async fn test_no_authorization_when_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = client(&server, None);
    list_categories(&api).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_list_posts_query_encoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("page", "2"))
        .and(query_param("search", "road safety"))
        .and(query_param("category_id", "3"))
        .and(query_param_is_missing("limit"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[11, 12], 2, 4)))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let query = PostQuery::page(2).with_search("road safety").with_category_id(Some(3)).with_category("");
    let page = list_posts(&api, &query).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!((page.current_page, page.last_page), (2, 4));
}

#[tokio::test]
async fn test_blank_search_is_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("category", "videos"))
        .and(query_param("limit", "4"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(&[1], 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, None);
    let query = PostQuery::default().with_search("   ").with_category("videos").with_limit(4);
    list_posts(&api, &query).await.unwrap();
}

#[tokio::test]
async fn test_error_status_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"message": "The title field is required."})))
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    let payload = MenuPayload { title: String::new(), url: String::new(), parent_id: None, active: true, post_id: None };
    let err = create_menu(&api, &payload).await.unwrap_err();

    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 422);
            assert_eq!(message.as_deref(), Some("The title field is required."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.user_message("Error saving menu"), "The title field is required.");
}

#[tokio::test]
async fn test_error_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/menus/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    let err = delete_menu(&api, 5).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message("Delete failed"), "Delete failed");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = client(&server, None);
    assert!(matches!(get_post(&api, 9).await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_invalid_base_url() {
    let api = ApiClient::new("not-a-url", Session::new(MemoryStorage::new()));
    assert!(matches!(list_menus(&api).await, Err(ApiError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_empty_success_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/categories"))
        .and(body_json(json!({"title": "Press"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/categories/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    create_category(&api, "Press").await.unwrap();
    delete_category(&api, 4).await.unwrap();
}

// ========================
// Posts
// ========================

fn draft() -> PostDraft {
    PostDraft {
        title: "Flood relief".into(),
        introtext: "Intro".into(),
        fulltext: "<p>Body</p>".into(),
        category_id: Some(3),
        existing_images: vec!["storage/old.jpg".into()],
        new_images: vec![NewImage {
            name: "a.png".into(),
            mime: "image/png".into(),
            // ASCII so the multipart body can be matched as text
            bytes: b"PNGDATA".to_vec(),
            preview_url: String::new(),
        }],
    }
}

#[tokio::test]
async fn test_create_post_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/posts"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Flood relief"))
        .and(body_string_contains("name=\"catid\""))
        .and(body_string_contains("name=\"images[0]\""))
        .and(body_string_contains("filename=\"a.png\""))
        .and(body_string_contains("PNGDATA"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 70})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    create_post(&api, &draft()).await.unwrap();

    // existing images only travel with updates
    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("existing_images"));
}

#[tokio::test]
async fn test_update_post_spoofs_put_and_keeps_images() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/posts/7"))
        .and(query_param("_method", "PUT"))
        .and(body_string_contains("name=\"existing_images[0]\""))
        .and(body_string_contains("storage/old.jpg"))
        .and(body_string_contains("name=\"images[0]\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    update_post(&api, 7, &draft()).await.unwrap();
}

#[tokio::test]
async fn test_update_post_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/posts/7"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({"message": "Image too large"})))
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    let err = update_post(&api, 7, &draft()).await.unwrap_err();
    assert_eq!(err.user_message("Request failed"), "Image too large");
}

// ========================
// Auth
// ========================

#[tokio::test]
async fn test_login_stores_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "admin@moha.gov.mm", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-1",
            "user": {"id": 1, "name": "Admin", "role": "admin"}
        })))
        .mount(&server)
        .await;

    let api = client(&server, None);
    let credentials = LoginRequest { email: "admin@moha.gov.mm".into(), password: "secret".into() };
    login(&api, &credentials).await.unwrap();

    assert_eq!(api.session().token().as_deref(), Some("jwt-1"));
    assert_eq!(api.session().profile().map(|p| p.role), Some(Role::Admin));
}

#[tokio::test]
async fn test_failed_login_leaves_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let api = client(&server, None);
    let credentials = LoginRequest { email: "x@y.z".into(), password: "bad".into() };
    let err = login(&api, &credentials).await.unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert!(!api.session().has_token());
}

// ========================
// Menus
// ========================

#[derive(Clone, Debug)]
struct Record {
    id: u64,
    parent_id: Option<u64>,
    order: i64,
    post_id: Option<u64>,
}

/// Menu backend keeping flat records and serving them nested
#[derive(Clone)]
struct FakeMenus {
    records: Arc<Mutex<Vec<Record>>>,
}

impl FakeMenus {
    /// 1 ─┬─ 3 ── 5
    ///    └─ 4
    /// 2
    fn seeded() -> Self {
        let rec = |id, parent_id, order| Record { id, parent_id, order, post_id: None };
        Self {
            records: Arc::new(Mutex::new(vec![
                rec(1, None, 0),
                rec(2, None, 1),
                rec(3, Some(1), 0),
                rec(4, Some(1), 1),
                rec(5, Some(3), 0),
            ])),
        }
    }

    fn nested(records: &[Record], parent: Option<u64>) -> Value {
        let mut children: Vec<&Record> = records.iter().filter(|r| r.parent_id == parent).collect();
        children.sort_by_key(|r| (r.order, r.id));
        Value::Array(
            children
                .into_iter()
                .map(|r| {
                    json!({
                        "id": r.id,
                        "title": format!("Menu {}", r.id),
                        "url": format!("/m/{}", r.id),
                        "parent_id": r.parent_id,
                        "order": r.order,
                        "active": 1,
                        "post_id": r.post_id,
                        "children": Self::nested(records, Some(r.id)),
                    })
                })
                .collect(),
        )
    }
}

impl Respond for FakeMenus {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut records = self.records.lock().unwrap();
        if request.method.as_str() == "POST" {
            let Ok(update) = request.body_json::<BulkUpdate>() else {
                return ResponseTemplate::new(400).set_body_json(json!({"message": "bad body"}));
            };
            for item in update.items {
                if let Some(r) = records.iter_mut().find(|r| r.id == item.id) {
                    r.parent_id = item.parent_id;
                    r.order = item.order;
                    r.post_id = item.post_id;
                }
            }
            return ResponseTemplate::new(200).set_body_json(json!({"message": "ok"}));
        }
        ResponseTemplate::new(200).set_body_json(Self::nested(&records, None))
    }
}

async fn menu_server() -> MockServer {
    let server = MockServer::start().await;
    let fake = FakeMenus::seeded();
    Mock::given(method("GET")).and(path("/menus")).respond_with(fake.clone()).mount(&server).await;
    Mock::given(method("POST"))
        .and(path("/menus/bulk-update"))
        .respond_with(fake)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_menu_round_trip_through_server() {
    let server = menu_server().await;
    let api = client(&server, Some("tok"));

    let rows = tree::flatten(&list_menus(&api).await.unwrap());
    let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 5, 4, 2]);

    // saving unchanged rows changes nothing
    bulk_update_menus(&api, &tree::bulk_items(&rows)).await.unwrap();
    let reloaded = tree::flatten(&list_menus(&api).await.unwrap());
    assert_eq!(reloaded, rows);
    assert_eq!(tree::flatten(&tree::rebuild(&reloaded)), reloaded);
}

#[tokio::test]
async fn test_bulk_save_reparent_is_reflected_on_reload() {
    let server = menu_server().await;
    let api = client(&server, Some("tok"));

    let rows = tree::flatten(&list_menus(&api).await.unwrap());
    // drag 3 (with child 5) under 2, then 4 to the top level
    let staged = tree::reparent(&rows, 3, Some(2), 0).unwrap();
    let staged = tree::reparent(&staged, 4, None, 0).unwrap();

    bulk_update_menus(&api, &tree::bulk_items(&staged)).await.unwrap();
    let reloaded = tree::flatten(&list_menus(&api).await.unwrap());

    assert_eq!(reloaded, staged);
    let three = reloaded.iter().find(|r| r.id == 3).unwrap();
    assert_eq!((three.parent_id, three.level), (Some(2), 2));
    let five = reloaded.iter().find(|r| r.id == 5).unwrap();
    assert_eq!((five.parent_id, five.level), (Some(3), 3));
    let ids: Vec<u64> = reloaded.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 1, 2, 3, 5]);
}

#[tokio::test]
async fn test_bulk_update_body_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/menus/bulk-update"))
        .and(body_json(json!({"items": [
            {"id": 1, "parent_id": null, "order": 0, "post_id": 9},
            {"id": 2, "parent_id": 1, "order": 0, "post_id": null}
        ]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Saved"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("tok"));
    let items = vec![
        crate::models::BulkItem { id: 1, parent_id: None, order: 0, post_id: Some(9) },
        crate::models::BulkItem { id: 2, parent_id: Some(1), order: 0, post_id: None },
    ];
    bulk_update_menus(&api, &items).await.unwrap();
}
