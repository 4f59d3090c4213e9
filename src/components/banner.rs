use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const BANNER_MS: u64 = 3000;

/// Post-redirect notice from the `message` and `type` query parameters,
/// hidden again after three seconds
#[component]
pub fn FlashBanner() -> impl IntoView {
    let query = use_query_map();
    let (notice, set_notice) = signal::<Option<(String, bool)>>(None);

    Effect::new(move |_| {
        let q = query.get();
        if let Some(message) = q.get("message").filter(|m| !m.is_empty()) {
            let success = q.get("type").as_deref() != Some("error");
            set_notice.set(Some((message, success)));
            set_timeout(move || set_notice.set(None), Duration::from_millis(BANNER_MS));
        }
    });

    move || {
        notice.get().map(|(message, success)| {
            view! {
                <div class="flash-banner" class:success=success class:error=!success>
                    {message}
                </div>
            }
        })
    }
}

/// `path?message=…&type=success` for a redirect that shows a banner
pub fn flash_href(path: &str, message: &str) -> String {
    format!(
        "{}?message={}&type=success",
        path,
        utf8_percent_encode(message, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_href_encodes_message() {
        assert_eq!(
            flash_href("/admini/posts", "Post updated successfully!"),
            "/admini/posts?message=Post%20updated%20successfully%21&type=success"
        );
    }
}
