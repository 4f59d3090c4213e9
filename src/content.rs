//! Content Helpers
//!
//! HTML cleanup for post bodies, text excerpts, dates, asset URLs and the
//! video-link helpers used by the gallery.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use ego_tree::NodeId;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::{Regex, RegexBuilder};
use scraper::{Html, Node};

static CENTERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)text-align\s*:\s*center").expect("static pattern"));

static FIRST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<"]+"#).expect("static pattern"));

/// Characters escaped in asset paths; `/` and `%` pass through
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Relative prefixes served from the public asset root
const ASSET_PREFIXES: [&str; 3] = ["storage/", "photos/", "files/"];

// ========================
// HTML cleanup
// ========================

/// Ids of attached elements matching `pred`, in document order.
/// Detached nodes stay in the arena, so walk from the root.
fn find_elements(doc: &Html, pred: impl Fn(&scraper::node::Element) -> bool) -> Vec<NodeId> {
    doc.tree
        .root()
        .descendants()
        .filter(|n| n.value().as_element().is_some_and(&pred))
        .map(|n| n.id())
        .collect()
}

fn detach_all(doc: &mut Html, ids: &[NodeId]) {
    for &id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Divs with no element children and only whitespace text
fn empty_divs(doc: &Html) -> Vec<NodeId> {
    doc.tree
        .root()
        .descendants()
        .filter(|n| n.value().as_element().is_some_and(|e| e.name() == "div"))
        .filter(|n| {
            n.children().all(|c| match c.value() {
                Node::Text(t) => t.trim().is_empty(),
                Node::Comment(_) => true,
                _ => false,
            })
        })
        .map(|n| n.id())
        .collect()
}

fn serialize(doc: &Html) -> String {
    doc.root_element().inner_html()
}

/// Strip a post body down to its text flow: every `<img>` goes, every div
/// styled `text-align: center` goes with its content (captions), and divs
/// left empty go. Idempotent.
pub fn clean_fulltext(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let mut doc = Html::parse_fragment(html);

    let images = find_elements(&doc, |e| e.name() == "img");
    detach_all(&mut doc, &images);

    let captions = find_elements(&doc, |e| {
        e.name() == "div" && e.attr("style").is_some_and(|s| CENTERED.is_match(s))
    });
    detach_all(&mut doc, &captions);

    loop {
        let empty = empty_divs(&doc);
        if empty.is_empty() {
            break;
        }
        detach_all(&mut doc, &empty);
    }

    serialize(&doc)
}

/// Path relative to the asset root, if `value` is a known asset link
fn asset_path(value: &str) -> Option<&str> {
    if value.starts_with("//") {
        return None;
    }
    let trimmed = value.trim_start_matches('/');
    ASSET_PREFIXES.iter().any(|p| trimmed.starts_with(p)).then_some(trimmed)
}

/// Point relative asset links (`src`/`href`) at the asset root.
/// Absolute and protocol-relative URLs, anchors and other paths are kept.
pub fn rewrite_asset_links(html: &str, asset_base: &str) -> String {
    let mut doc = Html::parse_fragment(html);
    let ids: Vec<NodeId> = find_elements(&doc, |e| {
        e.attrs().any(|(name, value)| (name == "src" || name == "href") && asset_path(value).is_some())
    });

    for id in ids {
        let Some(mut node) = doc.tree.get_mut(id) else { continue };
        if let Node::Element(element) = node.value() {
            for (name, value) in element.attrs.iter_mut() {
                let local: &str = &name.local;
                if local != "src" && local != "href" {
                    continue;
                }
                if let Some(path) = asset_path(value) {
                    let url = asset_url(asset_base, path);
                    value.clear();
                    value.push_slice(&url);
                }
            }
        }
    }
    serialize(&doc)
}

/// Post detail body: cleaned, then asset links made absolute
pub fn render_post_body(html: &str, asset_base: &str) -> String {
    rewrite_asset_links(&clean_fulltext(html), asset_base)
}

// ========================
// Text
// ========================

/// Text content of an HTML fragment, entities decoded
pub fn strip_tags(html: &str) -> String {
    let doc = Html::parse_fragment(html);
    doc.root_element().text().collect()
}

/// At most `max` characters, with `...` appended when cut
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Plain-text preview of an HTML body
pub fn excerpt(html: &str, max: usize) -> String {
    let text = strip_tags(html);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&collapsed, max)
}

/// A run of text, marked when it matched the search keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub hit: bool,
}

/// Split `text` around case-insensitive literal matches of `keyword`
pub fn highlight(text: &str, keyword: &str) -> Vec<Segment> {
    let keyword = keyword.trim();
    let plain = || vec![Segment { text: text.to_string(), hit: false }];
    if keyword.is_empty() || text.is_empty() {
        return plain();
    }
    let Ok(re) = RegexBuilder::new(&regex::escape(keyword)).case_insensitive(true).build() else {
        return plain();
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment { text: text[last..m.start()].to_string(), hit: false });
        }
        segments.push(Segment { text: m.as_str().to_string(), hit: true });
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment { text: text[last..].to_string(), hit: false });
    }
    segments
}

// ========================
// Dates and assets
// ========================

/// `dd-mm-yyyy`; unparseable input comes back unchanged
pub fn format_date(value: &str) -> String {
    const OUT: &str = "%d-%m-%Y";
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return dt.format(OUT).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return d.format(OUT).to_string();
    }
    value.to_string()
}

/// Absolute URL of an uploaded asset
pub fn asset_url(asset_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let encoded = utf8_percent_encode(path.trim_start_matches('/'), PATH_ESCAPES);
    format!("{}/{}", asset_base.trim_end_matches('/'), encoded)
}

// ========================
// Video links
// ========================

/// First http(s) URL in a post body
pub fn extract_video_url(fulltext: &str) -> Option<String> {
    FIRST_URL.find(fulltext).map(|m| m.as_str().to_string())
}

/// Video id from `watch?v=`, `embed/` and `youtu.be/` links
pub fn youtube_id(url: &str) -> Option<String> {
    let id = if url.contains("watch?") {
        let query = url.split_once('?')?.1;
        query
            .split(['&', '#'])
            .find_map(|pair| pair.strip_prefix("v="))?
            .to_string()
    } else if let Some((_, rest)) = url.split_once("embed/") {
        rest.split(['?', '&', '#']).next()?.to_string()
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split(['?', '&', '#']).next()?.to_string()
    } else {
        return None;
    };
    (!id.is_empty()).then_some(id)
}

pub fn youtube_thumbnail(url: &str) -> Option<String> {
    youtube_id(url).map(|id| format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id))
}

/// Autoplaying player URL for a video link
pub fn embed_url(url: &str) -> String {
    match youtube_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{}?autoplay=1", id),
        None if url.contains('?') => format!("{}&autoplay=1", url),
        None => format!("{}?autoplay=1", url),
    }
}
