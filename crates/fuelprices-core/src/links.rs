//! Bulletin link discovery and cleanup.
//!
//! Catalog pages link their files as relative hrefs under `./files`. The site
//! decorates some of those hrefs with stray spaces, `(N)` counters and `-???`
//! runs that the file server does not resolve, so the remote URL is built from
//! a cleaned-up copy of the href.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Prefix every downloadable bulletin href starts with.
pub const FILE_LINK_PREFIX: &str = "./files";

static COUNTER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d\)").expect("valid counter regex"));
static DASH_QUESTION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\?+").expect("valid dash regex"));

pub fn is_file_link(href: &str) -> bool {
    href.starts_with(FILE_LINK_PREFIX)
}

/// Cleans an href for use in the remote URL.
///
/// - Removes every space
/// - Removes single-digit counters such as `(1)`
/// - Removes `-` followed by one or more `?`
pub fn normalize_link(href: &str) -> String {
    let link = href.replace(' ', "");
    let link = COUNTER_SUFFIX.replace_all(&link, "");
    DASH_QUESTION_RUN.replace_all(&link, "").into_owned()
}

/// Returns the href of every anchor in `html` that points under `./files`,
/// in document order. Duplicates are kept.
pub fn extract_file_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(anchor) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    document
        .select(&anchor)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| is_file_link(href))
        .map(str::to_string)
        .collect()
}
