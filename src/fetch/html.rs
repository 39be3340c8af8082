//! Regex-level HTML flattening for fetched docs pages. Not a DOM parser.

use regex::Regex;
use std::sync::LazyLock;

static HTML_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!doctype html|<html[\s>]|<body[\s>]").expect("marker pattern must compile")
});

static INVISIBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?is)<!--.*?-->",
        r"|<script\b.*?</script\s*>",
        r"|<style\b.*?</style\s*>",
        r"|<noscript\b.*?</noscript\s*>",
        r"|<svg\b.*?</svg\s*>",
    ))
    .expect("invisible pattern must compile")
});

static PRE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<pre\b[^>]*>").expect("pre pattern must compile"));

static PRE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</pre\s*>").expect("pre pattern must compile"));

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("li pattern must compile"));

static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:p|div|h[1-6]|li|tr|section|article|header|footer|nav|ul|ol)\s*>")
        .expect("block pattern must compile")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern must compile"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*){2,}").expect("blank pattern must compile"));

pub fn looks_like_html(body: &str) -> bool {
    HTML_MARKER.is_match(body)
}

/// Flatten markup so the markdown detectors can read it: `<pre>` becomes a
/// fenced block and `<li>` a dash bullet.
pub fn html_to_text(html: &str) -> String {
    let text = INVISIBLE.replace_all(html, " ");
    let text = PRE_OPEN.replace_all(&text, "\n```\n");
    let text = PRE_CLOSE.replace_all(&text, "\n```\n");
    let text = LIST_ITEM.replace_all(&text, "\n- ");
    let text = BLOCK_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    BLANK_RUNS.replace_all(&text, "\n\n").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
