use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]*)\]\(\s*(https?://[^\s)]+)[^)]*\)"#).expect("link pattern must compile")
});

static DOCS_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:docs|documentation|getting[ -]started)\b")
        .expect("anchor pattern must compile")
});

static DOCS_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[^/\s]+(?:/[^\s/?#]*)*?/(?:docs|documentation)(?:[/?#]|$)")
        .expect("path pattern must compile")
});

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>()\[\]"'`]+"#).expect("url pattern must compile")
});

static DOCS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:docs|documentation)\b").expect("docs word pattern must compile")
});

fn trim_trailing_punctuation(url: &str) -> &str {
    url.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '>', '"', '\''])
}

/// First documentation URL in `text`, by precedence:
/// a docs-labelled markdown link, then a URL with a `/docs` or `/documentation`
/// path segment, then the first bare URL on a line that mentions docs.
pub fn extract_docs_url(text: &str) -> Option<String> {
    for caps in MARKDOWN_LINK.captures_iter(text) {
        if DOCS_ANCHOR.is_match(&caps[1]) {
            return Some(trim_trailing_punctuation(&caps[2]).to_string());
        }
    }

    for found in BARE_URL.find_iter(text) {
        let url = trim_trailing_punctuation(found.as_str());
        if DOCS_PATH.is_match(url) {
            return Some(url.to_string());
        }
    }

    text.lines()
        .filter(|line| DOCS_WORD.is_match(line))
        .find_map(|line| BARE_URL.find(line))
        .map(|found| trim_trailing_punctuation(found.as_str()).to_string())
}

/// GitHub `blob` pages render chrome around the file; fetch the raw file instead.
pub fn raw_github_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://github.com/")?;
    let mut parts = rest.splitn(4, '/');
    let owner = parts.next()?;
    let name = parts.next()?;
    if parts.next()? != "blob" {
        return None;
    }
    let path = parts.next()?;
    Some(format!(
        "https://raw.githubusercontent.com/{owner}/{name}/{path}"
    ))
}
