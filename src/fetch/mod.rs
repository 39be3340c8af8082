pub mod docs_url;
pub mod html;

use crate::error::{Result, StarsError};
use crate::types::config::FetchSettings;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub use docs_url::extract_docs_url;

/// `owner/name` pair for a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Accepts `owner/name`, optionally as a full github.com URL with a
    /// trailing `/` or `.git`.
    pub fn parse(literal: &str) -> Result<Self> {
        let invalid = || StarsError::InvalidRepo(literal.to_string());

        let mut rest = literal.trim();
        for prefix in ["https://github.com/", "http://github.com/", "github.com/"] {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                break;
            }
        }
        let rest = rest.trim_end_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);

        let (owner, name) = rest.split_once('/').ok_or_else(invalid)?;
        if !is_repo_segment(owner) || !is_repo_segment(name) {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

fn is_repo_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ReadmeFetchResult {
    pub repo: RepoId,
    pub reference: String,
    pub filename: String,
    pub text: String,
    pub source_url: String,
}

pub struct Fetcher {
    client: Client,
    settings: FetchSettings,
}

impl Fetcher {
    pub fn new(settings: FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: FetchSettings) -> Self {
        Self { client, settings }
    }

    /// Try each ref, then each README filename, against the raw content host.
    /// An explicit `reference` replaces the configured ref list.
    pub fn fetch_readme(&self, repo: &str, reference: Option<&str>) -> Result<ReadmeFetchResult> {
        let repo_id = RepoId::parse(repo)?;
        let refs: Vec<String> = match reference {
            Some(reference) => vec![reference.to_string()],
            None => self.settings.default_refs.clone(),
        };

        let mut last_error = String::from("no README candidates configured");
        for reference in &refs {
            for filename in &self.settings.readme_candidates {
                let url = format!(
                    "{}/{}/{}/{}/{}",
                    self.settings.raw_base_url, repo_id.owner, repo_id.name, reference, filename
                );
                match self.get_text(&url, self.settings.timeout) {
                    Ok((text, _)) => {
                        tracing::info!(
                            repo = %repo_id,
                            reference = %reference,
                            file = %filename,
                            "fetched README"
                        );
                        return Ok(ReadmeFetchResult {
                            repo: repo_id,
                            reference: reference.clone(),
                            filename: filename.clone(),
                            text,
                            source_url: url,
                        });
                    }
                    Err(err) => {
                        tracing::debug!(url = %url, error = %err, "README candidate missed");
                        last_error = err.to_string();
                    }
                }
            }
        }

        Err(StarsError::ReadmeNotFound {
            repo: repo_id.to_string(),
            reference: refs.join(", "),
            last_error,
        })
    }

    /// One attempt, short timeout. Any failure yields `None`; the caller
    /// scores the README alone.
    pub fn fetch_docs_text(&self, url: &str) -> Option<String> {
        let target = docs_url::raw_github_url(url).unwrap_or_else(|| url.to_string());
        match self.get_text(&target, self.settings.docs_timeout) {
            Ok((body, content_type)) => {
                let text = normalize_docs_text(
                    &body,
                    content_type.as_deref(),
                    self.settings.max_docs_bytes,
                );
                if text.is_none() {
                    tracing::warn!(
                        url = %target,
                        content_type = ?content_type,
                        "docs page had no usable text"
                    );
                }
                text
            }
            Err(err) => {
                tracing::warn!(url = %target, error = %err, "docs fetch failed");
                None
            }
        }
    }

    fn get_text(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<(String, Option<String>), reqwest::Error> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()?
            .error_for_status()?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase());
        let body = response.text()?;
        Ok((body, content_type))
    }
}

/// Turn a docs body into scannable text: reject binary content types,
/// flatten HTML, cap the size.
pub fn normalize_docs_text(
    body: &str,
    content_type: Option<&str>,
    max_bytes: usize,
) -> Option<String> {
    if let Some(content_type) = content_type {
        let textual = content_type.starts_with("text/")
            || content_type.contains("markdown")
            || content_type.contains("xml")
            || content_type.contains("json");
        if !textual {
            return None;
        }
    }

    let is_html =
        content_type.is_some_and(|ct| ct.contains("html")) || html::looks_like_html(body);
    let text = if is_html {
        html::html_to_text(body)
    } else {
        body.to_string()
    };

    let text = truncate_at_char_boundary(text, max_bytes);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn truncate_at_char_boundary(mut text: String, max_bytes: usize) -> String {
    if text.len() > max_bytes {
        let mut end = max_bytes;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

pub fn read_local_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(StarsError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
