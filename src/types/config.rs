use crate::error::StarsError;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DOCS_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_DOCS_BYTES: usize = 512 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarsConfig {
    pub fetch: Option<FetchConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    pub timeout_secs: Option<u64>,
    pub docs_timeout_secs: Option<u64>,
    pub raw_base_url: Option<String>,
    pub user_agent: Option<String>,
    pub default_refs: Option<Vec<String>>,
    pub readme_candidates: Option<Vec<String>>,
    pub max_docs_bytes: Option<usize>,
}

/// Fully resolved fetch behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub docs_timeout: Duration,
    pub raw_base_url: String,
    pub user_agent: String,
    pub default_refs: Vec<String>,
    pub readme_candidates: Vec<String>,
    pub max_docs_bytes: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            docs_timeout: Duration::from_secs(DEFAULT_DOCS_TIMEOUT_SECS),
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            user_agent: format!("starscore/{}", env!("CARGO_PKG_VERSION")),
            default_refs: vec!["main".to_string(), "master".to_string()],
            readme_candidates: [
                "README.md",
                "readme.md",
                "Readme.md",
                "README.MD",
                "README.rst",
                "README.txt",
                "README",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            max_docs_bytes: DEFAULT_MAX_DOCS_BYTES,
        }
    }
}

impl StarsConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        let defaults = FetchSettings::default();
        match &self.fetch {
            Some(fetch) => FetchSettings {
                timeout: fetch
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
                docs_timeout: fetch
                    .docs_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.docs_timeout),
                raw_base_url: fetch
                    .raw_base_url
                    .as_ref()
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.raw_base_url),
                user_agent: fetch.user_agent.clone().unwrap_or(defaults.user_agent),
                default_refs: fetch.default_refs.clone().unwrap_or(defaults.default_refs),
                readme_candidates: fetch
                    .readme_candidates
                    .clone()
                    .unwrap_or(defaults.readme_candidates),
                max_docs_bytes: fetch.max_docs_bytes.unwrap_or(defaults.max_docs_bytes),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), StarsError> {
        let Some(fetch) = &self.fetch else {
            return Ok(());
        };

        for (key, value) in [
            ("fetch.timeout_secs", fetch.timeout_secs),
            ("fetch.docs_timeout_secs", fetch.docs_timeout_secs),
        ] {
            if value == Some(0) {
                return Err(StarsError::ConfigParse(format!(
                    "{key} must be greater than 0"
                )));
            }
        }

        if let Some(base) = &fetch.raw_base_url {
            if !(base.starts_with("https://") || base.starts_with("http://")) {
                return Err(StarsError::ConfigParse(format!(
                    "fetch.raw_base_url must be an http(s) URL: {base}"
                )));
            }
        }

        for (key, values) in [
            ("fetch.default_refs", &fetch.default_refs),
            ("fetch.readme_candidates", &fetch.readme_candidates),
        ] {
            if let Some(values) = values {
                if values.is_empty() {
                    return Err(StarsError::ConfigParse(format!("{key} cannot be empty")));
                }
                if values.iter().any(|value| value.trim().is_empty()) {
                    return Err(StarsError::ConfigParse(format!(
                        "{key} entries must be non-empty"
                    )));
                }
            }
        }

        if fetch.max_docs_bytes == Some(0) {
            return Err(StarsError::ConfigParse(
                "fetch.max_docs_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
