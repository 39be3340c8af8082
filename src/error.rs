use thiserror::Error;

/// Raised by the aggregator only. Never auto-corrected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing score for dimension: {0}")]
    MissingDimension(String),

    #[error("score for {dimension} must be between 0 and 10, got {score}")]
    OutOfRange { dimension: String, score: f64 },
}

#[derive(Error, Debug)]
pub enum StarsError {
    #[error("invalid repo '{0}': expected owner/name")]
    InvalidRepo(String),

    #[error("README not found for {repo} at ref {reference}: {last_error}")]
    ReadmeNotFound {
        repo: String,
        reference: String,
        last_error: String,
    },

    #[error("file does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StarsError {
    /// True for errors caused by what the user typed rather than the outside world.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StarsError::InvalidRepo(_)
                | StarsError::PathNotFound(_)
                | StarsError::ConfigParse(_)
                | StarsError::Toml(_)
                | StarsError::Validation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StarsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_repo_message_keeps_literal() {
        let err = StarsError::InvalidRepo("badrepo".to_string());
        assert!(err.to_string().contains("badrepo"));

        let empty = StarsError::InvalidRepo(String::new());
        assert!(empty.to_string().contains("''"));
    }

    #[test]
    fn not_found_message_names_repo_ref_and_cause() {
        let err = StarsError::ReadmeNotFound {
            repo: "octo/widget".to_string(),
            reference: "main, master".to_string(),
            last_error: "HTTP 404 Not Found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("octo/widget"));
        assert!(message.contains("main, master"));
        assert!(message.contains("HTTP 404"));
    }

    #[test]
    fn validation_errors_are_input_errors() {
        let err: StarsError = ValidationError::MissingDimension("novelty_trend_fit".into()).into();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("novelty_trend_fit"));
    }
}
