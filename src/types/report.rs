use crate::analyze::aggregate_with;
use crate::error::ValidationError;
use crate::scan::SignalSet;
use crate::types::scoring::{Dimension, DimensionScore, Score, Weights};
use serde::Serialize;
use std::collections::BTreeMap;

/// Output of one evaluation call. Keys of `scores` are always the four dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub scores: BTreeMap<Dimension, DimensionScore>,
    pub signals: SignalSet,
    pub applied_supplemental_signals: Vec<&'static str>,
}

impl EvaluationResult {
    pub fn score(&self, dimension: Dimension) -> Score {
        self.scores
            .get(&dimension)
            .map(|scored| scored.score)
            .unwrap_or_default()
    }

    /// Plain name -> score map, the shape the aggregator validates.
    pub fn score_map(&self) -> BTreeMap<String, Score> {
        self.scores
            .iter()
            .map(|(dimension, scored)| (dimension.as_str().to_string(), scored.score))
            .collect()
    }

    pub fn overall(&self) -> Result<Score, ValidationError> {
        self.overall_with(&Weights::standard())
    }

    pub fn overall_with(&self, weights: &Weights) -> Result<Score, ValidationError> {
        aggregate_with(&self.score_map(), weights)
    }
}

/// What happened with the optional one-hop documentation fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsFollow {
    /// URL (or local path) the supplemental text came from.
    pub followed_url: Option<String>,
    /// `None` when no fetch was attempted.
    pub fetch_ok: Option<bool>,
}

/// Presentation bundle. Field order is the JSON key order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub version: String,
    pub repo: String,
    pub readme: String,
    pub source: String,
    pub overall: Score,
    pub scores: BTreeMap<Dimension, DimensionScore>,
    pub signals: SignalSet,
    pub docs_followed_url: Option<String>,
    pub docs_fetch_ok: Option<bool>,
    pub docs_signals_used: Vec<&'static str>,
}

impl ScoreReport {
    pub fn new(
        repo: impl Into<String>,
        readme: impl Into<String>,
        source: impl Into<String>,
        result: EvaluationResult,
        docs: DocsFollow,
    ) -> Result<Self, ValidationError> {
        let overall = result.overall()?;
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            repo: repo.into(),
            readme: readme.into(),
            source: source.into(),
            overall,
            scores: result.scores,
            signals: result.signals,
            docs_followed_url: docs.followed_url,
            docs_fetch_ok: docs.fetch_ok,
            docs_signals_used: result.applied_supplemental_signals,
        })
    }
}
