pub mod aggregate;
pub mod clarity;
pub mod distribution;
pub mod execution;
pub mod novelty;
pub mod supplemental;

use crate::scan::{detect_signals, detect_supplemental, SignalSet};
use crate::types::report::EvaluationResult;
use crate::types::scoring::{Dimension, ScoringProfile, STANDARD_PROFILE};
use std::collections::BTreeMap;

pub use aggregate::{aggregate, aggregate_with, validate_scores};
pub use supplemental::{supplemental_boosts, SupplementalBoost};

/// README text and the signals detected in it.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    pub text: &'a str,
    pub signals: &'a SignalSet,
}

pub fn evaluate(readme_text: &str, docs_text: Option<&str>) -> EvaluationResult {
    evaluate_with(&STANDARD_PROFILE, readme_text, docs_text)
}

/// Pure: identical inputs always produce identical results.
pub fn evaluate_with(
    profile: &ScoringProfile,
    readme_text: &str,
    docs_text: Option<&str>,
) -> EvaluationResult {
    let readme_signals = detect_signals(readme_text);
    let docs_signals = detect_supplemental(docs_text);
    let evidence = Evidence {
        text: readme_text,
        signals: &readme_signals,
    };

    let boosts = supplemental_boosts(&readme_signals, &docs_signals);
    let boost_total: f64 = boosts.iter().map(|boost| boost.increment).sum();

    let mut scores = BTreeMap::new();
    scores.insert(
        Dimension::ProblemClarity,
        profile.problem_clarity.finalize(clarity::problem_clarity_score(
            profile.problem_clarity.base,
            &evidence,
        )),
    );
    scores.insert(
        Dimension::NoveltyTrendFit,
        profile.novelty_trend_fit.finalize(novelty::novelty_trend_fit_score(
            profile.novelty_trend_fit.base,
            &evidence,
        )),
    );
    scores.insert(
        Dimension::DistributionPotential,
        profile
            .distribution_potential
            .finalize(distribution::distribution_potential_score(
                profile.distribution_potential.base,
                &evidence,
            )),
    );
    scores.insert(
        Dimension::ExecutionQuality,
        profile.execution_quality.finalize(
            execution::execution_quality_score(profile.execution_quality.base, &evidence)
                + boost_total,
        ),
    );

    let mut signals = readme_signals;
    signals.merge(&docs_signals);

    EvaluationResult {
        scores,
        signals,
        applied_supplemental_signals: boosts.iter().map(|boost| boost.signal).collect(),
    }
}
