use super::Evidence;
use crate::scan::patterns;
use crate::scan::rules::HAS_DEMO;
use crate::types::scoring::Score;

pub fn novelty_trend_fit_score(base: Score, evidence: &Evidence<'_>) -> Score {
    let mut score = base;
    if patterns::mentions_novelty(evidence.text) {
        score += 1.0;
    }
    if patterns::mentions_trend(evidence.text) {
        score += 1.0;
    }
    if evidence.signals.flag(HAS_DEMO) {
        score += 0.5;
    }
    score
}
