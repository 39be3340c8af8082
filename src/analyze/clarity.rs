use super::Evidence;
use crate::scan::patterns;
use crate::scan::rules::{BULLETS, HAS_TITLE, HAS_TLDR};
use crate::types::scoring::Score;

pub fn problem_clarity_score(base: Score, evidence: &Evidence<'_>) -> Score {
    let mut score = base;
    if evidence.signals.flag(HAS_TITLE) {
        score += 1.0;
    }
    if evidence.signals.flag(HAS_TLDR) {
        score += 1.5;
    }
    if patterns::mentions_what_or_why(evidence.text) {
        score += 1.0;
    }
    if evidence.signals.count(BULLETS) >= 6 {
        score += 0.5;
    }
    score
}
