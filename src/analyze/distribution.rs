use super::Evidence;
use crate::scan::patterns;
use crate::scan::rules::{CODE_BLOCKS, HAS_BADGES, HAS_DEMO, HAS_ONE_COMMAND, HAS_USAGE, STEP_LINES};
use crate::types::scoring::Score;

pub fn distribution_potential_score(base: Score, evidence: &Evidence<'_>) -> Score {
    let signals = evidence.signals;
    let mut score = base;
    if signals.flag(HAS_DEMO) {
        score += 2.0;
    }
    if signals.flag(HAS_BADGES) {
        score += 0.5;
    }
    let runnable_path = signals.flag(HAS_USAGE) || signals.flag(HAS_ONE_COMMAND);
    let concrete_steps = signals.count(STEP_LINES) >= 2 || signals.count(CODE_BLOCKS) >= 1;
    if runnable_path && concrete_steps {
        score += 1.5;
    }
    if patterns::mentions_fast_start(evidence.text) {
        score += 1.0;
    }
    score
}
