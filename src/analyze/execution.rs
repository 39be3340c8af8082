use super::Evidence;
use crate::scan::patterns;
use crate::scan::rules::{
    CODE_BLOCKS, DOCS_IS_PRIMARY_ONBOARDING, HAS_DOCS_LINK, HAS_INSTALL, HAS_ONE_COMMAND,
    HAS_USAGE, STEP_LINES,
};
use crate::types::scoring::Score;

/// README-only execution score; supplemental boosts are added by the caller.
pub fn execution_quality_score(base: Score, evidence: &Evidence<'_>) -> Score {
    let signals = evidence.signals;
    let mut score = base;
    if signals.flag(HAS_INSTALL) || signals.flag(HAS_ONE_COMMAND) {
        score += 2.0;
    }
    if signals.flag(HAS_USAGE) {
        score += 2.0;
    }
    if signals.flag(HAS_DOCS_LINK) {
        score += 1.0;
    }
    if signals.flag(DOCS_IS_PRIMARY_ONBOARDING) {
        score += 0.5;
    }
    if signals.count(STEP_LINES) >= 3 {
        score += 1.0;
    }
    if signals.count(CODE_BLOCKS) >= 2 {
        score += 0.5;
    }
    if patterns::mentions_requirements(evidence.text) {
        score += 0.5;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::detect_signals;

    fn score_of(text: &str) -> Score {
        let signals = detect_signals(text);
        execution_quality_score(3.0, &Evidence { text, signals: &signals })
    }

    #[test]
    fn docs_link_only_readme_gets_partial_credit() {
        let text = "# MyLib\nA tool for X.\n## Documentation\nVisit https://mylib.dev/docs\n";
        assert_eq!(score_of(text), 4.5);
    }

    #[test]
    fn no_onboarding_keeps_base() {
        assert_eq!(score_of("# MyLib\nA tool for X.\n"), 3.0);
    }

    #[test]
    fn one_command_substitutes_for_install_section() {
        assert_eq!(score_of("brew install mytool"), 5.0);
    }

    #[test]
    fn complete_onboarding_reaches_ten() {
        let text = concat!(
            "## Installation\n",
            "Requires Python 3.10+\n",
            "## Usage\n",
            "1. a\n2. b\n3. c\n",
            "```\nx\n```\n```\ny\n```\n",
            "Full documentation: https://mylib.dev\n",
        );
        assert_eq!(score_of(text), 10.0);
    }
}
