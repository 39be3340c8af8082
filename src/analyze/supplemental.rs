use crate::scan::rules::{
    CODE_BLOCKS, DOCS_CODE_BLOCKS, DOCS_HAS_INSTALL, DOCS_HAS_USAGE, DOCS_STEP_LINES, HAS_INSTALL,
    HAS_ONE_COMMAND, HAS_USAGE, STEP_LINES,
};
use crate::scan::SignalSet;
use crate::types::scoring::Score;

/// One supplemental signal that changed `execution_quality`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplementalBoost {
    pub signal: &'static str,
    pub increment: Score,
}

/// Credit supplemental evidence only where the README has a gap.
/// Output order is stable: install, usage, steps, code blocks.
pub fn supplemental_boosts(primary: &SignalSet, docs: &SignalSet) -> Vec<SupplementalBoost> {
    let mut boosts = Vec::new();

    let readme_has_install = primary.flag(HAS_INSTALL) || primary.flag(HAS_ONE_COMMAND);
    if docs.flag(DOCS_HAS_INSTALL) && !readme_has_install {
        boosts.push(SupplementalBoost {
            signal: DOCS_HAS_INSTALL,
            increment: 1.0,
        });
    }
    if docs.flag(DOCS_HAS_USAGE) && !primary.flag(HAS_USAGE) {
        boosts.push(SupplementalBoost {
            signal: DOCS_HAS_USAGE,
            increment: 1.0,
        });
    }
    if docs.count(DOCS_STEP_LINES) >= 3 && primary.count(STEP_LINES) < 3 {
        boosts.push(SupplementalBoost {
            signal: DOCS_STEP_LINES,
            increment: 0.5,
        });
    }
    // runnable snippets count even when the README already has install/usage sections
    if docs.count(DOCS_CODE_BLOCKS) >= 2 && primary.count(CODE_BLOCKS) < 2 {
        boosts.push(SupplementalBoost {
            signal: DOCS_CODE_BLOCKS,
            increment: 0.5,
        });
    }

    for boost in &boosts {
        tracing::debug!(
            signal = boost.signal,
            increment = boost.increment,
            "supplemental boost applied"
        );
    }
    boosts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{detect_signals, detect_supplemental};

    const RICH_DOCS: &str = concat!(
        "## Installation\n",
        "pip install mylib\n",
        "## Usage\n",
        "1. Import mylib\n",
        "2. Call mylib.run()\n",
        "3. Check output\n",
        "```python\nimport mylib\n```\n",
        "```bash\nmylib --help\n```\n",
    );

    fn names(boosts: &[SupplementalBoost]) -> Vec<&'static str> {
        boosts.iter().map(|boost| boost.signal).collect()
    }

    #[test]
    fn thin_readme_takes_every_boost() {
        let primary = detect_signals("# MyLib\nA tool.\n");
        let docs = detect_supplemental(Some(RICH_DOCS));
        let boosts = supplemental_boosts(&primary, &docs);
        assert_eq!(
            names(&boosts),
            vec![DOCS_HAS_INSTALL, DOCS_HAS_USAGE, DOCS_STEP_LINES, DOCS_CODE_BLOCKS]
        );
        let total: Score = boosts.iter().map(|boost| boost.increment).sum();
        assert_eq!(total, 3.0);
    }

    #[test]
    fn covered_readme_only_takes_code_block_boost() {
        let primary = detect_signals(concat!(
            "## Installation\npip install mylib\n",
            "## Usage\n```python\nimport mylib\n```\n",
            "1. step\n2. step\n3. step\n",
        ));
        let docs = detect_supplemental(Some(RICH_DOCS));
        assert_eq!(names(&supplemental_boosts(&primary, &docs)), vec![DOCS_CODE_BLOCKS]);
    }

    #[test]
    fn tight_numbered_docs_steps_earn_the_step_boost() {
        let primary = detect_signals("# MyLib\n");
        let docs = detect_supplemental(Some("1.Install\n2.Run\n3.Done\n"));
        assert_eq!(names(&supplemental_boosts(&primary, &docs)), vec![DOCS_STEP_LINES]);
    }

    #[test]
    fn one_command_readme_blocks_install_boost() {
        let primary = detect_signals("npx mylib\n");
        let docs = detect_supplemental(Some("## Installation\n"));
        assert!(supplemental_boosts(&primary, &docs).is_empty());
    }

    #[test]
    fn absent_docs_never_boost() {
        let primary = detect_signals("");
        let docs = detect_supplemental(None);
        assert!(supplemental_boosts(&primary, &docs).is_empty());
    }
}
