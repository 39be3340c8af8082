use super::patterns;
use super::SignalSet;

pub const HAS_TITLE: &str = "has_title";
pub const HAS_TLDR: &str = "has_tldr";
pub const HAS_INSTALL: &str = "has_install";
pub const HAS_USAGE: &str = "has_usage";
pub const HAS_DEMO: &str = "has_demo";
pub const HAS_BADGES: &str = "has_badges";
pub const CODE_BLOCKS: &str = "code_blocks";
pub const STEP_LINES: &str = "step_lines";
pub const BULLETS: &str = "bullets";
pub const HAS_DOCS_LINK: &str = "has_docs_link";
pub const DOCS_IS_PRIMARY_ONBOARDING: &str = "docs_is_primary_onboarding";
pub const HAS_ONE_COMMAND: &str = "has_one_command";

pub const DOCS_HAS_INSTALL: &str = "docs_has_install";
pub const DOCS_HAS_USAGE: &str = "docs_has_usage";
pub const DOCS_CODE_BLOCKS: &str = "docs_code_blocks";
pub const DOCS_STEP_LINES: &str = "docs_step_lines";
pub const DOCS_HAS_ONE_COMMAND: &str = "docs_has_one_command";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Presence,
    Count,
}

#[derive(Clone, Copy)]
pub enum Detector {
    /// Runs over the raw text.
    Text(fn(&str) -> u32),
    /// Computed from signals produced by earlier rules in the same table.
    Derived(fn(&SignalSet) -> u32),
}

#[derive(Clone, Copy)]
pub struct SignalRule {
    pub name: &'static str,
    pub kind: SignalKind,
    pub detector: Detector,
}

impl std::fmt::Debug for SignalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

const fn presence(name: &'static str, detect: fn(&str) -> u32) -> SignalRule {
    SignalRule {
        name,
        kind: SignalKind::Presence,
        detector: Detector::Text(detect),
    }
}

const fn counter(name: &'static str, detect: fn(&str) -> u32) -> SignalRule {
    SignalRule {
        name,
        kind: SignalKind::Count,
        detector: Detector::Text(detect),
    }
}

/// README battery, evaluated top to bottom.
pub const PRIMARY_RULES: &[SignalRule] = &[
    presence(HAS_TITLE, patterns::has_title),
    presence(HAS_TLDR, patterns::has_tldr),
    presence(HAS_INSTALL, patterns::has_install),
    presence(HAS_USAGE, patterns::has_usage),
    presence(HAS_DEMO, patterns::has_demo),
    presence(HAS_BADGES, patterns::has_badges),
    counter(CODE_BLOCKS, patterns::code_blocks),
    counter(STEP_LINES, patterns::step_lines),
    counter(BULLETS, patterns::bullets),
    presence(HAS_DOCS_LINK, patterns::has_docs_link),
    presence(HAS_ONE_COMMAND, patterns::has_one_command),
    SignalRule {
        name: DOCS_IS_PRIMARY_ONBOARDING,
        kind: SignalKind::Presence,
        detector: Detector::Derived(docs_is_primary_onboarding),
    },
];

/// Same detectors as the README battery, namespaced for a supplemental document.
pub const SUPPLEMENTAL_RULES: &[SignalRule] = &[
    presence(DOCS_HAS_INSTALL, patterns::has_install),
    presence(DOCS_HAS_USAGE, patterns::has_usage),
    counter(DOCS_CODE_BLOCKS, patterns::code_blocks),
    counter(DOCS_STEP_LINES, patterns::step_lines),
    presence(DOCS_HAS_ONE_COMMAND, patterns::has_one_command),
];

/// Onboarding lives entirely behind an external docs link.
fn docs_is_primary_onboarding(signals: &SignalSet) -> u32 {
    u32::from(
        signals.flag(HAS_DOCS_LINK)
            && !signals.flag(HAS_INSTALL)
            && !signals.flag(HAS_USAGE)
            && signals.count(CODE_BLOCKS) == 0
            && signals.count(STEP_LINES) == 0,
    )
}

pub fn find_rule(name: &str) -> Option<&'static SignalRule> {
    PRIMARY_RULES
        .iter()
        .chain(SUPPLEMENTAL_RULES.iter())
        .find(|rule| rule.name == name)
}
