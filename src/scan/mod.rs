pub mod patterns;
pub mod rules;

use rules::{Detector, SignalRule, PRIMARY_RULES, SUPPLEMENTAL_RULES};
use serde::Serialize;
use std::collections::BTreeMap;

/// Named signal values; presence signals are 0/1, counts are raw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignalSet {
    values: BTreeMap<&'static str, u32>,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: u32) {
        self.values.insert(name, value);
    }

    /// Unknown names read as zero.
    pub fn count(&self, name: &str) -> u32 {
        self.values.get(name).copied().unwrap_or(0)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.values.iter().map(|(name, value)| (*name, *value))
    }

    pub fn merge(&mut self, other: &SignalSet) {
        for (name, value) in other.iter() {
            self.values.insert(name, value);
        }
    }
}

fn run_rules(text: &str, table: &[SignalRule]) -> SignalSet {
    let mut signals = SignalSet::new();
    for rule in table {
        let value = match rule.detector {
            Detector::Text(detect) => detect(text),
            Detector::Derived(derive) => derive(&signals),
        };
        signals.insert(rule.name, value);
    }
    signals
}

pub fn detect_signals(text: &str) -> SignalSet {
    let signals = run_rules(text, PRIMARY_RULES);
    tracing::debug!(
        install = signals.count(rules::HAS_INSTALL),
        usage = signals.count(rules::HAS_USAGE),
        code_blocks = signals.count(rules::CODE_BLOCKS),
        step_lines = signals.count(rules::STEP_LINES),
        "detected readme signals"
    );
    signals
}

/// `docs_*` signals for a supplemental document; all zero when none was supplied.
pub fn detect_supplemental(docs_text: Option<&str>) -> SignalSet {
    match docs_text {
        Some(text) => {
            let signals = run_rules(text, SUPPLEMENTAL_RULES);
            tracing::debug!(
                install = signals.count(rules::DOCS_HAS_INSTALL),
                usage = signals.count(rules::DOCS_HAS_USAGE),
                "detected supplemental signals"
            );
            signals
        }
        None => {
            let mut signals = SignalSet::new();
            for rule in SUPPLEMENTAL_RULES {
                signals.insert(rule.name, 0);
            }
            signals
        }
    }
}
