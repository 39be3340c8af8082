use crate::scan::rules::{find_rule, SignalKind};
use crate::types::report::ScoreReport;

pub fn to_text(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("starscore {}\n", report.version));
    output.push_str(&format!("repo:    {}\n", report.repo));
    output.push_str(&format!("readme:  {}\n", report.readme));
    output.push_str(&format!("source:  {}\n\n", report.source));
    output.push_str(&format!("Overall: {:.2} / 10\n\n", report.overall));

    for (dimension, scored) in &report.scores {
        output.push_str(&format!(
            "{:<24} {:>5.2}  {}\n",
            dimension.as_str(),
            scored.score,
            scored.why
        ));
    }

    output.push_str("\nSignals:\n");
    for (name, value) in report.signals.iter() {
        let rendered = match find_rule(name).map(|rule| rule.kind) {
            Some(SignalKind::Presence) if value > 0 => "yes".to_string(),
            Some(SignalKind::Presence) => "no".to_string(),
            _ => value.to_string(),
        };
        output.push_str(&format!("  {name}: {rendered}\n"));
    }

    match (&report.docs_followed_url, report.docs_fetch_ok) {
        (Some(url), Some(true)) => output.push_str(&format!("\nDocs: {url}\n")),
        (Some(url), _) => output.push_str(&format!("\nDocs: {url} (unavailable)\n")),
        (None, _) => {}
    }
    if !report.docs_signals_used.is_empty() {
        output.push_str(&format!(
            "Docs signals used: {}\n",
            report.docs_signals_used.join(", ")
        ));
    }

    output
}
