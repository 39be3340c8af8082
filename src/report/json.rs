use crate::scan::SignalSet;
use crate::types::report::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Signals alone, keys sorted.
pub fn signals_to_json(signals: &SignalSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::evaluate;
    use crate::types::report::{DocsFollow, ScoreReport};

    fn sample_report(docs: DocsFollow, docs_text: Option<&str>) -> ScoreReport {
        let result = evaluate("# Widget\nA tiny tool.\n## Install\n", docs_text);
        ScoreReport::new("octo/widget", "README.md", "local", result, docs)
            .expect("scores are valid")
    }

    #[test]
    fn json_keys_follow_report_layout() {
        let rendered = to_json(&sample_report(DocsFollow::default(), None))
            .expect("json should serialize");
        let keys = [
            "\"version\"",
            "\"repo\"",
            "\"readme\"",
            "\"source\"",
            "\"overall\"",
            "\"scores\"",
            "\"signals\"",
            "\"docs_followed_url\"",
            "\"docs_fetch_ok\"",
            "\"docs_signals_used\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| rendered.find(key).expect("key should be present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(rendered.contains("\"docs_followed_url\": null"));
        assert!(rendered.contains("\"docs_fetch_ok\": null"));
        assert!(rendered.contains("\"docs_signals_used\": []"));
    }

    #[test]
    fn dimensions_render_in_fixed_order() {
        let rendered = to_json(&sample_report(DocsFollow::default(), None))
            .expect("json should serialize");
        let order = [
            "\"problem_clarity\"",
            "\"novelty_trend_fit\"",
            "\"distribution_potential\"",
            "\"execution_quality\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|key| rendered.find(key).expect("dimension should be present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(rendered.contains("\"why\""));
    }

    #[test]
    fn docs_metadata_is_reported() {
        let report = sample_report(
            DocsFollow {
                followed_url: Some("https://widget.dev/docs".to_string()),
                fetch_ok: Some(true),
            },
            Some("## Usage\n```\nwidget run\n```\n```\nwidget --help\n```\n"),
        );
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&report).expect("json should serialize"))
                .expect("output is valid json");
        assert_eq!(value["docs_followed_url"], "https://widget.dev/docs");
        assert_eq!(value["docs_fetch_ok"], true);
        assert_eq!(
            value["docs_signals_used"],
            serde_json::json!(["docs_has_usage", "docs_code_blocks"])
        );
        assert_eq!(value["signals"]["docs_code_blocks"], 2);
    }

    #[test]
    fn signal_keys_are_sorted() {
        let signals = crate::scan::detect_signals("# Widget\n");
        let rendered = signals_to_json(&signals).expect("json should serialize");
        let keys = ["\"bullets\"", "\"code_blocks\"", "\"has_title\"", "\"step_lines\""];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| rendered.find(key).expect("signal should be present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(rendered.contains("\"has_title\": 1"));
    }
}
