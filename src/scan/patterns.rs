//! Case-insensitive text patterns. Every detector is a pure function of its input.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in signal pattern must compile")
}

static TITLE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^#[ \t]+\S"));

static TLDR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:tl;dr|tldr|one-line|summary|in short)\b"));

static INSTALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:install|installation|getting started|setup|requirements|prerequisites?|dependencies)\b",
    )
});

static USAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:usage|quick\s?start|examples?|how to|run|try it|getting started|cli|commands?)\b",
    )
});

static DEMO_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:demo|screenshots?|gifs?|videos?|preview)\b"));

static IMAGE_EMBED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)!\[[^\]]*\]\([^)\s]+[^)]*\)|<img\s"));

static BADGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)!\[[^\]]*\]\(\s*https?://(?:img\.)?shields\.io/"));

static STEP_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?im)^[ \t]*(?:\d+[.)]|step[ \t]*\d+:)"));

/// Marker in column zero; nested items are not counted.
static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^[-*•]"));

static DOCS_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(?:docs|documentation)\b"));

static URL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)https?://[^\s)<>\]]+"));

static ONE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)\b(?:npx|bunx|uvx|pnpm dlx|yarn dlx|pipx run)\s+\S",
        r"|\b(?:pip3?|pipx|npm|pnpm|yarn|bun|cargo|brew|go|gem|uv pip)\s+(?:install|i|add)\s+\S",
        r"|\b(?:curl|wget)\b[^\n|]*\|\s*(?:sudo\s+)?(?:ba|z)?sh\b",
        r"|\b(?:docker|podman)\s+run\b",
    ))
});

static WHAT_WHY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:what it is|what this is|why)\b"));

static NOVELTY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:new|novel|first|unique|different|opinionated)\b"));

static TREND: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:agents?|agentic|workflows?|automation|automate|benchmarks?|copy-paste)\b")
});

static FAST_START: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:copy-paste|copy & paste|3 minutes|one command|zero[- ]config)\b")
});

static REQUIREMENTS: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?i)\b(?:requirements|dependencies|requires)\b",
        r"|(?:>=|<=|~=|\^)\s*v?\d+(?:\.\d+)*",
        r"|\b(?:python|node|rust|go|java|ruby)\s*v?\d+(?:\.\d+)*\s*(?:\+|or (?:newer|later|higher))",
    ))
});

fn flag(present: bool) -> u32 {
    u32::from(present)
}

fn count(regex: &Regex, text: &str) -> u32 {
    u32::try_from(regex.find_iter(text).count()).unwrap_or(u32::MAX)
}

pub fn has_title(text: &str) -> u32 {
    flag(TITLE.is_match(text))
}

pub fn has_tldr(text: &str) -> u32 {
    flag(TLDR.is_match(text))
}

pub fn has_install(text: &str) -> u32 {
    flag(INSTALL.is_match(text))
}

pub fn has_usage(text: &str) -> u32 {
    flag(USAGE.is_match(text))
}

pub fn has_demo(text: &str) -> u32 {
    flag(DEMO_WORDS.is_match(text) || IMAGE_EMBED.is_match(text))
}

pub fn has_badges(text: &str) -> u32 {
    flag(BADGE.is_match(text))
}

/// Backtick and tilde fences are paired independently.
pub fn code_blocks(text: &str) -> u32 {
    let backticks = text.matches("```").count() / 2;
    let tildes = text.matches("~~~").count() / 2;
    u32::try_from(backticks + tildes).unwrap_or(u32::MAX)
}

pub fn step_lines(text: &str) -> u32 {
    count(&STEP_LINE, text)
}

pub fn bullets(text: &str) -> u32 {
    count(&BULLET_LINE, text)
}

pub fn has_docs_link(text: &str) -> u32 {
    flag(DOCS_WORD.is_match(text) && URL.is_match(text))
}

pub fn has_one_command(text: &str) -> u32 {
    flag(ONE_COMMAND.is_match(text))
}

pub fn mentions_what_or_why(text: &str) -> bool {
    WHAT_WHY.is_match(text)
}

pub fn mentions_novelty(text: &str) -> bool {
    NOVELTY.is_match(text)
}

pub fn mentions_trend(text: &str) -> bool {
    TREND.is_match(text)
}

pub fn mentions_fast_start(text: &str) -> bool {
    FAST_START.is_match(text)
}

pub fn mentions_requirements(text: &str) -> bool {
    REQUIREMENTS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_requires_single_hash_and_text() {
        assert_eq!(has_title("# MyLib\n"), 1);
        assert_eq!(has_title("intro\n#   Spaced\n"), 1);
        assert_eq!(has_title("## Section only\n"), 0);
        assert_eq!(has_title("#\n"), 0);
        assert_eq!(has_title("#hashtag\n"), 0);
    }

    #[test]
    fn tldr_variants_match_on_word_boundaries() {
        assert_eq!(has_tldr("TL;DR: a fast tool."), 1);
        assert_eq!(has_tldr("In short, it works"), 1);
        assert_eq!(has_tldr("A one-line pitch"), 1);
        assert_eq!(has_tldr("summarys are not summaries"), 0);
    }

    #[test]
    fn install_and_usage_sections() {
        assert_eq!(has_install("## Installation\npip install x"), 1);
        assert_eq!(has_install("## Prerequisites"), 1);
        assert_eq!(has_install("A tool for X."), 0);
        assert_eq!(has_usage("## Usage"), 1);
        assert_eq!(has_usage("## Quickstart"), 1);
        assert_eq!(has_usage("Welcome to MyLib. Learn more about our team."), 0);
    }

    #[test]
    fn demo_from_words_or_image() {
        assert_eq!(has_demo("See the screenshot below"), 1);
        assert_eq!(has_demo("![logo](assets/logo.png)"), 1);
        assert_eq!(has_demo("<img src=\"x.png\">"), 1);
        assert_eq!(has_demo("plain text"), 0);
    }

    #[test]
    fn badges_need_shields_host() {
        assert_eq!(
            has_badges("[![CI](https://img.shields.io/badge/ci-passing-green)](x)"),
            1
        );
        assert_eq!(has_badges("![shot](https://example.com/shot.png)"), 0);
    }

    #[test]
    fn code_blocks_pair_fences_per_style() {
        assert_eq!(code_blocks("```\na\n```\n```py\nb\n```\n"), 2);
        assert_eq!(code_blocks("~~~\na\n~~~\n```\nb\n```\n"), 2);
        assert_eq!(code_blocks("```\nunterminated\n"), 0);
        // one stray backtick fence and one stray tilde fence never pair with each other
        assert_eq!(code_blocks("```\n~~~\n"), 0);
    }

    #[test]
    fn step_lines_cover_all_enumeration_styles() {
        let text = "1. first\n  2) second\nStep 3: third\nstep 4 : spaced colon\nversion 1.5\n";
        assert_eq!(step_lines(text), 3);
    }

    #[test]
    fn step_markers_need_no_trailing_space() {
        assert_eq!(step_lines("1.Install\n2.Run\n3.Done\n"), 3);
        assert_eq!(step_lines("1)a\nSTEP2:b\n"), 2);
    }

    #[test]
    fn bullets_count_dash_star_and_glyph() {
        let text = "- a\n* b\n• c\n  - nested\n";
        assert_eq!(bullets(text), 3);
    }

    #[test]
    fn any_line_starting_with_a_marker_is_a_bullet() {
        assert_eq!(bullets("---\n**bold**\n-x\n"), 3);
        assert_eq!(bullets("text - with dash\n"), 0);
    }

    #[test]
    fn docs_link_needs_keyword_and_url() {
        assert_eq!(has_docs_link("## Documentation\nVisit https://mylib.dev/docs\n"), 1);
        assert_eq!(has_docs_link("## Documentation\nComing soon\n"), 0);
        assert_eq!(has_docs_link("Homepage: https://mylib.dev\n"), 0);
    }

    #[test]
    fn one_command_idioms() {
        assert_eq!(has_one_command("npx create-thing my-app"), 1);
        assert_eq!(has_one_command("pip install mylib"), 1);
        assert_eq!(has_one_command("curl -fsSL https://x.sh/install | sh"), 1);
        assert_eq!(has_one_command("docker run -p 80:80 me/app"), 1);
        assert_eq!(has_one_command("cargo install ripgrep"), 1);
        assert_eq!(has_one_command("We install joy."), 0);
    }

    #[test]
    fn phrase_helpers() {
        assert!(mentions_what_or_why("Why it matters"));
        assert!(mentions_novelty("an opinionated take"));
        assert!(mentions_trend("for agent workflows"));
        assert!(mentions_fast_start("zero-config setup"));
        assert!(mentions_requirements("Requires Python 3.10+"));
        assert!(mentions_requirements("numpy >= 1.24"));
        assert!(!mentions_requirements("A tool for X."));
    }
}
