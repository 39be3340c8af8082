use clap::Parser;
use starscore::cli::{self, ReadmeSource};
use starscore::error::StarsError;
use starscore::fetch::{self, Fetcher};
use starscore::types::config::FetchSettings;
use starscore::types::report::{DocsFollow, ScoreReport};
use starscore::{analyze, config, logging, report, scan};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_ERROR: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

/// README text plus where it came from.
struct LoadedReadme {
    repo: String,
    readme: String,
    source: String,
    text: String,
}

fn load_readme(
    source: &ReadmeSource,
    reference: Option<&str>,
    settings: &FetchSettings,
) -> Result<LoadedReadme, StarsError> {
    if let Some(path) = &source.readme_file {
        let text = fetch::read_local_text(path)?;
        return Ok(LoadedReadme {
            repo: "local".to_string(),
            readme: file_name(path),
            source: path.display().to_string(),
            text,
        });
    }

    let repo = source.repo.as_deref().unwrap_or_default();
    let fetcher = Fetcher::new(settings.clone())?;
    let fetched = fetcher.fetch_readme(repo, reference)?;
    Ok(LoadedReadme {
        repo: fetched.repo.to_string(),
        readme: fetched.filename,
        source: fetched.source_url,
        text: fetched.text,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_docs(
    cmd: &cli::ScoreCommand,
    readme_text: &str,
    settings: &FetchSettings,
) -> Result<(Option<String>, DocsFollow), StarsError> {
    if let Some(path) = &cmd.docs_file {
        let raw = fetch::read_local_text(path)?;
        let text = fetch::normalize_docs_text(&raw, None, settings.max_docs_bytes);
        let docs = DocsFollow {
            followed_url: Some(path.display().to_string()),
            fetch_ok: Some(text.is_some()),
        };
        return Ok((text, docs));
    }

    if !cmd.follow_docs {
        return Ok((None, DocsFollow::default()));
    }

    let Some(url) = fetch::extract_docs_url(readme_text) else {
        tracing::info!("README has no documentation link to follow");
        return Ok((None, DocsFollow::default()));
    };
    let fetcher = Fetcher::new(settings.clone())?;
    let text = fetcher.fetch_docs_text(&url);
    let docs = DocsFollow {
        followed_url: Some(url),
        fetch_ok: Some(text.is_some()),
    };
    Ok((text, docs))
}

fn run(cli: cli::Cli) -> Result<i32, StarsError> {
    let cwd = std::env::current_dir()?;
    let settings = config::load_config(&cwd)?.fetch_settings();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = load_readme(&cmd.source, cmd.reference.as_deref(), &settings)?;
            let (docs_text, docs) = load_docs(&cmd, &loaded.text, &settings)?;

            let result = analyze::evaluate(&loaded.text, docs_text.as_deref());
            let score_report =
                ScoreReport::new(loaded.repo, loaded.readme, loaded.source, result, docs)?;
            tracing::info!(overall = score_report.overall, "scored README");

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Text => report::OutputFormat::Text,
            };
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Signals(cmd) => {
            let loaded = load_readme(&cmd.source, cmd.reference.as_deref(), &settings)?;
            let signals = scan::detect_signals(&loaded.text);
            println!("{}", report::json::signals_to_json(&signals)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INPUT_ERROR
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
