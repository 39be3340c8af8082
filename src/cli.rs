use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "starscore",
    version,
    about = "Heuristic star-worthiness scoring for a project's README"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a README on the four dimensions
    Score(ScoreCommand),
    /// Print the raw signals detected in a README
    Signals(SignalsCommand),
}

/// Where the README comes from: a GitHub repo or a local file.
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct ReadmeSource {
    /// GitHub repository as owner/name
    #[arg(long)]
    pub repo: Option<String>,

    /// Score a local README instead of fetching one
    #[arg(long)]
    pub readme_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub source: ReadmeSource,

    /// Branch, tag or commit to read (defaults to the configured refs)
    #[arg(long = "ref", value_name = "REF", requires = "repo")]
    pub reference: Option<String>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Follow the README's documentation link for supplemental evidence
    #[arg(long, requires = "repo", conflicts_with = "docs_file")]
    pub follow_docs: bool,

    /// Use a local file as the supplemental documentation
    #[arg(long)]
    pub docs_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct SignalsCommand {
    #[command(flatten)]
    pub source: ReadmeSource,

    #[arg(long = "ref", value_name = "REF", requires = "repo")]
    pub reference: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
}
