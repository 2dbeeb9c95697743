// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `summarize`, `extract` and
// `config`, and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - range checks (--max-sentences 1..=50)
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::config::AppConfig;
use crate::infra::config_store::ConfigStore;
use crate::infra::upload::UploadSource;
use crate::nlp::stopwords::StopwordList;
use crate::summarizer::scorer::MatchMode;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a PDF's text and print a frequency-based summary
    Summarize(SummarizeArgs),

    /// Extract a PDF's text without summarising it
    Extract(ExtractArgs),

    /// Print (or write) the effective configuration
    Config(ConfigArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Built-in stopword list, as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopwordArg {
    Nltk,
    Iso,
}

impl From<StopwordArg> for StopwordList {
    fn from(a: StopwordArg) -> Self {
        match a {
            StopwordArg::Nltk => StopwordList::Nltk,
            StopwordArg::Iso => StopwordList::Iso,
        }
    }
}

/// Word matching rule, as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchArg {
    Substring,
    Token,
}

impl From<MatchArg> for MatchMode {
    fn from(a: MatchArg) -> Self {
        match a {
            MatchArg::Substring => MatchMode::Substring,
            MatchArg::Token => MatchMode::Token,
        }
    }
}

/// Flags that feed AppConfig. Shared by `summarize` and `config`.
/// Anything left unset falls back to the config file, then to
/// the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// JSON config file to start from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of sentences in the summary [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=50))]
    pub max_sentences: Option<u16>,

    /// NLTK-style data directory (reads corpora/stopwords/english)
    #[arg(long)]
    pub resource_dir: Option<PathBuf>,

    /// Built-in stopword list used when no resource dir is given
    #[arg(long, value_enum)]
    pub stopwords: Option<StopwordArg>,

    /// How summary words are matched inside sentences
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchArg>,
}

impl SettingsArgs {
    /// Defaults → config file → CLI flags
    pub fn resolve(&self) -> Result<AppConfig> {
        let base = match &self.config {
            Some(path) => ConfigStore::load(path)?,
            None => AppConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Overlay the flags that were actually given onto `config`
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(n) = self.max_sentences {
            config.max_sentences = usize::from(n);
        }
        if let Some(dir) = &self.resource_dir {
            config.resource_dir = Some(dir.clone());
        }
        if let Some(list) = self.stopwords {
            config.stopwords = list.into();
        }
        if let Some(mode) = self.match_mode {
            config.match_mode = mode.into();
        }
        config
    }
}

/// All arguments for the `summarize` command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// PDF to summarise, or "-" to read it from stdin
    #[arg(long, value_parser = parse_upload)]
    pub file: UploadSource,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave the extracted text out of the output
    #[arg(long)]
    pub no_text: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// All arguments for the `extract` command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// PDF to read, or "-" to read it from stdin
    #[arg(long, value_parser = parse_upload)]
    pub file: UploadSource,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// All arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the config here instead of printing it
    #[arg(long)]
    pub write: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

fn parse_upload(arg: &str) -> Result<UploadSource, String> {
    if arg.is_empty() {
        return Err("expected a file path or '-'".to_string());
    }
    Ok(UploadSource::parse(arg))
}
