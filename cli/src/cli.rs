//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for surveyforge
#[derive(Parser, Debug)]
#[command(name = "surveyforge")]
#[command(version, about = "Parse free survey text into a structured, validated schema")]
#[command(long_about = r#"
Surveyforge sends free-text survey descriptions to an inference model and
validates the reply against a strict question/scoring schema.

The pipeline is a fixed sequence: input checks, one model request, markdown
fence stripping, strict JSON parsing, and ordered structural validation.
Any stage's failure stops the pipeline with a single categorized rejection.

An API key is required, via SURVEYFORGE_API_KEY, DEEPSEEK_API_KEY, or the
config file.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./surveyforge.toml    Project-level config
3. ~/.config/surveyforge/config.toml   Global config

Example:
  surveyforge survey.txt
  cat survey.txt | surveyforge
  surveyforge --model deepseek-reasoner --slug survey.txt
"#)]
pub struct Cli {
    /// File with the survey text; stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Model identifier to query
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Also assign a share slug and include it in the output
    #[arg(long)]
    pub slug: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
