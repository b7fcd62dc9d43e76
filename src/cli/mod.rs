//! CLI argument definitions.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stream Deck profile generator - builds linked button layouts for live
/// events and packs them as .streamDeckProfile archives.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "sdgen", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// How results are printed
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "SDGEN_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json, with JSON logs on stderr
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print errors only
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain text without ANSI colors
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values of `--format`.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled text
    #[default]
    Text,
    /// Indented JSON
    Json,
    /// Single-line JSON
    JsonCompact,
}

impl Cli {
    /// True when results are printed as JSON.
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// True when JSON is printed on one line.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a generator and write its profile archive
    Run(RunArgs),

    /// List available generators
    Generators,

    /// Summarize a .streamDeckProfile archive
    Inspect(InspectArgs),

    /// Print the folder name the Stream Deck app uses for profile ids
    FolderName(FolderNameArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Generator name (see `sdgen generators`)
    pub generator: String,

    /// Event config file (.json, .yaml, .yml or .toml)
    #[arg(long, short = 'c', env = "SDGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the archive is written to
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Archive to read
    pub archive: PathBuf,
}

#[derive(Parser, Debug)]
pub struct FolderNameArgs {
    /// Profile ids in textual UUID form
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
