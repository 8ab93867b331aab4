use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use userdir_rank::ranking::PlaceholderStyle;

#[derive(Parser)]
#[command(
    name = "userdir-rank",
    about = "Ranking clauses for Matrix user directory search",
    version,
    after_help = "Examples:\n  userdir-rank ordering --engine postgres\n  userdir-rank ordering --engine postgres --style dollar --start 3 --query 'alice:*'\n  userdir-rank ordering --engine sqlite --json\n  userdir-rank config"
)]
pub struct Cli {
    /// Config file (default: ~/.userdir-rank/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the ORDER BY body and its parameters for an engine
    Ordering(OrderingArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Parser)]
pub struct OrderingArgs {
    /// Database engine: postgres or sqlite
    #[arg(long)]
    pub engine: String,

    /// Placeholder syntax
    #[arg(long, value_enum, default_value_t = Style::Anonymous)]
    pub style: Style,

    /// Number of the first placeholder for numbered and dollar styles
    #[arg(long, default_value_t = 1)]
    pub start: usize,

    /// Search query to bind into the query slots
    #[arg(long)]
    pub query: Option<String>,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Style {
    /// ?
    Anonymous,
    /// ?1, ?2, ...
    Numbered,
    /// $1, $2, ...
    Dollar,
}

impl Style {
    pub fn with_start(self, start: usize) -> PlaceholderStyle {
        match self {
            Style::Anonymous => PlaceholderStyle::Anonymous,
            Style::Numbered => PlaceholderStyle::Numbered { start },
            Style::Dollar => PlaceholderStyle::Dollar { start },
        }
    }
}
