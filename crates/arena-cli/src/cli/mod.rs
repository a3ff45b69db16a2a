use arena_config::ArenaConfig;
use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `arena` binary.
#[derive(Debug, Parser)]
#[command(
    name = "arena",
    version,
    about = "Arena - two agents answer, a referee picks, you label"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides `api.base_url`)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// An explicit `--format` wins; otherwise the configured default, falling
    /// back to JSON when that is unrecognized.
    #[must_use]
    pub fn global_flags(&self, config: &ArenaConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_config(&config.general.default_format).unwrap_or_else(|| {
                tracing::warn!(
                    value = %config.general.default_format,
                    "unknown general.default_format; using json"
                );
                OutputFormat::Json
            })
        });
        GlobalFlags {
            format,
            quiet: self.quiet,
        }
    }
}
