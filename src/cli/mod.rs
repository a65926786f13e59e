//! Command-line interface.

pub mod combine;
pub mod completions;
pub mod output;
pub mod split;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config::Config;
use crate::core::encoding::ShareEncoding;
use crate::error::Result;

/// keysplit - Split secrets into Shamir shares and put them back together.
#[derive(Parser)]
#[command(
    name = "keysplit",
    about = "Split secrets into Shamir shares and put them back together",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./.keysplit.toml
    #[arg(long, global = true, env = "KEYSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a secret into shares
    Split(SplitArgs),

    /// Recover a secret from shares
    Combine(CombineArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `keysplit split`.
#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Number of shares to produce
    #[arg(short, long)]
    pub parts: Option<usize>,

    /// Shares required to recover the secret
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Share text encoding
    #[arg(short, long, value_enum)]
    pub encoding: Option<ShareEncoding>,

    /// Read the secret from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print shares as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `keysplit combine`.
#[derive(Args, Debug, Default)]
pub struct CombineArgs {
    /// Encoded shares (read from stdin, one per line, when omitted)
    pub shares: Vec<String>,

    /// Threshold the shares were split with; warns when fewer are given
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Share text encoding
    #[arg(short, long, value_enum)]
    pub encoding: Option<ShareEncoding>,

    /// Write the secret to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Supported shells for completions.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

/// The explicit `--config` file, or `.keysplit.toml` if present.
fn load_config(path: Option<PathBuf>) -> Result<Option<Config>> {
    match path {
        Some(path) => Config::load_from(&path).map(Some),
        None => Config::find(),
    }
}

/// Execute a CLI command.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Split(args) => {
            split::execute(args, &load_config(cli.config)?.unwrap_or_default())
        }
        Command::Combine(args) => combine::execute(args, load_config(cli.config)?.as_ref()),
        Command::Completions { shell } => completions::execute(shell),
    }
}
