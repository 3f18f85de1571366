mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "doclist",
    version,
    about = "List a project's markdown docs with their front-matter summaries"
)]
struct Cli {
    /// Path to config file (defaults to $XDG_CONFIG_HOME/doclist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for `list`; accepted before or after the subcommand name
    #[command(flatten)]
    list: ListArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the docs catalog (default)
    List,

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args, Clone, Default)]
pub struct ListArgs {
    /// Docs directory to scan (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub docs_dir: Option<PathBuf>,

    /// Directory name to skip at any depth; repeat for several (replaces configured set)
    #[arg(long = "exclude", global = true, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Do not skip any directory names (hidden directories are still skipped)
    #[arg(long, global = true, conflicts_with = "exclude")]
    pub no_exclude: bool,

    /// Output as JSON instead of the text report
    #[arg(long, global = true)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => cmd::list::run(cli.config.as_deref(), &cli.list),
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
    }
}
