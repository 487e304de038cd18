use clap::{Parser, Subcommand};
use std::process;

mod command;
mod config;
mod scanner;

use config::Config;

#[derive(Parser)]
#[command(name = "frontmatter")]
#[command(about = "Maintains frontmatter metadata across a markdown docs tree", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate frontmatter across the docs tree
    Check {
        /// Only check files currently staged in git
        #[arg(long)]
        staged: bool,
    },
    /// Fill missing frontmatter fields from path-derived values and defaults
    Update,
    /// Generate uid and timestamps for staged files
    Generate {
        /// Process the whole docs tree instead of the staged set
        #[arg(long)]
        all: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = Config::from_env();
    log::debug!(
        "docs dir: {}, mapping: {}",
        config.docs_dir.display(),
        config.mapping_path.display()
    );

    let result = match cli.command {
        Commands::Check { staged } => command::check::run(&config, staged),
        Commands::Update => command::update::run(&config),
        Commands::Generate { all } => command::generate::run(&config, all),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            log::error!("{err:#}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}
