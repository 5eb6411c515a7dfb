use clap::{Parser, Subcommand};
use log_analyzer_core::cli::{self, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "log-analyzer",
    version,
    about = "Builds a per-URL latency report from the latest nginx access log"
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the latest log and write its report (default)
    Run,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Validate the config and show which log would be analyzed
    Check {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Cli::parse();

    match args.command {
        Some(Command::Init { force }) => {
            if let Err(e) = cli::init::init(&args.config, force) {
                eprintln!("init error: {e:#}");
                std::process::exit(1);
            }
        }

        Some(Command::Check { json }) => {
            if let Err(e) = cli::check::check(&args.config, json) {
                eprintln!("check error: {e:#}");
                std::process::exit(1);
            }
        }

        Some(Command::Run) | None => match cli::run::run(&args.config) {
            Ok(code) => std::process::exit(code),
            Err(e) => {
                eprintln!("error: {e:#}");
                std::process::exit(-1);
            }
        },
    }
}
