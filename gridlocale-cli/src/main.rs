use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridlocale_cli::commands::{
    SourceArgs, run_check_command, run_generate_command, run_tree_command,
};
use gridlocale_cli::display;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate localization files from a sheet export.
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Write under this directory instead of the descriptor's outputDir
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Report missing translations without writing files.
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the missing keys as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 1 when any translation is missing
        #[arg(long)]
        strict: bool,
    },

    /// Print the parsed translation tree as JSON.
    Tree {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let outcome = match args.commands {
        Commands::Generate { source, output_dir } => run_generate_command(source, output_dir),
        Commands::Check {
            source,
            json,
            strict,
        } => run_check_command(source, json).map(|clean| {
            if strict && !clean {
                std::process::exit(1);
            }
        }),
        Commands::Tree { source } => run_tree_command(source),
    };

    if let Err(e) = outcome {
        display::error(&e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}
