mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formz")]
#[command(version, about = "Formz CLI - data attributes and activation scripts for forms", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file
    #[arg(long, global = true, default_value = "formz.toml")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the validation activation script of a form
    Script {
        /// Form definition (.toml or .json)
        form: PathBuf,
    },

    /// Print the data attributes of a form for submitted values and a validation result
    Attributes {
        /// Form definition (.toml or .json)
        form: PathBuf,

        /// JSON object holding the submitted values
        #[arg(long)]
        values: Option<PathBuf>,

        /// JSON validation result
        #[arg(long)]
        result: Option<PathBuf>,

        /// Render as HTML attributes instead of key=value lines
        #[arg(long)]
        html: bool,
    },

    /// Print the cache identifier of a form type
    #[command(name = "cache-id")]
    CacheId {
        /// Fully qualified form type name
        type_name: String,

        /// Identifier prefix
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let context = commands::load_context(&cli.settings)?;

    match cli.command {
        Commands::Script { form } => {
            commands::script::execute(&context, &form)?;
        }
        Commands::Attributes {
            form,
            values,
            result,
            html,
        } => {
            commands::attributes::execute(&context, &form, values.as_deref(), result.as_deref(), html)?;
        }
        Commands::CacheId { type_name, prefix } => {
            commands::cache_id::execute(&context, &type_name, &prefix);
        }
    }

    Ok(())
}
