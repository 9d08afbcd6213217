use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the engine config TOML; falls back to $SIGNAL_SCAN_CONFIG,
    /// then to built-in defaults
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a single bar-series document
    Scan {
        /// Source of the series JSON: file, stdin, or json
        #[arg(long, default_value = "stdin")]
        source: String,

        /// Path to a JSON file (source=file) or inline JSON (source=json)
        #[arg(long)]
        input: Option<String>,

        /// Signal mode override: crossover or confluence
        #[arg(long)]
        mode: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Evaluate a JSON array of series documents, each independently
    Batch {
        /// Source of the series array: file, stdin, or json
        #[arg(long, default_value = "stdin")]
        source: String,

        /// Path to a JSON file (source=file) or inline JSON (source=json)
        #[arg(long)]
        input: Option<String>,

        /// Signal mode override: crossover or confluence
        #[arg(long)]
        mode: Option<String>,
    },
}
