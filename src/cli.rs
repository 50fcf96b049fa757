use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// poimap - icon and route lookup for the POI map front end
#[derive(Parser, Debug)]
#[command(name = "poimap")]
#[command(about = "Resolve point-of-interest icons and front-end routes")]
#[command(version)]
pub struct Cli {
    /// Catalog configuration file (JSON) to use instead of the built-in table
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the icon for a single category word
    Name {
        /// Category word (e.g., pub)
        word: String,
        /// Fall back to the default icon for unknown words
        #[arg(short, long)]
        default: bool,
    },
    /// Resolve the icon for an ordered list of candidate words
    Kind {
        /// Candidate category words, most specific first
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Resolve the icon for a feature description file (JSON)
    Feature {
        /// Path to the feature JSON
        file: PathBuf,
    },
    /// List the effective icon catalog
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the route table for a hostname, or the route a path resolves to
    Routes {
        /// Hostname the front end is served from
        #[arg(long, default_value = "localhost")]
        host: String,
        /// Request path to match against the table
        #[arg(short, long)]
        path: Option<String>,
        /// Print the table or the match as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a catalog configuration file
    Validate {
        /// Path to the catalog configuration file
        file: PathBuf,
    },
    /// Write the default catalog configuration to a file
    InitConfig {
        /// Destination path
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
