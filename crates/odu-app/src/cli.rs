use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "odu", version)]
#[command(about = "Kannada reading assistant: dictionary lookups, inline glosses and pronunciation")]
pub struct Cli {
    /// JSON config file (see `odu config init --path`)
    #[arg(long, global = true, conflicts_with = "profile")]
    pub config: Option<PathBuf>,

    /// Named profile under the data directory
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve one or more words
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,

        /// Append unresolved words to the missing-word log
        #[arg(long)]
        record_missing: bool,
    },
    /// Split text into word and non-word tokens
    Tokens(TextArgs),
    /// Split text into sentences, paragraph by paragraph
    Sentences(TextArgs),
    /// Replace every known word with its meaning
    Gloss(TextArgs),
    /// Romanize text and print a plain pronunciation hint
    Pronounce(TextArgs),
    /// Manage user overrides
    Overrides {
        #[command(subcommand)]
        action: OverridesCommand,
    },
    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
    /// Interactive session reading lines from stdin
    Read,
}

/// Text from the argument, a file, or stdin
#[derive(Args, Debug)]
pub struct TextArgs {
    pub text: Option<String>,

    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum OverridesCommand {
    /// Create the overrides file with its header if missing
    Init,
    /// Set a meaning; an empty meaning removes the override
    Set { word: String, meaning: String },
    /// Print all overrides
    List,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a default profile
    Init {
        #[arg(long, default_value = "main")]
        name: String,

        /// Write a plain config file here instead of a named profile
        #[arg(long)]
        path: Option<PathBuf>,

        /// Replace an existing profile
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}
