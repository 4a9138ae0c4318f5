use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the error catalog and mint or decode error payloads
#[derive(Debug, Parser)]
#[command(name = "errorcode", about = "Structured service error catalog")]
pub struct Args {
    /// Path to a configuration file with extra templates
    #[arg(short, long, env = "ERRORCODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured log filter
    #[arg(long, env = "ERRORCODE_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List templates, optionally restricted to one scope
    List {
        #[arg(long)]
        scope: Option<String>,
    },
    /// Show the attributes of a template
    Show { name: String },
    /// Print the wire payload of a new error
    New {
        /// Template name, e.g. `GenericInvalidToken`
        name: String,
        /// Replace the default detail
        #[arg(short, long)]
        detail: Option<String>,
    },
    /// Report how a payload parses
    Decode { payload: String },
    /// Print the wire payload of a payload forwarded through the passthrough template
    Forward { payload: String },
}
