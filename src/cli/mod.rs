//! CLI argument parsing

mod providers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use providers::{AwsArgs, GcpArgs};

/// cloudtree CLI
#[derive(Parser, Debug)]
#[command(name = "cloudtree")]
#[command(version)]
#[command(
    about = "Inventory every resource in a cloud account and print it as a tree",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Skip a resource category by label (repeatable, case-insensitive)
    #[arg(long = "skip", value_name = "CATEGORY", global = true)]
    pub skip: Vec<String>,

    /// Number of regions/projects collected at once
    #[arg(short, long, env = "CLOUDTREE_JOBS", global = true)]
    pub jobs: Option<usize>,

    /// Per-command timeout in seconds
    #[arg(long, env = "CLOUDTREE_TIMEOUT", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Settings file (default: <config dir>/cloudtree/config.yaml)
    #[arg(short, long, env = "CLOUDTREE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Do not show the progress spinner
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,
}

/// Cloud provider to inventory
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inventory an AWS account
    Aws(AwsArgs),

    /// Inventory a Google Cloud organization
    #[command(visible_alias = "gcloud")]
    Gcp(GcpArgs),
}

impl Command {
    /// Provider name for log messages
    pub fn provider(&self) -> &'static str {
        match self {
            Command::Aws(_) => "aws",
            Command::Gcp(_) => "gcp",
        }
    }
}
