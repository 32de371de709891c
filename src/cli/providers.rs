//! Provider subcommand arguments

use clap::Parser;

/// Arguments for 'aws' subcommand
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
        cloudtree aws\n  \
        cloudtree aws --profile prod -r us-east-1 -r eu-west-1\n  \
        cloudtree aws --skip lambda --jobs 4")]
pub struct AwsArgs {
    /// AWS named profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Region to scan (repeatable; default: every region the account sees)
    #[arg(short = 'r', long = "region", value_name = "REGION")]
    pub regions: Vec<String>,
}

/// Arguments for 'gcp' subcommand
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
        cloudtree gcp\n  \
        cloudtree gcp --org 123456789012\n  \
        cloudtree gcp --org \"Acme Corp\" -p web-prod -p data-prod")]
pub struct GcpArgs {
    /// Organization ID or display name (required when several are visible)
    #[arg(long, env = "CLOUDTREE_ORG")]
    pub org: Option<String>,

    /// Project to scan (repeatable; default: every accessible project)
    #[arg(short = 'p', long = "project", value_name = "PROJECT")]
    pub projects: Vec<String>,
}
