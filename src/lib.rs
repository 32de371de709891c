//! cloudtree - Inventory cloud resources as a tree
//!
//! Walks an AWS account or a Google Cloud organization through the vendor
//! CLIs (`aws`, `gcloud`, `gsutil`) and prints every resource found as a
//! box-drawing tree.
//!
//! # Features
//!
//! - Account-wide and per-region AWS categories (S3, IAM, EC2, RDS, ...)
//! - Per-project GCP categories (Compute Engine, Cloud Storage, ...)
//! - Failed or denied calls drop their category instead of aborting
//! - Optional parallel collection of regions/projects with stable output
//!
//! # Example
//!
//! ```bash
//! # Inventory the default AWS profile
//! cloudtree aws
//!
//! # Two regions of a named profile, four at a time
//! cloudtree aws --profile prod -r us-east-1 -r eu-west-1 -j 4
//!
//! # Google Cloud organization by display name
//! cloudtree gcp --org acme.example
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod render;
pub mod settings;
pub mod tree;
pub mod ui;

pub use adapter::{Adapter, CommandOutput, FieldExt, Shell, SystemShell};
pub use cli::{AwsArgs, Cli, Command, GcpArgs};
pub use error::{InventoryError, Result};
pub use providers::{aws::collect_account, gcp::collect_organization, CollectOptions, Context};
pub use render::{render, write_tree};
pub use settings::{RunOptions, Settings, SettingsStore};
pub use tree::TreeNode;
