//! Provider collectors
//!
//! A collector resolves the top-level scope (account or organization), then
//! walks sub-scopes (regions, projects) and resource categories, issuing one
//! adapter call per category and appending what comes back. A category whose
//! call fails or returns nothing is left out of the tree entirely.

pub mod aws;
pub mod gcp;
pub mod traits;

use std::future::Future;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::adapter::{Adapter, Shell};
use crate::tree::TreeNode;

/// Options shared by all collectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// AWS named profile
    pub profile: Option<String>,
    /// AWS regions to scan (empty: discover)
    pub regions: Vec<String>,
    /// GCP organization id or display name
    pub org: Option<String>,
    /// GCP projects to scan (empty: discover)
    pub projects: Vec<String>,
    /// Category labels to skip, case-insensitive
    pub skip: Vec<String>,
    /// Sub-scopes collected at once
    pub jobs: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            profile: None,
            regions: Vec::new(),
            org: None,
            projects: Vec::new(),
            skip: Vec::new(),
            jobs: crate::config::defaults::JOBS,
        }
    }
}

impl CollectOptions {
    /// Check if a category was excluded with --skip
    pub fn is_skipped(&self, label: &str) -> bool {
        self.skip.iter().any(|s| s.eq_ignore_ascii_case(label))
    }
}

/// Everything a collector needs for one run
pub struct Context<'a, S> {
    pub adapter: &'a Adapter<S>,
    pub options: &'a CollectOptions,
    pub spinner: Option<&'a ProgressBar>,
}

impl<S> Clone for Context<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Context<'_, S> {}

impl<'a, S: Shell> Context<'a, S> {
    pub fn new(
        adapter: &'a Adapter<S>,
        options: &'a CollectOptions,
        spinner: Option<&'a ProgressBar>,
    ) -> Self {
        Self {
            adapter,
            options,
            spinner,
        }
    }

    /// Update the spinner message
    pub fn status(&self, message: &str) {
        if let Some(spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Run each category against `scope` and attach the non-empty ones to `parent`
    pub async fn collect_categories<I>(
        &self,
        invocation: &I,
        scope: &str,
        categories: &[Category<I>],
        parent: &mut TreeNode,
    ) {
        for category in categories {
            if self.options.is_skipped(category.label) {
                debug!("Skipping {} for '{}'", category.label, scope);
                continue;
            }

            let command_line = (category.command)(invocation, scope);
            let labels = match category.decode {
                Decode::Structured(extract) => {
                    extract(&self.adapter.run_structured(&command_line).await)
                }
                Decode::Lines(extract) => extract(&self.adapter.run_lines(&command_line).await),
            };

            debug!(
                "Found {} {} resources in '{}'",
                labels.len(),
                category.label,
                scope
            );
            attach_category(parent, category.label, labels);
        }
    }
}

/// How a category's command output turns into resource labels
#[derive(Clone, Copy)]
pub enum Decode {
    /// JSON output
    Structured(fn(&Value) -> Vec<String>),
    /// One item per line
    Lines(fn(&[String]) -> Vec<String>),
}

/// One resource category: its node label, command line, and decoder
///
/// `I` is the provider's command-line builder; the `&str` passed to `command`
/// is the sub-scope (region or project), empty for account-wide categories.
pub struct Category<I> {
    pub label: &'static str,
    pub command: fn(&I, &str) -> String,
    pub decode: Decode,
}

/// Append a category node holding one leaf per label, unless there are none
pub fn attach_category(parent: &mut TreeNode, label: &str, labels: Vec<String>) {
    if labels.is_empty() {
        return;
    }
    let category = parent.append(TreeNode::new(label));
    for resource in labels {
        category.append(TreeNode::new(resource));
    }
}

/// Collect every sub-scope, at most `jobs` at a time
///
/// Results come back in `scopes` order regardless of completion order, so the
/// tree is the same as a sequential run.
pub async fn collect_scopes<F, Fut>(scopes: Vec<String>, jobs: usize, collect: F) -> Vec<TreeNode>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = TreeNode>,
{
    stream::iter(scopes)
        .map(collect)
        .buffered(jobs.max(1))
        .collect()
        .await
}

/// Typed view of decoded output, or the type's default when the shape doesn't fit
///
/// Empty (failed) results decode to the default as well.
pub fn decode_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

/// Quote a command-line argument for the shell
///
/// Plain tokens pass through unchanged; anything else is single-quoted with
/// embedded quotes escaped.
pub fn quote_arg(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=@".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// Last `/`-separated segment of a resource URL or path
pub fn last_segment(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}
