//! External command adapter
//!
//! Turns vendor CLI invocations into decoded data. Every call is
//! independently fault-tolerant: a non-zero exit, a spawn failure, a timeout
//! or undecodable output all come back as an empty result, so one broken
//! category never stops the rest of the inventory.

#[cfg(test)]
pub(crate) mod fake;
mod fields;
mod shell;

use std::time::Duration;

use log::{debug, trace};
use serde_json::Value;

pub use fields::FieldExt;
pub use shell::{CommandOutput, Shell, SystemShell};

/// Runs command lines through a [`Shell`] and decodes their output
pub struct Adapter<S = SystemShell> {
    shell: S,
    timeout: Duration,
}

impl Adapter<SystemShell> {
    /// Adapter over the platform shell
    pub fn system(timeout: Duration) -> Self {
        Self::new(SystemShell, timeout)
    }
}

impl<S: Shell> Adapter<S> {
    pub fn new(shell: S, timeout: Duration) -> Self {
        Self { shell, timeout }
    }

    #[cfg(test)]
    pub(crate) fn shell(&self) -> &S {
        &self.shell
    }

    /// Run a command whose stdout is JSON
    ///
    /// Returns `Value::Null` on any failure; [`FieldExt`] accessors read it as
    /// having no fields and no items.
    pub async fn run_structured(&self, command_line: &str) -> Value {
        let Some(stdout) = self.capture(command_line).await else {
            return Value::Null;
        };

        match serde_json::from_str(&stdout) {
            Ok(value) => value,
            Err(e) => {
                debug!("Undecodable output from `{}`: {}", command_line, e);
                Value::Null
            }
        }
    }

    /// Run a command whose stdout is one item per line
    ///
    /// Blank lines are dropped and trailing whitespace trimmed.
    pub async fn run_lines(&self, command_line: &str) -> Vec<String> {
        let Some(stdout) = self.capture(command_line).await else {
            return Vec::new();
        };

        stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Stdout of a successful run, `None` otherwise
    async fn capture(&self, command_line: &str) -> Option<String> {
        debug!("Running: {}", command_line);

        let output = match tokio::time::timeout(self.timeout, self.shell.run(command_line)).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                debug!("Failed to run `{}`: {}", command_line, e);
                return None;
            }
            Err(_) => {
                debug!(
                    "Timed out after {}s: `{}`",
                    self.timeout.as_secs(),
                    command_line
                );
                return None;
            }
        };

        if !output.success() {
            debug!(
                "`{}` exited with {:?}: {}",
                command_line,
                output.status,
                failure_reason(&output.stderr)
            );
            return None;
        }

        trace!("`{}` returned {} bytes", command_line, output.stdout.len());
        Some(output.stdout)
    }
}

/// First non-blank line of stderr (`aws` opens its errors with an empty line)
fn failure_reason(stderr: &str) -> &str {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}
