//! In-memory shell for collector tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

use super::{CommandOutput, Shell};

/// Answers known command lines with canned output
///
/// Unknown command lines fail with exit code 127, like a missing executable.
#[derive(Default)]
pub(crate) struct FakeShell {
    responses: HashMap<String, CommandOutput>,
    delay: Option<Duration>,
    calls: RefCell<Vec<String>>,
}

impl FakeShell {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), CommandOutput::ok(stdout));
        self
    }

    pub(crate) fn fail(mut self, command_line: &str, code: i32, stderr: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            CommandOutput::failed(code, stderr),
        );
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Command lines seen so far, in call order
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Shell for FakeShell {
    async fn run(&self, command_line: &str) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command_line.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self
            .responses
            .get(command_line)
            .cloned()
            .unwrap_or_else(|| CommandOutput::failed(127, "command not found")))
    }
}
