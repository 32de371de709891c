//! Shell execution seam

use std::future::Future;
use std::io;
use std::process::Stdio;

use tokio::process::Command;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs a command line and captures its output
///
/// The production implementation hands the line to the platform shell;
/// tests substitute canned outputs.
pub trait Shell {
    /// Run `command_line` to completion
    ///
    /// Returns an error only when the process could not be spawned or awaited.
    fn run(&self, command_line: &str) -> impl Future<Output = io::Result<CommandOutput>>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Shell for SystemShell {
    async fn run(&self, command_line: &str) -> io::Result<CommandOutput> {
        let output = shell_command(command_line)
            .stdin(Stdio::null())
            // Dropping the future on timeout must not leave the child running.
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn shell_command(command_line: &str) -> Command {
    #[cfg(windows)]
    {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(command_line);
        command
    }

    #[cfg(not(windows))]
    {
        let mut command = Command::new("sh");
        command.arg("-c").arg(command_line);
        command
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout_and_status() {
        let output = SystemShell.run("printf 'hello\\nworld\\n'").await.unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "hello\nworld\n");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_captures_stderr_and_exit_code() {
        let output = SystemShell.run("echo denied >&2; exit 3").await.unwrap();
        assert!(!output.success());
        assert_eq!(output.status, Some(3));
        assert_eq!(output.stderr.trim(), "denied");
    }

    #[tokio::test]
    async fn test_missing_executable_is_a_failed_status() {
        let output = SystemShell
            .run("definitely-not-a-real-cloud-cli --version")
            .await
            .unwrap();
        assert!(!output.success());
    }

    #[test]
    fn test_command_output_constructors() {
        assert!(CommandOutput::ok("{}").success());
        let failed = CommandOutput::failed(254, "AccessDenied");
        assert!(!failed.success());
        assert_eq!(failed.stderr, "AccessDenied");
        assert!(!CommandOutput::default().success());
    }
}
