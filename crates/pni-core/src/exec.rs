//! Blocking child process execution
//!
//! Package-manager and generator invocations inherit the controlling
//! terminal so their own progress output and prompts reach the user
//! directly. The caller suspends until the child exits; a non-zero exit is
//! fatal. No timeout is imposed.

use crate::error::SetupError;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

/// Run a shell command in `cwd`, inheriting stdio, and fail on non-zero exit
pub async fn run_interactive(command: &str, cwd: &Path) -> Result<()> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .status()
        .await
        .with_context(|| format!("Failed to spawn `{}`", command))?;

    if !status.success() {
        return Err(SetupError::CommandFailed {
            command: command.to_string(),
            code: status.code().unwrap_or(-1),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_command() {
        let cwd = std::env::temp_dir();
        assert!(run_interactive("true", &cwd).await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_command_reports_exit_code() {
        let cwd = std::env::temp_dir();
        let err = run_interactive("exit 3", &cwd).await.unwrap_err();
        let setup_err = err.downcast_ref::<SetupError>().unwrap();
        match setup_err {
            SetupError::CommandFailed { code, .. } => assert_eq!(*code, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_command_runs_in_given_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        run_interactive("touch marker", dir.path()).await.unwrap();
        assert!(dir.path().join("marker").exists());
    }
}
