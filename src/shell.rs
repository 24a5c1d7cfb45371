//! Shell executor for the external CLI tools the e2e helpers lean on.
//!
//! Commands are written as multi-line string literals for readability;
//! internal whitespace runs are collapsed before execution.

use anyhow::{bail, Context, Result};
use std::process::Command;
use tracing::info;

/// Collapse every internal whitespace run to a single space.
pub fn normalize(cmd: &str) -> String {
    cmd.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Run `cmd` in a subshell and capture its stdout as text.
///
/// When `display` is true, the normalized command and its output are logged.
/// A non-zero exit status is an error carrying the status and captured
/// stderr; the original harness swallowed failures and this bit callers more
/// than once.
pub fn run(cmd: &str, display: bool) -> Result<String> {
    let cmd = normalize(cmd);
    let output = Command::new("sh")
        .arg("-c")
        .arg(&cmd)
        .output()
        .with_context(|| format!("spawn `{cmd}`"))?;

    let stdout = String::from_utf8(output.stdout)
        .with_context(|| format!("non-UTF-8 output from `{cmd}`"))?;

    if display {
        info!("$ {}", cmd);
        info!("{}", stdout);
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "command `{}` failed ({}): {}",
            cmd,
            output.status,
            stderr.trim()
        );
    }

    Ok(stdout)
}
