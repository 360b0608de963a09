//! Open external links (live demos, repositories, resume) in the desktop browser

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use std::time::Duration;
use tokio::time::timeout;

/// How long the platform opener gets before we give up on it
pub const OPEN_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

/// Only hand http(s) and mailto links to the opener
pub fn is_openable(url: &str) -> bool {
    let url = url.trim();
    url.starts_with("https://") || url.starts_with("http://") || url.starts_with("mailto:")
}

/// Open `url` with the platform opener, detached from the TUI's terminal
pub async fn open(url: &str) -> Result<()> {
    if !is_openable(url) {
        anyhow::bail!("Not an openable link: {}", url);
    }

    let url = url.trim().to_string();
    tracing::info!("Opening {}", url);

    let result = timeout(
        OPEN_TIMEOUT,
        tokio::task::spawn_blocking(move || {
            Command::new(OPENER)
                .arg(&url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
        }),
    )
    .await;

    match result {
        Ok(Ok(status)) => {
            let status = status.with_context(|| format!("Could not run {}", OPENER))?;
            if !status.success() {
                anyhow::bail!("{} exited with {}", OPENER, status);
            }
            Ok(())
        }
        Ok(Err(e)) => anyhow::bail!("Task failed: {}", e),
        Err(_) => anyhow::bail!("{} timed out", OPENER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_openable() {
        assert!(is_openable("https://github.com/example"));
        assert!(is_openable("  http://localhost:3000 "));
        assert!(is_openable("mailto:someone@example.com"));
        assert!(!is_openable("/resume.pdf"));
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable(""));
    }

    #[tokio::test]
    async fn test_open_rejects_relative_paths() {
        let err = open("/projects/chat.jpg").await.unwrap_err();
        assert!(err.to_string().contains("Not an openable link"));
    }
}
