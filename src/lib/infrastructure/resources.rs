//! Bundled resource store

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::error;

/// Read-only store of text resources shipped alongside the program
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    /// Creates a bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Reads the full UTF-8 text of the resource at `path`.
    ///
    /// Returns the empty string when the resource is missing, unreadable or
    /// not valid UTF-8; the cause is logged and never propagated. The file
    /// handle is released on every exit path before this function returns.
    pub async fn read_resource(&self, path: impl AsRef<Path>) -> String {
        let path = self.root.join(path);

        match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(cause) => {
                error!(%cause, path = %path.display(), "failed to read bundled resource");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn scratch_dir(test: &str) -> PathBuf {
        std::env::temp_dir().join(format!("notify-mailer-{}-{}", test, std::process::id()))
    }

    #[tokio::test]
    async fn test_missing_resource_reads_as_empty_string() {
        let bundle = ResourceBundle::new(scratch_dir("missing"));

        let text = bundle.read_resource("missing/path").await;

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_resource_reads_back_its_exact_text() -> TestResult {
        let root = scratch_dir("roundtrip");
        fs::create_dir_all(&root).await?;
        fs::write(root.join("greeting.txt"), "Dear {name},\n\nwélcome!\n").await?;

        let bundle = ResourceBundle::new(&root);

        let text = bundle.read_resource("greeting.txt").await;

        assert_eq!(text, "Dear {name},\n\nwélcome!\n");

        fs::remove_dir_all(&root).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_non_utf8_resource_reads_as_empty_string() -> TestResult {
        let root = scratch_dir("non-utf8");
        fs::create_dir_all(&root).await?;
        fs::write(root.join("logo.bin"), [0xff, 0xfe, 0x00, 0x01]).await?;

        let bundle = ResourceBundle::new(&root);

        let text = bundle.read_resource("logo.bin").await;

        assert_eq!(text, "");

        fs::remove_dir_all(&root).await?;

        Ok(())
    }
}
