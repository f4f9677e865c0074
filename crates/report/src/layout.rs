use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const SUMMARIES_DIR: &str = "Summaries";
pub const SHORT_SUMMARY_DIR: &str = "Short_Summary";

/// Where report files for each paper are written
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperPaths {
    pub summary_dir: PathBuf,
    pub summary_txt: PathBuf,
    pub summary_md: PathBuf,
    pub extraction_json: PathBuf,
    pub short_dir: PathBuf,
    pub short_txt: PathBuf,
    pub short_md: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn summaries_dir(&self) -> PathBuf {
        self.root.join(SUMMARIES_DIR)
    }

    pub fn short_summary_dir(&self) -> PathBuf {
        self.root.join(SHORT_SUMMARY_DIR)
    }

    /// Create both top-level output directories
    pub async fn ensure_roots(&self) -> Result<()> {
        for dir in [self.summaries_dir(), self.short_summary_dir()] {
            tokio::fs::create_dir_all(&dir)
                .await
                .context(format!("Failed to create output directory: {:?}", dir))?;
        }
        Ok(())
    }

    pub fn paper(&self, stem: &str) -> PaperPaths {
        let summary_dir = self.summaries_dir().join(stem);
        let short_dir = self.short_summary_dir().join(stem);

        PaperPaths {
            summary_txt: summary_dir.join(format!("{}_summary.txt", stem)),
            summary_md: summary_dir.join(format!("{}_summary.md", stem)),
            extraction_json: summary_dir.join(format!("{}_extraction.json", stem)),
            short_txt: short_dir.join(format!("{}_short_summary.txt", stem)),
            short_md: short_dir.join(format!("{}_short_summary.md", stem)),
            summary_dir,
            short_dir,
        }
    }
}
