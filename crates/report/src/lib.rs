pub mod layout;
pub mod render;

pub use layout::{OutputLayout, PaperPaths};
pub use render::PaperReport;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .context(format!("Failed to write report file: {:?}", path))
}

/// Write every report file for one paper, returning the paths written
pub async fn write_report(
    layout: &OutputLayout,
    report: &PaperReport,
    with_json: bool,
) -> Result<Vec<PathBuf>> {
    let paths = layout.paper(&report.stem);

    for dir in [&paths.summary_dir, &paths.short_dir] {
        tokio::fs::create_dir_all(dir)
            .await
            .context(format!("Failed to create output directory: {:?}", dir))?;
    }

    let mut files = vec![
        (paths.summary_txt.clone(), report.render_summary_txt()),
        (paths.summary_md.clone(), report.render_summary_md()),
        (paths.short_txt.clone(), report.render_short_txt()),
        (paths.short_md.clone(), report.render_short_md()),
    ];

    if with_json {
        files.push((paths.extraction_json.clone(), report.extraction.to_json()?));
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        write_file(&path, &contents).await?;
        written.push(path);
    }

    tracing::debug!(file = %report.source, files = written.len(), "Report written");
    Ok(written)
}
