use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// File name as found in the input directory, e.g. `paper.pdf`
    pub source: String,
    /// File name without extension, used to name output folders
    pub stem: String,
    pub text: String,
}

impl Document {
    pub fn new(path: &Path, text: String) -> Self {
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| source.clone());

        Self { source, stem, text }
    }
}
