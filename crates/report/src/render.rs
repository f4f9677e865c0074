use extract::{ExtractionResult, ShortSummary};
use summarize::{ChunkSummary, DocumentSummary};

/// Everything written for one paper
#[derive(Debug, Clone)]
pub struct PaperReport {
    pub source: String,
    pub stem: String,
    pub summary: DocumentSummary,
    pub extraction: ExtractionResult,
    pub short_summary: ShortSummary,
    /// Heading used for keyword-focused sections, e.g. "EV Disadvantages"
    pub focus_heading: String,
}

fn join_or(items: Vec<String>, empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join("\n")
    }
}

fn chunk_blocks(summaries: &[ChunkSummary], heading: impl Fn(usize) -> String) -> String {
    let mut out = String::new();
    for summary in summaries {
        out.push('\n');
        out.push_str(&heading(summary.chunk));
        out.push('\n');
        out.push_str(summary.outcome.as_report_text());
    }
    out
}

impl PaperReport {
    pub fn render_summary_txt(&self) -> String {
        let mut out = format!("\nFile: {}\n", self.source);

        out.push_str("\n\n## Full Summary:\n");
        out.push_str(&chunk_blocks(&self.summary.full, |n| {
            format!("### Chunk {} Summary:", n)
        }));

        out.push_str(&format!("\n\n## {} Summary:\n", self.focus_heading));
        out.push_str(&chunk_blocks(&self.summary.focused, |n| {
            format!("### Chunk {} {}:", n, self.focus_heading)
        }));

        out.push_str("\n\n## Extracted Links:\n");
        out.push_str(&join_or(self.extraction.links.clone(), "No links found"));

        out.push_str("\n\n## Extracted Data Points:\n");
        out.push_str(&join_or(
            self.extraction.data_points.iter().map(|p| p.render()).collect(),
            "No data points found",
        ));

        out.push_str("\n\n## References/Proofs:\n");
        out.push_str(&join_or(
            self.extraction.references.iter().map(|r| r.render()).collect(),
            "No references found",
        ));

        out
    }

    pub fn render_summary_md(&self) -> String {
        let mut out = format!("# File: {}\n\n## Full Summary\n", self.source);

        for summary in &self.summary.full {
            out.push_str(&format!(
                "\n### Chunk {}\n\n{}\n",
                summary.chunk,
                summary.outcome.as_report_text()
            ));
        }

        out.push_str(&format!("\n## {} Summary\n", self.focus_heading));
        if self.summary.focused.is_empty() {
            out.push_str("\n_No matching content found._\n");
        }
        for summary in &self.summary.focused {
            out.push_str(&format!(
                "\n### Chunk {}\n\n{}\n",
                summary.chunk,
                summary.outcome.as_report_text()
            ));
        }

        out.push_str("\n## Extracted Links\n\n");
        out.push_str(&join_or(
            self.extraction.links.iter().map(|l| format!("- <{}>", l)).collect(),
            "_No links found._",
        ));

        out.push_str("\n\n## Extracted Data Points\n\n");
        out.push_str(&join_or(
            self.extraction
                .data_points
                .iter()
                .map(|p| format!("- `{}` -> {}", p.value, p.sentence))
                .collect(),
            "_No data points found._",
        ));

        out.push_str("\n\n## References/Proofs\n\n");
        out.push_str(&join_or(
            self.extraction
                .references
                .iter()
                .map(|r| format!("- **{}**: {}", r.label, r.text))
                .collect(),
            "_No references found._",
        ));
        out.push('\n');

        out
    }

    pub fn render_short_txt(&self) -> String {
        format!(
            "\nFile: {}\n\n\n## Short Summary:\n{}",
            self.source, self.short_summary.text
        )
    }

    pub fn render_short_md(&self) -> String {
        format!(
            "# File: {}\n\n## Short Summary\n{}",
            self.source, self.short_summary.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::{DataPoint, Reference};
    use summarize::SummaryOutcome;

    fn report() -> PaperReport {
        PaperReport {
            source: "grid.pdf".to_string(),
            stem: "grid".to_string(),
            summary: DocumentSummary {
                full: vec![
                    ChunkSummary {
                        chunk: 1,
                        outcome: SummaryOutcome::Summarized("Chunk one findings.".to_string()),
                    },
                    ChunkSummary {
                        chunk: 2,
                        outcome: SummaryOutcome::Failed("HTTP 500".to_string()),
                    },
                ],
                focused: vec![ChunkSummary {
                    chunk: 2,
                    outcome: SummaryOutcome::Summarized("Grid strain noted.".to_string()),
                }],
            },
            extraction: ExtractionResult {
                links: vec!["https://example.org".to_string()],
                data_points: vec![DataPoint {
                    value: "40".to_string(),
                    sentence: "Load rose 40 percent.".to_string(),
                }],
                references: vec![Reference {
                    label: "Source".to_string(),
                    text: "Utility filings".to_string(),
                }],
            },
            short_summary: ShortSummary {
                text: "Grid strain rises.".to_string(),
                sentences: vec!["Grid strain rises.".to_string()],
                word_count: 3,
            },
            focus_heading: "EV Disadvantages".to_string(),
        }
    }

    #[test]
    fn test_summary_txt_sections() {
        let txt = report().render_summary_txt();

        assert!(txt.starts_with("\nFile: grid.pdf\n\n\n## Full Summary:\n"));
        assert!(txt.contains("\n### Chunk 1 Summary:\nChunk one findings."));
        assert!(txt.contains("\n### Chunk 2 Summary:\nFailed to summarize due to API error."));
        assert!(txt.contains("## EV Disadvantages Summary:\n\n### Chunk 2 EV Disadvantages:\nGrid strain noted."));
        assert!(txt.contains("## Extracted Links:\nhttps://example.org"));
        assert!(txt.contains("## Extracted Data Points:\n40 -> Load rose 40 percent."));
        assert!(txt.ends_with("## References/Proofs:\nSource - Utility filings"));
    }

    #[test]
    fn test_summary_txt_fallbacks() {
        let mut report = report();
        report.extraction = ExtractionResult::default();
        let txt = report.render_summary_txt();

        assert!(txt.contains("No links found"));
        assert!(txt.contains("No data points found"));
        assert!(txt.contains("No references found"));
    }

    #[test]
    fn test_summary_md() {
        let md = report().render_summary_md();

        assert!(md.starts_with("# File: grid.pdf\n\n## Full Summary\n"));
        assert!(md.contains("### Chunk 2\n\nFailed to summarize due to API error."));
        assert!(md.contains("- <https://example.org>"));
        assert!(md.contains("- `40` -> Load rose 40 percent."));
        assert!(md.contains("- **Source**: Utility filings"));
    }

    #[test]
    fn test_short_renderings() {
        let report = report();
        assert_eq!(
            report.render_short_txt(),
            "\nFile: grid.pdf\n\n\n## Short Summary:\nGrid strain rises."
        );
        assert_eq!(
            report.render_short_md(),
            "# File: grid.pdf\n\n## Short Summary\nGrid strain rises."
        );
    }
}
