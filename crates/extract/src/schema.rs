use serde::{Deserialize, Serialize};

/// A number token and the sentence it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: String,
    pub sentence: String,
}

impl DataPoint {
    pub fn render(&self) -> String {
        format!("{} -> {}", self.value, self.sentence)
    }
}

/// A reference-like line: the keyword that introduced it and the rest of the line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub label: String,
    pub text: String,
}

impl Reference {
    pub fn render(&self) -> String {
        format!("{} - {}", self.label, self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub links: Vec<String>,
    pub data_points: Vec<DataPoint>,
    pub references: Vec<Reference>,
}

impl ExtractionResult {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Keyword-filtered excerpt of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortSummary {
    pub text: String,
    pub sentences: Vec<String>,
    pub word_count: usize,
}

impl ShortSummary {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
