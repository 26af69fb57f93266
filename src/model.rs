use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClassificationRow {
    pub reference: String,
    pub title: String,
    pub parent: String,
}

impl ClassificationRow {
    pub fn new(
        reference: impl Into<String>,
        title: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            title: title.into(),
            parent: parent.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceParagraph {
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionCounts {
    pub paragraph_count: usize,
    pub section_rows: usize,
    pub clause_rows: usize,
    pub title_rows: usize,
    pub output_rows: usize,
    pub duplicate_references: usize,
    pub dropped_title_rows: usize,
    pub skipped_orphan_clauses: usize,
    pub skipped_blank_paragraphs: usize,
    pub skipped_blank_title_lines: usize,
    pub ignored_paragraphs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionPolicies {
    pub section_style: String,
    pub clause_style: String,
    pub orphan_clauses: String,
    pub duplicates: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub titles_path: String,
    pub titles_sha256: String,
    pub output_path: String,
    pub policies: ConversionPolicies,
    pub counts: ConversionCounts,
    pub warnings: Vec<String>,
}
