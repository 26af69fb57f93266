use super::*;

#[derive(Debug, Clone)]
pub(super) struct RoleLabels {
    pub section_header: String,
    pub clause_title: String,
}

#[derive(Debug, Clone, Copy)]
enum ParagraphRole {
    SectionHeader,
    ClauseTitle,
    Other,
}

impl RoleLabels {
    fn classify(&self, style: &str) -> ParagraphRole {
        if style == self.section_header {
            ParagraphRole::SectionHeader
        } else if style == self.clause_title {
            ParagraphRole::ClauseTitle
        } else {
            ParagraphRole::Other
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct ExtractedRows {
    pub rows: Vec<ClassificationRow>,
    pub section_rows: usize,
    pub clause_rows: usize,
    pub skipped_orphan_clauses: usize,
    pub skipped_blank_paragraphs: usize,
    pub ignored_paragraphs: usize,
}

pub(super) fn extract_rows(
    paragraphs: &[SourceParagraph],
    labels: &RoleLabels,
    orphan_policy: OrphanPolicy,
) -> Result<ExtractedRows, ConvertError> {
    let mut extractor = DocumentExtractor::new(labels, orphan_policy);

    for (index, paragraph) in paragraphs.iter().enumerate() {
        extractor.push(index + 1, paragraph)?;
    }

    extractor.finish()
}

struct DocumentExtractor<'a> {
    labels: &'a RoleLabels,
    orphan_policy: OrphanPolicy,
    current_section: Option<String>,
    extracted: ExtractedRows,
}

impl<'a> DocumentExtractor<'a> {
    fn new(labels: &'a RoleLabels, orphan_policy: OrphanPolicy) -> Self {
        Self {
            labels,
            orphan_policy,
            current_section: None,
            extracted: ExtractedRows::default(),
        }
    }

    fn push(&mut self, index: usize, paragraph: &SourceParagraph) -> Result<(), ConvertError> {
        match self.labels.classify(&paragraph.style) {
            ParagraphRole::SectionHeader => {
                if let Some(parts) = self.split_recognized(index, paragraph) {
                    self.push_section(parts);
                }
            }
            ParagraphRole::ClauseTitle => {
                if let Some(parts) = self.split_recognized(index, paragraph) {
                    self.push_clause(index, &paragraph.text, parts)?;
                }
            }
            ParagraphRole::Other => self.extracted.ignored_paragraphs += 1,
        }

        Ok(())
    }

    fn split_recognized(
        &mut self,
        index: usize,
        paragraph: &SourceParagraph,
    ) -> Option<ReferenceParts> {
        let parts = split_reference(&paragraph.text);
        if parts.is_none() {
            warn!(paragraph = index, style = %paragraph.style, "skipping blank paragraph");
            self.extracted.skipped_blank_paragraphs += 1;
        }

        parts
    }

    fn push_section(&mut self, parts: ReferenceParts) {
        let group = parts
            .reference
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        self.current_section = Some(parts.reference.clone());
        self.extracted
            .rows
            .push(ClassificationRow::new(parts.reference, parts.title, group));
        self.extracted.section_rows += 1;
    }

    fn push_clause(
        &mut self,
        index: usize,
        text: &str,
        parts: ReferenceParts,
    ) -> Result<(), ConvertError> {
        let Some(section) = self.current_section.as_ref() else {
            return match self.orphan_policy {
                OrphanPolicy::Reject => Err(ConvertError::OrphanClauseRow {
                    index,
                    text: text.trim().to_string(),
                }),
                OrphanPolicy::Skip => {
                    warn!(
                        paragraph = index,
                        reference = %parts.reference,
                        "skipping clause title before first section header"
                    );
                    self.extracted.skipped_orphan_clauses += 1;
                    Ok(())
                }
            };
        };

        let reference = format!("{}/{}", section, parts.reference);
        let parent = section.clone();
        self.extracted
            .rows
            .push(ClassificationRow::new(reference, parts.title, parent));
        self.extracted.clause_rows += 1;

        Ok(())
    }

    fn finish(self) -> Result<ExtractedRows, ConvertError> {
        if self.extracted.rows.len() < MIN_EXTRACTED_ROWS {
            return Err(ConvertError::MalformedSourceDocument {
                found: self.extracted.rows.len(),
            });
        }

        Ok(self.extracted)
    }
}

#[derive(Debug)]
pub(super) struct LoadedParagraphs {
    pub paragraphs: Vec<SourceParagraph>,
    pub sha256: String,
}

pub(super) fn load_paragraphs(path: &Path) -> Result<LoadedParagraphs> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let paragraphs: Vec<SourceParagraph> = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse paragraph export {}", path.display()))?;

    Ok(LoadedParagraphs {
        paragraphs,
        sha256: sha256_bytes(&raw),
    })
}
