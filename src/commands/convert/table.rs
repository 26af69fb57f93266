use super::*;

#[derive(Debug, Default)]
pub(super) struct KeynoteTable {
    pub rows: Vec<ClassificationRow>,
    pub duplicate_references: Vec<String>,
    pub dropped_title_rows: usize,
}

pub(super) fn build_table(
    extracted_rows: Vec<ClassificationRow>,
    title_rows: Vec<ClassificationRow>,
    duplicate_policy: DuplicatePolicy,
) -> KeynoteTable {
    let title_count = title_rows.len();
    let title_rows = match duplicate_policy {
        DuplicatePolicy::Keep => title_rows,
        DuplicatePolicy::PreferDocument => {
            let document_refs = extracted_rows
                .iter()
                .map(|row| row.reference.as_str())
                .collect::<HashSet<&str>>();
            title_rows
                .into_iter()
                .filter(|row| !document_refs.contains(row.reference.as_str()))
                .collect::<Vec<_>>()
        }
    };
    let dropped_title_rows = title_count - title_rows.len();

    let mut rows = extracted_rows;
    rows.extend(title_rows);
    rows.sort();

    let duplicate_references = find_duplicate_references(&rows);

    KeynoteTable {
        rows,
        duplicate_references,
        dropped_title_rows,
    }
}

pub(super) fn find_duplicate_references(sorted_rows: &[ClassificationRow]) -> Vec<String> {
    let mut duplicates = Vec::<String>::new();

    for pair in sorted_rows.windows(2) {
        if pair[0].reference != pair[1].reference {
            continue;
        }
        if duplicates.last() != Some(&pair[0].reference) {
            duplicates.push(pair[0].reference.clone());
        }
    }

    duplicates
}

pub(super) fn render_table(rows: &[ClassificationRow]) -> Result<String, ConvertError> {
    let mut output = String::new();

    for row in rows {
        for (field, value) in [
            ("reference", &row.reference),
            ("title", &row.title),
            ("parent", &row.parent),
        ] {
            if value.contains(['\t', '\n', '\r']) {
                return Err(ConvertError::UnencodableField {
                    reference: row.reference.escape_debug().to_string(),
                    field,
                });
            }
        }

        output.push_str(&row.reference);
        output.push('\t');
        output.push_str(&row.title);
        output.push('\t');
        output.push_str(&row.parent);
        output.push('\n');
    }

    Ok(output)
}
