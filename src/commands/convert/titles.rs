use super::*;

#[derive(Debug, Default)]
pub(super) struct LoadedTitles {
    pub rows: Vec<ClassificationRow>,
    pub skipped_blank_lines: usize,
    pub sha256: String,
}

pub(super) fn load_section_titles(path: &Path) -> Result<LoadedTitles, ConvertError> {
    let raw = fs::read_to_string(path).map_err(|source| ConvertError::MissingSupplementaryFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut loaded = parse_section_titles(&raw);
    loaded.sha256 = sha256_bytes(raw.as_bytes());

    Ok(loaded)
}

pub(super) fn parse_section_titles(raw: &str) -> LoadedTitles {
    let mut loaded = LoadedTitles::default();
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    for line in raw.lines() {
        match split_reference(line.trim()) {
            Some(parts) => loaded
                .rows
                .push(ClassificationRow::new(parts.reference, parts.title, "")),
            None => loaded.skipped_blank_lines += 1,
        }
    }

    loaded
}
