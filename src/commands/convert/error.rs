use super::*;

#[derive(Debug, thiserror::Error)]
pub(super) enum ConvertError {
    #[error(
        "source document yielded {found} classification rows; expected at least two. Check the file uses the standard NBS Chorus template"
    )]
    MalformedSourceDocument { found: usize },

    #[error("failed to read section titles file: {}", path.display())]
    MissingSupplementaryFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("clause title at paragraph {index} appears before any section header: {text}")]
    OrphanClauseRow { index: usize, text: String },

    #[error("row {reference} has a tab or line break in its {field} field")]
    UnencodableField {
        reference: String,
        field: &'static str,
    },

    #[error("failed to write keynote table: {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
