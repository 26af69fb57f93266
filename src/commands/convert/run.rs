use super::*;

#[derive(Debug, Clone)]
pub(super) struct ConvertOptions {
    pub labels: RoleLabels,
    pub orphan_policy: OrphanPolicy,
    pub duplicate_policy: DuplicatePolicy,
}

impl ConvertOptions {
    fn from_args(args: &ConvertArgs) -> Self {
        Self {
            labels: RoleLabels {
                section_header: args.section_style.clone(),
                clause_title: args.clause_style.clone(),
            },
            orphan_policy: args.orphan_clauses,
            duplicate_policy: args.duplicates,
        }
    }

    fn policies(&self) -> ConversionPolicies {
        ConversionPolicies {
            section_style: self.labels.section_header.clone(),
            clause_style: self.labels.clause_title.clone(),
            orphan_clauses: self.orphan_policy.as_str().to_string(),
            duplicates: self.duplicate_policy.as_str().to_string(),
        }
    }
}

#[derive(Debug)]
pub(super) struct Conversion {
    pub rendered: String,
    pub counts: ConversionCounts,
    pub warnings: Vec<String>,
    pub titles_sha256: String,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let options = ConvertOptions::from_args(&args);
    let output_path =
        resolve_output_path(&args.paragraphs, &args.titles, args.output.as_deref())?;

    info!(
        paragraphs = %args.paragraphs.display(),
        titles = %args.titles.display(),
        output = %output_path.display(),
        dry_run = args.dry_run,
        "conversion started"
    );

    let loaded = load_paragraphs(&args.paragraphs)?;
    let conversion = convert_paragraphs(&loaded.paragraphs, &args.titles, &options)?;

    if args.dry_run {
        info!(
            rows = conversion.counts.output_rows,
            "dry-run complete; nothing written"
        );
        return Ok(());
    }

    let manifest = args.manifest_path.as_deref().map(|manifest_path| {
        let manifest = ConversionManifest {
            manifest_version: MANIFEST_VERSION,
            generated_at: now_utc_string(),
            source_path: args.paragraphs.display().to_string(),
            source_sha256: loaded.sha256.clone(),
            titles_path: args.titles.display().to_string(),
            titles_sha256: conversion.titles_sha256.clone(),
            output_path: output_path.display().to_string(),
            policies: options.policies(),
            counts: conversion.counts.clone(),
            warnings: conversion.warnings.clone(),
        };
        (manifest_path, manifest)
    });

    let output_failure = |source: io::Error| ConvertError::OutputWriteFailure {
        path: output_path.clone(),
        source,
    };
    let staged_table =
        stage_atomic(&output_path, conversion.rendered.as_bytes()).map_err(output_failure)?;
    let staged_manifest = match &manifest {
        Some((manifest_path, manifest)) => {
            Some((*manifest_path, stage_json_pretty(manifest_path, manifest)?))
        }
        None => None,
    };

    staged_table
        .persist(&output_path)
        .map_err(|err| output_failure(err.error))?;
    info!(
        path = %output_path.display(),
        rows = conversion.counts.output_rows,
        "wrote keynote table"
    );

    if let Some((manifest_path, staged)) = staged_manifest {
        if let Err(err) = staged.persist(manifest_path) {
            let _ = fs::remove_file(&output_path);
            return Err(err.error).with_context(|| {
                format!("failed to write manifest {}", manifest_path.display())
            });
        }
        info!(path = %manifest_path.display(), "wrote conversion manifest");
    }

    info!(
        section_rows = conversion.counts.section_rows,
        clause_rows = conversion.counts.clause_rows,
        title_rows = conversion.counts.title_rows,
        duplicate_references = conversion.counts.duplicate_references,
        "conversion completed"
    );

    Ok(())
}

pub(super) fn convert_paragraphs(
    paragraphs: &[SourceParagraph],
    titles_path: &Path,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    let extracted = extract_rows(paragraphs, &options.labels, options.orphan_policy)?;
    let titles = load_section_titles(titles_path)?;

    let mut counts = ConversionCounts {
        paragraph_count: paragraphs.len(),
        section_rows: extracted.section_rows,
        clause_rows: extracted.clause_rows,
        title_rows: titles.rows.len(),
        skipped_orphan_clauses: extracted.skipped_orphan_clauses,
        skipped_blank_paragraphs: extracted.skipped_blank_paragraphs,
        skipped_blank_title_lines: titles.skipped_blank_lines,
        ignored_paragraphs: extracted.ignored_paragraphs,
        ..ConversionCounts::default()
    };
    let mut warnings = Vec::<String>::new();

    if extracted.skipped_orphan_clauses > 0 {
        warnings.push(format!(
            "skipped {} clause titles preceding the first section header",
            extracted.skipped_orphan_clauses
        ));
    }

    let table = build_table(extracted.rows, titles.rows, options.duplicate_policy);
    for reference in &table.duplicate_references {
        warn!(reference = %reference, "duplicate keynote reference kept");
        warnings.push(format!("duplicate reference {reference}"));
    }
    if table.dropped_title_rows > 0 {
        info!(
            dropped = table.dropped_title_rows,
            "section titles superseded by document rows"
        );
    }

    let rendered = render_table(&table.rows)?;

    counts.output_rows = table.rows.len();
    counts.duplicate_references = table.duplicate_references.len();
    counts.dropped_title_rows = table.dropped_title_rows;

    Ok(Conversion {
        rendered,
        counts,
        warnings,
        titles_sha256: titles.sha256,
    })
}

pub(super) fn resolve_output_path(
    paragraphs_path: &Path,
    titles_path: &Path,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paragraphs_path.with_extension("txt"));
    let output_identity = path_identity(&output_path);

    for (input, role) in [(paragraphs_path, "paragraph export"), (titles_path, "titles file")] {
        if path_identity(input) == output_identity {
            bail!(
                "output path would overwrite the {role}: {}",
                output_path.display()
            );
        }
    }

    Ok(output_path)
}

fn path_identity(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(directory), Some(name)) => directory.join(name),
        _ => path.to_path_buf(),
    }
}
