use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::ValidateArgs;
use crate::model::ClassificationRow;

#[derive(Debug, Default)]
struct TableReport {
    row_count: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.table)
        .with_context(|| format!("failed to read {}", args.table.display()))?;

    let report = validate_table(&raw);

    for warning in &report.warnings {
        warn!(table = %args.table.display(), "{warning}");
    }
    for error in &report.errors {
        warn!(table = %args.table.display(), "{error}");
    }

    info!(
        table = %args.table.display(),
        rows = report.row_count,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "keynote table validated"
    );

    if !report.errors.is_empty() {
        bail!(
            "keynote table failed validation with {} errors: {}",
            report.errors.len(),
            args.table.display()
        );
    }

    Ok(())
}

fn validate_table(raw: &str) -> TableReport {
    let mut report = TableReport::default();
    let mut rows = Vec::<ClassificationRow>::new();

    for (index, line) in raw.lines().enumerate() {
        let line_number = index + 1;
        let fields = line.split('\t').collect::<Vec<&str>>();
        let [reference, title, parent] = fields.as_slice() else {
            report.errors.push(format!(
                "line {line_number}: expected 3 tab-separated fields, found {}",
                fields.len()
            ));
            continue;
        };

        if reference.is_empty() {
            report
                .errors
                .push(format!("line {line_number}: empty reference"));
            continue;
        }

        let row = ClassificationRow::new(*reference, *title, *parent);
        if let Some(previous) = rows.last() {
            if previous > &row {
                report.errors.push(format!(
                    "line {line_number}: {} is out of order after {}",
                    row.reference, previous.reference
                ));
            }
        }
        rows.push(row);
    }

    report.row_count = rows.len();
    report.warnings = hierarchy_warnings(&rows);

    report
}

fn hierarchy_warnings(rows: &[ClassificationRow]) -> Vec<String> {
    let references = rows
        .iter()
        .map(|row| row.reference.as_str())
        .collect::<HashSet<&str>>();

    let mut warnings = Vec::<String>::new();
    let mut seen = HashSet::<&str>::new();
    let mut reported = HashSet::<&str>::new();

    for row in rows {
        let reference = row.reference.as_str();
        if !seen.insert(reference) && reported.insert(reference) {
            warnings.push(format!("duplicate reference {reference}"));
        }

        let Some((section, _)) = reference.split_once('/') else {
            continue;
        };

        if row.parent != section {
            warnings.push(format!(
                "clause {reference} has parent {} instead of {section}",
                row.parent
            ));
        }
        if !references.contains(section) {
            warnings.push(format!(
                "clause {reference} refers to missing section {section}"
            ));
        }
    }

    warnings
}
