use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "keynotes",
    version,
    about = "Convert NBS Chorus paragraph exports into Revit keynote tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertArgs),
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(long)]
    pub paragraphs: PathBuf,

    #[arg(long, default_value = "NBS_Sections_Titles.txt")]
    pub titles: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "chorus-section-header")]
    pub section_style: String,

    #[arg(long, default_value = "chorus-clause-title")]
    pub clause_style: String,

    #[arg(long, value_enum, default_value_t = OrphanPolicy::Reject)]
    pub orphan_clauses: OrphanPolicy,

    #[arg(long, value_enum, default_value_t = DuplicatePolicy::Keep)]
    pub duplicates: DuplicatePolicy,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OrphanPolicy {
    Reject,
    Skip,
}

impl OrphanPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Skip => "skip",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DuplicatePolicy {
    Keep,
    PreferDocument,
}

impl DuplicatePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::PreferDocument => "prefer-document",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(long)]
    pub table: PathBuf,
}
