use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::{ConvertArgs, DuplicatePolicy, OrphanPolicy};
use crate::model::{
    ClassificationRow, ConversionCounts, ConversionManifest, ConversionPolicies, SourceParagraph,
};
use crate::util::{now_utc_string, sha256_bytes, stage_atomic, stage_json_pretty};

const MANIFEST_VERSION: u32 = 1;
const MIN_EXTRACTED_ROWS: usize = 2;

mod error;
mod extract;
mod reference;
mod run;
mod table;
mod titles;

pub use run::run;

use error::*;
use extract::*;
use reference::*;
use run::*;
use table::*;
use titles::*;
