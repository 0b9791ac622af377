//! Raw source discovery.
//!
//! Every table has up to two raw sources in the raw directory:
//! `<table>_clean.csv` and `<table>_messy.csv`.

use std::path::{Path, PathBuf};

use etl_model::TableKind;

/// Raw source variants, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceVariant {
    Clean,
    Messy,
}

impl SourceVariant {
    pub const ALL: [SourceVariant; 2] = [SourceVariant::Clean, SourceVariant::Messy];

    pub fn suffix(&self) -> &'static str {
        match self {
            SourceVariant::Clean => "clean",
            SourceVariant::Messy => "messy",
        }
    }
}

/// Expected file path of one source variant.
pub fn source_path(raw_dir: &Path, kind: TableKind, variant: SourceVariant) -> PathBuf {
    raw_dir.join(format!("{}_{}.csv", kind.source_name(), variant.suffix()))
}

/// Existing raw sources for `kind`, clean first.
pub fn source_paths(raw_dir: &Path, kind: TableKind) -> Vec<(SourceVariant, PathBuf)> {
    SourceVariant::ALL
        .into_iter()
        .map(|variant| (variant, source_path(raw_dir, kind, variant)))
        .filter(|(_, path)| path.is_file())
        .collect()
}
