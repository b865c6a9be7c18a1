//! Resource manifest generation.
//!
//! Normalizes the root, walks it, assigns aliases, renders the
//! `<qresource>` fragment and writes it to the output path.

pub mod alias;
pub mod render;
pub mod scanner;
pub mod writer;

use crate::config::{AliasMode, GenerateOptions};
use crate::error::{AliasError, Error, Result};
use crate::paths;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use alias::AliasCollision;

/// One `<file>` element of the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Path relative to the root, `/`-separated
    pub relative_path: String,
    /// Value of the `alias` attribute
    pub alias: String,
    /// Element text
    pub content: String,
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub entries: Vec<ResourceEntry>,
    /// Shared aliases that were written anyway
    pub collisions: Vec<AliasCollision>,
}

/// Build the manifest entries for `root` without writing anything.
pub fn collect_entries(
    root: &Path,
    prefix: &str,
    options: &GenerateOptions,
) -> Result<Vec<ResourceEntry>> {
    let root = paths::normalize(root);
    scanner::check_root(&root)?;

    let files = scanner::scan_files(&root, options.sort)?;
    info!("Found {} files under {}", files.len(), root.display());

    Ok(alias::assign_aliases(files, prefix, options.alias_mode))
}

/// Generate the `<qresource>` fragment for `root` and write it to `output_path`.
///
/// In name mode, files sharing a base name produce duplicate aliases. They
/// are all kept and logged, unless `strict_aliases` is set, in which case
/// the first collision is returned as an error and nothing is written.
pub fn generate(
    root: &Path,
    prefix: &str,
    output_path: &Path,
    options: &GenerateOptions,
) -> Result<GenerateReport> {
    let entries = collect_entries(root, prefix, options)?;

    let collisions = match options.alias_mode {
        AliasMode::Name => alias::find_collisions(&entries),
        AliasMode::Indexed => Vec::new(),
    };
    if let Some(first) = collisions.first() {
        if options.strict_aliases {
            return Err(Error::Alias(AliasError::Collision {
                alias: first.alias.clone(),
                paths: first.paths.clone(),
            }));
        }
        for collision in &collisions {
            warn!(
                alias = %collision.alias,
                paths = ?collision.paths,
                "Alias shared by {} files",
                collision.paths.len()
            );
        }
    }

    let document = render::render_qresource(prefix, &entries);
    writer::write_atomically(output_path, &document)?;
    info!("Wrote {} entries to {}", entries.len(), output_path.display());

    Ok(GenerateReport {
        output_path: output_path.to_path_buf(),
        entries,
        collisions,
    })
}
