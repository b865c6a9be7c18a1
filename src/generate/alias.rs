//! Alias assignment for discovered files.

use crate::config::AliasMode;
use crate::paths::base_name;
use std::collections::HashMap;

use super::ResourceEntry;

/// Turn relative paths into entries, in order, using `mode`.
pub fn assign_aliases(files: Vec<String>, prefix: &str, mode: AliasMode) -> Vec<ResourceEntry> {
    files
        .into_iter()
        .enumerate()
        .map(|(i, relative_path)| match mode {
            AliasMode::Name => ResourceEntry {
                alias: base_name(&relative_path).to_string(),
                content: relative_path.clone(),
                relative_path,
            },
            AliasMode::Indexed => ResourceEntry {
                alias: (i + 1).to_string(),
                content: format!("{}/{}", prefix, relative_path),
                relative_path,
            },
        })
        .collect()
}

/// An alias that more than one entry resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub alias: String,
    /// Relative paths sharing the alias, in entry order
    pub paths: Vec<String>,
}

/// Find aliases used by more than one entry.
///
/// Collisions are reported in order of each alias's first appearance.
pub fn find_collisions(entries: &[ResourceEntry]) -> Vec<AliasCollision> {
    let mut by_alias: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for entry in entries {
        let paths = by_alias.entry(entry.alias.as_str()).or_default();
        if paths.is_empty() {
            order.push(entry.alias.as_str());
        }
        paths.push(entry.relative_path.as_str());
    }

    order
        .into_iter()
        .filter_map(|alias| {
            let paths = &by_alias[alias];
            (paths.len() > 1).then(|| AliasCollision {
                alias: alias.to_string(),
                paths: paths.iter().map(|p| p.to_string()).collect(),
            })
        })
        .collect()
}
