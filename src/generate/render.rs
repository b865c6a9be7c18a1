//! `<qresource>` fragment rendering.
//!
//! The output is a fragment meant to be pasted inside an `<RCC>` document,
//! not a standalone XML file. Alias and content are written verbatim.

use super::ResourceEntry;

const INDENT: &str = "    ";

/// Render one `<file>` line.
pub fn render_entry(entry: &ResourceEntry) -> String {
    format!(
        "{}<file alias=\"{}\">{}</file>",
        INDENT, entry.alias, entry.content
    )
}

/// Render the full fragment. There is no trailing newline after the footer,
/// and an empty entry list still leaves a blank line between header and footer.
pub fn render_qresource(prefix: &str, entries: &[ResourceEntry]) -> String {
    let lines: Vec<String> = entries.iter().map(render_entry).collect();
    format!(
        "<qresource prefix=\"/{}\">\n{}\n</qresource>",
        prefix,
        lines.join("\n")
    )
}
