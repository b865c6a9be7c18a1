use crate::config::GenerateOptions;
use crate::generate::generate;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Generate the manifest and print where it went.
pub fn generate_command(
    directory: &Path,
    prefix: &str,
    output_file: &Path,
    options: &GenerateOptions,
) -> Result<()> {
    let report = generate(directory, prefix, output_file, options).map_err(|e| {
        let context = if e.is_input_error() {
            format!("Failed to build resource manifest from {}", directory.display())
        } else {
            format!("Failed to write resource manifest {}", output_file.display())
        };
        anyhow::Error::new(e).context(context)
    })?;

    if !report.collisions.is_empty() {
        eprintln!(
            "{} {} aliases are shared by more than one file",
            "warning:".yellow().bold(),
            report.collisions.len()
        );
    }

    println!(
        "{} Resource manifest written to {} ({} files)",
        "✓".green(),
        report.output_path.display(),
        report.entries.len()
    );

    Ok(())
}
