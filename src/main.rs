use clap::Parser;
use qrcgen::commands::generate::generate_command;
use qrcgen::config::{AliasMode, GenerateOptions};
use qrcgen::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrcgen")]
#[command(about = "Generate a <qresource> block listing every file under a directory", long_about = None)]
struct Cli {
    /// Directory to walk
    directory: PathBuf,

    /// Resource prefix, without leading or trailing slashes
    prefix: String,

    /// File to write the fragment to (overwritten)
    output_file: PathBuf,

    /// How aliases are assigned
    #[arg(long, value_enum, default_value_t = AliasMode::Name)]
    alias_mode: AliasMode,

    /// Visit files in name order instead of filesystem order
    #[arg(long)]
    sort: bool,

    /// Fail if two files end up with the same alias
    #[arg(long)]
    strict_aliases: bool,

    /// Log what is being scanned and written
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(if cli.verbose { "debug" } else { "warn" })?;

    let options = GenerateOptions {
        alias_mode: cli.alias_mode,
        sort: cli.sort,
        strict_aliases: cli.strict_aliases,
    };

    generate_command(&cli.directory, &cli.prefix, &cli.output_file, &options)
}
