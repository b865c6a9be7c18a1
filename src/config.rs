use clap::ValueEnum;

/// How each `<file>` element gets its alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AliasMode {
    /// Alias is the file's base name; content is the relative path.
    #[default]
    Name,
    /// Alias is a 1-based counter; content is `{prefix}/{relative_path}`.
    Indexed,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub alias_mode: AliasMode,
    /// Sort entries by file name at each directory level instead of
    /// keeping the order the filesystem returns them in.
    pub sort: bool,
    /// Fail instead of warning when two files share an alias.
    pub strict_aliases: bool,
}

impl GenerateOptions {
    pub fn with_alias_mode(alias_mode: AliasMode) -> Self {
        Self {
            alias_mode,
            ..Default::default()
        }
    }
}
