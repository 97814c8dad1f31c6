use blinder_core::{Error, Result};
use glob::{MatchOptions, Pattern};

/// Shell-style file name pattern (`*`, `?`, `[...]`)
#[derive(Debug, Clone)]
pub struct FilePattern {
    pattern: Pattern,
    options: MatchOptions,
}

impl FilePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            pattern: compiled,
            options: host_match_options(),
        })
    }

    /// Pattern matching exactly `name`, metacharacters included
    pub fn literal(name: &str) -> Result<Self> {
        Self::new(&Pattern::escape(name))
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, self.options)
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

// Case sensitivity follows the platform's file systems.
fn host_match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}
