use blinder_core::BlindMode;
use blinder_redact::DEFAULT_MESSAGE;
use std::path::PathBuf;

/// Pattern applied when the input is a directory
pub const DEFAULT_PATTERN: &str = "*.xml";

/// Settings for one run, built once at startup
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// File or directory to read from
    pub input: PathBuf,
    pub pattern: String,
    /// Directory receiving the `.blinded.xml` files
    pub output: PathBuf,
    pub message: String,
    pub mode: BlindMode,
    pub dry_run: bool,
    /// Record per-file IO failures and continue instead of aborting
    pub keep_going: bool,
    pub max_output_bytes: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            output: PathBuf::from("."),
            message: DEFAULT_MESSAGE.to_string(),
            mode: BlindMode::default(),
            dry_run: false,
            keep_going: false,
            max_output_bytes: None,
        }
    }
}
