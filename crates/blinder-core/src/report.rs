use serde::Serialize;
use std::path::PathBuf;

/// What gets removed from each document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlindMode {
    /// Replace the `value` attribute of every `<sequence>` with `-`
    #[default]
    Sequences,
    /// Clear the whole content of every `<data>` element
    DataElements,
}

impl BlindMode {
    /// Noun used in progress lines ("3 sequences blinded")
    pub fn progress_label(&self) -> &'static str {
        match self {
            BlindMode::Sequences => "sequences blinded",
            BlindMode::DataElements => "data elements cleared",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file_name: String,
    pub output_path: PathBuf,
    pub count: usize,
    pub mode: BlindMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub file_name: String,
    pub error: String,
}

/// Outcome of one run over an input directory
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
    pub dry_run: bool,
    pub elapsed_seconds: f64,
}

impl RunReport {
    pub fn new(input_directory: PathBuf, output_directory: PathBuf, dry_run: bool) -> Self {
        Self {
            input_directory,
            output_directory,
            files: Vec::new(),
            failures: Vec::new(),
            dry_run,
            elapsed_seconds: 0.0,
        }
    }

    /// Sum of the per-file counts
    pub fn total_count(&self) -> usize {
        self.files.iter().map(|f| f.count).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
