//! Batch blinding of XML files
//!
//! Resolves the input location, walks the matching files in name order
//! and writes one `.blinded.xml` file per input.

pub mod config;

use std::path::Path;
use std::time::Instant;

use blinder_core::{Error, FileFailure, FileReport, Result, RunReport};
use blinder_redact::Redactor;
use blinder_sources::{
    blinded_file_name, ensure_output_directory, enumerate_matches, output_directory,
    resolve_input, same_directory,
};
use tracing::{info, warn};

pub use config::{DEFAULT_PATTERN, RunConfig};

pub struct Blinder {
    config: RunConfig,
    redactor: Redactor,
}

impl Blinder {
    pub fn new(config: RunConfig) -> Self {
        let redactor = Redactor::new(config.message.clone(), config.mode);
        Self { config, redactor }
    }

    /// Blind every selected file, calling `on_file` after each one.
    ///
    /// A missing input aborts before the output directory is touched.
    pub fn run<F>(&self, mut on_file: F) -> Result<RunReport>
    where
        F: FnMut(&FileReport),
    {
        let start = Instant::now();

        // 1. Resolve input and output locations
        let selection = resolve_input(&self.config.input, &self.config.pattern)?;
        let output_dir = if self.config.dry_run {
            output_directory(&self.config.output)?
        } else {
            ensure_output_directory(&self.config.output)?
        };

        // 2. Enumerate candidates
        let names = enumerate_matches(&selection.directory, &selection.pattern)?;
        info!(
            input = %selection.directory.display(),
            pattern = selection.pattern.as_str(),
            files = names.len(),
            "Selected input files"
        );

        let same_dir = same_directory(&selection.directory, &output_dir);
        if same_dir {
            warn!(
                dir = %output_dir.display(),
                "Input and output directories are the same; existing files may be overwritten"
            );
        }

        // 3. Process in name order
        let mut report = RunReport::new(
            selection.directory.clone(),
            output_dir.clone(),
            self.config.dry_run,
        );

        for name in &names {
            if same_dir {
                let target = blinded_file_name(name);
                if names.contains(&target) {
                    warn!(file = %name, target = %target, "Output will overwrite an input file");
                }
            }

            match self.process_file(&selection.directory, name, &output_dir) {
                Ok(file_report) => {
                    on_file(&file_report);
                    report.files.push(file_report);
                }
                Err(e) if self.config.keep_going => {
                    warn!(file = %name, error = %e, "Failed to blind file, continuing");
                    report.failures.push(FileFailure {
                        file_name: name.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        Ok(report)
    }

    /// Blind a single file from `input_dir` into `output_dir`
    pub fn process_file(
        &self,
        input_dir: &Path,
        file_name: &str,
        output_dir: &Path,
    ) -> Result<FileReport> {
        let input_path = input_dir.join(file_name);
        let content =
            std::fs::read_to_string(&input_path).map_err(|e| Error::file_io(&input_path, e))?;

        let redaction = self.redactor.redact(&content);

        if let Some(max) = self.config.max_output_bytes
            && redaction.content.len() > max
        {
            warn!(
                file = %file_name,
                size = redaction.content.len(),
                max,
                "Blinded file is larger than the recommended maximum"
            );
        }

        let output_path = output_dir.join(blinded_file_name(file_name));
        if !self.config.dry_run {
            std::fs::write(&output_path, &redaction.content)
                .map_err(|e| Error::file_io(&output_path, e))?;
        }

        info!(
            file = %file_name,
            count = redaction.count,
            disclaimers = redaction.disclaimers,
            output = %output_path.display(),
            "Blinded file"
        );

        Ok(FileReport {
            file_name: file_name.to_string(),
            output_path,
            count: redaction.count,
            mode: self.redactor.mode(),
        })
    }
}
