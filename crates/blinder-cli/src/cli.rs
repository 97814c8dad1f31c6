use blinder_config::Config;
use blinder_core::BlindMode;
use blinder_engine::{DEFAULT_PATTERN, RunConfig};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blinder")]
#[command(about = "Strip sequence data from BEAST XML files before sharing them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to input files or a single input XML file
    #[arg(short = 'i', long = "in", value_name = "PATH", default_value = ".")]
    pub input: PathBuf,

    /// Pattern to match for XML files if only an input path is provided [default: *.xml]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Path to save output file(s) in (created if missing)
    #[arg(short, long = "out", value_name = "PATH", default_value = ".")]
    pub output: PathBuf,

    /// Comment to add above every <data> element
    #[arg(short, long)]
    pub message: Option<String>,

    /// Clear the whole content of <data> elements, not just sequence values
    #[arg(long)]
    pub blind_all: bool,

    /// Report what would be blinded without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Continue with the next file when one cannot be read or written
    #[arg(long)]
    pub keep_going: bool,

    /// Warn when a blinded file is larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_output_bytes: Option<usize>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to config.toml in the user config directory)
    #[arg(long, env = "BLINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge arguments over the config file; arguments win
    pub fn run_config(&self, config: &Config) -> RunConfig {
        let mode = if self.blind_all || config.blind_all {
            BlindMode::DataElements
        } else {
            BlindMode::Sequences
        };

        RunConfig {
            input: self.input.clone(),
            pattern: self
                .pattern
                .clone()
                .or_else(|| config.pattern.clone())
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            output: self.output.clone(),
            message: self
                .message
                .clone()
                .or_else(|| config.message.clone())
                .unwrap_or_else(|| RunConfig::default().message),
            mode,
            dry_run: self.dry_run,
            keep_going: self.keep_going || config.keep_going,
            max_output_bytes: self.max_output_bytes.or(config.max_output_bytes),
        }
    }
}
