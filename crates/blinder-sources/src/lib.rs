//! File selection for blinder
//!
//! Resolves the input location, lists the matching files and prepares
//! the output directory.

pub mod pattern;
pub mod selection;

pub use pattern::FilePattern;
pub use selection::{
    BLINDED_SUFFIX, InputSelection, blinded_file_name, ensure_output_directory,
    enumerate_matches, output_directory, resolve_input, same_directory,
};
