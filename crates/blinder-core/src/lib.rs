//! Core types for blinder
//!
//! This crate contains:
//! - The error taxonomy shared by all crates
//! - Run and per-file report types

pub mod error;
pub mod report;

pub use error::{Error, Result};
pub use report::{BlindMode, FileFailure, FileReport, RunReport};
