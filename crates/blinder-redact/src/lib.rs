//! Text transforms that blind sequence data in BEAST-style XML
//!
//! The document is treated as opaque text: there is no XML parse, only
//! regular-expression substitutions applied in a fixed order.

pub mod redactor;
pub mod transforms;

pub use redactor::{DEFAULT_MESSAGE, Redaction, Redactor};
pub use transforms::{PLACEHOLDER, clear_data_elements, insert_disclaimer, redact_sequences};
