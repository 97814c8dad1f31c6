use blinder_core::BlindMode;
use tracing::debug;

use crate::transforms::{clear_data_elements, insert_disclaimer, redact_sequences};

/// Default comment put above `<data>` elements
pub const DEFAULT_MESSAGE: &str = "SEQUENCES REMOVED TO COMPLY WITH GISAID TERMS OF USE";

/// Result of blinding one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    pub content: String,
    /// Sequences blinded, or data elements cleared in `DataElements` mode
    pub count: usize,
    pub disclaimers: usize,
}

/// Applies the blinding transform and then the disclaimer, in that order
#[derive(Debug, Clone)]
pub struct Redactor {
    message: String,
    mode: BlindMode,
}

impl Redactor {
    pub fn new(message: impl Into<String>, mode: BlindMode) -> Self {
        Self {
            message: message.into(),
            mode,
        }
    }

    pub fn mode(&self) -> BlindMode {
        self.mode
    }

    pub fn redact(&self, content: &str) -> Redaction {
        let (blinded, count) = match self.mode {
            BlindMode::Sequences => redact_sequences(content),
            BlindMode::DataElements => clear_data_elements(content),
        };
        let (content, disclaimers) = insert_disclaimer(&blinded, &self.message);

        debug!(count, disclaimers, mode = ?self.mode, "Redacted document");

        Redaction {
            content,
            count,
            disclaimers,
        }
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE, BlindMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document() {
        let redactor = Redactor::default();
        let content = "<sequence id=\"1\" value=\"ACGTACGT\"/>\n<data foo=\"bar\">";

        let redaction = redactor.redact(content);

        assert_eq!(redaction.count, 1);
        assert_eq!(redaction.disclaimers, 1);
        assert_eq!(
            redaction.content,
            "<sequence id=\"1\" value=\"-\"/>\n\
             <!-- SEQUENCES REMOVED TO COMPLY WITH GISAID TERMS OF USE -->\n\t<data foo=\"bar\">"
        );
    }

    #[test]
    fn test_plain_document_is_unchanged() {
        let redactor = Redactor::new("custom", BlindMode::Sequences);
        let content = "<beast version=\"2.0\">\n<run/>\n</beast>\n";

        let redaction = redactor.redact(content);

        assert_eq!(redaction.content, content);
        assert_eq!(redaction.count, 0);
        assert_eq!(redaction.disclaimers, 0);
    }

    #[test]
    fn test_blinding_runs_before_disclaimer() {
        // A disclaimer mentioning `<sequence value="x"` must survive untouched.
        let redactor = Redactor::new(r#"<sequence value="kept""#, BlindMode::Sequences);

        let redaction = redactor.redact("<data/>");

        assert_eq!(redaction.count, 0);
        assert!(redaction.content.contains(r#"value="kept""#));
    }

    #[test]
    fn test_data_elements_mode() {
        let redactor = Redactor::new("gone", BlindMode::DataElements);
        let content = "<data id=\"a\">\n<sequence value=\"ACGT\"/>\n</data>";

        let redaction = redactor.redact(content);

        assert_eq!(redaction.count, 1);
        assert_eq!(redaction.content, "<!-- gone -->\n\t<data id=\"a\"></data>");
    }
}
