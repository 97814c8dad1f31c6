use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Replacement for a blinded sequence value
pub const PLACEHOLDER: &str = "-";

lazy_static! {
    // Shortest span from `<sequence` to `value="`, then the shortest quoted value.
    static ref SEQUENCE_VALUE: Regex =
        Regex::new(r#"(?s)(<sequence.*?value\s*?=\s*?")(.*?)(")"#).unwrap();

    // Opening tag may span lines but must not be self-closing.
    static ref DATA_ELEMENT: Regex =
        Regex::new(r"(?s)(<data\b(?:[^>]*[^/>])?>)(.*?)(</data>)").unwrap();
}

/// Replace the `value` of every `<sequence>` element with a placeholder.
///
/// Returns the rewritten text and the number of values that actually
/// changed; a value that already is the placeholder is not counted, so
/// running this twice reports 0 the second time.
pub fn redact_sequences(content: &str) -> (String, usize) {
    let mut count = 0;
    let result = SEQUENCE_VALUE.replace_all(content, |caps: &Captures| {
        if &caps[2] != PLACEHOLDER {
            count += 1;
        }
        format!("{}{}{}", &caps[1], PLACEHOLDER, &caps[3])
    });

    (result.into_owned(), count)
}

/// Insert a comment carrying `message` before every `<data` token.
///
/// This is a plain substring match, so `<database` is annotated too.
/// Returns the annotated text and the number of comments inserted.
pub fn insert_disclaimer(content: &str, message: &str) -> (String, usize) {
    let count = content.matches("<data").count();
    if count == 0 {
        return (content.to_string(), 0);
    }

    let replacement = format!("<!-- {} -->\n\t<data", message);
    (content.replace("<data", &replacement), count)
}

/// Clear everything between `<data ...>` and its `</data>`.
///
/// Elements that hold only whitespace are left as they are and not counted.
pub fn clear_data_elements(content: &str) -> (String, usize) {
    let mut count = 0;
    let result = DATA_ELEMENT.replace_all(content, |caps: &Captures| {
        if caps[2].trim().is_empty() {
            return caps[0].to_string();
        }
        count += 1;
        format!("{}{}", &caps[1], &caps[3])
    });

    (result.into_owned(), count)
}
