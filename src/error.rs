use thiserror::Error;

/// Hard failures from the schema builders. Everything else in the pipeline
/// degrades silently: malformed delimited lines are dropped, unparseable
/// pasted JSON becomes an empty block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A mandated identifying field (page URL, business name) is blank.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Fail with `MissingRequiredField` unless `value` has non-whitespace content.
pub fn require(field: &'static str, value: &str) -> Result<(), SchemaError> {
    if value.trim().is_empty() {
        Err(SchemaError::MissingRequiredField(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_blank() {
        assert_eq!(
            require("url", "   "),
            Err(SchemaError::MissingRequiredField("url"))
        );
    }

    #[test]
    fn require_present() {
        assert!(require("url", "https://example.com").is_ok());
    }
}
