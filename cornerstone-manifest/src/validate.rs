//! Validation of names that end up verbatim in generated C++.

use miette::SourceSpan;

/// Find the span of a quoted string value in the source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{value}\"");
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Validate that a name is a valid C++ identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return Some("name must start with a letter or underscore");
    }
    if chars.any(|c| !c.is_ascii_alphanumeric() && c != '_') {
        return Some("name contains invalid characters");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert_eq!(validate_identifier("Greeter"), None);
        assert_eq!(validate_identifier("_Private2"), None);
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(
            validate_identifier("2Fast"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("My-Module"),
            Some("name contains invalid characters")
        );
    }

    #[test]
    fn test_find_value_span() {
        let src = "api = \"Bad-Name\"";
        let span = find_value_span(src, "Bad-Name").unwrap();
        assert_eq!(span.offset(), 7);
        assert_eq!(span.len(), 8);
        assert!(find_value_span(src, "Missing").is_none());
    }
}
