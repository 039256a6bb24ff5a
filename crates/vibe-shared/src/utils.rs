//! Utility functions

use crate::constants::MAX_SLUG_LENGTH;

/// Slugs are ASCII letters, digits, `-` and `_`, never empty.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn is_valid_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("bachata-sensual"));
        assert!(is_valid_slug("cours_planning2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Événements"));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)));
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_valid_hex_color("#7c3aed"));
        assert!(!is_valid_hex_color("7c3aed"));
        assert!(!is_valid_hex_color("#7c3aeg"));
    }
}
