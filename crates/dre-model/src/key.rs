//! Comparison-key derivation for category matching.
//!
//! The join between input rows and the mapping table is case-insensitive and
//! nothing more: keys are edge-trimmed and lower-cased. No accent folding, no
//! punctuation stripping, no internal-whitespace collapsing; two categories
//! that differ by an internal double space or an accent stay distinct.

/// Derive the canonical comparison key for a category value.
///
/// # Example
/// ```
/// use dre_model::comparison_key;
///
/// assert_eq!(comparison_key("  Food "), "food");
/// assert_eq!(comparison_key("Educação"), "educação");
/// ```
pub fn comparison_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(comparison_key(" Food "), "food");
        assert_eq!(comparison_key("FOOD"), "food");
        assert_eq!(comparison_key("food"), "food");
    }

    #[test]
    fn test_keeps_internal_whitespace() {
        assert_ne!(comparison_key("Fo od"), comparison_key("Food"));
        assert_eq!(comparison_key("A  B"), "a  b");
    }

    #[test]
    fn test_keeps_accents() {
        assert_ne!(comparison_key("Educação"), comparison_key("Educacao"));
        assert_eq!(comparison_key("ALIMENTAÇÃO"), "alimentação");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(comparison_key(""), "");
        assert_eq!(comparison_key("   "), "");
    }
}
