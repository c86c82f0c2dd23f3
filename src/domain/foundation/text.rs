//! Text matching primitives shared across extraction and scoring.

/// Word-boundary-aware containment check.
///
/// Both inputs must already be lowercased. A match counts only when the
/// characters adjacent to the matched span are not ASCII alphanumeric, so
/// "java" does not match inside "javascript" while "c++" still matches
/// before a space.
pub(crate) fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    for (pos, _) in text.match_indices(term) {
        let end = pos + term.len();
        let before_ok = pos == 0 || !bytes[pos - 1].is_ascii_alphanumeric();
        let after_ok = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words() {
        assert!(contains_term("built services in java and go", "java"));
    }

    #[test]
    fn rejects_substring_matches() {
        assert!(!contains_term("javascript everywhere", "java"));
        assert!(!contains_term("postgresql databases", "sql"));
    }

    #[test]
    fn matches_terms_with_symbols() {
        assert!(contains_term("modern c++ services", "c++"));
        assert!(contains_term("ci/cd pipelines", "ci/cd"));
        assert!(contains_term("node.js backend", "node.js"));
    }

    #[test]
    fn matches_at_string_edges() {
        assert!(contains_term("rust", "rust"));
        assert!(contains_term("rust everywhere", "rust"));
        assert!(contains_term("we love rust", "rust"));
    }

    #[test]
    fn empty_term_never_matches() {
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn later_occurrence_can_match() {
        // First hit is embedded, second stands alone.
        assert!(contains_term("javascript and java", "java"));
    }
}
