//! Venue-name normalization
//!
//! Venue names arrive with mixed separators (`seattle-washington-usa`,
//! `new_york-usa`). All venue comparisons lowercase both operands and unify
//! `_`, `-`, and space before substring matching.

/// Canonical form of a venue name: lowercase, separators replaced by a
/// single space, leading/trailing whitespace trimmed. Idempotent.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().replace(['_', '-'], " ").trim().to_string()
}

/// True iff the normalized query occurs inside the normalized location.
pub fn location_contains(location: &str, query: &str) -> bool {
    normalize(location).contains(&normalize(query))
}

/// True iff any of the locations contains the query.
pub fn any_location_contains(locations: &[String], query: &str) -> bool {
    locations.iter().any(|location| location_contains(location, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators_and_case() {
        assert_eq!(normalize("New_York_City"), "new york city");
        assert_eq!(normalize("seattle-washington-usa"), "seattle washington usa");
        assert_eq!(normalize("  Tokyo  "), "tokyo");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["New_York_City", "  Tokyo  ", "seattle-washington-usa", "already normal"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_location_contains() {
        assert!(location_contains("seattle-washington-usa", "washington"));
        assert!(location_contains("seattle-washington-usa", "Washington-USA"));
        assert!(!location_contains("seattle-washington-usa", "california"));
    }

    #[test]
    fn test_any_location_contains() {
        let locations = vec!["london-uk".to_string(), "osaka-japan".to_string()];
        assert!(any_location_contains(&locations, "osaka"));
        assert!(!any_location_contains(&locations, "berlin"));
    }
}
