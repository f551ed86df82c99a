//! Search Logic
//!
//! Pure functions for matching listings against a free-text query.

use crate::model::catalog::Listing;

/// Match a search query against a listing
///
/// # Rules
/// - Case-insensitive substring match
/// - Checks the listing name, seller, and location
/// - Empty query matches everything
pub fn query_matches(query: &str, listing: &Listing) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();

    listing.name.to_lowercase().contains(&query_lower)
        || listing.seller.to_lowercase().contains(&query_lower)
        || listing.location.to_lowercase().contains(&query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Category, Condition};

    fn make_listing(name: &str, seller: &str, location: &str) -> Listing {
        Listing::new(
            "1",
            name,
            10.0,
            Condition::Good,
            Category::Other,
            "2024-01-01",
            seller,
            location,
        )
    }

    #[test]
    fn test_empty_query_matches_all() {
        let listing = make_listing("Lab Coat", "Mike R.", "Science Lab");
        assert!(query_matches("", &listing));
    }

    #[test]
    fn test_name_substring() {
        let listing = make_listing("Calculus Textbook", "John D.", "Engineering Building");
        assert!(query_matches("calc", &listing));
        assert!(query_matches("textbook", &listing));
        assert!(!query_matches("chemistry", &listing));
    }

    #[test]
    fn test_seller_substring() {
        let listing = make_listing("Lab Coat", "Sarah M.", "Math Department");
        assert!(query_matches("sarah", &listing));
    }

    #[test]
    fn test_location_substring() {
        let listing = make_listing("Lab Coat", "Sarah M.", "Math Department");
        assert!(query_matches("math dep", &listing));
    }

    #[test]
    fn test_case_insensitive() {
        let listing = make_listing("Programming Notes", "Alex K.", "Computer Science");
        assert!(query_matches("PROGRAMMING", &listing));
        assert!(query_matches("pRoGrAmMiNg", &listing));
    }

    #[test]
    fn test_no_match_on_other_fields() {
        let mut listing = make_listing("Lab Coat", "Mike R.", "Science Lab");
        listing.description = Some("brand new winter coat".to_string());
        // Description is not part of the search surface
        assert!(!query_matches("winter", &listing));
    }
}
