//! Filter predicate logic
//!
//! Pure functions deciding per-listing inclusion for a query string plus a
//! set of selected filter values. All active dimensions combine with AND;
//! selections within one dimension combine with OR.

use crate::logic::search::query_matches;
use crate::model::catalog::{Category, Condition, Listing, ListingStatus};

/// Predefined price bucket labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    Under25,
    From25To50,
    From50To100,
    Over100,
}

impl PriceBucket {
    pub fn as_str(&self) -> &str {
        match self {
            PriceBucket::Under25 => "under-25",
            PriceBucket::From25To50 => "25-50",
            PriceBucket::From50To100 => "50-100",
            PriceBucket::Over100 => "over-100",
        }
    }

    /// Whether a price falls inside this bucket
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBucket::Under25 => price < 25.0,
            PriceBucket::From25To50 => price >= 25.0 && price <= 50.0,
            PriceBucket::From50To100 => price >= 50.0 && price <= 100.0,
            PriceBucket::Over100 => price > 100.0,
        }
    }
}

impl std::str::FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under-25" => Ok(PriceBucket::Under25),
            "25-50" => Ok(PriceBucket::From25To50),
            "50-100" => Ok(PriceBucket::From50To100),
            "over-100" => Ok(PriceBucket::Over100),
            other => Err(format!(
                "unknown price bucket '{}' (expected under-25, 25-50, 50-100 or over-100)",
                other
            )),
        }
    }
}

/// Price constraint: explicit inclusive bounds, or one-or-more buckets
#[derive(Debug, Clone, PartialEq)]
pub enum PriceFilter {
    Bounds { min: f64, max: f64 },
    Buckets(Vec<PriceBucket>),
}

impl PriceFilter {
    fn admits(&self, price: f64) -> bool {
        match self {
            PriceFilter::Bounds { min, max } => price >= *min && price <= *max,
            // Empty bucket selection imposes no constraint
            PriceFilter::Buckets(buckets) => {
                buckets.is_empty() || buckets.iter().any(|b| b.contains(price))
            }
        }
    }
}

/// One independently toggleable constraint per filter dimension
///
/// Empty sets (and `None` price) impose no constraint on that dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSet {
    pub price: Option<PriceFilter>,
    pub conditions: Vec<Condition>,
    pub categories: Vec<Category>,
    pub statuses: Vec<ListingStatus>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.conditions.is_empty()
            && self.categories.is_empty()
            && self.statuses.is_empty()
    }
}

/// Set-membership check that silently admits items missing the enum value
fn member_or_absent<T: PartialEq + Copy>(selected: &[T], value: Option<T>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(v) => selected.contains(&v),
        None => true, // Defensive default: no enum value on the item
    }
}

/// Decide whether a listing passes the query and every active filter dimension
pub fn listing_matches(listing: &Listing, query: &str, filters: &FilterSet) -> bool {
    if !query_matches(query, listing) {
        return false;
    }

    if let Some(price) = &filters.price {
        if !price.admits(listing.price_value) {
            return false;
        }
    }

    member_or_absent(&filters.conditions, listing.condition)
        && member_or_absent(&filters.categories, listing.category)
        && member_or_absent(&filters.statuses, listing.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::sample_listings;

    fn priced(value: f64) -> Listing {
        Listing::new(
            "x",
            "Widget",
            value,
            Condition::Good,
            Category::Other,
            "2024-01-01",
            "Seller",
            "Campus",
        )
    }

    #[test]
    fn test_empty_filter_set_admits_everything() {
        let filters = FilterSet::default();
        for listing in sample_listings() {
            assert!(listing_matches(&listing, "", &filters));
        }
    }

    #[test]
    fn test_bucket_under_25_excludes_25_and_above() {
        assert!(PriceBucket::Under25.contains(24.99));
        assert!(!PriceBucket::Under25.contains(25.0));
        assert!(!PriceBucket::Under25.contains(80.0));
    }

    #[test]
    fn test_bucket_over_100_excludes_100_and_below() {
        assert!(PriceBucket::Over100.contains(100.01));
        assert!(!PriceBucket::Over100.contains(100.0));
        assert!(!PriceBucket::Over100.contains(8.0));
    }

    #[test]
    fn test_bucket_boundaries_overlap_at_50() {
        // 50 belongs to both middle buckets, matching the original ranges
        assert!(PriceBucket::From25To50.contains(50.0));
        assert!(PriceBucket::From50To100.contains(50.0));
    }

    #[test]
    fn test_buckets_combine_with_or() {
        let filters = FilterSet {
            price: Some(PriceFilter::Buckets(vec![
                PriceBucket::Under25,
                PriceBucket::Over100,
            ])),
            ..Default::default()
        };
        assert!(listing_matches(&priced(10.0), "", &filters));
        assert!(listing_matches(&priced(150.0), "", &filters));
        assert!(!listing_matches(&priced(60.0), "", &filters));
    }

    #[test]
    fn test_empty_bucket_selection_imposes_nothing() {
        let filters = FilterSet {
            price: Some(PriceFilter::Buckets(vec![])),
            ..Default::default()
        };
        assert!(listing_matches(&priced(60.0), "", &filters));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filters = FilterSet {
            price: Some(PriceFilter::Bounds { min: 10.0, max: 45.0 }),
            ..Default::default()
        };
        assert!(listing_matches(&priced(10.0), "", &filters));
        assert!(listing_matches(&priced(45.0), "", &filters));
        assert!(!listing_matches(&priced(45.01), "", &filters));
        assert!(!listing_matches(&priced(9.99), "", &filters));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let filters = FilterSet {
            conditions: vec![Condition::Good],
            categories: vec![Category::Textbooks],
            ..Default::default()
        };

        let matched: Vec<_> = sample_listings()
            .into_iter()
            .filter(|l| listing_matches(l, "", &filters))
            .collect();

        // Only "Programming Notes" is both Good and a Textbook
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Programming Notes");
    }

    #[test]
    fn test_missing_enum_value_is_admitted() {
        let mut listing = priced(30.0);
        listing.condition = None;

        let filters = FilterSet {
            conditions: vec![Condition::New],
            ..Default::default()
        };
        assert!(listing_matches(&listing, "", &filters));
    }

    #[test]
    fn test_status_membership() {
        let mut listing = priced(30.0);
        listing.status = Some(ListingStatus::Sold);

        let active_only = FilterSet {
            statuses: vec![ListingStatus::Active],
            ..Default::default()
        };
        assert!(!listing_matches(&listing, "", &active_only));

        let sold_only = FilterSet {
            statuses: vec![ListingStatus::Sold],
            ..Default::default()
        };
        assert!(listing_matches(&listing, "", &sold_only));
    }

    #[test]
    fn test_query_combines_with_filters() {
        let filters = FilterSet {
            categories: vec![Category::Textbooks],
            ..Default::default()
        };
        let items = sample_listings();

        // "calculus" matches one textbook by name
        assert!(listing_matches(&items[0], "calculus", &filters));
        // Query matches but category does not
        assert!(!listing_matches(&items[1], "sarah", &filters));
    }
}
