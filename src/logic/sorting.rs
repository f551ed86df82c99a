//! Sorting comparison logic
//!
//! Pure functions for comparing listings across the sort directives.

use crate::model::catalog::Listing;
use crate::SortDirective;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Compare two listings according to the given sort directive
///
/// Used with a stable sort, so listings that compare equal keep their
/// original relative order. Unparseable dates compare equal for the same
/// reason. Price comparison treats NaN as equal (prices are sanitized
/// upstream and are always finite in practice).
pub fn compare_listings(a: &Listing, b: &Listing, directive: SortDirective) -> Ordering {
    match directive {
        SortDirective::DateAsc => compare_dates(&a.date_posted, &b.date_posted),
        SortDirective::DateDesc => compare_dates(&b.date_posted, &a.date_posted),
        SortDirective::PriceLowToHigh => {
            a.price_value.partial_cmp(&b.price_value).unwrap_or(Ordering::Equal)
        }
        SortDirective::PriceHighToLow => {
            b.price_value.partial_cmp(&a.price_value).unwrap_or(Ordering::Equal)
        }
    }
}

fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        _ => Ordering::Equal,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Category, Condition};

    fn make_listing(name: &str, price_value: f64, date_posted: &str) -> Listing {
        Listing::new(
            name,
            name,
            price_value,
            Condition::Good,
            Category::Other,
            date_posted,
            "Seller",
            "Campus",
        )
    }

    #[test]
    fn test_price_low_to_high() {
        let cheap = make_listing("cheap", 8.0, "2024-01-01");
        let pricey = make_listing("pricey", 45.0, "2024-01-01");

        assert_eq!(
            compare_listings(&cheap, &pricey, SortDirective::PriceLowToHigh),
            Ordering::Less
        );
        assert_eq!(
            compare_listings(&pricey, &cheap, SortDirective::PriceLowToHigh),
            Ordering::Greater
        );
    }

    #[test]
    fn test_price_high_to_low_is_reverse() {
        let cheap = make_listing("cheap", 8.0, "2024-01-01");
        let pricey = make_listing("pricey", 45.0, "2024-01-01");

        assert_eq!(
            compare_listings(&cheap, &pricey, SortDirective::PriceHighToLow),
            Ordering::Greater
        );
    }

    #[test]
    fn test_date_asc() {
        let older = make_listing("older", 10.0, "2024-01-05");
        let newer = make_listing("newer", 10.0, "2024-01-20");

        assert_eq!(
            compare_listings(&older, &newer, SortDirective::DateAsc),
            Ordering::Less
        );
        assert_eq!(
            compare_listings(&older, &newer, SortDirective::DateDesc),
            Ordering::Greater
        );
    }

    #[test]
    fn test_equal_prices_compare_equal() {
        let a = make_listing("a", 25.0, "2024-01-01");
        let b = make_listing("b", 25.0, "2024-01-02");

        assert_eq!(
            compare_listings(&a, &b, SortDirective::PriceLowToHigh),
            Ordering::Equal
        );
    }

    #[test]
    fn test_unparseable_date_compares_equal() {
        let bad = make_listing("bad", 10.0, "last tuesday");
        let good = make_listing("good", 10.0, "2024-01-01");

        assert_eq!(
            compare_listings(&bad, &good, SortDirective::DateAsc),
            Ordering::Equal
        );
        assert_eq!(
            compare_listings(&good, &bad, SortDirective::DateDesc),
            Ordering::Equal
        );
    }
}
