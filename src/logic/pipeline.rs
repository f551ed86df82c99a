//! List pipeline
//!
//! Composes the filter predicate and comparator into a single derived view
//! of the catalog. Pure: the source collection is never mutated and a fresh
//! ordered sequence is returned on every call.

use crate::logic::filters::{listing_matches, FilterSet};
use crate::logic::sorting::compare_listings;
use crate::model::catalog::Listing;
use crate::SortDirective;

/// Derive the filtered-and-sorted projection of a listing collection
///
/// - Empty query and empty filters pass every item through
/// - `sort` of `None` preserves the input order
/// - The sort is stable: ties keep their original relative order
pub fn derive_view(
    items: &[Listing],
    query: &str,
    filters: &FilterSet,
    sort: Option<SortDirective>,
) -> Vec<Listing> {
    let mut view: Vec<Listing> = items
        .iter()
        .filter(|item| listing_matches(item, query, filters))
        .cloned()
        .collect();

    if let Some(directive) = sort {
        view.sort_by(|a, b| compare_listings(a, b, directive));
    }

    view
}
