//! Business Logic
//!
//! Pure functions that can be unit tested in isolation:
//! - filters: per-listing predicate evaluation across filter dimensions
//! - pipeline: filtered-and-sorted derived views of the catalog
//! - search: free-text query matching
//! - sorting: comparator selection for the sort directives
//! - validation: synchronous form field checks

pub mod filters;
pub mod pipeline;
pub mod search;
pub mod sorting;
pub mod validation;
