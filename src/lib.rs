//! Campus Marketplace Client Library
//!
//! Exposes modules for testing

pub mod api;
pub mod app;
pub mod config;
pub mod logic;
pub mod model;
pub mod utils;

/// Sort directive for listing views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirective {
    DateAsc,        // Oldest first
    DateDesc,       // Newest first
    PriceLowToHigh, // Cheapest first
    PriceHighToLow, // Most expensive first
}

impl SortDirective {
    pub fn as_str(&self) -> &str {
        match self {
            SortDirective::DateAsc => "Oldest First",
            SortDirective::DateDesc => "Newest First",
            SortDirective::PriceLowToHigh => "Low to High",
            SortDirective::PriceHighToLow => "High to Low",
        }
    }
}

impl std::str::FromStr for SortDirective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-asc" | "asc" => Ok(SortDirective::DateAsc),
            "date-desc" | "desc" => Ok(SortDirective::DateDesc),
            "low-to-high" => Ok(SortDirective::PriceLowToHigh),
            "high-to-low" => Ok(SortDirective::PriceHighToLow),
            other => Err(format!(
                "unknown sort '{}' (expected date-asc, date-desc, low-to-high or high-to-low)",
                other
            )),
        }
    }
}
