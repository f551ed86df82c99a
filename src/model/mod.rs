//! Pure Application Model
//!
//! Cloneable state for the client, organized into focused sub-models:
//!
//! - **CatalogModel**: listing collections (marketplace + the seller's own)
//! - **UiModel**: tab, search, filter panel, confirmations
//!
//! Key principles:
//! - Clone + Debug: can snapshot and compare state
//! - No services: all I/O lives in the App runtime
//! - Pure accessors: derived views are side-effect free

pub mod catalog;
pub mod ui;

pub use catalog::{Category, Condition, Listing, ListingStatus};
pub use ui::{FilterDraft, Tab, UiModel};

use crate::logic::pipeline::derive_view;

/// Listing collections held in memory for the session
#[derive(Debug, Clone, Default)]
pub struct CatalogModel {
    /// Marketplace listings shown on the Buy view
    pub listings: Vec<Listing>,

    /// The seller's own listings shown on the Sell view
    pub my_listings: Vec<Listing>,
}

/// Root application model composed of focused sub-models
#[derive(Debug, Clone)]
pub struct Model {
    pub catalog: CatalogModel,
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with empty collections
    pub fn new() -> Self {
        Self {
            catalog: CatalogModel::default(),
            ui: UiModel::new(),
        }
    }

    /// Derived view of the Buy tab: committed query + applied filters + sort
    ///
    /// Recomputed from the full source collection on every call.
    pub fn buy_view(&self) -> Vec<Listing> {
        derive_view(
            &self.catalog.listings,
            &self.ui.committed_query,
            &self.ui.applied_filters,
            self.ui.applied_sort,
        )
    }

    /// Derived view of the seller's previous items
    pub fn sell_view(&self) -> Vec<Listing> {
        derive_view(
            &self.catalog.my_listings,
            &self.ui.committed_query,
            &self.ui.applied_filters,
            self.ui.applied_sort,
        )
    }

    /// Look up one of the seller's own listings by id
    pub fn my_listing(&self, id: &str) -> Option<&Listing> {
        self.catalog.my_listings.iter().find(|l| l.id == id)
    }

    /// Check if any modal state is active
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new();
        assert_eq!(model.catalog.listings.len(), 0);
        assert_eq!(model.ui.active_tab, Tab::Buy);
        assert!(!model.ui.is_narrowed());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new();
        let _cloned = model.clone();
    }

    #[test]
    fn test_buy_view_identity_when_unfiltered() {
        let mut model = Model::new();
        model.catalog.listings = catalog::sample_listings();
        assert_eq!(model.buy_view(), model.catalog.listings);
    }

    #[test]
    fn test_has_modal() {
        let mut model = Model::new();
        assert!(!model.has_modal());

        model.ui.confirm_delete = Some("2".to_string());
        assert!(model.has_modal());
    }
}
