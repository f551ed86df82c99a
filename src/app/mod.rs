//! Application runtime
//!
//! Owns the model plus the HTTP client and drives state transitions.
//! All I/O happens here; the model and logic layers stay pure.

mod filters;
mod forms;

pub use forms::SubmitOutcome;

use anyhow::Result;

use crate::api::MarketClient;
use crate::config::Config;
use crate::model::catalog::{sample_listings, sample_seller_listings};
use crate::model::{Listing, Model, Tab};
use crate::utils::log_debug;

pub struct App {
    pub model: Model,
    client: MarketClient,
}

impl App {
    /// Initialize the app, performing the single listing fetch
    ///
    /// On fetch failure the generic load error is recorded and the bundled
    /// sample catalog is used instead. No retry or backoff.
    pub async fn new(config: Config) -> Result<Self> {
        let client = MarketClient::new(config.base_url.clone());
        let mut model = Model::new();

        model.catalog.listings = if config.use_sample_data {
            sample_listings()
        } else {
            match client.get_books().await {
                Ok(listings) => listings,
                Err(e) => {
                    log_debug(&format!("Failed to fetch listings: {}", e));
                    model.ui.load_error = Some("Failed to load listings".to_string());
                    sample_listings()
                }
            }
        };

        // The seller's own listings are client-supplied in this snapshot
        model.catalog.my_listings = sample_seller_listings();

        Ok(App { model, client })
    }

    /// Offline constructor on the sample catalog (used by tests)
    pub fn with_sample_data() -> Self {
        let mut model = Model::new();
        model.catalog.listings = sample_listings();
        model.catalog.my_listings = sample_seller_listings();

        App {
            model,
            client: MarketClient::new(String::new()),
        }
    }

    pub fn client(&self) -> &MarketClient {
        &self.client
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.model.ui.active_tab = tab;
    }

    /// Derived view for the active tab's listing collection
    pub fn derived_view(&self) -> Vec<Listing> {
        match self.model.ui.active_tab {
            Tab::Sell => self.model.sell_view(),
            _ => self.model.buy_view(),
        }
    }

    /// Fixed copy for the placeholder tabs
    pub fn placeholder_copy(tab: Tab) -> Option<(&'static str, &'static str)> {
        match tab {
            Tab::Wishlist => Some((
                "No items in wishlist yet",
                "Tap the heart icon on any item to add it to your wishlist",
            )),
            Tab::Chats => Some(("Chats Page", "Your conversations will appear here")),
            _ => None,
        }
    }

    // ============================================================
    // SEARCH (two-stage: typed input vs committed query)
    // ============================================================

    /// Update the search input without touching the derived view
    pub fn set_search_input(&mut self, input: &str) {
        self.model.ui.search_input = input.to_string();
    }

    /// Commit the typed input as the active query
    pub fn commit_search(&mut self) {
        self.model.ui.committed_query = self.model.ui.search_input.clone();
    }

    // ============================================================
    // DELETE CONFIRMATION (two-step, no undo)
    // ============================================================

    /// Arm the delete confirmation for one of the seller's own listings
    ///
    /// Returns false when the id does not name an own listing.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.model.my_listing(id).is_none() {
            return false;
        }
        self.model.ui.confirm_delete = Some(id.to_string());
        true
    }

    /// Confirm the armed delete, removing the listing
    pub fn confirm_delete(&mut self) -> Option<Listing> {
        let id = self.model.ui.confirm_delete.take()?;
        let idx = self
            .model
            .catalog
            .my_listings
            .iter()
            .position(|l| l.id == id)?;
        Some(self.model.catalog.my_listings.remove(idx))
    }

    /// Disarm a pending delete confirmation
    pub fn cancel_delete(&mut self) {
        self.model.ui.confirm_delete = None;
    }
}
