//! UI Model
//!
//! Per-screen user interface state: active tab, the two-stage search query,
//! the filter panel draft, and pending confirmations.

use crate::logic::filters::FilterSet;
use crate::SortDirective;

/// Top-level tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Buy,
    Sell,
    Wishlist,
    Chats,
}

impl Tab {
    pub fn as_str(&self) -> &str {
        match self {
            Tab::Buy => "Buy",
            Tab::Sell => "Sell",
            Tab::Wishlist => "Wishlist",
            Tab::Chats => "Chats",
        }
    }
}

/// Local draft edited while the filter panel is open
///
/// Committed to the applied set on apply, discarded on cancel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDraft {
    pub filters: FilterSet,
    pub sort: Option<SortDirective>,
}

/// UI state for one screen instance
#[derive(Debug, Clone)]
pub struct UiModel {
    pub active_tab: Tab,

    // ============================================
    // SEARCH (two-stage: typed vs committed)
    // ============================================
    /// What the user is currently typing
    pub search_input: String,

    /// Query actually applied to the derived view
    pub committed_query: String,

    // ============================================
    // FILTER PANEL
    // ============================================
    /// Draft being edited; `None` means the panel is closed
    pub filter_panel: Option<FilterDraft>,

    /// Filters committed to the derived view
    pub applied_filters: FilterSet,

    /// Sort committed to the derived view
    pub applied_sort: Option<SortDirective>,

    // ============================================
    // DIALOGS
    // ============================================
    /// Listing id pending delete confirmation
    pub confirm_delete: Option<String>,

    /// Generic failure message from the initial listing fetch
    pub load_error: Option<String>,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Buy,
            search_input: String::new(),
            committed_query: String::new(),
            filter_panel: None,
            applied_filters: FilterSet::default(),
            applied_sort: None,
            confirm_delete: None,
            load_error: None,
        }
    }

    /// Whether the filter panel is open (Editing state)
    pub fn panel_open(&self) -> bool {
        self.filter_panel.is_some()
    }

    /// Whether any query or filter narrows the view (drives the
    /// "clear filters" affordance of the no-results state)
    pub fn is_narrowed(&self) -> bool {
        !self.committed_query.is_empty()
            || !self.applied_filters.is_empty()
            || self.applied_sort.is_some()
    }

    /// Check if any modal state is active
    pub fn has_modal(&self) -> bool {
        self.panel_open() || self.confirm_delete.is_some()
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
