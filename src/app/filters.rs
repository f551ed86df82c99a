//! Filter panel state machine
//!
//! Per screen instance: Idle (panel closed) → Editing (open, local draft) →
//! Applied (draft committed, panel closes) or Cleared (draft and applied
//! filters reset). All transitions are user-driven.

use crate::logic::filters::{PriceBucket, PriceFilter};
use crate::model::catalog::{Category, Condition, ListingStatus};
use crate::model::FilterDraft;
use crate::SortDirective;

use super::App;

impl App {
    /// Open the panel, seeding the draft from the applied filters
    ///
    /// No-op when the panel is already open.
    pub fn open_filter_panel(&mut self) {
        if self.model.ui.filter_panel.is_some() {
            return;
        }
        self.model.ui.filter_panel = Some(FilterDraft {
            filters: self.model.ui.applied_filters.clone(),
            sort: self.model.ui.applied_sort,
        });
    }

    fn draft_mut(&mut self) -> Option<&mut FilterDraft> {
        self.model.ui.filter_panel.as_mut()
    }

    /// Toggle a condition chip in the draft
    pub fn toggle_draft_condition(&mut self, condition: Condition) {
        if let Some(draft) = self.draft_mut() {
            toggle(&mut draft.filters.conditions, condition);
        }
    }

    /// Toggle a category chip in the draft
    pub fn toggle_draft_category(&mut self, category: Category) {
        if let Some(draft) = self.draft_mut() {
            toggle(&mut draft.filters.categories, category);
        }
    }

    /// Toggle a status chip in the draft
    pub fn toggle_draft_status(&mut self, status: ListingStatus) {
        if let Some(draft) = self.draft_mut() {
            toggle(&mut draft.filters.statuses, status);
        }
    }

    /// Toggle a price bucket in the draft, replacing any bounds filter
    pub fn toggle_draft_bucket(&mut self, bucket: PriceBucket) {
        if let Some(draft) = self.draft_mut() {
            let mut buckets = match draft.filters.price.take() {
                Some(PriceFilter::Buckets(buckets)) => buckets,
                _ => Vec::new(),
            };
            toggle(&mut buckets, bucket);
            draft.filters.price = if buckets.is_empty() {
                None
            } else {
                Some(PriceFilter::Buckets(buckets))
            };
        }
    }

    /// Set explicit inclusive price bounds in the draft, replacing buckets
    pub fn set_draft_price_bounds(&mut self, min: f64, max: f64) {
        if let Some(draft) = self.draft_mut() {
            draft.filters.price = Some(PriceFilter::Bounds { min, max });
        }
    }

    /// Set the sort directive in the draft; the last one set wins
    pub fn set_draft_sort(&mut self, sort: Option<SortDirective>) {
        if let Some(draft) = self.draft_mut() {
            draft.sort = sort;
        }
    }

    /// Commit the draft to the applied filters and close the panel
    pub fn apply_filters(&mut self) {
        if let Some(draft) = self.model.ui.filter_panel.take() {
            self.model.ui.applied_filters = draft.filters;
            self.model.ui.applied_sort = draft.sort;
        }
    }

    /// Close the panel discarding the draft
    pub fn cancel_filter_panel(&mut self) {
        self.model.ui.filter_panel = None;
    }

    /// Reset draft, applied filters, sort, and query to their empty defaults
    pub fn clear_filters(&mut self) {
        self.model.ui.filter_panel = None;
        self.model.ui.applied_filters = Default::default();
        self.model.ui.applied_sort = None;
        self.model.ui.committed_query.clear();
        self.model.ui.search_input.clear();
    }
}

fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) {
    if let Some(idx) = selected.iter().position(|v| *v == value) {
        selected.remove(idx);
    } else {
        selected.push(value);
    }
}
