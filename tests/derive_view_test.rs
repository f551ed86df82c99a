//! End-to-end tests for the derived listing view
//!
//! Drives the full pipeline (search + filters + sort) through the app
//! runtime against the bundled sample catalog and checks the properties
//! the views rely on: identity when nothing is active, intersection
//! across filter dimensions, stable ordering, and reversibility via clear.

use campusmarket::app::App;
use campusmarket::logic::filters::PriceBucket;
use campusmarket::model::{Category, Condition, ListingStatus, Tab};
use campusmarket::SortDirective;

fn app() -> App {
    App::with_sample_data()
}

#[test]
fn test_identity_when_nothing_is_active() {
    let app = app();
    assert_eq!(app.derived_view(), app.model.catalog.listings);
}

#[test]
fn test_no_match_yields_empty_view() {
    let mut app = app();
    app.set_search_input("zzzzz");
    app.commit_search();
    assert!(app.derived_view().is_empty());
    assert!(app.model.ui.is_narrowed());
}

#[test]
fn test_price_sort_low_to_high() {
    let mut app = app();
    app.open_filter_panel();
    app.set_draft_sort(Some(SortDirective::PriceLowToHigh));
    app.apply_filters();

    let prices: Vec<f64> = app.derived_view().iter().map(|l| l.price_value).collect();
    assert_eq!(prices, vec![8.0, 15.0, 25.0, 45.0]);
}

#[test]
fn test_price_sort_high_to_low() {
    let mut app = app();
    app.open_filter_panel();
    app.set_draft_sort(Some(SortDirective::PriceHighToLow));
    app.apply_filters();

    let prices: Vec<f64> = app.derived_view().iter().map(|l| l.price_value).collect();
    assert_eq!(prices, vec![45.0, 25.0, 15.0, 8.0]);
}

#[test]
fn test_date_sort_newest_first() {
    let mut app = app();
    app.open_filter_panel();
    app.set_draft_sort(Some(SortDirective::DateDesc));
    app.apply_filters();

    let dates: Vec<String> = app
        .derived_view()
        .iter()
        .map(|l| l.date_posted.clone())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-01-20", "2024-01-15", "2024-01-10", "2024-01-05"]
    );
}

#[test]
fn test_filters_intersect_across_dimensions() {
    let mut app = app();
    app.open_filter_panel();
    app.toggle_draft_category(Category::Textbooks);
    app.toggle_draft_condition(Condition::Good);
    app.apply_filters();

    let view = app.derived_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Programming Notes");
}

#[test]
fn test_bucket_filter_unions_within_dimension() {
    let mut app = app();
    app.open_filter_panel();
    app.toggle_draft_bucket(PriceBucket::Under25);
    app.apply_filters();

    // $15 and $8
    assert_eq!(app.derived_view().len(), 2);

    app.open_filter_panel();
    app.toggle_draft_bucket(PriceBucket::From25To50);
    app.apply_filters();

    // Union adds $25 and $45
    assert_eq!(app.derived_view().len(), 4);
}

#[test]
fn test_search_and_filter_compose() {
    let mut app = app();
    app.set_search_input("textbook");
    app.commit_search();

    app.open_filter_panel();
    app.toggle_draft_condition(Condition::LikeNew);
    app.apply_filters();

    let view = app.derived_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Calculus Textbook");
}

#[test]
fn test_sell_view_filters_by_status() {
    let mut app = app();
    app.switch_tab(Tab::Sell);

    app.open_filter_panel();
    app.toggle_draft_status(ListingStatus::Sold);
    app.apply_filters();

    let view = app.derived_view();
    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|l| l.status == Some(ListingStatus::Sold)));
}

#[test]
fn test_clear_restores_original_order() {
    let mut app = app();
    let original = app.model.catalog.listings.clone();

    app.set_search_input("calc");
    app.commit_search();
    app.open_filter_panel();
    app.toggle_draft_category(Category::Electronics);
    app.set_draft_sort(Some(SortDirective::PriceLowToHigh));
    app.apply_filters();
    assert_ne!(app.derived_view(), original);

    app.clear_filters();
    assert_eq!(app.derived_view(), original);
}
