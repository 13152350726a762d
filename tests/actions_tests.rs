//! End-to-end tests for the marketplace action surface over SQLite.

mod support;

use std::collections::HashSet;

use autolot::application::ListingActions;
use autolot::domain::account::{Account, AccountRole};
use autolot::domain::filter::{Facet, FilterRequest};
use autolot::domain::id::{AccountId, ExternalId, ListingId};
use autolot::domain::listing::{Listing, ListingStatus};
use autolot::error::{Error, Result};
use autolot::port::outbound::store::{AccountStore, ListingStore, SavedListingStore};
use rust_decimal_macros::dec;
use support::memory_world;

// -------------------------------------------------------------------------
// Listing query engine
// -------------------------------------------------------------------------

#[tokio::test]
async fn unconstrained_search_returns_only_available_listings() {
    let world = memory_world();
    world
        .seed_listing(&Listing::new("Toyota", "Corolla", dec!(20000)))
        .await;
    world
        .seed_listing(&Listing::new("Ford", "Focus", dec!(15000)).with_status(ListingStatus::Sold))
        .await;
    world
        .seed_listing(
            &Listing::new("BMW", "320i", dec!(30000)).with_status(ListingStatus::Pending),
        )
        .await;

    let envelope = world
        .actions
        .filtered_listings(&FilterRequest::default(), None)
        .await;

    assert!(envelope.success);
    let cards = envelope.data.unwrap();
    assert_eq!(cards.len(), 1);
    assert!(cards.iter().all(|card| card.status == "available"));
}

#[tokio::test]
async fn pagination_metadata_is_ceiling_and_past_the_end_is_empty_not_an_error() {
    let world = memory_world();
    for i in 0..5 {
        world
            .seed_listing(&Listing::new("Make", format!("Model{i}"), dec!(10000)))
            .await;
    }

    let request = FilterRequest {
        page: Some(1),
        page_size: Some(2),
        ..Default::default()
    };
    let envelope = world.actions.filtered_listings(&request, None).await;
    let pagination = envelope.pagination.unwrap();
    assert_eq!(pagination.total, 5);
    assert_eq!(pagination.pages, 3);
    assert_eq!(pagination.page_size, 2);

    let beyond = FilterRequest {
        page: Some(10),
        page_size: Some(2),
        ..Default::default()
    };
    let envelope = world.actions.filtered_listings(&beyond, None).await;
    assert!(envelope.success);
    assert!(envelope.data.unwrap().is_empty());
    let pagination = envelope.pagination.unwrap();
    assert_eq!(pagination.current_page, 10);
    assert_eq!(pagination.total, 5);
}

#[tokio::test]
async fn free_text_search_scenario_matches_color_case_insensitively() {
    let world = memory_world();
    world
        .seed_listing(&Listing::new("Toyota", "Corolla", dec!(20000)).with_color("Red"))
        .await;
    world
        .seed_listing(&Listing::new("Honda", "Civic", dec!(25000)).with_color("Blue"))
        .await;

    for term in ["red", "Red", "RED"] {
        let request = FilterRequest {
            search: Some(term.into()),
            ..Default::default()
        };
        let envelope = world.actions.filtered_listings(&request, None).await;
        let cards = envelope.data.unwrap();
        assert_eq!(cards.len(), 1, "term {term}");
        assert_eq!(cards[0].make, "Toyota");
    }
}

#[tokio::test]
async fn anonymous_callers_see_every_card_unsaved() {
    let world = memory_world();
    world
        .seed_listing(&Listing::new("Toyota", "Corolla", dec!(20000)))
        .await;

    let envelope = world
        .actions
        .filtered_listings(&FilterRequest::default(), None)
        .await;
    assert!(envelope.data.unwrap().iter().all(|card| !card.saved));
}

#[tokio::test]
async fn unknown_identity_degrades_to_unsaved_instead_of_failing() {
    let world = memory_world();
    world
        .seed_listing(&Listing::new("Toyota", "Corolla", dec!(20000)))
        .await;

    let ghost = ExternalId::new("ghost");
    let envelope = world
        .actions
        .filtered_listings(&FilterRequest::default(), Some(&ghost))
        .await;

    assert!(envelope.success);
    assert!(envelope.data.unwrap().iter().all(|card| !card.saved));
}

#[tokio::test]
async fn saved_annotation_marks_exactly_the_saved_cards() {
    let world = memory_world();
    let account = Account::new("ext-1");
    world.seed_account(&account).await;
    let saved = Listing::new("Toyota", "Corolla", dec!(20000));
    let other = Listing::new("Honda", "Civic", dec!(25000));
    world.seed_listing(&saved).await;
    world.seed_listing(&other).await;

    world
        .actions
        .toggle_saved(&saved.id, Some(&account.external_id))
        .await
        .unwrap();

    let envelope = world
        .actions
        .filtered_listings(&FilterRequest::default(), Some(&account.external_id))
        .await;
    let cards = envelope.data.unwrap();
    let saved_flags: Vec<(String, bool)> = cards
        .into_iter()
        .map(|card| (card.make, card.saved))
        .collect();

    assert!(saved_flags.contains(&("Toyota".to_string(), true)));
    assert!(saved_flags.contains(&("Honda".to_string(), false)));
}

// -------------------------------------------------------------------------
// Single-listing reader
// -------------------------------------------------------------------------

#[tokio::test]
async fn get_listing_twice_is_byte_identical() {
    let world = memory_world();
    let listing = Listing::new("Toyota", "Corolla", dec!(21999.50));
    world.seed_listing(&listing).await;

    let first = world.actions.listing(&listing.id, None).await;
    let second = world.actions.listing(&listing.id, None).await;

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn non_available_listing_is_still_retrievable_by_id() {
    let world = memory_world();
    let sold = Listing::new("Ford", "Focus", dec!(15000)).with_status(ListingStatus::Sold);
    world.seed_listing(&sold).await;

    let envelope = world.actions.listing(&sold.id, None).await;
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().status, "sold");
}

#[tokio::test]
async fn missing_listing_is_a_soft_not_found() {
    let world = memory_world();
    let envelope = world.actions.listing(&ListingId::new("missing"), None).await;

    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("listing not found"));
}

// -------------------------------------------------------------------------
// Favorite toggle
// -------------------------------------------------------------------------

#[tokio::test]
async fn toggle_alternates_saved_state_strictly() {
    let world = memory_world();
    let account = Account::new("ext-1");
    world.seed_account(&account).await;
    let listing = Listing::new("Toyota", "Corolla", dec!(20000));
    world.seed_listing(&listing).await;
    let caller = Some(&account.external_id);

    let first = world
        .actions
        .toggle_saved(&listing.id, caller)
        .await
        .unwrap();
    assert!(first.data.unwrap().saved);

    let second = world
        .actions
        .toggle_saved(&listing.id, caller)
        .await
        .unwrap();
    assert!(!second.data.unwrap().saved);

    let third = world
        .actions
        .toggle_saved(&listing.id, caller)
        .await
        .unwrap();
    assert!(third.data.unwrap().saved);
}

#[tokio::test]
async fn toggle_without_identity_raises_unauthorized() {
    let world = memory_world();
    let listing = Listing::new("Toyota", "Corolla", dec!(20000));
    world.seed_listing(&listing).await;

    let result = world.actions.toggle_saved(&listing.id, None).await;
    assert!(matches!(result, Err(Error::Unauthorized)));
}

#[tokio::test]
async fn toggle_with_unknown_identity_raises_not_found() {
    let world = memory_world();
    let listing = Listing::new("Toyota", "Corolla", dec!(20000));
    world.seed_listing(&listing).await;

    let ghost = ExternalId::new("ghost");
    let result = world.actions.toggle_saved(&listing.id, Some(&ghost)).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

// -------------------------------------------------------------------------
// Saved-listings reader
// -------------------------------------------------------------------------

#[tokio::test]
async fn saved_listings_requires_identity_softly() {
    let world = memory_world();

    let envelope = world.actions.saved_listings(None).await;
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Unauthorized"));

    let ghost = ExternalId::new("ghost");
    let envelope = world.actions.saved_listings(Some(&ghost)).await;
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("account not found"));
}

#[tokio::test]
async fn saved_listings_are_all_flagged_saved() {
    let world = memory_world();
    let account = Account::new("ext-1");
    world.seed_account(&account).await;
    let first = Listing::new("Toyota", "Corolla", dec!(20000));
    let second = Listing::new("Honda", "Civic", dec!(25000));
    world.seed_listing(&first).await;
    world.seed_listing(&second).await;

    for listing in [&first, &second] {
        world
            .actions
            .toggle_saved(&listing.id, Some(&account.external_id))
            .await
            .unwrap();
    }

    let envelope = world
        .actions
        .saved_listings(Some(&account.external_id))
        .await;
    assert!(envelope.success);
    let cards = envelope.data.unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.saved));
}

// -------------------------------------------------------------------------
// Filter catalog
// -------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_yields_default_catalog_with_success() {
    let world = memory_world();

    let envelope = world.actions.filter_catalog().await;
    assert!(envelope.success);

    let catalog = envelope.data.unwrap();
    assert!(catalog.makes.is_empty());
    assert!(catalog.body_types.is_empty());
    assert!(catalog.fuel_types.is_empty());
    assert!(catalog.transmissions.is_empty());
    assert!((catalog.price_range.min - 0.0).abs() < f64::EPSILON);
    assert!((catalog.price_range.max - 100_000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn catalog_reports_sorted_facets_and_observed_bounds() {
    let world = memory_world();
    world
        .seed_listing(&Listing::new("Toyota", "Corolla", dec!(22000)))
        .await;
    world
        .seed_listing(
            &Listing::new("Honda", "Civic", dec!(18000)).with_body_type("Hatchback"),
        )
        .await;

    let envelope = world.actions.filter_catalog().await;
    let catalog = envelope.data.unwrap();

    assert_eq!(catalog.makes, vec!["Honda".to_string(), "Toyota".to_string()]);
    assert!((catalog.price_range.min - 18000.0).abs() < 0.001);
    assert!((catalog.price_range.max - 22000.0).abs() < 0.001);
}

// -------------------------------------------------------------------------
// Admin gate
// -------------------------------------------------------------------------

#[tokio::test]
async fn admin_gate_authorizes_admin_accounts_only() {
    let world = memory_world();
    let admin = Account::new("ext-admin").with_role(AccountRole::Admin);
    let user = Account::new("ext-user");
    world.seed_account(&admin).await;
    world.seed_account(&user).await;

    let envelope = world.actions.admin(Some(&admin.external_id)).await;
    assert!(envelope.data.unwrap().authorized);

    let envelope = world.actions.admin(Some(&user.external_id)).await;
    assert!(!envelope.data.unwrap().authorized);

    let envelope = world.actions.admin(None).await;
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Unauthorized"));
}

// -------------------------------------------------------------------------
// Failure degradation with a broken store
// -------------------------------------------------------------------------

struct BrokenStore;

impl ListingStore for BrokenStore {
    async fn find(&self, _id: &ListingId) -> Result<Option<Listing>> {
        Err(Error::Database("store offline".into()))
    }

    async fn search(&self, _filter: &FilterRequest) -> Result<Vec<Listing>> {
        Err(Error::Database("store offline".into()))
    }

    async fn count(&self, _filter: &FilterRequest) -> Result<i64> {
        Err(Error::Database("store offline".into()))
    }

    async fn distinct(&self, _facet: Facet) -> Result<Vec<String>> {
        Err(Error::Database("store offline".into()))
    }

    async fn price_bounds(&self) -> Result<Option<(f64, f64)>> {
        Err(Error::Database("store offline".into()))
    }
}

impl AccountStore for BrokenStore {
    async fn find_by_external(&self, _external_id: &ExternalId) -> Result<Option<Account>> {
        Err(Error::Database("store offline".into()))
    }
}

impl SavedListingStore for BrokenStore {
    async fn toggle(&self, _account_id: &AccountId, _listing_id: &ListingId) -> Result<bool> {
        Err(Error::Database("store offline".into()))
    }

    async fn exists(&self, _account_id: &AccountId, _listing_id: &ListingId) -> Result<bool> {
        Err(Error::Database("store offline".into()))
    }

    async fn listing_ids(&self, _account_id: &AccountId) -> Result<HashSet<ListingId>> {
        Err(Error::Database("store offline".into()))
    }

    async fn listings(&self, _account_id: &AccountId) -> Result<Vec<Listing>> {
        Err(Error::Database("store offline".into()))
    }
}

fn broken_actions() -> ListingActions<BrokenStore, BrokenStore, BrokenStore> {
    ListingActions::new(BrokenStore, BrokenStore, BrokenStore)
}

#[tokio::test]
async fn catalog_degrades_to_defaults_when_the_store_fails() {
    let actions = broken_actions();

    let envelope = actions.filter_catalog().await;
    assert!(!envelope.success);

    let catalog = envelope.data.expect("degraded catalog still carries data");
    assert!(catalog.makes.is_empty());
    assert!((catalog.price_range.max - 100_000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn search_failure_returns_an_error_envelope_with_no_partial_data() {
    let actions = broken_actions();

    let envelope = actions
        .filtered_listings(&FilterRequest::default(), None)
        .await;
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert!(envelope.error.is_some());
    assert!(envelope.pagination.is_none());
}

#[tokio::test]
async fn toggle_failure_is_abstracted_to_a_generic_message() {
    let actions = broken_actions();
    let caller = ExternalId::new("ext-1");

    let result = actions
        .toggle_saved(&ListingId::new("car-1"), Some(&caller))
        .await;

    match result {
        Err(Error::Database(message)) => assert_eq!(message, "failed to update favorites"),
        other => panic!("expected generic database error, got {other:?}"),
    }
}
