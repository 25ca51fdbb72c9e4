//! Marketplace storefront domain: state, actions, reducer, and seed catalog.
//!
//! This crate holds the entire logic layer of the storefront:
//!
//! - Value-record data model ([`types`]): users, cities, categories,
//!   listings, search filters
//! - The aggregate root [`types::AppState`] and its closed action set
//!   [`types::AppAction`]
//! - [`reducer::StorefrontReducer`]: the pure transition function
//! - [`catalog`]: the built-in sample catalog the storefront is seeded with
//! - [`query`]: read-side selectors (featured carousel, search, price labels)
//!
//! Views live elsewhere; they only read snapshots and dispatch actions.
//!
//! # Quick Start
//!
//! ```
//! use souq_runtime::Store;
//! use souq_storefront::catalog;
//! use souq_storefront::reducer::StorefrontReducer;
//! use souq_storefront::types::{AppAction, AppState, Language};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let initial = AppState::seeded(catalog::demo_seed())?;
//! let store = Store::new(initial, StorefrontReducer::new());
//!
//! store.dispatch(AppAction::SetLanguage(Language::Ar));
//! store.dispatch(AppAction::SetListings(catalog::demo_listings()));
//!
//! assert_eq!(store.state(|s| s.language), Language::Ar);
//! assert_eq!(store.state(|s| s.listings.len()), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod query;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::StorefrontReducer;
pub use types::{
    AppAction, AppState, Category, CategoryId, City, CityId, Language, Listing, ListingId,
    LocalizedText, SearchFilterPatch, SearchFilters, Seed, SeedError, SortBy, User, UserId,
};
