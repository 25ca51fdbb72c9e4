//! Reducer logic for the storefront aggregate.
//!
//! Each action replaces exactly the field (or field group, for filters) it
//! names and leaves everything else untouched. No action validates its
//! payload and no action can fail: the reducer is total over well-typed
//! input.

use crate::types::{AppAction, AppState};
use souq_core::reducer::Reducer;

/// Reducer for the storefront aggregate
#[derive(Clone, Copy, Debug, Default)]
pub struct StorefrontReducer;

impl StorefrontReducer {
    /// Creates a new `StorefrontReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for StorefrontReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, state: &mut AppState, action: AppAction) {
        match action {
            AppAction::SetUser(user) => state.user = user,
            AppAction::SetLanguage(language) => state.language = language,
            AppAction::SetCity(city) => state.selected_city = city,
            AppAction::SetSearchFilters(patch) => state.search_filters.apply(patch),
            AppAction::SetListings(listings) => state.listings = listings,
            AppAction::SetCategories(categories) => state.categories = categories,
            AppAction::SetLoading(is_loading) => state.is_loading = is_loading,
            AppAction::SetError(error) => state.error = error,

            // Interaction stubs: routing and favorites are not implemented,
            // these log and leave state untouched.
            AppAction::CategoryOpened(id) => {
                tracing::debug!(category = %id, "navigate to category");
            }
            AppAction::ListingOpened(id) => {
                tracing::debug!(listing = %id, "navigate to listing");
            }
            AppAction::FavoriteToggled(id) => {
                tracing::debug!(listing = %id, "toggle favorite");
            }
        }
    }
}
