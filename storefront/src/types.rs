//! Domain types for the marketplace storefront.
//!
//! Everything here is an immutable value record: state transitions replace
//! whole values, they never mutate entities in place. The aggregate root is
//! [`AppState`]; [`AppAction`] is the closed set of transitions over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generates a string-backed id newtype with the usual accessors.
macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from any string-ish value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a user
    UserId
}

string_id! {
    /// Unique identifier for a city
    CityId
}

string_id! {
    /// Unique identifier for a category
    CategoryId
}

string_id! {
    /// Unique identifier for a listing
    ListingId
}

/// Active display language of the storefront
///
/// Exactly two languages exist; there is no "unset" value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Arabic
    Ar,
}

impl Language {
    /// The other language (header language toggle)
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Lowercase language code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bilingual text pair
///
/// Every user-visible name in the catalog carries both variants; views pick
/// one with [`LocalizedText::get`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English variant
    pub en: String,
    /// Arabic variant
    pub ar: String,
}

impl LocalizedText {
    /// Creates a bilingual pair
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The variant for the given language
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Geographic coordinates of a city
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// A registered user; `None` anywhere a user is optional means guest
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the account passed identity verification
    pub is_verified: bool,
}

/// A city listings can be posted in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Unique identifier
    pub id: CityId,
    /// Bilingual city name
    pub name: LocalizedText,
    /// Country the city belongs to
    pub country: String,
    /// Geographic coordinates
    pub coordinates: Coordinates,
}

/// A listing category, optionally with nested subcategories
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Bilingual category name
    pub name: LocalizedText,
    /// Icon glyph shown in the category grid
    pub icon: String,
    /// Number of live listings in the category
    pub count: u32,
    /// Nested subcategories, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Category>,
}

/// A marketplace listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique identifier
    pub id: ListingId,
    /// Bilingual title
    pub title: LocalizedText,
    /// Bilingual description
    pub description: LocalizedText,
    /// Asking price in whole currency units
    pub price: u64,
    /// ISO-ish currency code, e.g. `AED`
    pub currency: String,
    /// Image URLs, first one is the cover
    pub images: Vec<String>,
    /// Owning category
    pub category: Category,
    /// City the item is located in
    pub city: City,
    /// Posting user
    pub user: User,
    /// When the listing was first posted
    pub created_at: DateTime<Utc>,
    /// When the listing was last edited
    pub updated_at: DateTime<Utc>,
    /// Whether the seller accepts offers
    pub is_negotiable: bool,
    /// Whether the listing is promoted on the landing page
    pub is_featured: bool,
    /// View counter
    pub views: u64,
}

/// Result ordering for a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Most recently posted first
    #[default]
    #[serde(rename = "newest")]
    Newest,
    /// Cheapest first
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Most expensive first
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Best keyword match first
    #[serde(rename = "relevance")]
    Relevance,
}

impl SortBy {
    /// Wire name of the sort mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Relevance => "relevance",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current search criteria
///
/// Defaults to an unrestricted search: empty keyword, no category, city or
/// price constraints, newest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Free-text keyword, matched against both language variants
    pub keyword: String,
    /// Restrict to one category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Restrict to one city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<CityId>,
    /// Inclusive lower price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// Inclusive upper price bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Result ordering
    pub sort_by: SortBy,
}

impl SearchFilters {
    /// Shallow-merge a partial update onto these filters
    ///
    /// Fields the patch does not mention are left untouched. This is the one
    /// merge (rather than replace) transition in the whole state machine:
    /// filters are edited incrementally, one control at a time.
    pub fn apply(&mut self, patch: SearchFilterPatch) {
        if let Some(keyword) = patch.keyword {
            self.keyword = keyword;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(city_id) = patch.city_id {
            self.city_id = city_id;
        }
        if let Some(min_price) = patch.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = patch.max_price {
            self.max_price = max_price;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// A partial [`SearchFilters`] update
///
/// Distinguishes "leave this field alone" (builder method never called) from
/// "set it to this value", including setting an optional filter back to
/// `None`.
///
/// # Example
///
/// ```
/// use souq_storefront::types::{SearchFilterPatch, SearchFilters, SortBy};
///
/// let mut filters = SearchFilters::default();
/// filters.apply(SearchFilterPatch::new().with_keyword("phone"));
/// filters.apply(SearchFilterPatch::new().with_sort_by(SortBy::PriceLowToHigh));
///
/// assert_eq!(filters.keyword, "phone");
/// assert_eq!(filters.sort_by, SortBy::PriceLowToHigh);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilterPatch {
    keyword: Option<String>,
    category_id: Option<Option<CategoryId>>,
    city_id: Option<Option<CityId>>,
    min_price: Option<Option<u64>>,
    max_price: Option<Option<u64>>,
    sort_by: Option<SortBy>,
}

impl SearchFilterPatch {
    /// An empty patch; applying it changes nothing
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keyword: None,
            category_id: None,
            city_id: None,
            min_price: None,
            max_price: None,
            sort_by: None,
        }
    }

    /// Replace the keyword
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Set or clear the category restriction
    #[must_use]
    pub fn with_category_id(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set or clear the city restriction
    #[must_use]
    pub fn with_city_id(mut self, city_id: Option<CityId>) -> Self {
        self.city_id = Some(city_id);
        self
    }

    /// Set or clear the lower price bound
    #[must_use]
    pub const fn with_min_price(mut self, min_price: Option<u64>) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Set or clear the upper price bound
    #[must_use]
    pub const fn with_max_price(mut self, max_price: Option<u64>) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Replace the sort mode
    #[must_use]
    pub const fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// The aggregate root: everything the storefront shows
///
/// Constructed once per session with [`AppState::seeded`] and replaced
/// field-by-field through [`AppAction`] dispatches. `selected_city` is
/// always one of the seeded cities; there is no "no city" state after
/// initialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Signed-in user; `None` means guest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Active display language
    pub language: Language,
    /// City the storefront is browsing
    pub selected_city: City,
    /// Current search criteria
    pub search_filters: SearchFilters,
    /// Loaded listings
    pub listings: Vec<Listing>,
    /// Loaded categories
    pub categories: Vec<Category>,
    /// Whether a load is in flight
    pub is_loading: bool,
    /// Last error message, displayed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppState {
    /// Build the session-start state from a seed
    ///
    /// Defaults: first seeded city selected, English, unrestricted filters
    /// sorted by newest, no listings yet, full seeded category list, guest,
    /// not loading, no error.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::NoCities`] if the seed has no cities: the
    /// storefront cannot exist without a selected city, and a bad seed is a
    /// usage error that should fail at startup rather than surface later.
    pub fn seeded(seed: Seed) -> Result<Self, SeedError> {
        let Some(selected_city) = seed.cities.into_iter().next() else {
            return Err(SeedError::NoCities);
        };

        Ok(Self {
            user: None,
            language: Language::En,
            selected_city,
            search_filters: SearchFilters::default(),
            listings: Vec::new(),
            categories: seed.categories,
            is_loading: false,
            error: None,
        })
    }

    /// Whether the session is unauthenticated
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        self.user.is_none()
    }
}

/// Initialization data for [`AppState::seeded`]
///
/// Supplied by the hosting application; `catalog::demo_seed` provides the
/// built-in sample catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Known cities; the first becomes the selected city
    pub cities: Vec<City>,
    /// Full category tree shown in the grid
    pub categories: Vec<Category>,
}

/// Errors constructing the initial application state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The seed carried no cities, so no city can be selected
    #[error("seed contains no cities; a selected city is required")]
    NoCities,
}

/// All possible transitions over [`AppState`]
///
/// Actions are in-process values only; the storefront has no wire protocol
/// to serialize them for.
///
/// The navigation and favorite variants deliberately leave state untouched:
/// they are interaction stubs that only emit a log line, and they double as
/// the identity transition (dispatching one produces a state deep-equal to
/// the one before).
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Replace the signed-in user (`None` signs out)
    SetUser(Option<User>),
    /// Replace the active language
    SetLanguage(Language),
    /// Replace the selected city
    SetCity(City),
    /// Shallow-merge a partial filter update
    SetSearchFilters(SearchFilterPatch),
    /// Replace the loaded listings
    SetListings(Vec<Listing>),
    /// Replace the loaded categories
    SetCategories(Vec<Category>),
    /// Replace the loading flag
    SetLoading(bool),
    /// Replace the error message (`None` clears it)
    SetError(Option<String>),
    /// Category tile clicked; navigation is not implemented, log only
    CategoryOpened(CategoryId),
    /// Listing card clicked; navigation is not implemented, log only
    ListingOpened(ListingId),
    /// Favorite toggled on a listing card; not implemented, log only
    FavoriteToggled(ListingId),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn language_toggles_between_the_two_variants() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn localized_text_picks_variant_by_language() {
        let name = LocalizedText::new("Dubai", "دبي");
        assert_eq!(name.get(Language::En), "Dubai");
        assert_eq!(name.get(Language::Ar), "دبي");
    }

    #[test]
    fn sort_by_serializes_with_original_wire_names() {
        let json = serde_json::to_string(&SortBy::PriceLowToHigh).unwrap();
        assert_eq!(json, "\"price-low\"");

        let parsed: SortBy = serde_json::from_str("\"relevance\"").unwrap();
        assert_eq!(parsed, SortBy::Relevance);
    }

    #[test]
    fn language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    }

    #[test]
    fn app_state_round_trips_through_json() {
        let state = AppState::seeded(catalog::demo_seed()).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn empty_patch_is_a_no_op_merge() {
        let mut filters = SearchFilters::default();
        let before = filters.clone();
        filters.apply(SearchFilterPatch::new());
        assert_eq!(filters, before);
    }

    #[test]
    fn patch_can_clear_an_optional_filter() {
        let mut filters = SearchFilters {
            category_id: Some(CategoryId::new("1")),
            ..SearchFilters::default()
        };
        filters.apply(SearchFilterPatch::new().with_category_id(None));
        assert_eq!(filters.category_id, None);
    }

    #[test]
    fn seeded_state_uses_first_city_and_defaults() {
        let seed = catalog::demo_seed();
        let first_city = seed.cities[0].clone();
        let categories = seed.categories.clone();

        let state = AppState::seeded(seed).unwrap();

        assert_eq!(state.selected_city, first_city);
        assert_eq!(state.language, Language::En);
        assert_eq!(state.search_filters.keyword, "");
        assert_eq!(state.search_filters.sort_by, SortBy::Newest);
        assert!(state.listings.is_empty());
        assert_eq!(state.categories, categories);
        assert!(state.is_guest());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn seeding_without_cities_fails_fast() {
        let seed = Seed {
            cities: Vec::new(),
            categories: catalog::demo_categories(),
        };
        assert_eq!(AppState::seeded(seed), Err(SeedError::NoCities));
    }
}
