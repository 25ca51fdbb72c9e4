//! Console demo for the storefront state layer.
//!
//! Plays through a browsing session against the built-in sample catalog:
//! seed the store, load listings, switch language and city, and run a
//! search - printing what a landing page would render after each step.

use souq_runtime::Store;
use souq_storefront::catalog;
use souq_storefront::query;
use souq_storefront::{AppAction, AppState, Language, SearchFilterPatch, StorefrontReducer};
use tracing_subscriber::EnvFilter;

fn print_landing_page(state: &AppState) {
    let language = state.language;
    println!(
        "\n[{}] Browsing {} ({})",
        language,
        state.selected_city.name.get(language),
        state.selected_city.country
    );

    println!("Categories:");
    for category in state.categories.iter().take(4) {
        println!(
            "  {} {} ({})",
            category.icon,
            category.name.get(language),
            category.count
        );
    }

    if state.is_loading {
        println!("Listings: loading...");
        return;
    }

    println!("Featured:");
    for listing in query::featured(&state.listings) {
        println!(
            "  {} - {} - {} views",
            listing.title.get(language),
            query::format_price(listing.price, &listing.currency),
            listing.views
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Souq Storefront Demo ===");

    let initial = AppState::seeded(catalog::demo_seed())?;
    let store = Store::new(initial, StorefrontReducer::new());

    let sub = store.subscribe(|state: &AppState| {
        tracing::info!(
            language = %state.language,
            city = %state.selected_city.name.en,
            listings = state.listings.len(),
            loading = state.is_loading,
            "state changed"
        );
    });

    // landing page before anything loads
    store.state(print_landing_page);

    // load the sample listings
    store.dispatch(AppAction::SetLoading(true));
    store.dispatch(AppAction::SetListings(catalog::demo_listings()));
    store.dispatch(AppAction::SetLoading(false));
    store.state(print_landing_page);

    // header interactions: switch language, then city
    store.dispatch(AppAction::SetLanguage(Language::Ar));
    store.dispatch(AppAction::SetCity(catalog::demo_cities()[1].clone()));
    store.state(print_landing_page);

    // search for the car within a price band
    store.dispatch(AppAction::SetSearchFilters(
        SearchFilterPatch::new()
            .with_keyword("camry")
            .with_min_price(Some(10_000))
            .with_max_price(Some(100_000)),
    ));

    let state = store.snapshot();
    let results = query::search(&state.listings, &state.search_filters);
    println!(
        "\nSearch '{}' -> {} result(s):",
        state.search_filters.keyword,
        results.len()
    );
    for listing in results {
        println!(
            "  {} - {}",
            listing.title.get(state.language),
            query::format_price(listing.price, &listing.currency)
        );
    }

    sub.unsubscribe();
    println!("\n=== Demo Complete ===");
    Ok(())
}
