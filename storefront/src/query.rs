//! Read-side helpers over the loaded listings.
//!
//! Views never mutate state; these selectors compute what the landing page
//! shows (featured carousel, search results, price labels) from snapshots.

use crate::types::{Listing, LocalizedText, SearchFilters, SortBy};

/// Listings promoted on the landing page, most viewed first
#[must_use]
pub fn featured(listings: &[Listing]) -> Vec<&Listing> {
    let mut promoted: Vec<&Listing> = listings.iter().filter(|l| l.is_featured).collect();
    promoted.sort_by(|a, b| b.views.cmp(&a.views));
    promoted
}

/// Apply the current search filters and sort mode to the loaded listings
///
/// The keyword is matched case-insensitively against both language variants
/// of title and description; price bounds are inclusive.
#[must_use]
pub fn search<'a>(listings: &'a [Listing], filters: &SearchFilters) -> Vec<&'a Listing> {
    let keyword = filters.keyword.trim().to_lowercase();

    let mut results: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches(listing, filters, &keyword))
        .collect();

    match filters.sort_by {
        SortBy::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::PriceLowToHigh => results.sort_by_key(|listing| listing.price),
        SortBy::PriceHighToLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::Relevance => results.sort_by(|a, b| {
            relevance(b, &keyword)
                .cmp(&relevance(a, &keyword))
                .then_with(|| b.views.cmp(&a.views))
        }),
    }

    results
}

/// Display string for a price, grouped by thousands: `AED 65,000`
#[must_use]
pub fn format_price(price: u64, currency: &str) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{currency} {grouped}")
}

fn matches(listing: &Listing, filters: &SearchFilters, keyword: &str) -> bool {
    if !keyword.is_empty() && !text_matches(listing, keyword) {
        return false;
    }
    if let Some(category_id) = &filters.category_id {
        if &listing.category.id != category_id {
            return false;
        }
    }
    if let Some(city_id) = &filters.city_id {
        if &listing.city.id != city_id {
            return false;
        }
    }
    if let Some(min_price) = filters.min_price {
        if listing.price < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if listing.price > max_price {
            return false;
        }
    }
    true
}

fn text_matches(listing: &Listing, keyword: &str) -> bool {
    contains(&listing.title, keyword) || contains(&listing.description, keyword)
}

fn contains(text: &LocalizedText, keyword: &str) -> bool {
    text.en.to_lowercase().contains(keyword) || text.ar.to_lowercase().contains(keyword)
}

/// Title matches outrank description-only matches
fn relevance(listing: &Listing, keyword: &str) -> u8 {
    if keyword.is_empty() {
        return 0;
    }
    let mut score = 0;
    if contains(&listing.title, keyword) {
        score += 2;
    }
    if contains(&listing.description, keyword) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{CategoryId, CityId};

    #[test]
    fn featured_keeps_only_promoted_listings() {
        let listings = catalog::demo_listings();
        let promoted = featured(&listings);

        assert_eq!(promoted.len(), 1);
        assert_eq!(promoted[0].id.as_str(), "1");
    }

    #[test]
    fn empty_filters_return_everything_newest_first() {
        let listings = catalog::demo_listings();
        let results = search(&listings, &SearchFilters::default());

        assert_eq!(results.len(), 2);
        // listing 1 was posted after listing 2
        assert_eq!(results[0].id.as_str(), "1");
        assert_eq!(results[1].id.as_str(), "2");
    }

    #[test]
    fn keyword_matches_both_language_variants() {
        let listings = catalog::demo_listings();

        let english = SearchFilters {
            keyword: "camry".to_owned(),
            ..SearchFilters::default()
        };
        let results = search(&listings, &english);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "1");

        let arabic = SearchFilters {
            keyword: "شقة".to_owned(),
            ..SearchFilters::default()
        };
        let results = search(&listings, &arabic);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "2");
    }

    #[test]
    fn category_and_city_filters_restrict_results() {
        let listings = catalog::demo_listings();

        let cars = SearchFilters {
            category_id: Some(CategoryId::new("1")),
            ..SearchFilters::default()
        };
        assert_eq!(search(&listings, &cars).len(), 1);

        let elsewhere = SearchFilters {
            city_id: Some(CityId::new("3")),
            ..SearchFilters::default()
        };
        assert!(search(&listings, &elsewhere).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let listings = catalog::demo_listings();

        let exact = SearchFilters {
            min_price: Some(65_000),
            max_price: Some(65_000),
            ..SearchFilters::default()
        };
        let results = search(&listings, &exact);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 65_000);
    }

    #[test]
    fn price_sort_modes_order_by_price() {
        let listings = catalog::demo_listings();

        let ascending = SearchFilters {
            sort_by: SortBy::PriceLowToHigh,
            ..SearchFilters::default()
        };
        let results = search(&listings, &ascending);
        assert!(results[0].price <= results[1].price);

        let descending = SearchFilters {
            sort_by: SortBy::PriceHighToLow,
            ..SearchFilters::default()
        };
        let results = search(&listings, &descending);
        assert!(results[0].price >= results[1].price);
    }

    #[test]
    fn relevance_ranks_title_matches_above_description_matches() {
        let mut listings = catalog::demo_listings();
        // "apartment" appears in listing 2's title; force a description-only
        // match on listing 1
        listings[0].description.en.push_str(" Trade-in against an apartment considered.");

        let filters = SearchFilters {
            keyword: "apartment".to_owned(),
            sort_by: SortBy::Relevance,
            ..SearchFilters::default()
        };
        let results = search(&listings, &filters);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id.as_str(), "2");
        assert_eq!(results[1].id.as_str(), "1");
    }

    #[test]
    fn prices_format_with_thousands_groups() {
        assert_eq!(format_price(65_000, "AED"), "AED 65,000");
        assert_eq!(format_price(1_234_567, "USD"), "USD 1,234,567");
        assert_eq!(format_price(999, "AED"), "AED 999");
        assert_eq!(format_price(0, "AED"), "AED 0");
    }
}
