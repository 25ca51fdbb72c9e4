//! Built-in sample catalog.
//!
//! The storefront has no backend; this module is the initialization
//! collaborator that supplies the fixed city list, category tree, sample
//! user, and sample listings the demo renders.

use crate::types::{
    Category, CategoryId, City, CityId, Coordinates, Listing, ListingId, LocalizedText, Seed,
    User, UserId,
};
use chrono::{DateTime, Utc};

/// The four launch cities
#[must_use]
pub fn demo_cities() -> Vec<City> {
    vec![
        city("1", "Dubai", "دبي", "UAE", 25.2048, 55.2708),
        city("2", "Riyadh", "الرياض", "Saudi Arabia", 24.7136, 46.6753),
        city("3", "Cairo", "القاهرة", "Egypt", 30.0444, 31.2357),
        city("4", "Amman", "عمان", "Jordan", 31.9454, 35.9284),
    ]
}

/// The full top-level category grid
#[must_use]
pub fn demo_categories() -> Vec<Category> {
    vec![
        category("1", "Cars", "السيارات", "🚗", 1250),
        category("2", "Real Estate", "العقارات", "🏠", 892),
        category("3", "Electronics", "الإلكترونيات", "📱", 567),
        category("4", "Jobs", "الوظائف", "💼", 423),
        category("5", "Fashion", "الأزياء", "👗", 734),
        category("6", "Furniture", "الأثاث", "🪑", 289),
        category("7", "Sports", "الرياضة", "⚽", 156),
        category("8", "Books", "الكتب", "📚", 198),
        category("9", "Pets", "الحيوانات الأليفة", "🐕", 87),
        category("10", "Services", "الخدمات", "🔧", 445),
        category("11", "Motorcycles", "الدراجات النارية", "🏍️", 167),
        category("12", "Games", "الألعاب", "🎮", 234),
        category("13", "Beauty", "الجمال", "💄", 123),
        category("14", "Kitchen", "المطبخ", "🍳", 178),
        category("15", "Baby Items", "مستلزمات الأطفال", "🍼", 145),
        category("16", "Other", "أخرى", "📦", 312),
    ]
}

/// The sample verified seller
#[must_use]
pub fn demo_user() -> User {
    User {
        id: UserId::new("1"),
        name: "Ahmed Al-Rashid".to_owned(),
        email: "ahmed@example.com".to_owned(),
        avatar: Some(
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150"
                .to_owned(),
        ),
        phone: None,
        is_verified: true,
    }
}

/// The two sample listings shown on the landing page
#[must_use]
pub fn demo_listings() -> Vec<Listing> {
    let categories = demo_categories();
    let cities = demo_cities();
    let user = demo_user();

    vec![
        Listing {
            id: ListingId::new("1"),
            title: LocalizedText::new(
                "2019 Toyota Camry - Excellent Condition",
                "تويوتا كامري 2019 - حالة ممتازة",
            ),
            description: LocalizedText::new(
                "Well-maintained Toyota Camry with low mileage. Perfect for daily use.",
                "تويوتا كامري محافظ عليها مع عدد كيلومترات قليل. مثالية للاستخدام اليومي.",
            ),
            price: 65_000,
            currency: "AED".to_owned(),
            images: vec![
                "https://images.pexels.com/photos/116675/pexels-photo-116675.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_owned(),
                "https://images.pexels.com/photos/193999/pexels-photo-193999.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_owned(),
            ],
            category: categories[0].clone(),
            city: cities[0].clone(),
            user: user.clone(),
            created_at: timestamp("2024-01-15T10:30:00Z"),
            updated_at: timestamp("2024-01-15T10:30:00Z"),
            is_negotiable: true,
            is_featured: true,
            views: 1250,
        },
        Listing {
            id: ListingId::new("2"),
            title: LocalizedText::new(
                "Spacious 3BR Apartment in Downtown",
                "شقة 3 غرف واسعة في وسط المدينة",
            ),
            description: LocalizedText::new(
                "Modern apartment with city view, fully furnished, ready to move in.",
                "شقة حديثة مع إطلالة على المدينة، مفروشة بالكامل، جاهزة للسكن.",
            ),
            price: 120_000,
            currency: "AED".to_owned(),
            images: vec![
                "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_owned(),
                "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_owned(),
            ],
            category: categories[1].clone(),
            city: cities[0].clone(),
            user,
            created_at: timestamp("2024-01-14T15:20:00Z"),
            updated_at: timestamp("2024-01-14T15:20:00Z"),
            is_negotiable: false,
            is_featured: false,
            views: 892,
        },
    ]
}

/// Everything [`crate::types::AppState::seeded`] needs
#[must_use]
pub fn demo_seed() -> Seed {
    Seed {
        cities: demo_cities(),
        categories: demo_categories(),
    }
}

fn city(id: &str, en: &str, ar: &str, country: &str, lat: f64, lng: f64) -> City {
    City {
        id: CityId::new(id),
        name: LocalizedText::new(en, ar),
        country: country.to_owned(),
        coordinates: Coordinates { lat, lng },
    }
}

fn category(id: &str, en: &str, ar: &str, icon: &str, count: u32) -> Category {
    Category {
        id: CategoryId::new(id),
        name: LocalizedText::new(en, ar),
        icon: icon.to_owned(),
        count,
        subcategories: Vec::new(),
    }
}

/// Parse a catalog timestamp known at compile time
///
/// # Panics
///
/// Panics if the hardcoded timestamp fails to parse, which should never
/// happen in practice.
#[allow(clippy::expect_used)]
fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("hardcoded timestamp should always parse")
        .with_timezone(&Utc)
}
