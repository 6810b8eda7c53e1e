//! Integration tests for the in-memory listing store against the sample data.

use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use listing_store::{
    Config, InMemoryListingStore, ListingService, ListingType, Location, NewProperty, Property,
    PropertyType, SearchCriteria, Seller,
};
use std::time::Duration;

fn seeded() -> InMemoryListingStore {
    InMemoryListingStore::seeded(&Config::default())
}

fn ids(properties: &[Property]) -> Vec<&str> {
    properties.iter().map(|p| p.id.as_str()).collect()
}

fn submission(title: &str) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: "A freshly submitted listing for testing".to_string(),
        price: 320_000.0,
        bedrooms: 2,
        bathrooms: 1.5,
        size: 1100.0,
        property_type: PropertyType::Condo,
        listing_type: ListingType::Sale,
        features: vec![],
        images: vec![],
        location: Location {
            address: "10 Test Rd".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip_code: "97201".to_string(),
            country: "USA".to_string(),
            latitude: None,
            longitude: None,
        },
        seller: Seller {
            id: "current-user".to_string(),
            name: "Test Seller".to_string(),
            email: "seller@example.com".to_string(),
            phone: "(503) 555-0100".to_string(),
        },
    }
}

#[tokio::test]
async fn no_criteria_returns_everything_in_store_order() {
    let store = seeded();

    let all = store.list(None).await.unwrap();
    assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5", "6"]);

    let empty = store.list(Some(&SearchCriteria::default())).await.unwrap();
    assert_eq!(all, empty);
}

#[tokio::test]
async fn filters_by_property_type() {
    let store = seeded();
    let criteria = SearchCriteria {
        property_type: Some(PropertyType::House),
        ..Default::default()
    };

    let houses = store.list(Some(&criteria)).await.unwrap();
    assert_eq!(ids(&houses), vec!["2", "4", "6"]);
    assert!(houses.iter().all(|p| p.property_type == PropertyType::House));
}

#[tokio::test]
async fn rentals_under_cap() {
    let store = seeded();
    let criteria = SearchCriteria::from_query("listingType=rent&maxPrice=2000").unwrap();

    let rentals = store.list(Some(&criteria)).await.unwrap();
    assert_eq!(ids(&rentals), vec!["5"]);
}

#[tokio::test]
async fn location_matches_state_city_address_or_zip() {
    let store = seeded();

    let by_state = SearchCriteria::from_query("location=FL").unwrap();
    assert_eq!(ids(&store.list(Some(&by_state)).await.unwrap()), vec!["1"]);

    let by_city = SearchCriteria::from_query("location=lake+tahoe").unwrap();
    assert_eq!(ids(&store.list(Some(&by_city)).await.unwrap()), vec!["4"]);

    let by_zip = SearchCriteria::from_query("location=02108").unwrap();
    assert_eq!(ids(&store.list(Some(&by_zip)).await.unwrap()), vec!["5"]);

    // "456" appears in two street addresses
    let by_address = SearchCriteria::from_query("location=456").unwrap();
    assert_eq!(ids(&store.list(Some(&by_address)).await.unwrap()), vec!["2", "6"]);
}

#[tokio::test]
async fn location_is_anded_with_other_dimensions() {
    let store = seeded();
    let criteria = SearchCriteria::from_query("location=456&propertyType=house&minPrice=500000")
        .unwrap();

    assert_eq!(ids(&store.list(Some(&criteria)).await.unwrap()), vec!["2"]);
}

#[tokio::test]
async fn numeric_bounds_hold_for_every_result() {
    let store = seeded();
    let criteria = SearchCriteria {
        min_price: Some(2_000.0),
        max_price: Some(900_000.0),
        min_bedrooms: Some(1),
        min_bathrooms: Some(1.5),
        ..Default::default()
    };

    let results = store.list(Some(&criteria)).await.unwrap();
    assert_eq!(ids(&results), vec!["1", "2", "6"]);
    for p in &results {
        assert!(p.price >= 2_000.0 && p.price <= 900_000.0);
        assert!(p.bedrooms >= 1);
        assert!(p.bathrooms >= 1.5);
    }
}

#[tokio::test]
async fn bathrooms_are_at_least() {
    let store = seeded();
    let criteria = SearchCriteria::from_query("bathrooms=3").unwrap();

    assert_eq!(ids(&store.list(Some(&criteria)).await.unwrap()), vec!["2", "4"]);
}

#[tokio::test]
async fn unmatched_criteria_yield_empty() {
    let store = seeded();
    let criteria = SearchCriteria::from_query("propertyType=land").unwrap();

    assert!(store.list(Some(&criteria)).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_id_is_none() {
    let store = seeded();

    assert!(store.get_by_id("999").await.unwrap().is_none());
    let found = store.get_by_id("3").await.unwrap().unwrap();
    assert_eq!(found.title, "Downtown Loft with City Views");
}

#[tokio::test]
async fn add_assigns_fresh_id_and_listed_date() {
    let store = seeded();
    let before = Utc::now();

    let stored = store.add(submission("Test")).await.unwrap();

    assert_eq!(stored.id, "7");
    assert_eq!(store.len().await, 7);
    assert!(stored.features.is_empty());
    assert_eq!(stored.images.len(), 1);
    assert!(stored.listed_date >= before);
    assert!(stored.listed_date - before < ChronoDuration::seconds(5));

    let fetched = store.get_by_id(&stored.id).await.unwrap();
    assert_eq!(fetched, Some(stored));
}

#[tokio::test]
async fn add_never_reuses_ids() {
    let mut listings = listing_store::listings::seed::sample_listings();
    // a gap in the ids means store size + 1 is already taken
    listings.remove(0);
    let store = InMemoryListingStore::with_listings(listings, &Config::default());

    let first = store.add(submission("First")).await.unwrap();
    let second = store.add(submission("Second")).await.unwrap();

    assert_eq!(first.id, "7");
    assert_eq!(second.id, "8");
    assert_eq!(store.len().await, 7);

    let all = store.list(None).await.unwrap();
    let mut seen: Vec<&str> = ids(&all);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), all.len());
}

#[tokio::test]
async fn added_listings_are_filterable() {
    let store = seeded();
    store.add(submission("Portland Condo")).await.unwrap();

    let criteria = SearchCriteria::from_query("location=portland").unwrap();
    let results = store.list(Some(&criteria)).await.unwrap();
    assert_eq!(ids(&results), vec!["7"]);
}

#[tokio::test]
async fn featured_is_the_first_three() {
    let store = seeded();

    let featured = store.featured().await.unwrap();
    assert_eq!(ids(&featured), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn recent_is_newest_first() {
    let store = seeded();

    let recent = store.recent().await.unwrap();
    assert_eq!(ids(&recent), vec!["3", "5", "6", "2"]);
    assert!(recent
        .windows(2)
        .all(|pair| pair[0].listed_date >= pair[1].listed_date));
}

#[tokio::test]
async fn recent_keeps_store_order_on_ties() {
    let same_day = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut listings = listing_store::listings::seed::sample_listings();
    for p in listings.iter_mut() {
        p.listed_date = same_day;
    }
    let store = InMemoryListingStore::with_listings(listings, &Config::default());

    let recent = store.recent().await.unwrap();
    assert_eq!(ids(&recent), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn slice_sizes_follow_config() {
    let config = Config {
        featured_count: 1,
        recent_count: 2,
        ..Default::default()
    };
    let store = InMemoryListingStore::seeded(&config);

    assert_eq!(ids(&store.featured().await.unwrap()), vec!["1"]);
    assert_eq!(ids(&store.recent().await.unwrap()), vec!["3", "5"]);
}

#[tokio::test]
async fn abandoned_query_leaves_store_untouched() {
    let config = Config {
        latency: Duration::from_millis(200),
        ..Default::default()
    };
    let store = InMemoryListingStore::seeded(&config);

    let abandoned = tokio::time::timeout(Duration::from_millis(10), store.add(submission("Gone"))).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(store.len().await, 6);
}

#[tokio::test]
async fn backend_name_is_reported() {
    let store = InMemoryListingStore::new(&Config::default());
    assert_eq!(store.backend_name(), "in-memory");
    assert!(store.is_empty().await);
}
