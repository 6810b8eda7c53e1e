use crate::config::Config;
use crate::listings::seed::sample_listings;
use crate::listings::traits::ListingService;
use crate::listings::types::SearchCriteria;
use crate::models::{NewProperty, Property};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// In-memory listing store.
///
/// Records are only ever appended; nothing is updated or removed once stored.
pub struct InMemoryListingStore {
    listings: RwLock<Vec<Property>>,
    featured_count: usize,
    recent_count: usize,
    latency: Duration,
}

impl InMemoryListingStore {
    /// Create an empty store
    pub fn new(config: &Config) -> Self {
        Self::with_listings(Vec::new(), config)
    }

    /// Create a store holding the sample listings
    pub fn seeded(config: &Config) -> Self {
        Self::with_listings(sample_listings(), config)
    }

    /// Create a store holding the given listings, in the given order
    pub fn with_listings(listings: Vec<Property>, config: &Config) -> Self {
        info!("Listing store ready with {} listings", listings.len());

        Self {
            listings: RwLock::new(listings),
            featured_count: config.featured_count,
            recent_count: config.recent_count,
            latency: config.latency,
        }
    }

    /// Number of stored listings
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Next free id: store size + 1, bumped past anything already taken.
fn next_id(listings: &[Property]) -> String {
    let mut candidate = listings.len() + 1;
    loop {
        let id = candidate.to_string();
        if !listings.iter().any(|p| p.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[async_trait]
impl ListingService for InMemoryListingStore {
    async fn list(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<Property>> {
        self.simulate_latency().await;

        let listings = self.listings.read().await;
        let matched: Vec<Property> = match criteria {
            Some(criteria) => listings
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect(),
            None => listings.clone(),
        };

        debug!(
            "{} of {} listings matched {:?}",
            matched.len(),
            listings.len(),
            criteria
        );
        Ok(matched)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Property>> {
        self.simulate_latency().await;

        let listings = self.listings.read().await;
        let found = listings.iter().find(|p| p.id == id).cloned();
        if found.is_none() {
            debug!("No listing with id {}", id);
        }
        Ok(found)
    }

    async fn add(&self, property: NewProperty) -> Result<Property> {
        self.simulate_latency().await;

        let mut listings = self.listings.write().await;
        let id = next_id(&listings);
        let stored = Property::from_new(property, id, Utc::now());
        listings.push(stored.clone());

        info!("Added listing {} ({})", stored.id, stored.title);
        Ok(stored)
    }

    async fn featured(&self) -> Result<Vec<Property>> {
        self.simulate_latency().await;

        let listings = self.listings.read().await;
        Ok(listings.iter().take(self.featured_count).cloned().collect())
    }

    async fn recent(&self) -> Result<Vec<Property>> {
        self.simulate_latency().await;

        let mut sorted = self.listings.read().await.clone();
        // sort_by is stable, so equal dates keep store order
        sorted.sort_by(|a, b| b.listed_date.cmp(&a.listed_date));
        sorted.truncate(self.recent_count);
        Ok(sorted)
    }

    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}
