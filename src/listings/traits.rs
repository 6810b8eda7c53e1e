use crate::listings::types::SearchCriteria;
use crate::models::{NewProperty, Property};
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing backends.
/// The in-memory store implements it today; a networked backend can slot in later.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// All listings matching the criteria, in store order
    async fn list(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<Property>>;

    /// A single listing, or `None` if the id is unknown
    async fn get_by_id(&self, id: &str) -> Result<Option<Property>>;

    /// Store a new listing and return it with its id and listed date filled in
    async fn add(&self, property: NewProperty) -> Result<Property>;

    /// The first few listings, for the landing view
    async fn featured(&self) -> Result<Vec<Property>>;

    /// The newest listings first
    async fn recent(&self) -> Result<Vec<Property>>;

    /// Get the name of the backend
    fn backend_name(&self) -> &'static str;
}
