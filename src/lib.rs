pub mod config;
pub mod listings;
pub mod models;

pub use config::Config;
pub use listings::{CriteriaError, InMemoryListingStore, ListingService, SearchCriteria};
pub use models::{ListingType, Location, NewProperty, Property, PropertyType, Seller};
