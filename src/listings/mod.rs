pub mod seed;
pub mod store;
pub mod traits;
pub mod types;

pub use store::InMemoryListingStore;
pub use traits::ListingService;
pub use types::{CriteriaError, SearchCriteria};
