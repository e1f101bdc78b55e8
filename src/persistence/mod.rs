// * Persistence: stage artifacts, JSON file store and ordered deduplication

pub mod dedup;
pub mod schema;
pub mod store;

// * Re-exports for convenient access
pub use dedup::dedup_ordered;
pub use schema::{CleanedDocument, ScrapedRecord};
pub use store::{read_json, to_pretty_json, write_json, StoreError};
