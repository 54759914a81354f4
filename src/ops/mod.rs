pub mod query;
pub mod stats;
pub mod store;
