pub mod config;
pub mod errors;
pub mod handler;
pub mod store;
pub mod wiring;

pub use config::Config;
pub use errors::GatewayError;
pub use handler::{ItemIngestor, RawRecord};
pub use store::{ItemStore, MemoryStore, ScyllaStore, StoreError};

pub type Result<T> = core::result::Result<T, errors::GatewayError>;
