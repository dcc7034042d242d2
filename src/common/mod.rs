pub mod connection_cache;
pub mod types;

pub use connection_cache::ConnectionCache;
pub use types::*;
