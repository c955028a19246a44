// Adapters layer: concrete implementations for data sources, storage and the map provider.

pub mod builtin;
pub mod loader;
pub mod map;
pub mod storage;

pub use builtin::BuiltinSource;
pub use loader::{FileSource, VenueFormat};
pub use storage::LocalStorage;
