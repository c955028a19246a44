pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DirectoryConfig;

pub use adapters::{BuiltinSource, FileSource, LocalStorage};
pub use app::{Session, ViewMode};
pub use crate::core::catalog::VenueCatalog;
pub use crate::core::engine::{select, ResultSummary};
pub use crate::core::vocabulary::Vocabulary;
pub use crate::core::{CriteriaChange, FilterCriteria, Venue, VenueId, VenueSource};
pub use domain::selection::Selection;
pub use utils::error::{DirectoryError, Result};
