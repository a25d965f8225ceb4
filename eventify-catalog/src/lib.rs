pub mod catalog;
pub mod draft;
pub mod event;
pub mod query;
pub mod stats;

pub use catalog::{CatalogError, EventCatalog};
pub use draft::{DraftError, EventDraft};
pub use event::{Category, Event};
pub use query::{query, CategoryFilter, EventQuery, SortOrder, ALL_EVENTS};
pub use stats::CatalogStats;
