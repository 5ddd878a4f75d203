pub mod media;

pub use media::{CatalogItem, MediaKind, MediaLogEntry};
