//! Slugsmith — transliterating slug derivation for title fields.
//!
//! Pure Rust library providing:
//! - Slugification (table transliteration + CJK/symbol stripping + separator collapse)
//! - The built-in substitution table (Latin, Greek, Cyrillic, Vietnamese, currency, symbols)
//! - Sync toggle state for widgets that mirror a title into a slug field
//! - A validated `Slug` value type

pub mod error;
pub mod options;
pub mod registry;
pub mod slug;
pub mod slugify;
pub mod sync;
pub mod table;

// Re-export main types at crate root for convenience
pub use error::{SlugError, TableError};
pub use options::SlugOptions;
pub use registry::WidgetRegistry;
pub use slug::Slug;
pub use slugify::{slugify, Slugifier};
pub use sync::{SlugState, SyncState};
pub use table::SubstitutionTable;
