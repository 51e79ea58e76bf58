//! # reviewkit core
//!
//! DOM-free logic behind the reviewkit page enhancements. Everything here is a
//! pure function of its inputs so the browser backend can recompute on every
//! event without retaining state.
//!
//! ```
//! use reviewkit_core::{ItemRecord, Query, filter};
//!
//! let items = vec![
//!     ItemRecord::new("Fission Basics", "intro to fission", "/reviews/fission.html"),
//!     ItemRecord::new("Cell Repair", "DNA repair mechanisms", "/reviews/repair.html"),
//! ];
//!
//! let outcome = filter(&items, &Query::new("fission"));
//! assert_eq!(outcome.count(), 1);
//! assert_eq!(outcome.matches()[0].title(), "Fission Basics");
//! ```

mod category;
pub mod config;
mod filter;
pub mod highlight;
mod item;
pub mod keyboard;
pub mod nav;
mod query;
pub mod render;

pub use category::{CategoryFilter, matches_category};
pub use config::PageConfig;
pub use filter::{DEFAULT_PREVIEW_LIMIT, FilterOutcome, filter, filter_with_limit};
pub use highlight::{Highlighted, Segment, highlight};
pub use item::{ItemId, ItemRecord};
pub use keyboard::Shortcut;
pub use nav::{NavSync, NavUpdate, Section, active_section};
pub use query::Query;
pub use render::SearchResults;
