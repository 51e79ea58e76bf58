#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

#[doc(inline)]
pub use reviewkit_core::{
    CategoryFilter, FilterOutcome, Highlighted, ItemId, ItemRecord, NavSync, NavUpdate,
    PageConfig, Query, SearchResults, Section, Segment, Shortcut, active_section, filter,
    filter_with_limit, highlight, matches_category,
};
pub use reviewkit_core::{config, nav};
pub use reviewkit_debounce as debounce;

/// Browser backend, available when compiling for `wasm32`.
#[cfg(target_arch = "wasm32")]
pub use reviewkit_web as web;

pub mod prelude {
    //! Commonly used types for filtering and navigation.
    //!
    //! ```rust
    //! use reviewkit::prelude::*;
    //!
    //! let items = [ItemRecord::new("Nuclear Pores", "transport", "/pores.html")];
    //! assert_eq!(filter(&items, &Query::new("pore")).count(), 1);
    //! ```
    pub use super::{
        FilterOutcome, ItemRecord, NavSync, PageConfig, Query, SearchResults, Section, filter,
        highlight,
    };
    pub use super::debounce::{Debouncer, Scheduler};
}
