//! Page category constants.
//!
//! Every section page declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_clients--list"`) and a
//! `data-page-category` with one of the constants below.

/// List of records with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";
