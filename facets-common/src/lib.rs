//! Filter panel logic for storefront faceted search.
//!
//! Selected filters live in two positional query parameters: `map` holds one
//! symbol per selected value (`c` category, `b` brand, `priceFrom` price
//! range, or an opaque specification-filter token) and `rest` holds the
//! values themselves, aligned with the trailing `map` symbols.

pub mod category_tree;
pub mod encoder;
pub mod filter_type;
pub mod link;
pub mod messages;
pub mod options;
pub mod pages;
pub mod panel;
pub mod query;
pub mod settings;

pub use category_tree::{format_categories_tree, CategoryTreeNode, FlatCategory};
pub use encoder::{base_map, FilterSelection, FilterState};
pub use filter_type::FilterType;
pub use link::{slug_from_link, specification_filter_from_link};
pub use messages::{CatalogError, MessageCatalog};
pub use options::{mount_options, FacetOption, MountedOption};
pub use pages::{pages_args, NavigationTarget, PageKind, PagesArgs, SORT_OPTIONS};
pub use panel::{FacetWindow, FilterGroup, FilterPanel, FACETS_RENDER_THRESHOLD};
pub use query::{LinkQuery, NavigationQuery, QueryError};
pub use settings::{FacetSettings, OpenFiltersMode, SettingsError};
