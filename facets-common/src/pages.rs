//! Storefront page kinds, sort options and filter navigation targets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::encoder::{FilterSelection, FilterState};
use crate::filter_type::FilterType;
use crate::query::NavigationQuery;

/// Sort option offered by the search result page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub value: &'static str,
    /// Message id of the option label
    pub label: &'static str,
}

/// Available sort orders. The first one is the default and is left out of links.
pub const SORT_OPTIONS: [SortOption; 7] = [
    SortOption {
        value: "OrderByTopSaleDESC",
        label: "store/ordenation.sales",
    },
    SortOption {
        value: "OrderByReleaseDateDESC",
        label: "store/ordenation.release.date",
    },
    SortOption {
        value: "OrderByBestDiscountDESC",
        label: "store/ordenation.discount",
    },
    SortOption {
        value: "OrderByPriceDESC",
        label: "store/ordenation.price.descending",
    },
    SortOption {
        value: "OrderByPriceASC",
        label: "store/ordenation.price.ascending",
    },
    SortOption {
        value: "OrderByNameASC",
        label: "store/ordenation.name.ascending",
    },
    SortOption {
        value: "OrderByNameDESC",
        label: "store/ordenation.name.descending",
    },
];

pub fn default_sort_order() -> &'static str {
    SORT_OPTIONS[0].value
}

/// Page the filter panel is rendered on, from its `pagesPath`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageKind {
    Department,
    Category,
    Subcategory,
    /// Search pages and any other route
    #[default]
    Search,
    Other(String),
}

impl PageKind {
    pub fn as_str(&self) -> &str {
        match self {
            PageKind::Department => "store/department",
            PageKind::Category => "store/category",
            PageKind::Subcategory => "store/subcategory",
            PageKind::Search => "store/search",
            PageKind::Other(path) => path,
        }
    }

    /// Category levels the route itself already occupies in `map`, used
    /// when removing a category filter.
    pub fn category_skip(&self) -> usize {
        match self {
            PageKind::Department => 1,
            PageKind::Category => 2,
            PageKind::Subcategory => 3,
            PageKind::Search | PageKind::Other(_) => 0,
        }
    }
}

impl From<&str> for PageKind {
    fn from(path: &str) -> Self {
        match path {
            "store/department" => PageKind::Department,
            "store/category" => PageKind::Category,
            "store/subcategory" => PageKind::Subcategory,
            "store/search" => PageKind::Search,
            other => PageKind::Other(other.to_string()),
        }
    }
}

impl From<String> for PageKind {
    fn from(path: String) -> Self {
        PageKind::from(path.as_str())
    }
}

impl From<PageKind> for String {
    fn from(kind: PageKind) -> Self {
        kind.as_str().to_string()
    }
}

fn default_page_number() -> u32 {
    1
}

/// A click on a filter option, as sent by the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesArgs {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(default)]
    pub rest: Vec<String>,
    #[serde(default)]
    pub map: Vec<String>,
    /// Route params, passed through untouched
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default)]
    pub order_by: Option<String>,
    /// Category path of the option
    #[serde(default)]
    pub path: String,
    /// Option name, used as its slug
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default)]
    pub pages_path: PageKind,
    #[serde(default)]
    pub is_unselect_link: bool,
}

/// Where a filter link navigates to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTarget {
    pub page: PageKind,
    pub params: BTreeMap<String, String>,
    pub order_by: Option<String>,
    pub query: NavigationQuery,
}

/// Navigation target for selecting, or unselecting, a filter option.
///
/// The page number is left out unless it differs from the first page, and
/// the order unless it differs from the default sort.
pub fn pages_args(args: &PagesArgs) -> NavigationTarget {
    let current = FilterState::new(args.map.clone(), args.rest.clone());
    let selection = FilterSelection {
        filter_type: args.filter_type,
        slug: &args.name,
        link: &args.link,
        path: &args.path,
        page: &args.pages_path,
    };

    let FilterState { map, rest } = if args.is_unselect_link {
        current.remove_filter(&selection)
    } else {
        current.add_filter(&selection)
    };

    NavigationTarget {
        page: args.pages_path.clone(),
        params: args.params.clone(),
        order_by: args.order_by.clone(),
        query: NavigationQuery {
            map,
            page: (args.page_number != 1).then_some(args.page_number),
            order: args
                .order_by
                .clone()
                .filter(|order| order != default_sort_order()),
            rest,
        },
    }
}
