//! Positional `map`/`rest` encoding of selected filters.
//!
//! Each `rest` value is a slug and lines up with one of the trailing `map`
//! symbols, e.g. `map=c,c,b&rest=lg` on `/electronics/smartphones`: the two
//! leading `c` come from the route, `b` belongs to `lg`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::filter_type::{FilterType, CATEGORY_SYMBOL};
use crate::link::specification_filter_from_link;
use crate::pages::PageKind;
use crate::query::split_values;

/// Selected filters as the aligned `map` and `rest` sequences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub map: Vec<String>,
    pub rest: Vec<String>,
}

/// The filter option being selected or unselected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection<'a> {
    pub filter_type: FilterType,
    pub slug: &'a str,
    /// Option link, needed to resolve specification filter symbols
    pub link: &'a str,
    /// `/`-separated category path, needed for category filters
    pub path: &'a str,
    pub page: &'a PageKind,
}

impl FilterState {
    pub fn new(map: Vec<String>, rest: Vec<String>) -> Self {
        Self { map, rest }
    }

    /// Build from the comma-separated query values.
    pub fn from_query(map: &str, rest: &str) -> Self {
        Self {
            map: split_values(map),
            rest: split_values(rest),
        }
    }

    /// Whether every `rest` value has a `map` symbol.
    pub fn is_aligned(&self) -> bool {
        self.map.len() == self.rest.len()
    }

    /// State after selecting `selection`.
    ///
    /// A category may add several positions at once: one per path segment
    /// past the categories the current page already covers.
    pub fn add_filter(&self, selection: &FilterSelection<'_>) -> FilterState {
        let symbol = match selection.filter_type {
            FilterType::SpecificationFilters => {
                specification_filter_from_link(selection.link, &self.map)
            }
            ty => ty.map_symbol().map(str::to_string),
        };

        let mut next = self.clone();

        if !selection.filter_type.is_category() {
            let symbol = symbol.unwrap_or_else(|| {
                warn!(
                    "No map symbol for {} filter {:?} (link {:?})",
                    selection.filter_type, selection.slug, selection.link
                );
                String::new()
            });
            next.rest.push(selection.slug.to_string());
            next.map.push(symbol);
            return next;
        }

        let segments: Vec<&str> = selection.path.split('/').collect();
        let category_index = match selection.page {
            PageKind::Department => 1,
            PageKind::Category => 2,
            // Subcategory routes nest arbitrarily deep, e.g.
            // /electronics/pc/motherboards?map=c,c,c,c&rest=atx. A filter
            // with path electronics/pc/motherboards/atx/foo then only adds foo.
            PageKind::Subcategory => self.count_symbol(CATEGORY_SYMBOL),
            PageKind::Search | PageKind::Other(_) => 0,
        };

        let count = segments.len().saturating_sub(category_index);
        next.map
            .extend(std::iter::repeat_n(CATEGORY_SYMBOL.to_string(), count));
        next.rest.extend(
            segments
                .iter()
                .skip(category_index)
                .map(|segment| segment.to_string()),
        );
        next
    }

    /// State after unselecting `selection`. Unchanged if it is not selected.
    pub fn remove_filter(&self, selection: &FilterSelection<'_>) -> FilterState {
        if !selection.filter_type.is_category() {
            return self.remove_slug(selection.slug);
        }

        // Categories of the route itself are in `map` but have no `rest` value
        let selectable = self
            .count_symbol(CATEGORY_SYMBOL)
            .saturating_sub(selection.page.category_skip());
        let last_category = self.map.iter().rposition(|s| s == CATEGORY_SYMBOL);
        let aligned = last_category.and_then(|map_index| {
            (map_index + self.rest.len())
                .checked_sub(self.map.len())
                .filter(|&rest_index| rest_index < self.rest.len())
                .map(|rest_index| (map_index, rest_index))
        });

        let (map_index, rest_index) = match aligned {
            Some(indices) if selectable > 0 => indices,
            _ => {
                debug!(
                    "No category selection to remove (map {:?}, rest {:?})",
                    self.map, self.rest
                );
                return self.clone();
            }
        };

        let mut next = self.clone();
        next.map.remove(map_index);
        next.rest.remove(rest_index);
        next
    }

    fn remove_slug(&self, slug: &str) -> FilterState {
        let slug = slug.to_lowercase();
        let Some(index) = self.rest.iter().position(|item| item.to_lowercase() == slug) else {
            debug!("Filter {slug:?} is not selected");
            return self.clone();
        };

        let mut next = self.clone();
        next.rest.remove(index);
        match (self.map.len() + index).checked_sub(self.rest.len()) {
            Some(map_index) => {
                next.map.remove(map_index);
            }
            None => warn!(
                "map {:?} is shorter than rest {:?}, leaving map unchanged",
                self.map, self.rest
            ),
        }
        next
    }

    fn count_symbol(&self, symbol: &str) -> usize {
        self.map.iter().filter(|s| *s == symbol).count()
    }

    /// Uppercased `rest` value to the `map` symbol it lines up with.
    ///
    /// E.g. rest=`smartphones,lg` map=`c,b` => `{SMARTPHONES: c, LG: b}`
    pub fn rest_symbols(&self) -> HashMap<String, String> {
        let offset = self.map.len().saturating_sub(self.rest.len());
        let mut symbols = HashMap::new();
        for (i, value) in self.rest.iter().enumerate() {
            // A later value without a symbol hides an earlier one with the same key
            match self.map.get(offset + i) {
                Some(symbol) => symbols.insert(value.to_uppercase(), symbol.clone()),
                None => symbols.remove(&value.to_uppercase()),
            };
        }
        symbols
    }
}

/// `map` without the symbols that belong to the current `rest` values.
///
/// E.g. map=`c,c,b` rest=`cat1,cat2` => `c`
pub fn base_map(map: &str, rest: &str) -> String {
    let map_values: Vec<&str> = map.split(',').collect();
    let rest_len = rest.split(',').filter(|s| !s.is_empty()).count();
    let keep = map_values.len().saturating_sub(rest_len);
    map_values[..keep].join(",")
}
