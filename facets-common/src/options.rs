use serde::{Deserialize, Serialize};

use crate::encoder::FilterState;
use crate::filter_type::FilterType;
use crate::link::{slug_from_link, specification_filter_from_link};

/// Facet option as returned by the catalog search API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacetOption {
    pub name: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub link: String,
}

/// Facet option annotated for display in the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountedOption {
    #[serde(flatten)]
    pub option: FacetOption,
    pub selected: bool,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub slug: String,
}

/// Annotate `options` with their slug, type and whether they are selected
/// under the current comma-separated `map` and `rest`.
///
/// An option is selected when its uppercased slug lines up, in the trailing
/// part of `map`, with the symbol the option itself would add.
pub fn mount_options(
    options: &[FacetOption],
    filter_type: FilterType,
    map: &str,
    rest: &str,
) -> Vec<MountedOption> {
    let rest_symbols = FilterState::from_query(map, rest).rest_symbols();
    let map_values: Vec<&str> = map.split(',').collect();

    options
        .iter()
        .map(|option| {
            let slug = slug_from_link(&option.link);
            let symbol = match filter_type {
                FilterType::SpecificationFilters => {
                    specification_filter_from_link(&option.link, &map_values)
                }
                ty => ty.map_symbol().map(str::to_string),
            };
            let selected = symbol.is_some_and(|symbol| {
                rest_symbols.get(&slug.to_uppercase()) == Some(&symbol)
            });

            MountedOption {
                option: option.clone(),
                selected,
                filter_type,
                slug,
            }
        })
        .collect()
}
