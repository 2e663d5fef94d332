use serde::{Deserialize, Serialize};

/// Map symbol for category filters
pub const CATEGORY_SYMBOL: &str = "c";
/// Map symbol for brand filters
pub const BRAND_SYMBOL: &str = "b";
/// Map symbol for price range filters
pub const PRICE_RANGE_SYMBOL: &str = "priceFrom";

/// Kind of facet a filter option belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    Categories,
    Brands,
    PriceRanges,
    SpecificationFilters,
}

impl FilterType {
    /// Static `map` symbol for this filter type.
    ///
    /// Specification filters have no fixed symbol; theirs is recovered from
    /// the option link (see [`crate::link::specification_filter_from_link`]).
    pub fn map_symbol(self) -> Option<&'static str> {
        match self {
            FilterType::PriceRanges => Some(PRICE_RANGE_SYMBOL),
            FilterType::Categories => Some(CATEGORY_SYMBOL),
            FilterType::Brands => Some(BRAND_SYMBOL),
            FilterType::SpecificationFilters => None,
        }
    }

    pub fn is_category(self) -> bool {
        self == FilterType::Categories
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::Categories => "Categories",
            FilterType::Brands => "Brands",
            FilterType::PriceRanges => "PriceRanges",
            FilterType::SpecificationFilters => "SpecificationFilters",
        }
    }
}

impl std::str::FromStr for FilterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Categories" => Ok(FilterType::Categories),
            "Brands" => Ok(FilterType::Brands),
            "PriceRanges" => Ok(FilterType::PriceRanges),
            "SpecificationFilters" => Ok(FilterType::SpecificationFilters),
            other => Err(format!("unknown filter type: {other}")),
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_symbols() {
        assert_eq!(FilterType::PriceRanges.map_symbol(), Some("priceFrom"));
        assert_eq!(FilterType::Categories.map_symbol(), Some("c"));
        assert_eq!(FilterType::Brands.map_symbol(), Some("b"));
        assert_eq!(FilterType::SpecificationFilters.map_symbol(), None);
    }

    #[test]
    fn test_parse_roundtrips_display() {
        for ty in [
            FilterType::Categories,
            FilterType::Brands,
            FilterType::PriceRanges,
            FilterType::SpecificationFilters,
        ] {
            assert_eq!(ty.to_string().parse::<FilterType>(), Ok(ty));
        }
        assert!("Colors".parse::<FilterType>().is_err());
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&FilterType::PriceRanges).unwrap();
        assert_eq!(json, "\"PriceRanges\"");
    }
}
