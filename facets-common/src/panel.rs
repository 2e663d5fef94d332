//! Headless state of the collapsible filter groups in the filter panel.

use serde::Serialize;
use tracing::error;

use crate::options::FacetOption;
use crate::settings::{FacetSettings, OpenFiltersMode};

/// Facets shown before a long group is truncated or lazily rendered
pub const FACETS_RENDER_THRESHOLD: usize = 10;

/// Approximate height of one facet row, used to size the lazy-render placeholder
const FACET_ROW_HEIGHT_PX: usize = 34;

const MORE_ITEMS_MESSAGE: &str = "store/filter.more-items";
const LESS_ITEMS_MESSAGE: &str = "store/filter.less-items";

/// One collapsible filter group, e.g. "Brand"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    title: String,
    /// Number of facets the group has, including ones not fetched yet
    quantity: usize,
    collapsable: bool,
    open: bool,
    truncated: bool,
    has_scrolled: bool,
    search_term: String,
}

impl FilterGroup {
    pub fn new(title: impl Into<String>, quantity: usize) -> Self {
        Self {
            title: title.into(),
            quantity,
            collapsable: true,
            open: true,
            truncated: true,
            has_scrolled: false,
            search_term: String::new(),
        }
    }

    pub fn initially_collapsed(mut self, collapsed: bool) -> Self {
        self.open = !collapsed;
        self
    }

    pub fn collapsable(mut self, collapsable: bool) -> Self {
        self.collapsable = collapsable;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Record that the facet list has been scrolled; lazy rendering stops.
    pub fn mark_scrolled(&mut self) {
        self.has_scrolled = true;
    }
}

/// "See more" / "see less" toggle of a truncated group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationToggle {
    pub message_id: &'static str,
    /// Facets beyond the render threshold
    pub quantity: usize,
}

/// What a group renders right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetWindow<'a> {
    pub facets: Vec<&'a FacetOption>,
    /// Height in pixels reserved for facets not rendered yet
    pub placeholder_height: usize,
    pub toggle: Option<TruncationToggle>,
}

/// Open state shared by all groups of the panel
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    settings: FacetSettings,
    last_open_filter: Option<String>,
    truncated_facets_fetched: bool,
}

impl FilterPanel {
    pub fn new(settings: FacetSettings) -> Self {
        Self {
            settings,
            last_open_filter: None,
            truncated_facets_fetched: false,
        }
    }

    pub fn settings(&self) -> &FacetSettings {
        &self.settings
    }

    pub fn last_open_filter(&self) -> Option<&str> {
        self.last_open_filter.as_deref()
    }

    pub fn truncated_facets_fetched(&self) -> bool {
        self.truncated_facets_fetched
    }

    pub fn is_open(&self, group: &FilterGroup) -> bool {
        match self.settings.open_filters_mode {
            OpenFiltersMode::Many => group.open,
            _ => self.last_open_filter.as_deref() == Some(group.title.as_str()),
        }
    }

    /// Open or close `group`. In `one` mode this also closes whichever group
    /// was open before.
    pub fn toggle(&mut self, group: &mut FilterGroup) {
        if !group.collapsable {
            return;
        }
        match &self.settings.open_filters_mode {
            OpenFiltersMode::Many => group.open = !group.open,
            OpenFiltersMode::One => {
                if self.last_open_filter.as_deref() == Some(group.title.as_str()) {
                    self.last_open_filter = None;
                } else {
                    self.last_open_filter = Some(group.title.clone());
                }
            }
            OpenFiltersMode::Unknown(value) => {
                error!(
                    "Invalid openFiltersMode value: {value}\nCheck the documentation for the values available"
                );
            }
        }
    }

    /// Switch between the truncated and the full facet list.
    pub fn toggle_truncated(&mut self, group: &mut FilterGroup) {
        if self.settings.enable_filters_fetch_optimization && !self.truncated_facets_fetched {
            self.truncated_facets_fetched = true;
        }
        group.truncated = !group.truncated;
    }

    /// Whether `group` offers a search bar for its `facet_count` facets.
    pub fn shows_search_bar(&self, facet_count: usize) -> bool {
        self.settings
            .threshold_for_facet_search
            .is_some_and(|threshold| threshold < facet_count)
    }

    fn should_truncate(&self, group: &FilterGroup) -> bool {
        (self.settings.truncate_filters || self.settings.enable_filters_fetch_optimization)
            && group.quantity > FACETS_RENDER_THRESHOLD
    }

    /// Facets `group` renders, after search filtering and truncation.
    pub fn visible_facets<'a>(
        &self,
        group: &FilterGroup,
        facets: &'a [FacetOption],
    ) -> FacetWindow<'a> {
        let filtered: Vec<&FacetOption> =
            if self.settings.threshold_for_facet_search.is_none() || group.search_term.is_empty() {
                facets.iter().collect()
            } else {
                let term = group.search_term.to_lowercase();
                facets
                    .iter()
                    .filter(|facet| facet.name.to_lowercase().contains(&term))
                    .collect()
            };

        let should_truncate = self.should_truncate(group);
        let should_lazy_render = !should_truncate
            && !group.has_scrolled
            && self.settings.enable_search_rendering_optimization;

        let placeholder_height = if should_lazy_render {
            facets.len().saturating_sub(FACETS_RENDER_THRESHOLD) * FACET_ROW_HEIGHT_PX
        } else {
            0
        };

        let end = if should_lazy_render || (should_truncate && group.truncated) {
            FACETS_RENDER_THRESHOLD
        } else {
            filtered.len()
        };

        let toggle = should_truncate.then(|| TruncationToggle {
            message_id: if group.truncated {
                MORE_ITEMS_MESSAGE
            } else {
                LESS_ITEMS_MESSAGE
            },
            quantity: group.quantity - FACETS_RENDER_THRESHOLD,
        });

        FacetWindow {
            facets: filtered.into_iter().take(end).collect(),
            placeholder_height,
            toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets(count: usize) -> Vec<FacetOption> {
        (0..count)
            .map(|i| FacetOption {
                name: format!("Option {i}"),
                quantity: 1,
                link: format!("/option-{i}?map=b"),
            })
            .collect()
    }

    fn settings(yaml: &str) -> FacetSettings {
        FacetSettings::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn test_many_mode_toggles_each_group() {
        let mut panel = FilterPanel::new(FacetSettings::default());
        let mut brand = FilterGroup::new("Brand", 3);
        let mut price = FilterGroup::new("Price", 3).initially_collapsed(true);

        assert!(panel.is_open(&brand));
        assert!(!panel.is_open(&price));

        panel.toggle(&mut brand);
        panel.toggle(&mut price);
        assert!(!panel.is_open(&brand));
        assert!(panel.is_open(&price));
    }

    #[test]
    fn test_one_mode_keeps_single_group_open() {
        let mut panel = FilterPanel::new(settings("open_filters_mode: one"));
        let mut brand = FilterGroup::new("Brand", 3);
        let mut price = FilterGroup::new("Price", 3);

        // Own open flag is ignored in this mode
        assert!(!panel.is_open(&brand));

        panel.toggle(&mut brand);
        assert!(panel.is_open(&brand));

        panel.toggle(&mut price);
        assert!(panel.is_open(&price));
        assert!(!panel.is_open(&brand));

        panel.toggle(&mut price);
        assert!(!panel.is_open(&price));
        assert_eq!(panel.last_open_filter(), None);
    }

    #[test]
    fn test_unknown_mode_toggle_is_noop() {
        let mut panel = FilterPanel::new(settings("open_filters_mode: several"));
        let mut brand = FilterGroup::new("Brand", 3);
        panel.toggle(&mut brand);
        assert!(!panel.is_open(&brand));
        assert_eq!(panel.last_open_filter(), None);
    }

    #[test]
    fn test_not_collapsable_ignores_toggle() {
        let mut panel = FilterPanel::new(FacetSettings::default());
        let mut group = FilterGroup::new("Brand", 3).collapsable(false);
        panel.toggle(&mut group);
        assert!(panel.is_open(&group));
    }

    #[test]
    fn test_short_group_shows_everything() {
        let panel = FilterPanel::new(settings("truncate_filters: true"));
        let options = facets(4);
        let window = panel.visible_facets(&FilterGroup::new("Brand", 4), &options);
        assert_eq!(window.facets.len(), 4);
        assert_eq!(window.placeholder_height, 0);
        assert_eq!(window.toggle, None);
    }

    #[test]
    fn test_truncated_group() {
        let mut panel = FilterPanel::new(settings("truncate_filters: true"));
        let options = facets(25);
        let mut group = FilterGroup::new("Brand", 25);

        let window = panel.visible_facets(&group, &options);
        assert_eq!(window.facets.len(), FACETS_RENDER_THRESHOLD);
        assert_eq!(
            window.toggle,
            Some(TruncationToggle {
                message_id: "store/filter.more-items",
                quantity: 15,
            })
        );

        panel.toggle_truncated(&mut group);
        let window = panel.visible_facets(&group, &options);
        assert_eq!(window.facets.len(), 25);
        assert_eq!(window.toggle.unwrap().message_id, "store/filter.less-items");
        // Fetch optimization is off
        assert!(!panel.truncated_facets_fetched());
    }

    #[test]
    fn test_fetch_optimization_marks_fetched() {
        let mut panel = FilterPanel::new(settings("enable_filters_fetch_optimization: true"));
        let mut group = FilterGroup::new("Brand", 40);
        panel.toggle_truncated(&mut group);
        assert!(panel.truncated_facets_fetched());
        assert!(!group.is_truncated());
    }

    #[test]
    fn test_lazy_render_until_scrolled() {
        let panel = FilterPanel::new(settings("enable_search_rendering_optimization: true"));
        let options = facets(30);
        let mut group = FilterGroup::new("Color", 30);

        let window = panel.visible_facets(&group, &options);
        assert_eq!(window.facets.len(), FACETS_RENDER_THRESHOLD);
        assert_eq!(window.placeholder_height, 20 * 34);
        assert_eq!(window.toggle, None);

        group.mark_scrolled();
        let window = panel.visible_facets(&group, &options);
        assert_eq!(window.facets.len(), 30);
        assert_eq!(window.placeholder_height, 0);
    }

    #[test]
    fn test_search_term_filters_when_enabled() {
        let panel = FilterPanel::new(settings("threshold_for_facet_search: 5"));
        let options = facets(12);
        let mut group = FilterGroup::new("Brand", 12);
        group.set_search_term("OPTION 1");

        let window = panel.visible_facets(&group, &options);
        let names: Vec<_> = window.facets.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Option 1", "Option 10", "Option 11"]);
        assert!(panel.shows_search_bar(options.len()));
        assert!(!panel.shows_search_bar(5));
    }

    #[test]
    fn test_search_term_ignored_without_threshold() {
        let panel = FilterPanel::new(FacetSettings::default());
        let options = facets(3);
        let mut group = FilterGroup::new("Brand", 3);
        group.set_search_term("nothing matches");

        assert_eq!(panel.visible_facets(&group, &options).facets.len(), 3);
        assert!(!panel.shows_search_bar(100));
    }
}
