//! In-memory search and categorical filtering for entity lists.
//!
//! Lists are small and already fully loaded, so the filtered view is simply
//! recomputed from the cached collection whenever the filter changes.

use std::collections::BTreeMap;

use super::localized::LocalizedText;

/// Facet value meaning "no restriction".
pub const FILTER_ALL: &str = "all";

/// One searchable value of a list item.
#[derive(Debug, Clone, Copy)]
pub enum SearchField<'a> {
    Text(&'a str),
    Localized(Option<&'a LocalizedText>),
}

impl SearchField<'_> {
    fn resolved(&self, locale: &str) -> String {
        match self {
            SearchField::Text(value) => (*value).to_string(),
            SearchField::Localized(value) => super::localized::resolve(*value, locale),
        }
    }
}

/// Types that can be searched and narrowed by facets.
pub trait Searchable {
    /// Fields the search box matches against.
    fn search_fields(&self) -> Vec<SearchField<'_>>;

    /// Discriminant value for a categorical filter, e.g. `"category"`.
    fn facet(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Transient per-screen filter: search text plus facet selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub facets: BTreeMap<String, String>,
}

impl FilterState {
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            facets: BTreeMap::new(),
        }
    }

    pub fn with_facet(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_facet(key, value);
        self
    }

    pub fn set_facet(&mut self, key: &str, value: impl Into<String>) {
        self.facets.insert(key.to_string(), value.into());
    }

    /// Selected value for `key`, `"all"` when nothing was chosen.
    pub fn facet(&self, key: &str) -> &str {
        self.facets.get(key).map(String::as_str).unwrap_or(FILTER_ALL)
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.facets.values().any(|v| v != FILTER_ALL)
    }

    pub fn reset(&mut self) {
        self.search.clear();
        self.facets.clear();
    }

    pub fn matches<T: Searchable>(&self, item: &T, locale: &str) -> bool {
        matches_search(item, &self.search, locale) && self.matches_facets(item)
    }

    fn matches_facets<T: Searchable>(&self, item: &T) -> bool {
        self.facets.iter().all(|(key, selected)| {
            selected == FILTER_ALL || item.facet(key).as_deref() == Some(selected.as_str())
        })
    }
}

/// Case-insensitive substring match of `term` against any searchable field.
pub fn matches_search<T: Searchable>(item: &T, term: &str, locale: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.resolved(locale).to_lowercase().contains(&needle))
}

/// Filtered copy of `items`, preserving order.
pub fn filter_items<T: Searchable + Clone>(items: &[T], filter: &FilterState, locale: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(*item, locale))
        .cloned()
        .collect()
}

/// Distinct facet values present in `items`, sorted, for building selects.
pub fn facet_values<T: Searchable>(items: &[T], key: &str) -> Vec<String> {
    let mut values: Vec<String> = items.iter().filter_map(|item| item.facet(key)).collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: LocalizedText,
        code: String,
        category: Option<String>,
    }

    fn item(name: &str, code: &str, category: Option<&str>) -> Item {
        Item {
            name: LocalizedText::plain(name),
            code: code.to_string(),
            category: category.map(str::to_string),
        }
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<SearchField<'_>> {
            vec![SearchField::Localized(Some(&self.name)), SearchField::Text(&self.code)]
        }

        fn facet(&self, key: &str) -> Option<String> {
            match key {
                "category" => self.category.clone(),
                _ => None,
            }
        }
    }

    fn names(items: &[Item]) -> Vec<String> {
        items.iter().map(|i| i.name.resolve("en")).collect()
    }

    #[test]
    fn test_search_scenario() {
        let items = vec![item("Materials Lab", "ml", None), item("Chemistry Unit", "cu", None)];
        let result = filter_items(&items, &FilterState::with_search("lab"), "en");
        assert_eq!(names(&result), vec!["Materials Lab"]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let items = vec![item("A", "", None), item("", "", None)];
        assert_eq!(filter_items(&items, &FilterState::default(), "en").len(), 2);
    }

    #[test]
    fn test_search_checks_every_field_case_insensitively() {
        let items = vec![item("Physics", "PHY-01", None), item("Biology", "bio-02", None)];
        let result = filter_items(&items, &FilterState::with_search("Phy-0"), "en");
        assert_eq!(names(&result), vec!["Physics"]);
        let result = filter_items(&items, &FilterState::with_search("BIO"), "en");
        assert_eq!(names(&result), vec!["Biology"]);
    }

    #[test]
    fn test_search_uses_resolved_locale() {
        let bilingual = Item {
            name: LocalizedText::pair("Library", "المكتبة"),
            code: String::new(),
            category: None,
        };
        let items = vec![bilingual];
        assert_eq!(filter_items(&items, &FilterState::with_search("مكتبة"), "ar").len(), 1);
        assert_eq!(filter_items(&items, &FilterState::with_search("مكتبة"), "en").len(), 0);
        assert_eq!(filter_items(&items, &FilterState::with_search("libr"), "fr").len(), 1);
    }

    #[test]
    fn test_search_matches_iff_some_field_contains_term() {
        let items = vec![
            item("Nano Lab", "n1", Some("research")),
            item("Workshop", "lab-w", Some("training")),
            item("Seminar", "s1", Some("training")),
        ];
        for term in ["", "lab", "LAB", "s", "n1", "zzz", " "] {
            let result = filter_items(&items, &FilterState::with_search(term), "en");
            for it in &items {
                let expected = term.is_empty()
                    || it.name.resolve("en").to_lowercase().contains(&term.to_lowercase())
                    || it.code.to_lowercase().contains(&term.to_lowercase());
                assert_eq!(result.contains(it), expected, "term {term:?} item {it:?}");
            }
        }
    }

    #[test]
    fn test_facet_and_search_compose_with_and() {
        let items = vec![
            item("Nano Lab", "n1", Some("research")),
            item("Lab Safety", "ls", Some("training")),
            item("Seminar", "s1", Some("training")),
            item("Open Lab", "ol", None),
        ];
        for term in ["", "lab", "s"] {
            let searched = filter_items(&items, &FilterState::with_search(term).with_facet("category", FILTER_ALL), "en");
            let combined = filter_items(&items, &FilterState::with_search(term).with_facet("category", "training"), "en");
            let expected: Vec<Item> = searched
                .into_iter()
                .filter(|i| i.category.as_deref() == Some("training"))
                .collect();
            assert_eq!(combined, expected);
        }
    }

    #[test]
    fn test_missing_discriminant_never_matches_a_selection() {
        let items = vec![item("Open Lab", "ol", None)];
        let filter = FilterState::default().with_facet("category", "research");
        assert!(filter_items(&items, &filter, "en").is_empty());
    }

    #[test]
    fn test_filter_state_helpers() {
        let mut filter = FilterState::default();
        assert_eq!(filter.facet("role"), FILTER_ALL);
        assert!(!filter.is_active());
        filter.set_facet("role", "admin");
        assert!(filter.is_active());
        filter.set_facet("role", FILTER_ALL);
        assert!(!filter.is_active());
        filter.search = "x".into();
        filter.reset();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_facet_values_are_distinct_and_sorted() {
        let items = vec![
            item("a", "", Some("training")),
            item("b", "", Some("research")),
            item("c", "", Some("training")),
            item("d", "", None),
        ];
        assert_eq!(facet_values(&items, "category"), vec!["research", "training"]);
    }
}
