//! Page categories used by `PageFrame`.

/// Admin table of records with search and facets.
pub const PAGE_CAT_LIST: &str = "list";

/// Console system page (users, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Public site page.
pub const PAGE_CAT_PUBLIC: &str = "public";

/// Signed-in learner dashboard.
pub const PAGE_CAT_LEARNER: &str = "learner";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_PUBLIC,
    PAGE_CAT_LEARNER,
];

/// `true` for ids of the form `{entity}--{category}` with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    id.split_once("--")
        .is_some_and(|(entity, category)| !entity.is_empty() && is_known_category(category))
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_department_section--list"));
        assert!(is_valid_page_id("public_home--public"));
        assert!(!is_valid_page_id("a001_department_section"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_LEARNER));
        assert!(!is_known_category("dashboard"));
    }
}
