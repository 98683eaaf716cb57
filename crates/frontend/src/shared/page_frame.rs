//! Root wrapper shared by every routed screen.
//!
//! The wrapper stamps `id="{entity}--{category}"` and `data-page-category`
//! on the outer element so a page can be found from the DOM inspector, e.g.
//! `a003_event--list` leads to `domain/a003_event/ui/list`.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, see `page_standard::is_valid_page_id`.
    page_id: &'static str,
    category: &'static str,
    /// Extra classes appended after the category class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "malformed page id {page_id}");
    debug_assert!(is_known_category(category), "unknown page category {category}");

    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

/// Public and learner pages get their own modifier so the site styles do
/// not leak into the console tables.
fn page_class(category: &str, extra: &str) -> String {
    let modifier = match category {
        PAGE_CAT_PUBLIC => Some("page--public"),
        PAGE_CAT_LEARNER => Some("page--learner"),
        PAGE_CAT_SYSTEM => Some("page--system"),
        _ => None,
    };
    ["page", modifier.unwrap_or_default(), extra]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_SYSTEM, ""), "page page--system");
        assert_eq!(page_class(PAGE_CAT_PUBLIC, "page--narrow"), "page page--public page--narrow");
    }
}
