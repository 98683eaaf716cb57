use leptos::prelude::*;

use contracts::domain::a008_publication::{Publication, PublicationKind};
use contracts::shared::list_filter::{FilterState, FILTER_ALL};

use super::common::{ListNotice, PublicHeading};
use crate::domain::a008_publication::api::{
    journal_api, library_api, PublicationApi, JOURNAL_MESSAGES, MESSAGES,
};
use crate::shared::list_controller::{spawn_load, use_list_controller, ListMessages};
use crate::shared::list_utils::{highlight_matches, FacetSelect, SearchInput};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

const KINDS: [PublicationKind; 4] = [
    PublicationKind::Book,
    PublicationKind::Report,
    PublicationKind::JournalArticle,
    PublicationKind::JournalIssue,
];

/// "Authors (year)" line under a publication title.
pub fn citation_line(publication: &Publication) -> String {
    let authors = publication.authors_line();
    match (authors.is_empty(), publication.year) {
        (false, Some(year)) => format!("{} ({})", authors, year),
        (false, None) => authors,
        (true, Some(year)) => year.to_string(),
        (true, None) => String::new(),
    }
}

#[component]
fn PublicationCatalog(
    api: PublicationApi,
    messages: ListMessages,
    page_id: &'static str,
    title: (&'static str, &'static str),
    with_kind_facet: bool,
) -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(api, messages);
    let state = *controller.store();
    let search = RwSignal::new(String::new());
    let kind = RwSignal::new(FILTER_ALL.to_string());

    spawn_load(controller);

    let kind_options = Signal::derive(move || {
        let code = locale.code();
        KINDS
            .iter()
            .map(|k| (k.code().to_string(), k.label().resolve(code)))
            .collect::<Vec<_>>()
    });

    let visible = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("kind", kind.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_PUBLIC>
            <PublicHeading title=Signal::derive(move || locale.text(title.0, title.1)) />
            <div class="public-filters">
                <SearchInput value=search placeholder=Signal::derive(move || locale.text("Title or author...", "العنوان أو المؤلف...")) />
                {with_kind_facet.then(|| view! {
                    <FacetSelect
                        value=kind
                        all_label=Signal::derive(move || locale.text("All types", "كل الأنواع"))
                        options=kind_options
                    />
                })}
            </div>
            <ListNotice
                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || state.with(|s| s.loaded) && visible.with(Vec::is_empty))
            />
            <ul class="publication-list">
                {move || {
                    let code = locale.code();
                    let term = search.get();
                    visible.get().into_iter().map(|publication| {
                        let title = publication.title.resolve(code);
                        let citation = citation_line(&publication);
                        let title_view = match publication.url.clone() {
                            Some(url) => view! {
                                <a href=url target="_blank" rel="noopener">{highlight_matches(&title, &term)}</a>
                            }.into_any(),
                            None => highlight_matches(&title, &term),
                        };
                        view! {
                            <li class="publication-list__item">
                                <span class="badge badge--neutral">{publication.kind.label().resolve(code)}</span>
                                <h3 class="publication-list__title">{title_view}</h3>
                                <p class="publication-list__meta">{highlight_matches(&citation, &term)}</p>
                                {publication.journal_issue.clone().map(|issue| view! { <p class="text-muted">{issue}</p> })}
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
        </PageFrame>
    }
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    view! {
        <PublicationCatalog
            api=library_api()
            messages=MESSAGES
            page_id="public_library--public"
            title=("Library", "المكتبة")
            with_kind_facet=true
        />
    }
}

#[component]
pub fn JournalPage() -> impl IntoView {
    view! {
        <PublicationCatalog
            api=journal_api()
            messages=JOURNAL_MESSAGES
            page_id="public_journal--public"
            title=("Journal", "المجلة")
            with_kind_facet=false
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_line() {
        let publication: Publication = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "title": "Corrosion atlas",
            "authors": ["H. Saleh", "R. Nabil"],
            "year": 2021
        }))
        .unwrap();
        assert_eq!(citation_line(&publication), "H. Saleh, R. Nabil (2021)");

        let anonymous: Publication = serde_json::from_value(serde_json::json!({"id": "p2", "year": 1999})).unwrap();
        assert_eq!(citation_line(&anonymous), "1999");
    }
}
