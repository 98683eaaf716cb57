use leptos::prelude::*;

use contracts::shared::list_filter::{facet_values, FilterState, FILTER_ALL};
use contracts::shared::localized::resolve;

use super::common::{ListNotice, PublicHeading};
use crate::domain::a003_event::api::{events_api, MESSAGES};
use crate::shared::date_utils::format_long_date;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{highlight_matches, FacetSelect, SearchInput};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

#[component]
pub fn EventsPage() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(events_api(), MESSAGES);
    let state = *controller.store();
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(FILTER_ALL.to_string());

    spawn_load(controller);

    let category_options = Signal::derive(move || {
        state.with(|s| {
            facet_values(&s.items, "category")
                .into_iter()
                .map(|c| (c.clone(), c))
                .collect::<Vec<_>>()
        })
    });

    let visible = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("category", category.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    view! {
        <PageFrame page_id="public_events--public" category=PAGE_CAT_PUBLIC>
            <PublicHeading title=Signal::derive(move || locale.text("Events", "الفعاليات")) />
            <div class="public-filters">
                <SearchInput value=search placeholder=Signal::derive(move || locale.text("Search events...", "ابحث في الفعاليات...")) />
                <FacetSelect
                    value=category
                    all_label=Signal::derive(move || locale.text("All categories", "كل الفئات"))
                    options=category_options
                />
            </div>
            <ListNotice
                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || state.with(|s| s.loaded) && visible.with(Vec::is_empty))
            />
            <div class="card-grid">
                {move || {
                    let code = locale.code();
                    let current = locale.get();
                    let term = search.get();
                    visible.get().into_iter().map(|event| {
                        let title = event.title.resolve(code);
                        view! {
                            <article class="card">
                                {event.image_url.clone().map(|src| view! { <img class="card__image" src=src alt="" /> })}
                                <p class="card__eyebrow">{event.status.label().resolve(code)}</p>
                                <h3 class="card__title">{highlight_matches(&title, &term)}</h3>
                                <p class="card__meta">
                                    {format_long_date(&event.starts_at, current)}
                                    " · "
                                    {resolve(event.location.as_ref(), code)}
                                </p>
                                <p class="card__text">{resolve(event.description.as_ref(), code)}</p>
                            </article>
                        }
                    }).collect_view()
                }}
            </div>
        </PageFrame>
    }
}
