use leptos::prelude::*;

use contracts::shared::list_filter::{FilterState, FILTER_ALL};
use contracts::shared::localized::resolve;

use super::common::{ListNotice, PublicHeading};
use crate::domain::a004_service::api as services;
use crate::domain::a006_service_center::api as centers;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{record_options, FacetSelect, SearchInput};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let locale = use_locale();
    let service_list = use_list_controller(services::services_api(), services::MESSAGES);
    let center_list = use_list_controller(centers::service_centers_api(), centers::MESSAGES);
    let search = RwSignal::new(String::new());
    let center = RwSignal::new(FILTER_ALL.to_string());

    spawn_load(service_list);
    spawn_load(center_list);

    let state = *service_list.store();
    let center_state = *center_list.store();

    let center_options = Signal::derive(move || {
        let code = locale.code();
        center_state.with(|s| {
            let active: Vec<_> = s.items.iter().filter(|c| c.is_active).cloned().collect();
            record_options(&active, |c| c.name.resolve(code))
        })
    });

    let visible = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("center", center.get());
        state.with(|s| {
            s.filtered(&filter, locale.code())
                .into_iter()
                .filter(|service| service.is_active)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="public_services--public" category=PAGE_CAT_PUBLIC>
            <PublicHeading
                title=Signal::derive(move || locale.text("Services", "الخدمات"))
                lead=Signal::derive(move || locale.text(
                    "Testing, consulting and training offered by our service centers.",
                    "الاختبارات والاستشارات والتدريب التي تقدمها مراكز الخدمة.",
                ))
            />
            <div class="public-filters">
                <SearchInput value=search placeholder=Signal::derive(move || locale.text("Search services...", "ابحث في الخدمات...")) />
                <FacetSelect
                    value=center
                    all_label=Signal::derive(move || locale.text("All centers", "كل المراكز"))
                    options=center_options
                />
            </div>
            <ListNotice
                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || state.with(|s| s.loaded) && visible.with(Vec::is_empty))
            />
            <div class="card-grid">
                {move || {
                    let code = locale.code();
                    visible.get().into_iter().map(|service| {
                        let head = service.center_head.as_ref().map(|h| h.name.resolve(code));
                        view! {
                            <article class="card">
                                <p class="card__eyebrow">{service.category.clone()}</p>
                                <h3 class="card__title">{service.title.resolve(code)}</h3>
                                <p class="card__text">{resolve(service.description.as_ref(), code)}</p>
                                {head.filter(|h| !h.is_empty()).map(|h| view! { <p class="card__meta">{h}</p> })}
                            </article>
                        }
                    }).collect_view()
                }}
            </div>
        </PageFrame>
    }
}
