use leptos::prelude::*;

use contracts::shared::list_filter::FilterState;
use contracts::shared::localized::resolve;

use super::common::{ListNotice, PublicHeading};
use crate::domain::a007_news::api::{news_api, MESSAGES};
use crate::shared::date_utils::format_long_date;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

#[component]
pub fn NewsPage() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(news_api(), MESSAGES);
    let state = *controller.store();
    let search = RwSignal::new(String::new());

    spawn_load(controller);

    let visible = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    view! {
        <PageFrame page_id="public_news--public" category=PAGE_CAT_PUBLIC>
            <PublicHeading title=Signal::derive(move || locale.text("News", "الأخبار")) />
            <SearchInput value=search placeholder=Signal::derive(move || locale.text("Search news...", "ابحث في الأخبار...")) />
            <ListNotice
                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || state.with(|s| s.loaded) && visible.with(Vec::is_empty))
            />
            <div class="news-list">
                {move || {
                    let code = locale.code();
                    let current = locale.get();
                    let term = search.get();
                    visible.get().into_iter().map(|article| {
                        let title = article.title.resolve(code);
                        let summary = resolve(article.summary.as_ref(), code);
                        let date = article.published_at.as_deref().map(|d| format_long_date(d, current)).unwrap_or_default();
                        view! {
                            <article class="news-item" id=article.slug.clone()>
                                {article.image_url.clone().map(|src| view! { <img class="news-item__image" src=src alt="" /> })}
                                <div class="news-item__body">
                                    <p class="news-item__date">{date}</p>
                                    <h2 class="news-item__title">{highlight_matches(&title, &term)}</h2>
                                    <p class="news-item__summary">{highlight_matches(&summary, &term)}</p>
                                </div>
                            </article>
                        }
                    }).collect_view()
                }}
            </div>
        </PageFrame>
    }
}
