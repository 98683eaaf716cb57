use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a003_event::{Event, EventStatus};
use contracts::shared::localized::{resolve, Locale};
use contracts::system::settings::SiteSettings;

use super::common::{localized_href, ListNotice};
use crate::domain::a003_event::api as events;
use crate::domain::a007_news::api as news;
use crate::shared::date_utils::format_long_date;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::settings::api::fetch_settings;

const HIGHLIGHTS: usize = 3;

/// Upcoming and ongoing events, soonest first.
pub fn upcoming_events(items: &[Event], limit: usize) -> Vec<Event> {
    let mut upcoming: Vec<Event> = items
        .iter()
        .filter(|e| matches!(e.status, EventStatus::Upcoming | EventStatus::Ongoing))
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
    upcoming.truncate(limit);
    upcoming
}

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();
    let settings = RwSignal::new(None::<SiteSettings>);
    let news_list = use_list_controller(news::news_api(), news::MESSAGES);
    let event_list = use_list_controller(events::events_api(), events::MESSAGES);

    spawn_load(news_list);
    spawn_load(event_list);
    spawn_local(async move {
        match fetch_settings().await {
            Ok(s) => {
                let _ = settings.try_set(Some(s));
            }
            Err(err) => log::warn!("settings unavailable on home page: {}", err),
        }
    });

    let news_state = *news_list.store();
    let event_state = *event_list.store();

    view! {
        <PageFrame page_id="public_home--public" category=PAGE_CAT_PUBLIC>
            <section class="hero">
                <h1 class="hero__title">
                    {move || settings.with(|s| match s {
                        Some(s) => s.site_name.resolve(locale.code()),
                        None => locale.text("Research Institute", "معهد البحوث"),
                    })}
                </h1>
                <p class="hero__tagline">
                    {move || settings.with(|s| resolve(s.as_ref().and_then(|s| s.tagline.as_ref()), locale.code()))}
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href=move || localized_href(locale.get(), "services")>
                        {move || locale.text("Our services", "خدماتنا")}
                    </a>
                    <a class="button button--ghost" href=move || localized_href(locale.get(), "departments")>
                        {move || locale.text("Departments", "الأقسام")}
                    </a>
                </div>
            </section>

            <section class="home-block">
                <h2>{move || locale.text("Latest news", "آخر الأخبار")}</h2>
                <ListNotice
                    loading=Signal::derive(move || news_state.with(|s| s.loading && !s.loaded))
                    empty=Signal::derive(move || news_state.with(|s| s.loaded && s.items.is_empty()))
                />
                <div class="card-grid">
                    {move || {
                        let code = locale.code();
                        let current = locale.get();
                        news_state.with(|s| s.items.iter().take(HIGHLIGHTS).cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|article| {
                                let date = article.published_at.as_deref().map(|d| format_long_date(d, current)).unwrap_or_default();
                                view! {
                                    <article class="card">
                                        <h3 class="card__title">{article.title.resolve(code)}</h3>
                                        <p class="card__meta">{date}</p>
                                        <p class="card__text">{resolve(article.summary.as_ref(), code)}</p>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <a class="home-block__more" href=move || localized_href(locale.get(), "news")>
                    {move || locale.text("All news", "كل الأخبار")}
                </a>
            </section>

            <section class="home-block">
                <h2>{move || locale.text("Upcoming events", "الفعاليات القادمة")}</h2>
                <div class="card-grid">
                    {move || {
                        let code = locale.code();
                        let current: Locale = locale.get();
                        event_state.with(|s| upcoming_events(&s.items, HIGHLIGHTS))
                            .into_iter()
                            .map(|event| view! {
                                <article class="card">
                                    <h3 class="card__title">{event.title.resolve(code)}</h3>
                                    <p class="card__meta">
                                        {format_long_date(&event.starts_at, current)}
                                        " · "
                                        {resolve(event.location.as_ref(), code)}
                                    </p>
                                </article>
                            })
                            .collect_view()
                    }}
                </div>
                <a class="home-block__more" href=move || localized_href(locale.get(), "events")>
                    {move || locale.text("All events", "كل الفعاليات")}
                </a>
            </section>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_events_sorted_and_limited() {
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            {"id": "1", "title": "Done", "startsAt": "2024-01-10T09:00:00Z", "status": "completed"},
            {"id": "2", "title": "Later", "startsAt": "2024-06-01T09:00:00Z", "status": "upcoming"},
            {"id": "3", "title": "Sooner", "startsAt": "2024-03-01T09:00:00Z", "status": "upcoming"},
            {"id": "4", "title": "Now", "startsAt": "2024-02-01T09:00:00Z", "status": "ongoing"}
        ]))
        .unwrap();
        let ids: Vec<String> = upcoming_events(&events, 2).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["4", "3"]);
    }
}
