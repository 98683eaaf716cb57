use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::shared::list_filter::FilterState;
use contracts::shared::localized::resolve;
use contracts::system::settings::SiteSettings;

use super::common::{ListNotice, PublicHeading};
use crate::domain::a005_staff::api::{staff_api, MESSAGES};
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::SearchInput;
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::settings::api::fetch_settings;

/// About page: institute contact card and the staff directory.
#[component]
pub fn AboutPage() -> impl IntoView {
    let locale = use_locale();
    let settings = RwSignal::new(SiteSettings::default());
    let staff = use_list_controller(staff_api(), MESSAGES);
    let state = *staff.store();
    let search = RwSignal::new(String::new());

    spawn_load(staff);
    spawn_local(async move {
        match fetch_settings().await {
            Ok(s) => {
                let _ = settings.try_set(s);
            }
            Err(err) => log::warn!("settings unavailable on about page: {}", err),
        }
    });

    let visible = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    view! {
        <PageFrame page_id="public_about--public" category=PAGE_CAT_PUBLIC>
            <PublicHeading
                title=Signal::derive(move || locale.text("About us", "من نحن"))
                lead=Signal::derive(move || settings.with(|s| resolve(s.tagline.as_ref(), locale.code())))
            />

            <section class="contact-card">
                <h2>{move || settings.with(|s| s.site_name.resolve(locale.code()))}</h2>
                <p>{move || settings.with(|s| resolve(s.address.as_ref(), locale.code()))}</p>
                {move || settings.with(|s| s.contact_email.clone()).map(|email| view! {
                    <p><a href=format!("mailto:{}", email)>{email.clone()}</a></p>
                })}
                {move || settings.with(|s| s.contact_phone.clone()).map(|phone| view! { <p dir="ltr">{phone}</p> })}
            </section>

            <section class="staff-directory">
                <h2>{move || locale.text("Our staff", "فريق العمل")}</h2>
                <SearchInput value=search placeholder=Signal::derive(move || locale.text("Search staff...", "ابحث في فريق العمل...")) />
                <ListNotice
                    loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                    empty=Signal::derive(move || state.with(|s| s.loaded) && visible.with(Vec::is_empty))
                />
                <div class="card-grid">
                    {move || {
                        let code = locale.code();
                        visible.get().into_iter().map(|member| view! {
                            <article class="card card--person">
                                {member.photo_url.clone().map(|src| view! { <img class="card__photo" src=src alt="" /> })}
                                <h3 class="card__title">{member.name.resolve(code)}</h3>
                                <p class="card__meta">{resolve(member.position.as_ref(), code)}</p>
                                {member.email.clone().map(|email| view! {
                                    <a class="card__link" href=format!("mailto:{}", email)>{email.clone()}</a>
                                })}
                            </article>
                        }).collect_view()
                    }}
                </div>
            </section>
        </PageFrame>
    }
}
