use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::public::common::{localized_href, switch_locale_path};
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;

/// (path, English label, Arabic label)
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("", "Home", "الرئيسية"),
    ("about", "About", "من نحن"),
    ("departments", "Departments", "الأقسام"),
    ("services", "Services", "الخدمات"),
    ("events", "Events", "الفعاليات"),
    ("news", "News", "الأخبار"),
    ("library", "Library", "المكتبة"),
    ("journal", "Journal", "المجلة"),
];

/// Public site header: brand, main navigation and the language switch.
#[component]
pub fn Header(#[prop(into)] site_name: Signal<String>) -> impl IntoView {
    let locale = use_locale();
    let pathname = use_location().pathname;

    let other_locale_href = move || {
        let target = locale.get().toggled();
        pathname.with(|p| switch_locale_path(p, target))
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href=move || localized_href(locale.get(), "")>
                    {move || site_name.get()}
                </a>
                <nav class="header__nav">
                    {NAV_ITEMS.iter().map(|(path, en, ar)| view! {
                        <a class="header__link" href=move || localized_href(locale.get(), path)>
                            {move || locale.text(en, ar)}
                        </a>
                    }).collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <a class="button button--ghost" href=move || localized_href(locale.get(), "dashboard")>
                    {icon("user")}
                    {move || locale.text(" My dashboard", " لوحتي")}
                </a>
                <a class="button button--ghost" href=other_locale_href>
                    {icon("globe")}
                    {move || format!(" {}", locale.get().toggled().native_name())}
                </a>
            </div>
        </header>
    }
}
