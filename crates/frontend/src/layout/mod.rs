pub mod footer;
pub mod header;
pub mod left;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_params_map;

use contracts::system::settings::SiteSettings;

use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::locale::use_locale;
use crate::system::settings::api::fetch_settings;

/// Admin console shell.
///
/// ```text
/// +------------------------------------------+
/// |              top header                  |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn AdminShell() -> impl IntoView {
    let sidebar_open = RwSignal::new(true);

    view! {
        <div class="app-layout">
            <div class="top-header">
                <div class="top-header__brand">
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                        title=move || if sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                    >
                        {icon("layers")}
                    </button>
                    <span class="top-header__title">"Institute console"</span>
                </div>
                <div class="top-header__actions">
                    <a class="top-header__icon-btn" href="/" title="Open public site">
                        {icon("globe")}
                    </a>
                </div>
            </div>

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !sidebar_open.get()>
                    <left::Sidebar />
                </div>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}

/// Public site shell. The `:locale` path segment drives the active locale;
/// unsupported codes fall back to the configured default.
#[component]
pub fn PublicShell() -> impl IntoView {
    let params = use_params_map();
    let locale = use_locale();
    let settings = RwSignal::new(SiteSettings::default());

    Effect::new(move |_| {
        let code = params.with(|p| p.get("locale").unwrap_or_default());
        locale.set(config().locale_for(&code));
    });

    spawn_local(async move {
        match fetch_settings().await {
            Ok(s) => {
                let _ = settings.try_set(s);
            }
            Err(err) => log::warn!("site settings unavailable: {}", err),
        }
    });

    let site_name = Signal::derive(move || {
        let name = settings.with(|s| s.site_name.resolve(locale.code()));
        if name.is_empty() {
            locale.text("Research Institute", "معهد البحوث")
        } else {
            name
        }
    });

    view! {
        <div class="public-layout">
            <header::Header site_name=site_name />
            <main class="public-main">
                <Outlet />
            </main>
            <footer::Footer settings=settings />
        </div>
    }
}
