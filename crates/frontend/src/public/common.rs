use leptos::prelude::*;

use contracts::shared::localized::Locale;

/// Link to `path` on the public site in `locale`.
pub fn localized_href(locale: Locale, path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), path)
    }
}

/// Same page in another locale: swaps the leading `/:locale` segment.
pub fn switch_locale_path(current: &str, target: Locale) -> String {
    let rest = current
        .trim_start_matches('/')
        .split_once('/')
        .map(|(_, rest)| rest)
        .unwrap_or("");
    localized_href(target, rest)
}

#[component]
pub fn PublicHeading(#[prop(into)] title: Signal<String>, #[prop(optional, into)] lead: MaybeProp<String>) -> impl IntoView {
    view! {
        <header class="public-heading">
            <h1 class="public-heading__title">{move || title.get()}</h1>
            {move || lead.get().filter(|l| !l.is_empty()).map(|l| view! { <p class="public-heading__lead">{l}</p> })}
        </header>
    }
}

/// Loading / empty notice under a public list.
#[component]
pub fn ListNotice(#[prop(into)] loading: Signal<bool>, #[prop(into)] empty: Signal<bool>) -> impl IntoView {
    let locale = crate::shared::locale::use_locale();
    view! {
        <Show when=move || loading.get() || empty.get()>
            <p class="public-notice">
                {move || if loading.get() {
                    locale.text("Loading...", "جارٍ التحميل...")
                } else {
                    locale.text("Nothing found.", "لا توجد نتائج.")
                }}
            </p>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_href() {
        assert_eq!(localized_href(Locale::En, ""), "/en");
        assert_eq!(localized_href(Locale::Ar, "/news/"), "/ar/news");
    }

    #[test]
    fn test_switch_locale_path() {
        assert_eq!(switch_locale_path("/en/library", Locale::Ar), "/ar/library");
        assert_eq!(switch_locale_path("/ar", Locale::En), "/en");
        assert_eq!(switch_locale_path("/", Locale::Ar), "/ar");
    }
}
