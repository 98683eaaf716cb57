//! Active site locale.
//!
//! Public pages take the locale from the `/:locale` path segment; the admin
//! console uses the last locale the visitor picked. Whatever is active is
//! mirrored onto `<html lang dir>` so Arabic pages render right-to-left.

use leptos::prelude::*;

use contracts::shared::localized::{Locale, LocalizedText};

use super::config::config;
use super::storage;

#[derive(Clone, Copy)]
pub struct LocaleContext {
    locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn new(initial: Locale) -> Self {
        Self {
            locale: RwSignal::new(initial),
        }
    }

    pub fn get(&self) -> Locale {
        self.locale.get()
    }

    pub fn code(&self) -> &'static str {
        self.locale.get().code()
    }

    pub fn set(&self, locale: Locale) {
        if self.locale.get_untracked() != locale {
            self.locale.set(locale);
            storage::save_preferred_locale(locale.code());
        }
    }

    /// Reactive UI label for the active locale.
    pub fn text(&self, en: &'static str, ar: &'static str) -> String {
        ui_text(self.get(), en, ar)
    }

    /// Reactive display string of an API field.
    pub fn resolve(&self, value: &LocalizedText) -> String {
        value.resolve(self.code())
    }
}

/// Label in `locale`, English when the Arabic text is missing.
pub fn ui_text(locale: Locale, en: &str, ar: &str) -> String {
    LocalizedText::pair(en, ar).resolve(locale.code())
}

/// Locale stored from a previous visit, else the configured default.
pub fn initial_locale() -> Locale {
    storage::get_preferred_locale()
        .map(|code| config().locale_for(&code))
        .unwrap_or_else(|| config().default_locale())
}

/// Create the context, provide it and keep `<html>` in sync with it.
pub fn provide_locale() -> LocaleContext {
    let ctx = LocaleContext::new(initial_locale());
    provide_context(ctx);

    Effect::new(move |_| {
        let locale = ctx.get();
        apply_to_document(locale);
    });

    ctx
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not provided in context")
}

fn apply_to_document(locale: Locale) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("lang", locale.code()) {
        log::warn!("failed to set html lang: {:?}", e);
    }
    let _ = root.set_attribute("dir", locale.dir());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_text_picks_locale() {
        assert_eq!(ui_text(Locale::Ar, "Events", "الفعاليات"), "الفعاليات");
        assert_eq!(ui_text(Locale::En, "Events", "الفعاليات"), "Events");
    }

    #[test]
    fn test_ui_text_falls_back_to_english() {
        assert_eq!(ui_text(Locale::Ar, "Settings", ""), "Settings");
    }
}
