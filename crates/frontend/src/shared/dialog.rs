//! Modal form shell and the input helpers shared by create/edit dialogs.

use leptos::prelude::*;
use thaw::*;

use contracts::domain::common::EntityRecord;
use contracts::shared::localized::{Locale, LocalizedText};
use contracts::shared::slug::SlugPair;

use super::icons::icon;

/// "New department section" / "Edit department section".
pub fn dialog_title<T: EntityRecord>(is_new: bool) -> String {
    let verb = if is_new { "New" } else { "Edit" };
    format!("{verb} {}", T::element_name().to_lowercase())
}

/// Which create/edit dialog of a list screen is open.
#[derive(Debug, Clone, PartialEq)]
pub enum Editing<T> {
    Closed,
    New,
    Existing(T),
}

impl<T> Editing<T> {
    /// `Some(None)` for a new record, `Some(Some(record))` for an edit.
    pub fn target(self) -> Option<Option<T>> {
        match self {
            Editing::Closed => None,
            Editing::New => Some(None),
            Editing::Existing(record) => Some(Some(record)),
        }
    }
}

/// Overlay dialog with a title bar, scrollable body and Cancel/Save footer.
#[component]
pub fn FormDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] saving: Signal<bool>,
    on_close: Callback<()>,
    on_save: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {children()}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=saving
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_save.run(())
                        disabled=saving
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Side-by-side English / Arabic inputs for one bilingual field.
#[component]
pub fn LocalizedInputs(
    label: &'static str,
    en: RwSignal<String>,
    ar: RwSignal<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let field = move |value: RwSignal<String>, locale: Locale| {
        let placeholder = locale.native_name();
        if multiline {
            view! { <Textarea value=value placeholder=placeholder attr:dir=locale.dir() /> }.into_any()
        } else {
            view! { <Input value=value placeholder=placeholder attr:dir=locale.dir() /> }.into_any()
        }
    };

    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <div class="form__row">
                {field(en, Locale::En)}
                {field(ar, Locale::Ar)}
            </div>
        </div>
    }
}

/// Bilingual name inputs plus the slug derived from the English name.
///
/// With `regenerate` set (create dialogs) each English-name keystroke
/// rewrites the slug via [`SlugPair::edit_name`], discarding manual slug
/// edits. Otherwise the two inputs are independent.
#[component]
pub fn NameWithSlug(
    names: RwSignal<SlugPair>,
    name_ar: RwSignal<String>,
    regenerate: bool,
    #[prop(optional)] slug_placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>"Name"</Label>
            <div class="form__row">
                <input
                    class="form__input"
                    placeholder=Locale::En.native_name()
                    prop:value=move || names.with(|p| p.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        names.update(|p| {
                            if regenerate {
                                p.edit_name(value);
                            } else {
                                p.name = value;
                            }
                        });
                    }
                />
                <Input value=name_ar placeholder=Locale::Ar.native_name() attr:dir="rtl" />
            </div>
        </div>

        <div class="form__group">
            <Label>"Slug"</Label>
            <input
                class="form__input"
                placeholder=slug_placeholder
                prop:value=move || names.with(|p| p.slug.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    names.update(|p| p.edit_slug(value));
                }
            />
        </div>
    }
}

/// Name/slug pair pre-filled from an existing record's English name and slug.
pub fn slug_pair(name: &LocalizedText, slug: &str) -> SlugPair {
    SlugPair {
        name: name.get(Locale::En),
        slug: slug.to_string(),
    }
}

/// Signals holding both translations of a bilingual form field.
#[derive(Clone, Copy)]
pub struct LocalizedField {
    pub en: RwSignal<String>,
    pub ar: RwSignal<String>,
}

impl LocalizedField {
    pub fn new(initial: Option<&LocalizedText>) -> Self {
        let (en, ar) = split_localized(initial);
        Self {
            en: RwSignal::new(en),
            ar: RwSignal::new(ar),
        }
    }

    pub fn value(&self) -> LocalizedText {
        LocalizedText::from_inputs(&self.en.get_untracked(), &self.ar.get_untracked())
    }

    /// `None` when both inputs are blank.
    pub fn optional(&self) -> Option<LocalizedText> {
        optional_localized(&self.en.get_untracked(), &self.ar.get_untracked())
    }
}

/// Form pre-fill values of a bilingual field.
pub fn split_localized(value: Option<&LocalizedText>) -> (String, String) {
    match value {
        Some(text) => (text.get(Locale::En), text.get(Locale::Ar)),
        None => (String::new(), String::new()),
    }
}

pub fn optional_localized(en: &str, ar: &str) -> Option<LocalizedText> {
    let text = LocalizedText::from_inputs(en, ar);
    (!text.is_blank()).then_some(text)
}

/// Trimmed input, `None` when blank.
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_title_from_element_name() {
        use contracts::domain::a006_service_center::ServiceCenter;
        use contracts::system::users::User;

        assert_eq!(dialog_title::<ServiceCenter>(true), "New service center");
        assert_eq!(dialog_title::<User>(false), "Edit user");
    }

    #[test]
    fn test_optional_localized() {
        assert_eq!(optional_localized(" ", ""), None);
        assert_eq!(
            optional_localized("Lab ", "مختبر"),
            Some(LocalizedText::pair("Lab", "مختبر"))
        );
    }

    #[test]
    fn test_split_localized_plain_goes_to_english() {
        let text = LocalizedText::plain("Library");
        assert_eq!(split_localized(Some(&text)), ("Library".to_string(), String::new()));
        assert_eq!(split_localized(None), (String::new(), String::new()));
    }

    #[test]
    fn test_editing_target() {
        assert_eq!(Editing::<u8>::Closed.target(), None);
        assert_eq!(Editing::<u8>::New.target(), Some(None));
        assert_eq!(Editing::Existing(3u8).target(), Some(Some(3)));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" a@b.org "), Some("a@b.org".to_string()));
    }
}
