use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::shared::api_error::ApiError;
use contracts::shared::localized::LocalizedText;
use contracts::shared::validation::Validate;
use contracts::system::settings::{SiteSettings, SocialLinks};

use super::api::{fetch_settings, save_settings};
use crate::shared::dialog::{optional_text, split_localized, LocalizedField, LocalizedInputs};
use crate::shared::icons::icon;
use crate::shared::list_controller::Notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toasts;

const LOAD_FAILED: &str = "Failed to load settings";
const SAVE_FAILED: &str = "Failed to save settings";
const SAVED: &str = "Settings saved";

/// Validate, then save; feedback goes through `notifier`.
///
/// Returns `true` when the API accepted the settings.
pub async fn submit_settings<F, Fut>(settings: SiteSettings, notifier: &impl Notifier, save: F) -> bool
where
    F: FnOnce(SiteSettings) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if let Err(message) = settings.validate() {
        notifier.error(message);
        return false;
    }
    match save(settings).await {
        Ok(()) => {
            notifier.success(SAVED.to_string());
            true
        }
        Err(err) => {
            log::warn!("{} {}", SAVE_FAILED, err);
            notifier.error(err.user_message(SAVE_FAILED));
            false
        }
    }
}

/// Form signals of the settings page.
#[derive(Clone, Copy)]
struct SettingsFields {
    site_name: LocalizedField,
    tagline: LocalizedField,
    address: LocalizedField,
    contact_email: RwSignal<String>,
    contact_phone: RwSignal<String>,
    twitter: RwSignal<String>,
    facebook: RwSignal<String>,
    linkedin: RwSignal<String>,
    youtube: RwSignal<String>,
}

impl SettingsFields {
    fn new() -> Self {
        Self {
            site_name: LocalizedField::new(None),
            tagline: LocalizedField::new(None),
            address: LocalizedField::new(None),
            contact_email: RwSignal::new(String::new()),
            contact_phone: RwSignal::new(String::new()),
            twitter: RwSignal::new(String::new()),
            facebook: RwSignal::new(String::new()),
            linkedin: RwSignal::new(String::new()),
            youtube: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, s: &SiteSettings) {
        let set_pair = |field: &LocalizedField, value: Option<&LocalizedText>| {
            let (en, ar) = split_localized(value);
            field.en.set(en);
            field.ar.set(ar);
        };
        set_pair(&self.site_name, Some(&s.site_name));
        set_pair(&self.tagline, s.tagline.as_ref());
        set_pair(&self.address, s.address.as_ref());
        self.contact_email.set(s.contact_email.clone().unwrap_or_default());
        self.contact_phone.set(s.contact_phone.clone().unwrap_or_default());
        self.twitter.set(s.social.twitter.clone().unwrap_or_default());
        self.facebook.set(s.social.facebook.clone().unwrap_or_default());
        self.linkedin.set(s.social.linkedin.clone().unwrap_or_default());
        self.youtube.set(s.social.youtube.clone().unwrap_or_default());
    }

    fn collect(&self) -> SiteSettings {
        SiteSettings {
            site_name: self.site_name.value(),
            tagline: self.tagline.optional(),
            contact_email: optional_text(&self.contact_email.get_untracked()),
            contact_phone: optional_text(&self.contact_phone.get_untracked()),
            address: self.address.optional(),
            social: SocialLinks {
                twitter: optional_text(&self.twitter.get_untracked()),
                facebook: optional_text(&self.facebook.get_untracked()),
                linkedin: optional_text(&self.linkedin.get_untracked()),
                youtube: optional_text(&self.youtube.get_untracked()),
            },
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = use_toasts();
    let fields = SettingsFields::new();
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_settings().await {
                Ok(settings) => fields.fill(&settings),
                Err(err) => {
                    log::warn!("{} {}", LOAD_FAILED, err);
                    toasts.error(err.user_message(LOAD_FAILED));
                }
            }
            let _ = loading.try_set(false);
        });
    };
    load();

    let on_save = move |_| {
        let settings = fields.collect();
        saving.set(true);
        spawn_local(async move {
            submit_settings(settings, &toasts, |s| async move { save_settings(&s).await }).await;
            let _ = saving.try_set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("settings")}
                    <h1 class="page__title">"Site settings"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get() || saving.get())
                    >
                        {icon("refresh")}
                        " Reload"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || loading.get() || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || loading.get()>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                <div class="form" class:form--disabled=move || loading.get()>
                    <LocalizedInputs label="Site name" en=fields.site_name.en ar=fields.site_name.ar />
                    <LocalizedInputs label="Tagline" en=fields.tagline.en ar=fields.tagline.ar />
                    <LocalizedInputs label="Address" en=fields.address.en ar=fields.address.ar multiline=true />

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Contact email"</Label>
                            <Input value=fields.contact_email input_type=InputType::Email />
                        </div>
                        <div class="form__group">
                            <Label>"Contact phone"</Label>
                            <Input value=fields.contact_phone />
                        </div>
                    </div>

                    <div class="form__section">
                        <h4 class="form__section-title">"Social links"</h4>
                        <div class="form__row">
                            <div class="form__group">
                                <Label>"Twitter"</Label>
                                <Input value=fields.twitter />
                            </div>
                            <div class="form__group">
                                <Label>"Facebook"</Label>
                                <Input value=fields.facebook />
                            </div>
                        </div>
                        <div class="form__row">
                            <div class="form__group">
                                <Label>"LinkedIn"</Label>
                                <Input value=fields.linkedin />
                            </div>
                            <div class="form__group">
                                <Label>"YouTube"</Label>
                                <Input value=fields.youtube />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorded {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for Recorded {
        fn success(&self, message: String) {
            self.successes.borrow_mut().push(message);
        }

        fn error(&self, message: String) {
            self.errors.borrow_mut().push(message);
        }
    }

    fn valid_settings() -> SiteSettings {
        SiteSettings {
            site_name: LocalizedText::pair("Research Institute", "معهد البحوث"),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_settings_are_not_sent() {
        let notifier = Recorded::default();
        let calls = Cell::new(0);
        let saved = block_on(submit_settings(SiteSettings::default(), &notifier, |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));
        assert!(!saved);
        assert_eq!(calls.get(), 0);
        assert_eq!(notifier.errors.borrow().as_slice(), ["Site name is required"]);
    }

    #[test]
    fn test_save_success_toasts() {
        let notifier = Recorded::default();
        let saved = block_on(submit_settings(valid_settings(), &notifier, |_| async { Ok(()) }));
        assert!(saved);
        assert_eq!(notifier.successes.borrow().as_slice(), [SAVED]);
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let notifier = Recorded::default();
        let saved = block_on(submit_settings(valid_settings(), &notifier, |_| async {
            Err(ApiError::from_status(422, r#"{"message":"Contact email is blocked"}"#))
        }));
        assert!(!saved);
        assert_eq!(notifier.errors.borrow().as_slice(), ["Contact email is blocked"]);

        let notifier = Recorded::default();
        block_on(submit_settings(valid_settings(), &notifier, |_| async {
            Err(ApiError::Network("connection refused".into()))
        }));
        assert_eq!(notifier.errors.borrow().as_slice(), [SAVE_FAILED]);
    }
}
