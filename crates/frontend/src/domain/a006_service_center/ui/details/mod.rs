use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a006_service_center::{CenterHead, ServiceCenter, ServiceCenterDto};
use contracts::shared::localized::{Locale, LocalizedText};

use super::super::api::ServiceCenterController;
use crate::shared::dialog::{dialog_title, optional_text, slug_pair, FormDialog, LocalizedField, LocalizedInputs, NameWithSlug};

/// Head block is dropped entirely when every field is blank.
fn center_head(name: LocalizedText, title: Option<LocalizedText>, email: &str, phone: &str) -> Option<CenterHead> {
    let email = optional_text(email);
    let phone = optional_text(phone);
    if name.is_blank() && title.is_none() && email.is_none() && phone.is_none() {
        return None;
    }
    Some(CenterHead { name, title, email, phone })
}

#[component]
pub fn ServiceCenterDialog(
    existing: Option<ServiceCenter>,
    controller: ServiceCenterController,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|c| c.id.clone()));
    let initial = existing.as_ref().map(ServiceCenterDto::from).unwrap_or_else(|| ServiceCenterDto {
        is_active: true,
        ..Default::default()
    });
    let head = initial.center_head.clone().unwrap_or_default();

    let names = RwSignal::new(slug_pair(&initial.name, &initial.slug));
    let name_ar = RwSignal::new(initial.name.get(Locale::Ar));
    let description = LocalizedField::new(initial.description.as_ref());
    let email = RwSignal::new(initial.email.clone().unwrap_or_default());
    let phone = RwSignal::new(initial.phone.clone().unwrap_or_default());
    let is_active = RwSignal::new(initial.is_active);
    let head_name = LocalizedField::new(Some(&head.name));
    let head_title = LocalizedField::new(head.title.as_ref());
    let head_email = RwSignal::new(head.email.clone().unwrap_or_default());
    let head_phone = RwSignal::new(head.phone.clone().unwrap_or_default());
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let pair = names.get_untracked();
        let dto = ServiceCenterDto {
            name: LocalizedText::from_inputs(&pair.name, &name_ar.get_untracked()),
            slug: pair.slug.trim().to_string(),
            description: description.optional(),
            center_head: center_head(
                head_name.value(),
                head_title.optional(),
                &head_email.get_untracked(),
                &head_phone.get_untracked(),
            ),
            email: optional_text(&email.get_untracked()),
            phone: optional_text(&phone.get_untracked()),
            is_active: is_active.get_untracked(),
        };
        saving.set(true);
        spawn_local(async move {
            let outcome = match existing_id.get_value() {
                Some(id) => controller.update(&id, &dto).await,
                None => controller.create(&dto).await,
            };
            let _ = saving.try_set(false);
            if outcome.is_completed() {
                on_close.run(());
            }
        });
    };

    let title = dialog_title::<ServiceCenter>(is_new);

    view! {
        <FormDialog
            title=title
            saving=saving
            on_close=on_close
            on_save=Callback::new(on_save)
        >
            <NameWithSlug
                names=names
                name_ar=name_ar
                regenerate=is_new
                slug_placeholder="materials-testing-lab"
            />

            <LocalizedInputs label="Description" en=description.en ar=description.ar multiline=true />

            <div class="form__row">
                <div class="form__group">
                    <Label>"Email"</Label>
                    <Input value=email input_type=InputType::Email />
                </div>
                <div class="form__group">
                    <Label>"Phone"</Label>
                    <Input value=phone />
                </div>
            </div>

            <div class="form__section">
                <h4 class="form__section-title">"Center head"</h4>
                <LocalizedInputs label="Name" en=head_name.en ar=head_name.ar />
                <LocalizedInputs label="Title" en=head_title.en ar=head_title.ar />
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=head_email input_type=InputType::Email />
                    </div>
                    <div class="form__group">
                        <Label>"Phone"</Label>
                        <Input value=head_phone />
                    </div>
                </div>
            </div>

            <div class="form__group">
                <Checkbox checked=is_active label="Active" />
            </div>
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_head_is_omitted() {
        assert_eq!(center_head(LocalizedText::default(), None, " ", ""), None);
    }

    #[test]
    fn test_head_with_email_only() {
        let head = center_head(LocalizedText::default(), None, "lab@institute.org", "").unwrap();
        assert_eq!(head.email.as_deref(), Some("lab@institute.org"));
        assert_eq!(head.phone, None);
    }
}
