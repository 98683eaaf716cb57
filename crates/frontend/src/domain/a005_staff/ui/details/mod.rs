use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a005_staff::{StaffMember, StaffMemberDto};

use super::super::api::StaffController;
use crate::shared::dialog::{dialog_title, optional_text, FormDialog, LocalizedField, LocalizedInputs};

#[component]
pub fn StaffDialog(
    existing: Option<StaffMember>,
    controller: StaffController,
    #[prop(into)] department_options: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|m| m.id.clone()));
    let initial = existing.as_ref().map(StaffMemberDto::from).unwrap_or_default();

    let name = LocalizedField::new(Some(&initial.name));
    let position = LocalizedField::new(initial.position.as_ref());
    let department_id = RwSignal::new(initial.department_id.clone().unwrap_or_default());
    let email = RwSignal::new(initial.email.clone().unwrap_or_default());
    let phone = RwSignal::new(initial.phone.clone().unwrap_or_default());
    let photo_url = RwSignal::new(initial.photo_url.clone().unwrap_or_default());
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = StaffMemberDto {
            name: name.value(),
            position: position.optional(),
            department_id: optional_text(&department_id.get_untracked()),
            email: optional_text(&email.get_untracked()),
            phone: optional_text(&phone.get_untracked()),
            photo_url: optional_text(&photo_url.get_untracked()),
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

    let title = dialog_title::<StaffMember>(is_new);

    view! {
        <FormDialog
            title=title
            saving=saving
            on_close=on_close
            on_save=Callback::new(on_save)
        >
            <LocalizedInputs label="Name" en=name.en ar=name.ar />
            <LocalizedInputs label="Position" en=position.en ar=position.ar />

            <div class="form__group">
                <Label>"Department"</Label>
                <Select value=department_id>
                    <option value="">"-- None --"</option>
                    <For
                        each=move || department_options.get()
                        key=|(id, _)| id.clone()
                        children=move |(id, label): (String, String)| view! { <option value=id>{label}</option> }
                    />
                </Select>
            </div>

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

            <div class="form__group">
                <Label>"Photo URL"</Label>
                <Input value=photo_url />
            </div>
        </FormDialog>
    }
}
