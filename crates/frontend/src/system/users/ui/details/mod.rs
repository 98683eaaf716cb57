use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::system::users::{User, UserDto, UserRole, UserStatus};

use super::super::api::UserController;
use crate::shared::dialog::{dialog_title, FormDialog};

#[component]
pub fn UserDialog(
    existing: Option<User>,
    controller: UserController,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|u| u.id.clone()));
    let initial = existing.as_ref().map(UserDto::from).unwrap_or_default();

    let name = RwSignal::new(initial.name.clone());
    let email = RwSignal::new(initial.email.clone());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(initial.role.code().to_string());
    let status = RwSignal::new(initial.status.code().to_string());
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        // Password is only sent, and only checked, when creating.
        let dto = UserDto {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: is_new.then(|| password.get_untracked()),
            role: UserRole::from_code(&role.get_untracked()).unwrap_or_default(),
            status: UserStatus::from_code(&status.get_untracked()).unwrap_or_default(),
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

    let title = dialog_title::<User>(is_new);

    view! {
        <FormDialog
            title=title
            saving=saving
            on_close=on_close
            on_save=Callback::new(on_save)
        >
            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name />
            </div>

            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=email input_type=InputType::Email />
            </div>

            <Show when=move || is_new>
                <div class="form__group">
                    <Label>"Password"</Label>
                    <Input value=password input_type=InputType::Password placeholder="At least 8 characters" />
                </div>
            </Show>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Role"</Label>
                    <Select value=role>
                        {UserRole::ALL
                            .iter()
                            .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=status>
                        {UserStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>
        </FormDialog>
    }
}
