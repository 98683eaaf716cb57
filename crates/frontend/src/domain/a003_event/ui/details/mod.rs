use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a003_event::{Event, EventDto, EventStatus};

use super::super::api::EventController;
use crate::shared::date_utils::{from_input_value, to_input_value};
use crate::shared::dialog::{dialog_title, optional_text, FormDialog, LocalizedField, LocalizedInputs};

#[component]
pub fn EventDialog(
    existing: Option<Event>,
    controller: EventController,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|e| e.id.clone()));
    let initial = existing.as_ref().map(EventDto::from).unwrap_or_default();

    let title = LocalizedField::new(Some(&initial.title));
    let description = LocalizedField::new(initial.description.as_ref());
    let location = LocalizedField::new(initial.location.as_ref());
    let category = RwSignal::new(initial.category.clone());
    let starts_at = RwSignal::new(to_input_value(&initial.starts_at));
    let ends_at = RwSignal::new(initial.ends_at.as_deref().map(to_input_value).unwrap_or_default());
    let status = RwSignal::new(initial.status.code().to_string());
    let image_url = RwSignal::new(initial.image_url.clone().unwrap_or_default());
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = EventDto {
            title: title.value(),
            description: description.optional(),
            category: category.get_untracked().trim().to_string(),
            location: location.optional(),
            starts_at: from_input_value(&starts_at.get_untracked()).unwrap_or_default(),
            ends_at: from_input_value(&ends_at.get_untracked()),
            status: EventStatus::from_code(&status.get_untracked()).unwrap_or_default(),
            image_url: optional_text(&image_url.get_untracked()),
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

    let dialog_title = dialog_title::<Event>(is_new);

    view! {
        <FormDialog
            title=dialog_title
            saving=saving
            on_close=on_close
            on_save=Callback::new(on_save)
        >
            <LocalizedInputs label="Title" en=title.en ar=title.ar />
            <LocalizedInputs label="Description" en=description.en ar=description.ar multiline=true />

            <div class="form__group">
                <Label>"Category"</Label>
                <Input value=category placeholder="conference, workshop..." />
            </div>

            <LocalizedInputs label="Location" en=location.en ar=location.ar />

            <div class="form__row">
                <div class="form__group">
                    <Label>"Starts"</Label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || starts_at.get()
                        on:input=move |ev| starts_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Ends"</Label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        prop:value=move || ends_at.get()
                        on:input=move |ev| ends_at.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form__group">
                <Label>"Status"</Label>
                <Select value=status>
                    {EventStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.code()>{s.label().resolve("en")}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="form__group">
                <Label>"Image URL"</Label>
                <Input value=image_url />
            </div>
        </FormDialog>
    }
}
