use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a002_department::{Department, DepartmentDto};
use contracts::shared::localized::{Locale, LocalizedText};

use super::super::api::DepartmentController;
use crate::shared::dialog::{dialog_title, optional_text, slug_pair, FormDialog, LocalizedField, LocalizedInputs, NameWithSlug};

#[component]
pub fn DepartmentDialog(
    existing: Option<Department>,
    controller: DepartmentController,
    #[prop(into)] section_options: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|d| d.id.clone()));
    let initial = existing.as_ref().map(DepartmentDto::from).unwrap_or_else(|| DepartmentDto {
        is_active: true,
        ..Default::default()
    });

    let section_id = RwSignal::new(initial.section_id.clone());
    let names = RwSignal::new(slug_pair(&initial.name, &initial.slug));
    let name_ar = RwSignal::new(initial.name.get(Locale::Ar));
    let description = LocalizedField::new(initial.description.as_ref());
    let head_name = RwSignal::new(initial.head_name.clone().unwrap_or_default());
    let is_active = RwSignal::new(initial.is_active);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let pair = names.get_untracked();
        let dto = DepartmentDto {
            section_id: section_id.get_untracked(),
            name: LocalizedText::from_inputs(&pair.name, &name_ar.get_untracked()),
            slug: pair.slug.trim().to_string(),
            description: description.optional(),
            head_name: optional_text(&head_name.get_untracked()),
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

    let title = dialog_title::<Department>(is_new);

    view! {
        <FormDialog
            title=title
            saving=saving
            on_close=on_close
            on_save=Callback::new(on_save)
        >
            <div class="form__group">
                <Label>"Section"</Label>
                <Select value=section_id>
                    <option value="">"-- Select a section --"</option>
                    <For
                        each=move || section_options.get()
                        key=|(id, _)| id.clone()
                        children=move |(id, label): (String, String)| view! { <option value=id>{label}</option> }
                    />
                </Select>
            </div>

            <NameWithSlug
                names=names
                name_ar=name_ar
                regenerate=is_new
                slug_placeholder="materials-engineering"
            />

            <LocalizedInputs label="Description" en=description.en ar=description.ar multiline=true />

            <div class="form__group">
                <Label>"Head of department"</Label>
                <Input value=head_name />
            </div>

            <div class="form__group">
                <Checkbox checked=is_active label="Active" />
            </div>
        </FormDialog>
    }
}
