use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a001_department_section::{DepartmentSection, DepartmentSectionDto};
use contracts::shared::localized::{Locale, LocalizedText};
use contracts::shared::validation::parse_whole_number;

use super::super::api::SectionController;
use crate::shared::list_controller::Notifier;
use crate::shared::dialog::{dialog_title, slug_pair, FormDialog, LocalizedField, LocalizedInputs, NameWithSlug};

/// Create / edit dialog for a department section.
///
/// On create, the English name drives the slug through `SlugPair`: every
/// name keystroke regenerates it, a manual slug edit lasts until the next
/// name keystroke. Editing an existing section leaves its slug alone.
#[component]
pub fn DepartmentSectionDialog(
    existing: Option<DepartmentSection>,
    controller: SectionController,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|s| s.id.clone()));
    let initial = existing.as_ref().map(DepartmentSectionDto::from).unwrap_or_else(|| DepartmentSectionDto {
        is_visible: true,
        ..Default::default()
    });

    let names = RwSignal::new(slug_pair(&initial.name, &initial.slug));
    let name_ar = RwSignal::new(initial.name.get(Locale::Ar));
    let description = LocalizedField::new(initial.description.as_ref());
    let sort_order = RwSignal::new(initial.sort_order.to_string());
    let is_visible = RwSignal::new(initial.is_visible);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let sort_order = match parse_whole_number(&sort_order.get_untracked(), "Display order") {
            Ok(order) => order,
            Err(message) => {
                controller.notifier().error(message);
                return;
            }
        };
        let pair = names.get_untracked();
        let dto = DepartmentSectionDto {
            name: LocalizedText::from_inputs(&pair.name, &name_ar.get_untracked()),
            slug: pair.slug.trim().to_string(),
            description: description.optional(),
            sort_order,
            is_visible: is_visible.get_untracked(),
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

    let title = dialog_title::<DepartmentSection>(is_new);

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
                slug_placeholder="scientific-departments"
            />

            <LocalizedInputs label="Description" en=description.en ar=description.ar multiline=true />

            <div class="form__group">
                <Label>"Display order"</Label>
                <Input value=sort_order input_type=InputType::Number />
            </div>

            <div class="form__group">
                <Checkbox checked=is_visible label="Visible on the public site" />
            </div>
        </FormDialog>
    }
}
