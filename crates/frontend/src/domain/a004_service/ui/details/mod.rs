use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a004_service::{Service, ServiceDto};

use super::super::api::ServiceController;
use crate::shared::dialog::{dialog_title, optional_text, FormDialog, LocalizedField, LocalizedInputs};

/// Blank → no price; unparsable input becomes NaN so validation rejects it.
fn parse_price(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.replace(',', ".").parse().unwrap_or(f64::NAN))
}

#[component]
pub fn ServiceDialog(
    existing: Option<Service>,
    controller: ServiceController,
    #[prop(into)] center_options: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_new = existing.is_none();
    let existing_id = StoredValue::new(existing.as_ref().map(|s| s.id.clone()));
    let initial = existing.as_ref().map(ServiceDto::from).unwrap_or_else(|| ServiceDto {
        is_active: true,
        ..Default::default()
    });

    let title = LocalizedField::new(Some(&initial.title));
    let description = LocalizedField::new(initial.description.as_ref());
    let category = RwSignal::new(initial.category.clone());
    let center_id = RwSignal::new(initial.center_id.clone().unwrap_or_default());
    let price = RwSignal::new(initial.price.map(|p| p.to_string()).unwrap_or_default());
    let is_active = RwSignal::new(initial.is_active);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = ServiceDto {
            title: title.value(),
            description: description.optional(),
            category: category.get_untracked().trim().to_string(),
            center_id: optional_text(&center_id.get_untracked()),
            price: parse_price(&price.get_untracked()),
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

    let dialog_title = dialog_title::<Service>(is_new);

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
                <Input value=category placeholder="testing, consulting..." />
            </div>

            <div class="form__group">
                <Label>"Service center"</Label>
                <Select value=center_id>
                    <option value="">"-- None --"</option>
                    <For
                        each=move || center_options.get()
                        key=|(id, _)| id.clone()
                        children=move |(id, label): (String, String)| view! { <option value=id>{label}</option> }
                    />
                </Select>
            </div>

            <div class="form__group">
                <Label>"Price"</Label>
                <Input value=price placeholder="0.00" />
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
    fn test_parse_price() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price(" 12.5 "), Some(12.5));
        assert_eq!(parse_price("7,25"), Some(7.25));
        assert!(parse_price("abc").is_some_and(f64::is_nan));
    }
}
