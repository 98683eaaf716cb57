//! Building blocks shared by list screens: search box, facet selects,
//! match highlighting and the guarded delete button.
use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use thaw::*;

use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::FILTER_ALL;

use super::icons::icon;

/// Delay before a typed search term is applied.
const SEARCH_DEBOUNCE_MS: u32 = 250;

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Matching runs on a lowercased copy, so every character's position in the
/// copy is mapped back to `text`. A match that starts or ends inside the
/// expansion of a single character (`İ` lowercases to two chars) is skipped.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let needle = filter.to_lowercase();

    // (offset in lowered, offset in text) at every character boundary
    let mut lowered = String::with_capacity(text.len());
    let mut boundaries = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        boundaries.push((lowered.len(), offset));
        lowered.extend(ch.to_lowercase());
    }
    boundaries.push((lowered.len(), text.len()));

    let to_text = |pos: usize| {
        boundaries
            .binary_search_by_key(&pos, |(lower, _)| *lower)
            .ok()
            .map(|i| boundaries[i].1)
    };

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        match (to_text(start), to_text(end)) {
            (Some(text_start), Some(text_end)) => {
                ranges.push((text_start, text_end));
                from = end;
            }
            _ => from = start + lowered[start..].chars().next().map_or(1, char::len_utf8),
        }
    }
    ranges
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied search term
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let generation = StoredValue::new(0u32);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g = g.wrapping_add(1));
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                value.set(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g = g.wrapping_add(1));
        set_input_value.set(String::new());
        value.set(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class=move || if value.with(|v| v.is_empty()) { "search-input__field" } else { "search-input__field search-input__field--active" }
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Categorical filter; the first option is the "all" sentinel.
#[component]
pub fn FacetSelect(
    value: RwSignal<String>,
    #[prop(into)] all_label: Signal<String>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <Select value=value>
            <option value=FILTER_ALL>{move || all_label.get()}</option>
            <For
                each=move || options.get()
                key=|(v, _)| v.clone()
                children=move |(v, label): (String, String)| view! { <option value=v>{label}</option> }
            />
        </Select>
    }
}

/// `(id, label)` pairs for a select fed by another entity's list.
pub fn record_options<T: EntityRecord>(items: &[T], label: impl Fn(&T) -> String) -> Vec<(String, String)> {
    items.iter().map(|item| (item.id().to_string(), label(item))).collect()
}

/// Label of the option whose value is `id`, empty when unknown.
pub fn option_label(options: &[(String, String)], id: Option<&str>) -> String {
    id.and_then(|id| options.iter().find(|(value, _)| value == id))
        .map(|(_, label)| label.clone())
        .unwrap_or_default()
}

/// Delete action that is disabled, with the reason as tooltip, while a
/// precondition blocks it.
#[component]
pub fn DeleteButton(
    blocker: Option<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let blocked = blocker.is_some();
    let title = blocker.unwrap_or_else(|| "Delete".to_string());
    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            disabled=Signal::derive(move || blocked || disabled.get())
            on_click=move |_| on_delete.run(())
            attr:title=title
        >
            {icon("delete")}
        </Button>
    }
}

/// Title row of an admin list: count badge, optional "New" and "Refresh".
#[component]
pub fn ListPageHeader(
    title: &'static str,
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional)] on_create: Option<Callback<()>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || count.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {on_create.map(|on_create| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_create.run(())
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </div>
        </div>
    }
}

/// Placeholder row shown while loading or when nothing matches.
#[component]
pub fn EmptyRow(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
    colspan: u32,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get() || empty.get()>
            <tr class="table__empty">
                <td colspan=colspan.to_string()>
                    {move || if loading.get() { "Loading..." } else { "No records match the current filter" }}
                </td>
            </tr>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Materials Lab, lab two", "LAB"), vec![(10, 13), (15, 18)]);
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("Materials Lab", "").is_empty());
        assert!(match_ranges("Materials Lab", "xyz").is_empty());
    }

    #[test]
    fn test_record_options_and_lookup() {
        use contracts::domain::a001_department_section::DepartmentSection;

        let sections: Vec<DepartmentSection> = serde_json::from_value(serde_json::json!([
            {"id": "s1", "name": {"en": "Sciences", "ar": "العلوم"}},
            {"id": "s2", "name": "Support"}
        ]))
        .unwrap();
        let options = record_options(&sections, |s| s.name.resolve("ar"));
        assert_eq!(options[0], ("s1".to_string(), "العلوم".to_string()));
        assert_eq!(option_label(&options, Some("s2")), "Support");
        assert_eq!(option_label(&options, Some("missing")), "");
        assert_eq!(option_label(&options, None), "");
    }

    #[test]
    fn test_match_ranges_when_lowercasing_changes_lengths() {
        // İ grows by one byte when lowercased, the Kelvin sign shrinks by two
        let text = "İİ\u{212A}";
        let ranges = match_ranges(text, "k");
        assert_eq!(ranges, vec![(4, 7)]);
        assert_eq!(&text[4..7], "\u{212A}");

        // "i" only covers half of the lowercased "İ"
        assert!(match_ranges("İstanbul", "i").is_empty());
        assert_eq!(match_ranges("İstanbul", "i\u{307}s"), vec![(0, 3)]);
    }

    #[test]
    fn test_match_ranges_arabic() {
        let text = "مختبر المواد";
        let ranges = match_ranges(text, "المواد");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].0..ranges[0].1], "المواد");
    }
}
