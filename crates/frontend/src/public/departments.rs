use leptos::prelude::*;

use contracts::domain::a001_department_section::DepartmentSection;
use contracts::domain::a002_department::Department;
use contracts::shared::list_filter::{filter_items, FilterState};
use contracts::shared::localized::resolve;

use super::common::{ListNotice, PublicHeading};
use crate::domain::a001_department_section::api as sections;
use crate::domain::a002_department::api as departments;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::SearchInput;
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;

/// Visible sections in display order, each with its matching active
/// departments. Sections left without departments are dropped while a
/// search is active.
pub fn group_by_section(
    sections: &[DepartmentSection],
    departments: &[Department],
    filter: &FilterState,
    locale: &str,
) -> Vec<(DepartmentSection, Vec<Department>)> {
    let mut ordered: Vec<&DepartmentSection> = sections.iter().filter(|s| s.is_visible).collect();
    ordered.sort_by_key(|s| s.sort_order);

    let active: Vec<Department> = departments.iter().filter(|d| d.is_active).cloned().collect();
    let matching = filter_items(&active, filter, locale);

    ordered
        .into_iter()
        .map(|section| {
            let members = matching
                .iter()
                .filter(|d| d.section_id.as_deref() == Some(section.id.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            (section.clone(), members)
        })
        .filter(|(_, members)| !filter.is_active() || !members.is_empty())
        .collect()
}

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let locale = use_locale();
    let section_list = use_list_controller(sections::public_sections_api(), sections::MESSAGES);
    let department_list = use_list_controller(departments::departments_api(), departments::MESSAGES);
    let search = RwSignal::new(String::new());

    spawn_load(section_list);
    spawn_load(department_list);

    let section_state = *section_list.store();
    let department_state = *department_list.store();

    let groups = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get());
        let code = locale.code();
        section_state.with(|s| department_state.with(|d| group_by_section(&s.items, &d.items, &filter, code)))
    });

    view! {
        <PageFrame page_id="public_departments--public" category=PAGE_CAT_PUBLIC>
            <PublicHeading title=Signal::derive(move || locale.text("Departments", "الأقسام")) />
            <SearchInput value=search placeholder=Signal::derive(move || locale.text("Search departments...", "ابحث في الأقسام...")) />
            <ListNotice
                loading=Signal::derive(move || section_state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || section_state.with(|s| s.loaded) && groups.with(Vec::is_empty))
            />
            {move || {
                let code = locale.code();
                groups.get().into_iter().map(|(section, members)| view! {
                    <section class="section-block">
                        <h2 class="section-block__title">{section.name.resolve(code)}</h2>
                        <p class="section-block__text">{resolve(section.description.as_ref(), code)}</p>
                        <ul class="department-list">
                            {members.into_iter().map(|d| view! {
                                <li class="department-list__item">
                                    <h3>{d.name.resolve(code)}</h3>
                                    <p>{resolve(d.description.as_ref(), code)}</p>
                                    {d.head_name.clone().map(|head| view! { <p class="text-muted">{head}</p> })}
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                }).collect_view()
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixtures() -> (Vec<DepartmentSection>, Vec<Department>) {
        let sections = serde_json::from_value(json!([
            {"id": "s2", "name": "Applied", "sortOrder": 2},
            {"id": "s1", "name": "Basic", "sortOrder": 1},
            {"id": "s3", "name": "Hidden", "sortOrder": 0, "isVisible": false}
        ]))
        .unwrap();
        let departments = serde_json::from_value(json!([
            {"id": "d1", "sectionId": "s1", "name": "Physics"},
            {"id": "d2", "sectionId": "s2", "name": "Corrosion"},
            {"id": "d3", "sectionId": "s2", "name": "Welding", "isActive": false}
        ]))
        .unwrap();
        (sections, departments)
    }

    #[test]
    fn test_sections_ordered_and_hidden_dropped() {
        let (sections, departments) = fixtures();
        let groups = group_by_section(&sections, &departments, &FilterState::default(), "en");
        let ids: Vec<&str> = groups.iter().map(|(s, _)| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn test_search_drops_empty_sections() {
        let (sections, departments) = fixtures();
        let groups = group_by_section(&sections, &departments, &FilterState::with_search("corr"), "en");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1[0].id, "d2");
    }
}
