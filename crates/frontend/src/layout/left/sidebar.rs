//! Admin console sidebar with collapsible menu groups.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "organization",
            label: "Organization",
            icon: "building",
            items: vec![
                ("/admin/sections", "Department sections", "layers"),
                ("/admin/departments", "Departments", "building"),
                ("/admin/staff", "Staff", "users"),
            ],
        },
        MenuGroup {
            id: "activities",
            label: "Activities",
            icon: "briefcase",
            items: vec![
                ("/admin/events", "Events", "calendar"),
                ("/admin/services", "Services", "briefcase"),
                ("/admin/service-centers", "Service centers", "building"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "settings",
            items: vec![
                ("/admin/users", "Users", "user"),
                ("/admin/settings", "Site settings", "settings"),
            ],
        },
    ]
}

/// `true` when `pathname` is `item` or one of its sub-paths.
pub fn is_active_path(pathname: &str, item: &str) -> bool {
    pathname == item
        || pathname
            .strip_prefix(item)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let gid_click = group.id.to_string();
                let gid_exp = group.id.to_string();
                let gid_show = group.id.to_string();
                let items = StoredValue::new(group.items.clone());
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(path, label, icon_name)| {
                                    view! {
                                        <a
                                            href=path
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || pathname.with(|p| is_active_path(p, path))
                                            style:padding-left="10px"
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_path() {
        assert!(is_active_path("/admin/services", "/admin/services"));
        assert!(is_active_path("/admin/services/42", "/admin/services"));
        assert!(!is_active_path("/admin/service-centers", "/admin/services"));
    }

    #[test]
    fn test_menu_paths_are_unique() {
        let mut paths: Vec<&str> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(p, _, _)| p))
            .collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }
}
