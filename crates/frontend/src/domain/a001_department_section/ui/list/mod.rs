use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a001_department_section::DepartmentSection;
use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{FilterState, FILTER_ALL};

use super::super::api::{sections_api, MESSAGES};
use super::details::DepartmentSectionDialog;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::dialog::Editing;
use crate::shared::icons::icon;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{
    highlight_matches, DeleteButton, EmptyRow, FacetSelect, ListPageHeader, SearchInput,
};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn DepartmentSectionList() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(sections_api(), MESSAGES);
    let state = *controller.store();

    let search = RwSignal::new(String::new());
    let visibility = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<DepartmentSection>::Closed);

    spawn_load(controller);

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("visibility", visibility.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    let visibility_options = Signal::derive(|| {
        vec![
            ("visible".to_string(), "Visible".to_string()),
            ("hidden".to_string(), "Hidden".to_string()),
        ]
    });

    view! {
        <PageFrame page_id="a001_department_section--list" category=PAGE_CAT_LIST>
            <ListPageHeader
                title=DepartmentSection::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Name or slug..." />
                        <FacetSelect value=visibility all_label="All sections" options=visibility_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Slug"</TableHeaderCell>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Departments"</TableHeaderCell>
                                <TableHeaderCell>"Visibility"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <EmptyRow
                                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                                empty=Signal::derive(move || visible_items.with(Vec::is_empty))
                                colspan=6
                            />
                            {move || {
                                let term = search.get();
                                let code = locale.code();
                                visible_items.get().into_iter().map(|section| {
                                    let id = section.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let name = section.name.resolve(code);
                                    let for_edit = section.clone();
                                    let name_match = highlight_matches(&name, &term);
                                    let slug_match = highlight_matches(&section.slug, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name_match}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code>{slug_match}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{section.sort_order}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{section.departments_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if section.is_visible {
                                                        view! { <span class="badge badge--success">"Visible"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Hidden"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Editing::Existing(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <DeleteButton
                                                    blocker=blocker
                                                    disabled=Signal::derive(move || state.with(|s| s.is_pending()))
                                                    on_delete=Callback::new(move |_| on_delete(id.clone()))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                {move || editing.get().target().map(|existing| view! {
                    <DepartmentSectionDialog
                        existing=existing
                        controller=controller
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}
