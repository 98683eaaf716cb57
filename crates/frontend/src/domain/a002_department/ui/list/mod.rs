use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a002_department::Department;
use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{FilterState, FILTER_ALL};

use super::super::api::{departments_api, MESSAGES};
use super::details::DepartmentDialog;
use crate::domain::a001_department_section::api as sections;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::dialog::Editing;
use crate::shared::icons::icon;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{
    highlight_matches, option_label, record_options, DeleteButton, EmptyRow, FacetSelect,
    ListPageHeader, SearchInput,
};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn DepartmentList() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(departments_api(), MESSAGES);
    let state = *controller.store();
    let section_lookup = use_list_controller(sections::sections_api(), sections::MESSAGES);

    let search = RwSignal::new(String::new());
    let section = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<Department>::Closed);

    spawn_load(controller);
    spawn_load(section_lookup);

    let section_options = Signal::derive(move || {
        let code = locale.code();
        section_lookup
            .store()
            .with(|s| record_options(&s.items, |x| x.name.resolve(code)))
    });

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("section", section.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <PageFrame page_id="a002_department--list" category=PAGE_CAT_LIST>
            <ListPageHeader
                title=Department::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Name, slug or head..." />
                        <FacetSelect value=section all_label="All sections" options=section_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Section"</TableHeaderCell>
                                <TableHeaderCell>"Head"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <EmptyRow
                                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                                empty=Signal::derive(move || visible_items.with(Vec::is_empty))
                                colspan=5
                            />
                            {move || {
                                let term = search.get();
                                let code = locale.code();
                                let options = section_options.get();
                                visible_items.get().into_iter().map(|department| {
                                    let id = department.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let name = department.name.resolve(code);
                                    let head = department.head_name.clone().unwrap_or_default();
                                    let section_name = option_label(&options, department.section_id.as_deref());
                                    let active = department.is_active;
                                    let for_edit = department.clone();
                                    let name_match = highlight_matches(&name, &term);
                                    let head_match = highlight_matches(&head, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name_match}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{section_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{head_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if active {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Inactive"</span> }.into_any()
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
                    <DepartmentDialog
                        existing=existing
                        controller=controller
                        section_options=section_options
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}
