use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a005_staff::StaffMember;
use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{FilterState, FILTER_ALL};
use contracts::shared::localized::resolve;

use super::super::api::{staff_api, MESSAGES};
use super::details::StaffDialog;
use crate::domain::a002_department::api as departments;
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
pub fn StaffList() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(staff_api(), MESSAGES);
    let state = *controller.store();
    let department_lookup = use_list_controller(departments::departments_api(), departments::MESSAGES);

    let search = RwSignal::new(String::new());
    let department = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<StaffMember>::Closed);

    spawn_load(controller);
    spawn_load(department_lookup);

    let department_options = Signal::derive(move || {
        let code = locale.code();
        department_lookup
            .store()
            .with(|s| record_options(&s.items, |d| d.name.resolve(code)))
    });

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("department", department.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <PageFrame page_id="a005_staff--list" category=PAGE_CAT_LIST>
            <ListPageHeader
                title=StaffMember::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Name, position or email..." />
                        <FacetSelect value=department all_label="All departments" options=department_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Position"</TableHeaderCell>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
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
                                let departments = department_options.get();
                                visible_items.get().into_iter().map(|member| {
                                    let id = member.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let name = member.name.resolve(code);
                                    let position = resolve(member.position.as_ref(), code);
                                    let department_name = option_label(&departments, member.department_id.as_deref());
                                    let email = member.email.clone().unwrap_or_default();
                                    let phone = member.phone.clone().unwrap_or_default();
                                    let photo = member.photo_url.clone();
                                    let for_edit = member.clone();
                                    let name_match = highlight_matches(&name, &term);
                                    let position_match = highlight_matches(&position, &term);
                                    let email_match = highlight_matches(&email, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {photo.map(|src| view! { <img class="avatar avatar--small" src=src alt="" /> })}
                                                    <span style="font-weight: 500;">{name_match}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{position_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{department_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
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
                    <StaffDialog
                        existing=existing
                        controller=controller
                        department_options=department_options
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}
