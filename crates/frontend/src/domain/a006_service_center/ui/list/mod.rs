use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a006_service_center::ServiceCenter;
use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{FilterState, FILTER_ALL};

use super::super::api::{service_centers_api, MESSAGES};
use super::details::ServiceCenterDialog;
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
pub fn ServiceCenterList() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(service_centers_api(), MESSAGES);
    let state = *controller.store();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<ServiceCenter>::Closed);

    spawn_load(controller);

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get()).with_facet("status", status.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    let status_options = Signal::derive(|| {
        vec![
            ("active".to_string(), "Active".to_string()),
            ("inactive".to_string(), "Inactive".to_string()),
        ]
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <PageFrame page_id="a006_service_center--list" category=PAGE_CAT_LIST>
            <ListPageHeader
                title=ServiceCenter::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Name, slug, email or head..." />
                        <FacetSelect value=status all_label="All statuses" options=status_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Slug"</TableHeaderCell>
                                <TableHeaderCell>"Head"</TableHeaderCell>
                                <TableHeaderCell>"Contact"</TableHeaderCell>
                                <TableHeaderCell>"Services"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <EmptyRow
                                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                                empty=Signal::derive(move || visible_items.with(Vec::is_empty))
                                colspan=7
                            />
                            {move || {
                                let term = search.get();
                                let code = locale.code();
                                visible_items.get().into_iter().map(|center| {
                                    let id = center.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let name = center.name.resolve(code);
                                    let head = center
                                        .center_head
                                        .as_ref()
                                        .map(|h| h.name.resolve(code))
                                        .unwrap_or_default();
                                    let email = center.email.clone().unwrap_or_default();
                                    let phone = center.phone.clone().unwrap_or_default();
                                    let services = center.services_count;
                                    let active = center.is_active;
                                    let for_edit = center.clone();
                                    let name_match = highlight_matches(&name, &term);
                                    let slug_match = highlight_matches(&center.slug, &term);
                                    let head_match = highlight_matches(&head, &term);
                                    let email_match = highlight_matches(&email, &term);
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
                                                <TableCellLayout truncate=true>{head_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email_match}
                                                    {(!phone.is_empty()).then(|| view! { <span class="text-muted">" · "{phone.clone()}</span> })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{services}</TableCellLayout>
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
                    <ServiceCenterDialog
                        existing=existing
                        controller=controller
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}
