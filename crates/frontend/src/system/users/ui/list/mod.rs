use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{FilterState, FILTER_ALL};
use contracts::system::users::{User, UserRole, UserStatus};

use super::super::api::{users_api, MESSAGES};
use super::details::UserDialog;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog::Editing;
use crate::shared::icons::icon;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{
    highlight_matches, DeleteButton, EmptyRow, FacetSelect, ListPageHeader, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

fn role_badge(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "badge badge--error",
        UserRole::Staff => "badge badge--info",
        UserRole::Learner => "badge badge--neutral",
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let controller = use_list_controller(users_api(), MESSAGES);
    let state = *controller.store();

    let search = RwSignal::new(String::new());
    let role = RwSignal::new(FILTER_ALL.to_string());
    let status = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<User>::Closed);

    spawn_load(controller);

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get())
            .with_facet("role", role.get())
            .with_facet("status", status.get());
        state.with(|s| s.filtered(&filter, "en"))
    });

    let role_options = Signal::derive(|| {
        UserRole::ALL
            .iter()
            .map(|r| (r.code().to_string(), r.label().to_string()))
            .collect::<Vec<_>>()
    });
    let status_options = Signal::derive(|| {
        UserStatus::ALL
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <ListPageHeader
                title=User::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Name or email..." />
                        <FacetSelect value=role all_label="All roles" options=role_options />
                        <FacetSelect value=status all_label="All statuses" options=status_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Last login"</TableHeaderCell>
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
                                visible_items.get().into_iter().map(|user| {
                                    let id = user.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let created = user.created_at.as_deref().map(format_datetime).unwrap_or_default();
                                    let last_login = user
                                        .last_login_at
                                        .as_deref()
                                        .map(format_datetime)
                                        .unwrap_or_else(|| "Never".to_string());
                                    let suspended = user.status == UserStatus::Suspended;
                                    let for_edit = user.clone();
                                    let name_match = highlight_matches(&user.name, &term);
                                    let email_match = highlight_matches(&user.email, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name_match}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=role_badge(user.role)>{user.role.label()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge" class:badge--warning=suspended class:badge--success=!suspended>
                                                        {user.status.label()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login}</TableCellLayout>
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
                    <UserDialog
                        existing=existing
                        controller=controller
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}
