use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a003_event::{Event, EventStatus};
use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{facet_values, FilterState, FILTER_ALL};

use super::super::api::{events_api, MESSAGES};
use super::details::EventDialog;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog::Editing;
use crate::shared::icons::icon;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::{
    highlight_matches, DeleteButton, EmptyRow, FacetSelect, ListPageHeader, SearchInput,
};
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_badge(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => "badge badge--info",
        EventStatus::Ongoing => "badge badge--success",
        EventStatus::Completed => "badge badge--neutral",
        EventStatus::Cancelled => "badge badge--error",
    }
}

#[component]
pub fn EventList() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(events_api(), MESSAGES);
    let state = *controller.store();

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(FILTER_ALL.to_string());
    let status = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<Event>::Closed);

    spawn_load(controller);

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get())
            .with_facet("category", category.get())
            .with_facet("status", status.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    let category_options = Signal::derive(move || {
        state.with(|s| {
            facet_values(&s.items, "category")
                .into_iter()
                .map(|c| (c.clone(), c))
                .collect::<Vec<_>>()
        })
    });
    let status_options = Signal::derive(move || {
        let code = locale.code();
        EventStatus::ALL
            .iter()
            .map(|s| (s.code().to_string(), s.label().resolve(code)))
            .collect::<Vec<_>>()
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <PageFrame page_id="a003_event--list" category=PAGE_CAT_LIST>
            <ListPageHeader
                title=Event::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Title, location or category..." />
                        <FacetSelect value=category all_label="All categories" options=category_options />
                        <FacetSelect value=status all_label="All statuses" options=status_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Location"</TableHeaderCell>
                                <TableHeaderCell>"Starts"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
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
                                visible_items.get().into_iter().map(|event| {
                                    let id = event.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let title = event.title.resolve(code);
                                    let location = contracts::shared::localized::resolve(event.location.as_ref(), code);
                                    let starts = format_datetime(&event.starts_at);
                                    let status_label = event.status.label().resolve(code);
                                    let badge = status_badge(event.status);
                                    let for_edit = event.clone();
                                    let title_match = highlight_matches(&title, &term);
                                    let category_match = highlight_matches(&event.category, &term);
                                    let location_match = highlight_matches(&location, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{title_match}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{location_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{starts}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=badge>{status_label}</span>
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
                    <EventDialog
                        existing=existing
                        controller=controller
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}
