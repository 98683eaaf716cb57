use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a004_service::Service;
use contracts::domain::common::EntityRecord;
use contracts::shared::list_filter::{facet_values, FilterState, FILTER_ALL};

use super::super::api::{services_api, MESSAGES};
use super::details::ServiceDialog;
use crate::domain::a006_service_center::api as centers;
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

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p == 0.0 => "Free".to_string(),
        Some(p) => format!("{:.2}", p),
        None => "-".to_string(),
    }
}

#[component]
pub fn ServiceList() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(services_api(), MESSAGES);
    let state = *controller.store();
    let center_lookup = use_list_controller(centers::service_centers_api(), centers::MESSAGES);

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(FILTER_ALL.to_string());
    let center = RwSignal::new(FILTER_ALL.to_string());
    let editing = RwSignal::new(Editing::<Service>::Closed);

    spawn_load(controller);
    spawn_load(center_lookup);

    let visible_items = Memo::new(move |_| {
        let filter = FilterState::with_search(search.get())
            .with_facet("category", category.get())
            .with_facet("center", center.get());
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
    let center_options = Signal::derive(move || {
        let code = locale.code();
        center_lookup
            .store()
            .with(|s| record_options(&s.items, |c| c.name.resolve(code)))
    });

    let on_delete = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <PageFrame page_id="a004_service--list" category=PAGE_CAT_LIST>
            <ListPageHeader
                title=Service::list_name()
                count=Signal::derive(move || visible_items.with(Vec::len))
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_create=Callback::new(move |_| editing.set(Editing::New))
                on_refresh=Callback::new(move |_| spawn_load(controller))
            />

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search placeholder="Title, category or center head..." />
                        <FacetSelect value=category all_label="All categories" options=category_options />
                        <FacetSelect value=center all_label="All centers" options=center_options />
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Center"</TableHeaderCell>
                                <TableHeaderCell>"Center head"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
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
                                let centers = center_options.get();
                                visible_items.get().into_iter().map(|service| {
                                    let id = service.id.clone();
                                    let blocker = controller.delete_blocker(&id);
                                    let title = service.title.resolve(code);
                                    let center_name = option_label(&centers, service.center_id.as_deref());
                                    let head = service
                                        .center_head
                                        .as_ref()
                                        .map(|h| h.name.resolve(code))
                                        .unwrap_or_default();
                                    let price = format_price(service.price);
                                    let active = service.is_active;
                                    let for_edit = service.clone();
                                    let title_match = highlight_matches(&title, &term);
                                    let category_match = highlight_matches(&service.category, &term);
                                    let head_match = highlight_matches(&head, &term);
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
                                                <TableCellLayout truncate=true>{center_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{head_match}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
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
                    <ServiceDialog
                        existing=existing
                        controller=controller
                        center_options=center_options
                        on_close=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(None), "-");
        assert_eq!(format_price(Some(0.0)), "Free");
        assert_eq!(format_price(Some(150.5)), "150.50");
    }
}
