//! Learner dashboard: own enrollments and wishlist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a009_enrollment::EnrollmentStatus;
use contracts::shared::list_filter::{FilterState, FILTER_ALL};

use crate::domain::a009_enrollment::api::{enrollments_api, MESSAGES as ENROLLMENT_MESSAGES};
use crate::domain::a010_wishlist::api::{wishlist_api, MESSAGES as WISHLIST_MESSAGES};
use crate::public::common::{ListNotice, PublicHeading};
use crate::shared::confirm::BrowserConfirm;
use crate::shared::date_utils::format_long_date;
use crate::shared::list_controller::{spawn_load, use_list_controller};
use crate::shared::list_utils::FacetSelect;
use crate::shared::locale::use_locale;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LEARNER;

const STATUSES: [EnrollmentStatus; 4] = [
    EnrollmentStatus::Pending,
    EnrollmentStatus::Active,
    EnrollmentStatus::Completed,
    EnrollmentStatus::Cancelled,
];

fn status_class(status: EnrollmentStatus) -> &'static str {
    match status {
        EnrollmentStatus::Pending => "badge badge--info",
        EnrollmentStatus::Active => "badge badge--success",
        EnrollmentStatus::Completed => "badge badge--neutral",
        EnrollmentStatus::Cancelled => "badge badge--error",
    }
}

#[component]
fn EnrollmentsPanel() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(enrollments_api(), ENROLLMENT_MESSAGES);
    let state = *controller.store();
    let status = RwSignal::new(FILTER_ALL.to_string());

    spawn_load(controller);

    let status_options = Signal::derive(move || {
        let code = locale.code();
        STATUSES
            .iter()
            .map(|s| (s.code().to_string(), s.label().resolve(code)))
            .collect::<Vec<_>>()
    });

    let visible = Memo::new(move |_| {
        let filter = FilterState::default().with_facet("status", status.get());
        state.with(|s| s.filtered(&filter, locale.code()))
    });

    let on_cancel = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <section class="dashboard-panel">
            <div class="dashboard-panel__header">
                <h2>{move || locale.text("My enrollments", "تسجيلاتي")}</h2>
                <FacetSelect
                    value=status
                    all_label=Signal::derive(move || locale.text("All statuses", "كل الحالات"))
                    options=status_options
                />
            </div>
            <ListNotice
                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || state.with(|s| s.loaded) && visible.with(Vec::is_empty))
            />
            <ul class="dashboard-list">
                {move || {
                    let code = locale.code();
                    let current = locale.get();
                    visible.get().into_iter().map(|enrollment| {
                        let id = enrollment.id.clone();
                        let blocker = controller.delete_blocker(&id);
                        let blocked = blocker.is_some();
                        let date = enrollment.enrolled_at.as_deref().map(|d| format_long_date(d, current)).unwrap_or_default();
                        view! {
                            <li class="dashboard-list__item">
                                <div>
                                    <h3>{enrollment.title.resolve(code)}</h3>
                                    <p class="text-muted">{date}</p>
                                </div>
                                <span class=status_class(enrollment.status)>{enrollment.status.label().resolve(code)}</span>
                                <button
                                    class="button button--ghost"
                                    title=blocker.unwrap_or_default()
                                    disabled=move || blocked || state.with(|s| s.is_pending())
                                    on:click=move |_| on_cancel(id.clone())
                                >
                                    {locale.text("Cancel", "إلغاء")}
                                </button>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
fn WishlistPanel() -> impl IntoView {
    let locale = use_locale();
    let controller = use_list_controller(wishlist_api(), WISHLIST_MESSAGES);
    let state = *controller.store();

    spawn_load(controller);

    let on_remove = move |id: String| {
        spawn_local(async move {
            controller.delete(&id, &BrowserConfirm).await;
        });
    };

    view! {
        <section class="dashboard-panel">
            <div class="dashboard-panel__header">
                <h2>{move || locale.text("My wishlist", "قائمة الرغبات")}</h2>
            </div>
            <ListNotice
                loading=Signal::derive(move || state.with(|s| s.loading && !s.loaded))
                empty=Signal::derive(move || state.with(|s| s.loaded && s.items.is_empty()))
            />
            <ul class="dashboard-list">
                {move || {
                    let code = locale.code();
                    state.with(|s| s.items.clone()).into_iter().map(|item| {
                        let id = item.id.clone();
                        view! {
                            <li class="dashboard-list__item">
                                <div>
                                    <h3>{item.title.resolve(code)}</h3>
                                    <p class="text-muted">{item.target_kind.clone()}</p>
                                </div>
                                <button
                                    class="button button--ghost"
                                    disabled=move || state.with(|s| s.is_pending())
                                    on:click=move |_| on_remove(id.clone())
                                >
                                    {locale.text("Remove", "إزالة")}
                                </button>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let locale = use_locale();
    view! {
        <PageFrame page_id="learner_dashboard--learner" category=PAGE_CAT_LEARNER>
            <PublicHeading title=Signal::derive(move || locale.text("My dashboard", "لوحتي")) />
            <div class="dashboard-grid">
                <EnrollmentsPanel />
                <WishlistPanel />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_enrollment::Enrollment;
    use contracts::domain::common::DeleteGuard;

    #[test]
    fn test_only_open_enrollments_can_be_cancelled() {
        let enrollments: Vec<Enrollment> = serde_json::from_value(serde_json::json!([
            {"id": "1", "title": "Welding course", "status": "pending"},
            {"id": "2", "title": "SEM training", "status": "active"},
            {"id": "3", "title": "XRD basics", "status": "completed"},
            {"id": "4", "title": "Safety", "status": "cancelled"}
        ]))
        .unwrap();
        let cancellable: Vec<&str> = enrollments
            .iter()
            .filter(|e| e.delete_blocker().is_none())
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(cancellable, vec!["1", "2"]);
        assert_eq!(STATUSES.len(), 4);
    }
}
