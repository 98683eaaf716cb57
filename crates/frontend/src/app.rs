use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::locale::provide_locale;
use crate::shared::toast::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // Toasts and the active locale are shared by every screen.
    provide_context(ToastService::new());
    provide_locale();

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
