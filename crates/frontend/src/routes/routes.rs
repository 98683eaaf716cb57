use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_department_section::ui::list::DepartmentSectionList;
use crate::domain::a002_department::ui::list::DepartmentList;
use crate::domain::a003_event::ui::list::EventList;
use crate::domain::a004_service::ui::list::ServiceList;
use crate::domain::a005_staff::ui::list::StaffList;
use crate::domain::a006_service_center::ui::list::ServiceCenterList;
use crate::layout::{AdminShell, PublicShell};
use crate::learner::DashboardPage;
use crate::public::about::AboutPage;
use crate::public::departments::DepartmentsPage;
use crate::public::events::EventsPage;
use crate::public::home::HomePage;
use crate::public::library::{JournalPage, LibraryPage};
use crate::public::news::NewsPage;
use crate::public::services::ServicesPage;
use crate::shared::locale::initial_locale;
use crate::system::settings::page::SettingsPage;
use crate::system::users::ui::list::UsersList;

/// `/` sends the visitor to the home page in their locale.
#[component]
fn RootRedirect() -> impl IntoView {
    view! { <Redirect path=format!("/{}", initial_locale().code()) /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Home"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=RootRedirect />
                <ParentRoute path=path!("/admin") view=AdminShell>
                    <Route path=path!("") view=DepartmentSectionList />
                    <Route path=path!("sections") view=DepartmentSectionList />
                    <Route path=path!("departments") view=DepartmentList />
                    <Route path=path!("events") view=EventList />
                    <Route path=path!("services") view=ServiceList />
                    <Route path=path!("staff") view=StaffList />
                    <Route path=path!("service-centers") view=ServiceCenterList />
                    <Route path=path!("users") view=UsersList />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>
                <ParentRoute path=path!("/:locale") view=PublicShell>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("about") view=AboutPage />
                    <Route path=path!("departments") view=DepartmentsPage />
                    <Route path=path!("services") view=ServicesPage />
                    <Route path=path!("events") view=EventsPage />
                    <Route path=path!("news") view=NewsPage />
                    <Route path=path!("library") view=LibraryPage />
                    <Route path=path!("journal") view=JournalPage />
                    <Route path=path!("dashboard") view=DashboardPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
