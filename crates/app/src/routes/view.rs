use dioxus::prelude::*;
use shared_types::{resolve_view, ActiveSession, RoutingPolicy, Screen, ViewId};

use crate::routes::dashboard::{AdminDashboard, ParentDashboard, StudentDashboard, TeacherDashboard};
use crate::routes::fallback::{ModuleNotFound, UnknownRole, WorkInProgress};
use crate::routes::modules::{
    AdminAcademics, AdminFees, AdminReports, AdminUsers, ParentChildren, ParentMessages,
    StudentExams, StudentTimetable, TeacherClasses, TeacherExams,
};
use crate::session::use_session;

/// Main content area: whatever the router picks for the signed-in role and tab.
#[component]
pub fn Workspace() -> Element {
    let session = use_session();
    let policy: RoutingPolicy = use_context();

    let Some(viewer) = session.active() else {
        return rsx! {};
    };

    let tab_key = viewer.tab.to_string();
    let content = match resolve_view(viewer.user.role, &viewer.tab, policy) {
        ViewId::Screen(screen) => render_screen(screen, viewer),
        ViewId::WorkInProgress(tab) => rsx! { WorkInProgress { tab } },
        ViewId::ModuleNotFound(tab) => rsx! { ModuleNotFound { tab } },
        ViewId::UnknownRole => rsx! { UnknownRole {} },
    };

    // One keyed child per tab, so every visit mounts with fresh local state.
    rsx! {
        for key in [tab_key] {
            div { class: "workspace", key: "{key}", {content.clone()} }
        }
    }
}

fn render_screen(screen: Screen, viewer: ActiveSession) -> Element {
    match screen {
        Screen::AdminDashboard => rsx! { AdminDashboard { viewer } },
        Screen::TeacherDashboard => rsx! { TeacherDashboard { viewer } },
        Screen::StudentDashboard => rsx! { StudentDashboard { viewer } },
        Screen::ParentDashboard => rsx! { ParentDashboard { viewer } },
        Screen::AdminUsers => rsx! { AdminUsers { viewer } },
        Screen::AdminAcademics => rsx! { AdminAcademics { viewer } },
        Screen::AdminFees => rsx! { AdminFees { viewer } },
        Screen::AdminReports => rsx! { AdminReports { viewer } },
        Screen::TeacherClasses => rsx! { TeacherClasses { viewer } },
        Screen::TeacherExams => rsx! { TeacherExams { viewer } },
        Screen::StudentTimetable => rsx! { StudentTimetable { viewer } },
        Screen::StudentExams => rsx! { StudentExams { viewer } },
        Screen::ParentChildren => rsx! { ParentChildren { viewer } },
        Screen::ParentMessages => rsx! { ParentMessages { viewer } },
    }
}
