use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UserRole;

/// Tab id every role lands on after sign-in.
pub const DASHBOARD_TAB: &str = "dashboard";

/// The selected navigation section. Free-form: the router decides what an
/// unknown tab means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tab(String);

impl Tab {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn dashboard() -> Self {
        Self(DASHBOARD_TAB.to_string())
    }

    pub fn is_dashboard(&self) -> bool {
        self.0 == DASHBOARD_TAB
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Tab {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Tab {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Concrete screens the app can render for an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    AdminDashboard,
    TeacherDashboard,
    StudentDashboard,
    ParentDashboard,
    AdminUsers,
    AdminAcademics,
    AdminFees,
    AdminReports,
    TeacherClasses,
    TeacherExams,
    StudentTimetable,
    StudentExams,
    ParentChildren,
    ParentMessages,
}

impl Screen {
    pub fn dashboard_for(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Screen::AdminDashboard,
            UserRole::Teacher => Screen::TeacherDashboard,
            UserRole::Student => Screen::StudentDashboard,
            UserRole::Parent => Screen::ParentDashboard,
        }
    }
}

/// What the main content area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewId {
    Screen(Screen),
    /// On the role's menu, but the placeholder policy is active.
    WorkInProgress(String),
    /// No view exists for this (role, tab) pair.
    ModuleNotFound(String),
    /// The stored role name did not parse.
    UnknownRole,
}

/// How non-dashboard tabs are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingPolicy {
    /// Every menu tab opens its own module view.
    #[default]
    Dedicated,
    /// Menu tabs open a "work in progress" card; only dashboards are real.
    Placeholder,
}

const MODULE_TABLE: &[(UserRole, &str, Screen)] = &[
    (UserRole::Admin, "users", Screen::AdminUsers),
    (UserRole::Admin, "academics", Screen::AdminAcademics),
    (UserRole::Admin, "fees", Screen::AdminFees),
    (UserRole::Admin, "reports", Screen::AdminReports),
    (UserRole::Teacher, "attendance", Screen::TeacherDashboard),
    (UserRole::Teacher, "classes", Screen::TeacherClasses),
    (UserRole::Teacher, "exams", Screen::TeacherExams),
    (UserRole::Student, "timetable", Screen::StudentTimetable),
    (UserRole::Student, "homework", Screen::StudentDashboard),
    (UserRole::Student, "exams", Screen::StudentExams),
    (UserRole::Parent, "children", Screen::ParentChildren),
    (UserRole::Parent, "fees", Screen::AdminFees),
    (UserRole::Parent, "messages", Screen::ParentMessages),
];

/// Map a role and tab to the view to render. Total: unmapped pairs fall back
/// to [`ViewId::ModuleNotFound`].
pub fn resolve_view(role: UserRole, tab: &Tab, policy: RoutingPolicy) -> ViewId {
    if tab.is_dashboard() {
        return ViewId::Screen(Screen::dashboard_for(role));
    }

    let on_menu = nav_items(role).iter().any(|item| item.id == tab.as_str());
    if policy == RoutingPolicy::Placeholder {
        return if on_menu {
            ViewId::WorkInProgress(tab.to_string())
        } else {
            ViewId::ModuleNotFound(tab.to_string())
        };
    }

    MODULE_TABLE
        .iter()
        .find(|(r, id, _)| *r == role && *id == tab.as_str())
        .map(|(_, _, screen)| ViewId::Screen(*screen))
        .unwrap_or_else(|| ViewId::ModuleNotFound(tab.to_string()))
}

/// Like [`resolve_view`], for a role still in its stored string form.
pub fn resolve_view_by_name(role: &str, tab: &Tab, policy: RoutingPolicy) -> ViewId {
    match UserRole::parse(role) {
        Some(role) => resolve_view(role, tab, policy),
        None => ViewId::UnknownRole,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Academics,
    Finance,
    Reports,
    Attendance,
    Classes,
    Exams,
    Timetable,
    Homework,
    Children,
    Messages,
}

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

const fn item(id: &'static str, label: &'static str, icon: NavIcon) -> NavItem {
    NavItem { id, label, icon }
}

const ADMIN_NAV: &[NavItem] = &[
    item(DASHBOARD_TAB, "Dashboard", NavIcon::Dashboard),
    item("users", "Users", NavIcon::Users),
    item("academics", "Academics", NavIcon::Academics),
    item("fees", "Finance", NavIcon::Finance),
    item("reports", "Reports", NavIcon::Reports),
];

const TEACHER_NAV: &[NavItem] = &[
    item(DASHBOARD_TAB, "Dashboard", NavIcon::Dashboard),
    item("attendance", "Attendance", NavIcon::Attendance),
    item("classes", "My Classes", NavIcon::Classes),
    item("exams", "Exams & Grades", NavIcon::Exams),
];

const STUDENT_NAV: &[NavItem] = &[
    item(DASHBOARD_TAB, "Dashboard", NavIcon::Dashboard),
    item("timetable", "Timetable", NavIcon::Timetable),
    item("homework", "Homework", NavIcon::Homework),
    item("exams", "Grades", NavIcon::Exams),
];

const PARENT_NAV: &[NavItem] = &[
    item(DASHBOARD_TAB, "Dashboard", NavIcon::Dashboard),
    item("children", "My Children", NavIcon::Children),
    item("fees", "Fees", NavIcon::Finance),
    item("messages", "Messages", NavIcon::Messages),
];

/// Sidebar entries for a role, dashboard first.
pub fn nav_items(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Admin => ADMIN_NAV,
        UserRole::Teacher => TEACHER_NAV,
        UserRole::Student => STUDENT_NAV,
        UserRole::Parent => PARENT_NAV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_ROLES;
    use pretty_assertions::assert_eq;

    #[test]
    fn dashboard_tab_maps_each_role_to_its_dashboard() {
        let expected = [
            (UserRole::Admin, Screen::AdminDashboard),
            (UserRole::Teacher, Screen::TeacherDashboard),
            (UserRole::Student, Screen::StudentDashboard),
            (UserRole::Parent, Screen::ParentDashboard),
        ];
        for policy in [RoutingPolicy::Dedicated, RoutingPolicy::Placeholder] {
            for (role, screen) in expected {
                assert_eq!(
                    resolve_view(role, &Tab::dashboard(), policy),
                    ViewId::Screen(screen)
                );
            }
        }
    }

    #[test]
    fn teacher_classes_resolves_to_classes_module() {
        assert_eq!(
            resolve_view(UserRole::Teacher, &"classes".into(), RoutingPolicy::Dedicated),
            ViewId::Screen(Screen::TeacherClasses)
        );
    }

    #[test]
    fn reused_views() {
        assert_eq!(
            resolve_view(UserRole::Teacher, &"attendance".into(), RoutingPolicy::Dedicated),
            ViewId::Screen(Screen::TeacherDashboard)
        );
        assert_eq!(
            resolve_view(UserRole::Student, &"homework".into(), RoutingPolicy::Dedicated),
            ViewId::Screen(Screen::StudentDashboard)
        );
        assert_eq!(
            resolve_view(UserRole::Parent, &"fees".into(), RoutingPolicy::Dedicated),
            ViewId::Screen(Screen::AdminFees)
        );
    }

    #[test]
    fn unmapped_tab_is_module_not_found_for_every_role() {
        for role in ALL_ROLES {
            for policy in [RoutingPolicy::Dedicated, RoutingPolicy::Placeholder] {
                assert_eq!(
                    resolve_view(*role, &"library".into(), policy),
                    ViewId::ModuleNotFound("library".into())
                );
            }
        }
    }

    #[test]
    fn tabs_of_other_roles_are_not_found() {
        assert_eq!(
            resolve_view(UserRole::Student, &"users".into(), RoutingPolicy::Dedicated),
            ViewId::ModuleNotFound("users".into())
        );
        assert_eq!(
            resolve_view(UserRole::Admin, &"messages".into(), RoutingPolicy::Dedicated),
            ViewId::ModuleNotFound("messages".into())
        );
    }

    #[test]
    fn every_menu_tab_resolves_to_a_screen_under_dedicated() {
        for role in ALL_ROLES {
            for nav in nav_items(*role) {
                let view = resolve_view(*role, &nav.id.into(), RoutingPolicy::Dedicated);
                assert!(
                    matches!(view, ViewId::Screen(_)),
                    "{role} / {} resolved to {view:?}",
                    nav.id
                );
            }
        }
    }

    #[test]
    fn placeholder_policy_shows_work_in_progress_for_menu_tabs() {
        assert_eq!(
            resolve_view(UserRole::Admin, &"reports".into(), RoutingPolicy::Placeholder),
            ViewId::WorkInProgress("reports".into())
        );
    }

    #[test]
    fn unparseable_role_is_unknown_role() {
        assert_eq!(
            resolve_view_by_name("janitor", &Tab::dashboard(), RoutingPolicy::Dedicated),
            ViewId::UnknownRole
        );
        assert_eq!(
            resolve_view_by_name("teacher", &"classes".into(), RoutingPolicy::Dedicated),
            ViewId::Screen(Screen::TeacherClasses)
        );
    }

    #[test]
    fn nav_starts_with_dashboard() {
        for role in ALL_ROLES {
            assert_eq!(nav_items(*role)[0].id, DASHBOARD_TAB);
        }
    }

    #[test]
    fn nav_labels_per_role() {
        let labels = |role| -> Vec<&str> { nav_items(role).iter().map(|i| i.label).collect() };
        assert_eq!(
            labels(UserRole::Admin),
            vec!["Dashboard", "Users", "Academics", "Finance", "Reports"]
        );
        assert_eq!(
            labels(UserRole::Teacher),
            vec!["Dashboard", "Attendance", "My Classes", "Exams & Grades"]
        );
        assert_eq!(
            labels(UserRole::Student),
            vec!["Dashboard", "Timetable", "Homework", "Grades"]
        );
        assert_eq!(
            labels(UserRole::Parent),
            vec!["Dashboard", "My Children", "Fees", "Messages"]
        );
    }

    #[test]
    fn policy_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            routing: RoutingPolicy,
        }
        let w: Wrap = toml::from_str("routing = \"placeholder\"").unwrap();
        assert_eq!(w.routing, RoutingPolicy::Placeholder);
        assert_eq!(RoutingPolicy::default(), RoutingPolicy::Dedicated);
    }
}
