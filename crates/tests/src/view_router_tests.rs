use pretty_assertions::assert_eq;
use shared_types::{
    nav_items, resolve_view, resolve_view_by_name, Directory, RoutingPolicy, Screen, Tab, UserRole,
    ViewId, ALL_ROLES,
};

use crate::common::{self, SEED_LOGINS};

#[test]
fn every_menu_tab_opens_a_real_screen() {
    let dir = Directory::seeded();
    for (code, email) in SEED_LOGINS {
        let mut session = common::sign_in(&dir, code, email);
        let role = session.active().unwrap().user.role;
        for item in nav_items(role) {
            session.select_tab(item.id);
            let view = session.current_view(RoutingPolicy::Dedicated).unwrap();
            assert!(
                matches!(view, ViewId::Screen(_)),
                "{email} tab {} resolved to {view:?}",
                item.id
            );
        }
    }
}

#[test]
fn placeholder_policy_keeps_only_dashboards_real() {
    for role in ALL_ROLES {
        for item in nav_items(*role) {
            let view = resolve_view(*role, &Tab::new(item.id), RoutingPolicy::Placeholder);
            if item.id == "dashboard" {
                assert_eq!(view, ViewId::Screen(Screen::dashboard_for(*role)));
            } else {
                assert_eq!(view, ViewId::WorkInProgress(item.id.to_string()));
            }
        }
    }
}

#[test]
fn tabs_from_another_roles_menu_are_not_found() {
    let cases = [
        (UserRole::Student, "users"),
        (UserRole::Parent, "attendance"),
        (UserRole::Teacher, "children"),
        (UserRole::Admin, "homework"),
    ];
    for policy in [RoutingPolicy::Dedicated, RoutingPolicy::Placeholder] {
        for (role, tab) in cases {
            assert_eq!(
                resolve_view(role, &Tab::new(tab), policy),
                ViewId::ModuleNotFound(tab.to_string())
            );
        }
    }
}

#[test]
fn shared_screens_are_reused_across_roles() {
    let policy = RoutingPolicy::Dedicated;
    assert_eq!(
        resolve_view(UserRole::Parent, &Tab::new("fees"), policy),
        resolve_view(UserRole::Admin, &Tab::new("fees"), policy)
    );
    assert_eq!(
        resolve_view(UserRole::Teacher, &Tab::new("attendance"), policy),
        ViewId::Screen(Screen::TeacherDashboard)
    );
    assert_eq!(
        resolve_view(UserRole::Student, &Tab::new("homework"), policy),
        ViewId::Screen(Screen::StudentDashboard)
    );
}

#[test]
fn unparseable_role_falls_back_instead_of_failing() {
    for role in ["", "PRINCIPAL", "admin ", "Teacher"] {
        let view = resolve_view_by_name(role, &Tab::dashboard(), RoutingPolicy::Dedicated);
        match UserRole::parse(role) {
            Some(parsed) => assert_eq!(view, ViewId::Screen(Screen::dashboard_for(parsed))),
            None => assert_eq!(view, ViewId::UnknownRole),
        }
    }
    assert_eq!(
        resolve_view_by_name("JANITOR", &Tab::new("users"), RoutingPolicy::Dedicated),
        ViewId::UnknownRole
    );
}

#[test]
fn signed_out_session_has_no_view() {
    let dir = Directory::seeded();
    let mut session = common::sign_in(&dir, "TOWN01", "student@town.com");
    session.sign_out();
    assert_eq!(session.current_view(RoutingPolicy::Dedicated), None);
    assert!(!session.select_tab("exams"));
}
