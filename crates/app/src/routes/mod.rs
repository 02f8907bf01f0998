pub mod badges;
pub mod dashboard;
pub mod fallback;
pub mod ideas;
pub mod login;
pub mod modules;
pub mod not_found;
pub mod view;

use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdClipboardList, LdCreditCard, LdFileText,
    LdGraduationCap, LdLayoutDashboard, LdLogOut, LdMenu, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{nav_items, NavIcon};
use shared_ui::{
    AccentScope, AvatarSize, Sidebar, SidebarFooter, SidebarHeader, SidebarInset, SidebarNav,
    SidebarNavItem, SidebarProvider, SidebarTrigger, UserAvatar,
};

use login::Login;
use not_found::NotFound;
use view::Workspace;

/// Application routes.
///
/// The signed-in area is a single route: the sidebar tab lives in the
/// session, not the URL.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Workspace {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: redirects to /login when nobody is signed in.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();

    if session.is_authenticated() {
        return rsx! { Outlet::<Route> {} };
    }

    navigator().push(Route::Login {});
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting to sign in..." }
        }
    }
}

/// Icon for a sidebar entry.
pub fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Academics | NavIcon::Classes | NavIcon::Homework => {
            rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } }
        }
        NavIcon::Finance => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        NavIcon::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Attendance => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::Exams => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 } },
        NavIcon::Timetable => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Children => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        NavIcon::Messages => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
    }
}

/// Signed-in shell: school-branded sidebar, mobile header, content column.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();

    let Some(active) = session.active() else {
        return rsx! { Outlet::<Route> {} };
    };
    let user = active.user;
    let school = active.school;
    let current_tab = active.tab;
    let logo = school.logo_url.clone().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        AccentScope { color: school.primary_color.clone(), class: "app-shell",
            SidebarProvider {
                Sidebar {
                    SidebarHeader {
                        div { class: "sidebar-brand",
                            UserAvatar {
                                src: logo,
                                name: school.name.clone(),
                                initials: school.monogram(),
                                size: AvatarSize::Medium,
                            }
                            div { class: "sidebar-brand-text",
                                span { class: "sidebar-brand-name", "{school.name}" }
                                span { class: "sidebar-brand-role", "{user.role.display_name()}" }
                            }
                        }
                    }

                    SidebarNav {
                        for item in nav_items(user.role).iter() {
                            SidebarNavItem {
                                key: "{item.id}",
                                label: item.label.to_string(),
                                active: current_tab.as_str() == item.id,
                                icon: nav_icon(item.icon),
                                onclick: move |_| session.select_tab(item.id),
                            }
                        }
                    }

                    SidebarFooter {
                        div { class: "sidebar-user",
                            UserAvatar {
                                src: user.avatar_url.clone(),
                                name: user.name.clone(),
                                initials: user.initials(),
                                size: AvatarSize::Small,
                            }
                            div { class: "sidebar-user-text",
                                span { class: "sidebar-user-name", "{user.name}" }
                                span { class: "sidebar-user-email", "{user.email}" }
                            }
                        }
                        button {
                            class: "sidebar-signout",
                            r#type: "button",
                            onclick: move |_| {
                                session.sign_out();
                                navigator().push(Route::Login {});
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                            "Sign Out"
                        }
                    }
                }

                SidebarInset {
                    header { class: "mobile-header",
                        div { class: "mobile-brand",
                            span { class: "mobile-brand-mark", "{school.monogram()}" }
                            span { class: "mobile-brand-name", "{school.name}" }
                        }
                        SidebarTrigger {
                            Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                        }
                    }
                    main { class: "app-main",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
