use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdDownload, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::{
    format_currency, ActiveSession, Directory, FeeInvoice, FeeSummary, UserRole, ALL_ROLES,
};
use shared_ui::{
    AvatarSize, Badge, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow,
    FormSelect, PageHeader, StatCard, UserAvatar,
};

use crate::format_helpers::{format_date_human, format_status_title};
use crate::routes::badges::{fee_tone, role_tone};
use crate::session::use_directory;

const REPORTS: [(&str, &str); 3] = [
    ("Attendance Report", "Daily presence across every class"),
    ("Financial Statement", "Collected and outstanding fees"),
    ("Academic Performance", "Exam results by subject"),
];

/// Invoices the viewer may see: the whole school for staff, only their
/// children's for a parent.
pub(crate) fn visible_fees<'a>(directory: &'a Directory, viewer: &ActiveSession) -> Vec<&'a FeeInvoice> {
    match viewer.user.role {
        UserRole::Parent => directory
            .children_of(&viewer.user)
            .into_iter()
            .flat_map(|child| directory.fees_for_student(&child.id))
            .collect(),
        _ => directory.fees_in_school(&viewer.school.id),
    }
}

/// Distinct subjects taught to a class, alphabetically.
fn class_subjects(directory: &Directory, class_id: &str) -> Vec<String> {
    directory
        .timetable_for_class(class_id)
        .into_iter()
        .map(|t| t.subject.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[component]
pub fn AdminUsers(viewer: ActiveSession) -> Element {
    let directory = use_directory();
    let mut role_filter = use_signal(String::new);

    let filter = UserRole::parse(&role_filter());
    let users: Vec<_> = directory
        .users_in_school(&viewer.school.id)
        .into_iter()
        .filter(|u| filter.is_none_or(|role| u.role == role))
        .cloned()
        .collect();

    let mut options = vec![(String::new(), "All roles".to_string())];
    options.extend(
        ALL_ROLES
            .iter()
            .map(|r| (r.as_str().to_string(), r.display_name().to_string())),
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader {
            title: "User Management",
            subtitle: "Manage students, teachers, and staff",
            actions: rsx! {
                FormSelect {
                    label: "Role:",
                    value: role_filter(),
                    options,
                    onchange: move |value: String| role_filter.set(value),
                }
            },
        }

        Card {
            DataTable {
                columns: vec!["Name".into(), "Role".into(), "Email".into(), "Status".into()],
                is_empty: users.is_empty(),
                empty_message: "No users match this filter.",
                for user in users {
                    DataTableRow { key: "{user.id}", highlighted: user.id == viewer.user.id,
                        DataTableCell {
                            div { class: "module-user",
                                UserAvatar {
                                    src: user.avatar_url.clone(),
                                    name: user.name.clone(),
                                    initials: user.initials(),
                                    size: AvatarSize::Small,
                                }
                                span { class: "module-user-name", "{user.name}" }
                            }
                        }
                        DataTableCell {
                            Badge { tone: role_tone(user.role), "{user.role.display_name()}" }
                        }
                        DataTableCell {
                            span { class: "text-muted text-sm", "{user.email}" }
                        }
                        DataTableCell {
                            span { class: "module-status-active", "Active" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminAcademics(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let classes: Vec<_> = directory
        .classes_in_school(&viewer.school.id)
        .into_iter()
        .map(|c| {
            let subjects = class_subjects(&directory, &c.id);
            (
                c.clone(),
                directory.roster(&c.id).len(),
                subjects.len(),
                subjects.join(", "),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "Academic Structure", subtitle: "Classes and Subjects" }

        if classes.is_empty() {
            Card {
                CardContent {
                    p { class: "text-muted", "No classes set up for {viewer.school.name}." }
                }
            }
        }

        div { class: "grid-2",
            for (class, enrolled, subject_count, subject_list) in classes {
                Card { key: "{class.id}",
                    CardContent {
                        div { class: "module-card-head",
                            div {
                                h3 { class: "module-card-title", "{class.name}" }
                                p { class: "text-muted", "Grade {class.grade_level}" }
                            }
                            span { class: "module-card-icon",
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                            }
                        }
                        div { class: "module-card-foot",
                            p { strong { "{enrolled}" } " Students Enrolled" }
                            p { strong { "{subject_count}" } " Subjects" }
                            if subject_count > 0 {
                                p { class: "text-muted text-sm", "{subject_list}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Invoice list shared by administrators and parents; see [`visible_fees`].
#[component]
pub fn AdminFees(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let invoices: Vec<(FeeInvoice, String)> = visible_fees(&directory, &viewer)
        .into_iter()
        .map(|f| {
            let student = directory
                .user(&f.student_id)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| f.student_id.clone());
            (f.clone(), student)
        })
        .collect();
    let summary = FeeSummary::from_invoices(invoices.iter().map(|(f, _)| f));
    let subtitle = if viewer.user.role == UserRole::Parent {
        "Invoices for your children"
    } else {
        "Invoices and Payments"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "Financial Records", subtitle: subtitle.to_string() }

        div { class: "grid-2",
            StatCard { label: "Collected", value: format_currency(summary.collected) }
            StatCard { label: "Outstanding", value: format_currency(summary.outstanding) }
        }

        Card {
            DataTable {
                columns: vec!["Invoice".into(), "Student".into(), "Due".into(), "Amount".into(), "Status".into()],
                is_empty: invoices.is_empty(),
                empty_message: "No invoices.",
                for (invoice, student) in invoices {
                    DataTableRow { key: "{invoice.id}", highlighted: !invoice.status.is_paid(),
                        DataTableCell { span { class: "module-user-name", "{invoice.title}" } }
                        DataTableCell { "{student}" }
                        DataTableCell { "{format_date_human(invoice.due_date)}" }
                        DataTableCell { numeric: true, "{format_currency(u64::from(invoice.amount))}" }
                        DataTableCell {
                            Badge { tone: fee_tone(invoice.status), "{format_status_title(invoice.status.as_str())}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminReports(viewer: ActiveSession) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "Reports & Analytics", subtitle: "Performance across {viewer.school.name}" }

        div { class: "grid-3",
            for (title, blurb) in REPORTS {
                button {
                    key: "{title}",
                    class: "report-card",
                    r#type: "button",
                    onclick: move |_| tracing::info!(report = title, "Report download requested (demo)"),
                    Icon::<LdFileText> { icon: LdFileText, width: 40, height: 40 }
                    h3 { "{title}" }
                    p { class: "text-muted text-sm", "{blurb}" }
                    span { class: "report-card-link",
                        Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                        " Download PDF"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Session;

    fn viewer(dir: &Directory, email: &str, code: &str) -> ActiveSession {
        let mut session = Session::default();
        session.verify_school(dir, code).unwrap();
        session.sign_in(dir, email, "").unwrap().clone()
    }

    #[test]
    fn admin_sees_every_invoice_of_the_school() {
        let dir = Directory::seeded();
        let admin = viewer(&dir, "admin@town.com", "TOWN01");
        let ids: Vec<&str> = visible_fees(&dir, &admin).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2", "f3", "f4"]);
    }

    #[test]
    fn parent_sees_only_their_childs_invoices() {
        let dir = Directory::seeded();
        let parent = viewer(&dir, "parent@town.com", "TOWN01");
        let ids: Vec<&str> = visible_fees(&dir, &parent).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2"]);
    }

    #[test]
    fn admin_of_other_school_sees_nothing() {
        let dir = Directory::seeded();
        let admin = viewer(&dir, "admin@elite.com", "ELITE99");
        assert!(visible_fees(&dir, &admin).is_empty());
    }

    #[test]
    fn class_subjects_are_distinct_and_sorted() {
        let dir = Directory::seeded();
        assert_eq!(
            class_subjects(&dir, "c1"),
            vec!["English", "History", "Mathematics", "Physics"]
        );
        assert!(class_subjects(&dir, "c2").is_empty());
    }
}
