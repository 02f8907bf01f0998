use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCreditCard, LdDownload, LdMessageSquare};
use dioxus_free_icons::Icon;
use shared_types::{format_currency, ActiveSession, Directory, FeeInvoice, UserRole};
use shared_ui::{
    AvatarSize, Badge, Button, ButtonVariant, Card, CardContent, CardHeader, FormSelect,
    PageHeader, UserAvatar,
};

use super::StudentOverview;
use crate::format_helpers::{format_date_human, format_status_title};
use crate::routes::badges::fee_tone;
use crate::session::use_directory;

/// The most recent message a teacher sent to this parent, with the teacher's name.
fn latest_teacher_note(directory: &Directory, parent_id: &str) -> Option<(String, String)> {
    directory
        .contacts_of(parent_id)
        .into_iter()
        .filter(|c| c.role == UserRole::Teacher)
        .flat_map(|teacher| {
            directory
                .conversation(&teacher.id, parent_id)
                .into_iter()
                .filter(|m| m.from_user_id == teacher.id)
                .map(move |m| (teacher.name.clone(), m.body.clone()))
        })
        .last()
}

#[component]
pub fn ParentDashboard(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let children: Vec<_> = directory
        .children_of(&viewer.user)
        .into_iter()
        .cloned()
        .collect();
    let first_child = children.first().map(|c| c.id.clone()).unwrap_or_default();
    let mut selected = use_signal(move || first_child);

    let Some(child) = children
        .iter()
        .find(|c| c.id == selected())
        .or(children.first())
        .cloned()
    else {
        return rsx! {
            PageHeader { title: "Parent Dashboard" }
            Card {
                CardContent {
                    p { class: "text-muted", "No children linked." }
                }
            }
        };
    };

    let options: Vec<(String, String)> = children
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    let fees: Vec<FeeInvoice> = directory
        .fees_for_student(&child.id)
        .into_iter()
        .cloned()
        .collect();
    let note = latest_teacher_note(&directory, &viewer.user.id);
    let child_initials = child.initials();
    let class_label = child
        .student_class_id
        .as_deref()
        .and_then(|id| directory.class(id))
        .map(|c| c.label())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Parent Dashboard",
            subtitle: "Keeping up with {child.first_name()}",
            actions: rsx! {
                if options.len() > 1 {
                    FormSelect {
                        label: "Child:",
                        value: child.id.clone(),
                        options: options.clone(),
                        onchange: move |id: String| selected.set(id),
                    }
                }
            },
        }

        div { class: "child-switcher",
            UserAvatar {
                src: child.avatar_url.clone(),
                name: child.name.clone(),
                initials: child_initials,
                size: AvatarSize::Large,
            }
            div {
                p { class: "child-name", "{child.name}" }
                p { class: "text-muted text-sm", "{class_label}" }
            }
        }

        div { class: "grid-2",
            Card {
                CardHeader { title: "Fee Status" }
                CardContent {
                    if fees.is_empty() {
                        p { class: "text-muted", "No invoices." }
                    }
                    ul { class: "fee-list",
                        for invoice in fees {
                            li { class: "fee-item", key: "{invoice.id}",
                                div {
                                    p { class: "fee-title", "{invoice.title}" }
                                    p { class: "text-muted text-sm",
                                        "Due {format_date_human(invoice.due_date)}"
                                    }
                                }
                                div { class: "fee-actions",
                                    span { class: "fee-amount", "{format_currency(u64::from(invoice.amount))}" }
                                    Badge { tone: fee_tone(invoice.status), "{format_status_title(invoice.status.as_str())}" }
                                    if invoice.status.is_paid() {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            title: "Download receipt",
                                            onclick: {
                                                let id = invoice.id.clone();
                                                move |_| tracing::info!(invoice = %id, "Receipt download requested (demo)")
                                            },
                                            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                        }
                                    } else {
                                        Button {
                                            onclick: {
                                                let id = invoice.id.clone();
                                                move |_| tracing::info!(invoice = %id, "Payment requested (demo)")
                                            },
                                            Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                                            "Pay Now"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Teacher's Note" }
                CardContent {
                    match note {
                        Some((teacher, body)) => rsx! {
                            blockquote { class: "teacher-note",
                                Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 }
                                p { "“{body}”" }
                                footer { class: "text-muted text-sm", "{teacher}" }
                            }
                        },
                        None => rsx! {
                            p { class: "text-muted", "No notes from teachers yet." }
                        },
                    }
                }
            }
        }

        section { class: "mirror",
            h2 { class: "mirror-title", "Student View Mirror" }
            p { class: "text-muted text-sm", "What {child.first_name()} sees when signed in." }
            StudentOverview { key: "{child.id}", student: child.clone(), school: viewer.school.clone() }
        }
    }
}
