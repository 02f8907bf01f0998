use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdGraduationCap, LdSend};
use dioxus_free_icons::Icon;
use shared_types::ActiveSession;
use shared_ui::{
    AvatarSize, Badge, BadgeTone, Button, Card, CardContent, CardHeader, FormSelect, Input,
    PageHeader, UserAvatar,
};

use crate::session::use_directory;

/// A typed message ready to append, or `None` when there is nothing to send.
fn compose_draft(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[component]
pub fn ParentChildren(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let profiles: Vec<_> = directory
        .children_of(&viewer.user)
        .into_iter()
        .map(|child| {
            let class = child
                .student_class_id
                .as_deref()
                .and_then(|id| directory.class(id))
                .map(|c| c.label())
                .unwrap_or_else(|| "No class".to_string());
            let attendance = directory
                .attendance_rate(&child.id)
                .map(|r| format!("{r}%"))
                .unwrap_or_else(|| "-".to_string());
            let gpa = directory
                .gpa(&child.id)
                .map(|g| format!("{g:.1}"))
                .unwrap_or_else(|| "-".to_string());
            (child.clone(), class, attendance, gpa)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "My Children", subtitle: "Student profiles" }

        if profiles.is_empty() {
            Card {
                CardContent {
                    p { class: "text-muted", "No children linked." }
                }
            }
        }

        for (child, class, attendance, gpa) in profiles {
            Card { key: "{child.id}",
                CardContent {
                    div { class: "child-profile",
                        UserAvatar {
                            src: child.avatar_url.clone(),
                            name: child.name.clone(),
                            initials: child.initials(),
                            size: AvatarSize::Large,
                        }
                        div {
                            h3 { class: "module-card-title", "{child.name}" }
                            p { class: "text-muted", "Class {class} • {viewer.school.name}" }
                            div { class: "child-profile-badges",
                                Badge { tone: BadgeTone::Success,
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                                    " Attendance: {attendance}"
                                }
                                Badge { tone: BadgeTone::Info,
                                    Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 12, height: 12 }
                                    " GPA: {gpa}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The stored thread with one teacher, plus messages typed here.
///
/// Typed messages are kept only while the tab is open.
#[component]
pub fn ParentMessages(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let contacts: Vec<(String, String)> = directory
        .contacts_of(&viewer.user.id)
        .into_iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    let first_contact = contacts.first().map(|(id, _)| id.clone()).unwrap_or_default();

    let mut contact = use_signal(move || first_contact);
    let mut draft = use_signal(String::new);
    let mut sent = use_signal(Vec::<(String, String)>::new);

    let Some(other) = directory.user(&contact()).cloned() else {
        return rsx! {
            PageHeader { title: "Messages", subtitle: "Communication with teachers" }
            Card {
                CardContent {
                    p { class: "text-muted", "No conversations yet." }
                }
            }
        };
    };

    let me = viewer.user.id.clone();
    let thread: Vec<_> = directory
        .conversation(&me, &other.id)
        .into_iter()
        .map(|m| (m.id.clone(), m.from_user_id == me, m.body.clone(), m.sent_at.clone()))
        .collect();
    let local: Vec<String> = sent
        .read()
        .iter()
        .filter(|(to, _)| *to == other.id)
        .map(|(_, body)| body.clone())
        .collect();
    let other_initials = other.initials();
    let my_initials = viewer.user.initials();

    let handle_send = {
        let to = other.id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if let Some(body) = compose_draft(&draft()) {
                tracing::debug!(to = %to, "Draft message added (not delivered)");
                sent.write().push((to.clone(), body));
                draft.set(String::new());
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader {
            title: "Messages",
            subtitle: "Communication with teachers",
            actions: rsx! {
                if contacts.len() > 1 {
                    FormSelect {
                        label: "With:",
                        value: other.id.clone(),
                        options: contacts.clone(),
                        onchange: move |id: String| contact.set(id),
                    }
                }
            },
        }

        Card { class: "chat",
            CardHeader { title: "{other.name}", subtitle: "{other.role.display_name()}" }
            div { class: "chat-thread",
                for (id, mine, body, at) in thread {
                    div { class: "chat-message", key: "{id}", "data-mine": mine,
                        span { class: "chat-initials",
                            if mine { "{my_initials}" } else { "{other_initials}" }
                        }
                        div { class: "chat-bubble",
                            p { "{body}" }
                            span { class: "chat-time", "{at}" }
                        }
                    }
                }
                for (idx, body) in local.into_iter().enumerate() {
                    div { class: "chat-message", key: "local-{idx}", "data-mine": true,
                        span { class: "chat-initials", "{my_initials}" }
                        div { class: "chat-bubble",
                            p { "{body}" }
                            span { class: "chat-time", "Not sent" }
                        }
                    }
                }
            }
            form { class: "chat-compose", onsubmit: handle_send,
                Input {
                    placeholder: "Type a message...",
                    value: draft(),
                    on_input: move |e: FormEvent| draft.set(e.value()),
                }
                Button {
                    button_type: "submit",
                    disabled: draft().trim().is_empty(),
                    title: "Send",
                    Icon::<LdSend> { icon: LdSend, width: 18, height: 18 }
                }
            }
        }
    }
}
