use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdDollarSign, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{format_currency, ActiveSession, Directory, FeeStatus, TrendPoint};
use shared_ui::{
    BarChart, BarDatum, Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader, StatCard,
};

use crate::format_helpers::format_date_human;
use crate::session::{use_directory, use_session};

fn bars(points: &[TrendPoint]) -> Vec<BarDatum> {
    points
        .iter()
        .map(|p| BarDatum {
            label: p.label.clone(),
            value: p.value,
        })
        .collect()
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone, PartialEq)]
struct Activity {
    text: String,
    when: String,
}

/// Newest announcements, then unpaid invoices of the school.
fn recent_activity(directory: &Directory, school_id: &str) -> Vec<Activity> {
    let mut newest: Vec<_> = directory.announcements.iter().collect();
    newest.sort_by(|a, b| b.date.cmp(&a.date));

    let announcements = newest.into_iter().map(|a| Activity {
        text: format!("{} posted \"{}\"", a.author, a.title),
        when: format_date_human(a.date),
    });

    let unpaid = directory
        .fees_in_school(school_id)
        .into_iter()
        .filter(|f| !f.status.is_paid())
        .map(|f| {
            let student = directory
                .user(&f.student_id)
                .map(|u| u.name.as_str())
                .unwrap_or("Unknown student");
            let state = if f.status == FeeStatus::Overdue {
                "overdue"
            } else {
                "due"
            };
            Activity {
                text: format!("{} for {student} is {state}", f.title),
                when: format_date_human(f.due_date),
            }
        });

    announcements.chain(unpaid).take(5).collect()
}

#[component]
pub fn AdminDashboard(viewer: ActiveSession) -> Element {
    let directory = use_directory();
    let mut session = use_session();

    let school_id = viewer.school.id.clone();
    let stats = directory.school_stats(&school_id);
    let attendance = bars(&directory.attendance_trend);
    let collections = bars(&directory.fee_trend);
    let activity = recent_activity(&directory, &school_id);
    let attendance_label = stats
        .attendance_rate
        .map(|r| format!("{r}%"))
        .unwrap_or_else(|| "No data".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "Administrator Overview",
            subtitle: "{viewer.school.name}",
            actions: rsx! {
                Button {
                    onclick: move |_| session.select_tab("reports"),
                    "Download Report"
                }
            },
        }

        div { class: "grid-4",
            StatCard {
                label: "Total Students",
                value: "{stats.students}",
                hint: "{stats.classes} classes",
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
            }
            StatCard {
                label: "Total Teachers",
                value: "{stats.teachers}",
                icon: rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
            }
            StatCard {
                label: "Fee Collection",
                value: format_currency(stats.fees.collected),
                hint: "{format_currency(stats.fees.outstanding)} outstanding",
                icon: rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 24, height: 24 } },
            }
            StatCard {
                label: "Avg Attendance",
                value: attendance_label,
                icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } },
            }
        }

        div { class: "grid-2",
            Card {
                CardHeader { title: "Weekly Attendance Trends" }
                CardContent {
                    BarChart {
                        data: attendance,
                        format_value: Callback::new(|v: u32| format!("{v}% present")),
                    }
                }
            }
            Card {
                CardHeader { title: "Fee Collection (6 Months)" }
                CardContent {
                    BarChart {
                        data: collections,
                        format_value: Callback::new(|v: u32| format_currency(u64::from(v))),
                    }
                }
            }
        }

        Card {
            CardHeader {
                title: "Recent Activity",
                action: rsx! {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| session.select_tab("users"),
                        "Manage users"
                    }
                },
            }
            ul { class: "activity-list",
                if activity.is_empty() {
                    li { class: "activity-item text-muted", "Nothing new." }
                }
                for (idx, item) in activity.into_iter().enumerate() {
                    li { class: "activity-item", key: "{idx}",
                        span { class: "activity-dot" }
                        p { class: "activity-text", "{item.text}" }
                        span { class: "activity-when", "{item.when}" }
                    }
                }
            }
        }
    }
}
