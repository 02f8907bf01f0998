use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdCalendar, LdClipboardList, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{ActiveSession, School, User, UserRole};
use shared_ui::{Badge, Card, CardContent, CardHeader, LabeledProgress, PageHeader};

use crate::format_helpers::{format_date_human, format_status_title, format_time_12h};
use crate::routes::badges::assignment_tone;
use crate::session::use_directory;

#[component]
pub fn StudentDashboard(viewer: ActiveSession) -> Element {
    rsx! {
        PageHeader {
            title: "Hi, {viewer.user.first_name()}",
            subtitle: "Here is your week at {viewer.school.name}.",
        }
        StudentOverview { student: viewer.user.clone(), school: viewer.school.clone() }
    }
}

/// Timetable, homework, grades and attendance for one student.
///
/// Also shown to parents as a read-only mirror of their child's view.
#[component]
pub fn StudentOverview(student: User, school: School) -> Element {
    let directory = use_directory();

    let class_id = student.student_class_id.clone().unwrap_or_default();
    let class_label = directory
        .class(&class_id)
        .map(|c| c.label())
        .unwrap_or_else(|| "No class assigned".to_string());
    let banner = directory
        .announcements_for(UserRole::Student)
        .first()
        .map(|a| (a.title.clone(), a.content.clone(), format_date_human(a.date)));
    let periods: Vec<_> = directory
        .timetable_for_class(&class_id)
        .into_iter()
        .cloned()
        .collect();
    let homework: Vec<_> = directory
        .assignments_for_class(&class_id)
        .into_iter()
        .cloned()
        .collect();
    let grades = directory.grades_for_student(&student.id);
    let attendance = directory.attendance_rate(&student.id);
    let gpa = directory.gpa(&student.id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        if let Some((title, content, when)) = banner {
            div { class: "announcement-banner", role: "status",
                Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                div {
                    p { class: "announcement-title", "{title}" }
                    p { class: "announcement-body", "{content}" }
                }
                span { class: "announcement-when", "{when}" }
            }
        }

        div { class: "dashboard-split",
            div { class: "dashboard-main",
                Card {
                    CardHeader { title: "Class Timetable", subtitle: "{class_label} at {school.name}" }
                    CardContent {
                        if periods.is_empty() {
                            p { class: "text-muted", "No periods scheduled." }
                        }
                        ul { class: "period-list",
                            for entry in periods {
                                li { class: "period-row", key: "{entry.id}",
                                    span { class: "period-day", "{entry.day}" }
                                    span { class: "period-time",
                                        "{format_time_12h(&entry.start_time)} - {format_time_12h(&entry.end_time)}"
                                    }
                                    span { class: "period-subject", "{entry.subject}" }
                                    span { class: "period-room text-muted", "Room {entry.room}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { title: "Homework" }
                    CardContent {
                        if homework.is_empty() {
                            p { class: "text-muted", "No homework set." }
                        }
                        ul { class: "homework-list",
                            for item in homework {
                                li { class: "homework-item", key: "{item.id}",
                                    Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 }
                                    div { class: "homework-text",
                                        p { class: "homework-title", "{item.title}" }
                                        p { class: "text-muted text-sm",
                                            "{item.subject} • Due {format_date_human(item.due_date)}"
                                        }
                                    }
                                    Badge { tone: assignment_tone(item.status), "{format_status_title(item.status.as_str())}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-side",
                Card {
                    CardHeader { title: "Academic Progress" }
                    CardContent {
                        if grades.is_empty() {
                            p { class: "text-muted", "No grades yet." }
                        }
                        for report in grades {
                            LabeledProgress {
                                key: "{report.subject}-{report.exam_name}",
                                label: report.subject.clone(),
                                percent: report.percentage(),
                                caption: "{report.letter()} ({report.marks_obtained}/{report.total_marks})",
                            }
                        }
                        if let Some(gpa) = gpa {
                            p { class: "progress-gpa",
                                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 }
                                " GPA {gpa:.2}"
                            }
                        }
                    }
                }

                div { class: "attendance-card",
                    Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                    p { class: "attendance-card-label", "Attendance" }
                    p { class: "attendance-card-value",
                        match attendance {
                            Some(rate) => rsx! { "{rate}%" },
                            None => rsx! { "No records" },
                        }
                    }
                }
            }
        }
    }
}
