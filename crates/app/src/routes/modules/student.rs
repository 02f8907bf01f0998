use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdGraduationCap};
use dioxus_free_icons::Icon;
use shared_types::{ActiveSession, TimeTableEntry};
use shared_ui::{Card, CardContent, PageHeader, StatCard};

use crate::format_helpers::format_time_12h;
use crate::session::use_directory;

/// Group already-sorted periods into consecutive runs per weekday.
fn group_by_day(entries: Vec<TimeTableEntry>) -> Vec<(String, Vec<TimeTableEntry>)> {
    let mut days: Vec<(String, Vec<TimeTableEntry>)> = Vec::new();
    for entry in entries {
        match days.last_mut() {
            Some((day, periods)) if *day == entry.day => periods.push(entry),
            _ => days.push((entry.day.clone(), vec![entry])),
        }
    }
    days
}

#[component]
pub fn StudentTimetable(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let class_id = viewer.user.student_class_id.clone().unwrap_or_default();
    let class_label = directory
        .class(&class_id)
        .map(|c| c.label())
        .unwrap_or_else(|| "Class schedule".to_string());
    let days = group_by_day(
        directory
            .timetable_for_class(&class_id)
            .into_iter()
            .cloned()
            .collect(),
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "Weekly Timetable", subtitle: class_label }

        if days.is_empty() {
            Card {
                CardContent {
                    p { class: "text-muted", "No periods scheduled." }
                }
            }
        }

        for (day, periods) in days {
            Card { key: "{day}",
                CardContent {
                    h3 { class: "timetable-day", "{day}" }
                    ul { class: "timetable-list",
                        for period in periods {
                            li { class: "timetable-row", key: "{period.id}",
                                span { class: "timetable-time",
                                    Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                                    " {format_time_12h(&period.start_time)} - {format_time_12h(&period.end_time)}"
                                }
                                div {
                                    p { class: "module-user-name", "{period.subject}" }
                                    p { class: "text-muted text-sm", "Room {period.room}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StudentExams(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let reports = directory.grades_for_student(&viewer.user.id);
    let gpa = directory
        .gpa(&viewer.user.id)
        .map(|g| format!("{g:.2}"))
        .unwrap_or_else(|| "-".to_string());
    let exam_count = reports.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "My Grades", subtitle: "Examination results" }

        div { class: "grid-2",
            StatCard {
                label: "Grade Point Average",
                value: gpa,
                hint: "Across {exam_count} exams",
                icon: rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 } },
            }
        }

        if reports.is_empty() {
            Card {
                CardContent {
                    p { class: "text-muted", "No results published yet." }
                }
            }
        }

        div { class: "grid-2",
            for report in reports {
                Card { key: "{report.subject}-{report.exam_name}",
                    CardContent {
                        div { class: "grade-card",
                            div {
                                h3 { class: "module-card-title", "{report.subject}" }
                                p { class: "text-muted text-sm", "{report.exam_name}" }
                            }
                            div { class: "grade-card-score",
                                span { class: "grade-letter", "{report.letter()}" }
                                p { class: "text-muted text-sm",
                                    "{report.marks_obtained}/{report.total_marks}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
