use chrono::{Datelike, Local, Timelike, Weekday};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdCheck, LdChevronRight, LdClock, LdX};
use dioxus_free_icons::Icon;
use shared_types::{
    ActiveSession, AttendanceSheet, AttendanceStatus, Directory, FeatureFlags, TimeTableEntry,
    ALL_ATTENDANCE_STATUSES,
};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, FormSelect, PageHeader,
};

use crate::format_helpers::{
    format_status_title, format_time_12h, format_weekday_date, greeting_for_hour,
};
use crate::routes::badges::attendance_tone;
use crate::routes::ideas::AssignmentIdeasModal;
use crate::session::use_directory;

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The school's periods on `day`, or the first day that has any when `day` is free.
fn schedule_for<'a>(directory: &'a Directory, school_id: &str, day: &str) -> Vec<&'a TimeTableEntry> {
    let week = directory.timetable_for_school(school_id);
    let today: Vec<_> = week.iter().copied().filter(|t| t.day == day).collect();
    if !today.is_empty() {
        return today;
    }
    let Some(first_day) = week.first().map(|t| t.day.clone()) else {
        return Vec::new();
    };
    week.into_iter().filter(|t| t.day == first_day).collect()
}

fn status_icon(status: AttendanceStatus) -> Element {
    match status {
        AttendanceStatus::Present => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } },
        AttendanceStatus::Absent => rsx! { Icon::<LdX> { icon: LdX, width: 16, height: 16 } },
        AttendanceStatus::Late => rsx! { Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } },
    }
}

/// Greeting, attendance marking for one class, today's periods and the
/// assignment-idea shortcut.
///
/// Marks live in this view's sheet only; leaving the tab drops them.
#[component]
pub fn TeacherDashboard(viewer: ActiveSession) -> Element {
    let directory = use_directory();
    let flags: FeatureFlags = use_context();

    let classes: Vec<(String, String)> = directory
        .classes_in_school(&viewer.school.id)
        .into_iter()
        .map(|c| (c.id.clone(), format!("{} (Grade {})", c.name, c.grade_level)))
        .collect();
    let first_class = classes.first().map(|(id, _)| id.clone()).unwrap_or_default();

    let mut selected_class = use_signal(move || first_class);
    let mut sheet = use_signal(AttendanceSheet::new);
    let mut ideas_open = use_signal(|| false);

    let now = Local::now();
    let today = weekday_name(now.weekday());
    let greeting = greeting_for_hour(now.hour());
    let date_label = format_weekday_date(now.date_naive());

    let schedule: Vec<TimeTableEntry> = schedule_for(&directory, &viewer.school.id, today)
        .into_iter()
        .cloned()
        .collect();
    let periods_today = directory
        .timetable_for_school(&viewer.school.id)
        .iter()
        .filter(|t| t.day == today)
        .count();
    let class_names: std::collections::HashMap<String, String> = directory
        .classes
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();

    let roster: Vec<(String, String, String, Option<u32>)> = directory
        .roster(&selected_class())
        .into_iter()
        .map(|s| (s.id.clone(), s.name.clone(), s.initials(), s.roll_no))
        .collect();
    let tally = sheet.read().tally();
    let marked = sheet.read().len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            title: "{greeting}, {viewer.user.name}",
            subtitle: "You have {periods_today} classes scheduled today.",
            actions: rsx! {
                FormSelect {
                    label: "Class:",
                    value: selected_class(),
                    options: classes.clone(),
                    onchange: move |id: String| {
                        sheet.write().clear();
                        selected_class.set(id);
                    },
                }
            },
        }

        div { class: "dashboard-split",
            Card { class: "dashboard-main",
                CardHeader {
                    title: "Mark Attendance - {date_label}",
                    subtitle: "{marked} of {roster.len()} marked",
                    action: rsx! {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: marked == 0,
                            onclick: move |_| {
                                tracing::info!(
                                    present = tally.present,
                                    absent = tally.absent,
                                    late = tally.late,
                                    "Attendance sheet submitted (not persisted)"
                                );
                            },
                            "Submit"
                        }
                    },
                }
                ul { class: "roster-list",
                    if roster.is_empty() {
                        li { class: "roster-empty text-muted", "No students in this class." }
                    }
                    for (student_id, name, initials, roll_no) in roster {
                        li { class: "roster-row", key: "{student_id}",
                            div { class: "roster-student",
                                span { class: "roster-initials", "{initials}" }
                                div {
                                    p { class: "roster-name", "{name}" }
                                    if let Some(roll) = roll_no {
                                        p { class: "roster-roll", "Roll No: {roll}" }
                                    }
                                }
                            }
                            div { class: "attendance-buttons",
                                for status in ALL_ATTENDANCE_STATUSES.iter().copied() {
                                    {
                                        let selected = sheet.read().status_of(&student_id) == Some(status);
                                        let id = student_id.clone();
                                        rsx! {
                                            button {
                                                key: "{status.as_str()}",
                                                class: "attendance-button",
                                                r#type: "button",
                                                title: format_status_title(status.as_str()),
                                                "data-status": status.as_str(),
                                                "data-selected": selected,
                                                onclick: move |_| sheet.write().mark(&id, status),
                                                {status_icon(status)}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if marked > 0 {
                    div { class: "attendance-tally",
                        Badge { tone: attendance_tone(AttendanceStatus::Present), "Present {tally.present}" }
                        Badge { tone: attendance_tone(AttendanceStatus::Absent), "Absent {tally.absent}" }
                        Badge { tone: attendance_tone(AttendanceStatus::Late), "Late {tally.late}" }
                    }
                }
            }

            div { class: "dashboard-side",
                Card {
                    CardHeader { title: "Upcoming Schedule" }
                    CardContent {
                        ol { class: "schedule-timeline",
                            if schedule.is_empty() {
                                li { class: "text-muted", "Nothing scheduled." }
                            }
                            for entry in schedule {
                                li { class: "schedule-item", key: "{entry.id}",
                                    span { class: "schedule-dot" }
                                    div {
                                        p { class: "schedule-time", "{format_time_12h(&entry.start_time)}" }
                                        p { class: "schedule-subject", "{entry.subject}" }
                                        p { class: "schedule-meta",
                                            {class_names.get(&entry.class_id).cloned().unwrap_or_else(|| "-".to_string())}
                                            " • Room {entry.room}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if flags.ai_ideas {
                    div { class: "promo-card",
                        h3 { "Create Assignment" }
                        p { "Post homework for your classes quickly." }
                        Button {
                            variant: ButtonVariant::Secondary,
                            full_width: true,
                            onclick: move |_| ideas_open.set(true),
                            "Create Now"
                            Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                        }
                    }
                    AssignmentIdeasModal {
                        open: ideas_open(),
                        on_close: move |_| ideas_open.set(false),
                    }
                }
            }
        }

        p { class: "dashboard-footnote text-muted",
            Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
            " Marks are kept on this screen only and are cleared when you leave it."
        }
    }
}
