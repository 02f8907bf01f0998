use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClipboardList, LdSave, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{ActiveSession, Directory, Exam};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, DataTable, DataTableCell, DataTableRow,
    FormSelect, Input, PageHeader,
};

use crate::format_helpers::format_date_human;
use crate::session::{use_directory, use_session};

/// Validate a marks entry against the exam's total.
///
/// Blank means "not entered yet" and is not an error.
pub(crate) fn parse_marks(raw: &str, total: u32) -> Result<Option<u32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let marks: u32 = raw
        .parse()
        .map_err(|_| format!("\"{raw}\" is not a whole number"))?;
    if marks > total {
        return Err(format!("At most {total}"));
    }
    Ok(Some(marks))
}

/// The room a class meets in most often, if it has any periods.
fn home_room(directory: &Directory, class_id: &str) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in directory.timetable_for_class(class_id) {
        *counts.entry(entry.room.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(room, _)| room.to_string())
}

/// Recorded marks for an exam, keyed by student id, as input text.
fn recorded_marks(directory: &Directory, exam_id: &str) -> HashMap<String, String> {
    directory
        .grades
        .iter()
        .filter(|g| g.exam_id == exam_id)
        .map(|g| (g.student_id.clone(), g.marks_obtained.to_string()))
        .collect()
}

#[component]
pub fn TeacherClasses(viewer: ActiveSession) -> Element {
    let directory = use_directory();
    let mut session = use_session();

    let classes: Vec<_> = directory
        .classes_in_school(&viewer.school.id)
        .into_iter()
        .map(|c| {
            let room = home_room(&directory, &c.id).unwrap_or_else(|| "-".to_string());
            (c.clone(), directory.roster(&c.id).len(), room)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader { title: "My Classes", subtitle: "Manage your assigned classes" }

        div { class: "grid-2",
            for (class, enrolled, room) in classes {
                Card { key: "{class.id}", class: "class-card",
                    CardContent {
                        h3 { class: "module-card-title", "{class.name}" }
                        p { class: "text-muted", "Grade {class.grade_level} • Room {room}" }
                        p { class: "text-sm", strong { "{enrolled}" } " students" }
                        div { class: "class-card-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| session.select_tab("attendance"),
                                Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                                "Students"
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| session.select_tab("exams"),
                                Icon::<LdClipboardList> { icon: LdClipboardList, width: 16, height: 16 }
                                "Grading"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Marks entry for one exam. Nothing is saved; the table resets when the
/// exam changes or the tab is left.
#[component]
pub fn TeacherExams(viewer: ActiveSession) -> Element {
    let directory = use_directory();

    let exams: Vec<Exam> = directory
        .classes_in_school(&viewer.school.id)
        .into_iter()
        .flat_map(|c| directory.exams_for_class(&c.id))
        .cloned()
        .collect();
    let first_exam = exams.first().map(|e| e.id.clone()).unwrap_or_default();
    let initial_marks = recorded_marks(&directory, &first_exam);

    let mut selected_exam = use_signal(move || first_exam);
    let mut marks = use_signal(move || initial_marks);
    let mut remarks = use_signal(HashMap::<String, String>::new);

    let Some(exam) = exams.iter().find(|e| e.id == selected_exam()).cloned() else {
        return rsx! {
            PageHeader { title: "Exams & Grading", subtitle: "Record student marks" }
            Card {
                CardContent {
                    p { class: "text-muted", "No exams scheduled." }
                }
            }
        };
    };

    let options: Vec<(String, String)> = exams
        .iter()
        .map(|e| (e.id.clone(), format!("{} - {}", e.name, e.subject)))
        .collect();
    let roster: Vec<_> = directory
        .roster(&exam.class_id)
        .into_iter()
        .cloned()
        .collect();
    let total = exam.total_marks;
    let invalid = roster
        .iter()
        .filter(|s| {
            marks
                .read()
                .get(&s.id)
                .is_some_and(|raw| parse_marks(raw, total).is_err())
        })
        .count();

    let handle_exam_change = {
        let directory = directory.clone();
        move |id: String| {
            marks.set(recorded_marks(&directory, &id));
            remarks.write().clear();
            selected_exam.set(id);
        }
    };

    let handle_save = move |_: MouseEvent| {
        let entered = marks
            .read()
            .values()
            .filter(|raw| matches!(parse_marks(raw, total), Ok(Some(_))))
            .count();
        tracing::info!(exam = %selected_exam(), entered, "Grades saved (not persisted)");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./modules.css") }

        PageHeader {
            title: "Exams & Grading",
            subtitle: "Record student marks",
            actions: rsx! {
                FormSelect {
                    label: "Exam:",
                    value: exam.id.clone(),
                    options,
                    onchange: handle_exam_change,
                }
            },
        }

        Card {
            CardHeader {
                title: "{exam.name} - {exam.subject}",
                subtitle: "{format_date_human(exam.date)} • out of {total}",
                action: rsx! {
                    Button {
                        disabled: invalid > 0,
                        onclick: handle_save,
                        Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                        "Save Grades"
                    }
                },
            }
            DataTable {
                columns: vec!["Student".into(), format!("Marks / {total}"), "Remarks".into()],
                is_empty: roster.is_empty(),
                empty_message: "No students in this class.",
                for student in roster {
                    {
                        let raw = marks.read().get(&student.id).cloned().unwrap_or_default();
                        let error = parse_marks(&raw, total).err();
                        let note = remarks.read().get(&student.id).cloned().unwrap_or_default();
                        let marks_id = student.id.clone();
                        let remarks_id = student.id.clone();
                        rsx! {
                            DataTableRow { key: "{student.id}", highlighted: error.is_some(),
                                DataTableCell { span { class: "module-user-name", "{student.name}" } }
                                DataTableCell { numeric: true,
                                    div { class: "marks-cell",
                                        Input {
                                            input_type: "number",
                                            value: raw,
                                            class: "marks-input",
                                            on_input: move |e: FormEvent| {
                                                marks.write().insert(marks_id.clone(), e.value());
                                            },
                                        }
                                        if let Some(err) = error {
                                            span { class: "marks-error", "{err}" }
                                        }
                                    }
                                }
                                DataTableCell {
                                    Input {
                                        value: note,
                                        placeholder: "Good effort",
                                        on_input: move |e: FormEvent| {
                                            remarks.write().insert(remarks_id.clone(), e.value());
                                        },
                                    }
                                }
                            }
                        }
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

    #[test]
    fn blank_marks_are_not_entered() {
        assert_eq!(parse_marks("  ", 100), Ok(None));
    }

    #[test]
    fn marks_within_total_are_accepted() {
        assert_eq!(parse_marks("85", 100), Ok(Some(85)));
        assert_eq!(parse_marks("100", 100), Ok(Some(100)));
    }

    #[test]
    fn marks_over_total_are_rejected() {
        assert_eq!(parse_marks("101", 100), Err("At most 100".to_string()));
    }

    #[test]
    fn non_numeric_marks_are_rejected() {
        assert!(parse_marks("8.5", 100).is_err());
        assert!(parse_marks("-3", 100).is_err());
    }

    #[test]
    fn class_meets_mostly_in_room_101() {
        let dir = Directory::seeded();
        assert_eq!(home_room(&dir, "c1").as_deref(), Some("101"));
        assert_eq!(home_room(&dir, "c2"), None);
    }

    #[test]
    fn recorded_marks_prefill_the_table() {
        let dir = Directory::seeded();
        let marks = recorded_marks(&dir, "e1");
        assert_eq!(marks.get("u3").map(String::as_str), Some("92"));
        assert_eq!(marks.len(), 3);
    }
}
