use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::UserRole;

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "PENDING",
            AssignmentStatus::Submitted => "SUBMITTED",
            AssignmentStatus::Graded => "GRADED",
        }
    }
}

/// Homework posted to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub due_date: NaiveDate,
    pub class_id: String,
    pub status: AssignmentStatus,
}

// ---------------------------------------------------------------------------
// Timetable
// ---------------------------------------------------------------------------

/// One period in a class's weekly schedule. Times are "HH:MM" 24-hour strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTableEntry {
    pub id: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub room: String,
    pub class_id: String,
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Position of a day name in the week, Monday first. Unknown names sort last.
pub fn weekday_index(day: &str) -> usize {
    WEEKDAYS
        .iter()
        .position(|d| d.eq_ignore_ascii_case(day))
        .unwrap_or(WEEKDAYS.len())
}

impl TimeTableEntry {
    /// Sort key: weekday then start time.
    pub fn slot_key(&self) -> (usize, &str) {
        (weekday_index(&self.day), self.start_time.as_str())
    }
}

// ---------------------------------------------------------------------------
// Exams & grades
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub date: NaiveDate,
    pub total_marks: u32,
    pub class_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub exam_id: String,
    pub student_id: String,
    pub marks_obtained: u32,
}

/// A grade joined with its exam, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub exam_name: String,
    pub subject: String,
    pub marks_obtained: u32,
    pub total_marks: u32,
}

impl GradeReport {
    /// Score as a percentage of total marks (0 when the exam has no marks).
    pub fn percentage(&self) -> f64 {
        if self.total_marks == 0 {
            return 0.0;
        }
        f64::from(self.marks_obtained) / f64::from(self.total_marks) * 100.0
    }

    pub fn letter(&self) -> &'static str {
        letter_grade(self.percentage())
    }
}

/// Letter grade for a percentage score on the usual plus/minus scale.
pub fn letter_grade(percentage: f64) -> &'static str {
    match percentage {
        p if p >= 93.0 => "A",
        p if p >= 90.0 => "A-",
        p if p >= 87.0 => "B+",
        p if p >= 83.0 => "B",
        p if p >= 80.0 => "B-",
        p if p >= 77.0 => "C+",
        p if p >= 73.0 => "C",
        p if p >= 70.0 => "C-",
        p if p >= 60.0 => "D",
        _ => "F",
    }
}

/// Grade points for a letter grade on a 4.0 scale.
pub fn grade_points(letter: &str) -> f64 {
    match letter {
        "A" => 4.0,
        "A-" => 3.7,
        "B+" => 3.3,
        "B" => 3.0,
        "B-" => 2.7,
        "C+" => 2.3,
        "C" => 2.0,
        "C-" => 1.7,
        "D" => 1.0,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    pub target_roles: Vec<UserRole>,
}

impl Announcement {
    pub fn targets(&self, role: UserRole) -> bool {
        self.target_roles.contains(&role)
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A message in a parent/teacher conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub body: String,
    /// Display time, e.g. "10:05 AM".
    pub sent_at: String,
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// The three statuses in the order the marking buttons show them.
pub const ALL_ATTENDANCE_STATUSES: &[AttendanceStatus] = &[
    AttendanceStatus::Present,
    AttendanceStatus::Absent,
    AttendanceStatus::Late,
];

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Late => "LATE",
        }
    }

    /// Late arrivals still count as attended.
    pub fn counts_as_attended(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

/// A historical attendance mark from the seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Counts per status for a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceTally {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

/// Marks entered by a teacher for one class on one day.
///
/// Lives only inside the view that created it. Nothing reads it back,
/// submits it, or persists it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceSheet {
    marks: HashMap<String, AttendanceStatus>,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the mark for a student.
    pub fn mark(&mut self, student_id: &str, status: AttendanceStatus) {
        self.marks.insert(student_id.to_string(), status);
    }

    pub fn status_of(&self, student_id: &str) -> Option<AttendanceStatus> {
        self.marks.get(student_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn tally(&self) -> AttendanceTally {
        self.marks
            .values()
            .fold(AttendanceTally::default(), |mut t, status| {
                match status {
                    AttendanceStatus::Present => t.present += 1,
                    AttendanceStatus::Absent => t.absent += 1,
                    AttendanceStatus::Late => t.late += 1,
                }
                t
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_grade_boundaries() {
        assert_eq!(letter_grade(100.0), "A");
        assert_eq!(letter_grade(93.0), "A");
        assert_eq!(letter_grade(92.0), "A-");
        assert_eq!(letter_grade(88.0), "B+");
        assert_eq!(letter_grade(85.0), "B");
        assert_eq!(letter_grade(76.0), "C");
        assert_eq!(letter_grade(59.9), "F");
    }

    #[test]
    fn grade_points_follow_letters() {
        assert_eq!(grade_points("A"), 4.0);
        assert_eq!(grade_points("B+"), 3.3);
        assert_eq!(grade_points("F"), 0.0);
        assert_eq!(grade_points("?"), 0.0);
    }

    #[test]
    fn grade_report_percentage_handles_zero_total() {
        let report = GradeReport {
            exam_name: "Quiz".into(),
            subject: "Math".into(),
            marks_obtained: 5,
            total_marks: 0,
        };
        assert_eq!(report.percentage(), 0.0);
        assert_eq!(report.letter(), "F");
    }

    #[test]
    fn grade_report_scales_to_total() {
        let report = GradeReport {
            exam_name: "Final Exam".into(),
            subject: "Physics".into(),
            marks_obtained: 45,
            total_marks: 50,
        };
        assert_eq!(report.percentage(), 90.0);
        assert_eq!(report.letter(), "A-");
    }

    #[test]
    fn weekday_index_orders_monday_first() {
        assert_eq!(weekday_index("Monday"), 0);
        assert_eq!(weekday_index("tuesday"), 1);
        assert_eq!(weekday_index("Someday"), 7);
    }

    #[test]
    fn sheet_starts_empty() {
        let sheet = AttendanceSheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.status_of("u3"), None);
        assert_eq!(sheet.tally(), AttendanceTally::default());
    }

    #[test]
    fn sheet_mark_overwrites_previous_status() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark("u3", AttendanceStatus::Absent);
        sheet.mark("u3", AttendanceStatus::Late);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.status_of("u3"), Some(AttendanceStatus::Late));
    }

    #[test]
    fn sheet_tally_counts_each_status() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark("u3", AttendanceStatus::Present);
        sheet.mark("u98", AttendanceStatus::Present);
        sheet.mark("u99", AttendanceStatus::Late);
        assert_eq!(
            sheet.tally(),
            AttendanceTally {
                present: 2,
                absent: 0,
                late: 1
            }
        );
        sheet.clear();
        assert!(sheet.is_empty());
    }

    #[test]
    fn late_counts_as_attended() {
        assert!(AttendanceStatus::Late.counts_as_attended());
        assert!(AttendanceStatus::Present.counts_as_attended());
        assert!(!AttendanceStatus::Absent.counts_as_attended());
    }

    #[test]
    fn announcement_targets_listed_roles_only() {
        let a = Announcement {
            id: "a2".into(),
            title: "Exam Schedule Released".into(),
            content: "Please check the exam tab.".into(),
            date: NaiveDate::from_ymd_opt(2023, 10, 25).unwrap(),
            author: "Admin".into(),
            target_roles: vec![UserRole::Student],
        };
        assert!(a.targets(UserRole::Student));
        assert!(!a.targets(UserRole::Parent));
    }
}
