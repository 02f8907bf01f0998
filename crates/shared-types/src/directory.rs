use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    Announcement, AppError, Assignment, AttendanceRecord, ClassSection, Exam, FeeInvoice,
    FeeSummary, Grade, GradeReport, Message, School, TimeTableEntry, User, UserRole,
};

/// A labelled value in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: u32,
}

/// Head-counts and fee totals for one school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolStats {
    pub students: usize,
    pub teachers: usize,
    pub parents: usize,
    pub classes: usize,
    pub fees: FeeSummary,
    /// Share of attended marks across the school's students, 0-100.
    pub attendance_rate: Option<u8>,
}

/// Read-only store of every school record the dashboard shows.
///
/// Built once at startup (see [`Directory::seeded`]) and never mutated.
/// Lookups that match nothing return `None`; callers decide what to show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub schools: Vec<School>,
    pub users: Vec<User>,
    pub classes: Vec<ClassSection>,
    pub assignments: Vec<Assignment>,
    pub fees: Vec<FeeInvoice>,
    pub timetable: Vec<TimeTableEntry>,
    pub announcements: Vec<Announcement>,
    pub exams: Vec<Exam>,
    pub grades: Vec<Grade>,
    pub attendance: Vec<AttendanceRecord>,
    pub messages: Vec<Message>,
    pub attendance_trend: Vec<TrendPoint>,
    pub fee_trend: Vec<TrendPoint>,
}

impl Directory {
    // ── Login lookups ──────────────────────────────────

    /// Find the school whose code matches, ignoring case.
    pub fn find_school_by_code(&self, code: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.matches_code(code))
    }

    /// Find the user with exactly this email in this school.
    ///
    /// No password is involved: any account that matches both fields is returned.
    pub fn find_user(&self, email: &str, school_id: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.school_id == school_id)
    }

    // ── Record lookups ─────────────────────────────────

    pub fn school(&self, id: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn class(&self, id: &str) -> Option<&ClassSection> {
        self.classes.iter().find(|c| c.id == id)
    }

    // ── Foreign-key filters ────────────────────────────

    pub fn users_in_school(&self, school_id: &str) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.school_id == school_id)
            .collect()
    }

    pub fn users_with_role(&self, school_id: &str, role: UserRole) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.school_id == school_id && u.role == role)
            .collect()
    }

    pub fn classes_in_school(&self, school_id: &str) -> Vec<&ClassSection> {
        self.classes
            .iter()
            .filter(|c| c.school_id == school_id)
            .collect()
    }

    /// Students enrolled in a class, ordered by roll number.
    pub fn roster(&self, class_id: &str) -> Vec<&User> {
        let mut students: Vec<&User> = self
            .users
            .iter()
            .filter(|u| {
                u.role == UserRole::Student && u.student_class_id.as_deref() == Some(class_id)
            })
            .collect();
        students.sort_by_key(|u| (u.roll_no.unwrap_or(u32::MAX), u.name.clone()));
        students
    }

    /// The parent's linked children, in the order the parent lists them.
    ///
    /// Ids that do not resolve to a student are skipped.
    pub fn children_of(&self, parent: &User) -> Vec<&User> {
        parent
            .children_ids
            .iter()
            .filter_map(|id| self.user(id))
            .filter(|u| u.role == UserRole::Student)
            .collect()
    }

    /// A class's periods, ordered by weekday then start time.
    pub fn timetable_for_class(&self, class_id: &str) -> Vec<&TimeTableEntry> {
        let mut entries: Vec<&TimeTableEntry> = self
            .timetable
            .iter()
            .filter(|t| t.class_id == class_id)
            .collect();
        entries.sort_by(|a, b| a.slot_key().cmp(&b.slot_key()));
        entries
    }

    /// Periods across every class of a school, ordered by weekday then start time.
    pub fn timetable_for_school(&self, school_id: &str) -> Vec<&TimeTableEntry> {
        let class_ids: HashSet<&str> = self
            .classes_in_school(school_id)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        let mut entries: Vec<&TimeTableEntry> = self
            .timetable
            .iter()
            .filter(|t| class_ids.contains(t.class_id.as_str()))
            .collect();
        entries.sort_by(|a, b| a.slot_key().cmp(&b.slot_key()));
        entries
    }

    /// A class's assignments, soonest due first.
    pub fn assignments_for_class(&self, class_id: &str) -> Vec<&Assignment> {
        let mut items: Vec<&Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.class_id == class_id)
            .collect();
        items.sort_by_key(|a| a.due_date);
        items
    }

    pub fn fees_for_student(&self, student_id: &str) -> Vec<&FeeInvoice> {
        self.fees
            .iter()
            .filter(|f| f.student_id == student_id)
            .collect()
    }

    /// Invoices billed to any student of the school.
    pub fn fees_in_school(&self, school_id: &str) -> Vec<&FeeInvoice> {
        self.fees
            .iter()
            .filter(|f| {
                self.user(&f.student_id)
                    .is_some_and(|u| u.school_id == school_id)
            })
            .collect()
    }

    /// Announcements addressed to a role, newest first.
    pub fn announcements_for(&self, role: UserRole) -> Vec<&Announcement> {
        let mut items: Vec<&Announcement> = self
            .announcements
            .iter()
            .filter(|a| a.targets(role))
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    pub fn exams_for_class(&self, class_id: &str) -> Vec<&Exam> {
        self.exams
            .iter()
            .filter(|e| e.class_id == class_id)
            .collect()
    }

    /// The student's grades joined with their exams. Grades whose exam is missing are skipped.
    pub fn grades_for_student(&self, student_id: &str) -> Vec<GradeReport> {
        self.grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .filter_map(|g| {
                let exam = self.exams.iter().find(|e| e.id == g.exam_id)?;
                Some(GradeReport {
                    exam_name: exam.name.clone(),
                    subject: exam.subject.clone(),
                    marks_obtained: g.marks_obtained,
                    total_marks: exam.total_marks,
                })
            })
            .collect()
    }

    /// Mean grade points over the student's graded exams.
    pub fn gpa(&self, student_id: &str) -> Option<f64> {
        let reports = self.grades_for_student(student_id);
        if reports.is_empty() {
            return None;
        }
        let total: f64 = reports
            .iter()
            .map(|r| crate::grade_points(r.letter()))
            .sum();
        Some(total / reports.len() as f64)
    }

    /// Share of attended marks for one student, rounded to a whole percent.
    pub fn attendance_rate(&self, student_id: &str) -> Option<u8> {
        rate(self
            .attendance
            .iter()
            .filter(|r| r.student_id == student_id))
    }

    /// Conversation between two users, in seed order.
    pub fn conversation(&self, a: &str, b: &str) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| {
                (m.from_user_id == a && m.to_user_id == b)
                    || (m.from_user_id == b && m.to_user_id == a)
            })
            .collect()
    }

    /// Everyone the user has exchanged messages with.
    pub fn contacts_of(&self, user_id: &str) -> Vec<&User> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .filter_map(|m| {
                if m.from_user_id == user_id {
                    Some(m.to_user_id.as_str())
                } else if m.to_user_id == user_id {
                    Some(m.from_user_id.as_str())
                } else {
                    None
                }
            })
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.user(id))
            .collect()
    }

    pub fn school_stats(&self, school_id: &str) -> SchoolStats {
        let students = self.users_with_role(school_id, UserRole::Student);
        let student_ids: HashSet<&str> = students.iter().map(|u| u.id.as_str()).collect();
        SchoolStats {
            students: students.len(),
            teachers: self.users_with_role(school_id, UserRole::Teacher).len(),
            parents: self.users_with_role(school_id, UserRole::Parent).len(),
            classes: self.classes_in_school(school_id).len(),
            fees: FeeSummary::from_invoices(self.fees_in_school(school_id)),
            attendance_rate: rate(self
                .attendance
                .iter()
                .filter(|r| student_ids.contains(r.student_id.as_str()))),
        }
    }

    // ── Integrity ──────────────────────────────────────

    /// Check the referential invariants of the seed set: unique school codes
    /// (case-insensitive), unique user emails per school, and every user,
    /// class and child id pointing at a record that exists.
    pub fn check_integrity(&self) -> Result<(), AppError> {
        let mut codes = HashSet::new();
        for school in &self.schools {
            if !codes.insert(school.code.to_ascii_uppercase()) {
                return Err(AppError::internal(format!(
                    "duplicate school code {}",
                    school.code
                )));
            }
        }

        let mut logins = HashSet::new();
        for user in &self.users {
            if self.school(&user.school_id).is_none() {
                return Err(AppError::internal(format!(
                    "user {} references missing school {}",
                    user.id, user.school_id
                )));
            }
            if !logins.insert((user.email.as_str(), user.school_id.as_str())) {
                return Err(AppError::internal(format!(
                    "duplicate login {} in school {}",
                    user.email, user.school_id
                )));
            }
            if let Some(class_id) = &user.student_class_id {
                if self.class(class_id).is_none() {
                    return Err(AppError::internal(format!(
                        "user {} references missing class {class_id}",
                        user.id
                    )));
                }
            }
            for child in &user.children_ids {
                if self.user(child).is_none() {
                    return Err(AppError::internal(format!(
                        "parent {} references missing child {child}",
                        user.id
                    )));
                }
            }
        }

        for class in &self.classes {
            if self.school(&class.school_id).is_none() {
                return Err(AppError::internal(format!(
                    "class {} references missing school {}",
                    class.id, class.school_id
                )));
            }
        }
        Ok(())
    }
}

fn rate<'a>(records: impl Iterator<Item = &'a AttendanceRecord>) -> Option<u8> {
    let (attended, total) = records.fold((0u32, 0u32), |(attended, total), r| {
        (attended + u32::from(r.status.counts_as_attended()), total + 1)
    });
    if total == 0 {
        return None;
    }
    let pct = (f64::from(attended) / f64::from(total) * 100.0).round();
    Some(pct as u8)
}
