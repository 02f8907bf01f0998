mod admin;
mod parent;
mod student;
mod teacher;

pub use admin::{AdminAcademics, AdminFees, AdminReports, AdminUsers};
pub use parent::{ParentChildren, ParentMessages};
pub use student::{StudentExams, StudentTimetable};
pub use teacher::{TeacherClasses, TeacherExams};
