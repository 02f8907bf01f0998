mod admin;
mod parent;
mod student;
mod teacher;

pub use admin::AdminDashboard;
pub use parent::ParentDashboard;
pub use student::{StudentDashboard, StudentOverview};
pub use teacher::TeacherDashboard;
