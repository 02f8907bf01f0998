use shared_types::{AssignmentStatus, AttendanceStatus, FeeStatus, UserRole};
use shared_ui::BadgeTone;

pub fn fee_tone(status: FeeStatus) -> BadgeTone {
    match status {
        FeeStatus::Paid => BadgeTone::Success,
        FeeStatus::Due => BadgeTone::Warning,
        FeeStatus::Overdue => BadgeTone::Danger,
    }
}

pub fn assignment_tone(status: AssignmentStatus) -> BadgeTone {
    match status {
        AssignmentStatus::Pending => BadgeTone::Warning,
        AssignmentStatus::Submitted => BadgeTone::Success,
        AssignmentStatus::Graded => BadgeTone::Info,
    }
}

pub fn attendance_tone(status: AttendanceStatus) -> BadgeTone {
    match status {
        AttendanceStatus::Present => BadgeTone::Success,
        AttendanceStatus::Absent => BadgeTone::Danger,
        AttendanceStatus::Late => BadgeTone::Warning,
    }
}

pub fn role_tone(role: UserRole) -> BadgeTone {
    match role {
        UserRole::Admin => BadgeTone::Danger,
        UserRole::Teacher => BadgeTone::Info,
        UserRole::Student => BadgeTone::Success,
        UserRole::Parent => BadgeTone::Neutral,
    }
}
