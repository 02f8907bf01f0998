use serde::{Deserialize, Serialize};
use std::fmt;

/// The four account roles. Each role gets its own dashboard and menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Parent,
}

/// All roles in menu/display order.
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Admin,
    UserRole::Teacher,
    UserRole::Student,
    UserRole::Parent,
];

impl UserRole {
    /// Parse a stored role name (case-insensitive). Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(UserRole::Admin),
            "TEACHER" => Some(UserRole::Teacher),
            "STUDENT" => Some(UserRole::Student),
            "PARENT" => Some(UserRole::Parent),
            _ => None,
        }
    }

    /// Uppercase wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Teacher => "TEACHER",
            UserRole::Student => "STUDENT",
            UserRole::Parent => "PARENT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
            UserRole::Parent => "Parent",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory account. Belongs to exactly one school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub school_id: String,
    pub avatar_url: String,
    /// Class the student is enrolled in. Students only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_class_id: Option<String>,
    /// Roll number within the class. Students only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_no: Option<u32>,
    /// Ids of the students this account is guardian of. Parents only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children_ids: Vec<String>,
}

impl User {
    /// Up to two uppercase initials for avatar fallbacks ("Alice Admin" -> "AA").
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        initials.to_uppercase()
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
