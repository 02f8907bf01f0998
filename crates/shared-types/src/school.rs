use serde::{Deserialize, Serialize};

/// A tenant. Users pick their school by `code` before signing in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    /// Login code, unique across the directory and matched case-insensitively.
    pub code: String,
    pub name: String,
    pub address: String,
    /// Accent color name used to theme the school's shell (e.g. "indigo").
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl School {
    /// Whether `code` selects this school. Case and surrounding whitespace are ignored.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// First letter of the school name, for the compact mobile header badge.
    pub fn monogram(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

/// A class section such as "10-A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSection {
    pub id: String,
    pub name: String,
    pub grade_level: u8,
    pub school_id: String,
}

impl ClassSection {
    /// "10-A (Grade 10)"
    pub fn label(&self) -> String {
        format!("{} (Grade {})", self.name, self.grade_level)
    }
}
