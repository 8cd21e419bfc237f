//! User categories of the portal.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Segment rendered for a record that carries no role at all.
const MISSING_SEGMENT: &str = "undefined";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Lecturer,
    Admin,
    /// Anything the portal does not know, kept raw (`None` when the field is missing).
    Unknown(Option<String>),
}

impl Role {
    /// Exact, case-sensitive match against the values the API hands out.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("student") => Role::Student,
            Some("lecturer") => Role::Lecturer,
            Some("admin") => Role::Admin,
            other => Role::Unknown(other.map(str::to_owned)),
        }
    }

    /// Path segment used to build `/{segment}/dashboard`.
    pub fn segment(&self) -> Option<&str> {
        match self {
            Role::Student => Some("student"),
            Role::Lecturer => Some("lecturer"),
            Role::Admin => Some("admin"),
            Role::Unknown(raw) => raw.as_deref(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Unknown(_))
    }

    /// Not corrected for roles without a page: a missing role yields `/undefined/dashboard`.
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.segment().unwrap_or(MISSING_SEGMENT))
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Unknown(None)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment().unwrap_or("unknown"))
    }
}

/* a role that is not a string (number, object…) degrades to Unknown instead of failing the record */
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => Role::parse(Some(&s)),
            Some(serde_json::Value::Null) | None => Role::Unknown(None),
            Some(other) => Role::Unknown(Some(other.to_string())),
        })
    }
}
