//! Project domain record.
//!
//! # Responsibility
//! - Define the project entity and its two-state status.
//! - Provide constructors that enforce initial-state rules.
//!
//! # Invariants
//! - `id` is generated once and never changes for the project lifetime.
//! - New projects always start as `ProjectStatus::Active`.
//! - `ProjectId` is never nil.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable opaque identifier for one project.
///
/// Displays and parses as a hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID. Returns `None` for the nil UUID.
    pub fn from_uuid(value: Uuid) -> Option<Self> {
        if value.is_nil() {
            None
        } else {
            Some(Self(value))
        }
    }
}

impl TryFrom<Uuid> for ProjectId {
    type Error = ProjectIdParseError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::from_uuid(value).ok_or_else(|| ProjectIdParseError {
            input: value.to_string(),
        })
    }
}

impl From<ProjectId> for Uuid {
    fn from(value: ProjectId) -> Self {
        value.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Returned when text cannot be read back as a `ProjectId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdParseError {
    pub input: String,
}

impl Display for ProjectIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid project id: `{}`", self.input)
    }
}

impl Error for ProjectIdParseError {}

impl FromStr for ProjectId {
    type Err = ProjectIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Uuid::parse_str(trimmed)
            .ok()
            .and_then(Self::from_uuid)
            .ok_or_else(|| ProjectIdParseError {
                input: trimmed.to_string(),
            })
    }
}

/// Which list a project belongs to.
///
/// Both states are steady; either can transition to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text names neither `active` nor `finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatusParseError {
    pub input: String,
}

impl Display for ProjectStatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.input
        )
    }
}

impl Error for ProjectStatusParseError {}

impl FromStr for ProjectStatus {
    type Err = ProjectStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ProjectStatusParseError {
                input: other.to_string(),
            }),
        }
    }
}

/// Canonical project record.
///
/// Field content is validated by callers before a project reaches the
/// store; this type does not re-check title or team size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Team size.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(ProjectId::generate(), title, description, people)
    }

    /// Creates an active project with a caller-provided id.
    ///
    /// Used where identity is decided outside the store, e.g. deterministic
    /// id sources in tests.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Team caption, e.g. `1 person` or `3 people`.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
