//! Line command parsing.
//!
//! Grammar:
//! - `add <title> | <description> | <people>`
//! - `move <id|#n> <active|finished>` where `#n` is 1-based in store order
//! - `list`, `export`, `help`, `quit`

use project_tracker_core::{ProjectId, ProjectInput, ProjectStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How a `move` command names its project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    Id(ProjectId),
    Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(ProjectInput),
    Move {
        project: ProjectRef,
        target: ProjectStatus,
    },
    List,
    Export,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    Usage(&'static str),
    InvalidArgument(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `{name}`; try `help`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::InvalidArgument(message) => f.write_str(message),
        }
    }
}

impl Error for CommandError {}

const ADD_USAGE: &str = "add <title> | <description> | <people>";
const MOVE_USAGE: &str = "move <id|#n> <active|finished>";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest),
        "move" => parse_move(rest),
        "list" | "ls" => Ok(Command::List),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let fields: Vec<&str> = rest.split('|').collect();
    match fields.as_slice() {
        [title, description, people] => Ok(Command::Add(ProjectInput::new(
            *title,
            *description,
            *people,
        ))),
        _ => Err(CommandError::Usage(ADD_USAGE)),
    }
}

fn parse_move(rest: &str) -> Result<Command, CommandError> {
    let mut parts = rest.split_whitespace();
    let (Some(reference), Some(status), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CommandError::Usage(MOVE_USAGE));
    };

    let project = match reference.strip_prefix('#') {
        Some(position) => match position.parse::<usize>() {
            Ok(position) if position > 0 => ProjectRef::Position(position),
            _ => {
                return Err(CommandError::InvalidArgument(format!(
                    "invalid project position `{reference}`"
                )))
            }
        },
        None => ProjectRef::Id(
            reference
                .parse::<ProjectId>()
                .map_err(|err| CommandError::InvalidArgument(format!("{err}")))?,
        ),
    };
    let target = status
        .parse::<ProjectStatus>()
        .map_err(|err| CommandError::InvalidArgument(format!("{err}")))?;

    Ok(Command::Move { project, target })
}
