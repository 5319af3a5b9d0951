//! Plain-text rendering of project lists.

use project_tracker_core::{Project, ProjectId, Projection};
use std::fmt::Write;

pub fn banner() -> String {
    format!(
        "project-tracker {} (type `help` for commands)",
        project_tracker_core::core_version()
    )
}

pub fn help() -> &'static str {
    "commands:
  add <title> | <description> | <people>   create an active project
  move <id|#n> <active|finished>           move a project between lists
  list                                     show both lists
  export                                   print all projects as JSON
  quit                                     leave"
}

/// Renders one list. `#n` markers are positions in `all`, the store order;
/// projects missing from `all` are marked `#?`.
pub fn render_list(projection: &Projection, all: &[Project]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", projection.kind().heading());
    let projects = projection.projects();
    if projects.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    for project in &projects {
        let _ = writeln!(
            out,
            "  #{} {} ({} assigned)\n      {}\n      id={}",
            position_of(all, &project.id)
                .map(|position| position.to_string())
                .unwrap_or_else(|| "?".to_string()),
            project.title,
            project.people_label(),
            project.description,
            project.id
        );
    }
    out
}

pub fn render_board(lists: &[&Projection], all: &[Project]) -> String {
    lists
        .iter()
        .map(|projection| render_list(projection, all))
        .collect::<Vec<_>>()
        .join("\n")
}

fn position_of(all: &[Project], id: &ProjectId) -> Option<usize> {
    all.iter()
        .position(|project| project.id == *id)
        .map(|index| index + 1)
}
