//! Composition root for one tracker session.
//!
//! # Responsibility
//! - Own exactly one `ProjectStore` plus its active and finished projections.
//! - Route parsed commands: form submit to `add_project`, drops to
//!   `Projection::accept_drop`.
//!
//! # Invariants
//! - Input is validated before the store is called.
//! - Unknown ids and out-of-range positions are ignored, like the store does.

use crate::command::{parse_command, Command, ProjectRef};
use crate::render;
use log::warn;
use project_tracker_core::{
    InputRules, ListKind, ProjectId, ProjectInput, ProjectStatus, ProjectStore, Projection,
};

/// Text produced for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

pub struct Session {
    store: ProjectStore,
    rules: InputRules,
    active: Projection,
    finished: Projection,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_rules(InputRules::default())
    }

    pub fn with_rules(rules: InputRules) -> Self {
        let mut store = ProjectStore::new();
        let active = Projection::attach(ListKind::Active, &mut store);
        let finished = Projection::attach(ListKind::Finished, &mut store);
        Self {
            store,
            rules,
            active,
            finished,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(err) => Reply::text(format!("error: {err}")),
        }
    }

    fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Add(input) => self.submit(&input),
            Command::Move { project, target } => {
                if let Some(id) = self.resolve(&project) {
                    self.drop_on(&id, target);
                }
                Reply::text(self.board())
            }
            Command::List => Reply::text(self.board()),
            Command::Export => match serde_json::to_string_pretty(&*self.store.snapshot()) {
                Ok(json) => Reply::text(json),
                Err(err) => Reply::text(format!("error: failed to export projects: {err}")),
            },
            Command::Help => Reply::text(render::help()),
            Command::Quit => Reply {
                output: String::new(),
                quit: true,
            },
            Command::Empty => Reply::default(),
        }
    }

    fn submit(&mut self, input: &ProjectInput) -> Reply {
        match input.validate(&self.rules) {
            Ok(valid) => {
                self.store
                    .add_project(valid.title, valid.description, valid.people);
                Reply::text(self.board())
            }
            Err(err) => {
                warn!(
                    "event=input_rejected module=cli status=error field={}",
                    err.field()
                );
                Reply::text(format!("invalid input: {err}"))
            }
        }
    }

    fn drop_on(&mut self, id: &ProjectId, target: ProjectStatus) {
        let list = match target {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        };
        list.accept_drop(&mut self.store, id);
    }

    fn resolve(&self, project: &ProjectRef) -> Option<ProjectId> {
        match project {
            ProjectRef::Id(id) => Some(*id),
            ProjectRef::Position(position) => self
                .store
                .snapshot()
                .get(position - 1)
                .map(|project| project.id),
        }
    }

    fn board(&self) -> String {
        let all = self.store.snapshot();
        render::render_board(&[&self.active, &self.finished], &all)
    }
}
