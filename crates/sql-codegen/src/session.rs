//! Recompiles on every graph change and publishes the newest SQL.
//!
//! The session is single-threaded and synchronous: each event is handled to
//! completion before the next one, so the most recent event always wins. A
//! snapshot that fails to build leaves the last published SQL in place and
//! is reported as a [`Notice`] instead of an error.

use crate::compiler::compile;
use block_graph::{BlockGraph, GraphError, GraphSpec};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GraphEventKind {
    BlockCreated,
    BlockChanged,
    BlockMoved,
    BlockDeleted,
    /// Scrolling, zooming, selection. Nothing in the program changed.
    Viewport,
}

impl GraphEventKind {
    pub fn alters_graph(&self) -> bool {
        !matches!(self, GraphEventKind::Viewport)
    }
}

/// A change notification with the workspace as it looks afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEvent {
    pub kind: GraphEventKind,
    pub snapshot: GraphSpec,
}

impl GraphEvent {
    pub fn new(kind: GraphEventKind, snapshot: GraphSpec) -> Self {
        Self { kind, snapshot }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlSnapshot {
    pub revision: u64,
    pub sql: String,
    pub compiled_at: DateTime<Utc>,
}

/// Non-fatal report of a snapshot that could not be compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub error: GraphError,
    /// Revision still on display, if anything was ever published.
    pub retained: Option<u64>,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.retained {
            Some(rev) => write!(f, "{} (keeping revision {})", self.error, rev),
            None => write!(f, "{}", self.error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Published(SqlSnapshot),
    /// Compiled to the same text as the current revision.
    Unchanged,
    Ignored,
    Retained(Notice),
}

type Subscriber = Box<dyn FnMut(&SqlSnapshot)>;

#[derive(Default)]
pub struct CompileSession {
    current: Option<SqlSnapshot>,
    next_revision: u64,
    subscribers: Vec<Subscriber>,
}

impl CompileSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked with every newly published snapshot.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&SqlSnapshot) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    pub fn current(&self) -> Option<&SqlSnapshot> {
        self.current.as_ref()
    }

    pub fn handle(&mut self, event: &GraphEvent) -> Outcome {
        if !event.kind.alters_graph() {
            return Outcome::Ignored;
        }

        debug!(
            "Handling {:?} with {} block(s)",
            event.kind,
            event.snapshot.block_count()
        );

        match BlockGraph::build(&event.snapshot) {
            Ok(graph) => self.publish(compile(&graph)),
            Err(error) => self.retain(error),
        }
    }

    /// Same as [`handle`](Self::handle) for a serialized snapshot.
    pub fn handle_json(&mut self, kind: GraphEventKind, source: &str) -> Outcome {
        match GraphSpec::from_json(source) {
            Ok(snapshot) => self.handle(&GraphEvent::new(kind, snapshot)),
            Err(error) => self.retain(error),
        }
    }

    fn publish(&mut self, sql: String) -> Outcome {
        if self.current.as_ref().is_some_and(|c| c.sql == sql) {
            return Outcome::Unchanged;
        }

        self.next_revision += 1;
        let snapshot = SqlSnapshot {
            revision: self.next_revision,
            sql,
            compiled_at: Utc::now(),
        };
        info!("Published SQL revision {}", snapshot.revision);

        for subscriber in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
        self.current = Some(snapshot.clone());

        Outcome::Published(snapshot)
    }

    fn retain(&self, error: GraphError) -> Outcome {
        let retained = self.current.as_ref().map(|c| c.revision);
        warn!("Block generation error, keeping previous SQL: {}", error);
        Outcome::Retained(Notice { error, retained })
    }
}
