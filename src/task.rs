//! Task data structures.
//!
//! This module defines the core `Task` struct that represents a single
//! schedulable item with priority, category, notes and an ordered checklist
//! of subtasks.

use serde::{Deserialize, Serialize};

use crate::fields::Priority;

/// A checklist item owned by exactly one task.
///
/// Subtask ids are unique within their parent task. Completing a subtask is
/// independent of its siblings and of the parent's own completed flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// A schedulable item with priority, category and optional subtasks.
///
/// Ids are stable and unique across the collection for the lifetime of the
/// session. `date` is a pre-formatted display string; `time` is an optional
/// scheduled window such as "09:00 - 11:00".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub date: String,
    pub priority: Priority,
    pub category: String,
    pub completed: bool,
    #[serde(default)]
    pub subtasks: Vec<SubTask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Task {
    /// Completed and total subtask counts, for the `done/total` counter.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }

    /// Whether this task has any subtasks to expand.
    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }
}
