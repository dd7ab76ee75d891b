//! Single-owner state store for the UI.
//!
//! `TaskStore` is the one writer for all domain state: the canonical task
//! collection, the selected task mirror, and the active navigation id. Render
//! code reads slices of this state; key handlers dispatch intents into it.
//! Every mutation rebuilds the affected collection rather than editing shared
//! structure in place, and bumps a revision counter so consumers can detect
//! change cheaply.
//!
//! Ephemeral presentation state (expand/collapse, cursor position, input
//! fields) deliberately lives outside this store, in the TUI layer.

use std::fmt;

use crate::seed::seed_tasks;
use crate::task::Task;

/// Sidebar section and list identifiers.
///
/// Governs sidebar highlight only; no filtering is applied to the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavId {
    Today,
    Upcoming,
    Calendar,
    Notes,
    Personal,
    Work,
    Shopping,
}

/// Lookup failure for an id-based store operation.
///
/// Ids only ever come from the rendered collection itself, so in practice
/// these indicate a programming error; the infallible entry points treat them
/// as no-ops and log at debug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    TaskNotFound(String),
    SubtaskNotFound { task_id: String, subtask_id: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::TaskNotFound(id) => write!(f, "no task with id {id:?}"),
            StoreError::SubtaskNotFound { task_id, subtask_id } => {
                write!(f, "no subtask {subtask_id:?} under task {task_id:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Canonical session state: tasks, selection, active navigation.
pub struct TaskStore {
    tasks: Vec<Task>,
    selected: Option<Task>,
    active_nav: NavId,
    revision: u64,
}

impl TaskStore {
    /// Build a store over a validated task collection, with the first task
    /// pre-selected when one exists.
    pub fn new(tasks: Vec<Task>) -> Self {
        let selected = tasks.first().cloned();
        TaskStore {
            tasks,
            selected,
            active_nav: NavId::Today,
            revision: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task shown in the detail panel, if any.
    pub fn selected(&self) -> Option<&Task> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|t| t.id.as_str())
    }

    pub fn active_nav(&self) -> NavId {
        self.active_nav
    }

    /// Monotonic change counter; bumped on every applied mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Flip `completed` on the matching task. Unknown ids are a logged no-op.
    pub fn toggle_task(&mut self, task_id: &str) {
        if let Err(e) = self.try_toggle_task(task_id) {
            tracing::debug!("toggle_task ignored: {e}");
        }
    }

    /// Fallible variant of [`Self::toggle_task`].
    pub fn try_toggle_task(&mut self, task_id: &str) -> Result<(), StoreError> {
        if self.get(task_id).is_none() {
            return Err(StoreError::TaskNotFound(task_id.to_string()));
        }
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == task_id {
                    let mut updated = task.clone();
                    updated.completed = !updated.completed;
                    updated
                } else {
                    task.clone()
                }
            })
            .collect();
        self.mirror_selection(task_id);
        self.revision += 1;
        Ok(())
    }

    /// Flip `completed` on one subtask. Siblings and the parent's own flag
    /// are never touched; there is no auto-rollup. Unknown ids are a logged
    /// no-op.
    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) {
        if let Err(e) = self.try_toggle_subtask(task_id, subtask_id) {
            tracing::debug!("toggle_subtask ignored: {e}");
        }
    }

    /// Fallible variant of [`Self::toggle_subtask`].
    pub fn try_toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> Result<(), StoreError> {
        let task = self
            .get(task_id)
            .ok_or_else(|| StoreError::TaskNotFound(task_id.to_string()))?;
        if !task.subtasks.iter().any(|s| s.id == subtask_id) {
            return Err(StoreError::SubtaskNotFound {
                task_id: task_id.to_string(),
                subtask_id: subtask_id.to_string(),
            });
        }
        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id != task_id {
                    return task.clone();
                }
                let mut updated = task.clone();
                updated.subtasks = task
                    .subtasks
                    .iter()
                    .map(|sub| {
                        let mut sub = sub.clone();
                        if sub.id == subtask_id {
                            sub.completed = !sub.completed;
                        }
                        sub
                    })
                    .collect();
                updated
            })
            .collect();
        self.mirror_selection(task_id);
        self.revision += 1;
        Ok(())
    }

    /// Open the detail panel on the matching task. Unknown ids are a logged
    /// no-op.
    pub fn select_task(&mut self, task_id: &str) {
        match self.get(task_id) {
            Some(task) => {
                self.selected = Some(task.clone());
                self.revision += 1;
            }
            None => tracing::debug!("select_task ignored: no task with id {task_id:?}"),
        }
    }

    /// Close the detail panel.
    pub fn close_detail(&mut self) {
        if self.selected.take().is_some() {
            self.revision += 1;
        }
    }

    /// Highlight a sidebar entry. Purely cosmetic.
    pub fn set_active_nav(&mut self, nav: NavId) {
        if self.active_nav != nav {
            self.active_nav = nav;
            self.revision += 1;
        }
    }

    /// If the mutated task is the selected one, refresh the selection mirror
    /// from the canonical entry so the detail panel reflects the change.
    fn mirror_selection(&mut self, task_id: &str) {
        if self.selected_id() == Some(task_id) {
            self.selected = self.get(task_id).cloned();
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new(seed_tasks())
    }
}
