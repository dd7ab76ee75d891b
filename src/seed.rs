//! Seed data for the session.
//!
//! Tasks are seeded exactly once at startup, either from the built-in
//! fixture below or from a JSON file passed on the command line. A seed file
//! that fails to parse or validate is a fatal startup error; the UI never
//! renders partial state.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::fields::Priority;
use crate::task::{SubTask, Task};

/// The built-in four-task fixture used when no seed file is given.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".into(),
            title: "Finish project proposal".into(),
            time: Some("09:00 - 11:00".into()),
            date: "Jan 7, 2025".into(),
            priority: Priority::High,
            category: "Work".into(),
            completed: false,
            subtasks: vec![
                SubTask { id: "1-1".into(), title: "Gather market data".into(), completed: true },
                SubTask { id: "1-2".into(), title: "Write executive summary".into(), completed: false },
                SubTask { id: "1-3".into(), title: "Prepare slide deck".into(), completed: false },
            ],
            notes: Some("Needs to go out to the team for review by Friday".into()),
        },
        Task {
            id: "2".into(),
            title: "Weekly team meeting".into(),
            time: Some("14:00 - 15:00".into()),
            date: "Jan 7, 2025".into(),
            priority: Priority::Medium,
            category: "Work".into(),
            completed: false,
            subtasks: Vec::new(),
            notes: None,
        },
        Task {
            id: "3".into(),
            title: "Gym session".into(),
            time: Some("18:00 - 19:30".into()),
            date: "Jan 7, 2025".into(),
            priority: Priority::Low,
            category: "Personal".into(),
            completed: false,
            subtasks: vec![
                SubTask { id: "3-1".into(), title: "10 minute warm-up".into(), completed: false },
                SubTask { id: "3-2".into(), title: "Strength training".into(), completed: false },
                SubTask { id: "3-3".into(), title: "Cardio".into(), completed: false },
            ],
            notes: None,
        },
        Task {
            id: "4".into(),
            title: "Buy groceries".into(),
            time: None,
            date: "Jan 7, 2025".into(),
            priority: Priority::Low,
            category: "Shopping".into(),
            completed: true,
            subtasks: vec![
                SubTask { id: "4-1".into(), title: "Milk".into(), completed: true },
                SubTask { id: "4-2".into(), title: "Bread".into(), completed: true },
                SubTask { id: "4-3".into(), title: "Fruit".into(), completed: true },
            ],
            notes: None,
        },
    ]
}

/// Load and validate a seed file: a JSON array of tasks matching the shapes
/// in [`crate::task`].
pub fn load_seed(path: &Path) -> Result<Vec<Task>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let tasks: Vec<Task> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    validate(&tasks)?;
    Ok(tasks)
}

/// Reject seed data with duplicate task ids or duplicate subtask ids within
/// a task.
pub fn validate(tasks: &[Task]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            bail!("duplicate task id {:?} in seed data", task.id);
        }
        let mut sub_seen = std::collections::HashSet::new();
        for sub in &task.subtasks {
            if !sub_seen.insert(sub.id.as_str()) {
                bail!("duplicate subtask id {:?} under task {:?}", sub.id, task.id);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_seed_validates() {
        let tasks = seed_tasks();
        assert_eq!(tasks.len(), 4);
        validate(&tasks).unwrap();
    }

    #[test]
    fn builtin_seed_matches_expected_shape() {
        let tasks = seed_tasks();
        assert!(tasks.iter().find(|t| t.id == "2").unwrap().subtasks.is_empty());
        let groceries = tasks.iter().find(|t| t.id == "4").unwrap();
        assert!(groceries.completed);
        assert_eq!(groceries.subtask_progress(), (3, 3));
    }

    #[test]
    fn duplicate_task_id_is_rejected() {
        let mut tasks = seed_tasks();
        tasks[1].id = "1".into();
        assert!(validate(&tasks).is_err());
    }

    #[test]
    fn duplicate_subtask_id_is_rejected() {
        let mut tasks = seed_tasks();
        tasks[0].subtasks[2].id = "1-1".into();
        let err = validate(&tasks).unwrap_err();
        assert!(err.to_string().contains("1-1"));
    }

    #[test]
    fn load_seed_roundtrips_valid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&seed_tasks()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let tasks = load_seed(file.path()).unwrap();
        assert_eq!(tasks, seed_tasks());
    }

    #[test]
    fn load_seed_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_seed(file.path()).is_err());
    }

    #[test]
    fn load_seed_rejects_missing_file() {
        assert!(load_seed(Path::new("/nonexistent/seed.json")).is_err());
    }
}
