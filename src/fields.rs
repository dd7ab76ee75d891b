//! Enumerations and field types for task metadata.
//!
//! This module defines the structured types used to categorise tasks:
//! priority levels and the badge classification derived from the free-text
//! category label.

use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Short label shown next to the priority flag in the task list.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Med",
            Priority::Low => "Low",
        }
    }

    /// Longer label shown in the detail panel.
    pub fn detail_label(self) -> &'static str {
        match self {
            Priority::High => "High priority",
            Priority::Medium => "Medium priority",
            Priority::Low => "Low priority",
        }
    }
}

/// Badge classification derived from a task's free-text category label.
///
/// Categories are open-ended strings on the task itself; rendering maps them
/// onto this closed set so that unknown labels get the fallback style rather
/// than an ever-growing string map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryBadge {
    Personal,
    Work,
    Shopping,
    Other,
}

impl CategoryBadge {
    /// Classify a category label. Unrecognised labels fall through to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Personal" => CategoryBadge::Personal,
            "Work" => CategoryBadge::Work,
            "Shopping" => CategoryBadge::Shopping,
            _ => CategoryBadge::Other,
        }
    }
}
