//! Enumerations and fixed tables for TUI state management.

use ratatui::style::Color;

use crate::store::NavId;
use crate::tui::colors::{BLUE, GREEN, PURPLE};

/// Which panel currently receives key events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Sidebar,
    TaskList,
}

/// A sidebar navigation entry with an optional display count.
pub struct NavEntry {
    pub id: NavId,
    pub name: &'static str,
    pub count: Option<usize>,
}

/// A sidebar list entry with a color dot and display count.
pub struct ListEntry {
    pub id: NavId,
    pub name: &'static str,
    pub color: Color,
    pub count: usize,
}

/// Fixed navigation sections. Counts are display-only.
pub const NAV_ITEMS: [NavEntry; 4] = [
    NavEntry { id: NavId::Today, name: "Today", count: Some(4) },
    NavEntry { id: NavId::Upcoming, name: "Upcoming", count: Some(12) },
    NavEntry { id: NavId::Calendar, name: "Calendar", count: None },
    NavEntry { id: NavId::Notes, name: "Notes", count: None },
];

/// Fixed task lists. Counts are display-only.
pub const LIST_ITEMS: [ListEntry; 3] = [
    ListEntry { id: NavId::Personal, name: "Personal", color: PURPLE, count: 3 },
    ListEntry { id: NavId::Work, name: "Work", color: BLUE, count: 6 },
    ListEntry { id: NavId::Shopping, name: "Shopping", color: GREEN, count: 2 },
];

/// Total number of selectable sidebar rows (nav sections then lists).
pub const SIDEBAR_ROWS: usize = NAV_ITEMS.len() + LIST_ITEMS.len();

/// Map a sidebar cursor position to its navigation id.
pub fn sidebar_nav_id(index: usize) -> Option<NavId> {
    if index < NAV_ITEMS.len() {
        Some(NAV_ITEMS[index].id)
    } else {
        LIST_ITEMS.get(index - NAV_ITEMS.len()).map(|l| l.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_cursor_covers_nav_then_lists() {
        assert_eq!(sidebar_nav_id(0), Some(NavId::Today));
        assert_eq!(sidebar_nav_id(3), Some(NavId::Notes));
        assert_eq!(sidebar_nav_id(4), Some(NavId::Personal));
        assert_eq!(sidebar_nav_id(6), Some(NavId::Shopping));
        assert_eq!(sidebar_nav_id(SIDEBAR_ROWS), None);
    }
}
