//! Color lookups for the terminal user interface.

use ratatui::style::Color;

use crate::fields::{CategoryBadge, Priority};

/// Badge background for personal lists.
pub const PURPLE: Color = Color::Rgb(168, 85, 247);
/// Badge background for work lists.
pub const BLUE: Color = Color::Rgb(59, 130, 246);
/// Badge background for shopping lists.
pub const GREEN: Color = Color::Rgb(34, 197, 94);
/// Fallback badge background for unrecognised categories.
pub const GRAY: Color = Color::Rgb(113, 113, 122);

/// Flag color for a priority level.
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Badge color for a category classification. `Other` is the explicit
/// fallback arm, so unknown category strings always render.
pub fn badge_color(badge: CategoryBadge) -> Color {
    match badge {
        CategoryBadge::Personal => PURPLE,
        CategoryBadge::Work => BLUE,
        CategoryBadge::Shopping => GREEN,
        CategoryBadge::Other => GRAY,
    }
}
