//! Sidebar panel: profile, decorative search box, navigation and lists.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::NavId;
use crate::tui::enums::{LIST_ITEMS, NAV_ITEMS};
use crate::tui::input::InputField;

/// Render the sidebar. `active` drives the highlight; `cursor` is the
/// keyboard position when the sidebar has focus.
pub fn render(
    f: &mut Frame,
    area: Rect,
    active: NavId,
    cursor: usize,
    search: &InputField,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // profile
            Constraint::Length(1), // search
            Constraint::Length(1),
            Constraint::Length(NAV_ITEMS.len() as u16),
            Constraint::Length(1), // lists heading
            Constraint::Length(LIST_ITEMS.len() as u16),
            Constraint::Min(0), // bottom hints
        ])
        .split(inner);

    let profile = Paragraph::new(Line::from(vec![
        Span::styled(" EW ", Style::default().bg(Color::Magenta).fg(Color::Black)),
        Span::raw(" Eric Wu"),
    ]));
    f.render_widget(profile, chunks[0]);

    // Search is visual only; typed text goes nowhere.
    let placeholder = search.value.is_empty();
    let search_text = if placeholder { "Search" } else { search.value.as_str() };
    let search_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ⌕ ", Style::default().fg(Color::DarkGray)),
            Span::styled(search_text.to_string(), search_style),
        ])),
        chunks[1],
    );

    let mut nav_lines = Vec::new();
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let count = item.count.map(|c| format!(" {c}")).unwrap_or_default();
        nav_lines.push(entry_line(
            item.name,
            &count,
            None,
            active == item.id,
            focused && cursor == i,
        ));
    }
    f.render_widget(Paragraph::new(nav_lines), chunks[3]);

    f.render_widget(
        Paragraph::new(Span::styled("LISTS", Style::default().fg(Color::DarkGray))),
        chunks[4],
    );

    let mut list_lines = Vec::new();
    for (i, list) in LIST_ITEMS.iter().enumerate() {
        list_lines.push(entry_line(
            list.name,
            &format!(" {}", list.count),
            Some(list.color),
            active == list.id,
            focused && cursor == NAV_ITEMS.len() + i,
        ));
    }
    f.render_widget(Paragraph::new(list_lines), chunks[5]);

    // Inert controls, kept for parity with the footer actions.
    f.render_widget(
        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled("+ Add list", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled("# Tags", Style::default().fg(Color::DarkGray))),
        ]),
        chunks[6],
    );
}

fn entry_line(
    name: &str,
    count: &str,
    dot: Option<Color>,
    active: bool,
    at_cursor: bool,
) -> Line<'static> {
    let mut style = Style::default();
    if active {
        style = style.add_modifier(Modifier::BOLD).fg(Color::White);
    } else {
        style = style.fg(Color::Gray);
    }
    if at_cursor {
        style = style.bg(Color::Rgb(45, 45, 60));
    }
    let mut spans = vec![Span::styled(if active { "▌ " } else { "  " }, Style::default().fg(Color::Cyan))];
    if let Some(color) = dot {
        spans.push(Span::styled("● ", Style::default().fg(color)));
    }
    spans.push(Span::styled(name.to_string(), style));
    spans.push(Span::styled(count.to_string(), Style::default().fg(Color::DarkGray)));
    Line::from(spans)
}
