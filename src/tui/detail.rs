//! Detail panel for the selected task.
//!
//! The panel has two states: hidden when nothing is selected (the app shell
//! collapses the column entirely), and visible for exactly one task. The
//! notes editor is seeded from the task but never written back; add,
//! attachment and delete controls are inert.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::task::Task;
use crate::tui::colors::priority_color;
use crate::tui::input::InputField;

/// Render the detail panel for the selected task.
pub fn render(f: &mut Frame, area: Rect, task: &Task, notes: &InputField, editing_notes: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Task detail ")
        .border_style(if editing_notes {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(4), // date / time / priority
            Constraint::Length(4), // notes
            Constraint::Min(0),    // subtasks
            Constraint::Length(1), // footer
        ])
        .split(inner);

    let title_style = if task.completed {
        Style::default()
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT)
            .fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Span::styled(task.title.clone(), title_style)).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut meta = vec![Line::from(vec![
        Span::styled("Date      ", Style::default().fg(Color::DarkGray)),
        Span::raw(task.date.clone()),
    ])];
    if let Some(time) = &task.time {
        meta.push(Line::from(vec![
            Span::styled("Time      ", Style::default().fg(Color::DarkGray)),
            Span::raw(time.clone()),
        ]));
    }
    meta.push(Line::from(vec![
        Span::styled("Priority  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("⚑ {}", task.priority.detail_label()),
            Style::default().fg(priority_color(task.priority)),
        ),
    ]));
    f.render_widget(Paragraph::new(meta), chunks[1]);

    let notes_label = if editing_notes { "NOTES (editing)" } else { "NOTES" };
    let notes_text = if notes.value.is_empty() && !editing_notes {
        Span::styled("Add a note...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(notes.value.clone())
    };
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(notes_label, Style::default().fg(Color::DarkGray))),
            Line::from(notes_text),
        ])
        .wrap(Wrap { trim: false }),
        chunks[2],
    );

    let mut sub_lines = vec![Line::from(Span::styled(
        "SUBTASKS",
        Style::default().fg(Color::DarkGray),
    ))];
    for sub in &task.subtasks {
        let style = if sub.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        sub_lines.push(Line::from(vec![
            Span::raw(if sub.completed { "[x] " } else { "[ ] " }),
            Span::styled(sub.title.clone(), style),
        ]));
    }
    sub_lines.push(Line::from(Span::styled(
        "+ Add subtask",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(Paragraph::new(sub_lines), chunks[3]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "⎘ Attach   ✕ Delete   Esc close",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[4],
    );
}
