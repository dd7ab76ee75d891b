//! Task list panel: the flattened row model and its rendering.

use std::collections::HashSet;

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::fields::CategoryBadge;
use crate::store::TaskStore;
use crate::task::Task;
use crate::tui::colors::{badge_color, priority_color};

/// One cursor position in the list: a task row, or a subtask row of an
/// expanded task. Indices point into the store's task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    Task(usize),
    Subtask(usize, usize),
}

/// Flatten the collection into cursor rows. Subtask rows appear only for
/// tasks in the expanded set; expansion is presentation state and never
/// filters the tasks themselves.
pub fn build_rows(tasks: &[Task], expanded: &HashSet<String>) -> Vec<ListRow> {
    let mut rows = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        rows.push(ListRow::Task(i));
        if expanded.contains(&task.id) {
            for s in 0..task.subtasks.len() {
                rows.push(ListRow::Subtask(i, s));
            }
        }
    }
    rows
}

/// Render the middle panel: header with today's date, then the task rows.
pub fn render(
    f: &mut Frame,
    area: Rect,
    store: &TaskStore,
    rows: &[ListRow],
    cursor: usize,
    expanded: &HashSet<String>,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let date_line = Local::now().format("%A, %B %-d, %Y").to_string();
    let header = Paragraph::new(vec![
        Line::from(Span::styled("Today", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(date_line, Style::default().fg(Color::DarkGray))),
    ]);
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(render_row(store, *row, expanded)))
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .highlight_style(Style::default().bg(Color::Rgb(45, 45, 60)));

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(cursor.min(rows.len() - 1)));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_row(store: &TaskStore, row: ListRow, expanded: &HashSet<String>) -> Line<'static> {
    match row {
        ListRow::Task(i) => {
            let task = &store.tasks()[i];
            task_line(task, store.selected_id() == Some(task.id.as_str()), expanded)
        }
        ListRow::Subtask(i, s) => {
            let sub = &store.tasks()[i].subtasks[s];
            let style = if sub.completed {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw("      "),
                Span::raw(if sub.completed { "[x] " } else { "[ ] " }),
                Span::styled(sub.title.clone(), style),
            ])
        }
    }
}

fn task_line(task: &Task, selected: bool, expanded: &HashSet<String>) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        if selected { "▌ " } else { "  " },
        Style::default().fg(Color::Cyan),
    ));

    // Tasks without subtasks get no chevron at all.
    let chevron = if !task.has_subtasks() {
        "  "
    } else if expanded.contains(&task.id) {
        "▾ "
    } else {
        "▸ "
    };
    spans.push(Span::styled(chevron, Style::default().fg(Color::DarkGray)));

    spans.push(Span::raw(if task.completed { "[x] " } else { "[ ] " }));

    let title_style = if task.completed {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled(task.title.clone(), title_style));

    if let Some(time) = &task.time {
        spans.push(Span::styled(format!("  {time}"), Style::default().fg(Color::DarkGray)));
    }

    let badge = CategoryBadge::from_label(&task.category);
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!(" {} ", task.category),
        Style::default().fg(Color::Black).bg(badge_color(badge)),
    ));

    spans.push(Span::styled(
        format!("  ⚑ {}", task.priority.label()),
        Style::default().fg(priority_color(task.priority)),
    ));

    // Counter only when there are subtasks to count.
    if task.has_subtasks() {
        let (done, total) = task.subtask_progress();
        spans.push(Span::styled(
            format!("  {done}/{total}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_tasks;

    #[test]
    fn rows_include_subtasks_only_when_expanded() {
        let tasks = seed_tasks();
        let mut expanded = HashSet::new();
        expanded.insert("1".to_string());
        let rows = build_rows(&tasks, &expanded);
        assert_eq!(
            rows,
            vec![
                ListRow::Task(0),
                ListRow::Subtask(0, 0),
                ListRow::Subtask(0, 1),
                ListRow::Subtask(0, 2),
                ListRow::Task(1),
                ListRow::Task(2),
                ListRow::Task(3),
            ]
        );
    }

    #[test]
    fn collapsed_collection_is_task_rows_only() {
        let tasks = seed_tasks();
        let rows = build_rows(&tasks, &HashSet::new());
        assert_eq!(rows.len(), tasks.len());
        assert!(rows.iter().all(|r| matches!(r, ListRow::Task(_))));
    }

    #[test]
    fn expanding_a_task_without_subtasks_adds_nothing() {
        let tasks = seed_tasks();
        let mut expanded = HashSet::new();
        expanded.insert("2".to_string());
        let rows = build_rows(&tasks, &expanded);
        assert_eq!(rows.len(), tasks.len());
    }

    #[test]
    fn task_without_subtasks_renders_no_chevron_or_counter() {
        let tasks = seed_tasks();
        let meeting = tasks.iter().find(|t| t.id == "2").unwrap();
        let line = task_line(meeting, false, &HashSet::new());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains('▸'));
        assert!(!text.contains('▾'));
        assert!(!text.contains('/'));
    }

    #[test]
    fn counter_reflects_subtask_progress() {
        let mut tasks = seed_tasks();
        tasks[3].subtasks[0].completed = false;
        let line = task_line(&tasks[3], false, &HashSet::new());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("2/3"));
    }
}
