//! Main application logic for the terminal user interface.
//!
//! The `App` struct owns the store plus all ephemeral presentation state
//! (focus, cursors, the expand/collapse set, input fields) and drives the
//! event loop: draw, poll for a key, dispatch on focus, repeat. All state
//! transitions happen synchronously inside the key handlers; there are no
//! timers and no background work.

use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::store::TaskStore;
use crate::tui::{
    detail,
    enums::{sidebar_nav_id, Focus, SIDEBAR_ROWS},
    input::InputField,
    sidebar, task_list,
    task_list::ListRow,
};

/// Top-level TUI state: the domain store plus ephemeral view state.
///
/// The expand/collapse set and the cursors are presentation state owned
/// here, never by the store; collapsing a task or moving the cursor is not a
/// domain mutation.
pub struct App {
    store: TaskStore,
    focus: Focus,
    sidebar_cursor: usize,
    list_cursor: usize,
    expanded: HashSet<String>,
    notes: InputField,
    notes_for: Option<String>,
    editing_notes: bool,
    search: InputField,
    searching: bool,
}

impl App {
    /// Build the app over a store, with the first task pre-expanded to match
    /// the initial render of the original layout.
    pub fn new(store: TaskStore) -> Self {
        let mut expanded = HashSet::new();
        if let Some(first) = store.tasks().first() {
            expanded.insert(first.id.clone());
        }
        let mut app = App {
            store,
            focus: Focus::TaskList,
            sidebar_cursor: 0,
            list_cursor: 0,
            expanded,
            notes: InputField::new(),
            notes_for: None,
            editing_notes: false,
            search: InputField::new(),
            searching: false,
        };
        app.sync_notes();
        app
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    pub fn notes_text(&self) -> &str {
        &self.notes.value
    }

    fn rows(&self) -> Vec<ListRow> {
        task_list::build_rows(self.store.tasks(), &self.expanded)
    }

    /// Reseed the notes editor whenever the selection changes. Edits made to
    /// a previous selection are discarded; nothing is written back.
    fn sync_notes(&mut self) {
        let current = self.store.selected_id().map(str::to_string);
        if current != self.notes_for {
            self.notes = match self.store.selected() {
                Some(task) => InputField::with_value(task.notes.as_deref().unwrap_or("")),
                None => InputField::new(),
            };
            self.notes_for = current;
            self.editing_notes = false;
        }
    }

    /// Handle one key event. Returns true if the application should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        if self.editing_notes {
            self.handle_notes_key(code);
            return false;
        }
        if self.searching {
            self.handle_search_key(code);
            return false;
        }
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::TaskList,
                    Focus::TaskList => Focus::Sidebar,
                };
            }
            _ => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(code),
                Focus::TaskList => self.handle_list_key(code),
            },
        }
        false
    }

    fn handle_sidebar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.sidebar_cursor + 1 < SIDEBAR_ROWS {
                    self.sidebar_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(nav) = sidebar_nav_id(self.sidebar_cursor) {
                    self.store.set_active_nav(nav);
                }
            }
            KeyCode::Char('/') => self.searching = true,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let rows = self.rows();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.list_cursor + 1 < rows.len() {
                    self.list_cursor += 1;
                }
            }
            // Enter selects the task under the cursor; on a subtask row the
            // owning task is selected, matching row-click semantics.
            KeyCode::Enter => {
                match rows.get(self.list_cursor) {
                    Some(ListRow::Task(i)) | Some(ListRow::Subtask(i, _)) => {
                        let id = self.store.tasks()[*i].id.clone();
                        self.store.select_task(&id);
                        self.sync_notes();
                    }
                    None => {}
                }
            }
            // Space toggles completion without changing the selection.
            KeyCode::Char(' ') => {
                match rows.get(self.list_cursor) {
                    Some(ListRow::Task(i)) => {
                        let id = self.store.tasks()[*i].id.clone();
                        self.store.toggle_task(&id);
                    }
                    Some(ListRow::Subtask(i, s)) => {
                        let task = &self.store.tasks()[*i];
                        let (task_id, sub_id) = (task.id.clone(), task.subtasks[*s].id.clone());
                        self.store.toggle_subtask(&task_id, &sub_id);
                    }
                    None => {}
                }
                self.sync_notes();
            }
            KeyCode::Right => self.set_expanded(&rows, true),
            KeyCode::Left => self.set_expanded(&rows, false),
            KeyCode::Esc => {
                self.store.close_detail();
                self.sync_notes();
            }
            KeyCode::Char('n') => {
                if self.store.selected().is_some() {
                    self.editing_notes = true;
                }
            }
            _ => {}
        }
        // Collapsing can shrink the row list under the cursor.
        let len = self.rows().len();
        if len > 0 && self.list_cursor >= len {
            self.list_cursor = len - 1;
        }
    }

    /// Expand or collapse the task under the cursor. Tasks without subtasks
    /// have no expand control, so this is a no-op for them.
    fn set_expanded(&mut self, rows: &[ListRow], expand: bool) {
        let task = match rows.get(self.list_cursor) {
            Some(ListRow::Task(i)) | Some(ListRow::Subtask(i, _)) => &self.store.tasks()[*i],
            None => return,
        };
        if !task.has_subtasks() {
            return;
        }
        if expand {
            self.expanded.insert(task.id.clone());
        } else {
            self.expanded.remove(&task.id);
        }
    }

    fn handle_notes_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.editing_notes = false,
            KeyCode::Char(c) => self.notes.handle_char(c),
            KeyCode::Backspace => self.notes.handle_backspace(),
            KeyCode::Delete => self.notes.handle_delete(),
            KeyCode::Left => self.notes.move_cursor_left(),
            KeyCode::Right => self.notes.move_cursor_right(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.searching = false,
            KeyCode::Char(c) => self.search.handle_char(c),
            KeyCode::Backspace => self.search.handle_backspace(),
            _ => {}
        }
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && self.handle_key(key.code, key.modifiers) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the three-column layout. The detail column collapses entirely
    /// when nothing is selected.
    fn render(&mut self, f: &mut Frame) {
        let detail_width = if self.store.selected().is_some() { 42 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26),
                Constraint::Min(40),
                Constraint::Length(detail_width),
            ])
            .split(f.area());

        sidebar::render(
            f,
            chunks[0],
            self.store.active_nav(),
            self.sidebar_cursor,
            &self.search,
            self.focus == Focus::Sidebar || self.searching,
        );

        let rows = self.rows();
        task_list::render(
            f,
            chunks[1],
            &self.store,
            &rows,
            self.list_cursor,
            &self.expanded,
            self.focus == Focus::TaskList,
        );

        if let Some(task) = self.store.selected() {
            detail::render(f, chunks[2], task, &self.notes, self.editing_notes);
        }
    }

    /// Main event loop: draw, then handle input, until quit.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;
            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_tasks;

    fn app() -> App {
        App::new(TaskStore::new(seed_tasks()))
    }

    fn key(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn first_task_starts_expanded_and_selected() {
        let app = app();
        assert!(app.expanded().contains("1"));
        assert_eq!(app.store().selected_id(), Some("1"));
        assert_eq!(app.notes_text(), "Needs to go out to the team for review by Friday");
    }

    #[test]
    fn initial_rows_follow_the_default_expansion() {
        let app = app();
        let rows = app.rows();
        // Task 1 plus its three subtasks, then tasks 2..4 collapsed.
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[4], ListRow::Task(1));
    }

    #[test]
    fn space_toggles_without_changing_selection() {
        let mut app = app();
        // Move to task 2's row (after task 1's three subtasks).
        for _ in 0..4 {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Char(' '));
        assert!(app.store().get("2").unwrap().completed);
        assert_eq!(app.store().selected_id(), Some("1"));
    }

    #[test]
    fn enter_selects_the_task_under_the_cursor() {
        let mut app = app();
        key(&mut app, KeyCode::Esc);
        assert!(app.store().selected().is_none());
        for _ in 0..4 {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.store().selected_id(), Some("2"));
        assert_eq!(app.notes_text(), "");
    }

    #[test]
    fn enter_on_a_subtask_row_selects_the_owning_task() {
        let mut app = app();
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.store().selected_id(), Some("1"));
    }

    #[test]
    fn subtask_toggle_updates_the_open_detail_panel() {
        let mut app = app();
        key(&mut app, KeyCode::Enter); // select task 1
        key(&mut app, KeyCode::Down); // subtask 1-1
        key(&mut app, KeyCode::Char(' '));
        let selected = app.store().selected().unwrap();
        assert_eq!(selected.id, "1");
        assert!(!selected.subtasks[0].completed);
    }

    #[test]
    fn expand_collapse_follow_arrow_keys() {
        let mut app = app();
        key(&mut app, KeyCode::Left);
        assert!(!app.expanded().contains("1"));
        assert_eq!(app.rows().len(), 4);
        key(&mut app, KeyCode::Right);
        assert!(app.expanded().contains("1"));
    }

    #[test]
    fn task_without_subtasks_cannot_expand() {
        let mut app = app();
        for _ in 0..4 {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Right);
        assert!(!app.expanded().contains("2"));
    }

    #[test]
    fn collapsing_clamps_the_cursor() {
        let mut app = app();
        for _ in 0..6 {
            key(&mut app, KeyCode::Down);
        }
        assert_eq!(app.list_cursor, 6);
        // Move back onto a subtask of task 1 and collapse it.
        for _ in 0..5 {
            key(&mut app, KeyCode::Up);
        }
        key(&mut app, KeyCode::Left);
        assert!(app.list_cursor < app.rows().len());
    }

    #[test]
    fn esc_closes_the_detail_panel() {
        let mut app = app();
        key(&mut app, KeyCode::Esc);
        assert!(app.store().selected().is_none());
        // Notes editing is unreachable with the panel closed.
        key(&mut app, KeyCode::Char('n'));
        assert!(!app.editing_notes);
    }

    #[test]
    fn notes_edits_stay_local_to_the_view() {
        let mut app = app();
        key(&mut app, KeyCode::Char('n'));
        assert!(app.editing_notes);
        key(&mut app, KeyCode::Char('!'));
        key(&mut app, KeyCode::Esc);
        assert!(app.notes_text().ends_with('!'));
        // The store copy is untouched.
        assert_eq!(
            app.store().get("1").unwrap().notes.as_deref(),
            Some("Needs to go out to the team for review by Friday")
        );
    }

    #[test]
    fn reselecting_discards_local_note_edits() {
        let mut app = app();
        key(&mut app, KeyCode::Char('n'));
        key(&mut app, KeyCode::Char('!'));
        key(&mut app, KeyCode::Esc);
        for _ in 0..4 {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Enter); // select task 2
        key(&mut app, KeyCode::Up);
        key(&mut app, KeyCode::Up);
        key(&mut app, KeyCode::Up);
        key(&mut app, KeyCode::Up);
        key(&mut app, KeyCode::Enter); // reselect task 1
        assert_eq!(app.notes_text(), "Needs to go out to the team for review by Friday");
    }

    #[test]
    fn tab_cycles_focus_and_sidebar_sets_nav() {
        use crate::store::NavId;
        let mut app = app();
        key(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Sidebar);
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.store().active_nav(), NavId::Upcoming);
        // Nav changes never filter the list.
        assert_eq!(app.store().tasks().len(), 4);
    }

    #[test]
    fn search_input_is_decorative() {
        let mut app = app();
        let revision = app.store().revision();
        key(&mut app, KeyCode::Tab);
        key(&mut app, KeyCode::Char('/'));
        for c in "milk".chars() {
            key(&mut app, KeyCode::Char(c));
        }
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.search.value, "milk");
        assert_eq!(app.store().revision(), revision);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut plain = app();
        assert!(key(&mut plain, KeyCode::Char('q')));
        let mut interrupted = app();
        assert!(interrupted.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        // 'q' while editing notes is text, not quit.
        let mut editing = app();
        key(&mut editing, KeyCode::Char('n'));
        assert!(!key(&mut editing, KeyCode::Char('q')));
        assert!(editing.notes_text().ends_with('q'));
    }
}
