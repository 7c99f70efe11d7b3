//! Home view - task list with one timer panel per row
//!
//! Owns the task collection, the per-task timer panels (keyed by id so a
//! panel survives re-renders and cursor moves), and the armed tick sources.
//! Arming and disarming happen exactly on the transitions into and out of
//! the running phase, never on render.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::components::{HelpOverlay, PanelEvent, TimerPanel};
use super::dialogs::{ConfirmDialog, DialogResult, NewTaskDialog};
use super::styles::Theme;
use crate::task::{Task, TaskId, TaskList};
use crate::timer::{Countdown, Phase, Tick, TickHandle, TickSender};

pub struct HomeView {
    tasks: TaskList,
    timers: HashMap<TaskId, TimerPanel>,
    tickers: HashMap<TaskId, TickHandle>,
    tick_tx: TickSender,

    // UI state
    cursor: usize,

    // Dialogs
    show_help: bool,
    new_dialog: Option<NewTaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,
}

impl HomeView {
    pub fn new(tick_tx: TickSender) -> Self {
        Self {
            tasks: TaskList::new(),
            timers: HashMap::new(),
            tickers: HashMap::new(),
            tick_tx,
            cursor: 0,
            show_help: false,
            new_dialog: None,
            confirm_dialog: None,
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.new_dialog.is_some() || self.confirm_dialog.is_some()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn timer(&self, id: TaskId) -> Option<&Countdown> {
        self.timers.get(&id).map(|p| p.countdown())
    }

    /// Number of currently armed tick sources. Never exceeds the number of
    /// running timers.
    pub fn armed_tickers(&self) -> usize {
        self.tickers.len()
    }

    pub fn selected_task(&self) -> Option<TaskId> {
        self.tasks.iter().nth(self.cursor).map(|t| t.id)
    }

    /// Appends a task and mounts a fresh timer panel for it. Empty text is
    /// a silent no-op.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = self.tasks.add(text)?;
        self.timers.insert(id, TimerPanel::new());
        tracing::debug!("added task {}", id);
        Some(id)
    }

    /// Removes a task and tears down its timer: the panel is dropped and
    /// the tick handle (if armed) aborts its source on drop.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.tasks.remove(id) {
            self.timers.remove(&id);
            self.tickers.remove(&id);
            tracing::debug!("deleted task {}", id);
        }
        self.clamp_cursor();
    }

    /// Applies one tick for `id`. Returns whether the display changed.
    /// Ticks for deleted or no-longer-running timers are no-ops.
    pub fn apply_tick(&mut self, id: TaskId) -> bool {
        let Some(panel) = self.timers.get_mut(&id) else {
            self.tickers.remove(&id);
            return false;
        };
        match panel.apply_tick() {
            Tick::Advanced => true,
            Tick::Expired => {
                self.tickers.remove(&id);
                tracing::debug!("timer expired for task {}", id);
                true
            }
            Tick::Stale => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle dialog input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.new_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.new_dialog = None;
                }
                DialogResult::Submit(text) => {
                    self.new_dialog = None;
                    if self.add_task(&text).is_some() {
                        // Select the freshly appended task
                        self.cursor = self.tasks.len() - 1;
                    }
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                }
                DialogResult::Submit(()) => {
                    self.confirm_dialog = None;
                    if let Some(id) = self.selected_task() {
                        self.delete_task(id);
                    }
                }
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('n') => {
                self.new_dialog = Some(NewTaskDialog::new());
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task() {
                    let text = self
                        .tasks
                        .get(id)
                        .map(|t| t.text.clone())
                        .unwrap_or_default();
                    self.confirm_dialog = Some(ConfirmDialog::new(
                        "Delete Task",
                        &format!("Delete '{text}'? Its timer will be discarded."),
                    ));
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !self.tasks.is_empty() {
                    self.cursor = self.tasks.len() - 1;
                }
            }
            _ => {
                // Everything else drives the selected row's timer
                if let Some(id) = self.selected_task() {
                    self.forward_to_timer(id, key);
                }
            }
        }

        None
    }

    fn forward_to_timer(&mut self, id: TaskId, key: KeyEvent) {
        let Some(panel) = self.timers.get_mut(&id) else {
            return;
        };
        match panel.handle_key(key) {
            PanelEvent::Started | PanelEvent::Resumed => {
                // Insert replaces (and thereby aborts) any previous source,
                // keeping at most one armed tick per timer
                self.tickers
                    .insert(id, TickHandle::spawn(id, self.tick_tx.clone()));
                tracing::debug!("armed tick source for task {}", id);
            }
            PanelEvent::Paused => {
                self.tickers.remove(&id);
                tracing::debug!("paused timer for task {}", id);
            }
            PanelEvent::Edited | PanelEvent::Ignored => {}
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let items = self.tasks.len();
        if items == 0 {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub((-delta) as usize)
        } else {
            (self.cursor + delta as usize).min(items - 1)
        };
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.tasks.len() && !self.tasks.is_empty() {
            self.cursor = self.tasks.len() - 1;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Layout: main list + status bar at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.render_list(frame, chunks[0], theme);
        self.render_status_bar(frame, chunks[1], theme);

        // Render dialogs on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.new_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Taskdown ({}) ", self.tasks.len()))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.tasks.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'n' to create one").style(Style::default().fg(theme.hint)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let list_items: Vec<ListItem> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| self.render_row(task, idx == self.cursor, theme))
            .collect();

        let list = List::new(list_items);
        frame.render_widget(list, inner);
    }

    fn render_row(&self, task: &Task, is_selected: bool, theme: &Theme) -> ListItem<'static> {
        let panel = self.timers.get(&task.id);

        let (icon, icon_color) = match panel.map(|p| p.countdown().phase()) {
            Some(Phase::Running) => ("●", theme.running),
            Some(Phase::Paused) => ("◐", theme.paused),
            Some(Phase::Expired) => ("✔", theme.done),
            Some(Phase::Idle) | None => ("○", theme.idle),
        };

        let title_style = if is_selected {
            Style::default().fg(theme.text).bold()
        } else {
            Style::default().fg(theme.text)
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(icon_color)),
            Span::styled(task.text.clone(), title_style),
        ])];

        if let Some(panel) = panel {
            let mut timer_line = panel.line(is_selected, theme);
            timer_line.spans.insert(0, Span::raw("  "));
            lines.push(timer_line);
        }
        lines.push(Line::from(""));

        let item = ListItem::new(lines);
        if is_selected {
            item.style(Style::default().bg(theme.selection))
        } else {
            item
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" j/k", key_style),
            Span::styled(" Navigate ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" n", key_style),
            Span::styled(" New ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Delete ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Enter", key_style),
            Span::styled(" Start ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" Space", key_style),
            Span::styled(" Pause ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
