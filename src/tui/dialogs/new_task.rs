//! New task dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::tui::components::input_line;
use crate::tui::styles::Theme;

#[derive(Default)]
pub struct NewTaskDialog {
    text: Input,
}

impl NewTaskDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                let text = self.text.value().trim().to_string();
                if text.is_empty() {
                    // Empty submit adds nothing, same as cancelling
                    DialogResult::Cancel
                } else {
                    DialogResult::Submit(text)
                }
            }
            _ => {
                self.text.handle_event(&crossterm::event::Event::Key(key));
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 60, 7);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" New Task ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let mut field = Line::from(Span::styled(
            "Task: ",
            Style::default().fg(theme.accent).underlined(),
        ));
        let entry = input_line(&self.text, true, None, theme);
        field.spans.extend(entry.spans);
        frame.render_widget(Paragraph::new(field), chunks[0]);

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent).bold()),
            Span::styled(" add   ", Style::default().fg(theme.dimmed)),
            Span::styled("Esc", Style::default().fg(theme.accent).bold()),
            Span::styled(" cancel", Style::default().fg(theme.dimmed)),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut NewTaskDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = NewTaskDialog::new();
        type_text(&mut dialog, "half-typed");
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Esc)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_submit_returns_typed_text() {
        let mut dialog = NewTaskDialog::new();
        type_text(&mut dialog, "water the plants");
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(text) => assert_eq!(text, "water the plants"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut dialog = NewTaskDialog::new();
        type_text(&mut dialog, "  padded  ");
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(text) => assert_eq!(text, "padded"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_empty_submit_cancels() {
        let mut dialog = NewTaskDialog::new();
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_whitespace_submit_cancels() {
        let mut dialog = NewTaskDialog::new();
        type_text(&mut dialog, "   ");
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_backspace_edits() {
        let mut dialog = NewTaskDialog::new();
        type_text(&mut dialog, "ab");
        dialog.handle_key(key(KeyCode::Backspace));
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(text) => assert_eq!(text, "a"),
            _ => panic!("expected submit"),
        }
    }
}
