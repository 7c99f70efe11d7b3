//! Shared text input rendering

use ratatui::prelude::*;
use tui_input::Input;

use crate::tui::styles::Theme;

/// Builds the display line for a text input.
///
/// When focused, an inverse-video cursor is drawn over the current
/// character position. When not focused and empty, the placeholder (if any)
/// is shown dimmed. Returns an owned line so callers can embed it in list
/// rows as well as render it directly.
pub fn input_line(
    input: &Input,
    is_focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) -> Line<'static> {
    let value_style = if is_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let value = input.value();
    let mut spans: Vec<Span<'static>> = Vec::new();

    if value.is_empty() && !is_focused {
        if let Some(placeholder_text) = placeholder {
            spans.push(Span::styled(
                placeholder_text.to_string(),
                Style::default().fg(theme.dimmed),
            ));
        }
    } else if is_focused {
        let cursor_pos = input.visual_cursor();
        let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

        // Split value into: before cursor, char at cursor, after cursor
        let before: String = value.chars().take(cursor_pos).collect();
        let cursor_char: String = value
            .chars()
            .nth(cursor_pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = value.chars().skip(cursor_pos + 1).collect();

        if !before.is_empty() {
            spans.push(Span::styled(before, value_style));
        }
        spans.push(Span::styled(cursor_char, cursor_style));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_unfocused_empty_shows_placeholder() {
        let input = Input::default();
        let theme = Theme::default();
        let line = input_line(&input, false, Some("e.g. 5"), &theme);
        assert_eq!(line_text(&line), "e.g. 5");
    }

    #[test]
    fn test_focused_empty_shows_cursor_block() {
        let input = Input::default();
        let theme = Theme::default();
        let line = input_line(&input, true, Some("e.g. 5"), &theme);
        assert_eq!(line_text(&line), " ");
    }

    #[test]
    fn test_focused_value_keeps_all_characters() {
        let input = Input::new("120".to_string());
        let theme = Theme::default();
        let line = input_line(&input, true, None, &theme);
        // Cursor sits past the last char, rendered as a trailing block
        assert_eq!(line_text(&line), "120 ");
    }

    #[test]
    fn test_unfocused_value_rendered_plain() {
        let input = Input::new("hello".to_string());
        let theme = Theme::default();
        let line = input_line(&input, false, None, &theme);
        assert_eq!(line_text(&line), "hello");
        assert_eq!(line.spans.len(), 1);
    }
}
