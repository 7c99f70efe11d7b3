//! Per-task timer panel: minutes entry plus countdown display

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::text_input::input_line;
use crate::timer::{format_time, Countdown, Phase, Tick};
use crate::tui::styles::Theme;

/// Longest accepted minutes entry (three digits, 999 minutes).
const MAX_MINUTES_DIGITS: usize = 3;

/// What a key press did to the panel. The owning view watches for the
/// transition variants to arm and disarm the tick source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Ignored,
    Edited,
    Started,
    Paused,
    Resumed,
}

/// One timer per task row. Holds the countdown state machine and the
/// pre-start minutes entry buffer.
#[derive(Debug, Default)]
pub struct TimerPanel {
    countdown: Countdown,
    minutes_input: Input,
}

impl TimerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Applies one tick from the armed source.
    pub fn apply_tick(&mut self) -> Tick {
        self.countdown.tick()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        match self.countdown.phase() {
            Phase::Idle => self.handle_idle_key(key),
            Phase::Running | Phase::Paused => match key.code {
                KeyCode::Char(' ') => {
                    if self.countdown.toggle() {
                        if self.countdown.is_running() {
                            PanelEvent::Resumed
                        } else {
                            PanelEvent::Paused
                        }
                    } else {
                        PanelEvent::Ignored
                    }
                }
                _ => PanelEvent::Ignored,
            },
            // Terminal: the row only shows the completion message
            Phase::Expired => PanelEvent::Ignored,
        }
    }

    fn handle_idle_key(&mut self, key: KeyEvent) -> PanelEvent {
        match key.code {
            KeyCode::Enter => {
                // Non-numeric entry coerces to 0, which start() rejects
                let minutes = self.minutes_input.value().parse::<u32>().unwrap_or(0);
                self.countdown.set_minutes(minutes);
                if self.countdown.start() {
                    PanelEvent::Started
                } else {
                    PanelEvent::Ignored
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.minutes_input.value().len() < MAX_MINUTES_DIGITS {
                    self.minutes_input
                        .handle_event(&crossterm::event::Event::Key(key));
                    PanelEvent::Edited
                } else {
                    PanelEvent::Ignored
                }
            }
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Left | KeyCode::Right => {
                self.minutes_input
                    .handle_event(&crossterm::event::Event::Key(key));
                PanelEvent::Edited
            }
            _ => PanelEvent::Ignored,
        }
    }

    /// Renders the timer line for a task row, following the display policy:
    /// minutes entry before start, `M:SS` countdown while time remains,
    /// completion message with the active running time once expired.
    pub fn line(&self, is_selected: bool, theme: &Theme) -> Line<'static> {
        match self.countdown.phase() {
            Phase::Idle => {
                let mut line = Line::from(Span::styled(
                    "minutes: ",
                    Style::default().fg(theme.dimmed),
                ));
                let entry = input_line(&self.minutes_input, is_selected, Some("e.g. 5"), theme);
                line.spans.extend(entry.spans);
                if is_selected {
                    line.spans.push(Span::styled(
                        "  Enter start",
                        Style::default().fg(theme.hint),
                    ));
                }
                line
            }
            Phase::Running => {
                let mut line = Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(theme.running)),
                    Span::styled(
                        format_time(self.countdown.remaining_seconds()),
                        Style::default().fg(theme.text).bold(),
                    ),
                    Span::styled(" remaining", Style::default().fg(theme.dimmed)),
                ]);
                if is_selected {
                    line.spans.push(Span::styled(
                        "  Space pause",
                        Style::default().fg(theme.hint),
                    ));
                }
                line
            }
            Phase::Paused => {
                let mut line = Line::from(vec![
                    Span::styled("⏸ ", Style::default().fg(theme.paused)),
                    Span::styled(
                        format_time(self.countdown.remaining_seconds()),
                        Style::default().fg(theme.text).bold(),
                    ),
                    Span::styled(" paused", Style::default().fg(theme.paused)),
                ]);
                if is_selected {
                    line.spans.push(Span::styled(
                        "  Space resume",
                        Style::default().fg(theme.hint),
                    ));
                }
                line
            }
            Phase::Expired => Line::from(vec![
                Span::styled("✔ done", Style::default().fg(theme.done).bold()),
                Span::styled(", ran for ", Style::default().fg(theme.dimmed)),
                Span::styled(
                    format_time(self.countdown.active_elapsed_seconds()),
                    Style::default().fg(theme.done),
                ),
            ]),
        }
    }
}
