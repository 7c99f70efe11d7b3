//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

use super::home::HomeView;
use super::styles::Theme;
use crate::timer::{tick_channel, TickReceiver};

pub struct App {
    home: HomeView,
    theme: Theme,
    should_quit: bool,
    tick_rx: TickReceiver,
}

impl App {
    pub fn new() -> Self {
        let (tick_tx, tick_rx) = tick_channel();
        Self {
            home: HomeView::new(tick_tx),
            theme: Theme::default(),
            should_quit: false,
            tick_rx,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        // Initial render
        terminal.clear()?;
        terminal.draw(|f| self.home.render(f, f.area(), &self.theme))?;

        loop {
            // Poll with short timeout for responsive input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);

                    // Draw immediately after input for responsiveness
                    terminal.draw(|f| self.home.render(f, f.area(), &self.theme))?;

                    if self.should_quit {
                        break;
                    }
                    continue;
                }
            }

            // Apply ticks delivered since the last poll (non-blocking)
            let mut redraw = false;
            while let Ok(id) = self.tick_rx.try_recv() {
                if self.home.apply_tick(id) {
                    redraw = true;
                }
            }

            // Single draw after all ticks to avoid flicker
            if redraw {
                terminal.draw(|f| self.home.render(f, f.area(), &self.theme))?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global keybinding; 'q' stays with the home view so dialogs can
        // consume it as text
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.home.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}
