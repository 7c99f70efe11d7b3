//! Shared TUI components

mod help;
mod text_input;
mod timer_panel;

pub use help::HelpOverlay;
pub use text_input::input_line;
pub use timer_panel::{PanelEvent, TimerPanel};
