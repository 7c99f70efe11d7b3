//! TUI dialog components

mod confirm;
mod new_task;

pub use confirm::ConfirmDialog;
pub use new_task::NewTaskDialog;

use ratatui::prelude::*;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// Centers a fixed-size dialog within `area`, clamping to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
