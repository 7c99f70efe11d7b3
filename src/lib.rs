//! Taskdown library - core functionality for the terminal task timer

pub mod cli;
pub mod task;
pub mod timer;
pub mod tui;
