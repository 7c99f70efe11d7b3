//! Countdown timer core: state machine and tick scheduling

mod countdown;
mod ticker;

pub use countdown::{Countdown, Phase, Tick};
pub use ticker::{tick_channel, TickHandle, TickReceiver, TickSender};

/// Formats whole seconds as `M:SS` (minutes unpadded, seconds zero-padded
/// to two digits).
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
