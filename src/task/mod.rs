//! Task records and the ordered task list

mod list;
mod model;

pub use list::TaskList;
pub use model::{Task, TaskId};
