// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod list;

pub use display::TaskDisplay;
pub use item::{Task, TaskKind};
pub use list::TaskList;
