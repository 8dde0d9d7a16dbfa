// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod help;
pub mod logging;
pub mod model;
pub mod parser;
pub mod response;
pub mod storage;

pub use controller::Interpreter;
pub use error::DukeError;
