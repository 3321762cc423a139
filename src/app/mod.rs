//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `refresh`: Loading the log and feeding engine output to the views

mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, View};
