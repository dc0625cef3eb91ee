//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, InputMode, Session, run_tui};
