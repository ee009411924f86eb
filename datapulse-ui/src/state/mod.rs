//! State Management
//!
//! Session-wide console state provided through Leptos context.

pub mod console;

pub use console::{provide_console_state, use_data_state, BrowserConnectionStatus, ConsoleState};
