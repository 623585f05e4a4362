//! NullForums TUI - a terminal front-end for the NullForums community
//! site.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod counter;
pub mod forms;
pub mod overlay;
pub mod search;
pub mod state;
pub mod storage;
pub mod theme;
pub mod timing;
pub mod toast;
pub mod ui;
