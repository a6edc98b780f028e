//! Terminal UI for Roomboard
//!
//! A thin shell over [`roomboard_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`roomboard_app::Runtime`].
//!
//! This crate handles terminal rendering plus the binary's ambient setup:
//! command-line configuration and file logging.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod demo;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use config::{Args, Backend, Config, ConfigError};
pub use roomboard_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
