//! Platform abstraction layer
//!
//! Native stand-ins for the console hardware:
//! - Frame clock (vertical refresh)
//! - Controller events from stdin
//! - Terminal output of the text screen

pub mod clock;
pub mod stdin_pad;
pub mod terminal;

pub use clock::FrameClock;
pub use stdin_pad::{StdinPad, spawn_stdin_pad};
pub use terminal::TerminalScreen;
