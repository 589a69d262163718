//! Controller events typed on stdin
//!
//! One command per line:
//! - `l` / `r`: hold left / right (releases the other direction)
//! - `s`: tap START
//! - `x` or an empty line: let go of both directions

use std::io::BufRead;
use std::thread::JoinHandle;

use crate::input::{
    BUTTON_HORIZONTAL, BUTTON_LEFT, BUTTON_RIGHT, BUTTON_START, InputController, JOY_1,
};

/// Tracks held buttons and turns commands into (changed, state) events
#[derive(Debug, Default, Clone)]
pub struct StdinPad {
    held: u16,
}

impl StdinPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> u16 {
        self.held
    }

    fn set(&mut self, state: u16, events: &mut Vec<(u16, u16)>) {
        let changed = self.held ^ state;
        self.held = state;
        if changed != 0 {
            events.push((changed, state));
        }
    }

    /// Events produced by one command line (empty for unknown commands)
    pub fn apply(&mut self, line: &str) -> Vec<(u16, u16)> {
        let mut events = Vec::new();
        let others = self.held & !BUTTON_HORIZONTAL;
        match line.trim() {
            "l" | "L" => self.set(others | BUTTON_LEFT, &mut events),
            "r" | "R" => self.set(others | BUTTON_RIGHT, &mut events),
            "x" | "X" | "" => self.set(others, &mut events),
            "s" | "S" => {
                let base = self.held & !BUTTON_START;
                self.set(base | BUTTON_START, &mut events);
                self.set(base, &mut events);
            }
            other => log::warn!("Unknown pad command {:?}", other),
        }
        events
    }
}

/// Feed stdin commands to the controller from a background thread
pub fn spawn_stdin_pad(controller: InputController) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("stdin-pad".into())
        .spawn(move || {
            let mut pad = StdinPad::new();
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("Stdin read failed, pad disconnected: {}", e);
                        return;
                    }
                };
                for (changed, state) in pad.apply(&line) {
                    controller.on_input(JOY_1, changed, state);
                }
            }
            log::info!("Stdin closed, pad disconnected");
        })
}
