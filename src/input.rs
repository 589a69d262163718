//! Controller input
//!
//! The input side calls `InputController::on_input` whenever a pad changes,
//! from whatever thread it likes. The handler never touches the world: it
//! writes into an `InputMailbox`, which the frame loop drains once per frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::consts::PADDLE_SPEED;
use crate::sim::TickInput;

/// Pad button bits (active-high)
pub mod buttons {
    pub const BUTTON_UP: u16 = 0x0001;
    pub const BUTTON_DOWN: u16 = 0x0002;
    pub const BUTTON_LEFT: u16 = 0x0004;
    pub const BUTTON_RIGHT: u16 = 0x0008;
    pub const BUTTON_B: u16 = 0x0010;
    pub const BUTTON_C: u16 = 0x0020;
    pub const BUTTON_A: u16 = 0x0040;
    pub const BUTTON_START: u16 = 0x0080;

    /// Both horizontal directions
    pub const BUTTON_HORIZONTAL: u16 = BUTTON_LEFT | BUTTON_RIGHT;
}

pub use buttons::*;

/// Controller ports
pub const JOY_1: u16 = 0;
pub const JOY_2: u16 = 1;

/// Single-slot mailbox shared between the input handler and the frame loop.
///
/// Each slot is one atomic scalar, so a reader never sees a torn value.
/// Later writes overwrite earlier ones; only the latest intent survives.
#[derive(Debug, Default)]
pub struct InputMailbox {
    paddle_vx: AtomicI32,
    start_requested: AtomicBool,
    /// Published by the loop after every frame
    playing: AtomicBool,
}

impl InputMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_paddle_vx(&self, vx: i32) {
        self.paddle_vx.store(vx, Ordering::Relaxed);
    }

    pub fn paddle_vx(&self) -> i32 {
        self.paddle_vx.load(Ordering::Relaxed)
    }

    pub fn request_start(&self) {
        self.start_requested.store(true, Ordering::Relaxed);
    }

    /// Read and clear the start request
    pub fn take_start(&self) -> bool {
        self.start_requested.swap(false, Ordering::Relaxed)
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    /// Everything the next tick needs, consuming the start request
    pub fn drain(&self) -> TickInput {
        TickInput {
            paddle_vx: self.paddle_vx(),
            start: self.take_start(),
        }
    }
}

/// Turns raw pad bitmasks into paddle intent and start requests
#[derive(Debug, Clone)]
pub struct InputController {
    mailbox: Arc<InputMailbox>,
}

impl InputController {
    pub fn new(mailbox: Arc<InputMailbox>) -> Self {
        Self { mailbox }
    }

    pub fn mailbox(&self) -> &Arc<InputMailbox> {
        &self.mailbox
    }

    /// Pad event callback.
    ///
    /// `changed` has a bit set for every button that changed in this event,
    /// `state` for every button currently held. Only port 1 is read.
    pub fn on_input(&self, joy: u16, changed: u16, state: u16) {
        if joy != JOY_1 {
            return;
        }

        if state & BUTTON_START != 0 && !self.mailbox.is_playing() {
            log::debug!("Start requested");
            self.mailbox.request_start();
        }

        if state & BUTTON_RIGHT != 0 {
            self.mailbox.set_paddle_vx(PADDLE_SPEED);
        } else if state & BUTTON_LEFT != 0 {
            self.mailbox.set_paddle_vx(-PADDLE_SPEED);
        } else if changed & BUTTON_HORIZONTAL != 0 {
            // A direction was released; other buttons leave the paddle alone
            self.mailbox.set_paddle_vx(0);
        }
    }
}
