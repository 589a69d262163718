//! Frame driver
//!
//! Each frame: drain the input mailbox, tick the simulation, flush sprites,
//! then block until the next vertical refresh. Runs forever.

use std::sync::Arc;

use crate::consts::{PADDLE_Y, SCORE_LABEL, SCORE_LABEL_CELL};
use crate::input::InputMailbox;
use crate::renderer::{Display, SpriteId};
use crate::sim::{GameWorld, Prompt, Transition, show_prompt, tick};

/// Source of vertical refresh boundaries
pub trait VerticalSync {
    /// Block until the next refresh
    fn wait_for_vsync(&mut self);
}

/// Owns the world and the collaborators, drives one tick per refresh
pub struct GameLoop<D: Display, V: VerticalSync> {
    world: GameWorld,
    mailbox: Arc<InputMailbox>,
    display: D,
    vsync: V,
}

impl<D: Display, V: VerticalSync> GameLoop<D, V> {
    pub fn new(world: GameWorld, mailbox: Arc<InputMailbox>, display: D, vsync: V) -> Self {
        Self {
            world,
            mailbox,
            display,
            vsync,
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn mailbox(&self) -> &Arc<InputMailbox> {
        &self.mailbox
    }

    /// Power-on screen: HUD, start prompt, sprites at rest
    pub fn boot(&mut self) {
        let (x, y) = SCORE_LABEL_CELL;
        self.display.draw_text(SCORE_LABEL, x, y);
        self.world.score.refresh(&mut self.display);
        show_prompt(&mut self.world, Prompt::Start, &mut self.display);

        let ball = self.world.ball.pos;
        self.display.set_sprite_position(SpriteId::Ball, ball.x, ball.y);
        self.display
            .set_sprite_position(SpriteId::Paddle, self.world.paddle.x, PADDLE_Y);
        self.display.update_sprites();

        self.mailbox.set_playing(self.world.is_playing());
        log::info!("Booted, waiting for START");
    }

    /// Run exactly one frame
    pub fn frame(&mut self) -> Option<Transition> {
        let input = self.mailbox.drain();
        let transition = tick(&mut self.world, &input, &mut self.display);
        self.mailbox.set_playing(self.world.is_playing());

        match transition {
            Some(Transition::Started) => log::info!("Playing"),
            Some(Transition::Ended) => {
                log::info!("Idle, final score {}", self.world.score.format())
            }
            None => {}
        }

        self.display.update_sprites();
        self.vsync.wait_for_vsync();
        transition
    }

    /// Boot and drive frames forever
    pub fn run(mut self) -> ! {
        self.boot();
        loop {
            self.frame();
        }
    }
}
