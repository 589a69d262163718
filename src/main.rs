//! Bounce Paddle entry point
//!
//! Initializes the collaborators once, then runs the frame loop forever.
//! Usage: `bounce-paddle [settings.json]`

use std::path::PathBuf;
use std::sync::Arc;

use bounce_paddle::platform::{FrameClock, TerminalScreen, spawn_stdin_pad};
use bounce_paddle::sim::GameWorld;
use bounce_paddle::{GameLoop, InputController, InputMailbox, Settings, TextScreen};

fn main() {
    env_logger::init();
    log::info!("Bounce Paddle starting...");

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());

    let mailbox = Arc::new(InputMailbox::new());
    if settings.stdin_pad {
        let controller = InputController::new(mailbox.clone());
        if let Err(e) = spawn_stdin_pad(controller) {
            log::error!("Failed to start stdin pad: {}", e);
        }
    }

    let world = GameWorld::new().with_paddle_cooldown(settings.paddle_cooldown_frames);
    let clock = FrameClock::new(settings.frame_rate);
    log::info!(
        "Running at {} Hz (paddle cooldown {} frames)",
        settings.frame_rate,
        settings.paddle_cooldown_frames
    );

    if settings.render_terminal {
        // Clear once; each frame then repaints from the top-left corner
        print!("\x1b[2J");
        let screen = TerminalScreen::new(std::io::stdout(), settings.redraw_every);
        GameLoop::new(world, mailbox, screen, clock).run()
    } else {
        GameLoop::new(world, mailbox, TextScreen::new(), clock).run()
    }
}
