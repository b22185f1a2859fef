use std::io;
use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::ai::{self, Bot};
use crate::config::Config;
use crate::game::{poll_input, GameEvent, GameState, PhysicsEvents, PointerTracker};
use crate::ui::{self, ArenaViewport, Palette};

use super::common::{FrameLimiter, Ticker};

/// Human vs bot match: game state plus everything the loop feeds into it
pub struct Match {
    pub state: GameState,
    bot: Box<dyn Bot>,
    pointer: PointerTracker,
    viewport: ArenaViewport,
}

impl Match {
    pub fn new(state: GameState, mut bot: Box<dyn Bot>, viewport: ArenaViewport) -> Self {
        bot.reset();
        let pointer = PointerTracker::new(state.profile.pointer);
        Self {
            state,
            bot,
            pointer,
            viewport,
        }
    }

    #[cfg(test)]
    pub fn viewport(&self) -> ArenaViewport {
        self.viewport
    }

    /// Apply one input event. Returns false when the player asked to quit.
    pub fn handle_event(&mut self, event: GameEvent) -> bool {
        match event {
            GameEvent::Quit => return false,
            GameEvent::PointerMoved { row } => {
                let y = self.viewport.row_to_arena_y(row);
                self.pointer.apply(y, &mut self.state.human);
            }
            GameEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.viewport = ArenaViewport::new(width, height);
                self.pointer.reset();
            }
            GameEvent::TimerFired => {
                if self.state.on_timer() {
                    info!("countdown finished, ball in play");
                } else if let Some(seconds) = self.state.countdown.remaining() {
                    debug!(seconds, "countdown");
                }
            }
        }
        true
    }

    /// Simulation step for one frame
    pub fn step(&mut self) -> PhysicsEvents {
        let events = self.state.update(self.bot.as_mut());
        log_events(&events, &self.state);
        events
    }
}

fn log_events(events: &PhysicsEvents, state: &GameState) {
    if !events.any() {
        return;
    }
    if let Some(side) = events.paddle_hit {
        debug!(?side, x = state.ball.x, y = state.ball.y, "paddle hit");
    }
    if events.wall_bounce {
        debug!(x = state.ball.x, y = state.ball.y, angle = state.ball.angle, "wall bounce");
    }
    if let Some(side) = events.scored {
        info!(?side, left = state.score.left, right = state.score.right, "point scored");
    }
    if events.sped_up {
        debug!(speed = state.ball.speed, "ball sped up");
    }
}

/// Run a match against the reactive bot until the player quits
pub fn run_game_vs_bot<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    let profile = config.game.profile();
    let size = terminal.size()?;
    let bot = ai::create_bot();
    info!(?profile, bot = bot.name(), "match started");

    let mut game = Match::new(
        GameState::new(profile),
        bot,
        ArenaViewport::new(size.width, size.height),
    );
    let palette = Palette::from(&config.display);
    let limiter = FrameLimiter::new(config.display.target_fps);
    let mut ticker = Ticker::every(Duration::from_secs(1), Instant::now());

    loop {
        let frame_start = Instant::now();

        let mut events = poll_input()?;
        if !game.state.is_live() {
            for _ in 0..ticker.poll(frame_start) {
                events.push(GameEvent::TimerFired);
            }
        }

        for event in events {
            if !game.handle_event(event) {
                info!(
                    left = game.state.score.left,
                    right = game.state.score.right,
                    "quit requested"
                );
                return Ok(());
            }
        }

        game.step();

        terminal.draw(|f| ui::render(f, &game.state, &palette))?;

        limiter.wait(frame_start);
    }
}
