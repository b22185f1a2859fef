use crate::ai::Bot;

use super::ball::Ball;
use super::countdown::Countdown;
use super::paddle::Paddle;
use super::profile::Profile;
use super::score::{Scoreboard, Side};

/// Events produced by one simulation step, used for logging
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicsEvents {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
    pub sped_up: bool,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.wall_bounce || self.paddle_hit.is_some() || self.scored.is_some() || self.sped_up
    }
}

/// Whole match: created once, mutated every frame, never reset
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    /// Left paddle, driven by the pointer
    pub human: Paddle,
    /// Right paddle, driven by the bot
    pub opponent: Paddle,
    pub score: Scoreboard,
    pub countdown: Countdown,
    pub profile: Profile,
}

impl GameState {
    pub fn new(profile: Profile) -> Self {
        Self {
            ball: Ball::centered(),
            human: Paddle::new(Side::Left),
            opponent: Paddle::new(Side::Right),
            score: Scoreboard::new(),
            countdown: Countdown::new(profile.countdown),
            profile,
        }
    }

    pub fn is_live(&self) -> bool {
        self.countdown.is_live()
    }

    /// One-second timer firing. Returns true when play starts.
    pub fn on_timer(&mut self) -> bool {
        self.countdown.tick()
    }

    /// Advance the simulation by one frame. Does nothing while counting down.
    ///
    /// Order: move ball, wall bounce (scoring per profile), paddle
    /// collision, then the bot reacts to the updated ball.
    pub fn update(&mut self, bot: &mut dyn Bot) -> PhysicsEvents {
        let mut events = PhysicsEvents::default();
        if !self.is_live() {
            return events;
        }

        self.ball.advance();

        let score = if self.profile.scores() {
            Some(&mut self.score)
        } else {
            None
        };
        let bounce = self.ball.resolve_wall_bounce(score);
        events.wall_bounce = bounce.any();
        events.scored = bounce.scored;
        events.sped_up = bounce.sped_up;

        events.paddle_hit = self
            .ball
            .resolve_paddle_collision(&self.human, &self.opponent);

        if let Some(mv) = bot.decide(self) {
            self.opponent.step(mv);
        }
        self.opponent.clamp();

        events
    }
}
