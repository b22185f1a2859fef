// Ball physics: movement, wall reflection, speed-up and paddle collision.
//
// Angles are in radians, measured from the "up" axis and increasing
// clockwise, so a positive sine means the ball travels to the right.

use std::f32::consts::PI;

use super::arena::{Rect, ARENA_HEIGHT, ARENA_WIDTH, BALL_RADIUS};
use super::paddle::Paddle;
use super::score::{Scoreboard, Side};

pub const INITIAL_SPEED: f32 = 1.0;
pub const INITIAL_ANGLE: f32 = 2.0;

/// Speed never grows past this value (units per frame)
pub const MAX_SPEED: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.1;

/// Number of bounces needed before the next speed increase
pub const BOUNCES_PER_SPEEDUP: u32 = 5;

/// What happened during a wall bounce resolution step
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WallBounce {
    /// Side wall (left/right) that was hit, if any
    pub side_wall: Option<Side>,
    /// Top or bottom wall was hit
    pub end_wall: bool,
    /// Side awarded a point by this bounce
    pub scored: Option<Side>,
    pub sped_up: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.side_wall.is_some() || self.end_wall
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub angle: f32,
    pub speed: f32,
    /// Bounces since the last speed increase
    pub bounces: u32,
}

impl Ball {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            radius: BALL_RADIUS,
            angle: INITIAL_ANGLE,
            speed: INITIAL_SPEED,
            bounces: 0,
        }
    }

    /// Ball at the arena center with the default angle and speed
    pub fn centered() -> Self {
        Self::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
    }

    /// Move one frame along the current heading
    pub fn advance(&mut self) {
        self.x += self.angle.sin() * self.speed;
        self.y -= self.angle.cos() * self.speed;
    }

    /// Heading in degrees, unnormalized
    pub fn angle_degrees(&self) -> f32 {
        self.angle * 180.0 / PI
    }

    /// Square hit-box used for paddle intersection
    pub fn hitbox(&self) -> Rect {
        Rect::around(self.x, self.y, self.radius)
    }

    /// Bounce off a left/right boundary
    pub fn reflect_horizontal(&mut self) {
        self.angle = -self.angle;
    }

    /// Bounce off a top/bottom boundary
    pub fn reflect_vertical(&mut self) {
        self.angle = PI - self.angle;
    }

    /// Raise the speed by one step once enough bounces have accumulated.
    /// Returns true if the speed changed.
    pub fn update_speed(&mut self) -> bool {
        if self.bounces >= BOUNCES_PER_SPEEDUP && self.speed < MAX_SPEED {
            self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
            self.bounces = 0;
            return true;
        }
        false
    }

    /// Mirror the ball back inside the arena for every boundary it crossed.
    ///
    /// Side walls and end walls are checked independently, so a corner hit
    /// resolves both axes in the same step. When `score` is given, a side
    /// wall hit awards the point to the side opposite the wall. End walls
    /// never score.
    pub fn resolve_wall_bounce(&mut self, score: Option<&mut Scoreboard>) -> WallBounce {
        let mut bounce = WallBounce::default();
        let r = self.radius;
        let max_x = ARENA_WIDTH - r;
        let max_y = ARENA_HEIGHT - r;

        if self.x > max_x {
            self.x = 2.0 * max_x - self.x;
            bounce.side_wall = Some(Side::Right);
        } else if self.x < r {
            self.x = 2.0 * r - self.x;
            bounce.side_wall = Some(Side::Left);
        }

        if let Some(wall) = bounce.side_wall {
            self.reflect_horizontal();
            if let Some(score) = score {
                score.award(wall.opposite());
                bounce.scored = Some(wall.opposite());
            }
            bounce.sped_up |= self.register_bounce();
        }

        if self.y > max_y {
            self.y = 2.0 * max_y - self.y;
            bounce.end_wall = true;
        } else if self.y < r {
            self.y = 2.0 * r - self.y;
            bounce.end_wall = true;
        }

        if bounce.end_wall {
            self.reflect_vertical();
            bounce.sped_up |= self.register_bounce();
        }

        // Mirroring only lands inside when the overshoot is smaller than the arena
        self.x = self.x.clamp(r, max_x);
        self.y = self.y.clamp(r, max_y);

        bounce
    }

    /// Bounce off whichever paddle the ball overlaps, human paddle first.
    ///
    /// The ball is mirrored across the paddle face only while heading toward
    /// that face and before its leading edge passes the paddle's back edge.
    /// A ball behind the paddle or moving away from it passes through.
    /// Returns the side of the paddle that was hit. Paddle hits count as
    /// bounces but never score.
    pub fn resolve_paddle_collision(&mut self, human: &Paddle, opponent: &Paddle) -> Option<Side> {
        let hitbox = self.hitbox();
        let dx = self.angle.sin();

        if hitbox.intersects(&human.rect) {
            let face = human.rect.right() + self.radius;
            if dx < 0.0 && self.x < face && self.x - self.radius > human.rect.left() {
                self.x = 2.0 * face - self.x;
                self.reflect_horizontal();
                self.bounces += 1;
                return Some(Side::Left);
            }
        } else if hitbox.intersects(&opponent.rect) {
            let face = opponent.rect.left() - self.radius;
            if dx > 0.0 && self.x > face && self.x + self.radius < opponent.rect.right() {
                self.x = 2.0 * face - self.x;
                self.reflect_horizontal();
                self.bounces += 1;
                return Some(Side::Right);
            }
        }

        None
    }

    fn register_bounce(&mut self) -> bool {
        self.bounces += 1;
        self.update_speed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::PADDLE_SIZE;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-3;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn test_advance_follows_heading() {
        let mut ball = Ball::centered();
        ball.angle = PI / 2.0; // straight right
        ball.advance();
        assert!(close(ball.x, 201.0, EPS));
        assert!(close(ball.y, 150.0, EPS));

        ball.angle = 0.0; // straight up
        ball.advance();
        assert!(close(ball.y, 149.0, EPS));
    }

    #[test]
    fn test_position_inside_after_bounce() {
        let r = BALL_RADIUS;
        let mut x = -50.0;
        while x <= ARENA_WIDTH + 50.0 {
            let mut y = -50.0;
            while y <= ARENA_HEIGHT + 50.0 {
                let mut ball = Ball::new(x, y);
                ball.angle = 0.7;
                ball.resolve_wall_bounce(None);
                assert!(ball.x >= r && ball.x <= ARENA_WIDTH - r, "x={} from {}", ball.x, x);
                assert!(ball.y >= r && ball.y <= ARENA_HEIGHT - r, "y={} from {}", ball.y, y);
                y += 7.5;
            }
            x += 7.5;
        }
    }

    #[test]
    fn test_reflections_are_involutive() {
        let mut ball = Ball::centered();
        ball.angle = 0.83;

        ball.reflect_horizontal();
        assert!(close(ball.angle, -0.83, EPS));
        ball.reflect_horizontal();
        assert!(close(ball.angle, 0.83, EPS));

        ball.reflect_vertical();
        assert!(close(ball.angle, PI - 0.83, EPS));
        ball.reflect_vertical();
        assert!(close(ball.angle, 0.83, EPS));
    }

    #[test]
    fn test_right_wall_scores_for_left() {
        let mut score = Scoreboard::new();
        let mut ball = Ball::new(ARENA_WIDTH - BALL_RADIUS + 1.0, 150.0);
        ball.angle = 2.0;

        let bounce = ball.resolve_wall_bounce(Some(&mut score));

        assert_eq!(bounce.side_wall, Some(Side::Right));
        assert_eq!(bounce.scored, Some(Side::Left));
        assert_eq!(score, Scoreboard { left: 1, right: 0 });
        assert!(close(ball.x, ARENA_WIDTH - BALL_RADIUS - 1.0, EPS));
        assert!(close(ball.angle, -2.0, EPS));
        assert_eq!(ball.bounces, 1);
    }

    #[test]
    fn test_left_wall_scores_for_right() {
        let mut score = Scoreboard::new();
        let mut ball = Ball::new(BALL_RADIUS - 2.0, 100.0);
        ball.angle = -1.0;

        ball.resolve_wall_bounce(Some(&mut score));

        assert_eq!(score, Scoreboard { left: 0, right: 1 });
        assert!(close(ball.x, BALL_RADIUS + 2.0, EPS));
    }

    #[test]
    fn test_end_walls_never_score() {
        let mut score = Scoreboard::new();
        let mut ball = Ball::new(200.0, ARENA_HEIGHT);
        ball.angle = 2.5;

        let bounce = ball.resolve_wall_bounce(Some(&mut score));

        assert!(bounce.end_wall);
        assert_eq!(bounce.scored, None);
        assert_eq!(score, Scoreboard::new());
        assert!(close(ball.angle, PI - 2.5, EPS));
        assert!(close(ball.y, ARENA_HEIGHT - 2.0 * BALL_RADIUS, EPS));
    }

    #[test]
    fn test_corner_resolves_both_axes() {
        let mut score = Scoreboard::new();
        let mut ball = Ball::new(ARENA_WIDTH - 1.0, 1.0);
        ball.angle = 0.5;

        let bounce = ball.resolve_wall_bounce(Some(&mut score));

        assert_eq!(bounce.side_wall, Some(Side::Right));
        assert!(bounce.end_wall);
        assert_eq!(score, Scoreboard { left: 1, right: 0 });
        assert!(close(ball.angle, PI + 0.5, EPS));
        assert_eq!(ball.bounces, 2);
    }

    #[test]
    fn test_no_score_sink_still_bounces() {
        let mut ball = Ball::new(ARENA_WIDTH, 150.0);
        let bounce = ball.resolve_wall_bounce(None);

        assert_eq!(bounce.side_wall, Some(Side::Right));
        assert_eq!(bounce.scored, None);
        assert_eq!(ball.bounces, 1);
    }

    #[test]
    fn test_speed_steps_every_five_bounces() {
        let mut ball = Ball::centered();

        ball.bounces = 4;
        assert!(!ball.update_speed());
        assert_eq!(ball.speed, INITIAL_SPEED);

        ball.bounces = 5;
        assert!(ball.update_speed());
        assert!(close(ball.speed, 1.1, EPS));
        assert_eq!(ball.bounces, 0);
    }

    #[test]
    fn test_fifty_bounces_add_one() {
        let mut ball = Ball::new(200.0, 150.0);
        for _ in 0..50 {
            ball.x = ARENA_WIDTH;
            ball.resolve_wall_bounce(None);
        }
        assert!(close(ball.speed, 2.0, EPS), "speed {}", ball.speed);
        assert_eq!(ball.bounces, 0);
    }

    #[test]
    fn test_speed_capped() {
        let mut ball = Ball::centered();
        for _ in 0..500 {
            ball.bounces += 1;
            ball.update_speed();
            assert!(ball.speed <= MAX_SPEED);
        }
        assert!(close(ball.speed, MAX_SPEED, EPS));
    }

    #[test]
    fn test_human_paddle_reflects() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        // Ball overlapping the face of the human paddle, heading left
        let mut ball = Ball::new(human.rect.right() + 2.0, 150.0);
        ball.angle = -2.0;

        let hit = ball.resolve_paddle_collision(&human, &opponent);

        assert_eq!(hit, Some(Side::Left));
        assert!(close(ball.angle, 2.0, EPS));
        assert!(close(ball.x, human.rect.right() + 2.0 * BALL_RADIUS - 2.0, EPS));
        assert!(!ball.hitbox().intersects(&human.rect));
        assert_eq!(ball.bounces, 1);
    }

    #[test]
    fn test_opponent_paddle_reflects() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        let mut ball = Ball::new(opponent.rect.left() - 1.0, 130.0);
        ball.angle = 2.0;

        let hit = ball.resolve_paddle_collision(&human, &opponent);

        assert_eq!(hit, Some(Side::Right));
        assert!(close(ball.angle, -2.0, EPS));
        assert!(close(ball.x, opponent.rect.left() - 2.0 * BALL_RADIUS + 1.0, EPS));
    }

    #[test]
    fn test_ball_behind_paddle_passes() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        // Left edge already past the paddle's back edge
        let mut ball = Ball::new(human.rect.left() + 1.0, 150.0);
        ball.angle = -2.0;

        assert_eq!(ball.resolve_paddle_collision(&human, &opponent), None);
        assert!(close(ball.angle, -2.0, EPS));
    }

    #[test]
    fn test_ball_approaching_from_behind_passes() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        // Between the left wall and the human paddle, heading right into it
        let mut ball = Ball::new(human.rect.left() + 4.5, 150.0);
        ball.angle = FRAC_PI_2;
        assert!(ball.hitbox().intersects(&human.rect));

        assert_eq!(ball.resolve_paddle_collision(&human, &opponent), None);
        assert!(close(ball.x, human.rect.left() + 4.5, EPS));
        assert!(close(ball.angle, FRAC_PI_2, EPS));
        assert_eq!(ball.bounces, 0);

        // Mirror case behind the opponent paddle, heading left into it
        let mut ball = Ball::new(opponent.rect.right() - 4.5, 150.0);
        ball.angle = -FRAC_PI_2;
        assert!(ball.hitbox().intersects(&opponent.rect));

        assert_eq!(ball.resolve_paddle_collision(&human, &opponent), None);
        assert!(close(ball.x, opponent.rect.right() - 4.5, EPS));
        assert!(close(ball.angle, -FRAC_PI_2, EPS));
    }

    #[test]
    fn test_ball_leaving_face_not_reflected() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        // Still overlapping the face but already heading away
        let mut ball = Ball::new(human.rect.right() + 2.0, 150.0);
        ball.angle = 2.0;

        assert_eq!(ball.resolve_paddle_collision(&human, &opponent), None);
        assert!(close(ball.angle, 2.0, EPS));
    }

    #[test]
    fn test_paddle_hit_defers_speedup_to_next_wall() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        let mut ball = Ball::new(human.rect.right() + 2.0, 150.0);
        ball.angle = -2.0;
        ball.bounces = 4;

        assert_eq!(ball.resolve_paddle_collision(&human, &opponent), Some(Side::Left));
        assert_eq!(ball.bounces, 5);
        assert_eq!(ball.speed, INITIAL_SPEED);

        ball.x = ARENA_WIDTH;
        let bounce = ball.resolve_wall_bounce(None);

        assert!(bounce.sped_up);
        assert!(close(ball.speed, 1.1, EPS));
        assert_eq!(ball.bounces, 0);
    }

    #[test]
    fn test_miss_above_paddle() {
        let human = Paddle::new(Side::Left);
        let opponent = Paddle::new(Side::Right);

        let mut ball = Ball::new(human.rect.right() + 1.0, human.top() - PADDLE_SIZE);
        assert_eq!(ball.resolve_paddle_collision(&human, &opponent), None);
    }

    #[test]
    fn test_closed_form_until_first_wall() {
        // Start at the center heading 2 rad, speed 1: the right wall is the
        // first boundary crossed
        let mut ball = Ball::centered();
        let (dx, dy) = (2.0f32.sin(), -(2.0f32.cos()));
        let first_crossing = ((ARENA_WIDTH - BALL_RADIUS - 200.0) / dx).floor() as u32 + 1;

        for n in 1..first_crossing {
            ball.advance();
            let bounce = ball.resolve_wall_bounce(None);
            assert!(!bounce.any(), "unexpected bounce at frame {}", n);
            assert!(close(ball.x, 200.0 + dx * n as f32, 0.02));
            assert!(close(ball.y, 150.0 + dy * n as f32, 0.02));
        }

        ball.advance();
        let bounce = ball.resolve_wall_bounce(None);
        let n = first_crossing as f32;
        assert_eq!(bounce.side_wall, Some(Side::Right));
        assert!(!bounce.end_wall);
        assert!(close(ball.x, 2.0 * (ARENA_WIDTH - BALL_RADIUS) - (200.0 + dx * n), 0.02));
        assert!(close(ball.y, 150.0 + dy * n, 0.02));
        assert!(close(ball.angle, -2.0, EPS));

        // Now heading back left
        let before = ball.x;
        ball.advance();
        assert!(ball.x < before);
    }
}
