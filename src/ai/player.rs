// AI player: chooses a movement intent for one paddle each tick

use rand::Rng;

use super::{AIStrategy, Difficulty};
use crate::config::Config;
use crate::game::{Ball, Paddle, Side};
use crate::geometry::Vector2;

/// Drives one paddle of the match
///
/// The paddle itself lives in the match's paddle list; the AI only remembers its index
/// (and its teammate's in doubles).
#[derive(Debug, Clone)]
pub struct AIPlayer {
    pub difficulty: Difficulty,
    pub strategy: AIStrategy,
    pub paddle_index: usize,
    pub teammate_index: Option<usize>,
    pub side: Side,
    pub speed: f32,
    pub reaction_zone: f32,
    // Vertical band this AI covers in doubles
    zone: Option<(f32, f32)>,
    aggressive_offset: f32,
    court_width: f32,
    court_height: f32,
}

impl AIPlayer {
    pub fn new(paddle_index: usize, side: Side, config: &Config) -> Self {
        let difficulty = config.ai.difficulty;
        Self {
            difficulty,
            strategy: AIStrategy::Balanced,
            paddle_index,
            teammate_index: None,
            side,
            speed: difficulty.speed(config.ai.speed),
            reaction_zone: difficulty.reaction_zone(config.ai.reaction_zone),
            zone: None,
            aggressive_offset: config.ai.aggressive_offset,
            court_width: config.court.width,
            court_height: config.court.height,
        }
    }

    /// Pair this AI with a teammate and give it a vertical band to defend
    pub fn with_team(mut self, teammate_index: usize, zone: (f32, f32)) -> Self {
        self.teammate_index = Some(teammate_index);
        self.zone = Some(zone);
        self
    }

    pub fn zone(&self) -> Option<(f32, f32)> {
        self.zone
    }

    pub fn reroll_strategy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.strategy = AIStrategy::random(rng);
    }

    /// Movement intent for `own` this tick
    ///
    /// Each axis stays still inside the dead zone, otherwise moves toward its target at up
    /// to `speed`, never further than the target within `dt`. The combined intent never
    /// exceeds `speed`. Teammates split the court through their zones, so the teammate's
    /// paddle does not move the target.
    pub fn decide(
        &self,
        ball: &Ball,
        own: &Paddle,
        _teammate: Option<&Paddle>,
        dt: f32,
    ) -> Vector2 {
        let dy = self.target_y(ball) - own.center().y;
        let dx = match self.target_x(ball, own) {
            Some(target) => target - own.position.x,
            None => 0.0,
        };

        let intent = Vector2::new(self.axis_speed(dx, dt), self.axis_speed(dy, dt));
        intent.clamp_length_max(self.speed)
    }

    fn axis_speed(&self, diff: f32, dt: f32) -> f32 {
        if diff.abs() < self.reaction_zone {
            return 0.0;
        }
        let cap = if dt > 0.0 { diff.abs() / dt } else { self.speed };
        diff.signum() * self.speed.min(cap)
    }

    /// Vertical target: the ball while it approaches, the resting height otherwise
    ///
    /// A ball outside this AI's zone pulls the target only halfway, toward the zone center.
    pub fn target_y(&self, ball: &Ball) -> f32 {
        if !ball.is_moving_toward(self.side) {
            return match self.zone {
                Some((top, bottom)) => (top + bottom) / 2.0,
                None => self.court_height / 2.0,
            };
        }

        let target = ball.position.y;
        match self.zone {
            Some((top, bottom)) if target < top || target > bottom => {
                (target + (top + bottom) / 2.0) / 2.0
            }
            _ => target,
        }
    }

    /// Horizontal target for the paddle's left edge, or None for a pinned paddle
    pub fn target_x(&self, ball: &Ball, own: &Paddle) -> Option<f32> {
        if !own.can_move_horizontally() {
            return None;
        }

        let (min_x, max_x) = own.x_bounds;
        let baseline = own.home().x;
        let toward_net = match self.side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        let near_net = (baseline + toward_net * self.aggressive_offset).clamp(min_x, max_x);

        let target = match self.strategy {
            AIStrategy::Defensive => baseline,
            AIStrategy::Balanced => (min_x + max_x) / 2.0,
            AIStrategy::Aggressive => near_net,
            AIStrategy::BallReactive => {
                if ball.is_moving_toward(self.side) {
                    let baseline_center = baseline + own.width / 2.0;
                    let distance = (ball.position.x - baseline_center).abs() / self.court_width;
                    let closeness = 1.0 - distance.clamp(0.0, 1.0);
                    near_net + (baseline - near_net) * closeness
                } else {
                    near_net
                }
            }
        };
        Some(target)
    }
}
