use rand::Rng;
use tracing::{debug, trace};

use super::paddle::Paddle;
use super::state::Side;
use crate::config::BallConfig;
use crate::geometry::{Rect, Vector2};

/// The ball: center position, velocity and the speed it is travelling at
///
/// `speed` only grows during a rally (one increment per paddle hit, capped at
/// `max_speed`) and drops back to `initial_speed` on every serve.
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub speed: f32,
    pub size: f32,
    initial_speed: f32,
    max_speed: f32,
    speed_increment: f32,
    angle_factor: f32,
    serve_angle: f32,
    home: Vector2,
}

impl Ball {
    /// Create a ball resting at `home` (the court center); call `reset` to serve it
    pub fn new(home: Vector2, config: &BallConfig) -> Self {
        Self {
            position: home,
            velocity: Vector2::ZERO,
            speed: config.initial_speed,
            size: config.size,
            initial_speed: config.initial_speed,
            max_speed: config.max_speed,
            speed_increment: config.speed_increment,
            angle_factor: config.angle_factor,
            serve_angle: config.serve_angle_deg.to_radians(),
            home,
        }
    }

    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Serve from the court center at the initial speed
    ///
    /// The ball heads toward `direction_hint` (the side that conceded) at a uniform
    /// random angle within the serve cone; without a hint the side is a coin flip.
    pub fn reset<R: Rng + ?Sized>(&mut self, direction_hint: Option<Side>, rng: &mut R) {
        self.position = self.home;
        self.speed = self.initial_speed;

        let side = direction_hint.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                Side::Left
            } else {
                Side::Right
            }
        });
        let angle = if self.serve_angle > 0.0 {
            rng.gen_range(-self.serve_angle..=self.serve_angle)
        } else {
            0.0
        };
        let direction = match side {
            Side::Left => -1.0,
            Side::Right => 1.0,
        };

        self.velocity = Vector2::new(
            direction * angle.cos() * self.speed,
            angle.sin() * self.speed,
        );
        debug!(?side, angle = angle.to_degrees(), "serve");
    }

    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Bounce off the top/bottom walls; only the vertical component changes
    pub fn resolve_wall_collision(&mut self, court_height: f32) -> bool {
        let radius = self.size / 2.0;

        if self.position.y - radius <= 0.0 {
            self.position.y = radius;
            self.velocity.y = self.velocity.y.abs();
            true
        } else if self.position.y + radius >= court_height {
            self.position.y = court_height - radius;
            self.velocity.y = -self.velocity.y.abs();
            true
        } else {
            false
        }
    }

    /// Bounce off `paddle` if the ball overlaps it while moving toward it
    ///
    /// Returns true when a hit was applied. The ball leaves tangent to the face it hit so
    /// the same paddle cannot trigger again on the next tick.
    pub fn resolve_paddle_collision(&mut self, paddle: &Paddle) -> bool {
        let paddle_rect = paddle.rect();
        if !self.rect().intersects(&paddle_rect) {
            return false;
        }

        let paddle_center = paddle_rect.center();
        let hit_from_left = self.position.x < paddle_center.x;

        // A paddle catching up with a ball that is already leaving is not a hit
        if (hit_from_left && self.velocity.x <= 0.0) || (!hit_from_left && self.velocity.x >= 0.0)
        {
            return false;
        }

        let deflection = self.deflection(paddle);

        self.velocity.x = -self.velocity.x;
        self.velocity.y += deflection * self.speed * self.angle_factor;

        self.speed = (self.speed + self.speed_increment).min(self.max_speed);
        self.velocity = self.velocity.normalize_or_zero() * self.speed;

        let radius = self.size / 2.0;
        self.position.x = if hit_from_left {
            paddle_rect.left() - radius
        } else {
            paddle_rect.right() + radius
        };

        trace!(deflection, speed = self.speed, "paddle hit");
        true
    }

    /// Where the ball meets the paddle: -1 at the top edge, 0 at the center, 1 at the bottom
    pub fn deflection(&self, paddle: &Paddle) -> f32 {
        ((self.position.y - paddle.center().y) / (paddle.height / 2.0)).clamp(-1.0, 1.0)
    }

    pub fn is_moving_toward(&self, side: Side) -> bool {
        match side {
            Side::Left => self.velocity.x < 0.0,
            Side::Right => self.velocity.x > 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, self.size, self.size)
    }
}
