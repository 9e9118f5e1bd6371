use crate::geometry::{Rect, Vector2};

/// A paddle: top-left position, velocity and the box it may move in
///
/// `x_bounds` / `y_bounds` constrain the top-left corner. Standard modes pin the paddle
/// horizontally (`min_x == max_x`); doubles lets it roam its team's half-court.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub width: f32,
    pub height: f32,
    pub max_speed: f32,
    pub x_bounds: (f32, f32),
    pub y_bounds: (f32, f32),
    home: Vector2,
}

impl Paddle {
    pub fn new(
        position: Vector2,
        width: f32,
        height: f32,
        max_speed: f32,
        x_bounds: (f32, f32),
        y_bounds: (f32, f32),
    ) -> Self {
        let mut paddle = Self {
            position,
            velocity: Vector2::ZERO,
            width,
            height,
            max_speed,
            x_bounds,
            y_bounds,
            home: position,
        };
        paddle.clamp_to_bounds();
        paddle.home = paddle.position;
        paddle
    }

    /// Set the desired velocity; each axis is clamped to `[-max_speed, max_speed]`
    pub fn set_velocity(&mut self, intent: Vector2) {
        self.velocity = Vector2::new(
            intent.x.clamp(-self.max_speed, self.max_speed),
            intent.y.clamp(-self.max_speed, self.max_speed),
        );
    }

    pub fn stop(&mut self) {
        self.velocity = Vector2::ZERO;
    }

    /// Integrate velocity over `dt` seconds and clamp into the movement bounds
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.clamp_to_bounds();
    }

    /// Return to the spawn position and stop
    pub fn reset(&mut self) {
        self.position = self.home;
        self.stop();
    }

    fn clamp_to_bounds(&mut self) {
        self.position.x = self.position.x.clamp(self.x_bounds.0, self.x_bounds.1);
        self.position.y = self.position.y.clamp(self.y_bounds.0, self.y_bounds.1);
    }

    pub fn home(&self) -> Vector2 {
        self.home
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn center(&self) -> Vector2 {
        self.rect().center()
    }

    pub fn can_move_horizontally(&self) -> bool {
        self.x_bounds.1 > self.x_bounds.0
    }
}
