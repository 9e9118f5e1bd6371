// Pong configuration types
// Every section falls back to the built-in defaults when omitted from the file

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub court: CourtConfig,
    #[serde(default)]
    pub paddle: PaddleConfig,
    #[serde(default)]
    pub ball: BallConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Reject values that would produce degenerate geometry or a match nobody can win
    pub fn validate(&self) -> anyhow::Result<()> {
        let court = &self.court;
        ensure!(
            court.width > 0.0 && court.height > 0.0,
            "court dimensions must be positive (got {}x{})",
            court.width,
            court.height
        );

        let paddle = &self.paddle;
        ensure!(
            paddle.width > 0.0 && paddle.height > 0.0 && paddle.doubles_height > 0.0,
            "paddle dimensions must be positive"
        );
        ensure!(
            paddle.height <= court.height && paddle.doubles_height <= court.height,
            "paddles must fit inside the court"
        );
        ensure!(paddle.speed > 0.0, "paddle speed must be positive");
        ensure!(
            paddle.offset >= 0.0 && paddle.offset + paddle.width <= court.width / 2.0,
            "paddle offset must keep paddles inside their half of the court"
        );

        let ball = &self.ball;
        ensure!(ball.size > 0.0, "ball size must be positive");
        ensure!(ball.initial_speed > 0.0, "ball initial speed must be positive");
        ensure!(
            ball.max_speed >= ball.initial_speed,
            "ball max speed ({}) is below its initial speed ({})",
            ball.max_speed,
            ball.initial_speed
        );
        ensure!(ball.speed_increment >= 0.0, "ball speed increment must not be negative");
        ensure!(
            (0.0..90.0).contains(&ball.serve_angle_deg),
            "serve angle must be in [0, 90) degrees"
        );
        ensure!(ball.angle_factor.is_finite(), "ball angle factor must be a finite number");

        ensure!(self.ai.speed > 0.0, "AI speed must be positive");
        ensure!(self.ai.reaction_zone >= 0.0, "AI reaction zone must not be negative");
        ensure!(
            self.ai.aggressive_offset.is_finite(),
            "AI aggressive offset must be a finite number"
        );
        ensure!(self.game.winning_score > 0, "winning score must be at least 1");
        ensure!(self.display.target_fps > 0, "target fps must be positive");

        Ok(())
    }

    /// Seconds per simulation tick
    pub fn fixed_timestep(&self) -> f32 {
        1.0 / self.display.target_fps as f32
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CourtConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,

    // Shorter paddles so two of them fit one half-court
    pub doubles_height: f32,

    // Units per second
    pub speed: f32,

    // Distance between a paddle and its own wall
    pub offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 100.0,
            doubles_height: 80.0,
            speed: 300.0,
            offset: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BallConfig {
    pub size: f32,

    // Units per second
    pub initial_speed: f32,
    pub max_speed: f32,

    // Added to the speed on every paddle hit
    pub speed_increment: f32,

    // How strongly the hit position on the paddle bends the return
    pub angle_factor: f32,

    // Serves leave within +/- this many degrees of horizontal
    pub serve_angle_deg: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: 10.0,
            initial_speed: 300.0,
            max_speed: 600.0,
            speed_increment: 30.0,
            angle_factor: 0.5,
            serve_angle_deg: 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    pub difficulty: Difficulty,

    // Medium speed; easy and hard scale from it
    pub speed: f32,

    // Medium dead zone; easy widens it, hard narrows it
    pub reaction_zone: f32,

    // How far an aggressive doubles AI moves off its baseline toward the net
    pub aggressive_offset: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            speed: 240.0,
            reaction_zone: 30.0,
            aggressive_offset: 250.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub winning_score: u32,

    // Fixed RNG seed for reproducible serves and AI strategies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: 10,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub target_fps: u64,

    // Paddles, ball and scores (RGB)
    pub foreground: [u8; 3],

    // Selected menu entry and winner banner
    pub accent: [u8; 3],

    // Center line and hints
    pub dim: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            foreground: [255, 255, 255],
            accent: [255, 215, 0],
            dim: [100, 100, 100],
        }
    }
}
