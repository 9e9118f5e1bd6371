// AI module for computer-controlled paddles

mod player;

pub use player::AIPlayer;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// AI difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Slow with a wide dead zone
    Easy,
    Medium,
    /// Fast with a narrow dead zone
    Hard,
}

impl Difficulty {
    /// Get display name for difficulty
    pub fn display_name(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Top speed for this tier given the configured medium speed
    pub fn speed(&self, base_speed: f32) -> f32 {
        match self {
            Difficulty::Easy => base_speed * 0.75,
            Difficulty::Medium => base_speed,
            Difficulty::Hard => base_speed * 1.25,
        }
    }

    /// Dead zone for this tier given the configured medium dead zone
    pub fn reaction_zone(&self, base_zone: f32) -> f32 {
        match self {
            Difficulty::Easy => base_zone + 20.0,
            Difficulty::Medium => base_zone,
            Difficulty::Hard => (base_zone - 15.0).max(1.0),
        }
    }
}

/// Where a doubles AI stands horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AIStrategy {
    /// Hold the baseline
    Defensive,
    /// Middle of the team's half
    Balanced,
    /// Crowd the net
    Aggressive,
    /// Move up while the ball is away, fall back as it approaches
    BallReactive,
}

impl AIStrategy {
    pub const ALL: [AIStrategy; 4] = [
        AIStrategy::Defensive,
        AIStrategy::Balanced,
        AIStrategy::Aggressive,
        AIStrategy::BallReactive,
    ];

    /// Uniform pick from all four strategies
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn display_name(&self) -> &str {
        match self {
            AIStrategy::Defensive => "Defensive",
            AIStrategy::Balanced => "Balanced",
            AIStrategy::Aggressive => "Aggressive",
            AIStrategy::BallReactive => "Ball-reactive",
        }
    }
}
