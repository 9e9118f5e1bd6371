pub mod ball;
pub mod controller;
pub mod input;
pub mod paddle;
pub mod state;

pub use ball::Ball;
pub use controller::{ControlFlow, GameController, GameState, RenderSnapshot};
pub use input::{Action, InputSnapshot, Player};
pub use paddle::Paddle;
pub use state::{GameMode, MatchState, MatchStatus, Score, Side, TickEvents};
