use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use super::input::{Action, InputSnapshot};
use super::state::{GameMode, MatchState, MatchStatus, Side, TickEvents};
use crate::ai::Difficulty;
use crate::config::Config;
use crate::geometry::Rect;

/// Top-level screen the controller is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    /// Reserved; no input currently enters it
    Paused,
    GameOver,
}

/// Whether the driver should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub state: GameState,
    /// Mode of the running match, if any
    pub mode: Option<GameMode>,
    pub selected_mode: GameMode,
    pub court_width: f32,
    pub court_height: f32,
    /// Paddle rectangles in slot order; empty on the menu
    pub paddles: Vec<Rect>,
    pub ball: Option<Rect>,
    pub score_left: u32,
    pub score_right: u32,
    pub winning_score: u32,
    pub difficulty: Difficulty,
    pub winner: Option<Side>,
    pub point_scored: Option<Side>,
}

/// Owns the menu selection, the current match and the random source
///
/// Drives Menu -> Playing -> GameOver -> Menu. Mode toggling and confirmation react to
/// the rising edge of a key so holding it down does not cycle every frame.
pub struct GameController {
    config: Config,
    state: GameState,
    selected_mode: GameMode,
    current: Option<MatchState>,
    previous_input: InputSnapshot,
    // What the most recent tick of the match produced
    last_events: TickEvents,
    rng: StdRng,
}

impl GameController {
    /// Seeded from `config.game.seed` when set, otherwise from OS entropy
    pub fn new(config: Config) -> Self {
        let rng = match config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            config,
            state: GameState::Menu,
            selected_mode: GameMode::Single,
            current: None,
            previous_input: InputSnapshot::new(),
            last_events: TickEvents::default(),
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn selected_mode(&self) -> GameMode {
        self.selected_mode
    }

    pub fn match_state(&self) -> Option<&MatchState> {
        self.current.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the last `tick`; empty when nothing ran
    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }

    /// React to one frame of input
    ///
    /// Quit works from every screen. Movement keys are left for `tick`.
    pub fn handle_input(&mut self, input: &InputSnapshot) -> ControlFlow {
        let previous = std::mem::replace(&mut self.previous_input, *input);

        if input.contains(Action::Quit) {
            info!(state = ?self.state, "quit requested");
            return ControlFlow::Quit;
        }

        match self.state {
            GameState::Menu => {
                if input.just_pressed(&previous, Action::ToggleMode) {
                    self.selected_mode = self.selected_mode.next();
                    debug!(mode = ?self.selected_mode, "mode selected");
                }
                if input.just_pressed(&previous, Action::Confirm) {
                    self.start_match();
                }
            }
            GameState::GameOver => {
                if input.just_pressed(&previous, Action::Confirm) {
                    self.current = None;
                    self.state = GameState::Menu;
                    info!("back to menu");
                }
            }
            GameState::Playing | GameState::Paused => {}
        }

        ControlFlow::Continue
    }

    /// Advance the running match by `dt` seconds and return the frame to draw
    ///
    /// Only the `Playing` state moves anything. A non-finite or negative `dt` is
    /// treated as zero.
    pub fn tick(&mut self, dt: f32) -> RenderSnapshot {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.last_events = TickEvents::default();

        if self.state == GameState::Playing {
            if let Some(current) = self.current.as_mut() {
                let events = current.tick(dt, &self.previous_input, &mut self.rng);
                if events.any() {
                    trace!(
                        wall_bounce = events.wall_bounce,
                        paddle_hit = ?events.paddle_hit,
                        point = ?events.point,
                        "tick events"
                    );
                }
                self.last_events = events;
                if let MatchStatus::Concluded { winner } = current.status {
                    info!(?winner, "game over");
                    self.state = GameState::GameOver;
                }
            }
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let (court_width, court_height) = (self.config.court.width, self.config.court.height);
        match &self.current {
            Some(current) => RenderSnapshot {
                state: self.state,
                mode: Some(current.mode),
                selected_mode: self.selected_mode,
                court_width,
                court_height,
                paddles: current.paddles.iter().map(|p| p.rect()).collect(),
                ball: Some(current.ball.rect()),
                score_left: current.score.left,
                score_right: current.score.right,
                winning_score: current.winning_score,
                difficulty: self.config.ai.difficulty,
                winner: current.winner(),
                point_scored: match current.status {
                    MatchStatus::PointScored(side) => Some(side),
                    _ => None,
                },
            },
            None => RenderSnapshot {
                state: self.state,
                mode: None,
                selected_mode: self.selected_mode,
                court_width,
                court_height,
                paddles: Vec::new(),
                ball: None,
                score_left: 0,
                score_right: 0,
                winning_score: self.config.game.winning_score,
                difficulty: self.config.ai.difficulty,
                winner: None,
                point_scored: None,
            },
        }
    }

    fn start_match(&mut self) {
        self.current = Some(MatchState::new(self.selected_mode, &self.config, &mut self.rng));
        self.state = GameState::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector2;
    use assert_matches::assert_matches;

    const DT: f32 = 1.0 / 60.0;

    fn new_controller() -> GameController {
        GameController::with_rng(Config::default(), StdRng::seed_from_u64(42))
    }

    fn press(controller: &mut GameController, action: Action) -> ControlFlow {
        let flow = controller.handle_input(&InputSnapshot::new().with(action));
        controller.handle_input(&InputSnapshot::new());
        flow
    }

    #[test]
    fn test_starts_in_menu() {
        let controller = new_controller();
        assert_eq!(controller.state(), GameState::Menu);
        assert_eq!(controller.selected_mode(), GameMode::Single);
        assert!(controller.match_state().is_none());

        let snapshot = controller.snapshot();
        assert!(snapshot.paddles.is_empty());
        assert!(snapshot.ball.is_none());
        assert_eq!(snapshot.mode, None);
    }

    #[test]
    fn test_toggle_twice_then_confirm_starts_doubles() {
        let mut controller = new_controller();
        press(&mut controller, Action::ToggleMode);
        press(&mut controller, Action::ToggleMode);
        assert_eq!(controller.selected_mode(), GameMode::Doubles);

        press(&mut controller, Action::Confirm);

        assert_eq!(controller.state(), GameState::Playing);
        let current = controller.match_state().unwrap();
        assert_eq!(current.mode, GameMode::Doubles);
        assert_eq!(current.paddles.len(), 4);
        assert_eq!(controller.snapshot().paddles.len(), 4);
    }

    #[test]
    fn test_toggle_wraps_around() {
        let mut controller = new_controller();
        for _ in 0..3 {
            press(&mut controller, Action::ToggleMode);
        }
        assert_eq!(controller.selected_mode(), GameMode::Single);
    }

    #[test]
    fn test_held_toggle_cycles_once() {
        let mut controller = new_controller();
        let held = InputSnapshot::new().with(Action::ToggleMode);
        for _ in 0..10 {
            controller.handle_input(&held);
        }
        assert_eq!(controller.selected_mode(), GameMode::TwoPlayer);
    }

    #[test]
    fn test_tick_in_menu_is_noop() {
        let mut controller = new_controller();
        controller.tick(DT);
        assert_eq!(controller.state(), GameState::Menu);
        assert!(controller.match_state().is_none());
    }

    #[test]
    fn test_toggle_ignored_while_playing() {
        let mut controller = new_controller();
        press(&mut controller, Action::Confirm);
        press(&mut controller, Action::ToggleMode);
        assert_eq!(controller.selected_mode(), GameMode::Single);
        assert_eq!(controller.match_state().unwrap().mode, GameMode::Single);
    }

    #[test]
    fn test_held_movement_reaches_match() {
        let mut controller = new_controller();
        press(&mut controller, Action::Confirm);
        let start = controller.match_state().unwrap().paddles[0].position.y;

        controller.handle_input(&InputSnapshot::new().with(Action::P1Down));
        controller.tick(DT);

        assert!(controller.match_state().unwrap().paddles[0].position.y > start);
    }

    #[test]
    fn test_invalid_dt_is_zero() {
        let mut controller = new_controller();
        press(&mut controller, Action::Confirm);
        let ball = controller.match_state().unwrap().ball.position;

        controller.tick(f32::NAN);
        controller.tick(f32::INFINITY);
        controller.tick(-1.0);

        let current = controller.match_state().unwrap();
        assert_eq!(current.ball.position, ball);
        assert!(current.ball.position.x.is_finite());
    }

    #[test]
    fn test_concluded_match_goes_to_game_over_then_menu() {
        let mut controller = new_controller();
        press(&mut controller, Action::Confirm);

        {
            let current = controller.current.as_mut().unwrap();
            current.score.left = current.winning_score - 1;
            current.ball.position = Vector2::new(795.0, 100.0);
            current.ball.velocity = Vector2::new(300.0, 0.0);
        }
        controller.tick(DT);

        assert_eq!(controller.state(), GameState::GameOver);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.winner, Some(Side::Left));
        assert_eq!(snapshot.score_left, snapshot.winning_score);

        // Frozen until confirmed
        controller.tick(DT);
        assert_eq!(controller.state(), GameState::GameOver);

        press(&mut controller, Action::Confirm);
        assert_eq!(controller.state(), GameState::Menu);
        assert!(controller.match_state().is_none());
    }

    #[test]
    fn test_tick_reports_match_events() {
        let mut controller = new_controller();
        press(&mut controller, Action::Confirm);
        controller.tick(0.0);
        assert!(!controller.last_events().any());

        {
            let current = controller.current.as_mut().unwrap();
            current.ball.position = Vector2::new(795.0, 100.0);
            current.ball.velocity = Vector2::new(300.0, 0.0);
        }
        controller.tick(DT);

        let events = controller.last_events();
        assert_eq!(events.point, Some(Side::Left));
        assert!(events.any());
        assert_eq!(controller.snapshot().point_scored, Some(Side::Left));

        // Cleared by the next tick
        controller.tick(0.0);
        assert_eq!(controller.last_events(), TickEvents::default());
    }

    #[test]
    fn test_no_events_outside_play() {
        let mut controller = new_controller();
        controller.tick(DT);
        assert_eq!(controller.last_events(), TickEvents::default());
    }

    #[test]
    fn test_quit_from_every_state() {
        let mut controller = new_controller();
        assert_matches!(
            controller.handle_input(&InputSnapshot::new().with(Action::Quit)),
            ControlFlow::Quit
        );

        let mut controller = new_controller();
        press(&mut controller, Action::Confirm);
        assert_eq!(press(&mut controller, Action::Quit), ControlFlow::Quit);

        let mut controller = new_controller();
        controller.state = GameState::GameOver;
        assert_eq!(press(&mut controller, Action::Quit), ControlFlow::Quit);
    }

    #[test]
    fn test_movement_keys_do_not_leave_menu() {
        let mut controller = new_controller();
        let flow = press(&mut controller, Action::P1Up);
        assert_eq!(flow, ControlFlow::Continue);
        assert_eq!(controller.state(), GameState::Menu);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = new_controller();
        let mut b = new_controller();
        for controller in [&mut a, &mut b] {
            press(controller, Action::Confirm);
            for _ in 0..120 {
                controller.tick(DT);
            }
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_seed_from_config() {
        let mut config = Config::default();
        config.game.seed = Some(5);
        let mut a = GameController::new(config.clone());
        let mut b = GameController::new(config);
        press(&mut a, Action::Confirm);
        press(&mut b, Action::Confirm);
        assert_eq!(
            a.match_state().unwrap().ball.velocity,
            b.match_state().unwrap().ball.velocity
        );
    }
}
