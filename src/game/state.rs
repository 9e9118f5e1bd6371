use rand::Rng;
use tracing::{debug, info};

use super::ball::Ball;
use super::input::{InputSnapshot, Player};
use super::paddle::Paddle;
use crate::ai::AIPlayer;
use crate::config::Config;
use crate::geometry::Vector2;

/// Court side / team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player 1 against one AI
    Single,
    /// Player 1 against player 2 on the same keyboard
    TwoPlayer,
    /// Players 1 and 2 against two AIs, four paddles with half-court movement
    Doubles,
}

impl GameMode {
    /// Next mode in menu order (wraps around)
    pub fn next(self) -> GameMode {
        match self {
            GameMode::Single => GameMode::TwoPlayer,
            GameMode::TwoPlayer => GameMode::Doubles,
            GameMode::Doubles => GameMode::Single,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            GameMode::Single => "1 Player vs AI",
            GameMode::TwoPlayer => "2 Players",
            GameMode::Doubles => "Doubles (2 Players vs 2 AI)",
        }
    }

    pub fn paddle_count(&self) -> usize {
        match self {
            GameMode::Single | GameMode::TwoPlayer => 2,
            GameMode::Doubles => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Where the match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Ongoing,
    /// A point was scored on the last tick; play resumes on the next one
    PointScored(Side),
    /// Terminal: a side reached the winning score
    Concluded { winner: Side },
}

/// What happened during one tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickEvents {
    pub wall_bounce: bool,
    /// Slot of the paddle the ball bounced off
    pub paddle_hit: Option<usize>,
    /// Side that scored
    pub point: Option<Side>,
}

impl TickEvents {
    pub fn any(&self) -> bool {
        self.wall_bounce || self.paddle_hit.is_some() || self.point.is_some()
    }
}

/// One match: paddles, ball, AI players and the score
///
/// Paddle slots are fixed per mode, left team first and top paddle first:
/// single `[P1, AI]`, two-player `[P1, P2]`, doubles `[P1, P2, AI top, AI bottom]`.
/// Collisions are checked left to right, then top to bottom by current position, and
/// only the first hit per tick applies.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub mode: GameMode,
    pub paddles: Vec<Paddle>,
    pub humans: Vec<(Player, usize)>,
    pub ais: Vec<AIPlayer>,
    pub ball: Ball,
    pub score: Score,
    pub winning_score: u32,
    pub status: MatchStatus,
    pub court_width: f32,
    pub court_height: f32,
}

impl MatchState {
    /// Set up paddles for `mode` and serve the first ball in a random direction
    pub fn new<R: Rng + ?Sized>(mode: GameMode, config: &Config, rng: &mut R) -> Self {
        let width = config.court.width;
        let height = config.court.height;
        let pc = &config.paddle;

        let mut ais = Vec::new();
        let (paddles, humans) = match mode {
            GameMode::Single | GameMode::TwoPlayer => {
                let y = (height - pc.height) / 2.0;
                let y_bounds = (0.0, height - pc.height);
                let left_x = pc.offset;
                let right_x = width - pc.offset - pc.width;

                let left = Paddle::new(
                    Vector2::new(left_x, y),
                    pc.width,
                    pc.height,
                    pc.speed,
                    (left_x, left_x),
                    y_bounds,
                );

                let (right_speed, humans) = if mode == GameMode::Single {
                    let ai = AIPlayer::new(1, Side::Right, config);
                    let speed = ai.speed;
                    ais.push(ai);
                    (speed, vec![(Player::One, 0)])
                } else {
                    (pc.speed, vec![(Player::One, 0), (Player::Two, 1)])
                };

                let right = Paddle::new(
                    Vector2::new(right_x, y),
                    pc.width,
                    pc.height,
                    right_speed,
                    (right_x, right_x),
                    y_bounds,
                );

                (vec![left, right], humans)
            }
            GameMode::Doubles => {
                let h = pc.doubles_height;
                let y_bounds = (0.0, height - h);
                let top_y = height / 4.0 - h / 2.0;
                let bottom_y = height * 3.0 / 4.0 - h / 2.0;
                let left_x = pc.offset;
                let right_x = width - pc.offset - pc.width;
                let left_bounds = (0.0, width / 2.0 - pc.width);
                let right_bounds = (width / 2.0, width - pc.width);

                let top_ai = AIPlayer::new(2, Side::Right, config).with_team(3, (0.0, height / 2.0));
                let bottom_ai =
                    AIPlayer::new(3, Side::Right, config).with_team(2, (height / 2.0, height));
                let ai_speed = top_ai.speed;
                ais.push(top_ai);
                ais.push(bottom_ai);

                let paddle = |x: f32, y: f32, speed: f32, x_bounds: (f32, f32)| {
                    Paddle::new(Vector2::new(x, y), pc.width, h, speed, x_bounds, y_bounds)
                };

                (
                    vec![
                        paddle(left_x, top_y, pc.speed, left_bounds),
                        paddle(left_x, bottom_y, pc.speed, left_bounds),
                        paddle(right_x, top_y, ai_speed, right_bounds),
                        paddle(right_x, bottom_y, ai_speed, right_bounds),
                    ],
                    vec![(Player::One, 0), (Player::Two, 1)],
                )
            }
        };

        let mut ball = Ball::new(Vector2::new(width / 2.0, height / 2.0), &config.ball);
        ball.reset(None, rng);

        info!(?mode, paddles = paddles.len(), "match started");

        Self {
            mode,
            paddles,
            humans,
            ais,
            ball,
            score: Score::default(),
            winning_score: config.game.winning_score,
            status: MatchStatus::Ongoing,
            court_width: width,
            court_height: height,
        }
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.status, MatchStatus::Concluded { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            MatchStatus::Concluded { winner } => Some(winner),
            _ => None,
        }
    }

    /// Advance the match by `dt` seconds
    ///
    /// Order: human intents, AI intents, paddle motion, ball motion, wall bounce, paddle
    /// bounce, miss check. A concluded match does not move.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        rng: &mut R,
    ) -> TickEvents {
        let mut events = TickEvents::default();
        if self.is_concluded() {
            return events;
        }
        self.status = MatchStatus::Ongoing;

        for &(player, index) in &self.humans {
            let paddle = &mut self.paddles[index];
            let (dx, dy) = input.direction(player);
            let dx = if paddle.can_move_horizontally() { dx } else { 0.0 };
            let intent = Vector2::new(dx, dy) * paddle.max_speed;
            paddle.set_velocity(intent);
        }

        let intents: Vec<(usize, Vector2)> = self
            .ais
            .iter()
            .map(|ai| {
                let own = &self.paddles[ai.paddle_index];
                let teammate = ai.teammate_index.map(|i| &self.paddles[i]);
                (ai.paddle_index, ai.decide(&self.ball, own, teammate, dt))
            })
            .collect();
        for (index, intent) in intents {
            self.paddles[index].set_velocity(intent);
        }

        for paddle in &mut self.paddles {
            paddle.update(dt);
        }

        self.ball.advance(dt);
        events.wall_bounce = self.ball.resolve_wall_collision(self.court_height);

        // Left to right, then top to bottom, by where the paddles stand now
        let mut order: Vec<usize> = (0..self.paddles.len()).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (self.paddles[a].position, self.paddles[b].position);
            a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
        });
        for index in order {
            if self.ball.resolve_paddle_collision(&self.paddles[index]) {
                events.paddle_hit = Some(index);
                break;
            }
        }

        let ball_rect = self.ball.rect();
        let scorer = if ball_rect.left() <= 0.0 {
            Some(Side::Right)
        } else if ball_rect.right() >= self.court_width {
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = scorer {
            self.score_point(side, rng);
            events.point = Some(side);
        }

        events
    }

    fn score_point<R: Rng + ?Sized>(&mut self, scorer: Side, rng: &mut R) {
        self.score.increment(scorer);
        debug!(?scorer, left = self.score.left, right = self.score.right, "point scored");

        if self.score.get(scorer) >= self.winning_score {
            self.status = MatchStatus::Concluded { winner: scorer };
            info!(winner = ?scorer, left = self.score.left, right = self.score.right, "match over");
            return;
        }

        self.ball.reset(Some(scorer.opposite()), rng);
        for paddle in &mut self.paddles {
            paddle.reset();
        }
        for ai in &mut self.ais {
            ai.reroll_strategy(rng);
            debug!(
                paddle = ai.paddle_index,
                strategy = ai.strategy.display_name(),
                "AI strategy"
            );
        }
        self.status = MatchStatus::PointScored(scorer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AIStrategy;
    use crate::game::input::Action;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    const DT: f32 = 1.0 / 60.0;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    fn new_match(mode: GameMode) -> (MatchState, StdRng) {
        let mut rng = rng();
        let state = MatchState::new(mode, &Config::default(), &mut rng);
        (state, rng)
    }

    fn no_input() -> InputSnapshot {
        InputSnapshot::new()
    }

    /// Park the ball somewhere harmless, drifting slowly right
    fn park_ball(state: &mut MatchState) {
        state.ball.position = Vector2::new(400.0, 300.0);
        state.ball.velocity = Vector2::new(1.0, 0.0);
    }

    #[test_case(GameMode::Single, 2, 1 ; "single")]
    #[test_case(GameMode::TwoPlayer, 2, 0 ; "two player")]
    #[test_case(GameMode::Doubles, 4, 2 ; "doubles")]
    fn test_layout(mode: GameMode, paddles: usize, ais: usize) {
        let (state, _) = new_match(mode);
        assert_eq!(state.paddles.len(), paddles);
        assert_eq!(state.paddles.len(), mode.paddle_count());
        assert_eq!(state.ais.len(), ais);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.status, MatchStatus::Ongoing);
        assert_eq!(state.ball.position, Vector2::new(400.0, 300.0));
    }

    #[test]
    fn test_standard_paddles_are_pinned() {
        let (state, _) = new_match(GameMode::TwoPlayer);
        assert_eq!(state.paddles[0].position, Vector2::new(50.0, 250.0));
        assert_eq!(state.paddles[1].position, Vector2::new(740.0, 250.0));
        assert!(state.paddles.iter().all(|p| !p.can_move_horizontally()));
    }

    #[test]
    fn test_doubles_paddles_confined_to_team_half() {
        let (state, _) = new_match(GameMode::Doubles);
        for paddle in &state.paddles[..2] {
            assert_eq!(paddle.x_bounds, (0.0, 390.0));
            assert_eq!(paddle.height, 80.0);
        }
        for paddle in &state.paddles[2..] {
            assert_eq!(paddle.x_bounds, (400.0, 790.0));
        }
        // Top paddle above bottom paddle on each team
        assert!(state.paddles[0].position.y < state.paddles[1].position.y);
        assert!(state.paddles[2].position.y < state.paddles[3].position.y);
        assert_eq!(state.ais[0].zone(), Some((0.0, 300.0)));
        assert_eq!(state.ais[1].zone(), Some((300.0, 600.0)));
    }

    #[test]
    fn test_human_input_moves_paddle() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        park_ball(&mut state);
        let input: InputSnapshot = [Action::P1Up, Action::P2Down].into_iter().collect();

        state.tick(DT, &input, &mut rng);

        assert!(state.paddles[0].position.y < 250.0);
        assert!(state.paddles[1].position.y > 250.0);
    }

    #[test]
    fn test_releasing_keys_stops_paddle() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        park_ball(&mut state);
        state.tick(DT, &InputSnapshot::new().with(Action::P1Down), &mut rng);
        let y = state.paddles[0].position.y;

        state.tick(DT, &no_input(), &mut rng);
        assert_eq!(state.paddles[0].velocity, Vector2::ZERO);
        assert_eq!(state.paddles[0].position.y, y);
    }

    #[test]
    fn test_horizontal_input_ignored_outside_doubles() {
        let (mut state, mut rng) = new_match(GameMode::Single);
        park_ball(&mut state);
        state.tick(DT, &InputSnapshot::new().with(Action::P1Right), &mut rng);
        assert_eq!(state.paddles[0].position.x, 50.0);
    }

    #[test]
    fn test_doubles_humans_move_in_two_axes() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        park_ball(&mut state);
        let start_top = state.paddles[0].position;
        let start_bottom = state.paddles[1].position;
        let input: InputSnapshot = [Action::P1Up, Action::P1Right, Action::P2Down, Action::P2Left]
            .into_iter()
            .collect();

        state.tick(DT, &input, &mut rng);

        assert!(state.paddles[0].position.y < start_top.y);
        assert!(state.paddles[0].position.x > start_top.x);
        assert!(state.paddles[1].position.y > start_bottom.y);
        assert!(state.paddles[1].position.x < start_bottom.x);
    }

    #[test]
    fn test_doubles_human_cannot_cross_centerline() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        let input = InputSnapshot::new().with(Action::P1Right);
        for _ in 0..200 {
            park_ball(&mut state);
            state.tick(DT, &input, &mut rng);
        }
        assert_eq!(state.paddles[0].position.x, 390.0);
        assert!(state.paddles[0].rect().right() <= 400.0);
    }

    #[test]
    fn test_ai_tracks_ball_in_single_mode() {
        let (mut state, mut rng) = new_match(GameMode::Single);
        state.ball.position = Vector2::new(400.0, 100.0);
        state.ball.velocity = Vector2::new(300.0, 0.0);

        state.tick(DT, &no_input(), &mut rng);

        assert!(state.paddles[1].velocity.y < 0.0);
        assert!(state.paddles[1].position.y < 250.0);
    }

    #[test]
    fn test_no_ai_in_two_player_mode() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.ball.position = Vector2::new(400.0, 100.0);
        state.ball.velocity = Vector2::new(300.0, 0.0);

        state.tick(DT, &no_input(), &mut rng);

        assert_eq!(state.paddles[1].position.y, 250.0);
    }

    #[test]
    fn test_doubles_ais_move_in_two_axes() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        for ai in &mut state.ais {
            ai.strategy = AIStrategy::Aggressive;
        }
        state.ball.position = Vector2::new(500.0, 100.0);
        state.ball.velocity = Vector2::new(300.0, 0.0);

        state.tick(DT, &no_input(), &mut rng);

        let ai_paddles = &state.paddles[2..];
        assert!(ai_paddles.iter().any(|p| p.velocity.x != 0.0));
        assert!(ai_paddles.iter().any(|p| p.velocity.y != 0.0));
    }

    #[test]
    fn test_ball_moves_each_tick() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        let start = state.ball.position;
        state.tick(DT, &no_input(), &mut rng);
        assert_ne!(state.ball.position, start);
    }

    #[test]
    fn test_left_miss_scores_for_right() {
        let (mut state, mut rng) = new_match(GameMode::Single);
        state.ball.position = Vector2::new(10.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);

        let events = state.tick(DT, &no_input(), &mut rng);

        assert_eq!(events.point, Some(Side::Right));
        assert_eq!(state.score, Score { left: 0, right: 1 });
        assert_eq!(state.status, MatchStatus::PointScored(Side::Right));
        // Re-served from the center toward the side that conceded
        assert_eq!(state.ball.position, Vector2::new(400.0, 300.0));
        assert_eq!(state.ball.speed, state.ball.initial_speed());
        assert!(state.ball.velocity.x < 0.0);
    }

    #[test]
    fn test_right_miss_scores_for_left() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.ball.position = Vector2::new(795.0, 100.0);
        state.ball.velocity = Vector2::new(300.0, 0.0);

        let events = state.tick(DT, &no_input(), &mut rng);

        assert_eq!(events.point, Some(Side::Left));
        assert_eq!(state.score, Score { left: 1, right: 0 });
        assert!(state.ball.velocity.x > 0.0);
    }

    #[test]
    fn test_point_status_lasts_one_tick() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.ball.position = Vector2::new(4.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);
        state.tick(DT, &no_input(), &mut rng);
        assert_matches!(state.status, MatchStatus::PointScored(Side::Right));

        state.tick(DT, &no_input(), &mut rng);
        assert_eq!(state.status, MatchStatus::Ongoing);
    }

    #[test]
    fn test_paddles_return_home_after_point() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.paddles[0].position.y = 10.0;
        state.paddles[1].position.y = 400.0;
        state.ball.position = Vector2::new(4.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);

        state.tick(DT, &no_input(), &mut rng);

        assert_eq!(state.paddles[0].position.y, 250.0);
        assert_eq!(state.paddles[1].position.y, 250.0);
    }

    #[test]
    fn test_strategies_rerolled_after_point() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        state.ball.position = Vector2::new(795.0, 300.0);
        state.ball.velocity = Vector2::new(300.0, 0.0);

        let mut expected_rng = rng.clone();
        // Same draws the match makes: serve angle first, then one strategy per AI
        let mut ball = state.ball.clone();
        ball.reset(Some(Side::Right), &mut expected_rng);
        let expected: Vec<_> = (0..2).map(|_| AIStrategy::random(&mut expected_rng)).collect();

        state.tick(DT, &no_input(), &mut rng);

        let actual: Vec<_> = state.ais.iter().map(|ai| ai.strategy).collect();
        assert_eq!(actual, expected);
        assert!(actual.iter().all(|s| AIStrategy::ALL.contains(s)));
    }

    #[test]
    fn test_paddle_hit_reported() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.ball.position = Vector2::new(66.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);

        let events = state.tick(DT, &no_input(), &mut rng);

        assert_eq!(events.paddle_hit, Some(0));
        assert!(events.any());
        assert!(state.ball.velocity.x > 0.0);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_stacked_paddles_hit_only_once() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        // Stack both left paddles on the same spot
        state.paddles[0].position = Vector2::new(200.0, 260.0);
        state.paddles[1].position = Vector2::new(200.0, 260.0);
        state.ball.position = Vector2::new(216.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);

        let events = state.tick(DT, &no_input(), &mut rng);

        assert_eq!(events.paddle_hit, Some(0));
        assert_eq!(state.ball.speed, 330.0);
    }

    #[test]
    fn test_higher_paddle_wins_overlap() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        // P2 has moved above P1 and both cover the ball
        state.paddles[0].position = Vector2::new(200.0, 270.0);
        state.paddles[1].position = Vector2::new(200.0, 230.0);
        state.ball.position = Vector2::new(216.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);

        let events = state.tick(DT, &no_input(), &mut rng);

        assert_eq!(events.paddle_hit, Some(1));
        // Hit below P2's center (270), so it deflects downward
        assert!(state.ball.velocity.y > 0.0);
        assert_eq!(state.ball.speed, 330.0);
    }

    #[test]
    fn test_ball_speed_stays_under_cap() {
        let (mut state, mut rng) = new_match(GameMode::Doubles);
        let cap = state.ball.max_speed();
        for _ in 0..5_000 {
            state.tick(DT, &no_input(), &mut rng);
            if state.is_concluded() {
                break;
            }
            assert!(state.ball.speed <= cap);
            assert!(state.ball.velocity.length() <= cap + 1e-3);
        }
    }

    #[test]
    fn test_wall_bounce_reported() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.ball.position = Vector2::new(400.0, 6.0);
        state.ball.velocity = Vector2::new(100.0, -300.0);

        let events = state.tick(DT, &no_input(), &mut rng);

        assert!(events.wall_bounce);
        assert!(state.ball.velocity.y > 0.0);
        assert_eq!(state.ball.velocity.x, 100.0);
    }

    #[test]
    fn test_match_concludes_at_winning_score() {
        let (mut state, mut rng) = new_match(GameMode::TwoPlayer);
        state.score.left = state.winning_score - 1;
        state.ball.position = Vector2::new(795.0, 300.0);
        state.ball.velocity = Vector2::new(300.0, 0.0);

        state.tick(DT, &no_input(), &mut rng);

        assert_matches!(state.status, MatchStatus::Concluded { winner: Side::Left });
        assert_eq!(state.winner(), Some(Side::Left));
        assert_eq!(state.score.left, state.winning_score);
        assert!(state.score.right < state.winning_score);
    }

    #[test]
    fn test_concluded_match_is_frozen() {
        let (mut state, mut rng) = new_match(GameMode::Single);
        state.score.right = state.winning_score - 1;
        state.ball.position = Vector2::new(4.0, 300.0);
        state.ball.velocity = Vector2::new(-300.0, 0.0);
        state.tick(DT, &no_input(), &mut rng);
        assert!(state.is_concluded());

        let ball = state.ball.position;
        let paddle = state.paddles[0].position;
        let events = state.tick(DT, &InputSnapshot::new().with(Action::P1Up), &mut rng);

        assert!(!events.any());
        assert_eq!(state.ball.position, ball);
        assert_eq!(state.paddles[0].position, paddle);
        assert_eq!(state.score.right, state.winning_score);
    }

    #[test]
    fn test_score_invariant_over_long_run() {
        let mut config = Config::default();
        config.game.winning_score = 3;
        let mut rng = rng();
        let mut state = MatchState::new(GameMode::Doubles, &config, &mut rng);

        // Humans stand still; the AIs eventually win
        for _ in 0..200_000 {
            state.tick(DT, &no_input(), &mut rng);
            if state.is_concluded() {
                break;
            }
            assert!(state.score.left < 3 && state.score.right < 3);
        }

        assert!(state.is_concluded());
        let at_target = [state.score.left, state.score.right]
            .iter()
            .filter(|&&s| s == 3)
            .count();
        assert_eq!(at_target, 1);
    }

    #[test]
    fn test_mode_cycle() {
        assert_eq!(GameMode::Single.next(), GameMode::TwoPlayer);
        assert_eq!(GameMode::TwoPlayer.next(), GameMode::Doubles);
        assert_eq!(GameMode::Doubles.next(), GameMode::Single);
    }
}
