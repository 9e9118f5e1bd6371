// Logical input actions, independent of the keyboard that produced them

/// Every action the game understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    P1Up,
    P1Down,
    P1Left,
    P1Right,
    P2Up,
    P2Down,
    P2Left,
    P2Right,
    ToggleMode,
    Confirm,
    Quit,
}

/// The human players
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    fn actions(self) -> [Action; 4] {
        match self {
            Player::One => [Action::P1Up, Action::P1Down, Action::P1Left, Action::P1Right],
            Player::Two => [Action::P2Up, Action::P2Down, Action::P2Left, Action::P2Right],
        }
    }
}

impl Action {
    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// The set of actions held down during one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    bits: u16,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: Action) {
        self.bits |= action.bit();
    }

    pub fn with(mut self, action: Action) -> Self {
        self.insert(action);
        self
    }

    pub fn contains(&self, action: Action) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Held now but not in `previous`
    pub fn just_pressed(&self, previous: &InputSnapshot, action: Action) -> bool {
        self.contains(action) && !previous.contains(action)
    }

    /// Movement direction for `player` as (-1, 0, 1) per axis
    ///
    /// Opposite keys held together cancel out.
    pub fn direction(&self, player: Player) -> (f32, f32) {
        let [up, down, left, right] = player.actions();
        let axis = |neg: Action, pos: Action| match (self.contains(neg), self.contains(pos)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        (axis(left, right), axis(up, down))
    }
}

impl FromIterator<Action> for InputSnapshot {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut snapshot = InputSnapshot::new();
        for action in iter {
            snapshot.insert(action);
        }
        snapshot
    }
}
