// Keyboard polling: crossterm key events -> held keys -> InputSnapshot

use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Action, InputSnapshot};

/// How long a key counts as held after its last press when the terminal
/// does not report releases. Covers the gap before key auto-repeat kicks in.
pub const HOLD_WINDOW: Duration = Duration::from_millis(200);

/// Map a key to its action; `None` for unbound keys
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Action::P1Up,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::P1Down,
        KeyCode::Char('a') | KeyCode::Char('A') => Action::P1Left,
        KeyCode::Char('d') | KeyCode::Char('D') => Action::P1Right,
        KeyCode::Up => Action::P2Up,
        KeyCode::Down => Action::P2Down,
        KeyCode::Left => Action::P2Left,
        KeyCode::Right => Action::P2Right,
        KeyCode::Char(' ') | KeyCode::Tab => Action::ToggleMode,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Tracks which actions are held down between frames
///
/// With release reporting a key is held from its press until its release. Without it,
/// terminals only send presses (and auto-repeats), so a key stays held for
/// [`HOLD_WINDOW`] after the last one.
#[derive(Debug)]
pub struct KeyTracker {
    reports_release: bool,
    hold_window: Duration,
    last_seen: HashMap<Action, Instant>,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            hold_window: HOLD_WINDOW,
            last_seen: HashMap::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(action) = action_for(&key) else {
            return;
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(action, now);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&action);
            }
        }
    }

    /// Actions held at `now`
    pub fn snapshot(&mut self, now: Instant) -> InputSnapshot {
        if !self.reports_release {
            let window = self.hold_window;
            self.last_seen
                .retain(|_, seen| now.saturating_duration_since(*seen) < window);
        }
        self.last_seen.keys().copied().collect()
    }

    /// Drain every pending terminal event without blocking, then snapshot
    pub fn poll(&mut self) -> io::Result<InputSnapshot> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(self.snapshot(Instant::now()))
    }
}
