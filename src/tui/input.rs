// Input handling - per-key press/repeat behavior
//
// Terminals differ in whether they report key releases. Action keys (view
// switches, refresh, sort) fire once per press and are debounced when no
// release arrives; movement keys (page, feed selection) auto-repeat while held.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two firings of an action key without a release between
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves when held down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    Action,

    /// Fire on press, then repeat after `initial_delay` every `interval`
    Repeat {
        initial_delay: Duration,
        interval: Duration,
    },
}

impl KeyBehavior {
    /// Arrow keys
    pub fn movement() -> Self {
        Self::Repeat {
            initial_delay: Duration::from_millis(400),
            interval: Duration::from_millis(60),
        }
    }

    /// PageUp/PageDown
    pub fn paging() -> Self {
        Self::Repeat {
            initial_delay: Duration::from_millis(300),
            interval: Duration::from_millis(40),
        }
    }
}

#[derive(Debug, Default)]
struct Held {
    since: Option<Instant>,
    last_fired: Option<Instant>,
}

/// Decides whether a key event should trigger its action
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    fn behavior(&self, key: KeyCode) -> KeyBehavior {
        match key {
            // Typing into the search box must never be swallowed
            KeyCode::Char(_) if !self.behaviors.contains_key(&key) => KeyBehavior::Repeat {
                initial_delay: Duration::ZERO,
                interval: Duration::ZERO,
            },
            _ => self
                .behaviors
                .get(&key)
                .copied()
                .unwrap_or(KeyBehavior::Action),
        }
    }

    /// Returns true if the press should trigger the key's action
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self.behavior(key);
        let held = self.held.entry(key).or_default();

        let (Some(since), Some(last)) = (held.since, held.last_fired) else {
            // Fresh press
            held.since = Some(now);
            held.last_fired = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Action => now.duration_since(last) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeat {
                initial_delay,
                interval,
            } => now.duration_since(since) >= initial_delay && now.duration_since(last) >= interval,
        };
        if fire {
            held.last_fired = Some(now);
        }
        fire
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Default bindings for the dashboard
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure(
            &[KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right],
            KeyBehavior::movement(),
        );
        handler.configure(&[KeyCode::PageUp, KeyCode::PageDown], KeyBehavior::paging());
        handler.configure(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Home,
                KeyCode::End,
                KeyCode::F(1),
                KeyCode::F(2),
                KeyCode::F(3),
                KeyCode::F(4),
                KeyCode::F(5),
            ],
            KeyBehavior::Action,
        );
        // Single-letter commands outside search mode
        handler.configure(
            &['q', 'r', 'x', 'o', 'O', 's', 'S', 'c', 'm', 't', 'y', '/', '1', '2', '3', '4', 'j', 'k']
                .map(KeyCode::Char),
            KeyBehavior::Action,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_fires_once_until_released() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('r'), t0));
        assert!(!handler.press_at(KeyCode::Char('r'), t0 + Duration::from_millis(20)));

        handler.release(KeyCode::Char('r'));
        assert!(handler.press_at(KeyCode::Char('r'), t0 + Duration::from_millis(30)));
    }

    #[test]
    fn action_debounces_without_release() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Tab, t0));
        assert!(!handler.press_at(KeyCode::Tab, t0 + Duration::from_millis(100)));
        assert!(handler.press_at(KeyCode::Tab, t0 + Duration::from_millis(200)));
    }

    #[test]
    fn movement_repeats_after_delay() {
        let mut handler = InputHandler::new();
        handler.configure(
            &[KeyCode::Down],
            KeyBehavior::Repeat {
                initial_delay: Duration::from_millis(100),
                interval: Duration::from_millis(50),
            },
        );
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Down, t0));
        assert!(!handler.press_at(KeyCode::Down, t0 + Duration::from_millis(10)));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(110)));
        assert!(!handler.press_at(KeyCode::Down, t0 + Duration::from_millis(120)));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(170)));
    }

    #[test]
    fn unconfigured_letters_always_fire() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();
        // "ll" typed quickly into the search box
        assert!(handler.press_at(KeyCode::Char('l'), t0));
        assert!(handler.press_at(KeyCode::Char('l'), t0 + Duration::from_millis(5)));
    }
}
