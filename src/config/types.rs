use serde::Deserialize;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keys: KeyBindings,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks so the buttons can be pressed (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Extra character keys for the two actions. Arrow keys are always bound.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_increment_keys")]
    pub increment: Vec<String>,
    #[serde(default = "default_decrement_keys")]
    pub decrement: Vec<String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_increment_keys() -> Vec<String> {
    vec!["+".to_string(), "=".to_string(), "k".to_string()]
}

fn default_decrement_keys() -> Vec<String> {
    vec!["-".to_string(), "_".to_string(), "j".to_string()]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            increment: default_increment_keys(),
            decrement: default_decrement_keys(),
        }
    }
}

impl KeyBindings {
    pub fn is_increment(&self, ch: char) -> bool {
        Self::bound(&self.increment, ch)
    }

    pub fn is_decrement(&self, ch: char) -> bool {
        Self::bound(&self.decrement, ch)
    }

    fn bound(keys: &[String], ch: char) -> bool {
        keys.iter().any(|key| single_char(key) == Some(ch))
    }
}

/// The key's only character, or `None` if it is not exactly one character long.
pub(crate) fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
