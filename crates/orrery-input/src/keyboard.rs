//! Key events and the key → [`Command`] binding table.
//!
//! Keys are matched by their logical value (the character produced or a
//! named special key) because the bindings are mnemonic (`+`, `-`, `r`).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::{Command, PanDirection};

/// Special keys that do not produce a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// A logical key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyInput {
    Char(char),
    Named(NamedKey),
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyInput::Char(' ') => f.write_str("Space"),
            KeyInput::Char(c) => write!(f, "{c}"),
            KeyInput::Named(named) => write!(f, "{named:?}"),
        }
    }
}

/// Error for an unrecognised key name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown key `{0}`")]
pub struct UnknownKey(pub String);

impl FromStr for KeyInput {
    type Err = UnknownKey;

    /// Accepts a single character, `Space`, `Escape`, or an arrow key name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Space" => KeyInput::Char(' '),
            "Escape" => KeyInput::Named(NamedKey::Escape),
            "ArrowLeft" => KeyInput::Named(NamedKey::ArrowLeft),
            "ArrowRight" => KeyInput::Named(NamedKey::ArrowRight),
            "ArrowUp" => KeyInput::Named(NamedKey::ArrowUp),
            "ArrowDown" => KeyInput::Named(NamedKey::ArrowDown),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyInput::Char(c),
                    _ => return Err(UnknownKey(s.to_string())),
                }
            }
        };
        Ok(key)
    }
}

/// Maps keys to commands.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyBindings {
    bindings: HashMap<KeyInput, Command>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for (key, command) in [
            (KeyInput::Char('+'), Command::ZoomIn),
            (KeyInput::Char('='), Command::ZoomIn),
            (KeyInput::Char('-'), Command::ZoomOut),
            (KeyInput::Char('r'), Command::Reset),
            (KeyInput::Char('R'), Command::Reset),
            (KeyInput::Char(' '), Command::TogglePause),
            (KeyInput::Char(']'), Command::SpeedUp),
            (KeyInput::Char('['), Command::SpeedDown),
            (KeyInput::Char('o'), Command::ToggleOrbits),
            (KeyInput::Char('l'), Command::ToggleLabels),
            (
                KeyInput::Named(NamedKey::ArrowLeft),
                Command::Pan(PanDirection::Left),
            ),
            (
                KeyInput::Named(NamedKey::ArrowRight),
                Command::Pan(PanDirection::Right),
            ),
            (
                KeyInput::Named(NamedKey::ArrowUp),
                Command::Pan(PanDirection::Up),
            ),
            (
                KeyInput::Named(NamedKey::ArrowDown),
                Command::Pan(PanDirection::Down),
            ),
            (KeyInput::Named(NamedKey::Escape), Command::Quit),
        ] {
            bindings.insert(key, command);
        }
        Self { bindings }
    }
}

impl KeyBindings {
    /// Command bound to `key`, if any.
    #[must_use]
    pub fn resolve(&self, key: KeyInput) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    /// Binds `key` to `command`, returning the previous command.
    pub fn bind(&mut self, key: KeyInput, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Applies `key name → command name` overrides from configuration.
    ///
    /// Unparseable entries are skipped with a warning; returns how many
    /// overrides were applied.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> usize {
        let mut applied = 0;
        for (key_name, command_name) in overrides {
            let key = match key_name.parse::<KeyInput>() {
                Ok(key) => key,
                Err(e) => {
                    warn!("Ignoring keybinding override: {e}");
                    continue;
                }
            };
            let command = match command_name.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!("Ignoring keybinding override for {key}: {e}");
                    continue;
                }
            };
            debug!(%key, %command, "keybinding override");
            self.bind(key, command);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zoom_and_reset_keys() {
        let kb = KeyBindings::default();
        assert_eq!(kb.resolve(KeyInput::Char('+')), Some(Command::ZoomIn));
        assert_eq!(kb.resolve(KeyInput::Char('=')), Some(Command::ZoomIn));
        assert_eq!(kb.resolve(KeyInput::Char('-')), Some(Command::ZoomOut));
        assert_eq!(kb.resolve(KeyInput::Char('R')), Some(Command::Reset));
        assert_eq!(
            kb.resolve(KeyInput::Named(NamedKey::Escape)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(KeyBindings::default().resolve(KeyInput::Char('q')), None);
    }

    #[test]
    fn test_key_names_parse() {
        assert_eq!("Space".parse(), Ok(KeyInput::Char(' ')));
        assert_eq!("p".parse(), Ok(KeyInput::Char('p')));
        assert_eq!(
            "ArrowUp".parse(),
            Ok(KeyInput::Named(NamedKey::ArrowUp))
        );
        assert!("Hyperdrive".parse::<KeyInput>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for key in [
            KeyInput::Char(' '),
            KeyInput::Char('x'),
            KeyInput::Named(NamedKey::ArrowDown),
        ] {
            assert_eq!(key.to_string().parse::<KeyInput>(), Ok(key));
        }
    }

    #[test]
    fn test_overrides_skip_bad_entries() {
        let mut kb = KeyBindings::default();
        let overrides = HashMap::from([
            ("p".to_string(), "toggle_pause".to_string()),
            ("Nope".to_string(), "quit".to_string()),
            ("x".to_string(), "self_destruct".to_string()),
        ]);
        assert_eq!(kb.apply_overrides(&overrides), 1);
        assert_eq!(kb.resolve(KeyInput::Char('p')), Some(Command::TogglePause));
        assert_eq!(kb.resolve(KeyInput::Char('x')), None);
    }
}
