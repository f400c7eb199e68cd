//! Camera and clock operations triggered by keys and HUD buttons.

use std::fmt;
use std::str::FromStr;

/// Direction of a camera pan step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Every effect a key binding or button can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    /// Restore the default camera pose and clock.
    Reset,
    TogglePause,
    SpeedUp,
    SpeedDown,
    Pan(PanDirection),
    ToggleOrbits,
    ToggleLabels,
    Quit,
}

impl Command {
    /// Stable name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Command::ZoomIn => "zoom_in",
            Command::ZoomOut => "zoom_out",
            Command::Reset => "reset",
            Command::TogglePause => "toggle_pause",
            Command::SpeedUp => "speed_up",
            Command::SpeedDown => "speed_down",
            Command::Pan(PanDirection::Left) => "pan_left",
            Command::Pan(PanDirection::Right) => "pan_right",
            Command::Pan(PanDirection::Up) => "pan_up",
            Command::Pan(PanDirection::Down) => "pan_down",
            Command::ToggleOrbits => "toggle_orbits",
            Command::ToggleLabels => "toggle_labels",
            Command::Quit => "quit",
        }
    }

    /// All commands, in a fixed order.
    pub const ALL: [Command; 13] = [
        Command::ZoomIn,
        Command::ZoomOut,
        Command::Reset,
        Command::TogglePause,
        Command::SpeedUp,
        Command::SpeedDown,
        Command::Pan(PanDirection::Left),
        Command::Pan(PanDirection::Right),
        Command::Pan(PanDirection::Up),
        Command::Pan(PanDirection::Down),
        Command::ToggleOrbits,
        Command::ToggleLabels,
        Command::Quit,
    ];
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised command name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for c in Command::ALL {
            assert_eq!(c.name().parse::<Command>(), Ok(c));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "warp_drive".parse::<Command>(),
            Err(UnknownCommand("warp_drive".into()))
        );
    }
}
