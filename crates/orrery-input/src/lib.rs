//! Input abstraction: pointer and keyboard state from the window backend,
//! mapped onto the closed set of orrery [`Command`]s.

pub mod command;
pub mod keyboard;
pub mod mouse;
pub mod winit_adapter;

pub use command::{Command, PanDirection, UnknownCommand};
pub use keyboard::{KeyBindings, KeyInput, NamedKey, UnknownKey};
pub use mouse::{ButtonState, PointerButton, PointerState, flip_y};
