//! Screen-space HUD: clickable buttons and a value slider, hit-tested in
//! bottom-left-origin pixel coordinates.

mod button;
mod hud;
mod slider;
mod widget;

pub use button::Button;
pub use hud::{Hud, HudLayout, PressOutcome};
pub use slider::Slider;
pub use widget::{ActionHandler, Rect, ValueBinding};
