//! The HUD widget set: a column of buttons anchored to the top-right corner
//! and a speed slider anchored to the bottom-left.
//!
//! All coordinates are HUD pixels with the origin at the bottom-left of the
//! viewport. Callers flip window-space pointer positions before calling in.

use glam::Vec2;
use orrery_input::Command;
use orrery_render::{Color, Primitive, Viewport};
use tracing::debug;

use crate::{ActionHandler, Button, Rect, Slider, ValueBinding};

const BUTTON_FILL: Color = Color::new(0.25, 0.25, 0.3);
const BUTTON_PRESSED_FILL: Color = Color::new(0.45, 0.45, 0.55);
const TRACK_COLOR: Color = Color::new(0.4, 0.4, 0.4);
const THUMB_COLOR: Color = Color::new(0.9, 0.9, 0.9);
const TEXT_COLOR: Color = Color::WHITE;
const LINE_HEIGHT: f32 = 16.0;

/// Pixel metrics for HUD placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HudLayout {
    pub margin: f32,
    pub button_width: f32,
    pub button_height: f32,
    pub button_spacing: f32,
    pub slider_width: f32,
    pub slider_height: f32,
    pub slider_hit_margin: f32,
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            margin: 10.0,
            button_width: 100.0,
            button_height: 30.0,
            button_spacing: 8.0,
            slider_width: 200.0,
            slider_height: 8.0,
            slider_hit_margin: 8.0,
        }
    }
}

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The button at this index was activated.
    Button(usize),
    /// The slider started dragging.
    Slider,
    /// Nothing in the HUD; the press belongs to the camera.
    Unhandled,
}

/// Fixed set of buttons plus one slider.
#[derive(Clone, Debug)]
pub struct Hud {
    layout: HudLayout,
    viewport: Viewport,
    buttons: Vec<Button>,
    slider: Slider,
}

impl Hud {
    /// Builds the standard HUD: Zoom In, Zoom Out, Reset and Pause buttons
    /// and a speed slider over `speed_range`.
    pub fn new(layout: HudLayout, viewport: Viewport, speed_range: (f32, f32)) -> Self {
        let buttons = [
            ("Zoom In", Command::ZoomIn),
            ("Zoom Out", Command::ZoomOut),
            ("Reset", Command::Reset),
            ("Pause", Command::TogglePause),
        ]
        .into_iter()
        .map(|(label, action)| Button::new(label, action, Rect::default()))
        .collect();
        let slider = Slider::new(
            "Speed",
            Rect::default(),
            speed_range.0,
            speed_range.1,
            layout.slider_hit_margin,
        );
        let mut hud = Self {
            layout,
            viewport,
            buttons,
            slider,
        };
        hud.resize(viewport);
        hud
    }

    pub fn layout(&self) -> &HudLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn is_slider_dragging(&self) -> bool {
        self.slider.is_dragging()
    }

    /// Re-anchors every widget to the new viewport edges.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let l = self.layout;
        let width = viewport.width() as f32;
        let height = viewport.height() as f32;
        let x = width - l.button_width - l.margin;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            let top = height - l.margin - i as f32 * (l.button_height + l.button_spacing);
            button.bounds = Rect::new(x, top - l.button_height, l.button_width, l.button_height);
        }
        self.slider.bounds = Rect::new(l.margin, l.margin, l.slider_width, l.slider_height);
        debug!(width, height, "HUD re-anchored");
    }

    /// Dispatches a press. Buttons win over the slider, and the first button
    /// containing `p` wins over later ones.
    pub fn pointer_pressed<H>(&mut self, p: Vec2, host: &mut H) -> PressOutcome
    where
        H: ActionHandler + ValueBinding + ?Sized,
    {
        if let Some(index) = self.buttons.iter().position(|b| b.bounds.contains(p)) {
            let button = &mut self.buttons[index];
            button.pressed = true;
            debug!(label = %button.label, "HUD button activated");
            host.activate(button.action);
            self.slider.sync(&*host);
            return PressOutcome::Button(index);
        }
        if self.slider.hit(p) {
            self.slider.set_dragging(true);
            self.slider.drag_to(p.x, host);
            return PressOutcome::Slider;
        }
        PressOutcome::Unhandled
    }

    /// Feeds pointer motion to a dragging slider. Returns whether the HUD
    /// consumed the motion.
    pub fn pointer_moved<B: ValueBinding + ?Sized>(&mut self, p: Vec2, binding: &mut B) -> bool {
        if !self.slider.is_dragging() {
            return false;
        }
        self.slider.drag_to(p.x, binding);
        true
    }

    /// Clears every pressed flag and ends any slider drag, wherever the
    /// pointer is.
    pub fn pointer_released(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
        self.slider.set_dragging(false);
    }

    /// Moves the thumb to match the bound value.
    pub fn sync<B: ValueBinding + ?Sized>(&mut self, binding: &B) {
        self.slider.sync(binding);
    }

    /// Overlay primitives for the current widget state, followed by one text
    /// line per entry of `status` down the top-left corner.
    pub fn primitives(&self, status: &[String]) -> Vec<Primitive> {
        let mut out = Vec::with_capacity(self.buttons.len() * 2 + 4 + status.len());
        for button in &self.buttons {
            let fill = if button.pressed {
                BUTTON_PRESSED_FILL
            } else {
                BUTTON_FILL
            };
            out.push(Primitive::Rect {
                min: button.bounds.min(),
                size: button.bounds.size(),
                color: fill,
                filled: true,
            });
            out.push(Primitive::Text {
                baseline: Vec2::new(
                    button.bounds.x + 8.0,
                    button.bounds.y + button.bounds.height * 0.5 - 4.0,
                ),
                text: button.label.clone(),
                color: TEXT_COLOR,
            });
        }

        let track = self.slider.bounds;
        out.push(Primitive::Rect {
            min: track.min(),
            size: track.size(),
            color: TRACK_COLOR,
            filled: true,
        });
        let thumb = self.slider.thumb_center();
        let half = Vec2::new(4.0, track.height * 0.5 + self.slider.hit_margin * 0.5);
        out.push(Primitive::Rect {
            min: thumb - Vec2::new(half.x, track.height * 0.5),
            size: Vec2::new(half.x * 2.0, half.y * 2.0),
            color: THUMB_COLOR,
            filled: true,
        });
        out.push(Primitive::Text {
            baseline: Vec2::new(track.x, track.y + track.height + self.slider.hit_margin + 6.0),
            text: format!("{}: {:.2}x", self.slider.label, self.slider.value()),
            color: TEXT_COLOR,
        });

        let top = self.viewport.height() as f32 - self.layout.margin;
        for (i, line) in status.iter().enumerate() {
            out.push(Primitive::Text {
                baseline: Vec2::new(self.layout.margin, top - (i + 1) as f32 * LINE_HEIGHT),
                text: line.clone(),
                color: TEXT_COLOR,
            });
        }
        out
    }
}
