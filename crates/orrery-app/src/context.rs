//! The simulation context: every piece of mutable state, owned in one place
//! and mutated only by [`SimulationContext::handle_event`].

use orrery_camera::CameraController;
use orrery_config::Config;
use orrery_input::{ButtonState, Command, KeyBindings, PointerButton, PointerState};
use orrery_planet::{SolarSystem, solar_system};
use orrery_render::{Color, FrameSetup, Projection, RenderBackend, Viewport};
use orrery_scene::{AnimationClock, SceneOrchestrator};
use orrery_ui::{ActionHandler, Hud, PressOutcome, ValueBinding};
use tracing::{debug, info};

use crate::HostEvent;
use crate::settings;

/// Speed change per `SpeedUp`/`SpeedDown` command.
pub const SPEED_STEP: f32 = 0.25;

/// Mutable view over the state commands act on. Both HUD buttons and key
/// bindings dispatch through it.
struct Controls<'a> {
    clock: &'a mut AnimationClock,
    camera: &'a mut CameraController,
    scene: &'a mut SceneOrchestrator,
    quit: &'a mut bool,
}

impl ActionHandler for Controls<'_> {
    fn activate(&mut self, action: Command) {
        match action {
            Command::ZoomIn => self.camera.zoom_in(),
            Command::ZoomOut => self.camera.zoom_out(),
            Command::Reset => {
                self.camera.reset();
                self.clock.reset();
            }
            Command::TogglePause => {
                self.clock.toggle_pause();
            }
            Command::SpeedUp => {
                self.clock.adjust_speed(SPEED_STEP);
            }
            Command::SpeedDown => {
                self.clock.adjust_speed(-SPEED_STEP);
            }
            Command::Pan(direction) => self.camera.pan(direction),
            Command::ToggleOrbits => {
                self.scene.toggle_orbits();
            }
            Command::ToggleLabels => {
                self.scene.toggle_labels();
            }
            Command::Quit => {
                info!("Quit requested");
                *self.quit = true;
            }
        }
    }
}

/// The slider is bound to the clock speed.
impl ValueBinding for Controls<'_> {
    fn value(&self) -> f32 {
        self.clock.speed()
    }

    fn set_value(&mut self, value: f32) {
        self.clock.set_speed(value);
    }
}

/// Clock, camera, HUD, input and scene for one orrery window.
#[derive(Debug)]
pub struct SimulationContext {
    clock: AnimationClock,
    camera: CameraController,
    hud: Hud,
    pointer: PointerState,
    bindings: KeyBindings,
    scene: SceneOrchestrator,
    viewport: Viewport,
    projection: Projection,
    clear_color: Color,
    scroll_zoom_factor: f32,
    quit: bool,
    frames_rendered: u64,
}

impl SimulationContext {
    /// Builds the context from `config` with the built-in solar system.
    pub fn new(config: &Config) -> Self {
        Self::with_system(config, solar_system())
    }

    pub fn with_system(config: &Config, system: SolarSystem) -> Self {
        let viewport = settings::viewport(config);
        let clock = AnimationClock::new(settings::clock_settings(config));

        let mut bindings = KeyBindings::default();
        let overrides = bindings.apply_overrides(&config.input.keybindings);
        if overrides > 0 {
            debug!(overrides, "Applied keybinding overrides");
        }

        let mut hud = Hud::new(settings::hud_layout(config), viewport, clock.speed_range());
        hud.sync(&SpeedReadout(clock.speed()));

        let scene = SceneOrchestrator::new(
            system,
            &settings::scene_options(config),
            &settings::surface_settings(config),
        );

        Self {
            clock,
            camera: CameraController::new(settings::camera_settings(config)),
            hud,
            pointer: PointerState::new(),
            bindings,
            scene,
            viewport,
            projection: settings::projection(config, viewport),
            clear_color: Color::BLACK,
            scroll_zoom_factor: config.input.scroll_zoom_factor,
            quit: false,
            frames_rendered: 0,
        }
    }

    /// Runs one host event to completion.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerButton {
                button,
                state,
                x,
                y,
            } => self.on_pointer_button(button, state, x, y),
            HostEvent::PointerMoved { x, y } => self.on_pointer_moved(x, y),
            HostEvent::Scroll { lines } => self.pointer.on_scroll(lines),
            HostEvent::Key(key) => {
                if let Some(command) = self.bindings.resolve(key) {
                    debug!(%key, %command, "Key command");
                    self.execute(command);
                }
            }
            HostEvent::Resize { width, height } => self.resize(width, height),
            HostEvent::Timer => self.tick(),
        }
    }

    /// Applies `command` exactly as a key or button would.
    pub fn execute(&mut self, command: Command) {
        let mut controls = Controls {
            clock: &mut self.clock,
            camera: &mut self.camera,
            scene: &mut self.scene,
            quit: &mut self.quit,
        };
        controls.activate(command);
        self.hud.sync(&controls);
    }

    /// Advances the animation clock by one tick.
    pub fn tick(&mut self) {
        self.clock.tick();
    }

    /// Re-anchors the HUD and rebuilds the projection. A zero height is
    /// treated as one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.projection.set_viewport(self.viewport);
        self.hud.resize(self.viewport);
        debug!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            "Viewport resized"
        );
    }

    fn on_pointer_button(&mut self, button: PointerButton, state: ButtonState, x: f32, y: f32) {
        self.pointer.on_button(button, state, x, y);
        match state {
            ButtonState::Pressed if button == PointerButton::Primary => {
                let hud_point = self.pointer.hud_position(self.viewport.height());
                let mut controls = Controls {
                    clock: &mut self.clock,
                    camera: &mut self.camera,
                    scene: &mut self.scene,
                    quit: &mut self.quit,
                };
                if self.hud.pointer_pressed(hud_point, &mut controls) == PressOutcome::Unhandled {
                    self.camera.begin_drag(self.pointer.position());
                }
            }
            ButtonState::Pressed => {}
            ButtonState::Released => {
                self.hud.pointer_released();
                if button == PointerButton::Primary {
                    self.camera.end_drag();
                }
            }
        }
    }

    fn on_pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.on_cursor_moved(x, y);
        let hud_point = self.pointer.hud_position(self.viewport.height());
        let mut controls = Controls {
            clock: &mut self.clock,
            camera: &mut self.camera,
            scene: &mut self.scene,
            quit: &mut self.quit,
        };
        if !self.hud.pointer_moved(hud_point, &mut controls) && self.pointer.is_primary_down() {
            self.camera.update_drag(self.pointer.position());
        }
    }

    /// Turns wheel lines accumulated since the last frame into one zoom.
    fn apply_pending_scroll(&mut self) {
        let lines = self.pointer.take_scroll();
        if lines != 0.0 {
            self.camera
                .zoom_by(lines * self.scroll_zoom_factor * self.camera.settings().zoom_step);
        }
    }

    /// HUD status lines for the current state.
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Elapsed: {:.1}", self.clock.elapsed())];
        if self.clock.is_paused() {
            lines.push("PAUSED".to_string());
        }
        lines
    }

    pub fn frame_setup(&self) -> FrameSetup {
        FrameSetup {
            viewport: self.viewport,
            projection: self.projection.clone(),
            clear_color: self.clear_color,
        }
    }

    /// Applies pending wheel zoom, then builds and submits one frame.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) {
        self.apply_pending_scroll();
        let overlay = self.hud.primitives(&self.status_lines());
        self.scene.render(
            backend,
            &self.frame_setup(),
            self.clock.elapsed(),
            &self.camera,
            &overlay,
        );
        self.frames_rendered += 1;
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn scene(&self) -> &SceneOrchestrator {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

/// Read-only speed source for the initial slider sync.
struct SpeedReadout(f32);

impl ValueBinding for SpeedReadout {
    fn value(&self) -> f32 {
        self.0
    }

    fn set_value(&mut self, _value: f32) {}
}
