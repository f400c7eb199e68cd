//! Mapping from the persisted [`Config`] onto each component's settings.

use glam::Vec3;
use orrery_camera::{CameraPose, CameraSettings};
use orrery_config::Config;
use orrery_lighting::SunLight;
use orrery_planet::SurfaceSettings;
use orrery_render::{Projection, Viewport};
use orrery_scene::{ClockSettings, SceneOptions};
use orrery_ui::HudLayout;

pub fn viewport(config: &Config) -> Viewport {
    Viewport::new(config.window.width, config.window.height)
}

pub fn clock_settings(config: &Config) -> ClockSettings {
    ClockSettings {
        default_speed: config.clock.default_speed,
        min_speed: config.clock.min_speed,
        max_speed: config.clock.max_speed,
    }
}

pub fn camera_settings(config: &Config) -> CameraSettings {
    let c = &config.camera;
    CameraSettings {
        default_pose: CameraPose {
            yaw: c.default_yaw,
            pitch: c.default_pitch,
            position: Vec3::ZERO,
            distance: c.distance.max(c.min_distance),
        },
        min_distance: c.min_distance,
        drag_sensitivity: c.drag_sensitivity,
        zoom_step: c.zoom_step,
        pan_step: c.pan_step,
    }
}

pub fn projection(config: &Config, viewport: Viewport) -> Projection {
    Projection::perspective(
        config.camera.fov_y_deg,
        viewport,
        config.camera.near,
        config.camera.far,
    )
}

pub fn hud_layout(config: &Config) -> HudLayout {
    let h = &config.hud;
    HudLayout {
        margin: h.margin,
        button_width: h.button_width,
        button_height: h.button_height,
        button_spacing: h.button_spacing,
        slider_width: h.slider_width,
        slider_height: h.slider_height,
        slider_hit_margin: h.slider_hit_margin,
    }
}

pub fn surface_settings(config: &Config) -> SurfaceSettings {
    let s = &config.surface;
    let (lo, hi) = if s.crater_size_min <= s.crater_size_max {
        (s.crater_size_min, s.crater_size_max)
    } else {
        (s.crater_size_max, s.crater_size_min)
    };
    SurfaceSettings {
        sphere_slices: s.sphere_slices,
        sphere_stacks: s.sphere_stacks,
        crater_count: s.crater_count,
        crater_size: (lo, hi),
        band_stacks: s.band_stacks,
        band_slices: s.band_slices,
        lighting: s
            .manual_lighting
            .then(|| SunLight::default().with_ambient_floor(s.ambient_floor)),
    }
}

pub fn scene_options(config: &Config) -> SceneOptions {
    let s = &config.scene;
    SceneOptions {
        show_orbits: s.show_orbits,
        show_labels: s.show_labels,
        orbit_scale: s.orbit_scale,
        star_count: s.star_count,
        star_seed: s.star_seed,
        star_radius: s.star_radius,
    }
}
