//! Placement of bodies, their labels, rings and moons.
//!
//! The transform order for a body is fixed:
//!
//! 1. orbit: rotate about +Y by `elapsed * orbit_speed`
//! 2. translate `distance` along +X
//! 3. tilt: rotate about +Z by `axial_tilt`
//! 4. spin: rotate about +Y by `elapsed * rotation_speed`
//!
//! Moons hang under the spin frame. Rings hang under the tilt frame, so they
//! lean with the body but do not spin. The label branches off after step 2
//! and undoes both the orbit angle and the camera yaw so text stays upright
//! and facing the viewer.

use glam::Vec3;
use orrery_planet::{CelestialBody, Moon};
use orrery_render::{Color, Primitive, SceneNode, Transform};

const LABEL_COLOR: Color = Color::WHITE;
const LABEL_GAP: f32 = 0.3;
const RING_COLOR: Color = Color::new(0.8, 0.75, 0.6);
const MOON_TESSELLATION: u32 = 12;

/// Reduces an unbounded angle to `[0, 360)` for submission.
pub fn wrap_degrees(degrees: f64) -> f32 {
    let wrapped = degrees.rem_euclid(360.0) as f32;
    // rem_euclid can round up to exactly 360 in f32.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// The four body transforms for one frame, in application order.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyTransforms {
    pub orbit: Transform,
    pub radial: Transform,
    pub tilt: Transform,
    pub spin: Transform,
}

impl BodyTransforms {
    pub fn to_array(&self) -> [Transform; 4] {
        [self.orbit, self.radial, self.tilt, self.spin]
    }
}

/// Derives body placement from orbital parameters and simulated time.
#[derive(Clone, Debug, Default)]
pub struct TransformComposer {
    show_labels: bool,
}

impl TransformComposer {
    pub fn new(show_labels: bool) -> Self {
        Self { show_labels }
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.show_labels = show;
    }

    /// Unwrapped orbital angle in degrees.
    pub fn orbit_angle(body: &CelestialBody, elapsed: f64) -> f64 {
        elapsed * f64::from(body.orbit_speed)
    }

    /// Unwrapped self-rotation angle in degrees.
    pub fn spin_angle(body: &CelestialBody, elapsed: f64) -> f64 {
        elapsed * f64::from(body.rotation_speed)
    }

    /// Unwrapped moon orbital angle in degrees.
    pub fn moon_angle(moon: &Moon, elapsed: f64) -> f64 {
        elapsed * f64::from(moon.orbit_speed)
    }

    pub fn body_transforms(body: &CelestialBody, elapsed: f64) -> BodyTransforms {
        BodyTransforms {
            orbit: Transform::rotate_y(wrap_degrees(Self::orbit_angle(body, elapsed))),
            radial: Transform::Translate(Vec3::new(body.distance, 0.0, 0.0)),
            tilt: Transform::rotate_z(body.axial_tilt),
            spin: Transform::rotate_y(wrap_degrees(Self::spin_angle(body, elapsed))),
        }
    }

    /// Counter-rotation for a label hanging off the radial frame.
    pub fn label_transforms(orbit_angle: f64, camera_yaw: f32) -> [Transform; 2] {
        [
            Transform::rotate_y(wrap_degrees(-orbit_angle)),
            Transform::rotate_y(wrap_degrees(-f64::from(camera_yaw))),
        ]
    }

    pub fn moon_transforms(moon: &Moon, elapsed: f64) -> [Transform; 2] {
        [
            Transform::rotate_y(wrap_degrees(Self::moon_angle(moon, elapsed))),
            Transform::Translate(Vec3::new(moon.distance, 0.0, 0.0)),
        ]
    }

    /// Builds the subtree for `body`. `surface` is attached under the spin
    /// frame as-is.
    ///
    /// Node names are `"<name>"`, `"<name>/label"`, `"<name>/tilt"`,
    /// `"<name>/spin"`, `"<name>/rings"` and `"<name>/moon<i>"`.
    pub fn compose(
        &self,
        body: &CelestialBody,
        elapsed: f64,
        camera_yaw: f32,
        surface: SceneNode,
    ) -> SceneNode {
        let t = Self::body_transforms(body, elapsed);
        let name = &body.name;

        let mut spin = SceneNode::named(format!("{name}/spin"))
            .with_transform(t.spin)
            .with_child(surface);
        for (i, moon) in body.moons.iter().enumerate() {
            spin.push_child(
                SceneNode::named(format!("{name}/moon{i}"))
                    .with_transforms(Self::moon_transforms(moon, elapsed))
                    .with_primitive(Primitive::Sphere {
                        radius: moon.size,
                        slices: MOON_TESSELLATION,
                        stacks: MOON_TESSELLATION,
                        color: moon.color,
                        lit: true,
                    }),
            );
        }

        let mut tilt = SceneNode::named(format!("{name}/tilt"))
            .with_transform(t.tilt)
            .with_child(spin);
        if body.has_rings {
            tilt.push_child(
                SceneNode::named(format!("{name}/rings"))
                    .with_transform(Transform::rotate_x(90.0))
                    .with_primitive(Primitive::Torus {
                        inner_radius: body.size * 0.15,
                        outer_radius: body.size * 1.6,
                        sides: 8,
                        rings: 48,
                        color: RING_COLOR,
                    }),
            );
        }

        let mut root = SceneNode::named(name.clone())
            .with_transform(t.orbit)
            .with_transform(t.radial);
        if self.show_labels {
            root.push_child(
                SceneNode::named(format!("{name}/label"))
                    .with_transforms(Self::label_transforms(
                        Self::orbit_angle(body, elapsed),
                        camera_yaw,
                    ))
                    .with_primitive(Primitive::Label {
                        text: name.clone(),
                        anchor: Vec3::new(0.0, body.size + LABEL_GAP, 0.0),
                        color: LABEL_COLOR,
                    }),
            );
        }
        root.push_child(tilt);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use orrery_planet::solar_system;

    fn earth() -> CelestialBody {
        match solar_system().planet("Earth") {
            Some(p) => p.clone(),
            None => panic!("catalog has no Earth"),
        }
    }

    fn origin(node: &SceneNode, name: &str) -> Vec3 {
        node.world_matrix_of(name)
            .unwrap()
            .transform_point3(Vec3::ZERO)
    }

    #[test]
    fn test_earth_at_elapsed_100_is_half_way_round() {
        let body = earth();
        let raw = TransformComposer::orbit_angle(&body, 100.0);
        assert!((raw - 180.0).abs() < 1e-4);
        let t = TransformComposer::body_transforms(&body, 100.0);
        match t.orbit {
            Transform::Rotate { degrees, axis } => {
                assert!((degrees - 180.0).abs() < 1e-3);
                assert_eq!(axis, Vec3::Y);
            }
            other => panic!("unexpected orbit transform {other:?}"),
        }
        let node = TransformComposer::new(false).compose(&body, 100.0, 0.0, SceneNode::new());
        let p = origin(&node, "Earth");
        assert!((p - Vec3::new(-4.5, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_zero_orbit_speed_keeps_angle_constant() {
        let body = CelestialBody::new("Still", 3.0, 0.5, Color::WHITE).with_speeds(0.0, 2.0);
        for elapsed in [0.0, 1.0, 57.5, 1.0e6] {
            assert_eq!(TransformComposer::orbit_angle(&body, elapsed), 0.0);
            assert_eq!(
                TransformComposer::body_transforms(&body, elapsed).orbit,
                Transform::rotate_y(0.0)
            );
        }
    }

    #[test]
    fn test_retrograde_spin_decreases() {
        let body = CelestialBody::new("Venus", 3.0, 0.3, Color::WHITE).with_speeds(2.5, -1.5);
        let mut previous = TransformComposer::spin_angle(&body, 0.0);
        for step in 1..500 {
            let angle = TransformComposer::spin_angle(&body, f64::from(step) * 0.7);
            assert!(angle < previous);
            previous = angle;
        }
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(450.0), 90.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert!(wrap_degrees(-1.0e-9) < 360.0);
    }

    #[test]
    fn test_tilt_applies_before_spin() {
        let body = earth();
        let t = TransformComposer::body_transforms(&body, 10.0);
        assert_eq!(t.tilt, Transform::rotate_z(23.4));
        let spin_axis = orrery_render::compose(&t.to_array()[2..]).transform_vector3(Vec3::Y);
        let tilt_axis = t.tilt.matrix().transform_vector3(Vec3::Y);
        assert!((spin_axis - tilt_axis).length() < 1e-5);
    }

    #[test]
    fn test_rings_do_not_spin() {
        let body = CelestialBody::new("Ringed", 10.0, 0.7, Color::WHITE)
            .with_speeds(0.0, 90.0)
            .with_rings();
        let composer = TransformComposer::new(false);
        let a = composer.compose(&body, 0.0, 0.0, SceneNode::new());
        let b = composer.compose(&body, 1.0, 0.0, SceneNode::new());
        assert_eq!(
            a.world_matrix_of("Ringed/rings"),
            b.world_matrix_of("Ringed/rings")
        );
        assert_ne!(
            a.world_matrix_of("Ringed/spin"),
            b.world_matrix_of("Ringed/spin")
        );
    }

    #[test]
    fn test_moon_follows_body() {
        let body = earth();
        let node = TransformComposer::new(false).compose(&body, 25.0, 0.0, SceneNode::new());
        let planet = origin(&node, "Earth");
        let moon = origin(&node, "Earth/moon0");
        assert!(((moon - planet).length() - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_label_cancels_orbit_and_yaw() {
        let body = earth();
        let yaw = 33.0;
        let node = TransformComposer::new(true).compose(&body, 42.0, yaw, SceneNode::new());
        let label = node.world_matrix_of("Earth/label").unwrap();
        // Orbit and counter-orbit cancel, leaving only the yaw undo.
        let expected = Mat4::from_translation(origin(&node, "Earth"))
            * Mat4::from_rotation_y((-yaw).to_radians());
        assert!(label.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_labels_can_be_hidden() {
        let body = earth();
        let hidden = TransformComposer::new(false).compose(&body, 0.0, 0.0, SceneNode::new());
        assert!(hidden.find("Earth/label").is_none());
        let shown = TransformComposer::new(true).compose(&body, 0.0, 0.0, SceneNode::new());
        assert!(shown.find("Earth/label").is_some());
    }
}
