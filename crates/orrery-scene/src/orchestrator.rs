//! Builds and submits one frame.

use std::sync::Arc;

use glam::Vec3;
use orrery_camera::CameraController;
use orrery_math::{OrbitPathRasterizer, RandomSequence};
use orrery_planet::{SolarSystem, SurfaceSettings, generate_surface};
use orrery_render::{Color, FrameSetup, Primitive, RenderBackend, SceneNode};
use tracing::{debug, info};

use crate::{Starfield, TransformComposer};

const ORBIT_COLOR: Color = Color::new(0.35, 0.35, 0.4);
const ORBIT_POINT_SIZE: f32 = 1.0;
const SUN_TESSELLATION: u32 = 30;

/// Scene toggles and background parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    pub show_orbits: bool,
    pub show_labels: bool,
    /// Integer grid resolution of the orbit rasterizer, cells per world unit.
    pub orbit_scale: f32,
    pub star_count: usize,
    pub star_seed: u64,
    pub star_radius: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_labels: true,
            orbit_scale: orrery_math::DEFAULT_ORBIT_SCALE,
            star_count: 200,
            star_seed: 7,
            star_radius: 80.0,
        }
    }
}

/// Owns the body table plus everything derived from it that does not change
/// between frames: generated surfaces, rasterized orbit guides and the sky.
#[derive(Clone, Debug)]
pub struct SceneOrchestrator {
    system: SolarSystem,
    surfaces: Vec<SceneNode>,
    orbit_paths: Vec<Arc<[Vec3]>>,
    starfield: Starfield,
    composer: TransformComposer,
    show_orbits: bool,
}

impl SceneOrchestrator {
    pub fn new(system: SolarSystem, options: &SceneOptions, surface: &SurfaceSettings) -> Self {
        let mut rng = RandomSequence::default();
        let surfaces: Vec<SceneNode> = system
            .planets
            .iter()
            .map(|p| generate_surface(p.surface, surface, p.size, p.color, &mut rng))
            .collect();

        let rasterizer = OrbitPathRasterizer::new(options.orbit_scale);
        let orbit_paths: Vec<Arc<[Vec3]>> = system
            .planets
            .iter()
            .map(|p| rasterizer.rasterize(p.distance).into())
            .collect();

        let starfield =
            Starfield::generate(options.star_count, options.star_radius, options.star_seed);

        info!(
            planets = system.planets.len(),
            surface_primitives = surfaces.iter().map(SceneNode::primitive_count).sum::<usize>(),
            orbit_points = orbit_paths.iter().map(|p| p.len()).sum::<usize>(),
            stars = starfield.len(),
            "Scene prepared"
        );

        Self {
            system,
            surfaces,
            orbit_paths,
            starfield,
            composer: TransformComposer::new(options.show_labels),
            show_orbits: options.show_orbits,
        }
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    /// Cached surface of the planet at `index`.
    pub fn surface(&self, index: usize) -> Option<&SceneNode> {
        self.surfaces.get(index)
    }

    pub fn orbit_path(&self, index: usize) -> Option<&[Vec3]> {
        self.orbit_paths.get(index).map(|path| &path[..])
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn show_labels(&self) -> bool {
        self.composer.show_labels()
    }

    pub fn toggle_orbits(&mut self) -> bool {
        self.show_orbits = !self.show_orbits;
        debug!(show = self.show_orbits, "Orbit guides toggled");
        self.show_orbits
    }

    pub fn toggle_labels(&mut self) -> bool {
        let show = !self.composer.show_labels();
        self.composer.set_show_labels(show);
        debug!(show, "Labels toggled");
        show
    }

    /// The whole 3D scene for `elapsed`, viewed through `camera`.
    ///
    /// Children of the root, in order: `"stars"`, `"sun"`, `"orbits"` (when
    /// shown), then one subtree per planet in catalog order.
    pub fn build_frame(&self, elapsed: f64, camera: &CameraController) -> SceneNode {
        let mut root = SceneNode::named("scene").with_transforms(camera.view_transforms());

        root.push_child(SceneNode::named("stars").with_primitive(self.starfield.primitive()));

        let star = &self.system.star;
        root.push_child(
            SceneNode::named(star.name.clone()).with_primitive(Primitive::Sphere {
                radius: star.size,
                slices: SUN_TESSELLATION,
                stacks: SUN_TESSELLATION,
                color: star.color,
                lit: false,
            }),
        );

        if self.show_orbits {
            let mut orbits = SceneNode::named("orbits");
            for path in &self.orbit_paths {
                orbits.primitives.push(Primitive::Points {
                    points: Arc::clone(path),
                    size: ORBIT_POINT_SIZE,
                    color: ORBIT_COLOR,
                });
            }
            root.push_child(orbits);
        }

        for (body, surface) in self.system.planets.iter().zip(&self.surfaces) {
            root.push_child(
                self.composer
                    .compose(body, elapsed, camera.yaw(), surface.clone()),
            );
        }
        root
    }

    /// Submits one full frame: the scene, then `overlay` in HUD pixels.
    pub fn render<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        setup: &FrameSetup,
        elapsed: f64,
        camera: &CameraController,
        overlay: &[Primitive],
    ) {
        backend.begin_frame(setup);
        self.build_frame(elapsed, camera).submit(backend);
        backend.begin_overlay(setup.viewport);
        for primitive in overlay {
            backend.draw(primitive);
        }
        backend.end_overlay();
        backend.end_frame();
    }
}
