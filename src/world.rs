//! World composition: builds the scene graph once and exposes the render
//! trigger.

use std::f32::consts::PI;
use std::sync::Arc;

use glam::{EulerRot, Quat, Vec3};
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::camera::Camera;
use crate::light::create_lights;
use crate::primitives::{create_cone, create_cube, create_sphere, create_torus};
use crate::renderer::Renderer;
use crate::resizer::{Resizer, Viewport};
use crate::scene::{NodeKind, Scene};

/// Compose the full scene graph. Pure CPU-side work, shared by the app and
/// the tests.
pub fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let cube = scene.add_primitive(create_cube());
    {
        let t = scene.transform_mut(cube);
        t.position = Vec3::new(-1.2, 1.5, -4.0);
        t.scale = Vec3::new(1.2, 1.4, 0.8);
        t.set_euler(0.0, 20.0, 20.0);
    }

    // shared transform values, reused across meshes
    let stored_position = Vec3::new(1.4, 0.8, -0.5);
    let stored_scale = Vec3::new(-1.1, -1.3, -0.4);
    let stored_rotation = Quat::from_euler(EulerRot::XYZ, PI / 2.0, 1.57079, 45.0_f32.to_radians());

    let cone = scene.add_primitive(create_cone());
    {
        let t = scene.transform_mut(cone);
        t.position = stored_position;
        t.scale = stored_scale;
        t.rotation = stored_rotation;
    }

    // the torus works in matrix form: compose once, then the matrix is the
    // authoritative source for this node
    let torus = scene.add_primitive(create_torus());
    {
        let t = scene.transform_mut(torus);
        t.position = Vec3::new(-1.6, -2.0, -5.0);
        t.scale = Vec3::new(1.2, 0.9, 1.4);
        t.rotation = Quat::from_rotation_x(30.0_f32.to_radians());
        t.bake_matrix();
    }

    let sphere = scene.add_primitive(create_sphere());
    {
        let t = scene.transform_mut(sphere);
        t.position = Vec3::new(1.2, -1.4, -0.5);
        t.rotate_z(45.0_f32.to_radians());
        t.position.y = -2.0;
    }

    // child positions are relative to the parent's frame
    let child_cube = scene.add_primitive(create_cube());
    {
        let t = scene.transform_mut(child_cube);
        t.scale = Vec3::new(0.2, 1.5, 0.2);
        t.position.x = 0.4;
    }
    scene.set_parent(child_cube, sphere);
    // the child's world matrix depends on the sphere's current world matrix,
    // not just its local one
    scene.update_subtree(sphere);

    let (light, light_transform) = create_lights();
    scene.add(NodeKind::Light(light), light_transform);

    scene.update_world_transforms();
    scene
}

/// The app: scene, camera, renderer, and the resize policy, bound to one
/// window for the life of the process.
pub struct World {
    window: Arc<Window>,
    camera: Camera,
    scene: Scene,
    renderer: Renderer,
    resizer: Resizer,
}

impl World {
    /// Build the whole world against `window`. The resizer is armed before
    /// this returns, so camera and surface match the window from the first
    /// frame on.
    pub fn new(window: Arc<Window>, show_ui: bool) -> anyhow::Result<Self> {
        let mut renderer = pollster::block_on(Renderer::new(window.clone(), show_ui))?;
        let mut camera = Camera::new();
        let scene = build_scene();

        let mut resizer = Resizer::new(viewport_of(&window), &mut camera, &mut renderer);
        // every resize schedules a fresh frame, so the image keeps its
        // aspect instead of stretching
        let redraw_window = window.clone();
        resizer.set_on_resize(move || redraw_window.request_redraw());

        log::info!("world built: {} scene nodes", scene.len());

        Ok(Self {
            window,
            camera,
            scene,
            renderer,
            resizer,
        })
    }

    /// Draw one frame of the current scene state.
    pub fn render(&mut self) -> anyhow::Result<()> {
        match self.renderer.render(&self.scene, &self.camera, &self.window) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(anyhow::anyhow!("render failed: out of GPU memory"))
            }
            Err(err) => {
                // transient surface loss; re-sync at the current size and
                // let the hook schedule the retry frame
                log::warn!("surface error: {err:?}, reconfiguring");
                self.resizer
                    .resize(viewport_of(&self.window), &mut self.camera, &mut self.renderer);
                Ok(())
            }
        }
    }

    /// Route a window resize through the resizer.
    pub fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        let viewport = Viewport::new(size.width, size.height, self.window.scale_factor());
        self.resizer
            .resize(viewport, &mut self.camera, &mut self.renderer);
    }

    /// Forward an event to the UI overlay; returns true when the overlay
    /// consumed it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.renderer.handle_event(&self.window, event);
        if response.repaint {
            self.window.request_redraw();
        }
        response.consumed
    }

    /// True once after the rebuild button was activated.
    pub fn rebuild_requested(&mut self) -> bool {
        self.renderer.take_rebuild_request()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let size = window.inner_size();
    Viewport::new(size.width, size.height, window.scale_factor())
}
