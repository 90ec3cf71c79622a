use std::cell::Cell;
use std::rc::Rc;

use scene_viewer::camera::Camera;
use scene_viewer::resizer::{RenderTarget, Resizer, Viewport};

#[cfg(test)]
mod resizer_tests {
    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        size: Option<(u32, u32)>,
        pixel_ratio: Option<f64>,
    }

    impl RenderTarget for FakeSurface {
        fn set_size(&mut self, width: u32, height: u32) {
            self.size = Some((width, height));
        }

        fn set_pixel_ratio(&mut self, ratio: f64) {
            self.pixel_ratio = Some(ratio);
        }
    }

    #[test]
    fn test_construction_syncs_camera_and_surface() {
        let mut camera = Camera::new();
        let mut surface = FakeSurface::default();

        let _resizer = Resizer::new(Viewport::new(800, 600, 1.25), &mut camera, &mut surface);

        assert_eq!(camera.aspect(), 800.0 / 600.0);
        assert_eq!(surface.size, Some((800, 600)));
        assert_eq!(surface.pixel_ratio, Some(1.25));
    }

    #[test]
    fn test_resize_event_updates_values_and_fires_hook_once() {
        let mut camera = Camera::new();
        let mut surface = FakeSurface::default();
        let mut resizer = Resizer::new(Viewport::new(800, 600, 1.0), &mut camera, &mut surface);

        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        resizer.set_on_resize(move || counter.set(counter.get() + 1));

        resizer.resize(Viewport::new(1920, 1080, 2.0), &mut camera, &mut surface);

        assert_eq!(camera.aspect(), 1920.0 / 1080.0);
        assert_eq!(surface.size, Some((1920, 1080)));
        assert_eq!(surface.pixel_ratio, Some(2.0));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_hook_override_before_first_event_wins() {
        let mut camera = Camera::new();
        let mut surface = FakeSurface::default();
        let mut resizer = Resizer::new(Viewport::new(640, 480, 1.0), &mut camera, &mut surface);

        let override_ran = Rc::new(Cell::new(false));
        let flag = override_ran.clone();
        resizer.set_on_resize(move || flag.set(true));

        resizer.resize(Viewport::new(320, 240, 1.0), &mut camera, &mut surface);
        assert!(override_ran.get());
    }

    #[test]
    fn test_halving_dimensions_preserves_aspect_and_still_resyncs() {
        let mut camera = Camera::new();
        let mut surface = FakeSurface::default();
        let mut resizer = Resizer::new(Viewport::new(800, 600, 1.0), &mut camera, &mut surface);
        let aspect_before = camera.aspect();

        let frames = Rc::new(Cell::new(0u32));
        let counter = frames.clone();
        resizer.set_on_resize(move || counter.set(counter.get() + 1));

        resizer.resize(Viewport::new(400, 300, 1.0), &mut camera, &mut surface);

        // same 4:3 ratio, but the surface shrank and a fresh frame was
        // scheduled anyway
        assert_eq!(camera.aspect(), aspect_before);
        assert_eq!(surface.size, Some((400, 300)));
        assert_eq!(frames.get(), 1);
    }

    #[test]
    fn test_hook_fires_per_event() {
        let mut camera = Camera::new();
        let mut surface = FakeSurface::default();
        let mut resizer = Resizer::new(Viewport::new(100, 100, 1.0), &mut camera, &mut surface);

        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        resizer.set_on_resize(move || counter.set(counter.get() + 1));

        for i in 1..=5u32 {
            resizer.resize(Viewport::new(100 * i, 100, 1.0), &mut camera, &mut surface);
        }
        assert_eq!(fired.get(), 5);
    }

    #[test]
    fn test_degenerate_viewport_keeps_aspect_finite() {
        let mut camera = Camera::new();
        let mut surface = FakeSurface::default();
        let mut resizer = Resizer::new(Viewport::new(800, 600, 1.0), &mut camera, &mut surface);

        resizer.resize(Viewport::new(800, 0, 1.0), &mut camera, &mut surface);

        assert!(camera.aspect().is_finite());
        assert!(camera.aspect() > 0.0);
        assert_eq!(surface.size, Some((800, 1)));
    }
}
