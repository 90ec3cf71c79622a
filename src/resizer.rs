//! Keeps the camera projection and the render target in sync with the
//! container viewport.
//!
//! The sync runs once at construction and again for every resize
//! notification the event loop routes in. After each re-sync the resizer
//! invokes its extension hook, a no-op unless the owner replaces it.

use crate::camera::Camera;

/// Snapshot of the container's current dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
    /// Device pixel ratio of the hosting display.
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Width over height. Dimensions are clamped to one pixel first, so a
    /// minimized or zero-height container yields a finite ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Surface the resizer drives. Implemented by the GPU renderer; tests use a
/// recording stand-in.
pub trait RenderTarget {
    /// Resize the output surface to the given pixel dimensions.
    fn set_size(&mut self, width: u32, height: u32);

    /// Track the display's device pixel ratio.
    fn set_pixel_ratio(&mut self, ratio: f64);
}

pub struct Resizer {
    on_resize: Box<dyn FnMut()>,
}

impl Resizer {
    /// Apply the viewport to camera and target immediately, guaranteeing
    /// both are correctly sized before the first frame.
    pub fn new(viewport: Viewport, camera: &mut Camera, target: &mut dyn RenderTarget) -> Self {
        apply_size(viewport, camera, target);
        Self {
            on_resize: Box::new(|| {}),
        }
    }

    /// Replace the extension hook that runs after every re-sync.
    pub fn set_on_resize(&mut self, hook: impl FnMut() + 'static) {
        self.on_resize = Box::new(hook);
    }

    /// Re-run the sync for a new viewport, then invoke the hook once.
    pub fn resize(&mut self, viewport: Viewport, camera: &mut Camera, target: &mut dyn RenderTarget) {
        apply_size(viewport, camera, target);
        (self.on_resize)();
    }
}

fn apply_size(viewport: Viewport, camera: &mut Camera, target: &mut dyn RenderTarget) {
    camera.set_aspect(viewport.aspect_ratio());
    target.set_size(viewport.width.max(1), viewport.height.max(1));
    target.set_pixel_ratio(viewport.pixel_ratio);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        size: Option<(u32, u32)>,
        pixel_ratio: Option<f64>,
        set_size_calls: usize,
    }

    impl RenderTarget for RecordingTarget {
        fn set_size(&mut self, width: u32, height: u32) {
            self.size = Some((width, height));
            self.set_size_calls += 1;
        }

        fn set_pixel_ratio(&mut self, ratio: f64) {
            self.pixel_ratio = Some(ratio);
        }
    }

    #[test]
    fn test_construction_applies_viewport() {
        let mut camera = Camera::new();
        let mut target = RecordingTarget::default();

        let _resizer = Resizer::new(Viewport::new(800, 600, 2.0), &mut camera, &mut target);

        assert_eq!(camera.aspect(), 800.0 / 600.0);
        assert_eq!(target.size, Some((800, 600)));
        assert_eq!(target.pixel_ratio, Some(2.0));
    }

    #[test]
    fn test_resize_reapplies_and_fires_hook_once() {
        let mut camera = Camera::new();
        let mut target = RecordingTarget::default();
        let mut resizer = Resizer::new(Viewport::new(800, 600, 1.0), &mut camera, &mut target);

        let count = std::rc::Rc::new(std::cell::Cell::new(0u32));
        let seen = count.clone();
        resizer.set_on_resize(move || seen.set(seen.get() + 1));

        resizer.resize(Viewport::new(1024, 512, 1.0), &mut camera, &mut target);
        assert_eq!(camera.aspect(), 2.0);
        assert_eq!(target.size, Some((1024, 512)));
        assert_eq!(count.get(), 1);

        resizer.resize(Viewport::new(400, 300, 1.0), &mut camera, &mut target);
        assert_eq!(camera.aspect(), 400.0 / 300.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_default_hook_is_noop() {
        let mut camera = Camera::new();
        let mut target = RecordingTarget::default();
        let mut resizer = Resizer::new(Viewport::new(100, 100, 1.0), &mut camera, &mut target);

        // fires the default hook; nothing to observe beyond not panicking
        resizer.resize(Viewport::new(200, 100, 1.0), &mut camera, &mut target);
        assert_eq!(camera.aspect(), 2.0);
    }

    #[test]
    fn test_zero_height_viewport_is_clamped() {
        let mut camera = Camera::new();
        let mut target = RecordingTarget::default();

        let _resizer = Resizer::new(Viewport::new(640, 0, 1.0), &mut camera, &mut target);

        assert!(camera.aspect().is_finite());
        assert_eq!(camera.aspect(), 640.0);
        assert_eq!(target.size, Some((640, 1)));
    }
}
