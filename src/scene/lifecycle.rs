use log::warn;
use rand::Rng;

use crate::camera::Camera;
use crate::render::target::RenderTarget;
use crate::theme::Theme;

use super::builder::build_scene;
use super::object::DecorativeObject;

/// Lifecycle phase of the decorative background.
///
/// `Uninitialized -> Active -> Disposed`, with `Uninitialized -> Disposed`
/// allowed as a no-op teardown. There is no transition out of `Disposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Active,
    Disposed,
}

/// Owns the decorative background for one mounted view: construction,
/// per-frame advance, resize, and guaranteed teardown. Generic over the
/// render target so the full lifecycle runs under test without a GPU.
///
/// Every input the host can throw at it out of order (missing surface,
/// resize before init, double dispose) is absorbed as a no-op; nothing
/// here signals failure to the caller.
pub struct SceneLifecycle<T: RenderTarget> {
    phase: Phase,
    target: Option<T>,
    camera: Camera,
    objects: Vec<DecorativeObject>,
    elapsed: f32,
    size: (u32, u32),
}

impl<T: RenderTarget> SceneLifecycle<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            target: None,
            camera: Camera::new(1, 1),
            objects: Vec::new(),
            elapsed: 0.0,
            size: (0, 0),
        }
    }

    /// Construct the scene against a drawable surface. A missing surface is
    /// not an error: the manager stays `Uninitialized`, performs no render
    /// call, and may simply be asked again on the next mount pass. Invoking
    /// this on an `Active` or `Disposed` manager does nothing.
    pub fn initialize(
        &mut self,
        target: Option<T>,
        width: u32,
        height: u32,
        theme: Theme,
        rng: &mut impl Rng,
    ) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        let Some(target) = target else {
            return;
        };

        self.camera = Camera::new(width, height);
        self.objects = build_scene(theme, rng);
        self.size = (width, height);
        self.target = Some(target);
        self.phase = Phase::Active;
    }

    /// Advance every object one frame and render the scene. Returns whether
    /// the caller should schedule another tick; once disposed this returns
    /// false forever, which is what stops the loop — no tick can fire after
    /// teardown because none gets scheduled.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        self.elapsed += delta;
        for object in &mut self.objects {
            object.advance(self.elapsed);
        }

        if let Some(target) = self.target.as_mut() {
            if let Err(err) = target.draw(&self.objects, &self.camera) {
                warn!("background frame skipped: {err:#}");
            }
        }
        true
    }

    /// Match the camera and render target to new physical dimensions.
    /// Identical or zero dimensions are skipped entirely, so repeated
    /// resize notifications are free.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if self.phase != Phase::Active || width == 0 || height == 0 {
            return;
        }
        if self.size == (width, height) {
            return;
        }

        self.size = (width, height);
        self.camera.set_aspect(width, height);
        if let Some(target) = self.target.as_mut() {
            target.resize(width, height);
        }
    }

    /// Release the render target and drop all decorative objects. Safe to
    /// call from any phase, any number of times.
    pub fn dispose(&mut self) {
        self.target = None;
        self.objects.clear();
        self.phase = Phase::Disposed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn objects(&self) -> &[DecorativeObject] {
        &self.objects
    }

    /// The render target, while one exists. The hosting view uses this to
    /// hand the prepared UI frame to the concrete renderer; the target is
    /// still owned and torn down exclusively by this manager.
    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }
}

impl<T: RenderTarget> Default for SceneLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}
