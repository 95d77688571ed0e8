use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use folio::camera::Camera;
use folio::render::target::RenderTarget;
use folio::scene::lifecycle::{Phase, SceneLifecycle};
use folio::scene::object::DecorativeObject;
use folio::shell::LoadingGate;
use folio::theme::Theme;

/// Observable side effects of a render target, kept alive independently of
/// the target itself so assertions survive disposal.
#[derive(Default)]
struct Recorder {
    draws: RefCell<usize>,
    resizes: RefCell<Vec<(u32, u32)>>,
}

struct MockTarget {
    recorder: Rc<Recorder>,
}

impl MockTarget {
    fn new() -> (Self, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        (
            Self {
                recorder: recorder.clone(),
            },
            recorder,
        )
    }
}

impl RenderTarget for MockTarget {
    fn resize(&mut self, width: u32, height: u32) {
        self.recorder.resizes.borrow_mut().push((width, height));
    }

    fn draw(&mut self, _objects: &[DecorativeObject], _camera: &Camera) -> Result<()> {
        *self.recorder.draws.borrow_mut() += 1;
        Ok(())
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn active_scene() -> (SceneLifecycle<MockTarget>, Rc<Recorder>) {
    let (target, recorder) = MockTarget::new();
    let mut scene = SceneLifecycle::new();
    scene.initialize(Some(target), 800, 600, Theme::Terminal, &mut rng());
    assert_eq!(scene.phase(), Phase::Active);
    (scene, recorder)
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn initialize_without_surface_is_deferred() {
        let mut scene: SceneLifecycle<MockTarget> = SceneLifecycle::new();
        scene.initialize(None, 800, 600, Theme::Terminal, &mut rng());

        assert_eq!(scene.phase(), Phase::Uninitialized);
        assert!(scene.objects().is_empty());
        assert!(!scene.tick(0.016));
    }

    #[test]
    fn deferred_initialize_succeeds_on_retry() {
        let mut scene = SceneLifecycle::new();
        scene.initialize(None, 800, 600, Theme::Terminal, &mut rng());
        assert_eq!(scene.phase(), Phase::Uninitialized);

        let (target, recorder) = MockTarget::new();
        scene.initialize(Some(target), 800, 600, Theme::Terminal, &mut rng());
        assert_eq!(scene.phase(), Phase::Active);

        assert!(scene.tick(0.016));
        assert_eq!(*recorder.draws.borrow(), 1);
    }

    #[test]
    fn scene_is_created_at_most_once_per_mount() {
        let (mut scene, first_recorder) = active_scene();

        let (second_target, second_recorder) = MockTarget::new();
        scene.initialize(Some(second_target), 1024, 768, Theme::Kawaii, &mut rng());

        scene.tick(0.016);
        assert_eq!(*first_recorder.draws.borrow(), 1);
        assert_eq!(*second_recorder.draws.borrow(), 0);
    }

    #[test]
    fn resize_yields_exact_aspect_ratio() {
        let (mut scene, _recorder) = active_scene();

        for (w, h) in [(1920u32, 1080u32), (1024, 768), (333, 777), (1, 1)] {
            scene.handle_resize(w, h);
            assert_eq!(scene.camera().aspect(), w as f32 / h as f32);
        }
    }

    #[test]
    fn resize_with_identical_dimensions_is_idempotent() {
        let (mut scene, recorder) = active_scene();

        scene.handle_resize(1024, 768);
        let aspect = scene.camera().aspect();

        scene.handle_resize(1024, 768);
        assert_eq!(scene.camera().aspect(), aspect);
        assert_eq!(recorder.resizes.borrow().len(), 1);
    }

    #[test]
    fn resize_ignores_zero_dimensions() {
        let (mut scene, recorder) = active_scene();
        let aspect = scene.camera().aspect();

        scene.handle_resize(0, 600);
        scene.handle_resize(800, 0);

        assert_eq!(scene.camera().aspect(), aspect);
        assert!(recorder.resizes.borrow().is_empty());
    }

    #[test]
    fn resize_before_initialize_is_a_noop() {
        let mut scene: SceneLifecycle<MockTarget> = SceneLifecycle::new();
        scene.handle_resize(1920, 1080);
        assert_eq!(scene.phase(), Phase::Uninitialized);
    }

    #[test]
    fn dispose_is_idempotent() {
        let (mut scene, _recorder) = active_scene();

        scene.dispose();
        assert_eq!(scene.phase(), Phase::Disposed);

        scene.dispose();
        assert_eq!(scene.phase(), Phase::Disposed);
        assert!(scene.objects().is_empty());
    }

    #[test]
    fn dispose_without_initialize_is_a_noop_teardown() {
        let mut scene: SceneLifecycle<MockTarget> = SceneLifecycle::new();
        scene.dispose();
        assert_eq!(scene.phase(), Phase::Disposed);

        // No way back out of Disposed
        let (target, recorder) = MockTarget::new();
        scene.initialize(Some(target), 800, 600, Theme::Terminal, &mut rng());
        assert_eq!(scene.phase(), Phase::Disposed);
        assert!(!scene.tick(0.016));
        assert_eq!(*recorder.draws.borrow(), 0);
    }

    #[test]
    fn no_tick_runs_after_dispose() {
        let (mut scene, recorder) = active_scene();

        assert!(scene.tick(0.016));
        assert!(scene.tick(0.016));
        assert_eq!(*recorder.draws.borrow(), 2);

        scene.dispose();

        // The reschedule flag is down, so nothing gets scheduled and any
        // stray invocation draws nothing.
        assert!(!scene.tick(0.016));
        assert!(!scene.tick(0.016));
        assert_eq!(*recorder.draws.borrow(), 2);
    }

    #[test]
    fn seeded_scenes_are_reproducible() {
        let (target_a, _) = MockTarget::new();
        let (target_b, _) = MockTarget::new();

        let mut a = SceneLifecycle::new();
        let mut b = SceneLifecycle::new();
        a.initialize(Some(target_a), 800, 600, Theme::Kawaii, &mut StdRng::seed_from_u64(99));
        b.initialize(Some(target_b), 800, 600, Theme::Kawaii, &mut StdRng::seed_from_u64(99));

        let positions_a: Vec<_> = a.objects().iter().map(|o| o.position).collect();
        let positions_b: Vec<_> = b.objects().iter().map(|o| o.position).collect();
        assert_eq!(positions_a, positions_b);
    }
}

/// Full mount/unmount scenarios: the loading gate and the scene run as
/// uncoordinated timelines on one virtual clock.
#[cfg(test)]
mod mount_scenarios {
    use super::*;

    // Exactly representable, so 128 frames sum to the 2 s delay on the dot
    const FRAME: f32 = 1.0 / 64.0;

    #[test]
    fn loading_flip_leaves_the_scene_untouched() {
        let (mut scene, recorder) = active_scene();
        let mut gate = LoadingGate::new();

        // Mount: placeholder state, scene already animating
        assert!(!gate.is_ready());
        assert_eq!(scene.phase(), Phase::Active);

        // Advance virtual time to just shy of the delay
        let mut ticks = 0;
        while ticks < 127 {
            gate.tick(FRAME);
            assert!(scene.tick(FRAME));
            ticks += 1;
        }
        assert!(!gate.is_ready());

        // The flip happens; the scene does not notice
        gate.tick(FRAME);
        assert!(gate.is_ready());
        assert_eq!(scene.phase(), Phase::Active);
        assert!(scene.tick(FRAME));

        // Unmount cancels both timelines in one pass
        scene.dispose();
        assert_eq!(scene.phase(), Phase::Disposed);
        let draws_at_unmount = *recorder.draws.borrow();
        assert!(!scene.tick(FRAME));
        assert_eq!(*recorder.draws.borrow(), draws_at_unmount);
    }

    #[test]
    fn unmount_before_the_delay_cancels_everything() {
        let (mut scene, recorder) = active_scene();
        let mut gate = LoadingGate::new();

        // Under a second in, then immediate unmount
        for _ in 0..50 {
            gate.tick(FRAME);
            scene.tick(FRAME);
        }
        assert!(!gate.is_ready());
        scene.dispose();

        // No post-unmount side effects: the timer never fires and no tick
        // executes afterward.
        let draws_at_unmount = *recorder.draws.borrow();
        assert!(!gate.is_ready());
        assert!(!scene.tick(FRAME));
        assert_eq!(*recorder.draws.borrow(), draws_at_unmount);
    }

    #[test]
    fn gate_opens_even_when_the_renderer_never_arrives() {
        // A mount whose surface creation failed: the manager stays
        // uninitialized, but the loading timeline runs on regardless and
        // the content view still appears on schedule.
        let mut scene: SceneLifecycle<MockTarget> = SceneLifecycle::new();
        scene.initialize(None, 800, 600, Theme::Terminal, &mut rng());
        assert_eq!(scene.phase(), Phase::Uninitialized);

        let mut gate = LoadingGate::new();
        for _ in 0..128 {
            gate.tick(FRAME);
            assert!(!scene.tick(FRAME));
        }

        assert!(gate.is_ready());
        assert_eq!(scene.phase(), Phase::Uninitialized);
    }
}
