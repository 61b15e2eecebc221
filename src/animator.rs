//! Frame loop: drives a [`SceneCore`] from a host frame scheduler.
//!
//! The host offers one-shot frame callbacks (`requestAnimationFrame` in the
//! browser). [`SceneAnimator`] keeps exactly one request pending while it
//! runs: every callback draws one frame and requests the next. `stop()`
//! cancels the pending request, so the loop ends cleanly instead of
//! recurring for the life of the page.
//!
//! Scene, surface and scheduler live together behind an `Rc<RefCell<_>>`.
//! Pending callbacks hold only a `Weak`, so dropping the animator also ends
//! the loop.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use rand::Rng;
use rand::rngs::StdRng;

use crate::scene::SceneCore;
use crate::surface::Surface;

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Identifies a pending frame request so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("frame request refused: {0}")]
pub struct ScheduleError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimatorError {
    #[error("animation is already running")]
    AlreadyRunning,
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// One-shot frame scheduling, as `requestAnimationFrame` provides it.
pub trait FrameScheduler {
    /// Run `callback` once at the next frame.
    ///
    /// # Errors
    ///
    /// Fails if the host refuses the request.
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError>;

    /// Drop a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

// =============================================================
// Manual scheduler
// =============================================================

#[derive(Default)]
struct ManualQueue {
    next_id: i32,
    pending: VecDeque<(FrameHandle, FrameCallback)>,
    refuse: bool,
}

/// A scheduler driven by explicit timestamps instead of a display.
///
/// Clones share one queue, so a test can keep a clone and fire frames while
/// the animator owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Refuse every further request.
    pub fn refuse_requests(&self, refuse: bool) {
        self.queue.borrow_mut().refuse = refuse;
    }

    /// Fire every request pending right now with timestamp `now`.
    ///
    /// Requests made by the callbacks themselves wait for the next call.
    /// Returns how many callbacks ran.
    pub fn fire(&self, now: f64) -> usize {
        let due = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = due.len();
        for (_, callback) in due {
            callback(now);
        }
        count
    }

    /// Fire one frame every `step` ms, `frames` times, starting at `start + step`.
    pub fn run_frames(&self, start: f64, step: f64, frames: u32) -> f64 {
        let mut now = start;
        for _ in 0..frames {
            now += step;
            self.fire(now);
        }
        now
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, ScheduleError> {
        let mut queue = self.queue.borrow_mut();
        if queue.refuse {
            return Err(ScheduleError("manual scheduler refusing requests".to_owned()));
        }
        queue.next_id += 1;
        let handle = FrameHandle(queue.next_id);
        queue.pending.push_back((handle, callback));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.queue.borrow_mut().pending.retain(|(h, _)| *h != handle);
    }
}

// =============================================================
// Animator
// =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

struct Shared<S, F, R> {
    scene: SceneCore<R>,
    surface: S,
    scheduler: F,
    state: LoopState,
    pending: Option<FrameHandle>,
}

/// Loop controller owning the scene, its surface, and the frame scheduler.
pub struct SceneAnimator<S, F: FrameScheduler, R = StdRng> {
    shared: Rc<RefCell<Shared<S, F, R>>>,
}

impl<S, F, R> SceneAnimator<S, F, R>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
    R: Rng + 'static,
{
    #[must_use]
    pub fn new(scene: SceneCore<R>, surface: S, scheduler: F) -> Self {
        let shared = Shared { scene, surface, scheduler, state: LoopState::Idle, pending: None };
        Self { shared: Rc::new(RefCell::new(shared)) }
    }

    /// Initialize the scene, draw the first frame at timestamp 0, and start
    /// requesting frames. A stopped animator can be started again; the scene
    /// is regenerated and its clock rewound.
    ///
    /// # Errors
    ///
    /// [`AnimatorError::AlreadyRunning`] if the loop is running, or the
    /// scheduler's error if the first request is refused.
    pub fn run(&self) -> Result<(), AnimatorError> {
        {
            let mut guard = self.shared.borrow_mut();
            if guard.state == LoopState::Running {
                return Err(AnimatorError::AlreadyRunning);
            }
            let Shared { scene, surface, .. } = &mut *guard;
            scene.reset_timing();
            scene.initialize(surface);
            guard.state = LoopState::Running;
        }
        log::info!("sky animation started");
        Self::frame(&self.shared, 0.0).map_err(AnimatorError::from)
    }

    /// Cancel the pending frame and stop the loop. Safe to call repeatedly.
    pub fn stop(&self) {
        let mut guard = self.shared.borrow_mut();
        if let Some(handle) = guard.pending.take() {
            guard.scheduler.cancel_frame(handle);
        }
        if guard.state == LoopState::Running {
            log::info!("sky animation stopped after {} frames", guard.scene.frames);
        }
        guard.state = LoopState::Stopped;
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.shared.borrow().state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Inspect the scene.
    pub fn with_scene<T>(&self, f: impl FnOnce(&SceneCore<R>) -> T) -> T {
        f(&self.shared.borrow().scene)
    }

    /// Inspect the surface.
    pub fn with_surface<T>(&self, f: impl FnOnce(&mut S) -> T) -> T {
        f(&mut self.shared.borrow_mut().surface)
    }

    /// Draw one frame and request the next one.
    fn frame(shared: &Rc<RefCell<Shared<S, F, R>>>, now: f64) -> Result<(), ScheduleError> {
        let mut guard = shared.borrow_mut();
        if guard.state != LoopState::Running {
            return Ok(());
        }
        guard.pending = None;

        let Shared { scene, surface, .. } = &mut *guard;
        let report = scene.draw(now, surface);
        if report.spawned {
            log::debug!("frame {}: constellation respawned", scene.frames);
        }

        let weak: Weak<RefCell<Shared<S, F, R>>> = Rc::downgrade(shared);
        let callback: FrameCallback = Box::new(move |ts| {
            if let Some(shared) = weak.upgrade() {
                if let Err(err) = Self::frame(&shared, ts) {
                    log::error!("sky animation halted: {err}");
                }
            }
        });

        match guard.scheduler.request_frame(callback) {
            Ok(handle) => {
                guard.pending = Some(handle);
                Ok(())
            }
            Err(err) => {
                guard.state = LoopState::Stopped;
                Err(err)
            }
        }
    }
}

impl<S, F: FrameScheduler, R> Drop for SceneAnimator<S, F, R> {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.shared.try_borrow_mut() {
            if let Some(handle) = guard.pending.take() {
                guard.scheduler.cancel_frame(handle);
            }
            guard.state = LoopState::Stopped;
        }
    }
}
