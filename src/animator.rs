//! Frame loop around a [`ParticleField`].
//!
//! The loop is not a coroutine: every tick draws one frame and then asks the
//! scheduler for the next one, keeping the returned token so `stop` can
//! withdraw it.

use crate::field::{FrameStats, ParticleField};
use crate::surface::DrawSurface;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Host primitive that calls back once before the next repaint.
pub trait FrameScheduler {
    type Token: Copy;

    /// Requests the next tick. `None` when the host refused the request.
    fn schedule(&mut self) -> Option<Self::Token>;

    fn cancel(&mut self, token: Self::Token);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct Animator<D, S: FrameScheduler> {
    field: ParticleField,
    surface: D,
    scheduler: S,
    pending: Option<S::Token>,
    state: LoopState,
    frames: u64,
}

impl<D: DrawSurface, S: FrameScheduler> Animator<D, S> {
    pub fn new(field: ParticleField, surface: D, scheduler: S) -> Self {
        Animator {
            field,
            surface,
            scheduler,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Draws the first frame right away and schedules the next.
    pub fn start(&mut self) -> Option<FrameStats> {
        if self.state != LoopState::Idle {
            return None;
        }
        info!("Starting particle animation");
        self.run_frame()
    }

    /// Scheduled callback.
    pub fn tick(&mut self) -> Option<FrameStats> {
        if self.state != LoopState::Running {
            return None;
        }
        // The token that fired this tick is spent.
        self.pending = None;
        self.run_frame()
    }

    fn run_frame(&mut self) -> Option<FrameStats> {
        let stats = self.field.frame(&mut self.surface);
        self.frames += 1;
        self.pending = self.scheduler.schedule();
        self.state = if self.pending.is_some() {
            LoopState::Running
        } else {
            debug!(frame = self.frames, "Next frame not scheduled, animation idle");
            LoopState::Idle
        };
        Some(stats)
    }

    /// Cancels the pending frame. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
        info!(frames = self.frames, "Particle animation stopped");
        true
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

/// Slot shared between host callbacks. Empty until the animator is built.
pub type SharedAnimator<D, S> = Rc<RefCell<Option<Animator<D, S>>>>;

/// Runs one tick if the animator exists and is not already borrowed.
pub fn tick_shared<D: DrawSurface, S: FrameScheduler>(
    slot: &RefCell<Option<Animator<D, S>>>,
) -> bool {
    match slot.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(animator) => animator.tick().is_some(),
            None => false,
        },
        Err(_) => false,
    }
}

/// Resizes the field if the animator exists and is not already borrowed.
pub fn resize_shared<D: DrawSurface, S: FrameScheduler>(
    slot: &RefCell<Option<Animator<D, S>>>,
    width: f64,
    height: f64,
) -> bool {
    match slot.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(animator) => {
                animator.resize(width, height);
                true
            }
            None => false,
        },
        Err(_) => false,
    }
}
