//! Frame loop with an explicit start/stop handle

use crate::Simulation;
use particle_shapes::Canvas;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle for an [`AnimationLoop`].
///
/// Cheap to clone and `Send`, so whoever owns page navigation or the window
/// can stop the loop without holding the simulation.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn start(&self) {
        self.running.store(true, Ordering::Release);
    }
}

/// Drives a [`Simulation`] one tick per host frame while running.
pub struct AnimationLoop {
    simulation: Simulation,
    handle: LoopHandle,
    frames: u64,
}

impl AnimationLoop {
    /// Wrap a simulation. The loop starts stopped.
    pub fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            handle: LoopHandle::default(),
            frames: 0,
        }
    }

    /// Start (or resume) ticking and return a handle that can stop it.
    pub fn start(&mut self) -> LoopHandle {
        if !self.handle.is_running() {
            log::info!("{}: animation started", self.simulation.params().name);
        }
        self.handle.start();
        self.handle.clone()
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Run one frame if the loop is running.
    ///
    /// Returns whether the host should schedule another frame. A stopped
    /// loop leaves the simulation and the canvas untouched.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) -> bool {
        if !self.handle.is_running() {
            return false;
        }
        self.simulation.tick(canvas);
        self.frames += 1;
        true
    }

    /// Number of ticks run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.handle.stop();
    }
}
