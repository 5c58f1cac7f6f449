/// Source of the "next frame" signal.
///
/// On the desktop this asks the window for a redraw; tests substitute a
/// counter so the loop can be stepped by hand.
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// The work done in one loop iteration.
pub trait Frame {
    /// Advance camera controls by one frame.
    fn update_controls(&mut self);

    /// Draw the scene from the current camera.
    fn draw(&mut self);
}

/// Continuous render loop driven by an injected scheduler.
///
/// Each iteration updates controls, draws, then schedules the next
/// iteration. While paused, iterations still run when invoked but no next
/// frame is requested.
#[derive(Debug)]
pub struct RenderLoop<S> {
    scheduler: S,
    frames: u64,
    paused: bool,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            frames: 0,
            paused: false,
        }
    }

    /// Request the first frame.
    pub fn start(&self) {
        tracing::debug!("render loop started");
        self.scheduler.request_frame();
    }

    /// Run one iteration and schedule the next unless paused.
    pub fn frame<F: Frame + ?Sized>(&mut self, frame: &mut F) {
        self.step(frame);
        if !self.paused {
            self.scheduler.request_frame();
        }
    }

    /// Run one iteration without scheduling another.
    pub fn step<F: Frame + ?Sized>(&mut self, frame: &mut F) {
        frame.update_controls();
        frame.draw();
        self.frames += 1;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Leave the paused state and request a frame to restart the cycle.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.scheduler.request_frame();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Iterations run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
