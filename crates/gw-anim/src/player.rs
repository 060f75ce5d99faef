//! Externally owned playback state for a step list.
//!
//! The player holds the steps, the index of the next step and an optional
//! armed timer. It never sleeps by itself: [`StepPlayer::run`] asks a
//! [`Pacer`] to wait out each period, and a pacer that returns `false`
//! cancels playback.

use std::time::Duration;

use tracing::debug;

use crate::render::Renderer;
use crate::step::Step;

/// Period between steps when none is configured.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(700);

/// Waits out one timer period.
pub trait Pacer {
    /// Return `false` to cancel playback instead of taking the next step.
    fn wait(&mut self, period: Duration) -> bool;
}

/// Pacer backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, period: Duration) -> bool {
        std::thread::sleep(period);
        true
    }
}

impl<F: FnMut(Duration) -> bool> Pacer for F {
    fn wait(&mut self, period: Duration) -> bool {
        self(period)
    }
}

/// Handle of an armed periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    period: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct StepPlayer {
    steps: Vec<Step>,
    index: usize,
    timer: Option<Timer>,
}

impl StepPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    /// Install a step list if none is loaded. Returns whether it was taken.
    pub fn load(&mut self, steps: Vec<Step>) -> bool {
        if !self.steps.is_empty() {
            return false;
        }
        self.steps = steps;
        self.index = 0;
        true
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_loaded(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Index of the next step to render.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Period of the armed timer.
    pub fn period(&self) -> Option<Duration> {
        self.timer.map(|t| t.period)
    }

    /// Render the next step. Returns whether more steps remain after it.
    pub fn step_once<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        let Some(step) = self.steps.get(self.index) else {
            return false;
        };
        renderer.on_step(step);
        self.index += 1;
        self.index < self.steps.len()
    }

    /// Arm the timer. Does nothing if it is already armed.
    pub fn start(&mut self, period: Duration) -> bool {
        if self.timer.is_some() {
            return false;
        }
        debug!(period_ms = period.as_millis() as u64, "playback armed");
        self.timer = Some(Timer { period });
        true
    }

    /// Disarm the timer, keeping steps and position.
    pub fn pause(&mut self) {
        if self.timer.take().is_some() {
            debug!(index = self.index, "playback paused");
        }
    }

    /// Disarm, drop the steps, rewind, and blank the renderer.
    pub fn reset<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.timer = None;
        self.steps.clear();
        self.index = 0;
        renderer.on_reset();
        debug!("playback reset");
    }

    /// Drive the armed timer until the steps run out or the pacer cancels.
    ///
    /// Each tick waits one period and then renders one step, so the first
    /// step appears after a full period. Returns the number of steps
    /// rendered.
    pub fn run<R, P>(&mut self, renderer: &mut R, pacer: &mut P) -> usize
    where
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        let before = self.index;
        while let Some(timer) = self.timer {
            if !pacer.wait(timer.period) {
                self.pause();
                break;
            }
            if !self.step_once(renderer) {
                self.timer = None;
                debug!(index = self.index, "playback finished");
            }
        }
        self.index - before
    }
}
