//! Renderer seam between playback and presentation.

use crate::step::Step;

/// Consumer of replayed steps.
pub trait Renderer {
    /// Draw the effect of one step.
    fn on_step(&mut self, step: &Step);

    /// Return to the blank state shown before any step.
    fn on_reset(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_step(&mut self, step: &Step) {
        (**self).on_step(step);
    }

    fn on_reset(&mut self) {
        (**self).on_reset();
    }
}

/// Records every step it is shown.
impl Renderer for Vec<Step> {
    fn on_step(&mut self, step: &Step) {
        self.push(step.clone());
    }

    fn on_reset(&mut self) {
        self.clear();
    }
}
