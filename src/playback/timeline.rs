//! Position tracking over a precomputed step list

use super::PlaybackError;

/// A trace and the index of the step currently shown
#[derive(Debug, Clone)]
pub struct Timeline<S> {
    steps: Vec<S>,
    position: usize,
}

impl<S> Timeline<S> {
    pub fn new(steps: Vec<S>) -> Self {
        Timeline { steps, position: 0 }
    }

    /// Swap in a freshly generated trace and rewind
    pub fn replace(&mut self, steps: Vec<S>) {
        self.steps = steps;
        self.position = 0;
    }

    /// The step at the current position
    pub fn current(&self) -> Option<&S> {
        self.steps.get(self.position)
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.steps.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.steps.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.steps.len().saturating_sub(1);
    }

    pub fn seek(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.steps.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.position = index;
        Ok(())
    }
}
