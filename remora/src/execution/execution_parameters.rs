//! This module defines [ExecutionParameters].

/// External parameters affecting the execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionParameters {
    /// Upper bound on the number of rule applications,
    /// as a defensive measure against configuration mistakes.
    /// Termination is guaranteed even without a limit,
    /// since the derivable facts are drawn from a finite universe.
    pub(crate) max_steps: Option<usize>,
}

impl ExecutionParameters {
    /// Set the maximal number of rule applications.
    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = Some(max_steps);
    }
}
