//! StubController — a labelled controller that counts executions.

use crate::controller::Controller;
use crate::error::ControllerError;
use crate::request::RequestContext;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A controller that does nothing but remember how often it ran.
/// The label makes assertion failures readable.
#[derive(Debug)]
pub struct StubController {
    label: String,
    executions: AtomicUsize,
}

impl StubController {
    /// Create a stub with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            executions: AtomicUsize::new(0),
        }
    }

    /// The label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// How many times `execute` was called.
    pub fn executions(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }
}

impl Controller for StubController {
    fn execute(&self, _request: &RequestContext) -> Result<(), ControllerError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
