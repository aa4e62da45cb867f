//! The handler produced by a successful resolution.

use crate::error::ControllerError;
use crate::request::RequestContext;

/// A request handler. Opaque to everything that resolves it.
///
/// Controllers are handed around as `Arc<dyn Controller>` so that the
/// caller, the factory that built it, and any release logic can share one
/// instance and compare identity with [`std::sync::Arc::ptr_eq`].
pub trait Controller: Send + Sync {
    /// Handle the request.
    fn execute(&self, request: &RequestContext) -> Result<(), ControllerError>;
}
