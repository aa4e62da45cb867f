//! DelegatingControllerFactory — every operation forwards to a closure.

use crate::controller::Controller;
use crate::error::FactoryError;
use crate::factory::ControllerFactory;
use crate::request::RequestContext;
use crate::session::SessionStateBehavior;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type CreateFn = dyn Fn(&RequestContext, &str) -> Result<Option<Arc<dyn Controller>>, FactoryError>
    + Send
    + Sync;
type SessionFn = dyn Fn(&RequestContext, &str) -> SessionStateBehavior + Send + Sync;
type ReleaseFn = dyn Fn(Arc<dyn Controller>) + Send + Sync;

/// A factory whose behavior is supplied by closures.
///
/// By default it resolves nothing, reports [`SessionStateBehavior::ReadOnly`]
/// and ignores releases. Every `create_controller` call is counted so tests
/// can assert which factories were reached.
pub struct DelegatingControllerFactory {
    on_create: Box<CreateFn>,
    on_session: Box<SessionFn>,
    on_release: Box<ReleaseFn>,
    create_calls: AtomicUsize,
}

impl DelegatingControllerFactory {
    /// Create a factory that never resolves anything.
    pub fn new() -> Self {
        Self {
            on_create: Box::new(resolve_nothing),
            on_session: Box::new(read_only),
            on_release: Box::new(drop::<Arc<dyn Controller>>),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// A factory that always returns `controller`.
    pub fn returning(controller: Arc<dyn Controller>) -> Self {
        Self::new().on_create(move |_, _| Ok(Some(controller.clone())))
    }

    /// Replace the `create_controller` behavior.
    pub fn on_create<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestContext, &str) -> Result<Option<Arc<dyn Controller>>, FactoryError>
            + Send
            + Sync
            + 'static,
    {
        self.on_create = Box::new(f);
        self
    }

    /// Replace the `session_behavior` behavior.
    pub fn on_session<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestContext, &str) -> SessionStateBehavior + Send + Sync + 'static,
    {
        self.on_session = Box::new(f);
        self
    }

    /// Replace the `release_controller` behavior.
    pub fn on_release<F>(mut self, f: F) -> Self
    where
        F: Fn(Arc<dyn Controller>) + Send + Sync + 'static,
    {
        self.on_release = Box::new(f);
        self
    }

    /// Number of `create_controller` calls so far.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

fn resolve_nothing(
    _request: &RequestContext,
    _controller_name: &str,
) -> Result<Option<Arc<dyn Controller>>, FactoryError> {
    Ok(None)
}

fn read_only(_request: &RequestContext, _controller_name: &str) -> SessionStateBehavior {
    SessionStateBehavior::ReadOnly
}

impl Default for DelegatingControllerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerFactory for DelegatingControllerFactory {
    fn create_controller(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> Result<Option<Arc<dyn Controller>>, FactoryError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        (self.on_create)(request, controller_name)
    }

    fn session_behavior(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> SessionStateBehavior {
        (self.on_session)(request, controller_name)
    }

    fn release_controller(&self, controller: Arc<dyn Controller>) {
        (self.on_release)(controller)
    }
}
