//! The controller-resolution protocol.

use crate::controller::Controller;
use crate::error::FactoryError;
use crate::request::RequestContext;
use crate::session::SessionStateBehavior;
use std::sync::Arc;

/// Resolve a controller by name for a given request.
///
/// Implementations range from a static name table to a DI container
/// adapter to a composite that asks other factories. Callers can't tell
/// the difference, which is the point: anything that accepts a
/// `ControllerFactory` accepts a composite of them too.
pub trait ControllerFactory: Send + Sync {
    /// Try to produce the named controller.
    ///
    /// Returns `Ok(None)` when this factory does not know `controller_name`.
    /// Returns `Err` only when the name was recognised but construction
    /// failed, or the arguments are unusable.
    fn create_controller(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> Result<Option<Arc<dyn Controller>>, FactoryError>;

    /// Session access the named controller needs.
    fn session_behavior(
        &self,
        _request: &RequestContext,
        _controller_name: &str,
    ) -> SessionStateBehavior {
        SessionStateBehavior::Default
    }

    /// Hand a controller back once the request is finished.
    /// The default drops this factory's reference.
    fn release_controller(&self, controller: Arc<dyn Controller>) {
        drop(controller);
    }
}

impl<T: ControllerFactory + ?Sized> ControllerFactory for Arc<T> {
    fn create_controller(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> Result<Option<Arc<dyn Controller>>, FactoryError> {
        (**self).create_controller(request, controller_name)
    }

    fn session_behavior(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> SessionStateBehavior {
        (**self).session_behavior(request, controller_name)
    }

    fn release_controller(&self, controller: Arc<dyn Controller>) {
        (**self).release_controller(controller)
    }
}

impl<T: ControllerFactory + ?Sized> ControllerFactory for Box<T> {
    fn create_controller(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> Result<Option<Arc<dyn Controller>>, FactoryError> {
        (**self).create_controller(request, controller_name)
    }

    fn session_behavior(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> SessionStateBehavior {
        (**self).session_behavior(request, controller_name)
    }

    fn release_controller(&self, controller: Arc<dyn Controller>) {
        (**self).release_controller(controller)
    }
}
