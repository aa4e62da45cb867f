#![deny(missing_docs)]
//! Composite controller factory.
//!
//! [`CompositeControllerFactory`] holds an ordered list of
//! [`ControllerFactory`] implementations and is one itself. Resolution asks
//! each factory in order and returns the first controller produced. Later
//! factories are not consulted once one answers, and an error from any
//! factory is returned as-is.
//!
//! Because the composite implements the same trait it consumes, composites
//! nest: a composite can be a member of another composite.
//!
//! ```rust,ignore
//! let factory = CompositeControllerFactory::new(vec![plugins, defaults]);
//! let controller = factory.create_controller(&request, "Home")?;
//! ```

use mvc_core::{Controller, ControllerFactory, FactoryError, RequestContext};
use std::sync::Arc;

/// Tries factories in order until one produces a controller.
///
/// The factory list is fixed once the composite is built. An empty list is
/// valid and resolves nothing.
#[derive(Clone, Default)]
pub struct CompositeControllerFactory {
    factories: Vec<Arc<dyn ControllerFactory>>,
}

impl CompositeControllerFactory {
    /// Create a composite over the given factories, in order.
    pub fn new(factories: Vec<Arc<dyn ControllerFactory>>) -> Self {
        Self { factories }
    }

    /// Create a composite from any finite sequence of factories.
    /// The sequence is consumed once, here.
    pub fn from_factories<I>(factories: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ControllerFactory>>,
    {
        Self {
            factories: factories.into_iter().collect(),
        }
    }

    /// Like [`new`](Self::new), for callers whose list may be absent.
    ///
    /// Returns [`FactoryError::InvalidArgument`] when `factories` is `None`.
    pub fn try_new(
        factories: Option<Vec<Arc<dyn ControllerFactory>>>,
    ) -> Result<Self, FactoryError> {
        factories
            .map(Self::new)
            .ok_or_else(|| FactoryError::InvalidArgument("factories".into()))
    }

    /// Like [`from_factories`](Self::from_factories), for callers whose
    /// sequence may be absent.
    ///
    /// Returns [`FactoryError::InvalidArgument`] when `factories` is `None`.
    pub fn try_from_factories<I>(factories: Option<I>) -> Result<Self, FactoryError>
    where
        I: IntoIterator<Item = Arc<dyn ControllerFactory>>,
    {
        factories
            .map(Self::from_factories)
            .ok_or_else(|| FactoryError::InvalidArgument("factories".into()))
    }

    /// Append a factory while building the composite.
    pub fn with_factory(mut self, factory: Arc<dyn ControllerFactory>) -> Self {
        self.factories.push(factory);
        self
    }

    /// The factories, in the order they are consulted.
    pub fn factories(&self) -> &[Arc<dyn ControllerFactory>] {
        &self.factories
    }

    /// Number of factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if the composite holds no factories.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl FromIterator<Arc<dyn ControllerFactory>> for CompositeControllerFactory {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ControllerFactory>>>(iter: I) -> Self {
        Self::from_factories(iter)
    }
}

impl std::fmt::Debug for CompositeControllerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeControllerFactory")
            .field("factories", &self.factories.len())
            .finish()
    }
}

impl ControllerFactory for CompositeControllerFactory {
    fn create_controller(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> Result<Option<Arc<dyn Controller>>, FactoryError> {
        for (index, factory) in self.factories.iter().enumerate() {
            tracing::trace!(index, controller = controller_name, "asking factory");
            if let Some(controller) = factory.create_controller(request, controller_name)? {
                tracing::debug!(index, controller = controller_name, "controller resolved");
                return Ok(Some(controller));
            }
        }
        tracing::debug!(
            factories = self.factories.len(),
            controller = controller_name,
            "no factory resolved controller"
        );
        Ok(None)
    }
}
