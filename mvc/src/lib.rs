#![deny(missing_docs)]
//! # mvc — umbrella crate
//!
//! Single import surface for composable controller resolution. Re-exports
//! the protocol and the factory implementations behind feature flags, plus
//! a `prelude` for the common case.

pub use mvc_core;
#[cfg(feature = "composite")]
pub use mvc_composite;
#[cfg(feature = "static")]
pub use mvc_static;

/// Happy-path imports for wiring controller factories.
pub mod prelude {
    pub use mvc_core::{
        Controller, ControllerError, ControllerFactory, ControllerName, FactoryError,
        RequestContext, RequestId, SessionStateBehavior,
    };

    #[cfg(feature = "composite")]
    pub use mvc_composite::CompositeControllerFactory;

    #[cfg(feature = "static")]
    pub use mvc_static::{StaticControllerFactory, StaticFactoryConfig};
}
