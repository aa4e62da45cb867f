//! # mvc-core — Protocol traits for composable controller resolution
//!
//! This crate defines the boundary between a request-dispatch pipeline and
//! the components that turn a controller name into a handler.
//!
//! | Piece | Type | What it does |
//! |-------|------|-------------|
//! | Request | [`RequestContext`] | Everything known about the incoming request |
//! | Handler | [`Controller`] | Executes a request once resolved |
//! | Resolution | [`ControllerFactory`] | Turns `(request, name)` into a controller, or nothing |
//! | Session | [`SessionStateBehavior`] | What session access a controller needs |
//!
//! ## Design Principle
//!
//! [`ControllerFactory::create_controller`] returns `Ok(None)` when a factory
//! does not know the requested controller. "Not found" is a normal answer,
//! not an error, which is what lets factories be stacked: a composite asks
//! each factory in turn and keeps the first `Some`.
//!
//! Errors are reserved for factories that recognised the name and then
//! failed to build the controller. Those propagate unchanged.

#![deny(missing_docs)]

pub mod controller;
pub mod error;
pub mod factory;
pub mod id;
pub mod request;
pub mod session;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use controller::Controller;
pub use error::{ControllerError, FactoryError};
pub use factory::ControllerFactory;
pub use id::{ControllerName, RequestId};
pub use request::RequestContext;
pub use session::SessionStateBehavior;
