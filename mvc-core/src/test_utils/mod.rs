//! Hand-written test doubles.
//!
//! Available behind the `test-utils` feature flag. These are minimal
//! implementations that make factory compositions easy to exercise.

mod delegating_factory;
mod stub_controller;

pub use delegating_factory::DelegatingControllerFactory;
pub use stub_controller::StubController;
