//! Session-state requirements a controller can declare.

use serde::{Deserialize, Serialize};

/// What kind of session access the pipeline must provide while a
/// controller runs. The policy itself belongs to the host; factories
/// only report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStateBehavior {
    /// Let the host decide.
    #[default]
    Default,
    /// Full read/write session access.
    Required,
    /// Session is readable but not writable.
    ReadOnly,
    /// No session access.
    Disabled,
}
