//! The request context handed to factories and controllers.

use crate::id::RequestId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything the dispatch pipeline knows about an incoming request.
///
/// Factories receive it by reference and may inspect it to decide whether
/// they can serve a controller. Nothing in this crate mutates it once
/// dispatch has started.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Identifier for correlating logs. None if the host does not assign one.
    pub request_id: Option<RequestId>,

    /// HTTP method, as sent by the client.
    pub method: String,

    /// Request path, without query string.
    pub path: String,

    /// Values extracted by routing (`controller`, `action`, `id`, ...).
    #[serde(default)]
    pub route_values: Map<String, Value>,

    /// Opaque metadata that passes through unchanged.
    #[serde(default)]
    pub metadata: Value,
}

impl RequestContext {
    /// Create a context for the given method and path.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            request_id: None,
            method: method.into(),
            path: path.into(),
            route_values: Map::new(),
            metadata: Value::Null,
        }
    }

    /// Set the request identifier.
    pub fn with_request_id(mut self, id: impl Into<RequestId>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Add a route value.
    pub fn with_route_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.route_values.insert(key.into(), value.into());
        self
    }

    /// Replace the metadata.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Look up a route value by key.
    pub fn route_value(&self, key: &str) -> Option<&Value> {
        self.route_values.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_fields() {
        let ctx = RequestContext::new("GET", "/home/index/7")
            .with_request_id("req-1")
            .with_route_value("controller", "Home")
            .with_route_value("id", 7)
            .with_metadata(json!({"trace_id": "abc"}));

        assert_eq!(ctx.method, "GET");
        assert_eq!(ctx.path, "/home/index/7");
        assert_eq!(ctx.request_id.as_ref().map(|id| id.as_str()), Some("req-1"));
        assert_eq!(ctx.route_value("controller"), Some(&json!("Home")));
        assert_eq!(ctx.route_value("id"), Some(&json!(7)));
        assert_eq!(ctx.route_value("action"), None);
        assert_eq!(ctx.metadata["trace_id"], "abc");
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let ctx: RequestContext = serde_json::from_value(json!({
            "request_id": null,
            "method": "POST",
            "path": "/orders"
        }))
        .unwrap();
        assert!(ctx.route_values.is_empty());
        assert!(ctx.metadata.is_null());
    }
}
