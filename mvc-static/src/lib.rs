#![deny(missing_docs)]
//! Name-table controller factory.
//!
//! [`StaticControllerFactory`] maps controller names to constructor
//! closures. Names are normalized before lookup according to
//! [`StaticFactoryConfig`]: by default matching ignores ASCII case and a
//! trailing `Controller` suffix, so `"home"`, `"Home"` and `"HomeController"`
//! all reach the same registration.
//!
//! Unknown names resolve to `Ok(None)`, which makes this factory a natural
//! leaf inside a composite.

use mvc_core::{
    Controller, ControllerFactory, FactoryError, RequestContext, SessionStateBehavior,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// How registered names and requested names are matched.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticFactoryConfig {
    /// Ignore ASCII case when matching names.
    pub case_insensitive: bool,
    /// Suffix removed from names before matching. None keeps names as-is.
    pub strip_suffix: Option<String>,
}

impl Default for StaticFactoryConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            strip_suffix: Some("Controller".into()),
        }
    }
}

impl StaticFactoryConfig {
    /// Exact matching: case-sensitive, no suffix stripping.
    pub fn exact() -> Self {
        Self {
            case_insensitive: false,
            strip_suffix: None,
        }
    }

    /// Set case-insensitive matching.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Set the suffix to strip.
    pub fn with_strip_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.strip_suffix = Some(suffix.into());
        self
    }

    /// Normalize a controller name for lookup.
    ///
    /// The suffix is only stripped when something remains, so a controller
    /// literally named `Controller` stays reachable.
    pub fn normalize(&self, name: &str) -> String {
        let mut base = name;
        if let Some(suffix) = self.strip_suffix.as_deref().filter(|s| !s.is_empty()) {
            if name.len() > suffix.len() && name.is_char_boundary(name.len() - suffix.len()) {
                let (head, tail) = name.split_at(name.len() - suffix.len());
                let matches = if self.case_insensitive {
                    tail.eq_ignore_ascii_case(suffix)
                } else {
                    tail == suffix
                };
                if matches {
                    base = head;
                }
            }
        }
        if self.case_insensitive {
            base.to_ascii_lowercase()
        } else {
            base.to_owned()
        }
    }
}

type Constructor = dyn Fn(&RequestContext) -> Arc<dyn Controller> + Send + Sync;

/// A factory backed by a fixed table of named constructors.
pub struct StaticControllerFactory {
    config: StaticFactoryConfig,
    constructors: HashMap<String, Arc<Constructor>>,
    sessions: HashMap<String, SessionStateBehavior>,
}

impl StaticControllerFactory {
    /// Create an empty factory with the given matching rules.
    pub fn new(config: StaticFactoryConfig) -> Self {
        Self {
            config,
            constructors: HashMap::new(),
            sessions: HashMap::new(),
        }
    }

    /// Register a constructor under `name`. A later registration for the
    /// same normalized name replaces the earlier one.
    pub fn register<F>(mut self, name: impl AsRef<str>, constructor: F) -> Self
    where
        F: Fn(&RequestContext) -> Arc<dyn Controller> + Send + Sync + 'static,
    {
        let key = self.config.normalize(name.as_ref());
        self.constructors.insert(key, Arc::new(constructor));
        self
    }

    /// Declare the session behavior reported for `name`.
    pub fn with_session_behavior(
        mut self,
        name: impl AsRef<str>,
        behavior: SessionStateBehavior,
    ) -> Self {
        let key = self.config.normalize(name.as_ref());
        self.sessions.insert(key, behavior);
        self
    }

    /// The matching rules in effect.
    pub fn config(&self) -> &StaticFactoryConfig {
        &self.config
    }

    /// Registered names after normalization, sorted.
    pub fn controller_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for StaticControllerFactory {
    fn default() -> Self {
        Self::new(StaticFactoryConfig::default())
    }
}

impl std::fmt::Debug for StaticControllerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticControllerFactory")
            .field("config", &self.config)
            .field("controllers", &self.controller_names())
            .finish()
    }
}

impl ControllerFactory for StaticControllerFactory {
    fn create_controller(
        &self,
        request: &RequestContext,
        controller_name: &str,
    ) -> Result<Option<Arc<dyn Controller>>, FactoryError> {
        if controller_name.is_empty() {
            return Err(FactoryError::InvalidArgument("controller_name".into()));
        }
        let key = self.config.normalize(controller_name);
        match self.constructors.get(&key) {
            Some(constructor) => {
                tracing::debug!(controller = controller_name, key = %key, "static lookup hit");
                Ok(Some(constructor(request)))
            }
            None => {
                tracing::trace!(controller = controller_name, key = %key, "static lookup miss");
                Ok(None)
            }
        }
    }

    fn session_behavior(
        &self,
        _request: &RequestContext,
        controller_name: &str,
    ) -> SessionStateBehavior {
        self.sessions
            .get(&self.config.normalize(controller_name))
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvc_core::test_utils::StubController;
    use serde_json::json;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn object_safety() {
        _assert_send_sync::<StaticControllerFactory>();
        let _: Arc<dyn ControllerFactory> = Arc::new(StaticControllerFactory::default());
    }

    fn stub(label: &'static str) -> impl Fn(&RequestContext) -> Arc<dyn Controller> + Send + Sync {
        move |_: &RequestContext| Arc::new(StubController::new(label)) as Arc<dyn Controller>
    }

    fn request() -> RequestContext {
        RequestContext::new("GET", "/")
    }

    #[test]
    fn default_config_ignores_case_and_suffix() {
        let config = StaticFactoryConfig::default();
        assert_eq!(config.normalize("Home"), "home");
        assert_eq!(config.normalize("HomeController"), "home");
        assert_eq!(config.normalize("homecontroller"), "home");
        assert_eq!(config.normalize("Controller"), "controller");
    }

    #[test]
    fn exact_config_keeps_names() {
        let config = StaticFactoryConfig::exact();
        assert_eq!(config.normalize("HomeController"), "HomeController");
        assert_eq!(config.normalize("home"), "home");
    }

    #[test]
    fn case_sensitive_suffix_must_match_exactly() {
        let config = StaticFactoryConfig::exact().with_strip_suffix("Controller");
        assert_eq!(config.normalize("HomeController"), "Home");
        assert_eq!(config.normalize("Homecontroller"), "Homecontroller");
    }

    #[test]
    fn suffix_strip_respects_char_boundaries() {
        let config = StaticFactoryConfig::default().with_strip_suffix("é");
        assert_eq!(config.normalize("Café"), "caf");
        assert_eq!(config.normalize("日本"), "日本");
    }

    #[test]
    fn resolves_registered_names_in_any_form() {
        let factory = StaticControllerFactory::default().register("HomeController", stub("home"));
        for name in ["Home", "home", "HOME", "HomeController"] {
            assert!(
                factory.create_controller(&request(), name).unwrap().is_some(),
                "{name} should resolve"
            );
        }
    }

    #[test]
    fn unknown_name_is_none() {
        let factory = StaticControllerFactory::default().register("Home", stub("home"));
        assert!(factory.create_controller(&request(), "About").unwrap().is_none());
    }

    #[test]
    fn empty_name_is_invalid_argument() {
        let factory = StaticControllerFactory::default();
        let Err(err) = factory.create_controller(&request(), "") else {
            panic!("expected an error");
        };
        assert!(matches!(err, FactoryError::InvalidArgument(ref arg) if arg == "controller_name"));
    }

    #[test]
    fn constructor_receives_request() {
        let factory =
            StaticControllerFactory::default().register("Echo", |request: &RequestContext| {
                let label = request.path.clone();
                Arc::new(StubController::new(label)) as Arc<dyn Controller>
            });
        let ctx = RequestContext::new("GET", "/echo/here");
        let controller = factory.create_controller(&ctx, "Echo").unwrap();
        assert!(controller.is_some());
    }

    #[test]
    fn each_resolution_builds_a_new_controller() {
        let factory = StaticControllerFactory::default().register("Home", stub("home"));
        let a = factory.create_controller(&request(), "Home").unwrap().unwrap();
        let b = factory.create_controller(&request(), "Home").unwrap().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let shared: Arc<dyn Controller> = Arc::new(StubController::new("second"));
        let returned = shared.clone();
        let factory = StaticControllerFactory::default()
            .register("Home", stub("first"))
            .register("HomeController", move |_: &RequestContext| returned.clone());

        let resolved = factory.create_controller(&request(), "home").unwrap().unwrap();
        assert!(Arc::ptr_eq(&resolved, &shared));
        assert_eq!(factory.controller_names(), vec!["home"]);
    }

    #[test]
    fn session_behavior_per_controller() {
        let factory = StaticControllerFactory::default()
            .register("Cart", stub("cart"))
            .with_session_behavior("CartController", SessionStateBehavior::Required);

        assert_eq!(
            factory.session_behavior(&request(), "cart"),
            SessionStateBehavior::Required
        );
        assert_eq!(
            factory.session_behavior(&request(), "Home"),
            SessionStateBehavior::Default
        );
    }

    #[test]
    fn controller_names_are_sorted() {
        let factory = StaticControllerFactory::new(StaticFactoryConfig::exact())
            .register("Orders", stub("orders"))
            .register("Account", stub("account"))
            .register("Home", stub("home"));
        assert_eq!(factory.controller_names(), vec!["Account", "Home", "Orders"]);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: StaticFactoryConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, StaticFactoryConfig::default());

        let config: StaticFactoryConfig = serde_json::from_value(json!({
            "case_insensitive": false,
            "strip_suffix": null
        }))
        .unwrap();
        assert_eq!(config, StaticFactoryConfig::exact());

        let config: StaticFactoryConfig =
            serde_json::from_value(json!({"strip_suffix": "Handler"})).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.normalize("UsersHandler"), "users");
    }
}
