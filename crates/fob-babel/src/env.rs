//! Process environment boundary.
//!
//! Environment variables are read exactly once, here, and turned into a
//! [`BuildEnv`] value. Everything downstream works on that value so the
//! selection logic stays testable without touching the process environment.

/// Variables consulted for test mode, first non-empty value wins.
pub const TEST_MODE_VARS: [&str; 2] = ["BABEL_ENV", "NODE_ENV"];

/// Variable that overrides the build stage when no explicit stage is passed.
pub const STAGE_VAR: &str = "FOB_BUILD_STAGE";

/// Environment-derived inputs to preset assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    /// Running under a test runner (`BABEL_ENV`/`NODE_ENV` is `test`)
    pub test_mode: bool,
    /// Stage label from `FOB_BUILD_STAGE`, if set and non-empty
    pub stage: Option<String>,
}

impl BuildEnv {
    /// Resolve from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve using an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use fob_babel::BuildEnv;
    ///
    /// let env = BuildEnv::from_lookup(|name| match name {
    ///     "NODE_ENV" => Some("test".to_string()),
    ///     "FOB_BUILD_STAGE" => Some("develop".to_string()),
    ///     _ => None,
    /// });
    /// assert!(env.test_mode);
    /// assert_eq!(env.stage.as_deref(), Some("develop"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let test_mode = TEST_MODE_VARS
            .into_iter()
            .find_map(|name| non_empty(name))
            .is_some_and(|v| v == "test");

        let env = Self {
            test_mode,
            stage: non_empty(STAGE_VAR),
        };
        tracing::trace!(test_mode = env.test_mode, stage = ?env.stage, "resolved build environment");
        env
    }

    /// A test-mode environment with no stage override.
    pub fn test() -> Self {
        Self {
            test_mode: true,
            stage: None,
        }
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }
}
