//! Target environment specifications handed to `@babel/preset-env`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shorthand accepted on the command line for the current Node.js runtime.
pub const CURRENT_NODE_SHORTHAND: &str = "node:current";

/// Which runtimes the emitted code must support.
///
/// Mirrors the shapes `@babel/preset-env` accepts for its `targets` option:
/// a browserslist query string, a list of queries, or an explicit
/// environment-to-version map such as `{"node": "current"}`. Any other JSON
/// (`{"chrome": 58}`, `{"esmodules": true}`) is carried through untouched in
/// [`Targets::Other`] for preset-env to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Targets {
    Query(String),
    Queries(Vec<String>),
    Environments(BTreeMap<String, String>),
    Other(Value),
}

impl Targets {
    /// The "current runtime" marker: `{"node": "current"}`.
    pub fn current_node() -> Self {
        let mut envs = BTreeMap::new();
        envs.insert("node".to_string(), "current".to_string());
        Targets::Environments(envs)
    }

    pub fn is_current_node(&self) -> bool {
        match self {
            Targets::Environments(envs) => {
                envs.len() == 1 && envs.get("node").map(String::as_str) == Some("current")
            }
            _ => false,
        }
    }

    /// Empty queries carry no information and are treated as "not supplied".
    pub fn is_empty(&self) -> bool {
        match self {
            Targets::Query(query) => query.is_empty(),
            Targets::Queries(queries) => queries.is_empty(),
            Targets::Environments(envs) => envs.is_empty(),
            Targets::Other(value) => match value {
                Value::Null => true,
                Value::Array(items) => items.is_empty(),
                Value::Object(map) => map.is_empty(),
                _ => false,
            },
        }
    }

    /// Map the `node:current` shorthand to [`Targets::current_node`].
    ///
    /// Option files and environment variables can only carry strings, so the
    /// shorthand is accepted there the same way the `--targets` flag accepts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fob_babel::Targets;
    ///
    /// assert!(Targets::from("node:current").normalized().is_current_node());
    /// assert_eq!(Targets::from("ie 11").normalized(), Targets::from("ie 11"));
    /// ```
    pub fn normalized(self) -> Self {
        match self {
            Targets::Query(query) if query.trim() == CURRENT_NODE_SHORTHAND => {
                Targets::current_node()
            }
            other => other,
        }
    }

    /// Build targets from command-line style values.
    ///
    /// `node:current` maps to the current runtime marker, a single value becomes
    /// a query string and several values become a query list.
    pub fn from_values<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.trim().is_empty())
            .collect();

        match values.len() {
            0 => None,
            1 => values.pop().map(|v| Targets::Query(v).normalized()),
            _ => Some(Targets::Queries(values)),
        }
    }
}

impl From<&str> for Targets {
    fn from(query: &str) -> Self {
        Targets::Query(query.to_string())
    }
}
