//! Build stage labels.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Phase of the site build a transform configuration is assembled for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BuildStage {
    /// Development server
    Develop,
    /// Production static HTML render
    BuildHtml,
    /// Production client bundle
    BuildJavascript,
    /// Test runner
    #[default]
    Test,
    /// Any label the build tool supplies that isn't known here
    Other(String),
}

impl BuildStage {
    pub fn as_str(&self) -> &str {
        match self {
            BuildStage::Develop => "develop",
            BuildStage::BuildHtml => "build-html",
            BuildStage::BuildJavascript => "build-javascript",
            BuildStage::Test => "test",
            BuildStage::Other(label) => label,
        }
    }

    /// Stages that execute in the current Node.js process rather than a browser.
    pub fn targets_current_runtime(&self) -> bool {
        matches!(self, BuildStage::BuildHtml | BuildStage::Test)
    }
}

impl FromStr for BuildStage {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "develop" => BuildStage::Develop,
            "build-html" => BuildStage::BuildHtml,
            "build-javascript" => BuildStage::BuildJavascript,
            "test" => BuildStage::Test,
            other => BuildStage::Other(other.to_string()),
        })
    }
}

impl From<&str> for BuildStage {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(stage) => stage,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BuildStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BuildStage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(BuildStage::from(label.as_str()))
    }
}
