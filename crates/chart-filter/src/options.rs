// File: crates/chart-filter/src/options.rs
// Summary: Plot options consumed by plugins; the string-valued `filter` switch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Value of the `filter` option. Only `"average"` enables filtering; any
/// other value, including the empty default or a non-string, leaves series untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum FilterMode {
    #[default]
    Disabled,
    Average,
}

impl FilterMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Disabled => "",
            FilterMode::Average => "average",
        }
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, FilterMode::Average)
    }
}

impl From<&str> for FilterMode {
    fn from(s: &str) -> Self {
        if s == "average" { FilterMode::Average } else { FilterMode::Disabled }
    }
}

impl From<String> for FilterMode {
    fn from(s: String) -> Self { FilterMode::from(s.as_str()) }
}

impl From<serde_json::Value> for FilterMode {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => FilterMode::from(s.as_str()),
            _ => FilterMode::Disabled,
        }
    }
}

impl From<FilterMode> for String {
    fn from(m: FilterMode) -> Self { m.as_str().to_string() }
}

impl FromStr for FilterMode {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> { Ok(FilterMode::from(s)) }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Host plot options. Passed by value into the chart; never mutated by plugins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub filter: FilterMode,
}

impl PlotOptions {
    pub fn with_filter(filter: impl Into<FilterMode>) -> Self {
        Self { filter: filter.into() }
    }

    /// Parse a host option object such as `{"filter": "average"}`.
    /// Unknown keys are ignored.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
